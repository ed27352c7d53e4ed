//! Event registry.
//!
//! The registry is the explicit dispatcher every entity is registered into at
//! construction. It owns one [`HandlerTable`] per topic and issues entity IDs,
//! so handler keys derived from those IDs never collide unless a caller
//! assigns an ID twice on purpose.

use crate::board::BoardGrid;
use crate::core::{EntityId, RegistryError};
use crate::entity::EntityBase;

use super::pointer::ClickEvent;
use super::table::HandlerTable;
use super::{BOARD_PREPARE, CANVAS_CLICK};

/// What a handler wants done with itself after running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HandlerStatus {
    /// Stay installed.
    #[default]
    Keep,
    /// Uninstall after this dispatch (one-shot hooks, dropped entities).
    Remove,
}

/// Handler installed under `canvas.click`.
pub type ClickHandler = dyn FnMut(&ClickEvent) -> HandlerStatus;

/// Handler installed under `board.prepare`.
///
/// Receives the board being prepared and the registry, so it can spawn
/// entities (which register their own click handlers).
pub type PrepareHandler = dyn FnMut(&mut dyn BoardGrid, &mut EventRegistry) -> HandlerStatus;

/// Registry of named event handlers.
#[derive(Debug)]
pub struct EventRegistry {
    click: HandlerTable<ClickHandler>,
    prepare: HandlerTable<PrepareHandler>,

    /// Next entity ID to issue. Wider than `EntityId` so reserving
    /// `u32::MAX` leaves the counter one past the last valid ID.
    next_id: u64,
}

impl Default for EventRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EventRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            click: HandlerTable::new(CANVAS_CLICK),
            prepare: HandlerTable::new(BOARD_PREPARE),
            next_id: 0,
        }
    }

    /// Issue a fresh entity ID.
    ///
    /// Fails once every `u32` ID has been issued or reserved.
    pub fn issue_id(&mut self) -> Result<EntityId, RegistryError> {
        let raw = u32::try_from(self.next_id).map_err(|_| RegistryError::IdsExhausted)?;
        self.next_id += 1;
        Ok(EntityId::new(raw))
    }

    /// Record a caller-assigned ID so later issued IDs don't reuse it.
    pub fn reserve_id(&mut self, id: EntityId) {
        let after = u64::from(id.0) + 1;
        if after > self.next_id {
            self.next_id = after;
        }
    }

    /// Handlers for `canvas.click`.
    #[must_use]
    pub fn click_handlers(&self) -> &HandlerTable<ClickHandler> {
        &self.click
    }

    /// Mutable handlers for `canvas.click`.
    pub fn click_handlers_mut(&mut self) -> &mut HandlerTable<ClickHandler> {
        &mut self.click
    }

    /// Handlers for `board.prepare`.
    #[must_use]
    pub fn prepare_handlers(&self) -> &HandlerTable<PrepareHandler> {
        &self.prepare
    }

    /// Mutable handlers for `board.prepare`.
    pub fn prepare_handlers_mut(&mut self) -> &mut HandlerTable<PrepareHandler> {
        &mut self.prepare
    }

    /// Remove an entity's click handler.
    pub fn unregister_entity(&mut self, entity: &EntityBase) -> Result<(), RegistryError> {
        self.click.unregister(&entity.name).map(drop)
    }

    /// Invoke every click handler with the event.
    ///
    /// Each handler performs its own hit test. Handlers returning
    /// [`HandlerStatus::Remove`] (those of dropped entities) are uninstalled.
    pub fn dispatch_click(&mut self, event: &ClickEvent) {
        tracing::trace!(?event, handlers = self.click.len(), "dispatching canvas.click");

        let mut stale = Vec::new();
        for (key, handler) in self.click.iter_mut() {
            if handler(event) == HandlerStatus::Remove {
                stale.push(key.to_string());
            }
        }

        if !stale.is_empty() {
            tracing::debug!(count = stale.len(), "pruning stale click handlers");
            self.click.retain(|key| !stale.iter().any(|s| s == key));
        }
    }

    /// Run every board preparation hook against a board.
    ///
    /// Hooks returning [`HandlerStatus::Remove`] are one-shot and are
    /// uninstalled afterwards; the rest stay for the next preparation. Hooks
    /// installed while preparing do not run until the next preparation.
    pub fn prepare_board(&mut self, board: &mut dyn BoardGrid) {
        let mut running = std::mem::replace(&mut self.prepare, HandlerTable::new(BOARD_PREPARE));
        tracing::debug!(hooks = running.len(), "preparing board");

        let mut finished = Vec::new();
        for (key, hook) in running.iter_mut() {
            tracing::trace!(key, "running board.prepare hook");
            if hook(&mut *board, self) == HandlerStatus::Remove {
                finished.push(key.to_string());
            }
        }
        running.retain(|key| !finished.iter().any(|f| f == key));

        let added = std::mem::replace(&mut self.prepare, running);
        for (key, hook) in added.into_entries() {
            self.prepare.set(key, hook);
        }
    }

    /// Drop every handler on every topic. Issued IDs are not reused.
    pub fn clear(&mut self) {
        self.click.clear();
        self.prepare.clear();
    }
}
