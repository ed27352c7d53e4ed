//! Renderable, clickable entities.
//!
//! Every entity carries an [`EntityBase`] and implements [`Entity`]. Spawning
//! an entity wraps it in `Rc<RefCell<_>>` and installs a click handler keyed
//! by the entity's name. The handler holds a weak reference; once the last
//! strong handle is dropped the handler removes itself on the next dispatch.
//! [`EventRegistry::unregister_entity`] removes it right away.

mod base;
mod renderable;

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::Vec2;
use crate::events::{ClickEvent, EventRegistry, HandlerStatus};
use crate::render::RenderContext;

pub use base::{ClickCallback, EntityBase, DEFAULT_HANDLE_CLICK};
pub use renderable::RenderableEntity;

/// Shared handle to a spawned entity.
pub type Shared<E> = Rc<RefCell<E>>;

/// Something that can be drawn and clicked.
pub trait Entity {
    fn base(&self) -> &EntityBase;

    fn base_mut(&mut self) -> &mut EntityBase;

    /// Render the entity. Must not change entity state.
    fn draw(&self, _ctx: &mut dyn RenderContext) {
        tracing::trace!(entity = %self.base().id, "draw not implemented");
    }

    /// Called when a click lands inside the entity.
    ///
    /// Runs while the entity is mutably borrowed. The base's click callback
    /// runs afterwards, once the borrow is released.
    fn clicked(&mut self, _mouse_pos: Vec2) {}
}

/// Wrap an entity in a shared handle and register its click handler.
pub fn spawn<E: Entity + 'static>(entity: E, registry: &mut EventRegistry) -> Shared<E> {
    registry.reserve_id(entity.base().id);
    let shared = Rc::new(RefCell::new(entity));
    register_click_handler(&shared, registry);
    shared
}

/// Install a click handler for an entity under its name.
///
/// The handler skips entities with click handling off, converts the event to
/// canvas coordinates, hit-tests, and on a hit calls [`Entity::clicked`]
/// followed by the base's [`ClickCallback`]. A handler already installed
/// under the same name is replaced.
pub fn register_click_handler<E: Entity + 'static>(entity: &Shared<E>, registry: &mut EventRegistry) {
    let key = entity.borrow().base().name.clone();
    let weak = Rc::downgrade(entity);
    let label = key.clone();

    registry.click_handlers_mut().set(
        key,
        Box::new(move |event: &ClickEvent| {
            let Some(entity) = weak.upgrade() else {
                tracing::trace!(key = %label, "entity dropped, removing click handler");
                return HandlerStatus::Remove;
            };

            let mouse_pos = event.mouse_pos();
            let callback = {
                let Ok(mut entity) = entity.try_borrow_mut() else {
                    tracing::warn!(key = %label, "entity busy, ignoring click");
                    return HandlerStatus::Keep;
                };
                if !entity.base().handle_click {
                    return HandlerStatus::Keep;
                }

                match entity.base().hit_test(mouse_pos) {
                    Ok(true) => {
                        tracing::trace!(key = %label, %mouse_pos, "entity clicked");
                        entity.clicked(mouse_pos);
                        entity.base().on_click().cloned().map(|cb| (entity.base().id, cb))
                    }
                    Ok(false) => None,
                    Err(err) => {
                        tracing::warn!(%err, "skipping click");
                        None
                    }
                }
            };

            // The entity is released here, so the callback may borrow it.
            if let Some((id, callback)) = callback {
                callback(id, mouse_pos);
            }
            HandlerStatus::Keep
        }),
    );
}
