//! Board cards.
//!
//! A `Card` is an entity that knows about the board grid: it can snap screen
//! positions to cells and decide whether a move from its selected cell is
//! legal. Variant-specific attributes come from [`CardKind::style`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::{BoardConfig, Camera, Cell, EntityId, MoveError, RegistryError, Vec2};
use crate::entity::{spawn, Entity, EntityBase};
use crate::events::EventRegistry;
use crate::render::RenderContext;

use super::kind::{CardKind, Side};

/// Z-order of every card; cards draw beneath scenery.
pub const CARD_Z_ORDER: i32 = -10;

/// Shared handle to a spawned card.
pub type CardHandle = Rc<RefCell<Card>>;

/// A card on (or about to be on) the board.
#[derive(Clone, Debug)]
pub struct Card {
    pub base: EntityBase,

    kind: CardKind,

    /// Selected cell. `None` means not picked up.
    pub board_position: Option<Cell>,

    /// Whether move validation applies.
    pub movable: bool,

    pub fill_style: &'static str,
}

impl Card {
    /// Create an unregistered card of the given kind.
    ///
    /// The card starts at the screen origin with the configured card size.
    pub fn new(kind: CardKind, id: EntityId, config: &BoardConfig) -> Self {
        let style = kind.style();
        Self {
            base: EntityBase::new(id)
                .with_geometry(Vec2::ZERO, config.card_size)
                .with_visible(style.visible)
                .with_z_order(CARD_Z_ORDER),
            kind,
            board_position: None,
            movable: style.movable,
            fill_style: style.fill_style,
        }
    }

    /// Create a card with an issued ID and register its click handler.
    pub fn spawn(
        kind: CardKind,
        config: &BoardConfig,
        registry: &mut EventRegistry,
    ) -> Result<CardHandle, RegistryError> {
        let id = registry.issue_id()?;
        Ok(Self::spawn_with_id(kind, id, config, registry))
    }

    /// Create a card with a caller-assigned ID and register its click handler.
    ///
    /// Reusing an ID replaces the earlier card's click handler.
    pub fn spawn_with_id(
        kind: CardKind,
        id: EntityId,
        config: &BoardConfig,
        registry: &mut EventRegistry,
    ) -> CardHandle {
        spawn(Self::new(kind, id, config), registry)
    }

    #[must_use]
    pub fn kind(&self) -> CardKind {
        self.kind
    }

    /// The player this card belongs to.
    #[must_use]
    pub fn side(&self) -> Option<Side> {
        self.kind.side()
    }

    /// The variant's type tag.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        self.kind.style().kind_name
    }

    /// Snap a screen position to the screen origin of the clamped cell under
    /// it. See [`BoardConfig::snap_to_cell`].
    #[must_use]
    pub fn board_cell_from_screen(pos: Vec2, camera: &Camera, config: &BoardConfig) -> Vec2 {
        config.snap_to_cell(pos, camera)
    }

    /// Duplicate this card as a new entity.
    ///
    /// The copy gets a fresh ID and name and its own click handler bound to
    /// itself. Every other field, selection included, is carried over.
    pub fn copy(&self, registry: &mut EventRegistry) -> Result<CardHandle, RegistryError> {
        let id = registry.issue_id()?;
        let mut base = self.base.clone();
        base.id = id;
        base.name = id.default_name();

        Ok(spawn(Self { base, ..self.clone() }, registry))
    }

    /// Pick the card up at a cell. No legality check happens here.
    pub fn select_to_move(&mut self, cell: Cell) {
        self.board_position = Some(cell);
    }

    /// Put the card down without moving it.
    pub fn clear_selection(&mut self) {
        self.board_position = None;
    }

    /// Check a move from the selected cell.
    ///
    /// Legal moves stay in place or take one orthogonal step.
    pub fn check_move(&self, to: Cell) -> Result<(), MoveError> {
        let from = self.board_position.ok_or(MoveError::NoSelection)?;
        let distance = from.manhattan(to);
        if distance > 1 {
            return Err(MoveError::TooFar { from, to, distance });
        }
        Ok(())
    }

    /// Whether a move from the selected cell to `to` is legal.
    #[must_use]
    pub fn valid_move(&self, to: Cell) -> bool {
        self.check_move(to).is_ok()
    }
}

impl Entity for Card {
    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut EntityBase {
        &mut self.base
    }

    /// Fills with width and height, unlike scenery.
    fn draw(&self, ctx: &mut dyn RenderContext) {
        let Some((pos, size)) = self.base.rect() else {
            return;
        };
        ctx.set_fill_style(self.fill_style);
        ctx.fill_rect(pos.x, pos.y, size.x, size.y);
    }
}
