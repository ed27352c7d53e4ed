//! # grid-cards
//!
//! Entity and event layer for a grid-based card game drawn on a 2D canvas.
//!
//! ## Design Principles
//!
//! 1. **Explicit Dispatcher**: Entities register their click handlers into an
//!    [`EventRegistry`] passed in at construction. There is no global table.
//!
//! 2. **Stable Identity**: Entity IDs are issued monotonically by the
//!    registry, and an entity's handler key is derived from its ID.
//!
//! 3. **Configuration Over Inheritance**: Card variants are a [`CardKind`]
//!    tag plus a fixed [`CardStyle`] record.
//!
//! ## Modules
//!
//! - `core`: Vectors, cells, entity IDs, board configuration, errors
//! - `events`: Handler tables, click dispatch, board preparation
//! - `entity`: The `Entity` trait, shared base state, scenery rectangles
//! - `cards`: Board cards, variants, default placements
//! - `board`: The board grid
//! - `render`: Drawing surface and draw pass
//!
//! ## Example
//!
//! ```
//! use grid_cards::{Board, Card, CardKind, Cell, EventRegistry};
//!
//! let mut registry = EventRegistry::new();
//! grid_cards::cards::register_default_exits(&mut registry);
//!
//! let mut board = Board::default();
//! board.prepare(&mut registry);
//! assert_eq!(board.len(), 4);
//!
//! let id = registry.issue_id().expect("ids available");
//! let mut virus = Card::new(CardKind::Virus, id, &Default::default());
//! virus.select_to_move(Cell::new(3, 3));
//! assert!(virus.valid_move(Cell::new(3, 4)));
//! assert!(!virus.valid_move(Cell::new(4, 4)));
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod entity;
pub mod events;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, Camera, Cell, ConfigError, EntityError, EntityId, MoveError, RegistryError, Vec2,
};

pub use crate::events::{
    CanvasBounds, ClickEvent, EventRegistry, HandlerStatus, HandlerTable, RawPointerEvent,
    BOARD_PREPARE, CANVAS_CLICK,
};

pub use crate::entity::{ClickCallback, Entity, EntityBase, RenderableEntity, Shared};

pub use crate::cards::{Card, CardHandle, CardKind, CardStyle, Side};

pub use crate::board::{Board, BoardGrid, MoveOutcome};

pub use crate::render::{draw_pass, CommandBuffer, DrawCommand, RenderContext};
