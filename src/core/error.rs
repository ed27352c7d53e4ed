//! Error types.
//!
//! Failures that used to be silent `false` results or unguarded faults are
//! spelled out here. Boolean convenience methods (`Card::valid_move`) are
//! derived from these, so a caller only checking pass/fail sees no change.

use super::{Cell, EntityId};

/// Entity geometry errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityError {
    /// Position or size was never set, so there is nothing to hit test.
    #[error("hit test unavailable for {entity}: position or size unset")]
    HitTestUnavailable { entity: EntityId },
}

/// Move validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The card has not been selected (no board position).
    #[error("no card selected")]
    NoSelection,

    /// The target is more than one orthogonal step away.
    #[error("move from {from} to {to} spans {distance} cells")]
    TooFar { from: Cell, to: Cell, distance: u32 },

    /// The cell is not on the board.
    #[error("{0} is off the board")]
    OutOfBounds(Cell),

    /// There is no card at the source cell.
    #[error("no card at {0}")]
    EmptyCell(Cell),

    /// The card at the source cell never moves.
    #[error("card at {0} is not movable")]
    Immovable(Cell),

    /// The target holds a card of the mover's own side.
    #[error("{0} holds a card of the same side")]
    OwnPiece(Cell),
}

/// Event registry errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No handler is installed under this key.
    #[error("no handler '{key}' on topic '{topic}'")]
    UnknownHandler { topic: &'static str, key: String },

    /// Every entity ID has been issued or reserved.
    #[error("entity ids exhausted")]
    IdsExhausted,
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A board needs at least one cell per side.
    #[error("board needs at least one cell per side")]
    NoCells,
}
