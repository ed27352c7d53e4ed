//! The board grid.
//!
//! [`BoardGrid`] is what board preparation hooks write into. [`Board`] is the
//! standard square grid implementation.

mod grid;

use crate::cards::CardHandle;
use crate::core::{BoardConfig, Cell, MoveError, Vec2};

pub use grid::{Board, MoveOutcome};

/// A grid of card slots that preparation hooks can populate.
pub trait BoardGrid {
    /// Grid geometry.
    fn config(&self) -> &BoardConfig;

    /// Screen position of a cell's origin.
    fn to_global(&self, cell: Cell) -> Vec2;

    /// Put a card into a cell, returning whatever was there.
    fn place(&mut self, cell: Cell, card: CardHandle) -> Result<Option<CardHandle>, MoveError>;
}
