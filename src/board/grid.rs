//! Square board of card slots.

use std::fmt;

use crate::cards::CardHandle;
use crate::core::{BoardConfig, Camera, Cell, MoveError, Vec2};
use crate::events::EventRegistry;

use super::BoardGrid;

/// Result of a successful [`Board::move_card`].
#[derive(Clone, Debug)]
pub enum MoveOutcome {
    /// Source and target were the same cell.
    Stayed,
    /// The card stepped into an empty cell.
    Moved,
    /// The card took the target cell; the card that held it is returned.
    Captured(CardHandle),
    /// The card reached another side's exit and left the board. The exit
    /// stays in place.
    Connected(CardHandle),
}

impl MoveOutcome {
    /// The captured card, if any.
    #[must_use]
    pub fn captured(&self) -> Option<&CardHandle> {
        match self {
            MoveOutcome::Captured(card) => Some(card),
            _ => None,
        }
    }
}

/// A square grid of optional cards, indexed by cell.
#[derive(Clone, Debug)]
pub struct Board {
    config: BoardConfig,
    camera: Camera,
    slots: Vec<Option<CardHandle>>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(config: BoardConfig, camera: Camera) -> Self {
        let slots = vec![None; config.cell_count()];
        Self { config, camera, slots }
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Move the viewport. Card positions are not updated.
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    fn slot(&self, cell: Cell) -> Option<usize> {
        if !self.config.contains(cell) {
            return None;
        }
        let side = usize::from(self.config.cells_per_side);
        // In-bounds cells are non-negative
        Some(cell.x as usize * side + cell.y as usize)
    }

    /// The card at a cell.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<&CardHandle> {
        self.slot(cell).and_then(|i| self.slots[i].as_ref())
    }

    /// Remove and return the card at a cell.
    pub fn take(&mut self, cell: Cell) -> Option<CardHandle> {
        self.slot(cell).and_then(|i| self.slots[i].take())
    }

    /// The cell under a screen position, clamped onto the board.
    #[must_use]
    pub fn cell_under(&self, pos: Vec2) -> Cell {
        self.config.cell_at(pos, &self.camera)
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Check if no cell is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Occupied cells with their cards.
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, &CardHandle)> {
        let side = i32::from(self.config.cells_per_side);
        self.slots.iter().enumerate().filter_map(move |(i, slot)| {
            let i = i as i32;
            slot.as_ref().map(|card| (Cell::new(i / side, i % side), card))
        })
    }

    /// Run the registry's `board.prepare` hooks against this board.
    pub fn prepare(&mut self, registry: &mut EventRegistry) {
        registry.prepare_board(self);
    }

    /// Move the card at `from` one step to `to`.
    ///
    /// The card is selected at `from` and must pass its own move check. A
    /// target holding a card of the mover's side is rejected. A target exit
    /// of another side is never captured: the mover connects through it and
    /// leaves the board. Otherwise the mover lands at `to` with its screen
    /// position updated, capturing whatever was there. The mover's selection
    /// is cleared in every case.
    pub fn move_card(&mut self, from: Cell, to: Cell) -> Result<MoveOutcome, MoveError> {
        for cell in [from, to] {
            if !self.config.contains(cell) {
                return Err(MoveError::OutOfBounds(cell));
            }
        }

        let card = self.get(from).ok_or(MoveError::EmptyCell(from))?.clone();
        let side = {
            let mut card = card.borrow_mut();
            if !card.movable {
                return Err(MoveError::Immovable(from));
            }
            card.select_to_move(from);
            let checked = card.check_move(to);
            card.clear_selection();
            checked?;
            card.side()
        };

        if from == to {
            return Ok(MoveOutcome::Stayed);
        }

        let target = self.get(to).map(|target| {
            let target = target.borrow();
            (target.side(), target.kind().is_exit())
        });
        if let Some((target_side, target_is_exit)) = target {
            if side.is_some() && target_side == side {
                return Err(MoveError::OwnPiece(to));
            }
            if target_is_exit {
                self.take(from);
                tracing::debug!(%from, %to, "card connected through exit");
                return Ok(MoveOutcome::Connected(card));
            }
        }

        let captured = self.take(to);
        let moving = self.take(from);
        card.borrow_mut().base.position = Some(self.to_global(to));
        if let Some(slot) = self.slot(to) {
            self.slots[slot] = moving;
        }

        tracing::debug!(%from, %to, captured = captured.is_some(), "card moved");
        Ok(match captured {
            Some(captured) => MoveOutcome::Captured(captured),
            None => MoveOutcome::Moved,
        })
    }
}

impl BoardGrid for Board {
    fn config(&self) -> &BoardConfig {
        &self.config
    }

    fn to_global(&self, cell: Cell) -> Vec2 {
        self.config.cell_origin(cell, &self.camera)
    }

    fn place(&mut self, cell: Cell, card: CardHandle) -> Result<Option<CardHandle>, MoveError> {
        let slot = self.slot(cell).ok_or(MoveError::OutOfBounds(cell))?;
        Ok(self.slots[slot].replace(card))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default(), Camera::default())
    }
}

/// One row per `y`, one glyph per card, `.` for an empty cell.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = i32::from(self.config.cells_per_side);
        for y in 0..side {
            for x in 0..side {
                let glyph = match self.get(Cell::new(x, y)) {
                    Some(card) => card.try_borrow().map_or('?', |c| c.kind().glyph()),
                    None => '.',
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
