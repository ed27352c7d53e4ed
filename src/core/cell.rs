//! Logical board cells.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A logical position on the board grid.
///
/// Cells are plain integer pairs. A cell is only guaranteed to be on the
/// board when produced by [`Cell::clamped`] or
/// [`BoardConfig::cell_at`](super::BoardConfig::cell_at).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Create a new cell.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Clamp each axis into `0..cells_per_side`.
    ///
    /// A zero-sized board clamps everything to the origin.
    #[must_use]
    pub fn clamped(self, cells_per_side: u8) -> Self {
        let max = (i32::from(cells_per_side) - 1).max(0);
        Self::new(self.x.clamp(0, max), self.y.clamp(0, max))
    }

    /// Check if the cell lies on a square board of the given side.
    #[must_use]
    pub fn in_bounds(self, cells_per_side: u8) -> bool {
        let side = i32::from(cells_per_side);
        (0..side).contains(&self.x) && (0..side).contains(&self.y)
    }

    /// Manhattan distance to another cell.
    #[must_use]
    pub fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped() {
        assert_eq!(Cell::new(-3, 12).clamped(8), Cell::new(0, 7));
        assert_eq!(Cell::new(4, 5).clamped(8), Cell::new(4, 5));
    }

    #[test]
    fn test_clamped_empty_board() {
        assert_eq!(Cell::new(5, -5).clamped(0), Cell::new(0, 0));
        assert!(!Cell::new(0, 0).in_bounds(0));
    }

    #[test]
    fn test_in_bounds() {
        assert!(Cell::new(0, 0).in_bounds(8));
        assert!(Cell::new(7, 7).in_bounds(8));
        assert!(!Cell::new(8, 0).in_bounds(8));
        assert!(!Cell::new(0, -1).in_bounds(8));
    }

    #[test]
    fn test_manhattan() {
        let c = Cell::new(3, 3);
        assert_eq!(c.manhattan(c), 0);
        assert_eq!(c.manhattan(Cell::new(3, 4)), 1);
        assert_eq!(c.manhattan(Cell::new(4, 4)), 2);
        assert_eq!(c.manhattan(Cell::new(0, 7)), 7);
    }
}
