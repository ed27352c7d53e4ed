//! Board and viewport configuration.
//!
//! The board is a square grid of `cells_per_side` cells, each `cell_size`
//! pixels wide, drawn at the current camera offset. Converting between
//! screen positions and cells goes through [`BoardConfig`] so there is one
//! place that knows the grid geometry.

use serde::{Deserialize, Serialize};

use super::{Cell, ConfigError, Vec2};

/// Default number of cells along each board axis.
pub const DEFAULT_CELLS_PER_SIDE: u8 = 8;

/// Default width and height of one cell in pixels.
pub const DEFAULT_CELL_SIZE: f64 = 100.0;

/// Default card rectangle size in pixels.
pub const DEFAULT_CARD_SIZE: Vec2 = Vec2::new(50.0, 50.0);

/// Viewport state consumed by grid math.
///
/// The offset is a single scalar subtracted from both axes before any cell
/// computation.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Camera {
    pub offset: f64,
}

impl Camera {
    /// Create a camera at the given offset.
    #[must_use]
    pub const fn new(offset: f64) -> Self {
        Self { offset }
    }
}

/// Grid geometry shared by cards and the board.
///
/// Deserializing rejects `cells_per_side: 0`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    /// Number of cells along each axis.
    pub cells_per_side: u8,

    /// Width/height of one cell in pixels.
    pub cell_size: f64,

    /// Size of a freshly created card.
    pub card_size: Vec2,
}

/// Unchecked wire form of [`BoardConfig`].
#[derive(Deserialize)]
struct RawBoardConfig {
    cells_per_side: u8,
    cell_size: f64,
    card_size: Vec2,
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = ConfigError;

    fn try_from(raw: RawBoardConfig) -> Result<Self, Self::Error> {
        if raw.cells_per_side == 0 {
            return Err(ConfigError::NoCells);
        }
        Ok(Self {
            cells_per_side: raw.cells_per_side,
            cell_size: raw.cell_size,
            card_size: raw.card_size,
        })
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            cells_per_side: DEFAULT_CELLS_PER_SIDE,
            cell_size: DEFAULT_CELL_SIZE,
            card_size: DEFAULT_CARD_SIZE,
        }
    }
}

impl BoardConfig {
    /// Create the default 8x8 configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of cells per side.
    ///
    /// Panics if `cells` is zero.
    #[must_use]
    pub fn with_cells_per_side(mut self, cells: u8) -> Self {
        assert!(cells > 0, "board needs at least one cell per side");
        self.cells_per_side = cells;
        self
    }

    /// Set the cell size in pixels.
    #[must_use]
    pub fn with_cell_size(mut self, size: f64) -> Self {
        self.cell_size = size;
        self
    }

    /// Set the card size in pixels.
    #[must_use]
    pub fn with_card_size(mut self, size: Vec2) -> Self {
        self.card_size = size;
        self
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        usize::from(self.cells_per_side) * usize::from(self.cells_per_side)
    }

    /// Check if a cell lies on the board.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.in_bounds(self.cells_per_side)
    }

    fn axis_index(&self, coord: f64, camera: &Camera) -> i32 {
        let max = (f64::from(self.cells_per_side) - 1.0).max(0.0);
        // The cast is lossless after clamping into 0..=max.
        ((coord - camera.offset) / self.cell_size).floor().clamp(0.0, max) as i32
    }

    /// The board cell under a screen position, clamped onto the board.
    ///
    /// Positions off the board map to the nearest edge cell.
    #[must_use]
    pub fn cell_at(&self, pos: Vec2, camera: &Camera) -> Cell {
        Cell::new(self.axis_index(pos.x, camera), self.axis_index(pos.y, camera))
    }

    /// Screen position of a cell's top-left corner.
    #[must_use]
    pub fn cell_origin(&self, cell: Cell, camera: &Camera) -> Vec2 {
        Vec2::new(
            f64::from(cell.x) * self.cell_size + camera.offset,
            f64::from(cell.y) * self.cell_size + camera.offset,
        )
    }

    /// Snap a screen position to the origin of the clamped cell under it.
    ///
    /// Returns a screen coordinate, not a cell index, so the result can be
    /// assigned to an entity position directly. Snapping is idempotent.
    #[must_use]
    pub fn snap_to_cell(&self, pos: Vec2, camera: &Camera) -> Vec2 {
        self.cell_origin(self.cell_at(pos, camera), camera)
    }
}
