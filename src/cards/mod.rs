//! Cards: board-aware entities and their variants.
//!
//! ## Key Types
//!
//! - `Card`: An entity with grid snapping and move validation
//! - `CardKind`: Variant tag (virus, link, enemy, exits)
//! - `CardStyle`: Fixed per-variant attributes
//! - `Side`: Which player a card belongs to
//!
//! Default placements (exits) are installed as `board.prepare` hooks via
//! [`register_default_placement`].

pub mod card;
pub mod kind;
pub mod placement;

pub use card::{Card, CardHandle, CARD_Z_ORDER};
pub use kind::{CardKind, CardStyle, Side};
pub use placement::{placement_key, register_default_exits, register_default_placement, PlacementCells};
