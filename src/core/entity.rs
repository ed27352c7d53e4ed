//! Entity identification.
//!
//! Every renderable object on the canvas (cards, scenery) has an `EntityId`.
//! IDs are issued monotonically by the
//! [`EventRegistry`](crate::events::EventRegistry) so that no two spawned
//! entities share one, or assigned explicitly by the caller.
//!
//! ## Usage
//!
//! ```
//! use grid_cards::core::EntityId;
//!
//! let id = EntityId::new(7);
//! assert_eq!(id.raw(), 7);
//! assert_eq!(id.default_name(), "base_game_object_7");
//! ```

use serde::{Deserialize, Serialize};

/// Prefix of the derived entity name used as the click handler key.
pub const NAME_PREFIX: &str = "base_game_object_";

/// Unique identifier for a game entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create an entity ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The entity name derived from this ID.
    ///
    /// The name doubles as the entity's handler key in the click table, so two
    /// entities with the same ID overwrite each other's click handler.
    #[must_use]
    pub fn default_name(self) -> String {
        format!("{NAME_PREFIX}{}", self.0)
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}
