//! Core value types: ids, vectors, cells, configuration, errors.

pub mod cell;
pub mod config;
pub mod entity;
pub mod error;
pub mod vec2;

pub use cell::Cell;
pub use config::{BoardConfig, Camera};
pub use entity::EntityId;
pub use error::{ConfigError, EntityError, MoveError, RegistryError};
pub use vec2::Vec2;
