//! Data-driven content definitions and loaders.
//!
//! This crate houses the stat blocks the combat core consumes:
//! - Character classes with preset stat blocks
//! - The built-in bestiary
//! - RON/TOML loaders for classes, creatures and game configuration
//!
//! Content is read once at setup and never appears in encounter state.

pub mod bestiary;
pub mod classes;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use bestiary::{Bestiary, Creature};
pub use classes::CharacterClass;

#[cfg(feature = "loaders")]
pub use loaders::{BestiaryLoader, ClassLoader, ConfigLoader, ContentFactory, LoadResult};
