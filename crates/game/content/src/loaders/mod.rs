//! Content loaders for reading game data from files.
//!
//! This module provides loaders that convert RON/TOML files into the stat
//! blocks and configuration consumed by `eldritch-core`.

pub mod bestiary;
pub mod classes;
pub mod config;
pub mod factory;

pub use bestiary::BestiaryLoader;
pub use classes::ClassLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
