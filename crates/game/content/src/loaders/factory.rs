//! Content factory for building stat blocks from data files.

use std::path::{Path, PathBuf};

use eldritch_core::{CharacterSheet, GameConfig};

use crate::bestiary::Bestiary;
use crate::classes::CharacterClass;
use crate::loaders::{BestiaryLoader, ClassLoader, ConfigLoader, LoadResult};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── classes.ron
/// └── bestiary.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load the class catalog from `classes.ron`.
    pub fn load_classes(&self) -> LoadResult<Vec<(CharacterClass, CharacterSheet)>> {
        let path = self.data_dir.join("classes.ron");
        ClassLoader::load(&path)
    }

    /// Load enemy stat blocks from `bestiary.ron`.
    pub fn load_bestiary(&self) -> LoadResult<Bestiary> {
        let path = self.data_dir.join("bestiary.ron");
        BestiaryLoader::load(&path)
    }

    /// Builds a named character from the class catalog.
    ///
    /// Classes missing from `classes.ron` fall back to the built-in preset.
    pub fn character(&self, class: CharacterClass, name: &str) -> LoadResult<CharacterSheet> {
        let sheet = self
            .load_classes()?
            .into_iter()
            .find(|(candidate, _)| *candidate == class)
            .map(|(_, sheet)| CharacterSheet {
                name: name.to_owned(),
                ..sheet
            })
            .unwrap_or_else(|| class.sheet(name));
        Ok(sheet)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
