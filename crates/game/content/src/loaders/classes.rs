//! Character class catalog loader.

use std::path::Path;

use eldritch_core::CharacterSheet;

use crate::classes::CharacterClass;
use crate::loaders::{LoadResult, read_file};

/// Loader for character class stat blocks from RON files.
pub struct ClassLoader;

impl ClassLoader {
    /// Load the class catalog from a RON file.
    ///
    /// RON format: `Vec<(CharacterClass, CharacterSheet)>`. The sheet's name
    /// is a placeholder replaced when a character is created.
    pub fn load(path: &Path) -> LoadResult<Vec<(CharacterClass, CharacterSheet)>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<(CharacterClass, CharacterSheet)>> {
        let classes: Vec<(CharacterClass, CharacterSheet)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse class catalog RON: {}", e))?;

        for (index, (class, sheet)) in classes.iter().enumerate() {
            if sheet.max_hp == 0 {
                anyhow::bail!("Class '{}' has max_hp 0", class);
            }
            if classes[..index].iter().any(|(seen, _)| seen == class) {
                anyhow::bail!("Class '{}' is defined twice", class);
            }
        }

        Ok(classes)
    }
}
