//! Bestiary loader.

use std::path::Path;

use eldritch_core::EnemySheet;

use crate::bestiary::Bestiary;
use crate::loaders::{LoadResult, read_file};

/// Loader for enemy stat blocks from RON files.
pub struct BestiaryLoader;

impl BestiaryLoader {
    /// Load a bestiary from a RON file.
    ///
    /// RON format: `Vec<(String, EnemySheet)>`, keyed by creature id.
    pub fn load(path: &Path) -> LoadResult<Bestiary> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Bestiary> {
        let entries: Vec<(String, EnemySheet)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse bestiary RON: {}", e))?;

        for (index, (id, sheet)) in entries.iter().enumerate() {
            if sheet.max_hp == 0 {
                anyhow::bail!("Creature '{}' has max_hp 0", id);
            }
            if entries[..index].iter().any(|(seen, _)| seen == id) {
                anyhow::bail!("Creature '{}' is defined twice", id);
            }
        }

        Ok(Bestiary::new(entries))
    }
}
