//! Demo client configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

use eldritch_content::CharacterClass;

/// Settings for one scripted encounter.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `config.toml`, `classes.ron` and `bestiary.ron`.
    pub data_dir: PathBuf,
    pub class: CharacterClass,
    pub name: String,
    /// Encounter seed; the same seed and script replay the same fight.
    pub seed: u64,
    /// Enemies drawn from the bestiary, in bestiary order.
    pub enemies: usize,
    /// Action ids or display names submitted in order. Once exhausted the
    /// player keeps attacking until the encounter ends.
    pub actions: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("crates/game/content/data"),
            class: CharacterClass::Detective,
            name: "Investigator".to_owned(),
            seed: 1928,
            enemies: 1,
            actions: Vec::new(),
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `ELDRITCH_DATA_DIR`
    /// - `ELDRITCH_CLASS` / `ELDRITCH_NAME`
    /// - `ELDRITCH_SEED`
    /// - `ELDRITCH_ENEMIES` (at least 1)
    /// - `ELDRITCH_ACTIONS` (comma separated)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("ELDRITCH_DATA_DIR") {
            config.data_dir = dir;
        }

        if let Some(class) = read_env::<CharacterClass>("ELDRITCH_CLASS") {
            config.class = class;
        }

        if let Some(name) = read_env::<String>("ELDRITCH_NAME") {
            config.name = name;
        }

        if let Some(seed) = read_env::<u64>("ELDRITCH_SEED") {
            config.seed = seed;
        }

        if let Some(count) = read_env::<usize>("ELDRITCH_ENEMIES") {
            config.enemies = count.max(1);
        }

        if let Some(actions) = read_env::<String>("ELDRITCH_ACTIONS") {
            config.actions = parse_actions(&actions);
        }

        config
    }
}

fn parse_actions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|action| !action.is_empty())
        .map(str::to_owned)
        .collect()
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
