//! Built-in creatures and the bestiary lookup.

use eldritch_core::{Combatant, EnemySheet};

/// Creatures shipped with the base game.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Creature {
    MaskedCultist,
    ShoggothSpawn,
    WhisperingLibrarian,
}

impl Creature {
    pub fn sheet(self) -> EnemySheet {
        let (name, kind, hp, abilities, description): (&str, &str, u32, &[&str], &str) = match self {
            Self::MaskedCultist => (
                "Masked Cultist",
                "cultist",
                45,
                &["Dark Chant", "Ritual Blade"],
                "A hooded figure wearing a fish-like mask, wielding ancient daggers inscribed with blasphemous runes.",
            ),
            Self::ShoggothSpawn => (
                "Shoggoth Spawn",
                "cosmic_horror",
                80,
                &["Tentacle Lash", "Mind Rend", "Shapeshift"],
                "A writhing mass of eyes and tentacles, defying all natural law and reason.",
            ),
            Self::WhisperingLibrarian => (
                "The Whispering Librarian",
                "boss",
                150,
                &["Forbidden Knowledge", "Reality Tear", "Summon Shadows"],
                "Once the head librarian, now transformed into something that should not exist, speaking truths that shatter minds.",
            ),
        };

        EnemySheet {
            name: name.to_owned(),
            kind: kind.to_owned(),
            hp,
            max_hp: hp,
            abilities: abilities.iter().map(|ability| ability.to_string()).collect(),
            description: description.to_owned(),
        }
    }
}

/// Keyed collection of enemy stat blocks, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bestiary {
    entries: Vec<(String, EnemySheet)>,
}

impl Bestiary {
    pub fn new(entries: Vec<(String, EnemySheet)>) -> Self {
        Self { entries }
    }

    /// The creatures shipped with the base game, weakest first.
    pub fn builtin() -> Self {
        use strum::IntoEnumIterator;

        Self::new(
            Creature::iter()
                .map(|creature| (creature.to_string(), creature.sheet()))
                .collect(),
        )
    }

    pub fn get(&self, id: &str) -> Option<&EnemySheet> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, sheet)| sheet)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds an encounter roster from the first `count` entries, cycling
    /// through the bestiary when `count` exceeds its size.
    pub fn roster(&self, count: usize) -> Vec<Combatant> {
        self.entries
            .iter()
            .cycle()
            .take(count)
            .map(|(_, sheet)| Combatant::enemy(sheet))
            .collect()
    }
}
