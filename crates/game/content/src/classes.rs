//! Playable character classes and their preset stat blocks.

use eldritch_core::CharacterSheet;

/// Playable investigator class.
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
pub enum CharacterClass {
    Detective,
    Witch,
    Scientist,
    Healer,
}

impl CharacterClass {
    /// Starting (and maximum) hp of the class.
    pub const fn base_hp(self) -> u32 {
        match self {
            Self::Detective => 90,
            Self::Witch => 70,
            Self::Scientist => 80,
            Self::Healer => 85,
        }
    }

    /// Ability names printed on the class stat block. Only some of them map
    /// to combat actions; the rest are flavour.
    pub const fn abilities(self) -> [&'static str; 3] {
        match self {
            Self::Detective => ["Lucky Shot", "Investigate", "Sixth Sense"],
            Self::Witch => ["Blood Magic", "Hex", "Eldritch Blast"],
            Self::Scientist => ["Analyze", "Alchemical Bomb", "Mutation"],
            Self::Healer => ["Dagon's Embrace", "Purify", "Plague Touch"],
        }
    }

    pub const fn dark_secret(self) -> &'static str {
        match self {
            Self::Detective => "Bears a Shoggoth's eye that grants vision but ages him rapidly",
            Self::Witch => "Her spells cost HP as they require blood sacrifice",
            Self::Scientist => "Her body mutates from Nyarlathotep's experiments",
            Self::Healer => "His cures spread Yog-Sothoth's plagues",
        }
    }

    /// Builds a fresh stat block for a named character of this class.
    pub fn sheet(self, name: impl Into<String>) -> CharacterSheet {
        let hp = self.base_hp();
        CharacterSheet {
            name: name.into(),
            hp,
            max_hp: hp,
            abilities: self.abilities().iter().map(|s| s.to_string()).collect(),
            dark_secret: self.dark_secret().to_owned(),
        }
    }
}
