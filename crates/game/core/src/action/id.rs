//! Player action identifiers and the granted-ability set.

use strum::IntoEnumIterator;

/// Identifier of a player action.
///
/// Parses from both the snake-case id (`"lucky_shot"`) and the display name
/// used on character stat blocks (`"Lucky Shot"`), case-insensitively.
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
#[strum(ascii_case_insensitive)]
pub enum ActionId {
    /// Baseline strike, always available.
    #[strum(to_string = "attack", serialize = "Attack")]
    Attack,
    /// High-variance shot.
    #[strum(to_string = "lucky_shot", serialize = "Lucky Shot")]
    LuckyShot,
    /// Heavy strike paid for in the caster's own blood.
    #[strum(to_string = "blood_magic", serialize = "Blood Magic")]
    BloodMagic,
    /// Study the enemy; no mechanical effect.
    #[strum(to_string = "analyze", serialize = "Analyze")]
    Analyze,
    /// Sacrificial heal that costs sanity.
    #[strum(to_string = "dagons_embrace", serialize = "Dagon's Embrace")]
    DagonsEmbrace,
    /// One-shot forbidden pact.
    #[strum(to_string = "pact_cthulhu", serialize = "Pact with Cthulhu")]
    PactCthulhu,
}

impl ActionId {
    /// Name shown to the player.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Attack => "Attack",
            Self::LuckyShot => "Lucky Shot",
            Self::BloodMagic => "Blood Magic",
            Self::Analyze => "Analyze",
            Self::DagonsEmbrace => "Dagon's Embrace",
            Self::PactCthulhu => "Pact with Cthulhu",
        }
    }

    /// Bit representing this action in an [`ActionSet`].
    pub const fn flag(self) -> ActionSet {
        match self {
            Self::Attack => ActionSet::ATTACK,
            Self::LuckyShot => ActionSet::LUCKY_SHOT,
            Self::BloodMagic => ActionSet::BLOOD_MAGIC,
            Self::Analyze => ActionSet::ANALYZE,
            Self::DagonsEmbrace => ActionSet::DAGONS_EMBRACE,
            Self::PactCthulhu => ActionSet::PACT_CTHULHU,
        }
    }
}

bitflags::bitflags! {
    /// Set of player actions, used both for granted abilities and for
    /// consumed one-shot abilities.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ActionSet: u8 {
        const ATTACK = 1 << 0;
        const LUCKY_SHOT = 1 << 1;
        const BLOOD_MAGIC = 1 << 2;
        const ANALYZE = 1 << 3;
        const DAGONS_EMBRACE = 1 << 4;
        const PACT_CTHULHU = 1 << 5;
    }
}

impl ActionSet {
    /// Builds the granted set from stat-block ability names.
    ///
    /// Names that map to no action rule (flavour abilities such as
    /// "Investigate") grant nothing.
    pub fn from_ability_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter_map(|name| name.as_ref().trim().parse::<ActionId>().ok())
            .fold(Self::empty(), |set, action| set | action.flag())
    }

    /// Returns true if the set contains the given action.
    pub fn has(self, action: ActionId) -> bool {
        self.contains(action.flag())
    }

    /// Iterates the actions in this set in declaration order.
    pub fn actions(self) -> impl Iterator<Item = ActionId> {
        ActionId::iter().filter(move |action| self.has(*action))
    }
}
