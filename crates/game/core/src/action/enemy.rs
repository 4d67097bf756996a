//! Enemy ability table.
//!
//! Enemies pick one ability name uniformly from their pool each turn. Known
//! names resolve to a fixed effect; anything else is a baseline attack.

/// Effect of an enemy ability on the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyEffect {
    pub damage: u32,
    pub sanity_damage: u32,
}

/// Enemy abilities with a dedicated rule.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum EnemyAbility {
    #[strum(to_string = "Dark Chant", serialize = "dark_chant")]
    DarkChant,
    #[strum(to_string = "Tentacle Lash", serialize = "tentacle_lash")]
    TentacleLash,
    #[strum(to_string = "Mind Rend", serialize = "mind_rend")]
    MindRend,
    #[strum(to_string = "Forbidden Knowledge", serialize = "forbidden_knowledge")]
    ForbiddenKnowledge,
    /// Fallback for every unrecognised name, including an empty pool.
    #[strum(to_string = "Attack", serialize = "attack")]
    Baseline,
}

impl EnemyAbility {
    pub const BASELINE_DAMAGE: u32 = 25;

    /// Resolves an ability name from an enemy's pool.
    pub fn from_name(name: &str) -> Self {
        name.trim().parse().unwrap_or(Self::Baseline)
    }

    pub const fn effect(self) -> EnemyEffect {
        match self {
            Self::DarkChant => EnemyEffect {
                damage: 0,
                sanity_damage: 15,
            },
            Self::TentacleLash => EnemyEffect {
                damage: 35,
                sanity_damage: 10,
            },
            Self::MindRend => EnemyEffect {
                damage: 0,
                sanity_damage: 25,
            },
            Self::ForbiddenKnowledge => EnemyEffect {
                damage: 0,
                sanity_damage: 20,
            },
            Self::Baseline => EnemyEffect {
                damage: Self::BASELINE_DAMAGE,
                sanity_damage: 0,
            },
        }
    }

    /// Log line for this ability used by `enemy`.
    pub fn narrate(self, enemy: &str) -> String {
        let effect = self.effect();
        match self {
            Self::DarkChant => format!(
                "{enemy} chants in an ancient tongue! You lose {} sanity!",
                effect.sanity_damage
            ),
            Self::TentacleLash => format!(
                "{enemy} lashes out with tentacles for {} damage!",
                effect.damage
            ),
            Self::MindRend => format!(
                "{enemy} assaults your mind directly! You lose {} sanity!",
                effect.sanity_damage
            ),
            Self::ForbiddenKnowledge => {
                format!("{enemy} whispers forbidden truths! Your sanity crumbles!")
            }
            Self::Baseline => format!("{enemy} attacks for {} damage!", effect.damage),
        }
    }
}
