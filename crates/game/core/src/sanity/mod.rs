//! Sanity meter and madness progression.
//!
//! Sanity is a play-session resource shared by combat and narrative screens.
//! The madness tier is derived from the lowest sanity ever reached, never the
//! current value, so it can only escalate: recovering sanity does not undo a
//! tier once crossed.
mod choices;

pub use choices::NarrativeChoice;

use crate::config::GameConfig;

/// Discrete madness tier.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MadnessLevel {
    #[default]
    Lucid = 0,
    Uneasy = 1,
    Disturbed = 2,
    Shattered = 3,
}

impl MadnessLevel {
    pub const UNEASY_BELOW: u32 = 75;
    pub const DISTURBED_BELOW: u32 = 50;
    pub const SHATTERED_BELOW: u32 = 25;

    /// Tier reached by a sanity value.
    pub const fn for_sanity(sanity: u32) -> Self {
        if sanity < Self::SHATTERED_BELOW {
            Self::Shattered
        } else if sanity < Self::DISTURBED_BELOW {
            Self::Disturbed
        } else if sanity < Self::UNEASY_BELOW {
            Self::Uneasy
        } else {
            Self::Lucid
        }
    }

    /// Numeric level in `0..=3`.
    pub const fn level(self) -> u8 {
        self as u8
    }
}

/// Snapshot of the sanity meter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SanityState {
    pub sanity: u32,
    pub madness: MadnessLevel,
}

impl SanityState {
    pub const fn new(sanity: u32, madness: MadnessLevel) -> Self {
        Self { sanity, madness }
    }
}

/// Owner of the session's sanity meter.
///
/// One tracker lives per play session. The combat engine borrows it mutably
/// for the duration of an action; narrative code calls [`apply`](Self::apply)
/// or [`apply_choice`](Self::apply_choice) between encounters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SanityTracker {
    sanity: u32,
    lowest: u32,
    madness: MadnessLevel,
}

impl SanityTracker {
    /// Starts a session at full sanity.
    pub fn new() -> Self {
        Self::starting_at(GameConfig::MAX_SANITY)
    }

    /// Starts a session at the configured sanity.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::starting_at(config.starting_sanity)
    }

    /// Starts a session at the given sanity, clamped to the meter.
    pub fn starting_at(sanity: u32) -> Self {
        let sanity = sanity.min(GameConfig::MAX_SANITY);
        Self {
            sanity,
            lowest: sanity,
            madness: MadnessLevel::for_sanity(sanity),
        }
    }

    /// Applies a sanity change and returns the resulting state. Never fails.
    ///
    /// The new value is clamped to `[0, 100]`; the madness tier is recomputed
    /// from the running minimum and never decreases.
    pub fn apply(&mut self, delta: i32) -> SanityState {
        let before = self.current();

        let next = (i64::from(self.sanity) + i64::from(delta))
            .clamp(0, i64::from(GameConfig::MAX_SANITY)) as u32;
        self.sanity = next;
        self.lowest = self.lowest.min(next);
        self.madness = self.madness.max(MadnessLevel::for_sanity(self.lowest));

        tracing::debug!(
            target: "core::sanity",
            delta,
            sanity = self.sanity,
            lowest = self.lowest,
            "sanity adjusted"
        );
        if self.madness > before.madness {
            tracing::info!(
                target: "core::sanity",
                from = %before.madness,
                to = %self.madness,
                "madness deepens"
            );
        }

        self.current()
    }

    /// Applies the sanity cost of a narrative choice.
    pub fn apply_choice(&mut self, choice: NarrativeChoice) -> SanityState {
        self.apply(choice.sanity_delta())
    }

    pub fn current(&self) -> SanityState {
        SanityState::new(self.sanity, self.madness)
    }

    /// Lowest sanity reached this session.
    pub fn lowest(&self) -> u32 {
        self.lowest
    }
}

impl Default for SanityTracker {
    fn default() -> Self {
        Self::new()
    }
}
