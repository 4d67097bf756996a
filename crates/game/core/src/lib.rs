//! Deterministic combat and sanity rules for the eldritch horror RPG.
//!
//! `eldritch-core` defines the canonical rules (actions, encounter state,
//! sanity progression) and exposes pure APIs shared by the content loaders
//! and any front-end. All encounter mutation flows through
//! [`engine::CombatEngine`]; all sanity mutation flows through
//! [`sanity::SanityTracker::apply`]. Randomness is injected through
//! [`env::RngOracle`], so an encounter replays identically from the same seed.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod sanity;
pub mod state;

pub use action::{
    ActionError, ActionId, ActionProfile, ActionSet, CostRule, DamageRule, EnemyAbility,
    EnemyEffect, InvalidActionReason,
};
pub use config::GameConfig;
pub use engine::{CombatEngine, SubmitOutcome, TurnError};
pub use env::{CombatEnv, Env, PcgRng, RngOracle, compute_seed};
pub use error::{ErrorSeverity, GameError};
pub use sanity::{MadnessLevel, NarrativeChoice, SanityState, SanityTracker};
pub use state::{
    CharacterSheet, CombatEncounter, Combatant, EncounterError, EncounterPhase, EnemySheet,
    LogEntry, LogKind, ResourceMeter, RosterDefect, Side,
};
