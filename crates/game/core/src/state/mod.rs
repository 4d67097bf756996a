//! Encounter state: combatants, the encounter aggregate and its log.
//!
//! State is mutated only by [`crate::engine::CombatEngine`]; everything here
//! exposes read accessors and crate-private mutation points.
mod combatant;
mod encounter;
mod log;

pub use combatant::{CharacterSheet, Combatant, EnemySheet, ResourceMeter, Side};
pub use encounter::{CombatEncounter, EncounterError, EncounterPhase, RosterDefect};
pub use log::{LogEntry, LogKind};
