//! Combat resolution state machine.
//!
//! The [`CombatEngine`] is the only writer of a [`CombatEncounter`]. It
//! borrows the encounter and the session's [`SanityTracker`] for as long as
//! the caller drives it, and routes every sanity change through
//! [`SanityTracker::apply`].
//!
//! ```text
//! SelectAction --submit--> Executing --+--> Victory
//!      ^                               |
//!      |                               +--> Defeat
//!      |                               |
//!      +------ EnemyTurn <-------------+
//!                  |
//!                  +--> Defeat
//! ```

mod transition;
mod turns;

pub use turns::TurnError;

use crate::action::{ActionError, ActionId, InvalidActionReason};
use crate::env::CombatEnv;
use crate::sanity::{SanityState, SanityTracker};
use crate::state::{CombatEncounter, EncounterPhase, LogEntry};

/// Roster slot used for the player when deriving roll seeds; enemies use `index + 1`.
pub(crate) const PLAYER_SLOT: u32 = 0;

/// Result of one call into the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubmitOutcome {
    /// Log entries appended during this call, in order.
    pub events: Vec<LogEntry>,
    /// Phase the encounter is in after the call.
    pub phase: EncounterPhase,
}

impl SubmitOutcome {
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }
}

/// Drives one encounter.
///
/// Synchronous by construction: [`submit`](Self::submit) resolves the player's
/// action and the whole enemy batch before returning. Callers that animate
/// each step can use [`execute_player_action`](Self::execute_player_action)
/// followed by [`resolve_enemy_turn`](Self::resolve_enemy_turn) instead.
pub struct CombatEngine<'a> {
    encounter: &'a mut CombatEncounter,
    sanity: &'a mut SanityTracker,
    env: CombatEnv<'a>,
}

impl<'a> CombatEngine<'a> {
    pub fn new(
        encounter: &'a mut CombatEncounter,
        sanity: &'a mut SanityTracker,
        env: CombatEnv<'a>,
    ) -> Self {
        Self {
            encounter,
            sanity,
            env,
        }
    }

    pub fn encounter(&self) -> &CombatEncounter {
        self.encounter
    }

    pub fn sanity(&self) -> SanityState {
        self.sanity.current()
    }

    /// Resolves one player action and, unless it ended the encounter, the
    /// full enemy turn that follows.
    ///
    /// # Errors
    ///
    /// Returns an [`ActionError`] when the action is unknown, not granted,
    /// out of phase, unaffordable or exhausted. Nothing is mutated in that case.
    pub fn submit(&mut self, action: ActionId) -> Result<SubmitOutcome, ActionError> {
        let start = self.encounter.log.len();

        self.resolve_player_action(action)?;
        if self.encounter.phase == EncounterPhase::EnemyTurn {
            self.run_enemy_turn();
        }

        Ok(self.outcome_since(start))
    }

    /// Like [`submit`](Self::submit), taking an action id or display name.
    pub fn submit_named(&mut self, name: &str) -> Result<SubmitOutcome, ActionError> {
        let action = name
            .trim()
            .parse::<ActionId>()
            .map_err(|_| ActionError::invalid(name, InvalidActionReason::Unknown))?;
        self.submit(action)
    }

    /// Resolves the player's action only, leaving the encounter in
    /// `EnemyTurn`, `Victory` or `Defeat`.
    pub fn execute_player_action(&mut self, action: ActionId) -> Result<SubmitOutcome, ActionError> {
        let start = self.encounter.log.len();
        self.resolve_player_action(action)?;
        Ok(self.outcome_since(start))
    }

    /// Resolves every enemy action of the current enemy turn.
    ///
    /// # Errors
    ///
    /// Returns `TurnError::NotEnemyTurn` outside the `EnemyTurn` phase.
    pub fn resolve_enemy_turn(&mut self) -> Result<SubmitOutcome, TurnError> {
        let phase = self.encounter.phase;
        if phase != EncounterPhase::EnemyTurn {
            return Err(TurnError::NotEnemyTurn(phase));
        }

        let start = self.encounter.log.len();
        self.run_enemy_turn();
        Ok(self.outcome_since(start))
    }

    fn outcome_since(&self, start: usize) -> SubmitOutcome {
        SubmitOutcome {
            events: self.encounter.log[start..].to_vec(),
            phase: self.encounter.phase,
        }
    }
}
