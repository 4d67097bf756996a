//! The encounter aggregate: roster, phase, turn counter, log and one-shot flags.

use crate::action::{ActionId, ActionSet};
use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::sanity::SanityState;

use super::{Combatant, LogEntry, LogKind};

/// Phase of the combat state machine. An encounter is in exactly one at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EncounterPhase {
    /// Waiting for the player's action.
    #[default]
    SelectAction,
    /// Resolving the player's action.
    Executing,
    /// Enemies act in roster order.
    EnemyTurn,
    /// Every enemy is defeated.
    Victory,
    /// The player is defeated.
    Defeat,
}

impl EncounterPhase {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }
}

/// What is wrong with a rejected roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RosterDefect {
    #[error("no living enemies")]
    NoEnemies,

    #[error("player has 0 hp")]
    PlayerDefeated,
}

/// Errors raised while setting up an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterError {
    #[error("malformed encounter roster: {0}")]
    EmptyRoster(RosterDefect),
}

impl GameError for EncounterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyRoster(_) => "ENCOUNTER_EMPTY_ROSTER",
        }
    }
}

/// One complete combat session, from creation to `Victory` or `Defeat`.
///
/// The enemy roster order is fixed at creation and drives both targeting
/// (first living enemy) and enemy turn order. The log is append-only and the
/// consumed one-shot set only ever grows.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatEncounter {
    pub(crate) player: Combatant,
    pub(crate) enemies: Vec<Combatant>,
    pub(crate) turn: u32,
    pub(crate) phase: EncounterPhase,
    pub(crate) log: Vec<LogEntry>,
    pub(crate) consumed: ActionSet,
    /// Resolved-action sequence number; keys every random roll.
    pub(crate) nonce: u64,
}

impl CombatEncounter {
    pub const OPENING_LINE: &'static str =
        "Combat begins! The air grows thick with eldritch energy...";
    pub const LOW_SANITY_LINE: &'static str =
        "Your sanity is low - the horrors seem more real than ever!";

    /// Creates an encounter in `SelectAction` at turn 0.
    ///
    /// # Errors
    ///
    /// Returns `EncounterError::EmptyRoster` if no enemy is alive or the
    /// player is already at 0 hp. The roster has no size limit.
    pub fn new<I>(player: Combatant, enemies: I) -> Result<Self, EncounterError>
    where
        I: IntoIterator<Item = Combatant>,
    {
        if player.is_defeated() {
            return Err(EncounterError::EmptyRoster(RosterDefect::PlayerDefeated));
        }

        let enemies: Vec<Combatant> = enemies.into_iter().collect();
        if enemies.iter().all(Combatant::is_defeated) {
            return Err(EncounterError::EmptyRoster(RosterDefect::NoEnemies));
        }

        let mut encounter = Self {
            player,
            enemies,
            turn: 0,
            phase: EncounterPhase::SelectAction,
            log: Vec::new(),
            consumed: ActionSet::empty(),
            nonce: 0,
        };
        encounter.push_log(LogKind::Narration, Self::OPENING_LINE);

        tracing::debug!(
            target: "core::combat",
            player = encounter.player.name(),
            enemies = encounter.enemies.len(),
            "encounter created"
        );

        Ok(encounter)
    }

    /// Narrates a warning when the session's sanity is already low.
    pub fn with_sanity_notice(mut self, sanity: &SanityState, config: &GameConfig) -> Self {
        if sanity.sanity < config.low_sanity_warning {
            self.push_log(LogKind::Narration, Self::LOW_SANITY_LINE);
        }
        self
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    /// Enemies in roster order.
    pub fn enemies(&self) -> &[Combatant] {
        &self.enemies
    }

    pub fn enemy(&self, index: usize) -> Option<&Combatant> {
        self.enemies.get(index)
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn phase(&self) -> EncounterPhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// One-shot abilities already spent in this encounter.
    pub fn consumed(&self) -> ActionSet {
        self.consumed
    }

    pub fn is_consumed(&self, action: ActionId) -> bool {
        self.consumed.has(action)
    }

    /// Actions the player may submit right now, ignoring hp affordability.
    pub fn available_actions(&self) -> ActionSet {
        if self.phase != EncounterPhase::SelectAction {
            return ActionSet::empty();
        }
        let always = ActionSet::ATTACK | ActionSet::PACT_CTHULHU;
        (self.player.granted() | always).difference(self.consumed)
    }

    /// Roster index of the first living enemy, the target of every damaging action.
    pub fn first_living_enemy(&self) -> Option<usize> {
        self.enemies.iter().position(|enemy| !enemy.is_defeated())
    }

    /// Roster indices of living enemies, in roster order.
    pub fn living_enemies(&self) -> impl Iterator<Item = usize> + '_ {
        self.enemies
            .iter()
            .enumerate()
            .filter(|(_, enemy)| !enemy.is_defeated())
            .map(|(index, _)| index)
    }

    pub fn all_enemies_defeated(&self) -> bool {
        self.enemies.iter().all(Combatant::is_defeated)
    }

    pub(crate) fn push_log(&mut self, kind: LogKind, message: impl Into<String>) {
        self.log.push(LogEntry::new(self.turn, kind, message));
    }
}
