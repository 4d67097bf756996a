//! Enemy turn resolution.

use crate::action::EnemyAbility;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EncounterPhase, LogKind};

use super::CombatEngine;

const DEFEAT_LINE: &str = "You have been defeated by the cosmic horrors...";

/// Errors raised when driving the enemy turn directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    #[error("enemy turn cannot resolve in phase {0}")]
    NotEnemyTurn(EncounterPhase),
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotEnemyTurn(_) => "TURN_NOT_ENEMY_TURN",
        }
    }
}

impl CombatEngine<'_> {
    /// Lets every enemy alive at the start of the turn act once, in roster order.
    ///
    /// Stops early on player defeat; otherwise advances the turn counter and
    /// hands control back to the player.
    pub(super) fn run_enemy_turn(&mut self) {
        let acting: Vec<usize> = self.encounter.living_enemies().collect();

        for index in acting {
            if self.encounter.enemies[index].is_defeated() {
                continue;
            }

            self.resolve_enemy_action(index);

            if self.encounter.player.is_defeated() {
                self.declare_defeat();
                return;
            }
        }

        self.encounter.turn += 1;
        self.encounter.phase = EncounterPhase::SelectAction;
    }

    /// Ends the encounter in `Defeat` and logs the closing line.
    pub(super) fn declare_defeat(&mut self) {
        self.encounter.phase = EncounterPhase::Defeat;
        self.encounter.push_log(LogKind::Defeat, DEFEAT_LINE);
        tracing::info!(
            target: "core::combat",
            turn = self.encounter.turn,
            "encounter lost"
        );
    }

    fn resolve_enemy_action(&mut self, index: usize) {
        let slot = index as u32 + 1;
        let enemy = &self.encounter.enemies[index];
        let pool = enemy.abilities();
        let ability = if pool.is_empty() {
            EnemyAbility::Baseline
        } else {
            let pick = self.env.pick(self.encounter.nonce, slot, 0, pool.len());
            EnemyAbility::from_name(&pool[pick])
        };
        let message = ability.narrate(enemy.name());
        let effect = ability.effect();

        self.encounter.push_log(LogKind::EnemyAction, message);

        let dealt = self.encounter.player.meter_mut().deplete(effect.damage);
        if effect.sanity_damage > 0 {
            self.sanity.apply(-(effect.sanity_damage as i32));
        }
        self.encounter.nonce += 1;

        tracing::debug!(
            target: "core::combat",
            enemy = index,
            ability = %ability,
            damage = dealt,
            sanity_damage = effect.sanity_damage,
            player_hp = self.encounter.player.hp(),
            "enemy action resolved"
        );
    }
}
