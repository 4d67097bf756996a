//! Player action pipeline: pre_validate → apply → post_validate.

use crate::action::{ActionError, ActionId, ActionProfile, DamageRule, InvalidActionReason};
use crate::state::{EncounterPhase, LogKind};

use super::{CombatEngine, PLAYER_SLOT};

const VICTORY_LINE: &str = "Victory! The horrors retreat... for now.";

impl CombatEngine<'_> {
    /// Resolves one player action, leaving the encounter in `EnemyTurn`,
    /// `Victory`, or `Defeat` when a self-cost spent the player's last hp.
    pub(super) fn resolve_player_action(&mut self, action: ActionId) -> Result<(), ActionError> {
        let profile = action.profile();
        self.pre_validate(action, &profile)?;

        self.encounter.phase = EncounterPhase::Executing;
        self.apply(action, &profile);
        self.post_validate();
        self.encounter.nonce += 1;

        if self.encounter.all_enemies_defeated() {
            self.encounter.phase = EncounterPhase::Victory;
            self.encounter.push_log(LogKind::Victory, VICTORY_LINE);
            tracing::info!(
                target: "core::combat",
                turn = self.encounter.turn,
                "encounter won"
            );
        } else if self.encounter.player.is_defeated() {
            self.declare_defeat();
        } else {
            self.encounter.phase = EncounterPhase::EnemyTurn;
        }

        Ok(())
    }

    /// Checks phase, grant, one-shot and hp preconditions without mutating anything.
    fn pre_validate(&self, action: ActionId, profile: &ActionProfile) -> Result<(), ActionError> {
        let phase = self.encounter.phase;
        if phase != EncounterPhase::SelectAction {
            return Err(ActionError::invalid(
                action.as_ref(),
                InvalidActionReason::OutOfPhase(phase),
            ));
        }

        let player = &self.encounter.player;
        if profile.requires_grant && !player.granted().has(action) {
            return Err(ActionError::invalid(
                action.as_ref(),
                InvalidActionReason::NotGranted,
            ));
        }

        if profile.one_shot && self.encounter.is_consumed(action) {
            return Err(ActionError::AbilityExhausted(action));
        }

        if !profile.affordable(player.hp()) {
            return Err(ActionError::InsufficientResource {
                action,
                required: profile.min_hp(),
                available: player.hp(),
            });
        }

        Ok(())
    }

    /// Applies self-cost, then target damage, then sanity cost.
    fn apply(&mut self, action: ActionId, profile: &ActionProfile) {
        // 1. Self-cost and self-heal
        self.encounter
            .player
            .meter_mut()
            .deplete(profile.self_cost);
        let healed = if profile.heal_percent > 0 {
            let amount = profile.heal_amount(self.encounter.player.hp());
            self.encounter.player.meter_mut().restore(amount)
        } else {
            0
        };

        // 2. Target damage
        let damage = match profile.damage {
            DamageRule::None => 0,
            DamageRule::Fixed(amount) => amount,
            DamageRule::Uniform { min, max } => {
                self.env
                    .roll(self.encounter.nonce, PLAYER_SLOT, 0, min, max)
            }
        };
        let target = self.encounter.first_living_enemy();
        let target_name = target
            .and_then(|index| self.encounter.enemy(index))
            .map(|enemy| enemy.name().to_owned());

        let message = narrate(
            action,
            profile,
            self.encounter.player.name(),
            target_name.as_deref(),
            damage,
            healed,
        );
        self.encounter.push_log(LogKind::PlayerAction, message);

        if let (Some(index), true) = (target, damage > 0) {
            let enemy = &mut self.encounter.enemies[index];
            enemy.meter_mut().deplete(damage);
            if enemy.is_defeated() {
                let line = format!("{} is defeated!", enemy.name());
                self.encounter.push_log(LogKind::EnemyDefeated, line);
            }
        }

        // 3. Sanity cost
        if profile.sanity_cost > 0 {
            self.sanity.apply(-(profile.sanity_cost as i32));
        }

        if profile.one_shot {
            self.encounter.consumed |= action.flag();
        }

        tracing::debug!(
            target: "core::combat",
            action = %action,
            damage,
            healed,
            enemy = ?target,
            player_hp = self.encounter.player.hp(),
            "player action resolved"
        );
    }

    fn post_validate(&self) {
        debug_assert!(
            self.encounter.player.hp() <= self.encounter.player.max_hp(),
            "player hp exceeds maximum after action"
        );
        debug_assert!(
            self.encounter
                .enemies
                .iter()
                .all(|enemy| enemy.hp() <= enemy.max_hp()),
            "enemy hp exceeds maximum after action"
        );
    }
}

fn narrate(
    action: ActionId,
    profile: &ActionProfile,
    actor: &str,
    target: Option<&str>,
    damage: u32,
    healed: u32,
) -> String {
    match action {
        ActionId::Attack => format!("{actor} attacks for {damage} damage!"),
        ActionId::LuckyShot => format!("{actor} fires a Lucky Shot for {damage} damage!"),
        ActionId::BloodMagic => format!(
            "{actor} casts Blood Magic, sacrificing {} HP for {damage} damage!",
            profile.self_cost
        ),
        ActionId::Analyze => format!(
            "{actor} analyzes {}, revealing weaknesses!",
            target.unwrap_or("the enemy")
        ),
        ActionId::DagonsEmbrace => format!(
            "{actor} heals for {healed} HP but loses {} sanity!",
            profile.sanity_cost
        ),
        ActionId::PactCthulhu => {
            format!("{actor} forms a pact with Cthulhu! Massive damage but at terrible cost!")
        }
    }
}
