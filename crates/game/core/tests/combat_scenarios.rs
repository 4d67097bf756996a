//! End-to-end encounter resolution through the public engine API.

use eldritch_core::{
    ActionError, ActionId, CombatEncounter, CombatEngine, CombatEnv, Combatant, EncounterPhase,
    InvalidActionReason, LogKind, ResourceMeter, RngOracle, SanityTracker, Side, TurnError,
};

/// Oracle that always yields the same raw value.
struct FixedRng(u32);

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

fn player(hp: u32, max_hp: u32, abilities: &[&str]) -> Combatant {
    Combatant::new("Murphy", Side::Player, ResourceMeter::new(hp, max_hp))
        .with_abilities(abilities.iter().copied())
}

fn enemy(name: &str, hp: u32, abilities: &[&str]) -> Combatant {
    Combatant::new(name, Side::Enemy, ResourceMeter::full(hp))
        .with_abilities(abilities.iter().copied())
}

fn kinds(events: &[eldritch_core::LogEntry]) -> Vec<LogKind> {
    events.iter().map(|entry| entry.kind).collect()
}

#[test]
fn basic_attack_hits_first_enemy_then_enemies_act() {
    let mut encounter = CombatEncounter::new(
        player(90, 90, &[]),
        [
            enemy("Masked Cultist", 50, &["Dark Chant"]),
            enemy("Deep One", 60, &[]),
        ],
    )
    .unwrap();
    let mut sanity = SanityTracker::new();
    let rng = FixedRng(0);
    let mut engine = CombatEngine::new(&mut encounter, &mut sanity, CombatEnv::new(&rng, 7));

    let outcome = engine.execute_player_action(ActionId::Attack).unwrap();
    assert_eq!(outcome.phase, EncounterPhase::EnemyTurn);
    assert_eq!(outcome.events.len(), 1);
    assert_eq!(outcome.events[0].message, "Murphy attacks for 30 damage!");
    assert_eq!(engine.encounter().enemies()[0].hp(), 20);

    let outcome = engine.resolve_enemy_turn().unwrap();
    assert_eq!(outcome.phase, EncounterPhase::SelectAction);
    assert_eq!(
        kinds(&outcome.events),
        vec![LogKind::EnemyAction, LogKind::EnemyAction]
    );
    assert_eq!(
        outcome.events[0].message,
        "Masked Cultist chants in an ancient tongue! You lose 15 sanity!"
    );
    assert_eq!(outcome.events[1].message, "Deep One attacks for 25 damage!");

    assert_eq!(engine.sanity().sanity, 85);
    assert_eq!(engine.encounter().player().hp(), 65);
    assert_eq!(engine.encounter().turn(), 1);
    assert_eq!(engine.encounter().nonce(), 3);
}

#[test]
fn submit_resolves_the_whole_round() {
    let mut encounter = CombatEncounter::new(
        player(90, 90, &[]),
        [enemy("Masked Cultist", 50, &["Ritual Blade"])],
    )
    .unwrap();
    let mut sanity = SanityTracker::new();
    let mut engine = CombatEngine::new(&mut encounter, &mut sanity, CombatEnv::seeded(11));

    let outcome = engine.submit(ActionId::Attack).unwrap();

    assert_eq!(outcome.phase, EncounterPhase::SelectAction);
    assert_eq!(
        kinds(&outcome.events),
        vec![LogKind::PlayerAction, LogKind::EnemyAction]
    );
    assert!(outcome.events.iter().all(|entry| entry.turn == 0));
    assert_eq!(engine.encounter().player().hp(), 65);
}

#[test]
fn pact_wins_in_one_blow() {
    let mut encounter =
        CombatEncounter::new(player(100, 100, &[]), [enemy("Shoggoth Spawn", 200, &[])]).unwrap();
    let mut sanity = SanityTracker::new();
    let mut engine = CombatEngine::new(&mut encounter, &mut sanity, CombatEnv::seeded(1));

    let outcome = engine.submit(ActionId::PactCthulhu).unwrap();

    assert_eq!(outcome.phase, EncounterPhase::Victory);
    assert_eq!(
        kinds(&outcome.events),
        vec![LogKind::PlayerAction, LogKind::EnemyDefeated, LogKind::Victory]
    );
    assert_eq!(outcome.events[1].message, "Shoggoth Spawn is defeated!");
    assert_eq!(
        outcome.events[2].message,
        "Victory! The horrors retreat... for now."
    );

    let encounter = engine.encounter();
    assert_eq!(encounter.enemies()[0].hp(), 0);
    assert_eq!(encounter.player().hp(), 50);
    assert!(encounter.is_consumed(ActionId::PactCthulhu));
    assert_eq!(engine.sanity().sanity, 70);
}

#[test]
fn lethal_enemy_ends_the_batch() {
    let mut encounter = CombatEncounter::new(
        player(20, 90, &[]),
        [
            enemy("Cultist A", 100, &[]),
            enemy("Cultist B", 100, &[]),
            enemy("Cultist C", 100, &[]),
        ],
    )
    .unwrap();
    let mut sanity = SanityTracker::new();
    let mut engine = CombatEngine::new(&mut encounter, &mut sanity, CombatEnv::seeded(3));

    let outcome = engine.submit(ActionId::Attack).unwrap();

    assert_eq!(outcome.phase, EncounterPhase::Defeat);
    assert_eq!(
        kinds(&outcome.events),
        vec![LogKind::PlayerAction, LogKind::EnemyAction, LogKind::Defeat]
    );
    assert!(outcome.events[1].message.starts_with("Cultist A"));
    assert_eq!(
        outcome.events[2].message,
        "You have been defeated by the cosmic horrors..."
    );
    assert_eq!(engine.encounter().player().hp(), 0);
    assert_eq!(engine.encounter().nonce(), 2);
    assert_eq!(engine.encounter().turn(), 0);
}

#[test]
fn pact_cannot_be_repeated() {
    let mut encounter = CombatEncounter::new(
        player(100, 100, &[]),
        [
            enemy("Masked Cultist", 200, &[]),
            enemy("Whisperer", 300, &["Mind Rend"]),
        ],
    )
    .unwrap();
    let mut sanity = SanityTracker::new();
    let mut engine = CombatEngine::new(&mut encounter, &mut sanity, CombatEnv::seeded(5));

    let outcome = engine.submit(ActionId::PactCthulhu).unwrap();
    assert_eq!(outcome.phase, EncounterPhase::SelectAction);
    assert_eq!(engine.encounter().player().hp(), 50);
    assert_eq!(engine.sanity().sanity, 45);

    let log_len = engine.encounter().log().len();
    let err = engine.submit(ActionId::PactCthulhu).unwrap_err();
    assert_eq!(err, ActionError::AbilityExhausted(ActionId::PactCthulhu));
    assert_eq!(engine.encounter().log().len(), log_len);
    assert_eq!(engine.encounter().player().hp(), 50);
    assert_eq!(engine.encounter().phase(), EncounterPhase::SelectAction);
    assert!(!engine.encounter().available_actions().has(ActionId::PactCthulhu));
}

#[test]
fn blood_magic_needs_more_hp_than_its_cost() {
    let mut encounter = CombatEncounter::new(
        player(25, 70, &["Blood Magic"]),
        [enemy("Masked Cultist", 45, &[])],
    )
    .unwrap();
    let mut sanity = SanityTracker::new();
    let mut engine = CombatEngine::new(&mut encounter, &mut sanity, CombatEnv::seeded(9));

    let err = engine.submit(ActionId::BloodMagic).unwrap_err();
    assert_eq!(
        err,
        ActionError::InsufficientResource {
            action: ActionId::BloodMagic,
            required: 26,
            available: 25,
        }
    );
    assert_eq!(engine.encounter().player().hp(), 25);
    assert_eq!(engine.encounter().enemies()[0].hp(), 45);
    assert_eq!(engine.sanity().sanity, 100);
    assert_eq!(engine.encounter().log().len(), 1);
    assert_eq!(engine.encounter().phase(), EncounterPhase::SelectAction);
}

#[test]
fn pact_needs_hp_to_cover_its_cost() {
    let mut encounter =
        CombatEncounter::new(player(49, 100, &[]), [enemy("Shoggoth Spawn", 200, &[])]).unwrap();
    let mut sanity = SanityTracker::new();
    let mut engine = CombatEngine::new(&mut encounter, &mut sanity, CombatEnv::seeded(9));

    let err = engine.submit(ActionId::PactCthulhu).unwrap_err();
    assert_eq!(
        err,
        ActionError::InsufficientResource {
            action: ActionId::PactCthulhu,
            required: 50,
            available: 49,
        }
    );

    let encounter = engine.encounter();
    assert_eq!(encounter.player().hp(), 49);
    assert_eq!(encounter.enemies()[0].hp(), 200);
    assert_eq!(encounter.log().len(), 1);
    assert_eq!(encounter.phase(), EncounterPhase::SelectAction);
    assert!(!encounter.is_consumed(ActionId::PactCthulhu));
    assert_eq!(engine.sanity().sanity, 100);
}

#[test]
fn pact_may_spend_the_last_hp() {
    let mut encounter =
        CombatEncounter::new(player(50, 100, &[]), [enemy("Shoggoth Spawn", 200, &[])]).unwrap();
    let mut sanity = SanityTracker::new();
    let mut engine = CombatEngine::new(&mut encounter, &mut sanity, CombatEnv::seeded(9));

    let outcome = engine.submit(ActionId::PactCthulhu).unwrap();

    assert_eq!(outcome.phase, EncounterPhase::Victory);
    assert_eq!(engine.encounter().player().hp(), 0);
    assert_eq!(engine.encounter().enemies()[0].hp(), 0);
    assert_eq!(engine.sanity().sanity, 70);
}

#[test]
fn pact_that_spends_the_last_hp_against_survivors_is_defeat() {
    let mut encounter = CombatEncounter::new(
        player(50, 100, &[]),
        [
            enemy("Masked Cultist", 200, &[]),
            enemy("Whisperer", 300, &["Mind Rend"]),
        ],
    )
    .unwrap();
    let mut sanity = SanityTracker::new();
    let mut engine = CombatEngine::new(&mut encounter, &mut sanity, CombatEnv::seeded(9));

    let outcome = engine.submit(ActionId::PactCthulhu).unwrap();

    assert_eq!(outcome.phase, EncounterPhase::Defeat);
    assert_eq!(
        kinds(&outcome.events),
        vec![LogKind::PlayerAction, LogKind::EnemyDefeated, LogKind::Defeat]
    );
    assert_eq!(engine.encounter().player().hp(), 0);
    assert_eq!(engine.encounter().enemies()[1].hp(), 300);
    assert_eq!(engine.sanity().sanity, 70);
    assert_eq!(
        engine.resolve_enemy_turn().unwrap_err(),
        TurnError::NotEnemyTurn(EncounterPhase::Defeat)
    );
}

#[test]
fn spent_pact_reports_exhaustion_even_at_low_hp() {
    let mut encounter = CombatEncounter::new(
        player(100, 100, &[]),
        [
            enemy("Masked Cultist", 200, &[]),
            enemy("Deep One", 300, &[]),
        ],
    )
    .unwrap();
    let mut sanity = SanityTracker::new();
    let mut engine = CombatEngine::new(&mut encounter, &mut sanity, CombatEnv::seeded(5));

    let outcome = engine.submit(ActionId::PactCthulhu).unwrap();
    assert_eq!(outcome.phase, EncounterPhase::SelectAction);
    assert_eq!(engine.encounter().player().hp(), 25);
    assert_eq!(engine.sanity().sanity, 70);

    let log_len = engine.encounter().log().len();
    let err = engine.submit(ActionId::PactCthulhu).unwrap_err();
    assert_eq!(err, ActionError::AbilityExhausted(ActionId::PactCthulhu));
    assert_eq!(engine.encounter().player().hp(), 25);
    assert_eq!(engine.encounter().enemies()[1].hp(), 300);
    assert_eq!(engine.encounter().log().len(), log_len);
    assert_eq!(engine.sanity().sanity, 70);
}

#[test]
fn blood_magic_spends_hp_for_damage() {
    let mut encounter = CombatEncounter::new(
        player(26, 70, &["Blood Magic"]),
        [enemy("Masked Cultist", 45, &[]), enemy("Deep One", 80, &[])],
    )
    .unwrap();
    let mut sanity = SanityTracker::new();
    let mut engine = CombatEngine::new(&mut encounter, &mut sanity, CombatEnv::seeded(9));

    let outcome = engine.execute_player_action(ActionId::BloodMagic).unwrap();

    assert_eq!(
        outcome.events[0].message,
        "Murphy casts Blood Magic, sacrificing 25 HP for 75 damage!"
    );
    assert_eq!(outcome.events[1].message, "Masked Cultist is defeated!");
    assert_eq!(engine.encounter().player().hp(), 1);
    // Overkill does not spill onto the next enemy.
    assert_eq!(engine.encounter().enemies()[0].hp(), 0);
    assert_eq!(engine.encounter().enemies()[1].hp(), 80);
    assert_eq!(engine.encounter().first_living_enemy(), Some(1));
}

#[test]
fn ungranted_abilities_are_rejected() {
    let mut encounter =
        CombatEncounter::new(player(90, 90, &["Investigate"]), [enemy("Cultist", 45, &[])])
            .unwrap();
    let mut sanity = SanityTracker::new();
    let mut engine = CombatEngine::new(&mut encounter, &mut sanity, CombatEnv::seeded(2));

    let err = engine.submit(ActionId::LuckyShot).unwrap_err();
    assert_eq!(
        err,
        ActionError::invalid("lucky_shot", InvalidActionReason::NotGranted)
    );

    let err = engine.submit_named("summon_byakhee").unwrap_err();
    assert_eq!(
        err,
        ActionError::invalid("summon_byakhee", InvalidActionReason::Unknown)
    );
}

#[test]
fn display_names_are_accepted() {
    let mut encounter = CombatEncounter::new(
        player(90, 90, &["Lucky Shot"]),
        [enemy("Masked Cultist", 45, &[])],
    )
    .unwrap();
    let mut sanity = SanityTracker::new();
    let rng = FixedRng(41);
    let mut engine = CombatEngine::new(&mut encounter, &mut sanity, CombatEnv::new(&rng, 0));

    let outcome = engine.submit_named("Lucky Shot").unwrap();
    assert_eq!(
        outcome.events[0].message,
        "Murphy fires a Lucky Shot for 42 damage!"
    );
    assert_eq!(engine.encounter().enemies()[0].hp(), 3);
}

#[test]
fn embrace_heals_half_current_hp_capped_at_max() {
    let mut encounter = CombatEncounter::new(
        player(80, 90, &["Dagon's Embrace"]),
        [enemy("Whisperer", 150, &["Mind Rend"])],
    )
    .unwrap();
    let mut sanity = SanityTracker::new();
    let mut engine = CombatEngine::new(&mut encounter, &mut sanity, CombatEnv::seeded(4));

    let outcome = engine.execute_player_action(ActionId::DagonsEmbrace).unwrap();

    assert_eq!(
        outcome.events[0].message,
        "Murphy heals for 10 HP but loses 10 sanity!"
    );
    assert_eq!(engine.encounter().player().hp(), 90);
    assert_eq!(engine.encounter().enemies()[0].hp(), 150);
    assert_eq!(engine.sanity().sanity, 90);
}

#[test]
fn analyze_only_narrates() {
    let mut encounter = CombatEncounter::new(
        player(90, 90, &["Analyze"]),
        [enemy("Shoggoth Spawn", 80, &[])],
    )
    .unwrap();
    let mut sanity = SanityTracker::new();
    let mut engine = CombatEngine::new(&mut encounter, &mut sanity, CombatEnv::seeded(4));

    let outcome = engine.execute_player_action(ActionId::Analyze).unwrap();
    assert_eq!(
        outcome.events[0].message,
        "Murphy analyzes Shoggoth Spawn, revealing weaknesses!"
    );
    assert_eq!(engine.encounter().enemies()[0].hp(), 80);
    assert_eq!(engine.encounter().player().hp(), 90);
}

#[test]
fn terminal_phases_reject_everything() {
    let mut encounter =
        CombatEncounter::new(player(100, 100, &[]), [enemy("Cultist", 30, &[])]).unwrap();
    let mut sanity = SanityTracker::new();
    let mut engine = CombatEngine::new(&mut encounter, &mut sanity, CombatEnv::seeded(8));

    assert_eq!(
        engine.resolve_enemy_turn().unwrap_err(),
        TurnError::NotEnemyTurn(EncounterPhase::SelectAction)
    );

    assert_eq!(
        engine.submit(ActionId::Attack).unwrap().phase,
        EncounterPhase::Victory
    );
    let err = engine.submit(ActionId::Attack).unwrap_err();
    assert_eq!(
        err,
        ActionError::invalid(
            "attack",
            InvalidActionReason::OutOfPhase(EncounterPhase::Victory)
        )
    );
    assert!(engine.encounter().available_actions().is_empty());
}

#[test]
fn player_action_out_of_enemy_turn_is_rejected() {
    let mut encounter =
        CombatEncounter::new(player(90, 90, &[]), [enemy("Cultist", 90, &[])]).unwrap();
    let mut sanity = SanityTracker::new();
    let mut engine = CombatEngine::new(&mut encounter, &mut sanity, CombatEnv::seeded(8));

    engine.execute_player_action(ActionId::Attack).unwrap();
    let err = engine.execute_player_action(ActionId::Attack).unwrap_err();
    assert_eq!(
        err,
        ActionError::invalid(
            "attack",
            InvalidActionReason::OutOfPhase(EncounterPhase::EnemyTurn)
        )
    );
}

#[test]
fn same_seed_replays_identically() {
    fn play(seed: u64) -> (Vec<String>, u32, u32) {
        let mut encounter = CombatEncounter::new(
            player(90, 90, &["Lucky Shot"]),
            [
                enemy("Shoggoth Spawn", 400, &["Tentacle Lash", "Mind Rend", "Shapeshift"]),
                enemy("Masked Cultist", 400, &["Dark Chant", "Ritual Blade"]),
            ],
        )
        .unwrap();
        let mut sanity = SanityTracker::new();
        let mut engine = CombatEngine::new(&mut encounter, &mut sanity, CombatEnv::seeded(seed));

        for _ in 0..3 {
            match engine.submit(ActionId::LuckyShot) {
                Ok(outcome) if outcome.is_terminal() => break,
                Ok(_) => {}
                Err(_) => break,
            }
        }

        let sanity = engine.sanity().sanity;
        let hp = engine.encounter().player().hp();
        let log = engine
            .encounter()
            .log()
            .iter()
            .map(|entry| entry.message.clone())
            .collect();
        (log, hp, sanity)
    }

    assert_eq!(play(0xC0FFEE), play(0xC0FFEE));
}

#[test]
fn hp_stays_within_bounds() {
    let mut encounter = CombatEncounter::new(
        player(90, 90, &["Dagon's Embrace", "Lucky Shot"]),
        [
            enemy("Shoggoth Spawn", 80, &["Tentacle Lash", "Shapeshift"]),
            enemy("Masked Cultist", 45, &["Ritual Blade"]),
        ],
    )
    .unwrap();
    let mut sanity = SanityTracker::new();
    let mut engine = CombatEngine::new(&mut encounter, &mut sanity, CombatEnv::seeded(42));

    let script = [
        ActionId::DagonsEmbrace,
        ActionId::LuckyShot,
        ActionId::Attack,
        ActionId::DagonsEmbrace,
        ActionId::Attack,
    ];
    for action in script {
        if engine.encounter().is_over() {
            break;
        }
        engine.submit(action).unwrap();

        let encounter = engine.encounter();
        assert!(encounter.player().hp() <= encounter.player().max_hp());
        for enemy in encounter.enemies() {
            assert!(enemy.hp() <= enemy.max_hp());
        }
        assert!(engine.sanity().sanity <= 100);
    }
}
