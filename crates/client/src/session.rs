//! Runs one scripted encounter end to end.

use anyhow::{Context, Result};
use eldritch_content::ContentFactory;
use eldritch_core::{
    ActionId, CombatEncounter, CombatEngine, CombatEnv, Combatant, EncounterPhase, GameError,
    LogEntry, SanityState, SanityTracker,
};

use crate::config::ClientConfig;

/// Final state of a finished session.
#[derive(Clone, Debug)]
pub struct SessionReport {
    pub log: Vec<LogEntry>,
    pub phase: EncounterPhase,
    pub sanity: SanityState,
    pub player_hp: u32,
    /// Scripted actions the engine rejected, with the reason.
    pub rejected: Vec<(String, String)>,
}

/// Loads content, plays the scripted actions and returns the outcome.
pub fn run(config: &ClientConfig) -> Result<SessionReport> {
    let factory = ContentFactory::new(&config.data_dir);
    let game_config = factory
        .load_config()
        .context("loading game configuration")?;
    let sheet = factory
        .character(config.class, &config.name)
        .context("loading character classes")?;
    let roster = factory
        .load_bestiary()
        .context("loading bestiary")?
        .roster(config.enemies);

    let mut sanity = SanityTracker::from_config(&game_config);
    let mut encounter = CombatEncounter::new(Combatant::player(&sheet), roster)?
        .with_sanity_notice(&sanity.current(), &game_config);

    tracing::info!(
        class = %config.class,
        seed = config.seed,
        enemies = encounter.enemies().len(),
        "encounter started"
    );

    let mut rejected = Vec::new();
    {
        let mut engine =
            CombatEngine::new(&mut encounter, &mut sanity, CombatEnv::seeded(config.seed));

        for action in &config.actions {
            if engine.encounter().is_over() {
                break;
            }
            if let Err(err) = engine.submit_named(action) {
                tracing::warn!(
                    action = %action,
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    "action rejected: {}",
                    err
                );
                rejected.push((action.clone(), err.to_string()));
            }
        }

        while !engine.encounter().is_over() {
            engine.submit(ActionId::Attack)?;
        }
    }

    tracing::info!(
        phase = %encounter.phase(),
        turns = encounter.turn(),
        sanity = sanity.current().sanity,
        "encounter finished"
    );

    Ok(SessionReport {
        log: encounter.log().to_vec(),
        phase: encounter.phase(),
        sanity: sanity.current(),
        player_hp: encounter.player().hp(),
        rejected,
    })
}
