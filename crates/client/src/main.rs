//! Eldritch demo client binary.
//!
//! Plays one scripted encounter and prints its log.
//!
//! # Examples
//!
//! ```bash
//! ELDRITCH_CLASS=witch ELDRITCH_ACTIONS="blood_magic,pact_cthulhu" \
//!     cargo run -p eldritch-client
//! ```

use anyhow::Result;
use eldritch_client::ClientConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(data_dir = %config.data_dir.display(), "starting eldritch client");

    let report = eldritch_client::run(&config)?;

    for entry in &report.log {
        println!("[turn {}] {}", entry.turn, entry);
    }
    for (action, reason) in &report.rejected {
        println!("rejected '{action}': {reason}");
    }
    println!(
        "Outcome: {} | hp {} | sanity {} ({})",
        report.phase, report.player_hp, report.sanity.sanity, report.sanity.madness
    );

    Ok(())
}
