//! Headless chainsaw session.
//!
//! Configuration is read from the environment (and a `.env` file, if
//! present); see [`SimConfig::from_env`]. Set `RUST_LOG=debug` to see every
//! animation, sound, and strike.

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use weapon_content::WeaponLoader;
use weapon_core::WeaponConfig;
use weapon_sim::{SimConfig, run};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env();
    let weapon = match &config.weapon_def {
        Some(path) => WeaponLoader::load(path)
            .with_context(|| format!("Failed to load weapon definition {}", path.display()))?,
        None => WeaponConfig::chainsaw(),
    };

    tracing::info!(
        "simulating {} ticks of {}ms (fire interval {}ms)",
        config.ticks,
        config.tick_ms,
        weapon.fire_interval_ms
    );

    let summary = run(&config, &weapon);

    tracing::info!(
        "{} strikes, {} state changes, {} errors; final state {}",
        summary.strikes.len(),
        summary.transitions.len(),
        summary.errors.len(),
        summary.final_state()
    );

    Ok(())
}
