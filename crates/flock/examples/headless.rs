//! Headless run: tick the reference world, then export trails and settings.
//!
//! Usage: `cargo run --example headless -- [ticks] [seed]`
//!
//! Set `RUST_LOG=flock_engine=debug` to watch churn events.

use std::error::Error;
use std::time::{SystemTime, UNIX_EPOCH};

use flock::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let ticks: u64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(1000);
    let seed: u64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(42);

    let out_dir = std::env::temp_dir().join("flock");
    let settings_path = out_dir.join("flock-options.json");
    let settings = SettingsStore::load(&settings_path)?;

    let mut world = FlockWorld::new(WorldConfig::reference(seed))?;
    settings.apply_to(&mut world)?;

    let mut trails = TrailBook::new();
    let mut churned = 0u64;
    let mut total_us = 0u64;
    for tick in 0..ticks {
        let metrics = world.tick();
        churned += u64::from(metrics.churned);
        total_us += metrics.total_us;
        trails.record(&world.snapshot());
        if (tick + 1) % 250 == 0 {
            info!(
                tick = tick + 1,
                population = metrics.population,
                mean_neighbours = metrics.mean_neighbours,
                "progress"
            );
        }
    }
    info!(ticks, churned, total_us, "run complete");

    let stamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis();
    let svg_path = out_dir.join(SvgExporter::file_name(stamp));
    std::fs::create_dir_all(&out_dir)?;
    SvgExporter::new(*world.bounds()).write(&svg_path, &world.snapshot(), &trails)?;
    settings.save(&settings_path)?;

    println!("{}", svg_path.display());
    Ok(())
}
