/*
 * Dartflock
 *
 * A bounded 2D flock of boids that blend toward their neighbors' heading,
 * bounce off the world boundary, and shrug off the flock for a short
 * while after each bounce. Boids draw as arrowhead triangles pointing
 * along their velocity.
 *
 * Set FLOCK_SEED to pin the RNG seed for a reproducible run.
 */

use anyhow::Result;
use tracing::info;

use dartflock::app;
use dartflock::SimulationParams;

fn main() -> Result<()> {
    init_tracing();

    // Fail fast on bad tuning constants before any window exists.
    SimulationParams::default().validate()?;
    info!(seed = app::rng_seed(), "starting dartflock");

    nannou::app(app::model).update(app::update).run();
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
