/*
 * Moving-Point KNN Simulation - Headless Driver
 *
 * This binary stands in for a rendering front end: it seeds the point set,
 * runs the simulation for a fixed number of ticks, and reports per-tick
 * neighbor statistics instead of drawing connecting lines. Point count,
 * seed, and tick count come from environment variables so runs are
 * reproducible.
 */

use std::env;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use knn_points::{SimError, Simulation, SimulationParams};

const TICK_DT: f32 = 1.0 / 60.0;

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(default)
}

fn main() -> Result<(), SimError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let seed = env_u64("KNN_SEED", 1);
    let ticks = env_u64("KNN_TICKS", 300);
    let params = SimulationParams {
        num_points: env_u64("KNN_POINTS", 100) as usize,
        ..SimulationParams::default()
    };

    info!(
        seed,
        ticks,
        points = params.num_points,
        cell_size = params.cell_size,
        k = params.k,
        "starting simulation"
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let mut sim = Simulation::new(params, &mut rng)?;

    for tick in 0..ticks {
        sim.step(TICK_DT)?;
        let lists = sim.neighbor_lists();
        let total: usize = lists.iter().map(Vec::len).sum();
        let short = lists.iter().filter(|l| l.len() < sim.params.k).count();

        if tick % 60 == 0 {
            info!(
                tick,
                occupied_cells = sim.grid().occupied_cells(),
                avg_neighbors = total as f32 / lists.len() as f32,
                short_lists = short,
                "tick stats"
            );
        }
    }

    info!("simulation finished");
    Ok(())
}
