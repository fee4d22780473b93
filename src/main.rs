//! Koi Pond
//!
//! Headless run of the predator/prey pond: five heavy predators stalking a
//! school of prey in a 900x900 world, with a liquid strip across the bottom.
//! A scripted wind gust stands in for an interactive input trigger.

mod display;

use agent_physics::{Group, WorldBounds, Zone};
use agent_simulation::{random_population, Simulation, SimulationParams, SpawnConfig};
use display::Sprite;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

const WORLD: WorldBounds = WorldBounds {
    width: 900.0,
    height: 900.0,
};
const STEPS: u64 = 1_000;
const REPORT_EVERY: u64 = 100;
/// Wind blows for the second half of each report interval.
const GUST_PHASE: u64 = 50;

fn mean_speed(sim: &Simulation) -> f64 {
    let total: f64 = sim.agents().iter().map(|a| a.velocity.length()).sum();
    total / sim.agents().len() as f64
}

/// Distance between the predator and prey centroids, a rough measure of
/// how spread the chase is.
fn pack_separation(sim: &Simulation) -> f64 {
    let mut predators = (DVec2::ZERO, 0.0);
    let mut prey = (DVec2::ZERO, 0.0);
    for agent in sim.agents() {
        let bucket = match agent.group {
            Group::Predator => &mut predators,
            Group::Prey => &mut prey,
        };
        bucket.0 += agent.location;
        bucket.1 += 1.0;
    }
    (predators.0 / predators.1).distance(prey.0 / prey.1)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut rng = StdRng::seed_from_u64(0x4B01);
    let specs = random_population(&SpawnConfig::default(), WORLD, &mut rng);
    let liquid = Zone::new(0.0, WORLD.height * 0.75, WORLD.width, WORLD.height * 0.25, 10.0);

    let params = SimulationParams {
        // open water: no gravity pulling the school down
        gravity: DVec2::ZERO,
        ..SimulationParams::default()
    };

    let mut sim = match Simulation::new(&specs, vec![liquid], WORLD, params) {
        Ok(sim) => sim,
        Err(err) => {
            log::error!("failed to build the pond: {err}");
            std::process::exit(1);
        }
    };

    // Presentation records live next to, not inside, the physics agents;
    // the two line up by index.
    let mut sprites: Vec<Sprite> = sim
        .agents()
        .iter()
        .enumerate()
        .map(|(index, agent)| Sprite::new(index, agent))
        .collect();

    for tick in 0..STEPS {
        let wind_active = tick % REPORT_EVERY >= GUST_PHASE;
        sim.step(wind_active);

        for (sprite, agent) in sprites.iter_mut().zip(sim.agents()) {
            sprite.update(agent);
        }

        if (tick + 1) % REPORT_EVERY == 0 {
            let segments: usize = sprites.iter().map(|s| s.body.len()).sum();
            log::info!(
                "step {:4}: mean speed {:5.2}, pack separation {:6.1}, {} body segments",
                tick + 1,
                mean_speed(&sim),
                pack_separation(&sim),
                segments
            );
        }
    }

    log::info!("pond ran {} steps", sim.steps());
}
