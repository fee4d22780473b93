//! Random initial placement of the agent population

use std::ops::Range;

use agent_physics::{Group, WorldBounds};
use glam::DVec2;
use rand::Rng;

use crate::AgentSpec;

/// Population shape for [`random_population`]. Defaults give the stock
/// pond: a few heavy predators among a school of light prey, all spawned
/// inside the central region of the world with small random velocities.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnConfig {
    pub prey: usize,
    pub predators: usize,
    pub prey_mass: Range<f64>,
    pub predator_mass: Range<f64>,
    /// Initial velocity components are drawn from `-max..max` per axis
    pub max_start_speed: f64,
    /// Fraction of the world kept clear on each side when placing agents
    pub margin: f64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            prey: 95,
            predators: 5,
            prey_mass: 10.0..40.0,
            predator_mass: 400.0..900.0,
            max_start_speed: 3.0,
            margin: 0.1,
        }
    }
}

/// Generate agent specs for a randomized population. Predators come first
/// so their indices are stable for the presentation layer.
pub fn random_population(
    config: &SpawnConfig,
    bounds: WorldBounds,
    rng: &mut impl Rng,
) -> Vec<AgentSpec> {
    let mut specs = Vec::with_capacity(config.predators + config.prey);

    for _ in 0..config.predators {
        specs.push(spawn_one(
            config,
            bounds,
            rng,
            Group::Predator,
            config.predator_mass.clone(),
        ));
    }
    for _ in 0..config.prey {
        specs.push(spawn_one(
            config,
            bounds,
            rng,
            Group::Prey,
            config.prey_mass.clone(),
        ));
    }
    specs
}

fn spawn_one(
    config: &SpawnConfig,
    bounds: WorldBounds,
    rng: &mut impl Rng,
    group: Group,
    mass: Range<f64>,
) -> AgentSpec {
    let location = DVec2::new(
        rng.random_range(config.margin * bounds.width..(1.0 - config.margin) * bounds.width),
        rng.random_range(config.margin * bounds.height..(1.0 - config.margin) * bounds.height),
    );
    let velocity = DVec2::new(
        rng.random_range(-config.max_start_speed..config.max_start_speed),
        rng.random_range(-config.max_start_speed..config.max_start_speed),
    );
    AgentSpec {
        location,
        velocity,
        mass: rng.random_range(mass),
        group,
        max_speed: Some(group.max_speed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn population_matches_config() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = WorldBounds::new(900.0, 900.0);
        let config = SpawnConfig::default();
        let specs = random_population(&config, bounds, &mut rng);
        assert_eq!(specs.len(), 100);
        assert_eq!(
            specs.iter().filter(|s| s.group == Group::Predator).count(),
            5
        );
        // predators lead the list
        assert!(specs[..5].iter().all(|s| s.group == Group::Predator));

        for spec in &specs {
            assert!(spec.location.x >= 90.0 && spec.location.x <= 810.0);
            assert!(spec.location.y >= 90.0 && spec.location.y <= 810.0);
            assert!(spec.velocity.x.abs() <= 3.0 && spec.velocity.y.abs() <= 3.0);
            match spec.group {
                Group::Predator => assert!((400.0..900.0).contains(&spec.mass)),
                Group::Prey => assert!((10.0..40.0).contains(&spec.mass)),
            }
        }
    }

    #[test]
    fn seeded_spawns_are_reproducible() {
        let bounds = WorldBounds::new(600.0, 400.0);
        let config = SpawnConfig {
            prey: 10,
            predators: 2,
            ..SpawnConfig::default()
        };
        let a = random_population(&config, bounds, &mut StdRng::seed_from_u64(42));
        let b = random_population(&config, bounds, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
