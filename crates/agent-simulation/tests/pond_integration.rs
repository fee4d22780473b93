//! Long-run integration checks on a full pond scenario

use agent_physics::{Group, WorldBounds, Zone};
use agent_simulation::{
    random_population, AgentSpec, Simulation, SimulationParams, SpawnConfig,
};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn pond_params() -> SimulationParams {
    // the pond scenario: pure pairwise dynamics, no weather
    SimulationParams {
        gravity: DVec2::ZERO,
        wind: DVec2::ZERO,
        friction_coefficient: 0.0,
        drag_coefficient: 0.0,
        ..SimulationParams::default()
    }
}

#[test]
fn pond_invariants_hold_over_many_steps() {
    let bounds = WorldBounds::new(900.0, 900.0);
    let mut rng = StdRng::seed_from_u64(1);
    let specs = random_population(&SpawnConfig::default(), bounds, &mut rng);
    let mut sim = Simulation::new(&specs, Vec::new(), bounds, pond_params()).unwrap();

    for _ in 0..500 {
        sim.step(false);
        for agent in sim.agents() {
            // accumulator invariant
            assert_eq!(agent.accel, DVec2::ZERO);
            // boundary invariant
            assert!(agent.location.x >= 0.0 && agent.location.x <= bounds.width);
            assert!(agent.location.y >= 0.0 && agent.location.y <= bounds.height);
            // speed cap invariant
            let max_speed = agent.max_speed.unwrap();
            assert!(agent.velocity.length() <= max_speed + 1e-9);
            // nothing ever goes non-finite
            assert!(agent.location.is_finite() && agent.velocity.is_finite());
        }
    }
    assert_eq!(sim.steps(), 500);
}

#[test]
fn predator_closes_on_prey_while_prey_retreats() {
    let bounds = WorldBounds::new(900.0, 900.0);
    let specs = [
        AgentSpec {
            location: DVec2::new(200.0, 450.0),
            velocity: DVec2::ZERO,
            mass: 500.0,
            group: Group::Predator,
            max_speed: Some(2.0),
        },
        AgentSpec {
            location: DVec2::new(700.0, 450.0),
            velocity: DVec2::ZERO,
            mass: 20.0,
            group: Group::Prey,
            max_speed: Some(3.0),
        },
    ];
    let mut sim = Simulation::new(&specs, Vec::new(), bounds, pond_params()).unwrap();
    sim.step(false);
    let agents = sim.agents();
    // predator accelerates toward the prey on its right
    assert!(agents[0].velocity.x > 0.0);
    // prey accelerates away, further right
    assert!(agents[1].velocity.x > 0.0);
    assert_eq!(agents[0].velocity.y, 0.0);
    assert_eq!(agents[1].velocity.y, 0.0);
}

#[test]
fn submerged_ball_settles_in_the_liquid() {
    // dayside scenario: heavy balls dropped under gravity into a liquid
    // strip across the bottom quarter of the world
    let bounds = WorldBounds::new(800.0, 600.0);
    let liquid = Zone::new(0.0, 450.0, 800.0, 150.0, 10.0);
    let specs = [AgentSpec {
        location: DVec2::new(400.0, 0.0),
        velocity: DVec2::ZERO,
        mass: 100.0,
        group: Group::Prey,
        max_speed: None,
    }];
    let params = SimulationParams {
        prey_g: 0.0,
        predator_g: 0.0,
        ..SimulationParams::default()
    };
    let mut sim = Simulation::new(&specs, vec![liquid], bounds, params).unwrap();

    let mut peak_speed_dry = 0.0_f64;
    for _ in 0..200 {
        sim.step(false);
        let agent = &sim.agents()[0];
        if !liquid.contains(agent.location) && agent.location.y < 450.0 {
            peak_speed_dry = peak_speed_dry.max(agent.velocity.length());
        }
        assert!(agent.location.y <= bounds.height);
    }
    let agent = &sim.agents()[0];
    // it fell, and the quadratic drag kept its submerged speed below the
    // free-fall peak
    assert!(agent.location.y > 400.0);
    assert!(agent.velocity.length() < peak_speed_dry);
}
