//! Step-driven simulation over the agent population
//!
//! Each step runs in two phases: force accumulation for every agent against
//! the frozen pre-step state, then integration and boundary handling. Only
//! the acceleration accumulators change during phase one, so the O(n^2)
//! pairwise pass is order-independent by construction.

use agent_physics::{forces, Agent, Group, WorldBounds, Zone};
use glam::DVec2;

use crate::SimulationParams;

/// Construction payload for one agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSpec {
    pub location: DVec2,
    pub velocity: DVec2,
    pub mass: f64,
    pub group: Group,
    /// Speed cap; `None` leaves the velocity unclamped
    pub max_speed: Option<f64>,
}

/// Construction-time validation failures. Once a simulation exists,
/// stepping cannot fail.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InitError {
    /// Mass is divided by in force application, so it must be positive.
    #[error("agent {index} has non-positive mass {mass}")]
    NonPositiveMass { index: usize, mass: f64 },
    /// A degenerate world has no interior to reflect agents back into.
    #[error("world bounds must be positive, got {width}x{height}")]
    NonPositiveBounds { width: f64, height: f64 },
}

/// Owns the agent population, zones and bounds for one simulation run.
pub struct Simulation {
    agents: Vec<Agent>,
    zones: Vec<Zone>,
    bounds: WorldBounds,
    params: SimulationParams,
    steps: u64,
}

impl Simulation {
    /// Validate the specs and build the population. Fails fast without
    /// constructing anything on the first invalid parameter.
    pub fn new(
        specs: &[AgentSpec],
        zones: Vec<Zone>,
        bounds: WorldBounds,
        params: SimulationParams,
    ) -> Result<Self, InitError> {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return Err(InitError::NonPositiveBounds {
                width: bounds.width,
                height: bounds.height,
            });
        }
        for (index, spec) in specs.iter().enumerate() {
            if spec.mass <= 0.0 {
                return Err(InitError::NonPositiveMass {
                    index,
                    mass: spec.mass,
                });
            }
        }

        let agents = specs
            .iter()
            .map(|spec| {
                Agent::new(
                    spec.location,
                    spec.velocity,
                    spec.mass,
                    spec.group,
                    spec.max_speed,
                )
            })
            .collect::<Vec<_>>();

        log::info!(
            "initialized simulation: {} agents, {} zones, {}x{} world",
            agents.len(),
            zones.len(),
            bounds.width,
            bounds.height
        );

        Ok(Self {
            agents,
            zones,
            bounds,
            params,
            steps: 0,
        })
    }

    /// Advance the simulation by one tick.
    ///
    /// `wind_active` is the host's external trigger (e.g. a held mouse
    /// button): while true, the wind force joins gravity and friction.
    /// Total for any valid simulation; there is nothing to return.
    pub fn step(&mut self, wind_active: bool) {
        // Phase 1: accumulate forces from the pre-step state. Positions and
        // velocities are not touched here, so every pair sees the same
        // snapshot regardless of iteration order.
        for i in 0..self.agents.len() {
            let agent = &self.agents[i];
            let mut total = forces::gravity(self.params.gravity, agent.mass);
            if wind_active {
                total += forces::wind(self.params.wind);
            }
            total += forces::friction(agent.velocity, self.params.friction_coefficient);
            for zone in &self.zones {
                if zone.contains(agent.location) {
                    total += forces::drag(
                        agent.velocity,
                        zone.density,
                        self.params.drag_coefficient,
                    );
                }
            }
            let g = self.params.interaction_g(agent.group);
            for (j, other) in self.agents.iter().enumerate() {
                if j != i {
                    total += forces::pairwise_interaction(agent, other, g);
                }
            }
            self.agents[i].apply_force(total);
        }

        // Phase 2: integrate, clamp and reflect every agent.
        for agent in &mut self.agents {
            agent.update();
            self.params.edge_policy.apply(agent, self.bounds);
        }

        self.steps += 1;
    }

    /// Current agent states, in construction order, for the presentation
    /// layer to read between steps.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    /// Number of completed steps.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}
