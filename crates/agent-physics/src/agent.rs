//! Agent state and single-step integration

use glam::DVec2;

use crate::constants::{PREDATOR_MAX_SPEED, PREDATOR_G, PREY_MAX_SPEED, PREY_G};
use crate::zone::WorldBounds;

/// Interaction group an agent belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Prey,
    Predator,
}

impl Group {
    /// Gravitational constant used when an agent of this group is the
    /// receiver of a pairwise force.
    pub fn gravitational_constant(self) -> f64 {
        match self {
            Group::Prey => PREY_G,
            Group::Predator => PREDATOR_G,
        }
    }

    /// Default speed cap for agents of this group.
    pub fn max_speed(self) -> f64 {
        match self {
            Group::Prey => PREY_MAX_SPEED,
            Group::Predator => PREDATOR_MAX_SPEED,
        }
    }
}

/// Boundary policy applied after integration.
///
/// Isolated behind an enum so an alternative (true mirrored reflection,
/// wraparound) could be swapped in without touching the integrator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Snap the position to the exceeded edge and flip the velocity
    /// component on that axis. Deliberately not a mirrored reflection:
    /// the agent lands exactly on the edge, with no restitution loss.
    #[default]
    ClampReflect,
}

impl EdgePolicy {
    /// Apply the policy to one agent. Each axis is handled independently.
    pub fn apply(self, agent: &mut Agent, bounds: WorldBounds) {
        match self {
            EdgePolicy::ClampReflect => {
                if agent.location.x > bounds.width || agent.location.x < 0.0 {
                    agent.velocity.x = -agent.velocity.x;
                    agent.location.x = if agent.location.x > bounds.width {
                        bounds.width
                    } else {
                        0.0
                    };
                }
                if agent.location.y > bounds.height || agent.location.y < 0.0 {
                    agent.velocity.y = -agent.velocity.y;
                    agent.location.y = if agent.location.y > bounds.height {
                        bounds.height
                    } else {
                        0.0
                    };
                }
            }
        }
    }
}

/// A point mass moving under accumulated forces.
///
/// `accel` is a transient per-step accumulator in acceleration units
/// (forces are divided by mass as they arrive). It is zero outside of a
/// simulation step: [`Agent::update`] resets it after integrating.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    /// Current position; mutated only by `update` and the edge policy
    pub location: DVec2,
    /// Current velocity, clamped to `max_speed` when one is set
    pub velocity: DVec2,
    /// Per-step force accumulator, already divided by mass
    pub accel: DVec2,
    /// Mass, strictly positive (validated at simulation construction)
    pub mass: f64,
    /// Optional cap on velocity magnitude after integration
    pub max_speed: Option<f64>,
    /// Interaction group
    pub group: Group,
}

impl Agent {
    /// Create an agent with an explicit group and speed cap.
    pub fn new(
        location: DVec2,
        velocity: DVec2,
        mass: f64,
        group: Group,
        max_speed: Option<f64>,
    ) -> Self {
        Self {
            location,
            velocity,
            accel: DVec2::ZERO,
            mass,
            max_speed,
            group,
        }
    }

    /// Create a prey agent with the group's default speed cap.
    pub fn new_prey(location: DVec2, velocity: DVec2, mass: f64) -> Self {
        Self::new(
            location,
            velocity,
            mass,
            Group::Prey,
            Some(Group::Prey.max_speed()),
        )
    }

    /// Create a predator with the group's default speed cap.
    pub fn new_predator(location: DVec2, velocity: DVec2, mass: f64) -> Self {
        Self::new(
            location,
            velocity,
            mass,
            Group::Predator,
            Some(Group::Predator.max_speed()),
        )
    }

    /// Accumulate a force: `accel += force / mass`.
    ///
    /// Mass positivity is a construction invariant, so the division is
    /// always defined.
    pub fn apply_force(&mut self, force: DVec2) {
        self.accel += force / self.mass;
    }

    /// One explicit Euler tick: integrate the accumulator into velocity,
    /// clamp to the speed cap, advance the position, reset the accumulator.
    pub fn update(&mut self) {
        self.velocity += self.accel;
        if let Some(max_speed) = self.max_speed {
            if self.velocity.length() > max_speed {
                self.velocity = self.velocity.normalize_or_zero() * max_speed;
            }
        }
        self.location += self.velocity;
        self.accel = DVec2::ZERO;
    }

    /// Reflect off the world boundary with the default clamp-reflect policy.
    pub fn check_edges(&mut self, bounds: WorldBounds) {
        EdgePolicy::ClampReflect.apply(self, bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: WorldBounds = WorldBounds {
        width: 900.0,
        height: 900.0,
    };

    fn still_agent(mass: f64) -> Agent {
        Agent::new(DVec2::ZERO, DVec2::ZERO, mass, Group::Prey, None)
    }

    #[test]
    fn gravity_step_moves_heavy_agent_by_g() {
        // mass 100 under F = g * mass must accelerate by exactly g
        let mut agent = still_agent(100.0);
        agent.apply_force(DVec2::new(0.0, 0.3) * agent.mass);
        agent.update();
        assert!(agent.velocity.abs_diff_eq(DVec2::new(0.0, 0.3), 1e-12));
        assert!(agent.location.abs_diff_eq(DVec2::new(0.0, 0.3), 1e-12));
    }

    #[test]
    fn accumulator_resets_after_update() {
        let mut agent = still_agent(2.0);
        agent.apply_force(DVec2::new(4.0, -2.0));
        assert!(agent.accel.abs_diff_eq(DVec2::new(2.0, -1.0), 1e-12));
        agent.update();
        assert_eq!(agent.accel, DVec2::ZERO);
    }

    #[test]
    fn opposite_forces_cancel_in_accumulator() {
        let mut agent = still_agent(3.0);
        let force = DVec2::new(1.5, -7.25);
        agent.apply_force(force);
        agent.apply_force(-force);
        assert!(agent.accel.abs_diff_eq(DVec2::ZERO, 1e-12));
    }

    #[test]
    fn velocity_clamped_to_max_speed() {
        let mut agent = Agent::new(DVec2::ZERO, DVec2::ZERO, 1.0, Group::Prey, Some(3.0));
        agent.apply_force(DVec2::new(100.0, 0.0));
        agent.update();
        assert!((agent.velocity.length() - 3.0).abs() < 1e-12);
        agent.apply_force(DVec2::new(0.0, 50.0));
        agent.update();
        assert!(agent.velocity.length() <= 3.0 + 1e-12);
    }

    #[test]
    fn edge_overshoot_snaps_to_bound_and_flips_velocity() {
        let mut agent = still_agent(1.0);
        agent.location = DVec2::new(BOUNDS.width + 5.0, 450.0);
        agent.velocity = DVec2::new(2.0, 0.0);
        agent.check_edges(BOUNDS);
        assert_eq!(agent.location.x, BOUNDS.width);
        assert_eq!(agent.velocity.x, -2.0);
        // y untouched
        assert_eq!(agent.location.y, 450.0);
    }

    #[test]
    fn edge_undershoot_snaps_to_zero() {
        let mut agent = still_agent(1.0);
        agent.location = DVec2::new(-3.0, -0.5);
        agent.velocity = DVec2::new(-1.0, -2.0);
        agent.check_edges(BOUNDS);
        assert_eq!(agent.location, DVec2::ZERO);
        assert_eq!(agent.velocity, DVec2::new(1.0, 2.0));
    }

    #[test]
    fn agent_inside_bounds_is_untouched() {
        let mut agent = still_agent(1.0);
        agent.location = DVec2::new(10.0, 890.0);
        agent.velocity = DVec2::new(-1.0, 1.0);
        let before = agent.clone();
        agent.check_edges(BOUNDS);
        assert_eq!(agent, before);
    }
}
