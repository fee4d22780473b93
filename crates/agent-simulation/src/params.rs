//! Simulation parameters for runtime tuning

use agent_physics::{
    EdgePolicy, Group, DEFAULT_DRAG_COEFF, DEFAULT_FRICTION_COEFF, DEFAULT_GRAVITY, DEFAULT_WIND,
    PREDATOR_G, PREY_G,
};
use glam::DVec2;

/// Environmental and coupling parameters for one simulation instance.
///
/// The defaults give the stock scenario; hosts tune individual fields
/// (a pond with no gravity, a windless world, ...).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    /// Uniform gravitational acceleration applied every step
    pub gravity: DVec2,
    /// Wind force applied only while the host's trigger is active
    pub wind: DVec2,
    /// Constant-magnitude surface friction coefficient
    pub friction_coefficient: f64,
    /// Drag coefficient for agents inside a zone
    pub drag_coefficient: f64,
    /// Gravitational constant when the force receiver is prey
    pub prey_g: f64,
    /// Gravitational constant when the force receiver is a predator
    pub predator_g: f64,
    /// Boundary handling applied after integration
    pub edge_policy: EdgePolicy,
}

impl SimulationParams {
    /// Gravitational constant for a force receiver of the given group.
    pub fn interaction_g(&self, group: Group) -> f64 {
        match group {
            Group::Prey => self.prey_g,
            Group::Predator => self.predator_g,
        }
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            wind: DEFAULT_WIND,
            friction_coefficient: DEFAULT_FRICTION_COEFF,
            drag_coefficient: DEFAULT_DRAG_COEFF,
            prey_g: PREY_G,
            predator_g: PREDATOR_G,
            edge_policy: EdgePolicy::ClampReflect,
        }
    }
}
