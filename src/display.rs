//! Presentation records for the pond
//!
//! Purely visual state (color, body wobble, segment geometry) lives here,
//! keyed to physics agents by index. The physics crates know nothing about
//! any of it.

use agent_physics::{Agent, Group};
use glam::DVec2;

/// One body segment: center position and diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub center: DVec2,
    pub diameter: f64,
}

/// Renderable sidecar for one agent.
#[derive(Debug, Clone)]
pub struct Sprite {
    /// RGBA fill; predators are translucent red, prey near-black
    pub color: [u8; 4],
    /// Per-sprite wobble, a pure function of the agent index
    pub phase: f64,
    /// Segmented body trailing along the velocity direction
    pub body: Vec<Segment>,
}

impl Sprite {
    pub fn new(index: usize, agent: &Agent) -> Self {
        let color = match agent.group {
            Group::Predator => [244, 67, 54, 51],
            Group::Prey => [33, 33, 33, 26],
        };
        let mut sprite = Self {
            color,
            phase: body_phase(index),
            body: Vec::new(),
        };
        sprite.update(agent);
        sprite
    }

    /// Rebuild the segment chain from the agent's current state. Segments
    /// step backward along the normalized velocity; their diameters swell
    /// sinusoidally so the body tapers like a fish.
    pub fn update(&mut self, agent: &Agent) {
        let body_length = (agent.mass.sqrt() + self.phase * 8.0).clamp(5.0, 13.0);
        let heading = agent.velocity.normalize_or_zero();
        let segments = (body_length * 1.5) as usize;

        self.body.clear();
        for i in 0..segments {
            let offset = i as f64;
            self.body.push(Segment {
                center: agent.location + heading * (offset * 1.5),
                diameter: offset * (std::f64::consts::TAU / body_length).sin(),
            });
        }
    }
}

/// Smooth pseudo-noise in `[0, 1]` derived from the agent's index, so each
/// sprite wobbles differently without any global mutable state.
fn body_phase(index: usize) -> f64 {
    0.5 + 0.5 * (index as f64 * 0.01).sin()
}
