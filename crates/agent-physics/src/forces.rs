//! Force calculations
//!
//! All functions here are pure: they read agent state and return a force
//! vector for the caller to feed into [`Agent::apply_force`]. Zero-velocity
//! and coincident-agent edge cases resolve to the zero vector via
//! `normalize_or_zero`, so none of these functions can produce NaN.

use glam::DVec2;

use crate::agent::{Agent, Group};
use crate::constants::*;

/// Uniform gravity: `F = g * m`, so the resulting acceleration is `g`
/// regardless of mass.
pub fn gravity(g: DVec2, mass: f64) -> DVec2 {
    g * mass
}

/// Uniform wind. The caller decides when it blows (external trigger).
pub fn wind(w: DVec2) -> DVec2 {
    w
}

/// Surface friction: constant magnitude, opposing the current velocity.
/// A resting agent feels no friction.
pub fn friction(velocity: DVec2, coefficient: f64) -> DVec2 {
    velocity.normalize_or_zero() * -coefficient
}

/// Fluid drag: `|F| = 0.5 * rho * |v|^2 * cd`, opposing the velocity.
/// Applied only while the agent is inside a [`Zone`](crate::zone::Zone).
pub fn drag(velocity: DVec2, fluid_density: f64, drag_coefficient: f64) -> DVec2 {
    let speed = velocity.length();
    let magnitude = fluid_density * speed * speed * drag_coefficient;
    velocity.normalize_or_zero() * magnitude * -0.5
}

/// How the receiver of a pairwise force responds to the other agent's group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionRule {
    /// Same-group residual: a nudge along the raw displacement, active only
    /// while the softening clamp is engaged.
    FloorNudge { magnitude: f64 },
    /// Inverse-square coupling, cut off beyond `max_range`. A negative
    /// `scale` attracts the receiver toward the other agent.
    InverseSquare { scale: f64, max_range: f64 },
}

/// The four group combinations, made explicit so each is testable on its
/// own. The coupling is intentionally asymmetric: predators chase harder
/// and from further away than prey flee.
pub fn interaction_rule(own: Group, other: Group) -> InteractionRule {
    match (own, other) {
        (Group::Prey, Group::Prey) | (Group::Predator, Group::Predator) => {
            InteractionRule::FloorNudge {
                magnitude: SAME_GROUP_NUDGE,
            }
        }
        (Group::Prey, Group::Predator) => InteractionRule::InverseSquare {
            scale: PREY_EVADE_SCALE,
            max_range: PREY_EVADE_RANGE,
        },
        (Group::Predator, Group::Prey) => InteractionRule::InverseSquare {
            scale: PREDATOR_CHASE_SCALE,
            max_range: PREDATOR_CHASE_RANGE,
        },
    }
}

/// Pairwise force felt by `agent` from `other`.
///
/// `g` is the gravitational constant of the *receiver's* group, so the two
/// directions of a pair are not equal-and-opposite. The displacement points
/// from `other` toward `agent`; positive scales push the receiver away.
///
/// The same-group branch is a quirk, kept as-is: the nudge scales the
/// *unnormalized* displacement and fires exactly when the softened distance
/// sits at the floor, i.e. whenever the raw separation is at most
/// [`SOFTENING_FLOOR`].
pub fn pairwise_interaction(agent: &Agent, other: &Agent, g: f64) -> DVec2 {
    let displacement = agent.location - other.location;
    let distance = displacement.length().max(SOFTENING_FLOOR);

    match interaction_rule(agent.group, other.group) {
        InteractionRule::FloorNudge { magnitude } => {
            if distance == SOFTENING_FLOOR {
                displacement * magnitude
            } else {
                DVec2::ZERO
            }
        }
        InteractionRule::InverseSquare { scale, max_range } => {
            if distance < max_range {
                let strength = g * agent.mass * other.mass / (distance * distance);
                displacement.normalize_or_zero() * (strength * scale)
            } else {
                DVec2::ZERO
            }
        }
    }
}
