//! Tuning constants for the agent simulation
//!
//! Hand-tuned values, not claimed optimal; these are the knobs that give
//! the pond its characteristic predator/prey motion.

use glam::DVec2;

/// Minimum distance substituted into the inverse-square law to avoid
/// singular forces when two agents nearly coincide.
pub const SOFTENING_FLOOR: f64 = 100.0;

/// Scale of the residual same-group force that fires while the softening
/// clamp is engaged (raw separation at or below the floor).
pub const SAME_GROUP_NUDGE: f64 = 0.01;

/// Multiplier on the inverse-square strength when prey react to a predator.
pub const PREY_EVADE_SCALE: f64 = 20.0;

/// Maximum distance at which prey react to a predator at all.
pub const PREY_EVADE_RANGE: f64 = 10_000.0;

/// Multiplier when a predator reacts to prey. Negative: the force points
/// toward the prey rather than away, and it is stronger than the evade
/// response so chases actually close.
pub const PREDATOR_CHASE_SCALE: f64 = -100.0;

/// Maximum distance at which a predator reacts to prey. Twice the evade
/// range, so predators notice prey before prey notice them.
pub const PREDATOR_CHASE_RANGE: f64 = 20_000.0;

/// Gravitational constant used when the force receiver is prey.
pub const PREY_G: f64 = 0.05;

/// Gravitational constant used when the force receiver is a predator.
pub const PREDATOR_G: f64 = 0.1;

/// Speed cap for prey. Prey outrun predators in a straight line.
pub const PREY_MAX_SPEED: f64 = 3.0;

/// Speed cap for predators.
pub const PREDATOR_MAX_SPEED: f64 = 2.0;

/// Default coefficient for the constant-magnitude surface friction force.
pub const DEFAULT_FRICTION_COEFF: f64 = 0.01;

/// Default drag coefficient for agents inside a liquid zone.
pub const DEFAULT_DRAG_COEFF: f64 = 0.1;

/// Default uniform gravitational acceleration (screen coordinates, +y down).
pub const DEFAULT_GRAVITY: DVec2 = DVec2::new(0.0, 0.3);

/// Default wind force, applied only while the host reports the external
/// trigger as active.
pub const DEFAULT_WIND: DVec2 = DVec2::new(1.0, 0.0);
