//! # Agent Physics Engine
//!
//! Core 2D physics for a force-based agent simulation: point-mass agents,
//! environmental forces (gravity, wind, friction, fluid drag) and the
//! group-aware pairwise attraction between prey and predators.

pub mod agent;
pub mod constants;
pub mod forces;
pub mod zone;

pub use agent::*;
pub use constants::*;
pub use forces::*;
pub use zone::*;
