//! # Agent Simulation Engine
//!
//! Step-driven N-body driver over [`agent_physics`]: owns the agent
//! population, zones and world bounds, and advances everything one tick at
//! a time. Single-threaded; the host calls [`Simulation::step`] once per
//! animation frame and reads the agents back afterward.

pub mod params;
pub mod simulation;
pub mod spawn;

pub use params::*;
pub use simulation::*;
pub use spawn::*;
