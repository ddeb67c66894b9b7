//! The simulation engine: stepping rules and termination detection.

pub mod engine;

pub use engine::{Simulation, StepOutcome, MAX_SURVIVAL, MIN_SURVIVAL, SPAWN};
