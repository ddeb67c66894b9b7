//! # rust-life
//!
//! A Conway's Game of Life engine for fixed-size grids.
//!
//! ## Design Principles
//!
//! 1. **Engine/Driver Split**: The engine owns the grid and the stepping
//!    rules. Rendering, argument parsing, and frame pacing live in the
//!    driver binary and never leak into the core.
//!
//! 2. **Explicit Randomness**: No global seed. Randomization takes a
//!    `SimRng` handle, so tests and replays are deterministic.
//!
//! 3. **Terminal States Are Outcomes, Not Errors**: A simulation that
//!    stalls or dies out reports it through `StepOutcome`. Misusing the
//!    API (stepping past a terminal state, indexing out of bounds)
//!    panics with a message instead.
//!
//! ## Modules
//!
//! - `core`: Grid storage and deterministic RNG
//! - `sim`: The simulation engine (stepping, rules, termination)
//! - `render`: Text rendering of simulation frames

pub mod core;
pub mod render;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{Grid, SimRng, SimRngState};
pub use crate::render::render_frame;
pub use crate::sim::{Simulation, StepOutcome, MAX_SURVIVAL, MIN_SURVIVAL, SPAWN};
