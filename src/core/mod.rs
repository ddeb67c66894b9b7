//! Core building blocks: grid storage and deterministic RNG.
//!
//! Nothing in this module knows the Game of Life rules. The grid is a
//! plain cell container; the rules live in `sim`.

pub mod grid;
pub mod rng;

pub use grid::Grid;
pub use rng::{SimRng, SimRngState};
