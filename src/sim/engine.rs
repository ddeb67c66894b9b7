//! Generation advance and termination detection.
//!
//! ## Rules
//!
//! Classic Conway thresholds, expressed exactly as the strict interval
//! they are:
//!
//! - A live cell survives iff `MIN_SURVIVAL < n < MAX_SURVIVAL`
//!   (strict on both sides, so exactly 2 or 3 live neighbors).
//! - A dead cell spawns iff `n == SPAWN` (exactly 3).
//!
//! ## Termination
//!
//! Each step compares the new generation against the previous one.
//! A generation with no living cells is `Extinct`; an unchanged
//! generation with survivors is `Stalled` (a fixed point - a still life).
//! Both are terminal: stepping past them is a caller bug and panics.
//!
//! Neighbor counts are always taken from the pre-step generation, never
//! from cells already updated in the same pass. The engine keeps a
//! second buffer and swaps instead of allocating a fresh snapshot each
//! step.

use serde::{Deserialize, Serialize};

use crate::core::{Grid, SimRng};

/// A live cell survives only with strictly more neighbors than this.
pub const MIN_SURVIVAL: usize = 1;

/// A live cell survives only with strictly fewer neighbors than this.
pub const MAX_SURVIVAL: usize = 4;

/// A dead cell spawns with exactly this many neighbors.
pub const SPAWN: usize = 3;

/// Result of a single `step()`, doubling as the simulation status.
///
/// `Stalled` and `Extinct` are terminal: once reported, no further
/// transitions exist and calling `step()` again panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// The generation changed and cells remain alive.
    Running,
    /// The generation is identical to the previous one (fixed point).
    Stalled,
    /// No living cells remain.
    Extinct,
}

impl StepOutcome {
    /// Check whether the simulation has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, StepOutcome::Stalled | StepOutcome::Extinct)
    }
}

/// A Game of Life simulation on a fixed-size grid.
///
/// Owns the current generation, a scratch buffer for the next one, and
/// the iteration counter. Dimensions never change after construction.
///
/// ## Usage
///
/// ```
/// use rust_life::{Grid, Simulation, StepOutcome};
///
/// // A 2x2 block is a still life: stepping it stalls immediately.
/// let mut grid = Grid::new(4, 4);
/// grid.set(1, 1, true);
/// grid.set(2, 1, true);
/// grid.set(1, 2, true);
/// grid.set(2, 2, true);
///
/// let mut sim = Simulation::from_grid(grid);
/// assert_eq!(sim.step(), StepOutcome::Stalled);
/// assert_eq!(sim.iteration(), 0);
/// ```
pub struct Simulation {
    current: Grid,
    /// Scratch buffer the next generation is written into, then swapped.
    next: Grid,
    iteration: u64,
    status: StepOutcome,
}

impl Simulation {
    /// Create a simulation with every cell dead and iteration 0.
    ///
    /// A width or height of 0 is valid; the degenerate grid has no cells
    /// and the first `step()` reports `Extinct`.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            current: Grid::new(width, height),
            next: Grid::new(width, height),
            iteration: 0,
            status: StepOutcome::Running,
        }
    }

    /// Create a simulation starting from an existing grid.
    ///
    /// Used to seed specific patterns instead of randomizing.
    #[must_use]
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            next: Grid::new(grid.width(), grid.height()),
            current: grid,
            iteration: 0,
            status: StepOutcome::Running,
        }
    }

    /// Grid width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.current.width()
    }

    /// Grid height in cells.
    #[must_use]
    pub fn height(&self) -> usize {
        self.current.height()
    }

    /// Completed generation count.
    ///
    /// Starts at 0 and increments by exactly 1 for every step that
    /// changes the grid. A stalling step does not count.
    #[must_use]
    pub const fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Current simulation status.
    #[must_use]
    pub const fn status(&self) -> StepOutcome {
        self.status
    }

    /// Read-only view of the current generation, for rendering.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.current
    }

    /// Randomize every cell with an unbiased coin flip.
    ///
    /// Each cell is drawn independently. Expected to run once at
    /// startup, before any stepping.
    pub fn randomize(&mut self, rng: &mut SimRng) {
        for y in 0..self.current.height() {
            for x in 0..self.current.width() {
                self.current.set(x, y, rng.flip());
            }
        }
    }

    /// Advance the simulation by one generation.
    ///
    /// Computes the next generation from a snapshot of the current one,
    /// so neighbor counts never mix pre- and post-update cells. Returns
    /// the new status:
    ///
    /// - `Extinct` when no living cells remain (an all-dead grid, or a
    ///   grid with no cells at all, reports this on its first step);
    /// - `Stalled` when the generation is identical to the previous one
    ///   but cells survive; `iteration` is not incremented;
    /// - `Running` otherwise, with `iteration` incremented by 1.
    ///
    /// Panics if called after a terminal outcome was reported.
    pub fn step(&mut self) -> StepOutcome {
        assert!(
            self.status == StepOutcome::Running,
            "step() called after terminal state {:?}",
            self.status
        );

        for y in 0..self.current.height() {
            for x in 0..self.current.width() {
                let alive_neighbors = self.current.live_neighbors(x, y);

                let alive = if self.current.get(x, y) {
                    MIN_SURVIVAL < alive_neighbors && alive_neighbors < MAX_SURVIVAL
                } else {
                    alive_neighbors == SPAWN
                };

                self.next.set(x, y, alive);
            }
        }

        let changed = self.next != self.current;
        if changed {
            std::mem::swap(&mut self.current, &mut self.next);
            self.iteration += 1;
        }

        // Extinction wins over stalling: an empty grid is reported dead,
        // not merely static.
        self.status = if self.current.population() == 0 {
            StepOutcome::Extinct
        } else if changed {
            StepOutcome::Running
        } else {
            StepOutcome::Stalled
        };

        self.status
    }
}
