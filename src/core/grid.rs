//! Fixed-size grid of cell states.
//!
//! ## Storage
//!
//! Cells are stored row-major in a flat `Vec<bool>` indexed by
//! `y * width + x`. The grid is always fully populated: every coordinate
//! in `[0, width) × [0, height)` has a defined state.
//!
//! ## Bounds
//!
//! Coordinate accessors panic on out-of-range input. Neighbor counting
//! does its own range check with signed arithmetic, so offsets that fall
//! off the edge are excluded rather than wrapped.

use serde::{Deserialize, Serialize};

/// A fixed-size rectangular grid of boolean cell states.
///
/// Dimensions are set at construction and never change. `Clone` produces
/// a fully independent copy - no shared storage.
///
/// ## Usage
///
/// ```
/// use rust_life::Grid;
///
/// let mut grid = Grid::new(3, 3);
/// grid.set(1, 1, true);
///
/// assert!(grid.get(1, 1));
/// assert_eq!(grid.population(), 1);
/// assert_eq!(grid.live_neighbors(0, 0), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid with every cell dead.
    ///
    /// A width or height of 0 produces a valid, degenerate grid with no
    /// cells.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Grid width in cells.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[must_use]
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Flat index for a coordinate, panicking when out of range.
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "coordinate ({}, {}) out of bounds for {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// Check whether a signed coordinate lies inside the grid.
    ///
    /// Takes `i64` so that neighbor offsets can go negative before the
    /// check instead of wrapping around an unsigned type.
    #[must_use]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        let x_in_bounds = 0 <= x && (x as u64) < self.width as u64;
        let y_in_bounds = 0 <= y && (y as u64) < self.height as u64;
        x_in_bounds && y_in_bounds
    }

    /// Get a cell's alive state.
    ///
    /// Panics if the coordinate is out of range.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Set a cell's alive state.
    ///
    /// Panics if the coordinate is out of range.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = alive;
    }

    /// Count of living cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Count a cell's living Moore neighbors.
    ///
    /// Checks the 8 horizontally, vertically, and diagonally adjacent
    /// cells. Offsets that land outside the grid are excluded from the
    /// count - there is no wraparound.
    ///
    /// Panics if `(x, y)` itself is out of range.
    #[must_use]
    pub fn live_neighbors(&self, x: usize, y: usize) -> usize {
        // Validate the center cell up front.
        let _ = self.index(x, y);

        let mut alive = 0;
        for y_offset in -1i64..=1 {
            for x_offset in -1i64..=1 {
                if x_offset == 0 && y_offset == 0 {
                    continue;
                }

                let neighbor_x = x as i64 + x_offset;
                let neighbor_y = y as i64 + y_offset;

                if self.contains(neighbor_x, neighbor_y)
                    && self.get(neighbor_x as usize, neighbor_y as usize)
                {
                    alive += 1;
                }
            }
        }

        alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_all_dead() {
        let grid = Grid::new(4, 3);

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.area(), 12);
        assert_eq!(grid.population(), 0);

        for y in 0..3 {
            for x in 0..4 {
                assert!(!grid.get(x, y));
            }
        }
    }

    #[test]
    fn test_get_set() {
        let mut grid = Grid::new(5, 5);

        grid.set(2, 3, true);
        assert!(grid.get(2, 3));

        grid.set(2, 3, false);
        assert!(!grid.get(2, 3));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let grid = Grid::new(3, 3);
        grid.get(3, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_out_of_bounds_panics() {
        let mut grid = Grid::new(3, 3);
        grid.set(0, 3, true);
    }

    #[test]
    fn test_contains_signed() {
        let grid = Grid::new(3, 2);

        assert!(grid.contains(0, 0));
        assert!(grid.contains(2, 1));

        assert!(!grid.contains(-1, 0));
        assert!(!grid.contains(0, -1));
        assert!(!grid.contains(3, 0));
        assert!(!grid.contains(0, 2));
    }

    #[test]
    fn test_population() {
        let mut grid = Grid::new(3, 3);
        grid.set(0, 0, true);
        grid.set(1, 1, true);
        grid.set(2, 2, true);

        assert_eq!(grid.population(), 3);
    }

    #[test]
    fn test_live_neighbors_full_neighborhood() {
        let mut grid = Grid::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                grid.set(x, y, true);
            }
        }

        // Center sees all 8 neighbors; its own state is not counted.
        assert_eq!(grid.live_neighbors(1, 1), 8);
    }

    #[test]
    fn test_live_neighbors_corner_excludes_out_of_bounds() {
        let mut grid = Grid::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                grid.set(x, y, true);
            }
        }

        // A corner only has 3 in-bounds neighbors.
        assert_eq!(grid.live_neighbors(0, 0), 3);
        assert_eq!(grid.live_neighbors(2, 2), 3);

        // An edge cell has 5.
        assert_eq!(grid.live_neighbors(1, 0), 5);
    }

    #[test]
    fn test_live_neighbors_isolated_cell() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, true);

        assert_eq!(grid.live_neighbors(1, 1), 0);
        assert_eq!(grid.live_neighbors(0, 0), 1);
        assert_eq!(grid.live_neighbors(2, 1), 1);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original = Grid::new(2, 2);
        original.set(0, 0, true);

        let mut copy = original.clone();
        copy.set(1, 1, true);
        copy.set(0, 0, false);

        // Neither mutation reaches the original.
        assert!(original.get(0, 0));
        assert!(!original.get(1, 1));
        assert!(copy.get(1, 1));
    }

    #[test]
    fn test_equality_compares_cells() {
        let mut a = Grid::new(2, 2);
        let mut b = Grid::new(2, 2);
        assert_eq!(a, b);

        a.set(0, 1, true);
        assert_ne!(a, b);

        b.set(0, 1, true);
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_dimensions() {
        let empty = Grid::new(0, 5);
        assert_eq!(empty.area(), 0);
        assert_eq!(empty.population(), 0);
        assert!(!empty.contains(0, 0));

        let empty = Grid::new(5, 0);
        assert_eq!(empty.area(), 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut grid = Grid::new(2, 3);
        grid.set(1, 2, true);

        let json = serde_json::to_string(&grid).unwrap();
        let restored: Grid = serde_json::from_str(&json).unwrap();

        assert_eq!(grid, restored);
    }
}
