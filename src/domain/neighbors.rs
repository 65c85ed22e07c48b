//! Live-neighbor counting over the Moore neighborhood.
//!
//! Counts for a whole generation are gathered into a separate buffer from a
//! shared borrow of the grid, then written back. No alive flag can change
//! while the pass is running, so every count sees the same generation.

use super::Grid;
use rayon::prelude::*;

/// The eight (dx, dy) offsets of the Moore neighborhood
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// How offsets that leave the grid are treated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Boundary {
    /// Outside the grid counts as dead
    Clamped,
    /// Edges connect to the opposite edge
    #[default]
    Toroidal,
}

impl Boundary {
    pub fn name(&self) -> &'static str {
        match self {
            Boundary::Clamped => "Clamped",
            Boundary::Toroidal => "Toroidal",
        }
    }

    /// Resolve a neighbor coordinate, or None if it does not exist
    #[inline]
    fn resolve(self, x: usize, y: usize, (dx, dy): (isize, isize), w: usize, h: usize) -> Option<(usize, usize)> {
        let nx = x as isize + dx;
        let ny = y as isize + dy;
        match self {
            Boundary::Clamped => {
                let inside = (0..w as isize).contains(&nx) && (0..h as isize).contains(&ny);
                inside.then_some((nx as usize, ny as usize))
            }
            Boundary::Toroidal => {
                let nx = (nx + w as isize) % w as isize;
                let ny = (ny + h as isize) % h as isize;
                Some((nx as usize, ny as usize))
            }
        }
    }
}

/// Count live neighbors of a single cell
pub fn count_live_neighbors(grid: &Grid, x: usize, y: usize, boundary: Boundary) -> u8 {
    let (w, h) = grid.dimensions();
    MOORE_OFFSETS
        .iter()
        .filter_map(|&offset| boundary.resolve(x, y, offset, w, h))
        .filter(|&(nx, ny)| grid.is_alive(nx, ny))
        .count() as u8
}

/// Count live neighbors for every cell, in row-major order.
/// Only reads the grid, so rows are processed in parallel.
pub fn count_all(grid: &Grid, boundary: Boundary) -> Vec<u8> {
    let (w, h) = grid.dimensions();
    (0..w * h)
        .into_par_iter()
        .map(|i| count_live_neighbors(grid, i % w, i / w, boundary))
        .collect()
}

/// Recompute and store the neighbor count of every cell.
pub fn update_counts(grid: &mut Grid, boundary: Boundary) {
    let counts = count_all(grid, boundary);
    grid.cells_mut()
        .iter_mut()
        .zip(counts)
        .for_each(|(cell, n)| cell.set_neighbors(n));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::dead(width, height, 1).unwrap();
        for &(x, y) in alive {
            grid.set_alive(x, y, true);
        }
        grid
    }

    #[test]
    fn test_toroidal_corner_sees_opposite_corner() {
        let grid = grid_with(6, 4, &[(5, 3)]);
        assert_eq!(count_live_neighbors(&grid, 0, 0, Boundary::Toroidal), 1);
        assert_eq!(count_live_neighbors(&grid, 0, 0, Boundary::Clamped), 0);
    }

    #[test]
    fn test_toroidal_edges_wrap() {
        let grid = grid_with(5, 5, &[(4, 2), (2, 4)]);
        assert_eq!(count_live_neighbors(&grid, 0, 2, Boundary::Toroidal), 1);
        assert_eq!(count_live_neighbors(&grid, 2, 0, Boundary::Toroidal), 1);
    }

    #[test]
    fn test_clamped_corner_has_at_most_three() {
        let all: Vec<_> = (0..5).flat_map(|y| (0..5).map(move |x| (x, y))).collect();
        let grid = grid_with(5, 5, &all);
        assert_eq!(count_live_neighbors(&grid, 0, 0, Boundary::Clamped), 3);
        assert_eq!(count_live_neighbors(&grid, 4, 4, Boundary::Clamped), 3);
        assert_eq!(count_live_neighbors(&grid, 2, 0, Boundary::Clamped), 5);
        assert_eq!(count_live_neighbors(&grid, 2, 2, Boundary::Clamped), 8);
    }

    #[test]
    fn test_full_torus_always_eight() {
        let all: Vec<_> = (0..4).flat_map(|y| (0..4).map(move |x| (x, y))).collect();
        let grid = grid_with(4, 4, &all);
        assert!(count_all(&grid, Boundary::Toroidal).iter().all(|&n| n == 8));
    }

    #[test]
    fn test_cell_does_not_count_itself() {
        let grid = grid_with(3, 3, &[(1, 1)]);
        assert_eq!(count_live_neighbors(&grid, 1, 1, Boundary::Clamped), 0);
        assert_eq!(count_live_neighbors(&grid, 1, 1, Boundary::Toroidal), 0);
    }

    #[test]
    fn test_update_counts_writes_every_cell() {
        let mut grid = grid_with(3, 3, &[(0, 1), (1, 1), (2, 1)]);
        update_counts(&mut grid, Boundary::Clamped);
        assert_eq!(grid.get(1, 0).unwrap().neighbors(), 3);
        assert_eq!(grid.get(1, 1).unwrap().neighbors(), 2);
        assert_eq!(grid.get(0, 0).unwrap().neighbors(), 2);
    }
}
