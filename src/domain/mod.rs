mod cell;
mod grid;
mod fade;
mod patterns;
pub mod neighbors;
pub mod rules;

pub use cell::{Cell, Rgb};
pub use grid::Grid;
pub use fade::FadeConfig;
pub use neighbors::Boundary;
pub use rules::{StepSummary, Transition, next_alive};
pub use patterns::{Pattern, presets};

/// Advance the grid by one generation.
/// Every neighbor count is refreshed before any cell changes state.
pub fn step(grid: &mut Grid, boundary: Boundary, fade: Option<&FadeConfig>) -> StepSummary {
    neighbors::update_counts(grid, boundary);
    rules::apply_rule(grid, fade)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter()
            .filter(|(_, _, c)| c.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_blinker_oscillates_in_clamped_grid() {
        let mut grid = Grid::dead(5, 5, 1).unwrap();
        for (x, y) in [(1, 0), (1, 1), (1, 2)] {
            grid.set_alive(x, y, true);
        }

        step(&mut grid, Boundary::Clamped, None);
        assert_eq!(alive_cells(&grid), vec![(0, 1), (1, 1), (2, 1)]);

        step(&mut grid, Boundary::Clamped, None);
        assert_eq!(alive_cells(&grid), vec![(1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_block_is_still_life_on_torus_edge() {
        // A block straddling the corner only holds together with wraparound
        let mut grid = Grid::dead(6, 6, 1).unwrap();
        for (x, y) in [(0, 0), (5, 0), (0, 5), (5, 5)] {
            grid.set_alive(x, y, true);
        }

        step(&mut grid, Boundary::Toroidal, None);
        assert_eq!(alive_cells(&grid), vec![(0, 0), (5, 0), (0, 5), (5, 5)]);

        step(&mut grid, Boundary::Clamped, None);
        assert!(alive_cells(&grid).is_empty());
    }

    #[test]
    fn test_glider_returns_shifted_after_four_steps() {
        let mut grid = Grid::dead(8, 8, 1).unwrap();
        let glider = presets::glider();
        for &(x, y) in &glider.cells {
            grid.set_alive(x, y, true);
        }

        for _ in 0..4 {
            step(&mut grid, Boundary::Toroidal, None);
        }

        let expected: Vec<_> = {
            let mut v: Vec<_> = glider.cells.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
            v.sort_by_key(|&(x, y)| (y, x));
            v
        };
        assert_eq!(alive_cells(&grid), expected);
    }

    #[test]
    fn test_step_with_fade_flashes_changed_cells() {
        let fade = FadeConfig::default();
        let mut grid = Grid::dead(5, 5, 1).unwrap();
        for (x, y) in [(1, 0), (1, 1), (1, 2)] {
            grid.set_alive(x, y, true);
            grid.get_mut(x, y).unwrap().set_color(fade.flash);
        }

        let summary = step(&mut grid, Boundary::Clamped, Some(&fade));

        assert_eq!(summary, StepSummary { born: 2, died: 2, alive: 3 });
        assert_eq!(grid.get(0, 1).unwrap().color(), fade.flash);
        assert_eq!(grid.get(1, 0).unwrap().color(), fade.flash);
        // The center survived and started to decay from white
        assert_eq!(
            grid.get(1, 1).unwrap().color(),
            Rgb::WHITE.decay(fade.alive_step, fade.alive_floor)
        );
    }
}
