use super::{FadeConfig, Grid};

/// Conway's Game of Life (B3/S23):
/// 1. Live cell with 2-3 neighbors survives
/// 2. Dead cell with exactly 3 neighbors becomes alive
/// 3. All other cases result in death
pub const fn next_alive(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2 | 3) | (false, 3))
}

/// What happened to a cell during one generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Born,
    Survived,
    Died,
    StayedDead,
}

impl Transition {
    pub const fn of(was_alive: bool, is_alive: bool) -> Self {
        match (was_alive, is_alive) {
            (false, true) => Transition::Born,
            (true, true) => Transition::Survived,
            (true, false) => Transition::Died,
            (false, false) => Transition::StayedDead,
        }
    }

    /// True when the alive flag flipped
    pub const fn is_change(self) -> bool {
        matches!(self, Transition::Born | Transition::Died)
    }
}

/// Per-generation tally, handy for logging
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepSummary {
    pub born: usize,
    pub died: usize,
    pub alive: usize,
}

/// Apply B3/S23 to every cell using the counts already stored in the grid.
/// Counts must come from the generation being replaced.
pub fn apply_rule(grid: &mut Grid, fade: Option<&FadeConfig>) -> StepSummary {
    let mut summary = StepSummary::default();

    for cell in grid.cells_mut() {
        let was_alive = cell.is_alive();
        let alive = next_alive(was_alive, cell.neighbors());
        let transition = Transition::of(was_alive, alive);
        cell.set_alive(alive);

        if let Some(fade) = fade {
            cell.set_color(fade.next_color(cell.color(), transition));
        }

        match transition {
            Transition::Born => summary.born += 1,
            Transition::Died => summary.died += 1,
            _ => {}
        }
        if alive {
            summary.alive += 1;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survival_only_on_two_or_three() {
        for n in 0..=8u8 {
            assert_eq!(next_alive(true, n), n == 2 || n == 3, "alive with {n}");
        }
    }

    #[test]
    fn test_birth_only_on_three() {
        for n in 0..=8u8 {
            assert_eq!(next_alive(false, n), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn test_transition_classification() {
        assert_eq!(Transition::of(false, true), Transition::Born);
        assert_eq!(Transition::of(true, false), Transition::Died);
        assert!(Transition::Born.is_change());
        assert!(!Transition::Survived.is_change());
        assert!(!Transition::StayedDead.is_change());
    }

    #[test]
    fn test_apply_rule_reads_stored_counts() {
        let mut grid = Grid::dead(3, 1, 1).unwrap();
        grid.set_alive(0, 0, true);
        grid.set_alive(1, 0, true);
        grid.get_mut(0, 0).unwrap().set_neighbors(1);
        grid.get_mut(1, 0).unwrap().set_neighbors(2);
        grid.get_mut(2, 0).unwrap().set_neighbors(3);

        let summary = apply_rule(&mut grid, None);

        assert!(!grid.is_alive(0, 0));
        assert!(grid.is_alive(1, 0));
        assert!(grid.is_alive(2, 0));
        assert_eq!(summary, StepSummary { born: 1, died: 1, alive: 2 });
    }
}
