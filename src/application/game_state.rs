use crate::application::SimulationClock;
use crate::config::Config;
use crate::domain::{self, Boundary, FadeConfig, Grid, Pattern, StepSummary};
use crate::error::AllocationError;
use log::{debug, trace};
use rand::{SeedableRng, rngs::StdRng};

/// GameState orchestrates the simulation.
/// Input code talks to it through intent-level operations only.
pub struct GameState {
    grid: Grid,
    clock: SimulationClock,
    boundary: Boundary,
    fade: Option<FadeConfig>,
    show_mesh: bool,
    quit: bool,
    rng: StdRng,
}

impl GameState {
    /// Build the initial state with a randomly seeded grid
    pub fn new(config: &Config) -> Result<Self, AllocationError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let grid = Grid::create(config.grid_width, config.grid_height, config.cell_size, &mut rng)?;

        let mut state = Self {
            grid,
            clock: SimulationClock::new(
                config.initial_delay_ms,
                config.max_delay_ms,
                config.delay_step_ms,
                config.start_paused,
            ),
            boundary: config.boundary,
            fade: config.fade,
            show_mesh: config.show_mesh,
            quit: false,
            rng,
        };
        state.refresh_colors();
        Ok(state)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn fade(&self) -> Option<&FadeConfig> {
        self.fade.as_ref()
    }

    pub fn show_mesh(&self) -> bool {
        self.show_mesh
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Set one cell alive or dead. Allowed whether running or paused.
    pub fn paint(&mut self, x: usize, y: usize, alive: bool) {
        let fade = self.fade;
        if let Some(cell) = self.grid.get_mut(x, y) {
            let was_alive = cell.is_alive();
            cell.set_alive(alive);
            if let Some(fade) = fade {
                cell.set_color(fade.edited_color(cell.color(), was_alive, alive));
            }
        }
    }

    /// Paint every cell whose rectangle contains the grid-space pixel
    pub fn paint_at_pixel(&mut self, px: f32, py: f32, alive: bool) {
        for (x, y) in self.grid.cells_at_pixel(px, py) {
            self.paint(x, y, alive);
        }
    }

    /// Stamp a pattern centered on (cx, cy)
    pub fn stamp(&mut self, pattern: &Pattern, cx: usize, cy: usize) {
        debug!("stamping {} at ({cx}, {cy})", pattern.name);
        for (x, y) in pattern.cells_centered_on(&self.grid, cx, cy) {
            self.paint(x, y, true);
        }
    }

    /// Reseed the grid randomly and zero the tick counter
    pub fn reset(&mut self) {
        self.grid.randomize(&mut self.rng);
        self.refresh_colors();
        self.clock.reset_ticks();
        debug!("grid reseeded, {} cells alive", self.grid.population());
    }

    /// Kill every cell and zero the tick counter
    pub fn clear(&mut self) {
        self.grid.clear();
        self.refresh_colors();
        self.clock.reset_ticks();
        debug!("grid cleared");
    }

    /// Toggle play/pause state
    pub fn toggle_running(&mut self) {
        self.clock.toggle();
        debug!("simulation {:?}", self.clock.state());
    }

    pub fn toggle_mesh(&mut self) {
        self.show_mesh = !self.show_mesh;
    }

    /// Shorten the logic delay
    pub fn faster(&mut self) {
        self.clock.faster();
        debug!("logic delay {} ms", self.clock.delay_ms());
    }

    /// Lengthen the logic delay
    pub fn slower(&mut self) {
        self.clock.slower();
        debug!("logic delay {} ms", self.clock.delay_ms());
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Advance one generation if the clock says a step is due.
    /// Returns the step summary when a step ran.
    pub fn update(&mut self, now_ms: u64) -> Option<StepSummary> {
        if !self.clock.is_due(now_ms) {
            return None;
        }
        let summary = domain::step(&mut self.grid, self.boundary, self.fade.as_ref());
        self.clock.mark_stepped(now_ms);
        trace!(
            "tick {}: {} born, {} died, {} alive",
            self.clock.ticks(),
            summary.born,
            summary.died,
            summary.alive
        );
        Some(summary)
    }

    /// Give every cell the color matching its state after a bulk edit
    fn refresh_colors(&mut self) {
        let Some(fade) = self.fade else { return };
        for cell in self.grid.cells_mut() {
            cell.set_color(if cell.is_alive() { fade.flash } else { fade.dead_floor });
        }
    }
}
