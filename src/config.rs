//! Startup constants gathered in one place.

use crate::domain::{Boundary, FadeConfig};

/// Bounds and step of the adjustable logic delay, in milliseconds
pub const MIN_DELAY_MS: u32 = 0;
pub const MAX_DELAY_MS: u32 = 990;
pub const DELAY_STEP_MS: u32 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub grid_width: usize,
    pub grid_height: usize,
    pub cell_size: u32,
    /// Window pixels per logical pixel
    pub display_scale: f32,
    /// Height of the status strip above the grid, in logical pixels
    pub status_bar_height: u32,
    pub initial_delay_ms: u32,
    pub max_delay_ms: u32,
    pub delay_step_ms: u32,
    pub boundary: Boundary,
    /// None renders plain white/black cells
    pub fade: Option<FadeConfig>,
    pub show_mesh: bool,
    pub start_paused: bool,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_width: 128,
            grid_height: 100,
            cell_size: 8,
            display_scale: 1.0,
            status_bar_height: 24,
            initial_delay_ms: 100,
            max_delay_ms: MAX_DELAY_MS,
            delay_step_ms: DELAY_STEP_MS,
            boundary: Boundary::Toroidal,
            fade: Some(FadeConfig::default()),
            show_mesh: false,
            start_paused: true,
            seed: None,
        }
    }
}
