// Domain layer - cells, grid, neighbor counting, rules
pub mod domain;

// Application layer - clock, layout, game state
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

pub mod config;
pub mod error;

// Re-exports for convenience
pub use domain::{Boundary, Cell, FadeConfig, Grid, Pattern, Rgb, presets};
pub use application::{DisplayLayout, FpsMeter, GameState, SimulationClock};
pub use config::Config;
pub use error::{AllocationError, RenderError, StartupError};
