mod clock;
mod game_state;
mod layout;
mod stats;

pub use clock::{RunState, SimulationClock};
pub use game_state::GameState;
pub use layout::{DisplayLayout, PixelRect};
pub use stats::FpsMeter;
