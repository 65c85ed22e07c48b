//! Color-fade animation.
//!
//! A cell that flips state flashes, then every tick its channels fall by a
//! fixed step until they reach the floor for its current state. Live cells
//! fall slower and stop on a visible color; dead cells fade to black.

use super::{Rgb, Transition};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FadeConfig {
    /// Color a cell takes when it is born or dies
    pub flash: Rgb,
    pub alive_step: Rgb,
    pub alive_floor: Rgb,
    pub dead_step: Rgb,
    pub dead_floor: Rgb,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            flash: Rgb::WHITE,
            alive_step: Rgb::new(6, 3, 4),
            alive_floor: Rgb::new(0, 200, 120),
            dead_step: Rgb::new(24, 32, 28),
            dead_floor: Rgb::BLACK,
        }
    }
}

impl FadeConfig {
    /// Color after one generation
    pub fn next_color(&self, current: Rgb, transition: Transition) -> Rgb {
        match transition {
            Transition::Born | Transition::Died => self.flash,
            Transition::Survived => current.decay(self.alive_step, self.alive_floor),
            Transition::StayedDead => current.decay(self.dead_step, self.dead_floor),
        }
    }

    /// Color after a direct edit of the alive flag.
    /// An erased cell goes straight to the dead floor so it never looks alive.
    pub fn edited_color(&self, current: Rgb, was_alive: bool, alive: bool) -> Rgb {
        match Transition::of(was_alive, alive) {
            Transition::Born => self.flash,
            Transition::Died => self.dead_floor,
            Transition::Survived | Transition::StayedDead => current,
        }
    }
}
