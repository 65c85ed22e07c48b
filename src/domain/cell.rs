/// An RGB triple used for the fade animation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Move every channel down by its step, never going below the floor.
    pub const fn decay(self, step: Rgb, floor: Rgb) -> Self {
        Self {
            r: decay_channel(self.r, step.r, floor.r),
            g: decay_channel(self.g, step.g, floor.g),
            b: decay_channel(self.b, step.b, floor.b),
        }
    }
}

const fn decay_channel(value: u8, step: u8, floor: u8) -> u8 {
    // A channel already under its floor stays put rather than jumping up.
    if value <= floor {
        return value;
    }
    let next = value.saturating_sub(step);
    if next < floor { floor } else { next }
}

/// Cell is the fundamental unit of the grid.
/// Its pixel position is fixed at creation; everything else changes per tick.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Cell {
    pos_x: u32,
    pos_y: u32,
    alive: bool,
    neighbors: u8,
    color: Rgb,
}

impl Cell {
    pub(crate) const fn new(pos_x: u32, pos_y: u32, alive: bool) -> Self {
        Self {
            pos_x,
            pos_y,
            alive,
            neighbors: 0,
            color: if alive { Rgb::WHITE } else { Rgb::BLACK },
        }
    }

    /// Top-left corner in grid pixel space
    pub const fn position(&self) -> (u32, u32) {
        (self.pos_x, self.pos_y)
    }

    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Live neighbors counted during the most recent step
    pub const fn neighbors(&self) -> u8 {
        self.neighbors
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    pub(crate) fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    pub(crate) fn set_neighbors(&mut self, neighbors: u8) {
        self.neighbors = neighbors;
    }

    pub(crate) fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }
}
