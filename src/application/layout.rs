use crate::config::Config;

/// A rectangle in logical pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl PixelRect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// DisplayLayout maps between window pixels and grid pixels.
/// The status bar sits on top; the grid fills the area below it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayLayout {
    pub scale: f32,
    pub status_bar_height: f32,
    pub grid_width: f32,
    pub grid_height: f32,
}

impl DisplayLayout {
    pub fn new(config: &Config) -> Self {
        let size = config.cell_size as f32;
        Self {
            scale: config.display_scale,
            status_bar_height: config.status_bar_height as f32,
            grid_width: config.grid_width as f32 * size,
            grid_height: config.grid_height as f32 * size,
        }
    }

    /// Logical area reserved for the grid
    pub fn grid_viewport(&self) -> PixelRect {
        PixelRect::new(0.0, self.status_bar_height, self.grid_width, self.grid_height)
    }

    /// Logical area reserved for the status text
    pub fn status_viewport(&self) -> PixelRect {
        PixelRect::new(0.0, 0.0, self.grid_width, self.status_bar_height)
    }

    /// Window size in physical pixels
    pub fn window_size(&self) -> (i32, i32) {
        (
            (self.grid_width * self.scale).round() as i32,
            ((self.grid_height + self.status_bar_height) * self.scale).round() as i32,
        )
    }

    /// Convert a window position into grid pixel space
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32) -> (f32, f32) {
        let viewport = self.grid_viewport();
        (
            screen_x / self.scale - viewport.x,
            screen_y / self.scale - viewport.y,
        )
    }
}
