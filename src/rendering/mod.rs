use log::warn;
use macroquad::prelude::*;
use crate::application::{DisplayLayout, PixelRect, SimulationClock};
use crate::domain::{Grid, Rgb};
use crate::error::RenderError;

/// Something that accepts per-cell draw requests
pub trait DisplaySurface {
    fn clear(&mut self, color: Rgb) -> Result<(), RenderError>;
    fn fill_rect(&mut self, rect: PixelRect, color: Rgb) -> Result<(), RenderError>;
    fn outline_rect(&mut self, rect: PixelRect, color: Rgb) -> Result<(), RenderError>;
    /// Restrict drawing to an area; rect coordinates become relative to it.
    /// None restores the full screen.
    fn set_viewport(&mut self, viewport: Option<PixelRect>);
}

/// Something that can put a line of text on screen
pub trait OverlayRenderer {
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Rgb) -> Result<(), RenderError>;
}

/// How cells are colored
#[derive(Clone, Copy, Debug)]
pub struct GridStyle {
    /// Use each cell's animated color instead of plain alive/dead colors
    pub fade: bool,
    pub show_mesh: bool,
    pub alive: Rgb,
    pub dead: Rgb,
    pub mesh: Rgb,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            fade: false,
            show_mesh: false,
            alive: Rgb::WHITE,
            dead: Rgb::BLACK,
            mesh: Rgb::new(40, 40, 40),
        }
    }
}

/// Translate a rect into the viewport and clip it.
/// Ok(None) means nothing is left to draw.
pub fn place_in_viewport(rect: PixelRect, viewport: Option<PixelRect>) -> Result<Option<PixelRect>, RenderError> {
    let valid = [rect.x, rect.y, rect.w, rect.h].iter().all(|v| v.is_finite()) && rect.w >= 0.0 && rect.h >= 0.0;
    if !valid {
        return Err(RenderError::InvalidRect { x: rect.x, y: rect.y, w: rect.w, h: rect.h });
    }

    let Some(vp) = viewport else {
        return Ok(Some(rect));
    };

    let left = (vp.x + rect.x).max(vp.x);
    let top = (vp.y + rect.y).max(vp.y);
    let right = (vp.x + rect.x + rect.w).min(vp.x + vp.w);
    let bottom = (vp.y + rect.y + rect.h).min(vp.y + vp.h);

    Ok((right > left && bottom > top).then(|| PixelRect::new(left, top, right - left, bottom - top)))
}

/// Draw every cell, plus its outline when the mesh is on.
/// A failed request is logged and skipped; returns how many failed.
pub fn draw_grid<S: DisplaySurface + ?Sized>(grid: &Grid, surface: &mut S, style: &GridStyle) -> usize {
    let size = grid.cell_size() as f32;
    let mut failures = 0;

    for (x, y, cell) in grid.iter() {
        let (px, py) = cell.position();
        let rect = PixelRect::new(px as f32, py as f32, size, size);
        let color = match (style.fade, cell.is_alive()) {
            (true, _) => cell.color(),
            (false, true) => style.alive,
            (false, false) => style.dead,
        };

        if let Err(e) = surface.fill_rect(rect, color) {
            warn!("cell ({x}, {y}): {e}");
            failures += 1;
        }
        if style.show_mesh {
            if let Err(e) = surface.outline_rect(rect, style.mesh) {
                warn!("mesh ({x}, {y}): {e}");
                failures += 1;
            }
        }
    }

    failures
}

/// Format large numbers with K/M/B suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000_000 {
        format!("{:.1}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// The status bar text
pub fn status_line(fps: f32, clock: &SimulationClock, population: usize) -> String {
    format!(
        "FPS: {:.0} | Tick: {} | Alive: {} | Delay: {} ms | {}",
        fps,
        clock.ticks(),
        format_number(population),
        clock.delay_ms(),
        if clock.is_running() { "Running" } else { "Paused" }
    )
}

/// Draw the status strip; failures are logged, never fatal
pub fn draw_status<S: DisplaySurface + OverlayRenderer + ?Sized>(
    surface: &mut S,
    layout: &DisplayLayout,
    text: &str,
) {
    let area = layout.status_viewport();
    surface.set_viewport(Some(area));
    if let Err(e) = surface.fill_rect(PixelRect::new(0.0, 0.0, area.w, area.h), Rgb::new(30, 30, 30)) {
        warn!("status background: {e}");
    }
    if let Err(e) = surface.draw_text(text, 6.0, area.h * 0.7, Rgb::new(200, 200, 200)) {
        warn!("status text: {e}");
    }
    surface.set_viewport(None);
}

/// Clear the screen and draw the grid inside its viewport
pub fn draw_board<S: DisplaySurface + ?Sized>(
    surface: &mut S,
    layout: &DisplayLayout,
    grid: &Grid,
    style: &GridStyle,
) -> usize {
    if let Err(e) = surface.clear(Rgb::BLACK) {
        warn!("clear: {e}");
    }
    surface.set_viewport(Some(layout.grid_viewport()));
    let failures = draw_grid(grid, surface, style);
    surface.set_viewport(None);
    failures
}

fn to_color(c: Rgb) -> Color {
    Color::new(c.r as f32 / 255.0, c.g as f32 / 255.0, c.b as f32 / 255.0, 1.0)
}

/// DisplaySurface backed by macroquad's immediate-mode shapes
pub struct MacroquadSurface {
    scale: f32,
    font_size: f32,
    viewport: Option<PixelRect>,
}

impl MacroquadSurface {
    pub fn new(scale: f32) -> Self {
        Self {
            scale,
            font_size: 16.0,
            viewport: None,
        }
    }
}

impl DisplaySurface for MacroquadSurface {
    fn clear(&mut self, color: Rgb) -> Result<(), RenderError> {
        clear_background(to_color(color));
        Ok(())
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb) -> Result<(), RenderError> {
        if let Some(r) = place_in_viewport(rect, self.viewport)? {
            let s = self.scale;
            draw_rectangle(r.x * s, r.y * s, r.w * s, r.h * s, to_color(color));
        }
        Ok(())
    }

    fn outline_rect(&mut self, rect: PixelRect, color: Rgb) -> Result<(), RenderError> {
        if let Some(r) = place_in_viewport(rect, self.viewport)? {
            let s = self.scale;
            draw_rectangle_lines(r.x * s, r.y * s, r.w * s, r.h * s, s, to_color(color));
        }
        Ok(())
    }

    fn set_viewport(&mut self, viewport: Option<PixelRect>) {
        self.viewport = viewport;
    }
}

impl OverlayRenderer for MacroquadSurface {
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Rgb) -> Result<(), RenderError> {
        let (ox, oy) = self.viewport.map_or((0.0, 0.0), |vp| (vp.x, vp.y));
        let s = self.scale;
        draw_text(text, (ox + x) * s, (oy + y) * s, self.font_size * s, to_color(color));
        Ok(())
    }
}
