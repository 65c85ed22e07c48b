use log::info;
use macroquad::prelude::*;
use crate::application::{DisplayLayout, GameState};
use crate::domain::{Pattern, presets};

/// Which pointer buttons are held
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Buttons {
    pub primary: bool,
    pub other: bool,
}

/// One input event for the current frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Quit,
    /// A fresh key press; auto-repeats never reach this point
    Key(KeyCode),
    /// Pointer position in window pixels with the buttons held
    Pointer { x: f32, y: f32, buttons: Buttons },
}

/// Intent-level commands the keyboard can issue
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    Reset,
    Clear,
    ToggleMesh,
    Faster,
    Slower,
    Quit,
    /// Index into `presets::all_patterns()`
    Stamp(usize),
}

impl Command {
    pub fn from_key(key: KeyCode) -> Option<Self> {
        let command = match key {
            KeyCode::Escape => Command::Quit,
            KeyCode::P | KeyCode::Space => Command::TogglePause,
            KeyCode::R => Command::Reset,
            KeyCode::C => Command::Clear,
            KeyCode::M => Command::ToggleMesh,
            KeyCode::Up | KeyCode::Equal | KeyCode::KpAdd => Command::Faster,
            KeyCode::Down | KeyCode::Minus | KeyCode::KpSubtract => Command::Slower,
            KeyCode::Key1 => Command::Stamp(0),
            KeyCode::Key2 => Command::Stamp(1),
            KeyCode::Key3 => Command::Stamp(2),
            KeyCode::Key4 => Command::Stamp(3),
            KeyCode::Key5 => Command::Stamp(4),
            _ => return None,
        };
        Some(command)
    }
}

/// Keys the poller watches
const WATCHED_KEYS: [KeyCode; 17] = [
    KeyCode::Escape,
    KeyCode::P,
    KeyCode::Space,
    KeyCode::R,
    KeyCode::C,
    KeyCode::M,
    KeyCode::Up,
    KeyCode::Equal,
    KeyCode::KpAdd,
    KeyCode::Down,
    KeyCode::Minus,
    KeyCode::KpSubtract,
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
];

/// Collect this frame's events from macroquad.
/// `is_key_pressed` only fires on the first frame of a press, which drops
/// auto-repeat.
pub fn poll_events() -> Vec<InputEvent> {
    let mut events = Vec::new();

    if is_quit_requested() {
        events.push(InputEvent::Quit);
    }

    events.extend(
        WATCHED_KEYS
            .iter()
            .filter(|&&key| is_key_pressed(key))
            .map(|&key| InputEvent::Key(key)),
    );

    let (x, y) = mouse_position();
    let buttons = Buttons {
        primary: is_mouse_button_down(MouseButton::Left),
        other: is_mouse_button_down(MouseButton::Right) || is_mouse_button_down(MouseButton::Middle),
    };
    events.push(InputEvent::Pointer { x, y, buttons });

    events
}

/// Interaction turns input events into grid operations.
/// It owns the display layout so pointer math never reads global state.
pub struct Interaction {
    layout: DisplayLayout,
    patterns: Vec<Pattern>,
    /// Grid cell under the pointer at the last pointer event
    hovered: Option<(usize, usize)>,
}

impl Interaction {
    pub fn new(layout: DisplayLayout) -> Self {
        Self {
            layout,
            patterns: presets::all_patterns(),
            hovered: None,
        }
    }

    pub fn hovered(&self) -> Option<(usize, usize)> {
        self.hovered
    }

    pub fn handle(&mut self, state: &mut GameState, event: InputEvent) {
        match event {
            InputEvent::Quit => self.execute(state, Command::Quit),
            InputEvent::Key(key) => {
                if let Some(command) = Command::from_key(key) {
                    self.execute(state, command);
                }
            }
            InputEvent::Pointer { x, y, buttons } => self.pointer(state, x, y, buttons),
        }
    }

    pub fn execute(&mut self, state: &mut GameState, command: Command) {
        match command {
            Command::TogglePause => state.toggle_running(),
            Command::Reset => state.reset(),
            Command::Clear => state.clear(),
            Command::ToggleMesh => state.toggle_mesh(),
            Command::Faster => state.faster(),
            Command::Slower => state.slower(),
            Command::Quit => {
                info!("quit requested");
                state.quit();
            }
            Command::Stamp(index) => {
                if let (Some(pattern), Some((cx, cy))) = (self.patterns.get(index), self.hovered) {
                    state.stamp(pattern, cx, cy);
                }
            }
        }
    }

    fn pointer(&mut self, state: &mut GameState, x: f32, y: f32, buttons: Buttons) {
        let (gx, gy) = self.layout.screen_to_grid(x, y);
        // Same hit test as painting; on a shared border the first hit wins
        self.hovered = state.grid().cells_at_pixel(gx, gy).first().copied();

        if buttons.primary {
            state.paint_at_pixel(gx, gy, true);
        } else if buttons.other {
            state.paint_at_pixel(gx, gy, false);
        }
    }
}
