use super::InputSink;
use crate::error::{HandsError, Result};
use crate::types::{KeyPress, MouseButton, ScreenSize};
use enigo::{Axis, Button, Coordinate, Direction, Enigo, Key, Keyboard, Mouse, Settings};

/// Injects input into the running desktop session through `enigo`
pub struct EnigoSink {
    enigo: Enigo,
}

impl EnigoSink {
    pub fn new() -> Result<Self> {
        log::info!("Initializing enigo input injection...");
        let enigo = Enigo::new(&Settings::default()).map_err(|e| HandsError::Injection(format!("{e:?}")))?;
        Ok(Self { enigo })
    }
}

fn injection_err<E: std::fmt::Debug>(e: E) -> HandsError {
    HandsError::Injection(format!("{e:?}"))
}

impl InputSink for EnigoSink {
    fn move_cursor_to(&mut self, x: f64, y: f64) -> Result<()> {
        self.enigo
            .move_mouse(x.round() as i32, y.round() as i32, Coordinate::Abs)
            .map_err(injection_err)
    }

    fn click(&mut self, button: MouseButton) -> Result<()> {
        let button = match button {
            MouseButton::Left => Button::Left,
            MouseButton::Right => Button::Right,
        };
        self.enigo.button(button, Direction::Click).map_err(injection_err)
    }

    fn double_click(&mut self) -> Result<()> {
        self.enigo.button(Button::Left, Direction::Click).map_err(injection_err)?;
        self.enigo.button(Button::Left, Direction::Click).map_err(injection_err)
    }

    fn scroll(&mut self, amount: i32) -> Result<()> {
        // enigo scrolls down for positive lengths
        self.enigo.scroll(-amount, Axis::Vertical).map_err(injection_err)
    }

    fn press_key(&mut self, key: KeyPress) -> Result<()> {
        let key = match key {
            KeyPress::Space => Key::Space,
            KeyPress::Backspace => Key::Backspace,
            KeyPress::Char(c) => Key::Unicode(c),
        };
        self.enigo.key(key, Direction::Click).map_err(injection_err)
    }

    fn screen_size(&self) -> Option<ScreenSize> {
        let (w, h) = self.enigo.main_display().ok()?;
        Some(ScreenSize {
            width: u32::try_from(w).ok()?,
            height: u32::try_from(h).ok()?,
        })
    }
}
