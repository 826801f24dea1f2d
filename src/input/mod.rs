//! Input injection - where gesture actions reach the OS

use crate::error::Result;
use crate::types::{InputAction, KeyPress, MouseButton, ScreenSize};

#[cfg(feature = "inject")]
mod enigo_sink;

#[cfg(feature = "inject")]
pub use enigo_sink::EnigoSink;

/// Synthetic mouse/keyboard backend
pub trait InputSink {
    /// Move the pointer to absolute screen pixels
    fn move_cursor_to(&mut self, x: f64, y: f64) -> Result<()>;
    fn click(&mut self, button: MouseButton) -> Result<()>;
    fn double_click(&mut self) -> Result<()>;
    /// Vertical wheel scroll, positive scrolls up
    fn scroll(&mut self, amount: i32) -> Result<()>;
    fn press_key(&mut self, key: KeyPress) -> Result<()>;

    /// Size of the primary display, if the backend can tell
    fn screen_size(&self) -> Option<ScreenSize> {
        None
    }

    fn dispatch(&mut self, action: &InputAction) -> Result<()> {
        match *action {
            InputAction::MoveCursor { x, y } => self.move_cursor_to(x, y),
            InputAction::Click(button) => self.click(button),
            InputAction::DoubleClick => self.double_click(),
            InputAction::Scroll(amount) => self.scroll(amount),
            InputAction::PressKey(key) => self.press_key(key),
        }
    }
}

impl<T: InputSink + ?Sized> InputSink for Box<T> {
    fn move_cursor_to(&mut self, x: f64, y: f64) -> Result<()> {
        (**self).move_cursor_to(x, y)
    }

    fn click(&mut self, button: MouseButton) -> Result<()> {
        (**self).click(button)
    }

    fn double_click(&mut self) -> Result<()> {
        (**self).double_click()
    }

    fn scroll(&mut self, amount: i32) -> Result<()> {
        (**self).scroll(amount)
    }

    fn press_key(&mut self, key: KeyPress) -> Result<()> {
        (**self).press_key(key)
    }

    fn screen_size(&self) -> Option<ScreenSize> {
        (**self).screen_size()
    }
}

/// Dry-run sink: logs what would have been injected
#[derive(Debug, Default)]
pub struct LogSink;

impl InputSink for LogSink {
    fn move_cursor_to(&mut self, x: f64, y: f64) -> Result<()> {
        log::trace!("cursor -> ({x:.0}, {y:.0})");
        Ok(())
    }

    fn click(&mut self, button: MouseButton) -> Result<()> {
        log::info!("click {:?}", button);
        Ok(())
    }

    fn double_click(&mut self) -> Result<()> {
        log::info!("double click");
        Ok(())
    }

    fn scroll(&mut self, amount: i32) -> Result<()> {
        log::info!("scroll {amount}");
        Ok(())
    }

    fn press_key(&mut self, key: KeyPress) -> Result<()> {
        log::info!("key {}", key.name());
        Ok(())
    }
}

/// Keeps every action in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub actions: Vec<InputAction>,
    pub screen: Option<ScreenSize>,
}

impl RecordingSink {
    pub fn with_screen(screen: ScreenSize) -> Self {
        Self {
            actions: Vec::new(),
            screen: Some(screen),
        }
    }

    pub fn take(&mut self) -> Vec<InputAction> {
        std::mem::take(&mut self.actions)
    }
}

impl InputSink for RecordingSink {
    fn move_cursor_to(&mut self, x: f64, y: f64) -> Result<()> {
        self.actions.push(InputAction::MoveCursor { x, y });
        Ok(())
    }

    fn click(&mut self, button: MouseButton) -> Result<()> {
        self.actions.push(InputAction::Click(button));
        Ok(())
    }

    fn double_click(&mut self) -> Result<()> {
        self.actions.push(InputAction::DoubleClick);
        Ok(())
    }

    fn scroll(&mut self, amount: i32) -> Result<()> {
        self.actions.push(InputAction::Scroll(amount));
        Ok(())
    }

    fn press_key(&mut self, key: KeyPress) -> Result<()> {
        self.actions.push(InputAction::PressKey(key));
        Ok(())
    }

    fn screen_size(&self) -> Option<ScreenSize> {
        self.screen
    }
}
