//! Overlay rendering hook
//!
//! Drawing is left to the host; the controller hands over what should be on
//! screen every frame.

use crate::keyboard::KeyBox;
use crate::types::ControlMode;

/// Everything an overlay needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct OverlayView<'a> {
    pub mode: ControlMode,
    pub keys: &'a [KeyBox],
    pub hovered: Option<char>,
}

impl OverlayView<'_> {
    /// Keys are only shown in keyboard mode
    pub fn keyboard_visible(&self) -> bool {
        self.mode == ControlMode::Keyboard
    }
}

pub trait OverlayRenderer {
    fn render(&mut self, view: &OverlayView<'_>);
}

/// Headless overlay: logs mode and hover changes
#[derive(Debug, Default)]
pub struct LogOverlay {
    last_mode: Option<ControlMode>,
    last_hovered: Option<char>,
}

impl OverlayRenderer for LogOverlay {
    fn render(&mut self, view: &OverlayView<'_>) {
        if self.last_mode != Some(view.mode) {
            log::debug!("Mode: {}", view.mode);
            self.last_mode = Some(view.mode);
        }

        let hovered = if view.keyboard_visible() { view.hovered } else { None };
        if hovered != self.last_hovered {
            match hovered {
                Some(c) => log::debug!("Hovering key {:?}", c),
                None => log::debug!("No key hovered"),
            }
            self.last_hovered = hovered;
        }
    }
}

impl<T: OverlayRenderer + ?Sized> OverlayRenderer for Box<T> {
    fn render(&mut self, view: &OverlayView<'_>) {
        (**self).render(view)
    }
}
