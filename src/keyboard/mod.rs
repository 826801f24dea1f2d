//! Keyboard mode: dwell-to-type over the virtual keyboard

pub mod layout;

pub use layout::{build_layout, hit_test, KeyBox, Rect, BACKSPACE_GLYPH, KEYBOARD_ROWS};

use crate::config::KeyboardConfig;
use crate::types::{FrameSize, KeyPress, LandmarkPoint};
use std::time::{Duration, Instant};

/// Key currently under the fingertip and when hovering started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverState {
    pub key: KeyBox,
    pub since: Instant,
}

pub struct KeyboardController {
    keys: Vec<KeyBox>,
    dwell_time: Duration,
    hover: Option<HoverState>,
}

impl KeyboardController {
    pub fn new(config: &KeyboardConfig) -> Self {
        Self {
            keys: build_layout(config),
            dwell_time: config.dwell_time(),
            hover: None,
        }
    }

    pub fn keys(&self) -> &[KeyBox] {
        &self.keys
    }

    pub fn hover(&self) -> Option<&HoverState> {
        self.hover.as_ref()
    }

    pub fn hovered_char(&self) -> Option<char> {
        self.hover.map(|h| h.key.character)
    }

    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    /// Process one frame in keyboard mode.
    ///
    /// Hover identity is the key character, so sliding along the spacebar
    /// keeps the timer running. After a press the timer restarts and the key
    /// repeats while the dwell continues.
    pub fn update(&mut self, index_tip: LandmarkPoint, frame: FrameSize, now: Instant) -> Option<KeyPress> {
        let px = (index_tip.x * frame.width as f64) as i32;
        let py = (index_tip.y * frame.height as f64) as i32;

        let Some(key) = hit_test(&self.keys, px, py).copied() else {
            self.hover = None;
            return None;
        };

        if let Some(hover) = self.hover.as_mut() {
            if hover.key.character == key.character {
                if now.saturating_duration_since(hover.since) > self.dwell_time {
                    hover.since = now;
                    log::info!("Typed: {}", key.character);
                    return Some(key_press(key.character));
                }
                return None;
            }
        }

        self.hover = Some(HoverState { key, since: now });
        None
    }
}

/// Map a key glyph to the key that should be pressed
pub fn key_press(character: char) -> KeyPress {
    match character {
        ' ' => KeyPress::Space,
        BACKSPACE_GLYPH => KeyPress::Backspace,
        c => KeyPress::Char(c.to_lowercase().next().unwrap_or(c)),
    }
}
