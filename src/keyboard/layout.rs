//! On-screen keyboard geometry
//!
//! Keys are laid out in camera-frame pixel space so the index fingertip can
//! be hit-tested directly against them.

use crate::config::KeyboardConfig;

/// Glyph drawn on the backspace key
pub const BACKSPACE_GLYPH: char = '←';

/// Character rows, top to bottom. The last row is the spacebar, one box
/// per space character.
pub const KEYBOARD_ROWS: [&str; 5] = [
    "1234567890",
    "QWERTYUIOP",
    "ASDFGHJKL",
    "ZXCVBNM ←",
    "        ",
];

/// Axis-aligned pixel rectangle, `x1 < x2` and `y1 < y2`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    /// Strict interior test; pixels on the border are outside.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        self.x1 < px && px < self.x2 && self.y1 < py && py < self.y2
    }
}

/// A single key of the virtual keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBox {
    pub character: char,
    pub rect: Rect,
}

/// Build one box per character of [`KEYBOARD_ROWS`], row-major.
pub fn build_layout(config: &KeyboardConfig) -> Vec<KeyBox> {
    build_layout_from_rows(&KEYBOARD_ROWS, config)
}

fn build_layout_from_rows(rows: &[&str], config: &KeyboardConfig) -> Vec<KeyBox> {
    let step_x = config.key_width + config.key_margin;
    let step_y = config.key_height + config.key_margin;

    let mut boxes = Vec::with_capacity(rows.iter().map(|r| r.chars().count()).sum());
    for (i, row) in rows.iter().enumerate() {
        let y = config.origin_y + i as i32 * step_y;
        for (j, character) in row.chars().enumerate() {
            let x = config.origin_x + j as i32 * step_x;
            boxes.push(KeyBox {
                character,
                rect: Rect {
                    x1: x,
                    y1: y,
                    x2: x + config.key_width,
                    y2: y + config.key_height,
                },
            });
        }
    }
    boxes
}

/// First key (in layout order) whose interior contains the pixel
pub fn hit_test(boxes: &[KeyBox], px: i32, py: i32) -> Option<&KeyBox> {
    boxes.iter().find(|key| key.rect.contains(px, py))
}
