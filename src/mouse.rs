//! Mouse mode: smoothed cursor, pinch-scroll and pinch-clicks

use crate::config::MouseConfig;
use crate::geometry::interp;
use crate::gesture::GestureSet;
use crate::types::{Finger, HandLandmark, HandSnapshot, InputAction, MouseButton, ScreenSize};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClickKind {
    Primary,
    Secondary,
    Double,
}

impl ClickKind {
    const ALL: [ClickKind; 3] = [ClickKind::Primary, ClickKind::Secondary, ClickKind::Double];

    fn finger(self) -> Finger {
        match self {
            Self::Primary => Finger::Index,
            Self::Secondary => Finger::Middle,
            Self::Double => Finger::Ring,
        }
    }

    fn action(self) -> InputAction {
        match self {
            Self::Primary => InputAction::Click(MouseButton::Left),
            Self::Secondary => InputAction::Click(MouseButton::Right),
            Self::Double => InputAction::DoubleClick,
        }
    }
}

pub struct MouseController {
    config: MouseConfig,
    screen: ScreenSize,
    /// Last smoothed cursor position in screen pixels
    position: (f64, f64),
    /// Index tip y on the previous pinch frame
    scroll_anchor: Option<f64>,
    last_click: [Option<Instant>; 3],
    click_cooldown: Duration,
}

impl MouseController {
    pub fn new(config: &MouseConfig, screen: ScreenSize) -> Self {
        Self {
            click_cooldown: config.click_cooldown(),
            config: config.clone(),
            screen,
            position: (0.0, 0.0),
            scroll_anchor: None,
            last_click: [None; 3],
        }
    }

    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    pub fn scroll_anchor(&self) -> Option<f64> {
        self.scroll_anchor
    }

    /// Forget the scroll anchor, e.g. when the hand is lost
    pub fn reset_scroll(&mut self) {
        self.scroll_anchor = None;
    }

    /// Process one frame in mouse mode.
    ///
    /// Emits a cursor move, then any scroll, then clicks in
    /// primary/secondary/double order. Clicks of different kinds are not
    /// mutually exclusive.
    pub fn update(&mut self, hand: &HandSnapshot, gestures: &GestureSet, now: Instant) -> Vec<InputAction> {
        let mut actions = Vec::with_capacity(2);
        let tip = hand.get(HandLandmark::IndexFingerTip);

        actions.push(self.move_cursor(tip.x, tip.y));

        if let Some(amount) = self.track_scroll(gestures.pinch(Finger::Index), tip.y) {
            log::debug!("Scroll {amount}");
            actions.push(InputAction::Scroll(amount));
        }

        for kind in ClickKind::ALL {
            if gestures.pinch(kind.finger()) && self.click_ready(kind, now) {
                log::debug!("Click {:?}", kind);
                self.last_click[kind as usize] = Some(now);
                actions.push(kind.action());
            }
        }

        actions
    }

    fn move_cursor(&mut self, x: f64, y: f64) -> InputAction {
        let range = (self.config.input_min, self.config.input_max);
        let target_x = interp(x, range, (0.0, self.screen.width as f64));
        let target_y = interp(y, range, (0.0, self.screen.height as f64));

        let (px, py) = self.position;
        let cx = px + (target_x - px) / self.config.smoothing;
        let cy = py + (target_y - py) / self.config.smoothing;
        self.position = (cx, cy);

        InputAction::MoveCursor { x: cx, y: cy }
    }

    /// Returns wheel units to scroll, positive when the hand moved up.
    fn track_scroll(&mut self, pinched: bool, y: f64) -> Option<i32> {
        if !pinched {
            self.scroll_anchor = None;
            return None;
        }

        let amount = self.scroll_anchor.and_then(|anchor| {
            let delta = anchor - y;
            (delta.abs() > self.config.scroll_threshold)
                .then(|| (delta * self.config.scroll_scaling).round() as i32)
        });
        self.scroll_anchor = Some(y);
        amount
    }

    fn click_ready(&self, kind: ClickKind, now: Instant) -> bool {
        match self.last_click[kind as usize] {
            Some(last) => now.saturating_duration_since(last) >= self.click_cooldown,
            None => true,
        }
    }
}
