//! Per-frame gesture predicates
//!
//! Gestures are evaluated from a single snapshot with raw thresholds. There
//! is no smoothing or hysteresis here; debouncing happens in the consumers.

use crate::config::GestureConfig;
use crate::geometry::distance;
use crate::types::{Finger, HandLandmark, HandSnapshot};

/// Gestures detected in one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureSet {
    /// Index tip curled closer to the wrist than its middle knuckle
    pub fist: bool,
    pinch: [bool; 3],
}

impl GestureSet {
    pub fn pinch(&self, finger: Finger) -> bool {
        self.pinch[finger as usize]
    }

    pub fn any_pinch(&self) -> bool {
        self.pinch.iter().any(|p| *p)
    }
}

pub struct GestureClassifier {
    click_threshold: f64,
}

impl GestureClassifier {
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            click_threshold: config.click_threshold,
        }
    }

    pub fn classify(&self, hand: Option<&HandSnapshot>) -> GestureSet {
        let Some(hand) = hand else {
            return GestureSet::default();
        };

        let mut set = GestureSet {
            fist: is_fist(hand),
            pinch: [false; 3],
        };
        for finger in Finger::ALL {
            set.pinch[finger as usize] = self.is_pinch(hand, finger);
        }
        set
    }

    /// Fingertip within `click_threshold` of the thumb tip
    pub fn is_pinch(&self, hand: &HandSnapshot, finger: Finger) -> bool {
        distance(hand.get(finger.tip()), hand.get(HandLandmark::ThumbTip)) < self.click_threshold
    }
}

pub fn is_fist(hand: &HandSnapshot) -> bool {
    let wrist = hand.get(HandLandmark::Wrist);
    distance(hand.get(HandLandmark::IndexFingerTip), wrist)
        < distance(hand.get(HandLandmark::IndexFingerPip), wrist)
}
