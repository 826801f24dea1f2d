//! Core data types for hand-driven control

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of joints in the hand landmark schema
pub const LANDMARK_COUNT: usize = 21;

/// A single hand joint position in normalized camera-frame space
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct LandmarkPoint {
    /// X coordinate (normalized 0.0-1.0 of frame width)
    pub x: f64,
    /// Y coordinate (normalized 0.0-1.0 of frame height, 0 = top)
    pub y: f64,
    /// Depth relative to the wrist; unused by gesture geometry
    #[serde(default)]
    pub z: f64,
}

impl LandmarkPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }
}

/// Joint indices of the 21-point hand landmark schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandLandmark {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexFingerMcp,
    IndexFingerPip,
    IndexFingerDip,
    IndexFingerTip,
    MiddleFingerMcp,
    MiddleFingerPip,
    MiddleFingerDip,
    MiddleFingerTip,
    RingFingerMcp,
    RingFingerPip,
    RingFingerDip,
    RingFingerTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

impl HandLandmark {
    /// Position of this joint in a landmark array
    pub fn index(self) -> usize {
        self as usize
    }
}

/// All landmarks of the single tracked hand in one frame
#[derive(Debug, Clone, PartialEq)]
pub struct HandSnapshot {
    points: [LandmarkPoint; LANDMARK_COUNT],
}

impl HandSnapshot {
    pub fn new(points: [LandmarkPoint; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Build a snapshot from a detector landmark list.
    ///
    /// Returns `None` unless exactly [`LANDMARK_COUNT`] points are given.
    pub fn from_slice(points: &[LandmarkPoint]) -> Option<Self> {
        let points: [LandmarkPoint; LANDMARK_COUNT] = points.try_into().ok()?;
        Some(Self { points })
    }

    pub fn get(&self, landmark: HandLandmark) -> LandmarkPoint {
        self.points[landmark.index()]
    }

    pub fn set(&mut self, landmark: HandLandmark, point: LandmarkPoint) {
        self.points[landmark.index()] = point;
    }

    pub fn points(&self) -> &[LandmarkPoint; LANDMARK_COUNT] {
        &self.points
    }
}

/// Pixel dimensions of the camera frame the landmarks came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl Default for FrameSize {
    fn default() -> Self {
        Self {
            width: 900,
            height: 500,
        }
    }
}

/// One acquired frame worth of detector output
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkFrame {
    /// The tracked hand, or `None` when no hand was detected
    pub hand: Option<HandSnapshot>,
    pub size: FrameSize,
}

/// Screen size used for cursor mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// Current control mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControlMode {
    #[default]
    Neutral,
    Mouse,
    Keyboard,
}

impl ControlMode {
    /// Next mode in the fixed NEUTRAL -> MOUSE -> KEYBOARD cycle
    pub fn next(self) -> Self {
        match self {
            Self::Neutral => Self::Mouse,
            Self::Mouse => Self::Keyboard,
            Self::Keyboard => Self::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "NEUTRAL",
            Self::Mouse => "MOUSE",
            Self::Keyboard => "KEYBOARD",
        }
    }
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fingers that can pinch against the thumb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Index,
    Middle,
    Ring,
}

impl Finger {
    pub const ALL: [Finger; 3] = [Finger::Index, Finger::Middle, Finger::Ring];

    pub fn tip(self) -> HandLandmark {
        match self {
            Self::Index => HandLandmark::IndexFingerTip,
            Self::Middle => HandLandmark::MiddleFingerTip,
            Self::Ring => HandLandmark::RingFingerTip,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
}

/// A key press produced by dwell-to-type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Space,
    Backspace,
    /// A printable key, already lower-cased
    Char(char),
}

impl KeyPress {
    /// Key name as understood by input injection APIs
    pub fn name(&self) -> String {
        match self {
            Self::Space => "space".to_string(),
            Self::Backspace => "backspace".to_string(),
            Self::Char(c) => c.to_string(),
        }
    }
}

/// A synthetic input event to be injected into the OS
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// Absolute cursor move in screen pixels
    MoveCursor { x: f64, y: f64 },
    Click(MouseButton),
    DoubleClick,
    /// Vertical scroll in wheel units, positive scrolls up
    Scroll(i32),
    PressKey(KeyPress),
}
