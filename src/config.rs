//! Runtime configuration, loaded once at startup from an optional TOML file

use crate::error::HandsError;
use crate::types::{FrameSize, ScreenSize};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

/// Environment variable naming the TOML config file
pub const CONFIG_ENV: &str = "RAYOS_HANDS_CONFIG";
/// Environment variable overriding `source.udp_addr`
pub const UDP_ADDR_ENV: &str = "RAYOS_HANDS_UDP_ADDR";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandsConfig {
    pub gesture: GestureConfig,
    pub mode: ModeConfig,
    pub mouse: MouseConfig,
    pub keyboard: KeyboardConfig,
    pub source: SourceConfig,
    /// Fixed screen size; falls back to the input sink's display size
    pub screen: Option<ScreenSize>,
}

impl HandsConfig {
    /// Parse a config file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HandsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| HandsError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, HandsError> {
        Ok(toml::from_str(content)?)
    }

    /// Render the effective configuration in config-file form
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load from `RAYOS_HANDS_CONFIG` if set, then apply env overrides
    pub fn from_env() -> Result<Self, HandsError> {
        let mut config = match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                log::info!("Loading config from: {path}");
                Self::load(path)?
            }
            Err(_) => Self::default(),
        };

        if let Ok(raw) = std::env::var(UDP_ADDR_ENV) {
            match raw.parse::<SocketAddr>() {
                Ok(addr) => config.source.udp_addr = Some(addr),
                Err(e) => log::warn!("Ignoring {UDP_ADDR_ENV}={raw}: {e}"),
            }
        }

        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Fingertip-to-thumb distance (normalized) below which a pinch registers
    pub click_threshold: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            click_threshold: 0.045,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeConfig {
    /// Minimum time between two mode switches
    pub switch_cooldown_ms: u64,
}

impl ModeConfig {
    pub fn switch_cooldown(&self) -> Duration {
        Duration::from_millis(self.switch_cooldown_ms)
    }
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self {
            switch_cooldown_ms: 1500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MouseConfig {
    /// Divisor of the per-frame step toward the target; 1.0 disables smoothing
    pub smoothing: f64,
    /// Sub-range of the camera frame mapped onto the full screen
    pub input_min: f64,
    pub input_max: f64,
    /// Minimum vertical pinch travel (normalized) per frame before scrolling
    pub scroll_threshold: f64,
    /// Wheel units per unit of normalized travel
    pub scroll_scaling: f64,
    /// Minimum time between two clicks of the same kind
    pub click_cooldown_ms: u64,
}

impl MouseConfig {
    pub fn click_cooldown(&self) -> Duration {
        Duration::from_millis(self.click_cooldown_ms)
    }
}

impl Default for MouseConfig {
    fn default() -> Self {
        Self {
            smoothing: 7.0,
            input_min: 0.1,
            input_max: 0.9,
            scroll_threshold: 0.03,
            scroll_scaling: 200.0,
            click_cooldown_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    /// Hover time on one key before it is typed
    pub dwell_ms: u64,
    pub key_width: i32,
    pub key_height: i32,
    pub key_margin: i32,
    /// Top-left pixel of the first key
    pub origin_x: i32,
    pub origin_y: i32,
}

impl KeyboardConfig {
    pub fn dwell_time(&self) -> Duration {
        Duration::from_millis(self.dwell_ms)
    }
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            dwell_ms: 1000,
            key_width: 50,
            key_height: 50,
            key_margin: 8,
            origin_x: 20,
            origin_y: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Bind address of the UDP landmark feed; simulated hand when unset
    pub udp_addr: Option<SocketAddr>,
    /// Frame size assumed when a landmark message does not carry one
    pub frame_width: u32,
    pub frame_height: u32,
    /// Hands scored below this are treated as not detected
    pub min_detection_confidence: f64,
    /// Flip x so the view behaves like a mirror
    pub mirror_x: bool,
    /// Frame rate of the simulated source
    pub target_fps: u32,
    /// Receive timeout after which a frame read counts as failed
    pub recv_timeout_ms: u64,
}

impl SourceConfig {
    pub fn frame_size(&self) -> FrameSize {
        FrameSize {
            width: self.frame_width,
            height: self.frame_height,
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        let frame = FrameSize::default();
        Self {
            udp_addr: None,
            frame_width: frame.width,
            frame_height: frame.height,
            min_detection_confidence: 0.7,
            mirror_x: false,
            target_fps: 60,
            recv_timeout_ms: 100,
        }
    }
}
