use super::LandmarkSource;
use crate::config::SourceConfig;
use crate::error::HandsError;
use crate::types::{FrameSize, HandSnapshot, LandmarkFrame, LandmarkPoint, LANDMARK_COUNT};
use async_trait::async_trait;
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;

#[derive(Debug, Clone, Deserialize)]
struct JsonHand {
    #[serde(default)]
    score: Option<f64>,
    landmarks: Vec<LandmarkPoint>,
}

#[derive(Debug, Clone, Deserialize)]
struct JsonFrame {
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
    #[serde(default)]
    hands: Vec<JsonHand>,
}

/// Parse one detector datagram.
///
/// `{"width":900,"height":500,"hands":[{"score":0.9,"landmarks":[{"x":..,"y":..,"z":..}, ...]}]}`
///
/// Returns `None` for malformed messages. A well-formed message with no
/// usable hand yields a frame without a hand.
pub fn parse_landmark_message(msg: &str, config: &SourceConfig) -> Option<LandmarkFrame> {
    let msg = msg.trim();
    if msg.is_empty() {
        return None;
    }

    let frame: JsonFrame = match serde_json::from_str(msg) {
        Ok(f) => f,
        Err(e) => {
            log::warn!("Malformed landmark message: {e}");
            return None;
        }
    };

    let default_size = config.frame_size();
    let size = FrameSize {
        width: frame.width.unwrap_or(default_size.width),
        height: frame.height.unwrap_or(default_size.height),
    };

    // Single-hand tracking: only the first reported hand counts.
    let hand = frame.hands.into_iter().next().and_then(|hand| {
        if hand.score.unwrap_or(1.0) < config.min_detection_confidence {
            return None;
        }
        if hand.landmarks.len() != LANDMARK_COUNT {
            log::warn!("Expected {} landmarks, got {}", LANDMARK_COUNT, hand.landmarks.len());
            return None;
        }

        let mut points = hand.landmarks;
        if config.mirror_x {
            for p in &mut points {
                p.x = 1.0 - p.x;
            }
        }
        HandSnapshot::from_slice(&points)
    });

    Some(LandmarkFrame { hand, size })
}

/// Receives landmark frames from an external detector over UDP
pub struct UdpLandmarkSource {
    sock: UdpSocket,
    config: SourceConfig,
    recv_timeout: Duration,
    buf: Vec<u8>,
}

impl UdpLandmarkSource {
    pub async fn bind(addr: SocketAddr, config: &SourceConfig) -> Result<Self, HandsError> {
        let sock = UdpSocket::bind(addr)
            .await
            .map_err(|source| HandsError::SourceUnavailable { addr, source })?;
        log::info!("UDP landmark listener bound on {}", sock.local_addr().unwrap_or(addr));

        Ok(Self {
            sock,
            config: config.clone(),
            recv_timeout: Duration::from_millis(config.recv_timeout_ms),
            buf: vec![0u8; 16 * 1024],
        })
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.sock.local_addr().ok()
    }
}

#[async_trait]
impl LandmarkSource for UdpLandmarkSource {
    async fn next_frame(&mut self) -> Option<LandmarkFrame> {
        let len = match tokio::time::timeout(self.recv_timeout, self.sock.recv_from(&mut self.buf)).await {
            Ok(Ok((len, _src))) => len,
            Ok(Err(e)) => {
                log::warn!("UDP landmark recv error: {e}");
                return None;
            }
            Err(_) => return None,
        };

        let msg = std::str::from_utf8(&self.buf[..len]).ok()?;
        parse_landmark_message(msg, &self.config)
    }
}
