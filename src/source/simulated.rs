use super::LandmarkSource;
use crate::config::SourceConfig;
use crate::types::{FrameSize, HandLandmark, HandSnapshot, LandmarkFrame, LandmarkPoint, LANDMARK_COUNT};
use async_trait::async_trait;
use std::time::{Duration, Instant};

/// Synthetic open hand whose index tip traces a slow figure-eight.
///
/// Never pinches or makes a fist, so it stays in NEUTRAL mode; useful to
/// exercise the frame loop without a detector.
pub struct SimulatedSource {
    started: Instant,
    frame_interval: Duration,
    size: FrameSize,
}

impl SimulatedSource {
    pub fn new(config: &SourceConfig) -> Self {
        let fps = config.target_fps.max(1);
        Self {
            started: Instant::now(),
            frame_interval: Duration::from_secs(1) / fps,
            size: config.frame_size(),
        }
    }

    /// Hand pose `t` seconds into the simulation
    pub fn hand_at(t: f64) -> HandSnapshot {
        let tip_x = 0.5 + 0.25 * (t * 0.5).sin();
        let tip_y = 0.45 + 0.15 * (t * 1.0).sin();
        let at = |dx: f64, dy: f64| LandmarkPoint::new(tip_x + dx, tip_y + dy);

        let mut hand = HandSnapshot::new([at(0.0, 0.25); LANDMARK_COUNT]);
        hand.set(HandLandmark::Wrist, at(0.05, 0.4));
        hand.set(HandLandmark::ThumbTip, at(-0.15, 0.1));
        hand.set(HandLandmark::IndexFingerPip, at(0.0, 0.15));
        hand.set(HandLandmark::IndexFingerTip, at(0.0, 0.0));
        hand.set(HandLandmark::MiddleFingerTip, at(0.05, -0.02));
        hand.set(HandLandmark::RingFingerTip, at(0.1, 0.02));
        hand
    }
}

#[async_trait]
impl LandmarkSource for SimulatedSource {
    async fn next_frame(&mut self) -> Option<LandmarkFrame> {
        tokio::time::sleep(self.frame_interval).await;
        let t = self.started.elapsed().as_secs_f64();
        Some(LandmarkFrame {
            hand: Some(Self::hand_at(t)),
            size: self.size,
        })
    }
}
