//! Landmark sources - where per-frame hand landmarks come from
//!
//! Landmark detection itself runs outside this crate. A source yields one
//! [`LandmarkFrame`] per camera frame, or `None` when a frame could not be
//! read; the frame loop skips those and asks again.

use crate::types::LandmarkFrame;
use async_trait::async_trait;

mod simulated;
mod udp;

pub use simulated::SimulatedSource;
pub use udp::{parse_landmark_message, UdpLandmarkSource};

#[async_trait]
pub trait LandmarkSource: Send {
    async fn next_frame(&mut self) -> Option<LandmarkFrame>;
}

#[async_trait]
impl<T: LandmarkSource + ?Sized> LandmarkSource for Box<T> {
    async fn next_frame(&mut self) -> Option<LandmarkFrame> {
        (**self).next_frame().await
    }
}
