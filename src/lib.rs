//! # RayOS Hands - gesture mouse and keyboard
//!
//! Turns a stream of hand landmarks into debounced mouse and keyboard input.
//! A fist cycles NEUTRAL -> MOUSE -> KEYBOARD; in mouse mode the index tip
//! drives a smoothed cursor and pinches click and scroll, in keyboard mode
//! dwelling on a virtual key types it.

pub mod config;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod input;
pub mod keyboard;
pub mod mode;
pub mod mouse;
pub mod overlay;
pub mod source;
pub mod types;

pub use config::HandsConfig;
pub use error::HandsError;
pub use input::InputSink;
pub use overlay::OverlayRenderer;
pub use source::LandmarkSource;
pub use types::*;

use gesture::GestureClassifier;
use keyboard::KeyboardController;
use mode::ModeStateMachine;
use mouse::MouseController;
use overlay::OverlayView;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Owns all per-session state and drives one frame at a time
pub struct HandController<S, O> {
    classifier: GestureClassifier,
    modes: ModeStateMachine,
    mouse: MouseController,
    keyboard: KeyboardController,
    sink: S,
    overlay: O,
}

impl<S: InputSink, O: OverlayRenderer> HandController<S, O> {
    pub fn new(config: &HandsConfig, sink: S, overlay: O) -> Self {
        let screen = config
            .screen
            .or_else(|| sink.screen_size())
            .unwrap_or_default();
        log::info!("Mapping cursor onto {}x{} screen", screen.width, screen.height);

        Self {
            classifier: GestureClassifier::new(&config.gesture),
            modes: ModeStateMachine::new(&config.mode),
            mouse: MouseController::new(&config.mouse, screen),
            keyboard: KeyboardController::new(&config.keyboard),
            sink,
            overlay,
        }
    }

    pub fn mode(&self) -> ControlMode {
        self.modes.mode()
    }

    pub fn mouse(&self) -> &MouseController {
        &self.mouse
    }

    pub fn keyboard(&self) -> &KeyboardController {
        &self.keyboard
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Interpret one frame, inject the resulting actions and redraw.
    ///
    /// Returns the actions that were sent to the sink.
    pub fn process_frame(&mut self, frame: &LandmarkFrame, now: Instant) -> Vec<InputAction> {
        let actions = match frame.hand.as_ref() {
            Some(hand) => self.interpret(hand, frame.size, now),
            None => {
                self.mouse.reset_scroll();
                self.keyboard.clear_hover();
                Vec::new()
            }
        };

        for action in &actions {
            if let Err(e) = self.sink.dispatch(action) {
                log::warn!("Failed to inject {:?}: {}", action, e);
            }
        }

        self.overlay.render(&OverlayView {
            mode: self.modes.mode(),
            keys: self.keyboard.keys(),
            hovered: self.keyboard.hovered_char(),
        });

        actions
    }

    fn interpret(&mut self, hand: &HandSnapshot, size: FrameSize, now: Instant) -> Vec<InputAction> {
        let gestures = self.classifier.classify(Some(hand));

        let before = self.modes.mode();
        if self.modes.update(gestures.fist, now).is_some() {
            match before {
                ControlMode::Mouse => self.mouse.reset_scroll(),
                ControlMode::Keyboard => self.keyboard.clear_hover(),
                ControlMode::Neutral => {}
            }
        }

        match self.modes.mode() {
            ControlMode::Neutral => Vec::new(),
            ControlMode::Mouse => self.mouse.update(hand, &gestures, now),
            ControlMode::Keyboard => self
                .keyboard
                .update(hand.get(HandLandmark::IndexFingerTip), size, now)
                .map(InputAction::PressKey)
                .into_iter()
                .collect(),
        }
    }

    /// Run the frame loop until `shutdown` is set.
    ///
    /// Failed frame reads are skipped and retried on the next iteration.
    pub async fn run<L>(&mut self, source: &mut L, shutdown: &AtomicBool) -> anyhow::Result<()>
    where
        L: LandmarkSource + ?Sized,
    {
        log::info!("Starting hand control loop...");

        while !shutdown.load(Ordering::SeqCst) {
            let Some(frame) = source.next_frame().await else {
                continue;
            };
            self.process_frame(&frame, Instant::now());
        }

        log::info!("Hand control loop stopped in {} mode", self.modes.mode());
        Ok(())
    }
}
