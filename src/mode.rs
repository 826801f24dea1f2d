//! Control mode state machine
//!
//! A fist advances NEUTRAL -> MOUSE -> KEYBOARD -> NEUTRAL. A held fist would
//! otherwise cycle every frame, so switches are spaced by a cooldown.

use crate::config::ModeConfig;
use crate::types::ControlMode;
use std::time::{Duration, Instant};

pub struct ModeStateMachine {
    mode: ControlMode,
    last_switch: Option<Instant>,
    cooldown: Duration,
}

impl ModeStateMachine {
    pub fn new(config: &ModeConfig) -> Self {
        Self {
            mode: ControlMode::default(),
            last_switch: None,
            cooldown: config.switch_cooldown(),
        }
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    /// Feed one frame's fist state. Returns the new mode if it changed.
    pub fn update(&mut self, fist: bool, now: Instant) -> Option<ControlMode> {
        if !fist {
            return None;
        }

        let cooled_down = match self.last_switch {
            Some(last) => now.saturating_duration_since(last) > self.cooldown,
            None => true,
        };
        if !cooled_down {
            return None;
        }

        self.mode = self.mode.next();
        self.last_switch = Some(now);
        log::info!("Mode switched to: {}", self.mode);
        Some(self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> ModeStateMachine {
        ModeStateMachine::new(&ModeConfig::default())
    }

    #[test]
    fn starts_neutral_and_ignores_open_hand() {
        let mut m = machine();
        assert_eq!(m.mode(), ControlMode::Neutral);
        assert_eq!(m.update(false, Instant::now()), None);
        assert_eq!(m.mode(), ControlMode::Neutral);
    }

    #[test]
    fn spaced_fists_cycle_through_all_modes() {
        let mut m = machine();
        let t0 = Instant::now();
        let step = Duration::from_millis(1600);

        assert_eq!(m.update(true, t0), Some(ControlMode::Mouse));
        assert_eq!(m.update(true, t0 + step), Some(ControlMode::Keyboard));
        assert_eq!(m.update(true, t0 + step * 2), Some(ControlMode::Neutral));
        assert_eq!(m.update(true, t0 + step * 3), Some(ControlMode::Mouse));
    }

    #[test]
    fn held_fist_switches_once_per_cooldown() {
        let mut m = machine();
        let t0 = Instant::now();

        assert_eq!(m.update(true, t0), Some(ControlMode::Mouse));
        for ms in (33..=1500).step_by(33) {
            assert_eq!(m.update(true, t0 + Duration::from_millis(ms)), None);
        }
        // exactly at the cooldown boundary is still too early
        assert_eq!(m.update(true, t0 + Duration::from_millis(1500)), None);
        assert_eq!(m.mode(), ControlMode::Mouse);

        assert_eq!(
            m.update(true, t0 + Duration::from_millis(1501)),
            Some(ControlMode::Keyboard)
        );
    }
}
