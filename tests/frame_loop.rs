//! End-to-end behaviour of the hand controller over sequences of frames

use async_trait::async_trait;
use rayos_hands::input::RecordingSink;
use rayos_hands::config::KeyboardConfig;
use rayos_hands::keyboard::{build_layout, BACKSPACE_GLYPH};
use rayos_hands::overlay::LogOverlay;
use rayos_hands::{
    ControlMode, FrameSize, HandController, HandLandmark, HandSnapshot, HandsConfig, InputAction, KeyPress,
    LandmarkFrame, LandmarkPoint, LandmarkSource, MouseButton, ScreenSize, LANDMARK_COUNT,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

type Controller = HandController<RecordingSink, LogOverlay>;

fn controller() -> Controller {
    HandController::new(
        &HandsConfig::default(),
        RecordingSink::with_screen(ScreenSize::default()),
        LogOverlay::default(),
    )
}

/// Open hand with the index tip at `(x, y)`
fn pointing(x: f64, y: f64) -> HandSnapshot {
    let at = |dx: f64, dy: f64| LandmarkPoint::new(x + dx, y + dy);
    let mut hand = HandSnapshot::new([at(0.0, 0.25); LANDMARK_COUNT]);
    hand.set(HandLandmark::Wrist, at(0.05, 0.4));
    hand.set(HandLandmark::IndexFingerPip, at(0.0, 0.15));
    hand.set(HandLandmark::IndexFingerTip, at(0.0, 0.0));
    hand.set(HandLandmark::ThumbTip, at(-0.15, 0.1));
    hand.set(HandLandmark::MiddleFingerTip, at(0.05, -0.02));
    hand.set(HandLandmark::RingFingerTip, at(0.1, 0.02));
    hand
}

fn fist() -> HandSnapshot {
    let mut hand = pointing(0.5, 0.4);
    hand.set(HandLandmark::IndexFingerTip, LandmarkPoint::new(0.53, 0.72));
    hand
}

/// Fist with the curled index tip resting at `(x, y)`
fn fist_at(x: f64, y: f64) -> HandSnapshot {
    let mut hand = pointing(x, y);
    hand.set(HandLandmark::Wrist, LandmarkPoint::new(x, y + 0.05));
    hand
}

/// Index tip pinched to the thumb at height `y`
fn index_pinch(y: f64) -> HandSnapshot {
    let mut hand = pointing(0.5, y);
    hand.set(HandLandmark::ThumbTip, LandmarkPoint::new(0.49, y));
    hand
}

fn frame(hand: HandSnapshot) -> LandmarkFrame {
    LandmarkFrame {
        hand: Some(hand),
        size: FrameSize::default(),
    }
}

/// Normalized point at the centre of the first key showing `ch`
fn key_center(ch: char) -> (f64, f64) {
    let size = FrameSize::default();
    let key = build_layout(&KeyboardConfig::default())
        .into_iter()
        .find(|k| k.character == ch)
        .unwrap();
    (
        ((key.rect.x1 + key.rect.x2) as f64 / 2.0 + 0.5) / size.width as f64,
        ((key.rect.y1 + key.rect.y2) as f64 / 2.0 + 0.5) / size.height as f64,
    )
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Enter `target` mode with fists spaced past the cooldown; returns the
/// time of the last switch.
fn enter_mode(c: &mut Controller, target: ControlMode, t0: Instant) -> Instant {
    let mut t = t0;
    while c.mode() != target {
        c.process_frame(&frame(fist()), t);
        t += ms(1600);
    }
    c.sink_mut().take();
    t - ms(1600)
}

#[test]
fn fists_cycle_modes_with_cooldown() {
    let mut c = controller();
    let t0 = Instant::now();

    c.process_frame(&frame(fist()), t0);
    assert_eq!(c.mode(), ControlMode::Mouse);

    // still holding the fist
    c.process_frame(&frame(fist()), t0 + ms(700));
    c.process_frame(&frame(fist()), t0 + ms(1400));
    assert_eq!(c.mode(), ControlMode::Mouse);

    c.process_frame(&frame(fist()), t0 + ms(1600));
    assert_eq!(c.mode(), ControlMode::Keyboard);
    c.process_frame(&frame(fist()), t0 + ms(3200));
    assert_eq!(c.mode(), ControlMode::Neutral);
}

#[test]
fn mouse_mode_moves_cursor_smoothly() {
    let mut c = controller();
    let t = enter_mode(&mut c, ControlMode::Mouse, Instant::now());

    let actions = c.process_frame(&frame(pointing(0.5, 0.5)), t + ms(33));
    let InputAction::MoveCursor { x, y } = actions[0] else {
        panic!("expected a cursor move, got {:?}", actions);
    };
    // smoothing is carried over from the switching frame
    let (px, py) = c.mouse().position();
    assert_eq!((x, y), (px, py));
    assert!(x > 0.0 && x < 960.0);
    assert!(y > 0.0 && y < 540.0);
}

#[test]
fn pinch_scroll_scenario() {
    let mut c = controller();
    let t = enter_mode(&mut c, ControlMode::Mouse, Instant::now());

    let mut scrolls = Vec::new();
    for (i, y) in [0.5, 0.3, 0.3].into_iter().enumerate() {
        let actions = c.process_frame(&frame(index_pinch(y)), t + ms(100 + i as u64 * 33));
        scrolls.push(
            actions
                .iter()
                .filter_map(|a| match a {
                    InputAction::Scroll(n) => Some(*n),
                    _ => None,
                })
                .collect::<Vec<_>>(),
        );
    }
    assert_eq!(scrolls, vec![vec![], vec![40], vec![]]);

    // the index pinch also clicked once; the rest fell inside the cooldown
    let clicks = c
        .sink()
        .actions
        .iter()
        .filter(|a| **a == InputAction::Click(MouseButton::Left))
        .count();
    assert_eq!(clicks, 1);
}

#[test]
fn dwell_typing_scenarios() {
    let mut c = controller();
    let t = enter_mode(&mut c, ControlMode::Keyboard, Instant::now());

    // 'A' for half a second, then over to 'B'
    let (ax, ay) = key_center('A');
    let (bx, by) = key_center('B');
    for step in 0..=5 {
        assert!(c
            .process_frame(&frame(pointing(ax, ay)), t + ms(100 + step * 100))
            .is_empty());
    }
    assert!(c.process_frame(&frame(pointing(bx, by)), t + ms(700)).is_empty());
    assert_eq!(c.keyboard().hovered_char(), Some('B'));

    let typed = c.process_frame(&frame(pointing(bx, by)), t + ms(1750));
    assert_eq!(typed, vec![InputAction::PressKey(KeyPress::Char('b'))]);

    // backspace glyph types a backspace
    let (kx, ky) = key_center(BACKSPACE_GLYPH);
    c.process_frame(&frame(pointing(kx, ky)), t + ms(2000));
    let typed = c.process_frame(&frame(pointing(kx, ky)), t + ms(3100));
    assert_eq!(typed, vec![InputAction::PressKey(KeyPress::Backspace)]);
}

#[test]
fn hand_loss_resets_hover() {
    let mut c = controller();
    let t = enter_mode(&mut c, ControlMode::Keyboard, Instant::now());
    let (qx, qy) = key_center('Q');

    c.process_frame(&frame(pointing(qx, qy)), t + ms(100));
    assert_eq!(c.keyboard().hovered_char(), Some('Q'));

    c.process_frame(
        &LandmarkFrame {
            hand: None,
            size: FrameSize::default(),
        },
        t + ms(600),
    );
    assert_eq!(c.keyboard().hovered_char(), None);

    // hand comes back on 'Q': the dwell starts over
    c.process_frame(&frame(pointing(qx, qy)), t + ms(1200));
    assert!(c.process_frame(&frame(pointing(qx, qy)), t + ms(2100)).is_empty());
    assert_eq!(
        c.process_frame(&frame(pointing(qx, qy)), t + ms(2300)),
        vec![InputAction::PressKey(KeyPress::Char('q'))]
    );
}

#[test]
fn reentering_keyboard_restarts_dwell() {
    let mut c = controller();
    let t = enter_mode(&mut c, ControlMode::Keyboard, Instant::now());
    let (ax, ay) = key_center('A');

    for step in 1..=6 {
        assert!(c
            .process_frame(&frame(pointing(ax, ay)), t + ms(step * 100))
            .is_empty());
    }
    assert_eq!(c.keyboard().hovered_char(), Some('A'));

    // every switching fist lands on 'A'
    assert!(c.process_frame(&frame(fist_at(ax, ay)), t + ms(1600)).is_empty());
    assert_eq!(c.mode(), ControlMode::Neutral);
    assert_eq!(c.keyboard().hovered_char(), None);

    c.process_frame(&frame(fist_at(ax, ay)), t + ms(3200));
    assert_eq!(c.mode(), ControlMode::Mouse);

    let reentry = t + ms(4800);
    let actions = c.process_frame(&frame(fist_at(ax, ay)), reentry);
    assert_eq!(c.mode(), ControlMode::Keyboard);
    assert!(actions.is_empty());
    assert_eq!(c.keyboard().hovered_char(), Some('A'));

    for elapsed in [300, 700, 1000] {
        assert!(c
            .process_frame(&frame(pointing(ax, ay)), reentry + ms(elapsed))
            .is_empty());
    }
    assert_eq!(
        c.process_frame(&frame(pointing(ax, ay)), reentry + ms(1050)),
        vec![InputAction::PressKey(KeyPress::Char('a'))]
    );
    let typed = c
        .sink()
        .actions
        .iter()
        .filter(|a| matches!(a, InputAction::PressKey(_)))
        .count();
    assert_eq!(typed, 1);
}

struct ScriptedSource {
    frames: VecDeque<Option<LandmarkFrame>>,
    shutdown: Arc<AtomicBool>,
}

#[async_trait]
impl LandmarkSource for ScriptedSource {
    async fn next_frame(&mut self) -> Option<LandmarkFrame> {
        let next = self.frames.pop_front();
        if self.frames.is_empty() {
            self.shutdown.store(true, Ordering::SeqCst);
        }
        next.flatten()
    }
}

#[tokio::test]
async fn run_skips_failed_reads_and_stops_on_shutdown() {
    let shutdown = Arc::new(AtomicBool::new(false));
    let mut source = ScriptedSource {
        frames: VecDeque::from(vec![
            None,
            Some(frame(fist())),
            None,
            Some(frame(pointing(0.5, 0.5))),
        ]),
        shutdown: Arc::clone(&shutdown),
    };

    let mut c = controller();
    c.run(&mut source, &shutdown).await.unwrap();

    assert_eq!(c.mode(), ControlMode::Mouse);
    let moves = c
        .sink()
        .actions
        .iter()
        .filter(|a| matches!(a, InputAction::MoveCursor { .. }))
        .count();
    assert_eq!(moves, 2);
}
