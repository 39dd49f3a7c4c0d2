// Host-side tests for the gesture interpreter.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod gesture {
    include!("../src/core/gesture.rs");
}

use constants::*;
use gesture::*;
use glam::{Vec2, Vec3};

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

/// 21 landmarks with the thumb tip at the image origin and the index tip
/// `gap` to its right, so the pinch distance is exactly `gap`.
fn hand_with_gap(gap: f32) -> Vec<Vec3> {
    let mut pts = vec![Vec3::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
    pts[THUMB_TIP] = Vec3::ZERO;
    pts[INDEX_TIP] = Vec3::new(gap, 0.0, 0.0);
    pts
}

fn detection(points: Vec<Vec3>) -> HandDetection {
    HandDetection {
        hands: vec![LandmarkSet::new(points)],
    }
}

#[test]
fn pinch_starts_strictly_below_start_threshold() {
    assert!(classify_pinch(&hand_with_gap(0.13), false));
    assert!(!classify_pinch(&hand_with_gap(PINCH_START_THRESHOLD), false));
    assert!(!classify_pinch(&hand_with_gap(0.16), false));
}

#[test]
fn pinch_holds_inside_hysteresis_band() {
    for gap in [0.14, 0.15, 0.16, 0.17, 0.179] {
        assert!(classify_pinch(&hand_with_gap(gap), true), "gap {gap}");
        assert!(!classify_pinch(&hand_with_gap(gap), false), "gap {gap}");
    }
}

#[test]
fn pinch_releases_at_release_threshold() {
    assert!(!classify_pinch(&hand_with_gap(PINCH_RELEASE_THRESHOLD), true));
    assert!(!classify_pinch(&hand_with_gap(0.25), true));
}

#[test]
fn pinch_is_false_without_landmarks() {
    assert!(!classify_pinch(&[], true));
    assert!(!classify_pinch(&[], false));
    // too short to hold the index tip
    let partial = vec![Vec3::ZERO; INDEX_TIP];
    assert!(!classify_pinch(&partial, true));
}

#[test]
fn pinch_distance_ignores_depth() {
    let mut pts = hand_with_gap(0.1);
    pts[THUMB_TIP].z = 0.5;
    pts[INDEX_TIP].z = -0.5;
    assert!(classify_pinch(&pts, false));
}

#[test]
fn slow_sweep_toggles_once_each_way() {
    let mut pinching = false;
    let mut toggles = 0;
    let gaps: Vec<f32> = (0..=100)
        .map(|i| 0.10 + i as f32 * 0.001)
        .chain((0..=100).rev().map(|i| 0.10 + i as f32 * 0.001))
        .collect();
    for gap in gaps {
        let next = classify_pinch(&hand_with_gap(gap), pinching);
        if next != pinching {
            toggles += 1;
        }
        pinching = next;
    }
    // starts open at 0.10 -> pinches immediately, releases near 0.18,
    // re-pinches below 0.14 on the way back
    assert_eq!(toggles, 3);
    assert!(pinching);
}

#[test]
fn cursor_mirrors_x_and_scales_to_viewport() {
    let mut pts = hand_with_gap(0.3);
    pts[INDEX_TIP] = Vec3::new(0.25, 0.75, 0.0);
    assert_eq!(cursor_from_landmarks(&pts, VIEWPORT), Vec2::new(600.0, 450.0));
}

#[test]
fn cursor_is_zero_without_landmarks() {
    assert_eq!(cursor_from_landmarks(&[], VIEWPORT), Vec2::ZERO);
}

#[test]
fn fresh_state_reports_no_hand() {
    let mut st = PinchState::default();
    let s = st.sample_frame(None, VIEWPORT, 0.0);
    assert!(!s.is_detected);
    assert!(!s.is_pinching);
}

#[test]
fn detection_updates_state() {
    let mut st = PinchState::default();
    let det = detection(hand_with_gap(0.05));
    let s = st.sample_frame(Some(&det), VIEWPORT, 1000.0);
    assert!(s.is_detected);
    assert!(s.is_pinching);
    assert!(s.is_grabbing());
    assert!(st.was_pinching);
    assert_eq!(st.last_detected_at_ms, 1000.0);
    assert_eq!(st.last_cursor, s.cursor);
}

#[test]
fn short_dropout_replays_last_sample() {
    let mut st = PinchState::default();
    let det = detection(hand_with_gap(0.05));
    let first = st.sample_frame(Some(&det), VIEWPORT, 1000.0);

    for now in [1016.0, 1100.0, 1000.0 + DETECTION_GRACE_MS - 0.1] {
        let s = st.sample_frame(None, VIEWPORT, now);
        assert!(s.is_detected, "t={now}");
        assert!(s.is_pinching, "t={now}");
        assert_eq!(s.cursor, first.cursor);
    }
    // grace window does not refresh the timestamp
    assert_eq!(st.last_detected_at_ms, 1000.0);
}

#[test]
fn long_dropout_forces_release() {
    let mut st = PinchState::default();
    let det = detection(hand_with_gap(0.05));
    st.sample_frame(Some(&det), VIEWPORT, 1000.0);

    let s = st.sample_frame(None, VIEWPORT, 1000.0 + DETECTION_GRACE_MS);
    assert!(!s.is_detected);
    assert!(!s.is_pinching);
    assert!(!st.was_pinching);

    // back in the band after the forced release: not a pinch any more
    let det = detection(hand_with_gap(0.16));
    let s = st.sample_frame(Some(&det), VIEWPORT, 1500.0);
    assert!(s.is_detected);
    assert!(!s.is_pinching);
}

#[test]
fn empty_detection_counts_as_absent() {
    let mut st = PinchState::default();
    let none = HandDetection::default();
    assert!(!st.sample_frame(Some(&none), VIEWPORT, 0.0).is_detected);

    let empty_hand = detection(Vec::new());
    assert!(empty_hand.primary().is_none());
    assert!(!st.sample_frame(Some(&empty_hand), VIEWPORT, 10.0).is_detected);
}

#[test]
fn primary_skips_empty_hands() {
    let det = HandDetection {
        hands: vec![LandmarkSet::default(), LandmarkSet::new(hand_with_gap(0.1))],
    };
    let hand = det.primary().expect("second hand has landmarks");
    assert_eq!(hand.index_tip(), Some(Vec3::new(0.1, 0.0, 0.0)));
    assert_eq!(hand.thumb_tip(), Some(Vec3::ZERO));
}

#[test]
fn frame_gate_passes_each_video_frame_once() {
    let mut gate = VideoFrameGate::default();
    assert!(gate.is_new_frame(0.0));
    assert!(!gate.is_new_frame(0.0));
    assert!(gate.is_new_frame(0.033));
    assert!(!gate.is_new_frame(0.033));
    assert!(!gate.is_new_frame(0.033));
    assert!(gate.is_new_frame(0.066));
}

#[test]
fn stalled_video_lets_grace_window_expire() {
    let mut gate = VideoFrameGate::default();
    let mut st = PinchState::default();
    let det = detection(hand_with_gap(0.05));

    // the camera delivers one frame and then freezes on it
    let mut now = 1000.0;
    let mut last = GestureSample::default();
    while now < 1000.0 + DETECTION_GRACE_MS + 50.0 {
        let frame = gate.is_new_frame(12.5).then_some(&det);
        last = st.sample_frame(frame, VIEWPORT, now);
        now += 16.0;
    }
    assert_eq!(st.last_detected_at_ms, 1000.0);
    assert!(!last.is_detected);
    assert!(!last.is_pinching);
}
