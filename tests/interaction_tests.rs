// Host-side tests for the draw/aim/release state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod gesture {
    include!("../src/core/gesture.rs");
}
mod interaction {
    include!("../src/core/interaction.rs");
}

use constants::*;
use gesture::GestureSample;
use glam::Vec2;
use interaction::*;

fn approx_eq(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-3
}

fn grab(x: f32, y: f32) -> GestureSample {
    GestureSample {
        cursor: Vec2::new(x, y),
        is_pinching: true,
        is_detected: true,
    }
}

fn open_hand(x: f32, y: f32) -> GestureSample {
    GestureSample {
        cursor: Vec2::new(x, y),
        is_pinching: false,
        is_detected: true,
    }
}

fn lost() -> GestureSample {
    GestureSample::default()
}

#[test]
fn second_start_does_not_move_origin() {
    let mut m = InteractionMachine::new();
    assert!(m.start_draw(Vec2::new(10.0, 20.0)));
    assert!(!m.start_draw(Vec2::new(300.0, 400.0)));
    assert_eq!(m.session().map(|s| s.origin), Some(Vec2::new(10.0, 20.0)));
}

#[test]
fn update_and_end_are_noops_while_idle() {
    let mut m = InteractionMachine::new();
    assert!(!m.update_draw(Vec2::new(5.0, 5.0)));
    assert_eq!(m.end_draw(), None);
    assert_eq!(*m.state(), DrawState::Idle);
    assert!(m.view().is_none());
}

#[test]
fn update_with_same_point_is_idempotent() {
    let mut m = InteractionMachine::new();
    m.start_draw(Vec2::new(100.0, 100.0));
    m.update_draw(Vec2::new(40.0, 180.0));
    let first = *m.session().unwrap();
    for _ in 0..50 {
        m.update_draw(Vec2::new(40.0, 180.0));
    }
    assert_eq!(*m.session().unwrap(), first);
    assert_eq!(first.pull_distance, 100.0);
    assert_eq!(first.last_pull_distance, 100.0);
}

#[test]
fn end_draw_reports_origin_and_last_pull() {
    let mut m = InteractionMachine::new();
    m.start_draw(Vec2::new(0.0, 0.0));
    m.update_draw(Vec2::new(30.0, 40.0));
    let release = m.end_draw().expect("session was open");
    assert_eq!(release.origin, Vec2::ZERO);
    assert_eq!(release.pull_distance, 50.0);
    assert!(!m.is_drawing());
    assert_eq!(m.end_draw(), None);
}

#[test]
fn line_end_collapses_inside_dead_zone() {
    let origin = Vec2::new(100.0, 100.0);
    assert_eq!(pull_line_end(origin, origin), origin);
    assert_eq!(pull_line_end(origin, Vec2::new(129.0, 100.0)), origin);
    assert_eq!(pull_line_end(origin, Vec2::new(100.0, 100.0 - 29.9)), origin);
}

#[test]
fn line_end_is_shortened_by_dead_zone() {
    let origin = Vec2::new(100.0, 100.0);
    assert!(approx_eq(
        pull_line_end(origin, Vec2::new(230.0, 100.0)),
        Vec2::new(200.0, 100.0)
    ));
    // 78-104-130 triangle: end sits 100px along the same direction
    assert!(approx_eq(
        pull_line_end(Vec2::ZERO, Vec2::new(78.0, 104.0)),
        Vec2::new(60.0, 80.0)
    ));
    assert!(approx_eq(
        pull_line_end(origin, Vec2::new(100.0 + PULL_DEAD_ZONE_PX, 100.0)),
        origin
    ));
}

#[test]
fn projectile_scale_is_sqrt_eased_and_clamped() {
    assert_eq!(projectile_scale(0.0), 1.0);
    assert_eq!(projectile_scale(50.0), 1.0);
    assert!((projectile_scale(400.0) - 2.0).abs() < 1e-6);
    assert!((projectile_scale(900.0) - 3.0).abs() < 1e-6);
    assert_eq!(projectile_scale(1.0e9), PROJECTILE_SCALE_MAX);
}

#[test]
fn aim_points_back_through_origin() {
    let o = Vec2::ZERO;
    assert_eq!(aim_angle_deg(o, o), 0.0);
    assert!((aim_angle_deg(o, Vec2::new(-10.0, 0.0)) - 0.0).abs() < 1e-4);
    assert!((aim_angle_deg(o, Vec2::new(0.0, 10.0)) + 90.0).abs() < 1e-4);
    assert!((aim_angle_deg(o, Vec2::new(10.0, 0.0)).abs() - 180.0).abs() < 1e-4);
}

#[test]
fn grabbing_sample_starts_then_updates_draw() {
    let mut m = InteractionMachine::new();
    assert_eq!(m.on_gesture_sample(&grab(50.0, 60.0), 0.0), None);
    assert_eq!(m.session().unwrap().origin, Vec2::new(50.0, 60.0));

    m.on_gesture_sample(&grab(50.0, 160.0), 16.0);
    let s = m.session().unwrap();
    assert_eq!(s.origin, Vec2::new(50.0, 60.0));
    assert_eq!(s.pull_distance, 100.0);
}

#[test]
fn non_grabbing_samples_while_idle_do_nothing() {
    let mut m = InteractionMachine::new();
    assert_eq!(m.on_gesture_sample(&open_hand(1.0, 1.0), 0.0), None);
    assert_eq!(m.on_gesture_sample(&lost(), 16.0), None);
    assert!(!m.is_drawing());
}

#[test]
fn release_waits_for_debounce_deadline() {
    let mut m = InteractionMachine::new();
    m.on_gesture_sample(&grab(0.0, 0.0), 0.0);
    m.on_gesture_sample(&grab(0.0, 200.0), 16.0);

    assert_eq!(m.on_gesture_sample(&open_hand(0.0, 200.0), 100.0), None);
    assert!(matches!(
        m.state(),
        DrawState::PendingRelease { deadline_ms, .. } if *deadline_ms == 100.0 + RELEASE_DEBOUNCE_MS
    ));
    assert!(m.view().unwrap().pending_release);

    assert_eq!(m.on_gesture_sample(&lost(), 179.9), None);
    let release = m
        .on_gesture_sample(&lost(), 100.0 + RELEASE_DEBOUNCE_MS)
        .expect("deadline reached");
    assert_eq!(release.origin, Vec2::ZERO);
    assert_eq!(release.pull_distance, 200.0);
    assert_eq!(*m.state(), DrawState::Idle);
}

#[test]
fn regrab_within_debounce_cancels_release() {
    let mut m = InteractionMachine::new();
    m.on_gesture_sample(&grab(0.0, 0.0), 0.0);
    m.on_gesture_sample(&grab(0.0, 120.0), 16.0);

    // one flickering frame
    assert_eq!(m.on_gesture_sample(&open_hand(0.0, 120.0), 32.0), None);
    assert_eq!(m.on_gesture_sample(&grab(0.0, 130.0), 48.0), None);
    assert!(matches!(m.state(), DrawState::Drawing(_)));
    assert_eq!(m.session().unwrap().pull_distance, 130.0);

    // the old deadline is gone: time passing while grabbing never releases
    for t in [120.0, 200.0, 400.0] {
        assert_eq!(m.on_gesture_sample(&grab(0.0, 130.0), t), None);
    }
    assert!(m.is_drawing());
}

#[test]
fn late_regrab_after_deadline_still_releases() {
    let mut m = InteractionMachine::new();
    m.on_gesture_sample(&grab(0.0, 0.0), 0.0);
    m.on_gesture_sample(&grab(0.0, 150.0), 16.0);
    assert_eq!(m.on_gesture_sample(&lost(), 32.0), None);

    // a long frame gap: the next sample is already past 32 + 80
    let release = m
        .on_gesture_sample(&grab(0.0, 40.0), 250.0)
        .expect("deadline passed before the pinch came back");
    assert_eq!(release.origin, Vec2::ZERO);
    assert_eq!(release.pull_distance, 150.0);
    assert_eq!(*m.state(), DrawState::Idle);

    // the held pinch opens a fresh session on the following frame
    assert_eq!(m.on_gesture_sample(&grab(0.0, 40.0), 266.0), None);
    assert_eq!(m.session().unwrap().origin, Vec2::new(0.0, 40.0));
    assert_eq!(m.session().unwrap().pull_distance, 0.0);
}

#[test]
fn new_release_condition_rearms_deadline() {
    let mut m = InteractionMachine::new();
    m.on_gesture_sample(&grab(0.0, 0.0), 0.0);
    m.on_gesture_sample(&lost(), 10.0);
    m.on_gesture_sample(&grab(0.0, 50.0), 20.0);
    m.on_gesture_sample(&lost(), 60.0);
    // 10 + 80 has passed, but the deadline now counts from 60
    assert_eq!(m.on_gesture_sample(&lost(), 100.0), None);
    assert!(m.on_gesture_sample(&lost(), 140.0).is_some());
}

#[test]
fn cancel_drops_pending_release_without_firing() {
    let mut m = InteractionMachine::new();
    m.on_gesture_sample(&grab(0.0, 0.0), 0.0);
    m.on_gesture_sample(&lost(), 10.0);
    m.cancel();
    assert_eq!(*m.state(), DrawState::Idle);
    assert_eq!(m.on_gesture_sample(&lost(), 1000.0), None);
}

#[test]
fn view_reports_render_values() {
    let mut m = InteractionMachine::new();
    m.start_draw(Vec2::new(100.0, 100.0));
    m.update_draw(Vec2::new(100.0, 500.0));
    let v = m.view().unwrap();
    assert_eq!(v.origin, Vec2::new(100.0, 100.0));
    assert_eq!(v.current, Vec2::new(100.0, 500.0));
    assert!(approx_eq(v.line_end, Vec2::new(100.0, 470.0)));
    assert!((v.projectile_scale - 2.0).abs() < 1e-6);
    assert!((v.angle_deg + 90.0).abs() < 1e-4);
    assert!(!v.pending_release);
}
