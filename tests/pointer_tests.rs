// Host-side tests for the pointer tracker state machine.

use ghost_core::*;
use glam::Vec2;

fn tracker() -> PointerTracker {
    PointerTracker::new(Vec2::ZERO, Vec2::ZERO, GHOST_POINTER_SMOOTHING)
}

#[test]
fn starts_idle() {
    let p = tracker();
    assert_eq!(p.phase(), PointerPhase::Idle);
    assert_eq!(p.quiet_deadline_ms(), None);
}

#[test]
fn input_starts_tracking_until_quiet_interval_passes() {
    let mut p = tracker();
    p.on_input(Vec2::new(10.0, 500.0), 1_000.0, 0.0);
    assert_eq!(p.phase(), PointerPhase::Tracking);
    assert_eq!(p.quiet_deadline_ms(), Some(1_000.0 + MOVING_QUIET_MS));

    p.tick(1_299.0);
    assert!(p.is_moving());
    p.tick(1_300.0);
    assert_eq!(p.phase(), PointerPhase::Idle);
    assert_eq!(p.quiet_deadline_ms(), None);
}

#[test]
fn each_event_restarts_the_quiet_timer() {
    let mut p = tracker();
    p.on_input(Vec2::new(10.0, 500.0), 0.0, 0.0);
    p.on_input(Vec2::new(20.0, 500.0), 200.0, 0.0);
    p.tick(350.0);
    assert!(p.is_moving());
    p.tick(499.0);
    assert!(p.is_moving());
    p.tick(500.0);
    assert!(!p.is_moving());
}

#[test]
fn target_is_lifted_and_floored_by_dot_size() {
    let mut p = tracker();
    p.on_input(Vec2::new(400.0, 300.0), 0.0, 50.0);
    assert_eq!(p.target, Vec2::new(400.0, 270.0));

    // near the top edge the target never goes above one dot
    p.on_input(Vec2::new(400.0, 20.0), 0.0, 50.0);
    assert_eq!(p.target, Vec2::new(400.0, 50.0));
}

#[test]
fn zero_dot_size_keeps_raw_coordinates() {
    let mut p = tracker();
    p.on_input(Vec2::new(123.0, 456.0), 0.0, 0.0);
    assert_eq!(p.target, Vec2::new(123.0, 456.0));
}

#[test]
fn zero_dot_size_keeps_coordinates_above_the_viewport() {
    let mut p = tracker();
    p.on_input(Vec2::new(40.0, -25.0), 0.0, 0.0);
    assert_eq!(p.target, Vec2::new(40.0, -25.0));

    let vp = Viewport::new(800.0, 600.0, 1.0).unwrap();
    let mut sim = NeuroSim::new(vp);
    sim.on_input(Vec2::new(400.0, -60.0), 0.0);
    assert_eq!(sim.pointer().target.y, -60.0);
}

#[test]
fn controls_padding_shifts_target() {
    let mut p = tracker();
    p.set_controls_padding(30.0);
    p.on_input(Vec2::new(400.0, 300.0), 0.0, 50.0);
    assert_eq!(p.target.y, 240.0);
    assert!(p.is_moving());
}

#[test]
fn negative_controls_padding_vetoes_tracking() {
    let mut p = tracker();
    p.set_controls_padding(-120.0);
    p.on_input(Vec2::new(400.0, 300.0), 0.0, 50.0);
    assert_eq!(p.phase(), PointerPhase::Idle);
    assert_eq!(p.target.y, 390.0);
    // quiet timer still armed
    assert_eq!(p.quiet_deadline_ms(), Some(MOVING_QUIET_MS));

    p.set_controls_padding(0.0);
    p.on_input(Vec2::new(400.0, 300.0), 10.0, 50.0);
    assert_eq!(p.phase(), PointerPhase::Tracking);
}

#[test]
fn smoothing_moves_a_fixed_fraction() {
    let mut p = PointerTracker::new(Vec2::ZERO, Vec2::new(100.0, -50.0), 0.1);
    p.smooth();
    assert!((p.pos - Vec2::new(10.0, -5.0)).length() < 1e-5);
    for _ in 0..200 {
        p.smooth();
    }
    assert!((p.pos - p.target).length() < 1e-3);
}

#[test]
fn custom_quiet_interval() {
    let mut p = tracker().with_quiet_ms(50.0);
    p.on_input(Vec2::ZERO, 0.0, 0.0);
    p.tick(49.0);
    assert!(p.is_moving());
    p.tick(50.0);
    assert!(!p.is_moving());
}

#[test]
fn idle_after_quiet_page() {
    let vp = Viewport::new(1000.0, 800.0, 1.0).unwrap();
    let mut sim = GhostSim::new(EffectParams::default(), vp).unwrap();
    let mut t = 0.0;
    while t <= 500.0 {
        sim.advance(t);
        t += 16.0;
    }
    assert_eq!(sim.pointer().phase(), PointerPhase::Idle);
}

#[test]
fn neuro_pointer_follows_raw_coordinates() {
    let vp = Viewport::new(1000.0, 500.0, 1.0).unwrap();
    let mut sim = NeuroSim::new(vp);
    sim.on_input(Vec2::new(500.0, 250.0), 0.0);
    assert_eq!(sim.pointer().target, Vec2::new(500.0, 250.0));
    let u = sim.advance(16.0, 0.0);
    // half way there with smoothing 0.5
    assert!((u.pointer_position - Vec2::new(0.25, 0.75)).length() < 1e-6);
    for i in 0..40 {
        sim.advance(32.0 + i as f64 * 16.0, 0.0);
    }
    let u = sim.advance(1_000.0, 250.0);
    assert!((u.pointer_position - Vec2::new(0.5, 0.5)).length() < 1e-4);
    assert!((u.scroll_progress - 0.25).abs() < 1e-6);
    assert_eq!(u.time_ms, 1_000.0);
}
