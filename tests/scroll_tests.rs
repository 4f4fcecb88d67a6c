// Host-side tests for scroll easing and input mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scroll {
    include!("../src/core/scroll.rs");
}

use scroll::*;

fn state() -> ScrollState {
    ScrollState::new(0.1, 0.75, 2.0)
}

#[test]
fn wheel_scales_delta_onto_target() {
    let mut s = state();
    s.on_wheel(100.0);
    assert_eq!(s.target, 75.0);
    s.on_wheel(-40.0);
    assert_eq!(s.target, 45.0);
    // current only moves on tick
    assert_eq!(s.current, 0.0);
}

#[test]
fn easing_approaches_target_without_overshoot() {
    let mut s = state();
    s.on_wheel(100.0);
    let mut prev = s.current;
    for _ in 0..200 {
        s.tick();
        assert!(s.current >= prev, "current went backwards");
        assert!(s.current <= s.target, "overshoot: {} > {}", s.current, s.target);
        prev = s.current;
    }
    assert_eq!(s.current, 75.0);
}

#[test]
fn easing_distance_strictly_decreases_until_exact() {
    let cases = [
        (0.0_f32, 500.0_f32),
        (320.0, -180.0),
        (10.0, 10.37),
        (-3.5, 42.0),
        // Off the 0.01 grid: rounding the first step lands further away
        (0.004, 0.0095),
    ];
    for (start, target) in cases {
        let mut s = state();
        s.current = start;
        s.last = start;
        s.target = target;
        let mut dist = (s.target - s.current).abs();
        let mut ticks = 0;
        while s.current != s.target {
            s.tick();
            let d = (s.target - s.current).abs();
            assert!(d < dist, "distance did not shrink: {} -> {}", dist, d);
            dist = d;
            ticks += 1;
            assert!(ticks < 500, "did not converge from {} to {}", start, target);
        }
        assert_eq!(s.current, s.target);
        // Settled state is a fixed point
        s.tick();
        assert_eq!(s.current, target);
    }
}

#[test]
fn small_retarget_after_settling_off_grid_still_converges() {
    let mut s = state();
    s.target = 10.3712;
    for _ in 0..300 {
        s.tick();
    }
    assert_eq!(s.current, 10.3712);

    s.on_wheel(0.004);
    let before = (s.target - s.current).abs();
    s.tick();
    assert!((s.target - s.current).abs() < before);
    assert_eq!(s.current, s.target);
}

#[test]
fn tick_rounds_to_two_decimals() {
    let mut s = state();
    s.target = 1.234;
    s.tick();
    // lerp gives 0.1234 -> 0.12
    assert!((s.current - 0.12).abs() < 1e-6);
}

#[test]
fn direction_follows_sign_of_motion() {
    let mut s = state();
    assert_eq!(s.direction, Direction::Up);

    s.target = 100.0;
    s.tick();
    assert_eq!(s.direction, Direction::Down);

    s.target = -100.0;
    s.tick();
    assert_eq!(s.direction, Direction::Up);
}

#[test]
fn direction_unchanged_when_still() {
    let mut s = state();
    s.target = 50.0;
    for _ in 0..300 {
        s.tick();
    }
    assert_eq!(s.current, s.target);
    assert_eq!(s.direction, Direction::Down);
    s.tick();
    s.tick();
    assert_eq!(s.direction, Direction::Down);
    assert_eq!(s.last, s.current);
}

#[test]
fn drag_maps_pointer_delta_onto_target() {
    let mut s = state();
    s.current = 200.0;
    s.on_drag_start(500.0);
    assert_eq!(s.start, 500.0);
    assert_eq!(s.position, 200.0);
    s.on_drag_move(400.0);
    assert_eq!(s.target, 400.0);
    // Dragging back past the start scrolls the other way
    s.on_drag_move(600.0);
    assert_eq!(s.target, 0.0);
}

#[test]
fn drag_move_ignored_unless_dragging() {
    let mut s = state();
    s.on_drag_move(100.0);
    assert_eq!(s.target, 0.0);

    s.on_drag_start(100.0);
    s.on_drag_end();
    assert!(!s.is_dragging());
    s.on_drag_move(0.0);
    assert_eq!(s.target, 0.0);
}

#[test]
fn lock_blocks_drag_but_not_wheel() {
    let mut s = state();
    s.set_locked(true);
    s.on_drag_start(300.0);
    s.on_drag_move(200.0);
    assert_eq!(s.target, 0.0);
    s.on_wheel(10.0);
    assert_eq!(s.target, 7.5);

    s.set_locked(false);
    s.on_drag_move(200.0);
    assert_eq!(s.target, 200.0);
}

#[test]
fn ease_is_clamped_into_unit_range() {
    let s = ScrollState::new(3.0, 0.75, 2.0);
    assert_eq!(s.ease, 1.0);
    let s = ScrollState::new(0.0, 0.75, 2.0);
    assert!(s.ease > 0.0);
}

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
    assert_eq!(lerp(2.0, 10.0, 0.5), 6.0);
}
