// Host-side tests for tuning constants and their relationships.

use ghost_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(DOTS_NUMBER > 1);
    assert!(DOT_SIZE > 0.0 && DOT_SIZE < 1.0);

    // Damping keeps the chain stable
    assert!(TAIL_FRICTION > 0.0 && TAIL_FRICTION < 1.0);
    assert!(TAIL_SPRING > 0.0);

    assert!(GHOST_POINTER_SMOOTHING > 0.0 && GHOST_POINTER_SMOOTHING <= 1.0);
    assert!(NEURO_POINTER_SMOOTHING > 0.0 && NEURO_POINTER_SMOOTHING <= 1.0);
    assert!(NEURO_POINTER_SMOOTHING > GHOST_POINTER_SMOOTHING);

    assert!(MOVING_QUIET_MS > 0.0);
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn idle_gravity_band_fits_under_the_ceiling() {
    let crest = GRAVITY_IDLE_FLOOR + 2.0 * GRAVITY_IDLE_SWING;
    assert!(crest <= TAIL_MAX_GRAVITY);
    assert!(GRAVITY_IDLE_FLOOR > 0.0);
    assert!(GRAVITY_RISE_PER_FRAME > 0.0);
    assert!(GRAVITY_FALL_PER_FRAME > GRAVITY_RISE_PER_FRAME);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smile_range_is_consistent() {
    assert!(SMILE_MIN < 0.0 && SMILE_MAX == 1.0);
    assert!(SMILE_FALL_PER_FRAME > SMILE_RISE_PER_FRAME);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacity_stays_in_unit_range() {
    assert!(OPACITY_BASE > 0.0);
    assert!(OPACITY_BASE + OPACITY_SPAN <= 1.0);
    assert!(BORDER_SPAN > 0.0 && BORDER_SPAN < 1.0);
}

#[test]
fn colors_are_normalized_rgb() {
    for c in MAIN_COLOR.iter().chain(BORDER_COLOR.iter()) {
        assert!((0.0..=1.0).contains(c));
    }
}

#[test]
fn quad_is_a_full_screen_strip() {
    assert_eq!(QUAD_VERTICES.len(), 2 * QUAD_VERTEX_COUNT as usize);
    for v in QUAD_VERTICES {
        assert_eq!(v.abs(), 1.0);
    }
}
