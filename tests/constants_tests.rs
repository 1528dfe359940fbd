// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn volumes_are_unit_gains() {
    for v in [AMBIENT_VOLUME, UI_HOVER_VOLUME, UI_CLICK_VOLUME, NARRATION_VOLUME] {
        assert!(v > 0.0 && v <= 1.0);
    }
    // Narration sits above the ambient bed
    assert!(NARRATION_VOLUME > AMBIENT_VOLUME);
    assert!(UI_CLICK_VOLUME > UI_HOVER_VOLUME);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn intro_tuning_is_positive() {
    assert!(SCROLL_MAX > 0.0);
    assert!(WHEEL_SENSITIVITY > 0.0);
    assert!(TOUCH_SENSITIVITY > 0.0);
    assert!(SETTLE_DELAY_MS >= 0.0);
    assert!(SCROLL_FADE_START > 0.0 && SCROLL_FADE_START < SCROLL_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn damping_rates_are_sane() {
    for rate in [RING_EASE_PER_SEC, IDLE_EASE_PER_SEC, HALL_FADE_PER_SEC] {
        assert!(rate > 0.0 && rate < REFERENCE_FPS);
    }
    assert!(TRACK_PULL_PER_FRAME > 0.0 && TRACK_PULL_PER_FRAME < 1.0);
    assert!(HALL_FADE_SNAP > 0.0 && HALL_FADE_SNAP < 0.1);
    assert!(IDLE_ROLL_AMPLITUDE.abs() < 0.1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_vantages_recede_from_the_ring() {
    assert!(HALL_EYE.z > MENU_EYE.z);
    assert!(MENU_EYE.z > HOME_EYE.z);
    // The idle home stays outside the ring so artifacts are never clipped
    assert!(HOME_EYE.z > ORBIT_RADIUS + PICK_SPHERE_RADIUS);
    assert!(CAMERA_FOV_Y_DEG > 0.0 && CAMERA_FOV_Y_DEG < 180.0);
    assert!(Z_NEAR > 0.0 && Z_FAR > HALL_EYE.length() * 2.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn loader_pacing_is_ordered() {
    assert!(LOADER_STEP_MS > 0.0);
    // A full climb (100 steps) should not dwarf the hold and fade
    assert!(LOADER_STEP_MS * 100.0 < 10_000.0);
    assert!(LOADER_HOLD_MS > 0.0 && LOADER_FADE_MS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn proxy_geometry_fits_the_hall() {
    assert!(FLOAT_AMPLITUDE > 0.0 && FLOAT_AMPLITUDE < PICK_SPHERE_RADIUS);
    assert!(HOVER_BRIGHTEN >= 1.0);
    assert!(HALL_HALF_WIDTH > ORBIT_RADIUS + ARTIFACT_BASE_SIZE);
    assert!(HALL_FLOOR_Y < RING_Y_OFFSET);
    assert!(FOG_DENSITY > 0.0 && FOG_DENSITY < 1.0);
    assert!(HALL_TONE_JITTER >= 0.0);
    for c in HALL_STONE_RGB {
        assert!((0.0..=1.0).contains(&c));
    }
}
