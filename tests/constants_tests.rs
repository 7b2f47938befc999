// Host-side tests for the web front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive() {
    assert!(RESIZE_DEBOUNCE_MS > 0.0);
    assert!(LAYER_FADE_IN_SEC > 0.0);
    assert!(LAYER_FADE_IN_DELAY_SEC >= 0.0);
    // a single clamped frame must stay below the debounce window
    assert!((MAX_FRAME_DT_SEC as f64) * 1000.0 < RESIZE_DEBOUNCE_MS);
}

#[test]
fn canvas_never_intercepts_input_and_starts_hidden() {
    assert!(CANVAS_CSS.contains("pointer-events:none"));
    assert!(CANVAS_CSS.contains("opacity:0"));
    assert!(LAYER_SELECTOR.starts_with('.'));
    assert!(!CANVAS_ID.contains(' '));
}

#[test]
fn animation_names_are_distinct() {
    assert_ne!(SPARKS_ANIMATION, FADE_IN_ANIMATION);
}

#[test]
fn texture_is_a_png_under_assets() {
    assert!(SPARK_TEXTURE_URL.starts_with("/assets/"));
    assert!(SPARK_TEXTURE_URL.ends_with(".png"));
    assert!(SPRITE_EXTENT >= 1.0);
}
