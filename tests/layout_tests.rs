// Host-side tests for canvas sizing and resize debouncing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod layout {
    include!("../src/layout.rs");
}

use layout::*;

#[test]
fn backing_size_scales_by_device_pixel_ratio() {
    assert_eq!(backing_size(800.0, 600.0, 1.0), (800, 600));
    assert_eq!(backing_size(800.0, 600.0, 2.0), (1600, 1200));
    assert_eq!(backing_size(100.5, 50.5, 1.5), (150, 75));
}

#[test]
fn backing_size_never_collapses_to_zero() {
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(-10.0, f64::NAN, 1.0), (1, 1));
    // bogus ratio falls back to 1
    assert_eq!(backing_size(320.0, 240.0, 0.0), (320, 240));
    assert_eq!(backing_size(320.0, 240.0, f64::INFINITY), (320, 240));
}

#[test]
fn debounce_waits_for_quiet_period() {
    let mut d = ResizeDebounce::new(200.0);
    assert_eq!(d.poll(0.0), None);
    d.note(800.0, 600.0, 1_000.0);
    d.note(820.0, 610.0, 1_050.0);
    d.note(900.0, 700.0, 1_150.0);
    assert!(d.is_pending());
    assert_eq!(d.poll(1_200.0), None);
    assert_eq!(d.poll(1_349.0), None);
    // only the last size of the burst is delivered, once
    assert_eq!(d.poll(1_350.0), Some((900.0, 700.0)));
    assert_eq!(d.poll(2_000.0), None);
    assert!(!d.is_pending());
}

#[test]
fn debounce_cancel_drops_pending_size() {
    let mut d = ResizeDebounce::new(200.0);
    d.note(640.0, 480.0, 0.0);
    d.cancel();
    assert_eq!(d.poll(10_000.0), None);
}

#[test]
fn frame_dt_is_clamped() {
    assert_eq!(frame_dt(0.016, 0.1), 0.016);
    assert_eq!(frame_dt(3.0, 0.1), 0.1);
    assert_eq!(frame_dt(-1.0, 0.1), 0.0);
    assert_eq!(frame_dt(f32::NAN, 0.1), 0.0);
}

#[test]
fn textured_sprite_is_a_centred_square() {
    let d = sprite_draw([100.0, 50.0], 4.0, true, 2.0);
    assert_eq!(
        d,
        SpriteDraw::Image {
            x: 96.0,
            y: 46.0,
            side: 8.0
        }
    );
}

#[test]
fn missing_texture_falls_back_to_circle() {
    assert_eq!(
        sprite_draw([100.0, 50.0], 4.0, false, 2.0),
        SpriteDraw::Circle {
            x: 100.0,
            y: 50.0,
            radius: 4.0
        }
    );
    // negative radius never reaches the canvas arc call
    assert_eq!(
        sprite_draw([0.0, 0.0], -1.0, false, 2.0),
        SpriteDraw::Circle {
            x: 0.0,
            y: 0.0,
            radius: 0.0
        }
    );
}

#[test]
fn fallback_fill_follows_sprite_tint() {
    assert_eq!(tint_css([1.0, 1.0, 1.0], "#ffffff"), "#ffffff");
    assert_eq!(tint_css([1.0, 0.85, 0.45], "#ffffff"), "rgb(255,217,115)");
    assert_eq!(tint_css([2.0, -1.0, 0.5], "#ffffff"), "rgb(255,0,128)");
}
