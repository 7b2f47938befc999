// Host-side tests for the appearance policy: fade-in, LOD bands, flicker,
// trails and the speed ramp.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sparkfield_core::constants::*;
use sparkfield_core::*;

#[test]
fn viewport_radius_and_center() {
    let v = Viewport::new(800.0, 600.0);
    assert!(v.is_valid());
    assert_eq!(v.max_visible_radius(), 300.0);
    assert_eq!(v.center(), Vec2::new(400.0, 300.0));
    assert!(v.contains(Vec2::new(-99.0, 699.0)));
    assert!(!v.contains(Vec2::new(901.0, 300.0)));
    assert!(!v.contains(Vec2::new(400.0, -101.0)));
}

#[test]
fn invalid_viewports_have_zero_radius() {
    for v in [
        Viewport::new(0.0, 600.0),
        Viewport::new(800.0, -1.0),
        Viewport::new(f32::NAN, 600.0),
        Viewport::new(f32::INFINITY, 600.0),
    ] {
        assert!(!v.is_valid());
        assert_eq!(v.max_visible_radius(), 0.0);
        assert!(matches!(v.validate(), Err(FieldError::InvalidViewport { .. })));
        assert_eq!(fade_progress(1_000.0, 0.8, v.max_visible_radius()), 0.0);
    }
}

#[test]
fn alpha_is_zero_before_appear_distance_then_non_decreasing() {
    let radius = 300.0;
    for &appear in &[APPEAR_FRACTION_MIN, 0.87, APPEAR_FRACTION_MAX] {
        let appear_distance = radius * appear;
        let mut prev = 0.0f32;
        let mut reached_full = false;
        for step in 0..=800 {
            let d = step as f32 * 0.5;
            let fade = fade_progress(d, appear, radius);
            let alpha = spark_alpha(0.9, 0.8, fade);
            if d < appear_distance {
                assert_eq!(alpha, 0.0, "visible at {d} before {appear_distance}");
            } else {
                assert!(alpha >= prev, "alpha fell at distance {d}");
            }
            reached_full |= fade == 1.0;
            prev = alpha;
        }
        assert!(reached_full);
        let full_at = appear_distance + FADE_IN_FRACTION * radius;
        assert_eq!(fade_progress(full_at + 0.01, appear, radius), 1.0);
        let half = fade_progress(appear_distance + FADE_IN_FRACTION * radius * 0.5, appear, radius);
        assert!((half - 0.5).abs() < 1e-4);
    }
}

#[test]
fn alpha_combines_life_brightness_and_fade() {
    assert_eq!(spark_alpha(1.0, 1.0, 1.0), 1.0);
    assert!((spark_alpha(0.5, 0.8, 0.5) - 0.2).abs() < 1e-6);
    assert_eq!(spark_alpha(0.0, 1.0, 1.0), 0.0);
}

#[test]
fn lod_size_is_non_increasing_with_distance() {
    let radius = 300.0;
    let mut prev = f32::MAX;
    for step in 0..=700 {
        let d = step as f32 * 0.5;
        let s = lod_scale(d, radius);
        assert!(s <= prev, "size grew at distance {d}");
        prev = s;
    }
    assert_eq!(lod_scale(0.0, radius), 1.0);
    assert_eq!(lod_scale(radius * 0.75, radius), LOD_MID_SCALE);
    assert_eq!(lod_scale(radius * 0.95, radius), LOD_FAR_SCALE);
}

#[test]
fn trail_keeps_last_eight_positions() {
    let mut trail = Trail::default();
    for i in 0..12 {
        trail.push(Vec2::new(i as f32, 0.0));
    }
    assert_eq!(trail.len(), TRAIL_LENGTH);
    assert_eq!(trail.as_slice()[0], Vec2::new(4.0, 0.0));
    assert_eq!(trail.as_slice()[TRAIL_LENGTH - 1], Vec2::new(11.0, 0.0));
}

#[test]
fn trail_sprites_sample_every_other_entry_and_fade_toward_oldest() {
    let points: Vec<Vec2> = (0..TRAIL_LENGTH).map(|i| Vec2::new(i as f32 * 3.0, 0.0)).collect();
    let mut out = Vec::new();
    push_trail_sprites(&points, 0.8, 4.0, &mut out);
    // index 0 has zero weight and is skipped: 2, 4, 6 remain
    assert_eq!(out.len(), 3);
    assert_eq!(out[0].position, [6.0, 0.0]);
    for w in out.windows(2) {
        assert!(w[0].alpha < w[1].alpha);
        assert!(w[0].radius < w[1].radius);
    }
    let expected_last = 0.8 * (6.0 / TRAIL_LENGTH as f32) * TRAIL_ALPHA_SCALE;
    assert!((out[2].alpha - expected_last).abs() < 1e-6);
    assert!(out.iter().all(|s| s.tint == TRAIL_TINT));

    out.clear();
    push_trail_sprites(&[], 1.0, 4.0, &mut out);
    assert!(out.is_empty());
}

#[test]
fn flicker_stays_in_bounds_and_changes_only_when_due() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut f = Flicker {
        enabled: true,
        speed: 0.03,
        ..Flicker::default()
    };
    let mut changes = 0;
    for _ in 0..5_000 {
        let before = f.clone();
        f.advance(&mut rng);
        assert!(
            (FLICKER_MULTIPLIER_MIN..=FLICKER_MULTIPLIER_MAX).contains(&f.current_multiplier),
            "multiplier {} out of range",
            f.current_multiplier
        );
        if f.phase < before.next_change_at {
            assert_eq!(f.current_multiplier, before.current_multiplier);
            assert_eq!(f.next_change_at, before.next_change_at);
        } else {
            changes += 1;
            let hold = f.next_change_at - f.phase;
            assert!(hold >= FLICKER_HOLD_FRAMES_MIN / FRAMES_PER_SEC - 1e-5);
            assert!(hold <= FLICKER_HOLD_FRAMES_MAX / FRAMES_PER_SEC + 1e-5);
        }
    }
    assert!(changes > 1_000, "flicker too smooth: {changes} changes");
}

#[test]
fn disabled_flicker_is_constant() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut f = Flicker::default();
    for _ in 0..100 {
        f.advance(&mut rng);
    }
    assert_eq!(f.multiplier(), 1.0);
    assert_eq!(f.phase, 0.0);
}

#[test]
fn about_forty_percent_of_sparks_flicker() {
    let mut rng = StdRng::seed_from_u64(555);
    let n = 20_000;
    let flickering = (0..n).filter(|_| Flicker::roll(&mut rng).enabled).count();
    let share = flickering as f32 / n as f32;
    assert!((share - FLICKER_PROBABILITY).abs() < 0.02, "share {share}");
}

#[test]
fn spawned_particles_respect_ranges() {
    let mut rng = StdRng::seed_from_u64(64);
    let center = Vec2::new(10.0, 20.0);
    for _ in 0..2_000 {
        let p = Particle::spawn(&mut rng, center, 1.0, 0.5);
        assert_eq!(p.position, center);
        assert!((APPEAR_FRACTION_MIN..=APPEAR_FRACTION_MAX).contains(&p.appear_fraction));
        assert!((BRIGHTNESS_MIN..=BRIGHTNESS_MIN + BRIGHTNESS_SPAN).contains(&p.base_brightness));
        assert!((SIZE_MIN..=SIZE_MIN + SIZE_SPAN).contains(&p.size));
        assert!(p.speed() >= SPEED_MIN - 1e-4 && p.speed() <= SPEED_MIN + SPEED_SPAN + 1e-4);
        assert_eq!(p.life, 1.0);
        assert_eq!(p.spawned_at_sec, 0.5);
    }
}

#[test]
fn appear_fraction_survives_updates() {
    let mut rng = StdRng::seed_from_u64(91);
    let center = Vec2::new(400.0, 300.0);
    let mut p = Particle::spawn(&mut rng, center, 2.0, 0.0);
    let appear = p.appear_fraction;
    let mut prev_distance = 0.0;
    for _ in 0..50 {
        p.update(&mut rng, center, true);
        assert_eq!(p.appear_fraction, appear);
        assert!(p.origin_distance > prev_distance);
        prev_distance = p.origin_distance;
    }
    assert_eq!(p.trail.len(), TRAIL_LENGTH);
}

#[test]
fn ramp_phases_match_schedule() {
    assert_eq!(speed_multiplier(0.0), RAMP_BURST_MULTIPLIER);
    assert_eq!(speed_multiplier(1.0), RAMP_BURST_MULTIPLIER);
    assert_eq!(speed_multiplier(2.0), RAMP_BURST_MULTIPLIER);
    let mid = speed_multiplier(2.5);
    let expected = (RAMP_BURST_MULTIPLIER + RAMP_STEADY_MULTIPLIER) * 0.5;
    assert!((mid - expected).abs() < 1e-5, "mid-decay {mid} != {expected}");
    assert_eq!(speed_multiplier(3.0), RAMP_STEADY_MULTIPLIER);
    assert_eq!(speed_multiplier(120.0), RAMP_STEADY_MULTIPLIER);
    assert_eq!(speed_multiplier(f32::NAN), RAMP_BURST_MULTIPLIER);
}

#[test]
fn ramp_decay_is_monotonic() {
    let mut prev = speed_multiplier(0.0);
    for i in 0..=400 {
        let t = i as f32 * 0.01;
        let m = speed_multiplier(t);
        assert!(m <= prev + 1e-6, "multiplier rose at t={t}");
        prev = m;
    }
}
