//! Distance-driven appearance policy.
//!
//! Sparks travel invisibly from the emission center and only fade in near
//! the rim of the visible circle, each at its own `appear_fraction` so they
//! do not pop in together. Everything here is a pure function of the
//! particle's distance and the current viewport.

use crate::constants::{
    CULL_MARGIN_PX, FADE_IN_FRACTION, LOD_FAR_FRACTION, LOD_FAR_SCALE, LOD_MID_FRACTION,
    LOD_MID_SCALE, SPARK_TINT, TRAIL_ALPHA_SCALE, TRAIL_SAMPLE_STRIDE, TRAIL_TINT,
};
use crate::error::FieldError;
use crate::surface::SparkSprite;
use glam::Vec2;

/// Viewport in device-independent pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(FieldError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Width and height with invalid dimensions collapsed to zero.
    #[inline]
    fn extent(&self) -> Vec2 {
        if self.is_valid() {
            Vec2::new(self.width, self.height)
        } else {
            Vec2::ZERO
        }
    }

    /// Emission center.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.extent() * 0.5
    }

    /// Radius of the circle sparks must reach to become visible; zero for an
    /// invalid viewport, which hides every spark.
    #[inline]
    pub fn max_visible_radius(&self) -> f32 {
        let e = self.extent();
        e.x.min(e.y) * 0.5
    }

    #[inline]
    pub fn contains_with_margin(&self, p: Vec2, margin: f32) -> bool {
        let e = self.extent();
        p.x >= -margin && p.x <= e.x + margin && p.y >= -margin && p.y <= e.y + margin
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.contains_with_margin(p, CULL_MARGIN_PX)
    }
}

/// Fade-in progress in \[0, 1\]: zero until `appear_fraction * radius`, then
/// linear over a further tenth of the radius.
#[inline]
pub fn fade_progress(origin_distance: f32, appear_fraction: f32, max_visible_radius: f32) -> f32 {
    if max_visible_radius.is_nan() || max_visible_radius <= 0.0 {
        return 0.0;
    }
    let appear_distance = max_visible_radius * appear_fraction;
    if origin_distance < appear_distance {
        return 0.0;
    }
    ((origin_distance - appear_distance) / (FADE_IN_FRACTION * max_visible_radius)).clamp(0.0, 1.0)
}

#[inline]
pub fn spark_alpha(life: f32, brightness: f32, fade: f32) -> f32 {
    (life * brightness * fade).clamp(0.0, 1.0)
}

/// Size multiplier by distance band: full near the center, 75% past 60% of
/// the radius, 50% past 90%.
#[inline]
pub fn lod_scale(origin_distance: f32, max_visible_radius: f32) -> f32 {
    if origin_distance > max_visible_radius * LOD_FAR_FRACTION {
        LOD_FAR_SCALE
    } else if origin_distance > max_visible_radius * LOD_MID_FRACTION {
        LOD_MID_SCALE
    } else {
        1.0
    }
}

/// Append trail samples for one spark, oldest first, every other entry.
/// Samples get dimmer and smaller toward the oldest point.
pub fn push_trail_sprites(trail: &[Vec2], alpha: f32, radius: f32, out: &mut Vec<SparkSprite>) {
    let len = trail.len();
    if len == 0 {
        return;
    }
    for i in (0..len).step_by(TRAIL_SAMPLE_STRIDE) {
        let ratio = i as f32 / len as f32;
        let a = alpha * ratio * TRAIL_ALPHA_SCALE;
        if a <= 0.0 {
            continue;
        }
        out.push(SparkSprite::new(trail[i], radius * ratio, a, TRAIL_TINT));
    }
}

#[inline]
pub fn spark_sprite(position: Vec2, radius: f32, alpha: f32) -> SparkSprite {
    SparkSprite::new(position, radius, alpha, SPARK_TINT)
}
