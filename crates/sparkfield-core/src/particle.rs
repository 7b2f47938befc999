use crate::constants::*;
use crate::flicker::Flicker;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Bounded history of recent positions, oldest first.
#[derive(Clone, Debug, Default)]
pub struct Trail {
    points: SmallVec<[Vec2; TRAIL_LENGTH]>,
}

impl Trail {
    pub fn push(&mut self, point: Vec2) {
        if self.points.len() == TRAIL_LENGTH {
            self.points.remove(0);
        }
        self.points.push(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Vec2] {
        &self.points
    }
}

/// A single spark. Records are recycled through the field's free list, so
/// `reset` must overwrite every field that `update` reads.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub origin_distance: f32,
    pub appear_fraction: f32,
    pub life: f32,
    pub size: f32,
    pub base_brightness: f32,
    pub flicker: Flicker,
    pub trail: Trail,
    /// Highest fade-in progress reached so far (0..=1).
    pub peak_fade: f32,
    /// Field clock at spawn, seconds.
    pub spawned_at_sec: f32,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            origin_distance: 0.0,
            appear_fraction: APPEAR_FRACTION_MIN,
            life: 1.0,
            size: SIZE_MIN,
            base_brightness: 1.0,
            flicker: Flicker::default(),
            trail: Trail::default(),
            peak_fade: 0.0,
            spawned_at_sec: 0.0,
        }
    }
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, center: Vec2, speed_multiplier: f32, now_sec: f32) -> Self {
        let mut p = Self::default();
        p.reset(rng, center, speed_multiplier, now_sec);
        p
    }

    /// Re-roll every spawn-time property and place the particle at `center`.
    pub fn reset<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        center: Vec2,
        speed_multiplier: f32,
        now_sec: f32,
    ) {
        let angle = rng.gen::<f32>() * TAU;
        let speed = (SPEED_MIN + rng.gen::<f32>() * SPEED_SPAN) * speed_multiplier;
        self.position = center;
        self.velocity = Vec2::from_angle(angle) * speed;
        self.origin_distance = 0.0;
        self.appear_fraction = rng.gen_range(APPEAR_FRACTION_MIN..=APPEAR_FRACTION_MAX);
        self.life = 1.0;
        self.size = SIZE_MIN + rng.gen::<f32>() * SIZE_SPAN;
        self.base_brightness = BRIGHTNESS_MIN + rng.gen::<f32>() * BRIGHTNESS_SPAN;
        self.flicker = Flicker::roll(rng);
        self.trail.clear();
        self.peak_fade = 0.0;
        self.spawned_at_sec = now_sec;
    }

    /// One simulation step: trail sample, move, distance, life, flicker.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, center: Vec2, record_trail: bool) {
        if record_trail {
            self.trail.push(self.position);
        }
        self.position += self.velocity;
        self.origin_distance = self.position.distance(center);
        self.life = (self.life - LIFE_DECAY_PER_TICK).max(0.0);
        self.flicker.advance(rng);
    }

    #[inline]
    pub fn brightness(&self) -> f32 {
        self.base_brightness * self.flicker.multiplier()
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.life <= 0.0
    }
}
