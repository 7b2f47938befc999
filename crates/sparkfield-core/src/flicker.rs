use crate::constants::{
    FLICKER_HOLD_FRAMES_MAX, FLICKER_HOLD_FRAMES_MIN, FLICKER_MULTIPLIER_MAX,
    FLICKER_MULTIPLIER_MIN, FLICKER_PROBABILITY, FLICKER_SPEED_MIN, FLICKER_SPEED_SPAN,
    FRAMES_PER_SEC,
};
use rand::Rng;

/// Per-particle brightness interference.
///
/// The multiplier jumps to a fresh random level whenever `phase` passes
/// `next_change_at`, then holds for 1–4 frames. Disabled flicker keeps the
/// multiplier pinned at 1.
#[derive(Clone, Debug, PartialEq)]
pub struct Flicker {
    pub enabled: bool,
    pub speed: f32,
    pub phase: f32,
    pub next_change_at: f32,
    pub current_multiplier: f32,
}

impl Default for Flicker {
    fn default() -> Self {
        Self {
            enabled: false,
            speed: 0.0,
            phase: 0.0,
            next_change_at: 0.0,
            current_multiplier: 1.0,
        }
    }
}

impl Flicker {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen::<f32>() >= FLICKER_PROBABILITY {
            return Self::default();
        }
        Self {
            enabled: true,
            speed: FLICKER_SPEED_MIN + rng.gen::<f32>() * FLICKER_SPEED_SPAN,
            ..Self::default()
        }
    }

    /// Advance the phase by one tick, re-rolling the level when due.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if !self.enabled {
            return;
        }
        self.phase += self.speed;
        if self.phase >= self.next_change_at {
            self.current_multiplier =
                rng.gen_range(FLICKER_MULTIPLIER_MIN..=FLICKER_MULTIPLIER_MAX);
            let hold_frames = rng.gen_range(FLICKER_HOLD_FRAMES_MIN..=FLICKER_HOLD_FRAMES_MAX);
            self.next_change_at = self.phase + hold_frames / FRAMES_PER_SEC;
        }
    }

    #[inline]
    pub fn multiplier(&self) -> f32 {
        if self.enabled {
            self.current_multiplier
        } else {
            1.0
        }
    }
}
