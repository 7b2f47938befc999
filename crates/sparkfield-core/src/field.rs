use crate::constants::{
    CULL_MARGIN_PX, DEFAULT_INITIAL_BURST, DEFAULT_MAX_PARTICLES, DEFAULT_SPAWN_RATE,
};
use crate::error::FieldError;
use crate::particle::Particle;
use crate::ramp::speed_multiplier;
use crate::registry::Animator;
use crate::surface::{SparkSprite, SparkSurface};
use crate::visibility::{
    fade_progress, lod_scale, push_trail_sprites, spark_alpha, spark_sprite, Viewport,
};
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub max_particles: usize,
    /// Expected spawns per tick; the fractional part is a probability.
    pub spawn_rate: f32,
    pub initial_burst: usize,
    pub trails: bool,
    pub seed: Option<u64>,
    pub cull_margin: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_particles: DEFAULT_MAX_PARTICLES,
            spawn_rate: DEFAULT_SPAWN_RATE,
            initial_burst: DEFAULT_INITIAL_BURST,
            trails: false,
            seed: None,
            cull_margin: CULL_MARGIN_PX,
        }
    }
}

impl FieldConfig {
    pub fn new(max_particles: usize, spawn_rate: f32) -> Self {
        Self {
            max_particles,
            spawn_rate,
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldState {
    /// No surface; every call is a no-op.
    Inert,
    Running,
    Paused,
    /// Terminal. Resources released.
    Stopped,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldStats {
    pub frames: u64,
    pub spawned: u64,
    pub expired: u64,
    pub culled_offscreen: u64,
    pub dropped_at_capacity: u64,
    /// Particles removed after having fully faded in.
    pub completed_cycles: u64,
}

/// A continuously regenerating field of sparks flying outward from the
/// viewport center.
pub struct SparkField<S: SparkSurface> {
    config: FieldConfig,
    viewport: Viewport,
    state: FieldState,
    surface: Option<S>,
    rng: StdRng,
    particles: Vec<Particle>,
    pool: Vec<Particle>,
    sprites: Vec<SparkSprite>,
    elapsed_sec: f32,
    stats: FieldStats,
}

impl<S: SparkSurface> SparkField<S> {
    pub fn initialize(
        width: f32,
        height: f32,
        max_particles: usize,
        spawn_rate: f32,
        surface: Result<S, FieldError>,
    ) -> Self {
        Self::with_config(width, height, FieldConfig::new(max_particles, spawn_rate), surface)
    }

    /// Build a field. A surface error leaves the field `Inert` and is only
    /// logged.
    pub fn with_config(
        width: f32,
        height: f32,
        config: FieldConfig,
        surface: Result<S, FieldError>,
    ) -> Self {
        let viewport = Viewport::new(width, height);
        if let Err(e) = viewport.validate() {
            log::warn!("[sparks] {e}; sparks hidden until a valid resize");
        }
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut field = Self {
            particles: Vec::with_capacity(config.max_particles.min(4096)),
            pool: Vec::new(),
            sprites: Vec::new(),
            config,
            viewport,
            state: FieldState::Inert,
            surface: None,
            rng,
            elapsed_sec: 0.0,
            stats: FieldStats::default(),
        };
        match surface {
            Ok(mut s) => {
                s.resize(viewport);
                field.surface = Some(s);
                field.state = FieldState::Running;
                let burst = field.config.initial_burst;
                field.spawn(burst, speed_multiplier(0.0));
                log::info!(
                    "[sparks] field running {}x{} max={} rate={:.2}",
                    width,
                    height,
                    field.config.max_particles,
                    field.config.spawn_rate
                );
            }
            Err(e) => log::warn!("[sparks] field disabled: {e}"),
        }
        field
    }

    /// Advance one frame. Never fails; does nothing unless `Running`.
    pub fn tick(&mut self, dt_sec: f32) {
        if self.state != FieldState::Running {
            return;
        }
        if dt_sec.is_finite() && dt_sec > 0.0 {
            self.elapsed_sec += dt_sec;
        }
        let multiplier = speed_multiplier(self.elapsed_sec);
        let count = self.spawn_count();
        self.spawn(count, multiplier);
        self.update();
        self.cull();
        self.render();
        self.stats.frames += 1;
    }

    /// New bounds take effect on the next tick. Particles are not moved.
    pub fn resize(&mut self, width: f32, height: f32) {
        let viewport = Viewport::new(width, height);
        if let Err(e) = viewport.validate() {
            log::warn!("[sparks] {e}; sparks hidden until a valid resize");
        }
        self.viewport = viewport;
        if let Some(s) = self.surface.as_mut() {
            s.resize(viewport);
        }
    }

    /// Halt and release the surface. Returns false if already stopped.
    pub fn stop(&mut self) -> bool {
        if self.state == FieldState::Stopped {
            return false;
        }
        self.state = FieldState::Stopped;
        if let Some(mut s) = self.surface.take() {
            s.release();
        }
        self.particles.clear();
        self.pool.clear();
        self.sprites.clear();
        log::info!(
            "[sparks] field stopped after {} frames ({} spawned)",
            self.stats.frames,
            self.stats.spawned
        );
        true
    }

    pub fn pause(&mut self) {
        if self.state == FieldState::Running {
            self.state = FieldState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == FieldState::Paused {
            self.state = FieldState::Running;
        }
    }

    fn spawn_count(&mut self) -> usize {
        let rate = self.config.spawn_rate;
        if rate.is_nan() || rate <= 0.0 {
            return 0;
        }
        // never request more than the field can hold
        let cap = self.config.max_particles;
        let whole = rate.floor();
        if whole >= cap as f32 {
            return cap;
        }
        let mut n = whole as usize;
        if self.rng.gen::<f32>() < rate - whole {
            n += 1;
        }
        n.min(cap)
    }

    fn spawn(&mut self, requested: usize, multiplier: f32) {
        let available = self.config.max_particles.saturating_sub(self.particles.len());
        let n = requested.min(available);
        self.stats.dropped_at_capacity = self
            .stats
            .dropped_at_capacity
            .saturating_add((requested - n) as u64);
        let center = self.viewport.center();
        for _ in 0..n {
            let mut p = self.pool.pop().unwrap_or_default();
            p.reset(&mut self.rng, center, multiplier, self.elapsed_sec);
            self.particles.push(p);
        }
        self.stats.spawned = self.stats.spawned.saturating_add(n as u64);
    }

    fn update(&mut self) {
        let center = self.viewport.center();
        let trails = self.config.trails;
        for p in &mut self.particles {
            p.update(&mut self.rng, center, trails);
        }
    }

    fn cull(&mut self) {
        let margin = self.config.cull_margin;
        let mut i = 0;
        while i < self.particles.len() {
            let expired = self.particles[i].is_expired();
            let outside = !self
                .viewport
                .contains_with_margin(self.particles[i].position, margin);
            if !(expired || outside) {
                i += 1;
                continue;
            }
            let p = self.particles.swap_remove(i);
            if p.peak_fade >= 1.0 {
                self.stats.completed_cycles += 1;
            }
            if expired {
                self.stats.expired += 1;
            } else {
                self.stats.culled_offscreen += 1;
            }
            self.pool.push(p);
        }
    }

    fn render(&mut self) {
        self.sprites.clear();
        let radius = self.viewport.max_visible_radius();
        let trails = self.config.trails;
        for p in &mut self.particles {
            let fade = fade_progress(p.origin_distance, p.appear_fraction, radius);
            p.peak_fade = p.peak_fade.max(fade);
            let alpha = spark_alpha(p.life, p.brightness(), fade);
            if alpha <= 0.0 {
                continue;
            }
            let size = p.size * lod_scale(p.origin_distance, radius);
            if trails {
                push_trail_sprites(p.trail.as_slice(), alpha, size, &mut self.sprites);
            }
            self.sprites.push(spark_sprite(p.position, size, alpha));
        }
        if let Some(s) = self.surface.as_mut() {
            if let Err(e) = s.present(&self.sprites) {
                log::error!("[sparks] present error: {e}");
            }
        }
    }

    #[inline]
    pub fn state(&self) -> FieldState {
        self.state
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == FieldState::Running
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Sprites drawn on the last tick.
    pub fn sprites(&self) -> &[SparkSprite] {
        &self.sprites
    }

    pub fn stats(&self) -> FieldStats {
        self.stats
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn max_visible_radius(&self) -> f32 {
        self.viewport.max_visible_radius()
    }

    pub fn elapsed_sec(&self) -> f32 {
        self.elapsed_sec
    }

    pub fn pooled(&self) -> usize {
        self.pool.len()
    }
}

impl<S: SparkSurface> Animator for SparkField<S> {
    fn start(&mut self) {
        self.resume();
    }

    fn stop(&mut self) {
        SparkField::stop(self);
    }

    fn resize(&mut self, width: f32, height: f32) {
        SparkField::resize(self, width, height);
    }

    fn tick(&mut self, dt_sec: f32) {
        SparkField::tick(self, dt_sec);
    }

    fn pause(&mut self) {
        SparkField::pause(self);
    }

    fn is_running(&self) -> bool {
        self.is_active()
    }
}
