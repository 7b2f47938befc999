// Spark field tuning constants shared by the web and native front-ends.

// Pool and spawn policy
pub const DEFAULT_MAX_PARTICLES: usize = 800;
pub const DEFAULT_SPAWN_RATE: f32 = 3.5; // expected spawns per tick
pub const DEFAULT_INITIAL_BURST: usize = 5; // particles created at initialization
pub const CULL_MARGIN_PX: f32 = 100.0; // distance past the viewport edge before removal

// Spawn-time randomization
pub const SPEED_MIN: f32 = 1.5; // px per tick before the ramp multiplier
pub const SPEED_SPAN: f32 = 2.5;
pub const SIZE_MIN: f32 = 3.0; // radius, px
pub const SIZE_SPAN: f32 = 3.0;
pub const BRIGHTNESS_MIN: f32 = 0.7;
pub const BRIGHTNESS_SPAN: f32 = 0.3;
pub const APPEAR_FRACTION_MIN: f32 = 0.8;
pub const APPEAR_FRACTION_MAX: f32 = 0.95;

// Lifetime: 10 s at 60 fps, decremented once per tick
pub const FRAMES_PER_SEC: f32 = 60.0;
pub const LIFETIME_SEC: f32 = 10.0;
pub const LIFE_DECAY_PER_TICK: f32 = 1.0 / (LIFETIME_SEC * FRAMES_PER_SEC);

// Speed ramp (seconds since field start)
pub const RAMP_BURST_MULTIPLIER: f32 = 2.67;
pub const RAMP_STEADY_MULTIPLIER: f32 = 1.5;
pub const RAMP_BURST_END_SEC: f32 = 2.0;
pub const RAMP_DECAY_END_SEC: f32 = 3.0;

// Flicker ("interference" style, sharp random steps)
pub const FLICKER_PROBABILITY: f32 = 0.4;
pub const FLICKER_SPEED_MIN: f32 = 0.02; // phase units per tick
pub const FLICKER_SPEED_SPAN: f32 = 0.05;
pub const FLICKER_MULTIPLIER_MIN: f32 = 0.2;
pub const FLICKER_MULTIPLIER_MAX: f32 = 1.0;
pub const FLICKER_HOLD_FRAMES_MIN: f32 = 1.0;
pub const FLICKER_HOLD_FRAMES_MAX: f32 = 4.0;

// Visibility and level of detail, as fractions of the visible radius
pub const FADE_IN_FRACTION: f32 = 0.10;
pub const LOD_FAR_FRACTION: f32 = 0.9;
pub const LOD_MID_FRACTION: f32 = 0.6;
pub const LOD_FAR_SCALE: f32 = 0.5;
pub const LOD_MID_SCALE: f32 = 0.75;

// Trails
pub const TRAIL_LENGTH: usize = 8;
pub const TRAIL_SAMPLE_STRIDE: usize = 2;
pub const TRAIL_ALPHA_SCALE: f32 = 0.4;

// Sprite tint: white core for sparks, warm yellow for trail samples
pub const SPARK_TINT: [f32; 3] = [1.0, 1.0, 1.0];
pub const TRAIL_TINT: [f32; 3] = [1.0, 0.85, 0.45];
