use crate::constants::{
    RAMP_BURST_END_SEC, RAMP_BURST_MULTIPLIER, RAMP_DECAY_END_SEC, RAMP_STEADY_MULTIPLIER,
};

/// Spawn speed multiplier for a field that has been running `elapsed_sec`.
///
/// Three phases: a flat burst, a linear decay, then a steady state. Only
/// newly spawned particles pick this up; live ones keep their spawn speed.
#[inline]
pub fn speed_multiplier(elapsed_sec: f32) -> f32 {
    // a NaN clock keeps the burst speed
    if elapsed_sec.is_nan() || elapsed_sec <= RAMP_BURST_END_SEC {
        return RAMP_BURST_MULTIPLIER;
    }
    if elapsed_sec >= RAMP_DECAY_END_SEC {
        return RAMP_STEADY_MULTIPLIER;
    }
    let t = (elapsed_sec - RAMP_BURST_END_SEC) / (RAMP_DECAY_END_SEC - RAMP_BURST_END_SEC);
    RAMP_BURST_MULTIPLIER + (RAMP_STEADY_MULTIPLIER - RAMP_BURST_MULTIPLIER) * t
}

