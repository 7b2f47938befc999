use crate::error::FieldError;
use crate::visibility::Viewport;
use glam::Vec2;

/// One drawable circle, in viewport pixels.
///
/// Laid out for direct upload as a GPU instance (28 bytes, all `f32`).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SparkSprite {
    pub position: [f32; 2],
    pub radius: f32,
    pub alpha: f32,
    pub tint: [f32; 3],
}

impl SparkSprite {
    pub fn new(position: Vec2, radius: f32, alpha: f32, tint: [f32; 3]) -> Self {
        Self {
            position: position.to_array(),
            radius,
            alpha,
            tint,
        }
    }
}

/// Drawing backend owned by a `SparkField`.
///
/// The field never reads anything back from the surface; sprites are a pure
/// projection of simulation state.
pub trait SparkSurface {
    fn resize(&mut self, viewport: Viewport);
    fn present(&mut self, sprites: &[SparkSprite]) -> Result<(), FieldError>;
    fn release(&mut self);
}

/// Surface that draws nothing. Useful for headless runs.
#[derive(Default, Debug)]
pub struct NullSurface;

impl SparkSurface for NullSurface {
    fn resize(&mut self, _viewport: Viewport) {}

    fn present(&mut self, _sprites: &[SparkSprite]) -> Result<(), FieldError> {
        Ok(())
    }

    fn release(&mut self) {}
}
