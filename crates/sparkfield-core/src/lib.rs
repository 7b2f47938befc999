pub mod constants;
pub mod error;
pub mod field;
pub mod flicker;
pub mod particle;
pub mod ramp;
pub mod registry;
pub mod surface;
pub mod tween;
pub mod visibility;

// Instanced circle shader for GPU surfaces
pub static SPARKS_WGSL: &str = include_str!("../shaders/sparks.wgsl");

pub use error::*;
pub use field::*;
pub use flicker::*;
pub use particle::*;
pub use ramp::*;
pub use registry::*;
pub use surface::*;
pub use tween::*;
pub use visibility::*;
