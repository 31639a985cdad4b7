pub mod camera;
pub mod color;
pub mod constants;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod stage;
pub mod trigger;
pub mod tween;

pub use camera::*;
pub use constants::*;
pub use particles::ParticleField;
pub use stage::{PageLayout, Stage};

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
