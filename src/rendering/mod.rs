//! Rendering module - coloured rectangles, camera, shake and particles.

mod palette;
mod particles;
mod plugin;

pub use palette::Palette;
pub use particles::Particle;
pub use plugin::{shake_offset, to_world, RenderingPlugin};
