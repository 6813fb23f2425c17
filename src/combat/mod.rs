//! Combat module - health, attack objects and hit resolution.

mod attacks;
mod components;
mod plugin;
mod resolution;
mod systems;

pub use attacks::*;
pub use components::*;
pub use plugin::CombatPlugin;
pub use resolution::*;
pub use systems::{clear_attacks, spawn_attack};
