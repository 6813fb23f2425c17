//! Enemies module - enemy definitions and AI.

mod ai;
mod components;
mod data;
mod plugin;

pub use ai::{enemy_ai, think, Surroundings};
pub use components::*;
pub use data::{EnemyDefinition, EnemyRegistry};
pub use plugin::EnemyPlugin;
