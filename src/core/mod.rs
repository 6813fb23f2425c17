//! Core game module - states, events, input and the simulation context.
//!
//! This module provides the foundation that all other game systems build upon.

mod context;
mod events;
mod input;
mod plugin;
mod states;

pub use context::*;
pub use events::*;
pub use input::*;
pub use plugin::{simulation_running, CorePlugin, SimSet, TICK_RATE_HZ};
pub use states::*;
