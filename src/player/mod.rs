//! Player module - class stats, inventory, controller and potions.

mod class;
mod components;
mod controller;
mod inventory;
mod plugin;
mod potions;

pub use class::*;
pub use components::*;
pub use controller::*;
pub use inventory::*;
pub use plugin::{player_bundle, player_update, PlayerPlugin, POTION_MESSAGE_TICKS};
pub use potions::*;
