//! Water Quest - a 2D side-scrolling action RPG in Bevy.
//!
//! Pick a class, cross four screens of bandit country, duel whoever you run
//! into, spend your 67 Water at the village shop and face the Bandit King.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, input snapshot, the fixed tick
//! - **Physics**: Rectangles, gravity and landing
//! - **Player**: Classes, controller, inventory and potions
//! - **Combat**: Health, swings and bolts, hit resolution
//! - **Enemies**: Definitions and AI for bandits and the boss
//! - **World**: Level layout, duels, the shop and endings
//! - **UI**: Class menu and the text HUD
//! - **Rendering**: Coloured rectangles, camera, shake and particles
//!
//! [`WaterQuestPlugin`] holds all of the simulation and runs headless.
//! The binary adds [`rendering::RenderingPlugin`] and [`ui::HudPlugin`] on top.

pub mod combat;
pub mod core;
pub mod enemies;
pub mod physics;
pub mod player;
pub mod rendering;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all simulation sub-plugins.
pub struct WaterQuestPlugin;

impl Plugin for WaterQuestPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Combat systems
            .add_plugins(combat::CombatPlugin)

            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)

            // World systems
            .add_plugins(world::WorldPlugin)

            // Menus
            .add_plugins(ui::UiPlugin);
    }
}
