//! Water Quest - Entry Point
//!
//! Controls:
//! - A/D or Left/Right: Move
//! - W/Space/Up: Jump
//! - X: Dash
//! - Z: Attack
//! - P: Use a potion
//! - E: Enter the shop
//! - Up/Down + Enter: Menus
//! - Escape: Leave the shop, or quit from the title and ending screens

use bevy::prelude::*;

use water_quest::core::GameState;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "67 Water Quest".to_string(),
                resolution: (1280.0, 720.0).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))

        // Our game plugin
        .add_plugins(water_quest::WaterQuestPlugin)

        // Presentation
        .add_plugins((water_quest::rendering::RenderingPlugin, water_quest::ui::HudPlugin))

        .add_systems(
            Update,
            quit_on_escape
                .run_if(in_state(GameState::ClassSelect).or(in_state(GameState::Ended))),
        )
        .run();
}

fn quit_on_escape(keyboard: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
    }
}
