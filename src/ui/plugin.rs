//! UI plugin - menu state machines.

use bevy::prelude::*;

use super::menu::*;
use crate::core::{GameState, SimSet};

/// UI plugin - handles the class selection menu.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClassMenu>()
            .add_systems(OnEnter(GameState::ClassSelect), enter_class_select)
            .add_systems(
                FixedUpdate,
                class_menu_input
                    .in_set(SimSet::Menus)
                    .run_if(in_state(GameState::ClassSelect)),
            );
    }
}
