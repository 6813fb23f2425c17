//! World plugin - exploration, duels, the shop and endings.

use bevy::prelude::*;

use super::encounter::*;
use super::shop::*;
use crate::core::{GameState, Outcome, SimSet};

/// World plugin - handles encounters and the village shop.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Encounter>()
            .init_resource::<ShopMenu>()
            .add_systems(
                FixedUpdate,
                (check_portal, open_shop, check_engagement, follow_camera)
                    .chain()
                    .in_set(SimSet::Encounter)
                    .run_if(in_state(GameState::Exploring)),
            )
            .add_systems(
                FixedUpdate,
                resolve_duel
                    .in_set(SimSet::Encounter)
                    .run_if(in_state(GameState::Duel)),
            )
            .add_systems(
                FixedUpdate,
                shop_input
                    .in_set(SimSet::Menus)
                    .run_if(in_state(GameState::Shop)),
            )
            .add_systems(OnEnter(GameState::Shop), enter_shop)
            .add_systems(OnEnter(GameState::Ended), show_epilogue);
    }
}

/// Log the closing lines of whichever ending was reached.
fn show_epilogue(outcome: Res<Outcome>) {
    let Some(ending) = outcome.0 else {
        warn!("Run ended without an outcome");
        return;
    };

    for line in ending.epilogue() {
        info!("{}", line);
    }
}
