//! Combat plugin - attack objects, hit resolution and deaths.

use bevy::prelude::*;

use super::systems::*;
use crate::core::{GameState, SimSet};

/// Combat plugin - handles all combat systems.
///
/// Attacks advance in every simulated state, but only a duel resolves hits.
/// While exploring, swings are cosmetic.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, advance_attacks.in_set(SimSet::Attacks))
            .add_systems(
                FixedUpdate,
                (
                    resolve_combat.run_if(in_state(GameState::Duel)),
                    despawn_dead_enemies,
                )
                    .chain()
                    .in_set(SimSet::Combat),
            )
            .add_systems(OnEnter(GameState::Duel), clear_attacks)
            .add_systems(OnExit(GameState::Duel), clear_attacks);
    }
}
