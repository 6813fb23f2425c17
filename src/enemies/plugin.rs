//! Enemy plugin - registers enemy data and AI.

use bevy::prelude::*;

use super::ai;
use super::data::EnemyRegistry;
use crate::core::SimSet;

/// Enemy plugin - handles enemy definitions and behaviour.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(EnemyRegistry::load_embedded())
            .add_systems(FixedUpdate, ai::enemy_ai.in_set(SimSet::Enemies));
    }
}
