//! Enemy data loading from embedded RON.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;

use super::components::{EnemyKind, EnemyStats};
use crate::world::DataLoadError;

const ENEMIES_RON: &str = include_str!("../../assets/data/enemies.ron");
const ENEMIES_PATH: &str = "assets/data/enemies.ron";

/// Enemy definition loaded from RON file.
#[derive(Deserialize, Clone, Debug)]
pub struct EnemyDefinition {
    pub kind: EnemyKind,
    pub name: String,
    pub max_health: i32,
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    pub aggro_range: f32,
    pub attack_cooldown: u32,
    pub turn_chance: f64,
    pub swing_damage: i32,
}

impl EnemyDefinition {
    /// Convert to EnemyStats.
    pub fn to_stats(&self) -> EnemyStats {
        EnemyStats {
            max_health: self.max_health,
            speed: self.speed,
            size: Vec2::new(self.width, self.height),
            aggro_range: self.aggro_range,
            attack_cooldown: self.attack_cooldown,
            turn_chance: self.turn_chance,
            swing_damage: self.swing_damage,
        }
    }
}

/// Resource holding all loaded enemy definitions.
#[derive(Resource, Default, Debug)]
pub struct EnemyRegistry {
    pub definitions: HashMap<EnemyKind, EnemyDefinition>,
}

impl EnemyRegistry {
    pub fn from_ron(source: &str) -> Result<Self, DataLoadError> {
        let definitions: Vec<EnemyDefinition> =
            ron::from_str(source).map_err(|e| DataLoadError::ParseError {
                path: ENEMIES_PATH.to_string(),
                details: e.to_string(),
            })?;

        Ok(Self {
            definitions: definitions
                .into_iter()
                .map(|definition| (definition.kind, definition))
                .collect(),
        })
    }

    /// Registry built from the enemy file compiled into the binary.
    pub fn load_embedded() -> Self {
        match Self::from_ron(ENEMIES_RON) {
            Ok(registry) => {
                for definition in registry.definitions.values() {
                    info!("Loaded enemy definition: {} ({:?})", definition.name, definition.kind);
                }
                registry
            }
            Err(e) => {
                error!("{}", e);
                Self::default()
            }
        }
    }

    /// Get an enemy definition by kind.
    pub fn get(&self, kind: EnemyKind) -> Result<&EnemyDefinition, DataLoadError> {
        self.definitions
            .get(&kind)
            .ok_or_else(|| DataLoadError::MissingDefinition(format!("{:?}", kind)))
    }
}
