//! Enemy-related components.

use bevy::prelude::*;
use serde::Deserialize;

use crate::combat::{Combatant, Facing};
use crate::physics::Aabb;

/// Behaviour selector. Bandit and boss share every field and differ only in
/// how they think.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Bandit,
    Boss,
}

/// Enemy stats loaded from RON data files.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyStats {
    pub max_health: i32,
    /// Walking speed in px/tick.
    pub speed: f32,
    pub size: Vec2,
    /// Horizontal centre distance within which the enemy attacks.
    pub aggro_range: f32,
    pub attack_cooldown: u32,
    /// Per-tick chance of changing patrol direction.
    pub turn_chance: f64,
    pub swing_damage: i32,
}

/// An enemy fighter.
#[derive(Component, Debug, Clone)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub stats: EnemyStats,
    /// Direction the enemy walks when not engaging.
    pub patrol: Facing,
    pub cooldown: u32,
    pub hit_flash: u32,
}

impl Enemy {
    pub fn new(kind: EnemyKind, stats: EnemyStats) -> Self {
        Self {
            kind,
            stats,
            patrol: Facing::Right,
            cooldown: 0,
            hit_flash: 0,
        }
    }

    pub fn is_boss(&self) -> bool {
        self.kind == EnemyKind::Boss
    }

    /// Snapshot used by hit resolution.
    pub fn combatant(&self, rect: Aabb) -> Combatant {
        Combatant::enemy(rect, self.stats.swing_damage)
    }
}

/// Narrative label, e.g. "Bandit 3" or "Bandit King".
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Tag(pub String);

/// Enemies sitting out a duel they are not part of. Benched enemies neither
/// think, fight nor render.
#[derive(Component, Debug, Default)]
pub struct Benched;
