//! Player-related components.

use bevy::prelude::*;

use super::class::{CharacterClass, ClassStats};
use super::inventory::Inventory;
use crate::combat::{strike_damage, AttackRequest, Combatant};
use crate::physics::Aabb;

/// Player body size in pixels.
pub const PLAYER_SIZE: Vec2 = Vec2::new(51.0, 76.0);
/// Water every run starts with.
pub const STARTING_WATER: u32 = 50;

/// Dash bookkeeping.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashState {
    /// Ticks left in the current dash.
    pub timer: u32,
    /// Ticks until another dash may start.
    pub cooldown: u32,
    /// Horizontal dash speed, decaying each tick.
    pub vel: f32,
}

impl DashState {
    pub fn is_dashing(&self) -> bool {
        self.timer > 0
    }
}

/// The player character: class stats, resources and every timer the
/// controller advances each tick.
#[derive(Component, Debug, Clone)]
pub struct Player {
    pub stats: ClassStats,
    /// Current strike bonus, raised by Strength potions.
    pub attack_bonus: i32,
    /// Knockback multiplier, raised by Knockback potions.
    pub knockback_boost: f32,
    pub inventory: Inventory,
    pub water: u32,
    /// Smoothed horizontal velocity.
    pub vel_x: f32,
    pub attack_cooldown: u32,
    pub dash: DashState,
    pub invulnerable: u32,
    pub cast_timer: u32,
    pub strength_timer: u32,
    pub knockback_timer: u32,
    pub land_recovery: u32,
    /// Jump input state last tick, so holding jump never re-triggers.
    pub jump_latched: bool,
    pub jump_count: u32,
    pub was_grounded: bool,
    pub walk_phase: u32,
}

impl Player {
    pub fn new(stats: ClassStats) -> Self {
        Self {
            attack_bonus: stats.attack_bonus,
            stats,
            knockback_boost: 1.0,
            inventory: Inventory::default(),
            water: STARTING_WATER,
            vel_x: 0.0,
            attack_cooldown: 0,
            dash: DashState::default(),
            invulnerable: 0,
            cast_timer: 0,
            strength_timer: 0,
            knockback_timer: 0,
            land_recovery: 0,
            jump_latched: false,
            jump_count: 0,
            was_grounded: false,
            walk_phase: 0,
        }
    }

    pub fn class(&self) -> CharacterClass {
        self.stats.class
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable > 0
    }

    /// Snapshot used by hit resolution.
    pub fn combatant(&self, rect: Aabb) -> Combatant {
        Combatant::player(rect, self.attack_bonus, self.knockback_boost, self.is_invulnerable())
    }

    /// Damage an attack of this kind would deal right now.
    pub fn strike_damage(&self, rect: Aabb, request: AttackRequest) -> i32 {
        strike_damage(&self.combatant(rect), request == AttackRequest::Bolt)
    }
}
