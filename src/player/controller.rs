//! Per-tick player update.
//!
//! The controller is a plain method on [`Player`] so it can be driven tick by
//! tick in tests. The ECS system in `plugin.rs` feeds it and turns its
//! [`TickReport`] into attacks, particles and screen shake.

use bevy::prelude::ButtonInput;

use super::class::AttackStyle;
use super::components::Player;
use crate::combat::{AttackRequest, Facing};
use crate::core::Action;
use crate::physics::{is_on_ground, step_body, Aabb, Body};

/// Velocity smoothing factor toward the target speed.
pub const MOVE_SMOOTHING: f32 = 0.15;
pub const DASH_TICKS: u32 = 12;
pub const DASH_COOLDOWN: u32 = 60;
pub const DASH_FRICTION: f32 = 0.92;
pub const ATTACK_COOLDOWN: u32 = 25;
pub const CAST_TICKS: u32 = 10;
/// Cast timer value at which the bolt is released.
pub const CAST_RELEASE: u32 = 4;
pub const LAND_RECOVERY_TICKS: u32 = 5;
pub const BUFF_TICKS: u32 = 120;
pub const WALK_CYCLE: u32 = 30;

/// What happened during one controller tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The player touched down this tick.
    pub landed: bool,
    /// A dash started this tick.
    pub dashed: bool,
    /// Attack object to spawn in front of the player.
    pub attack: Option<AttackRequest>,
}

impl Player {
    /// Advance the player by one tick.
    pub fn tick(
        &mut self,
        input: &ButtonInput<Action>,
        body: &mut Body,
        facing: &mut Facing,
        platforms: &[Aabb],
        arena_width: f32,
    ) -> TickReport {
        let mut report = TickReport::default();

        self.tick_buffs();

        // Horizontal movement, right wins when both are held
        let mut target_vel = 0.0;
        if input.pressed(Action::MoveLeft) {
            target_vel = -self.stats.speed;
            *facing = Facing::Left;
        }
        if input.pressed(Action::MoveRight) {
            target_vel = self.stats.speed;
            *facing = Facing::Right;
        }
        if self.dash.is_dashing() {
            target_vel = 0.0;
        }
        self.vel_x += (target_vel - self.vel_x) * MOVE_SMOOTHING;
        body.rect.x += self.vel_x;

        let grounded = is_on_ground(&body.rect, platforms);
        if grounded && !self.was_grounded {
            self.land_recovery = LAND_RECOVERY_TICKS;
            report.landed = true;
        }
        self.was_grounded = grounded;

        let jump_held = input.pressed(Action::Jump);
        if jump_held && !self.jump_latched && grounded {
            body.vel_y = -self.stats.jump_impulse;
            self.jump_count = 1;
        }
        self.jump_latched = jump_held;

        if input.pressed(Action::Dash) && self.dash.cooldown == 0 && !self.dash.is_dashing() {
            self.dash.timer = DASH_TICKS;
            self.dash.vel = self.stats.dash_strength * facing.sign();
            self.dash.cooldown = DASH_COOLDOWN;
            self.invulnerable = self.stats.dash_invulnerability;
            report.dashed = true;
        }
        if self.dash.is_dashing() {
            body.rect.x += self.dash.vel;
            body.rect.clamp_x(0.0, arena_width);
            self.dash.vel *= DASH_FRICTION;
            self.dash.timer -= 1;
            if self.dash.timer == 0 {
                self.dash.vel = 0.0;
                self.jump_count = 0;
            }
        }

        self.dash.cooldown = self.dash.cooldown.saturating_sub(1);
        self.invulnerable = self.invulnerable.saturating_sub(1);
        self.land_recovery = self.land_recovery.saturating_sub(1);

        if step_body(body, platforms) {
            self.jump_count = 0;
        }

        if input.pressed(Action::Attack) && self.attack_cooldown == 0 {
            match self.stats.attack_style {
                AttackStyle::Cast => {
                    if self.cast_timer == 0 {
                        self.cast_timer = CAST_TICKS;
                        self.attack_cooldown = ATTACK_COOLDOWN;
                    }
                }
                AttackStyle::Melee => {
                    report.attack = Some(AttackRequest::Swing);
                    self.attack_cooldown = ATTACK_COOLDOWN;
                }
            }
        }
        self.attack_cooldown = self.attack_cooldown.saturating_sub(1);

        if self.cast_timer > 0 {
            if self.cast_timer == CAST_RELEASE {
                report.attack = Some(AttackRequest::Bolt);
            }
            self.cast_timer -= 1;
        }

        if self.vel_x.abs() > 0.2 {
            self.walk_phase = (self.walk_phase + 1) % WALK_CYCLE;
        } else {
            self.walk_phase = 0;
        }

        body.rect.clamp_x(0.0, arena_width);
        report
    }

    /// Count down potion buffs, reverting each one in the tick it runs out.
    fn tick_buffs(&mut self) {
        if self.strength_timer > 0 {
            self.strength_timer -= 1;
            if self.strength_timer == 0 {
                self.attack_bonus = self.stats.attack_bonus;
            }
        }
        if self.knockback_timer > 0 {
            self.knockback_timer -= 1;
            if self.knockback_timer == 0 {
                self.knockback_boost = 1.0;
            }
        }
    }
}
