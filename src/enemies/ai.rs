//! Enemy AI behavior.
//!
//! [`think`] is a pure function over one enemy's state; [`enemy_ai`] runs it
//! for every active enemy and spawns the swings it asks for.

use bevy::prelude::*;
use rand::Rng;

use super::components::{Benched, Enemy, EnemyKind};
use crate::combat::{spawn_attack, Attack, AttackRequest, Facing, Faction, Knockback};
use crate::core::{GameRng, SimContext};
use crate::physics::{step_body, Aabb, Body, Platform};
use crate::player::Player;

/// What an enemy can perceive this tick.
#[derive(Debug, Clone, Copy)]
pub struct Surroundings<'a> {
    /// Centre of the player's body, if there is a player.
    pub player_center: Option<Vec2>,
    pub platforms: &'a [Aabb],
    pub arena_width: f32,
}

/// Advance one enemy by a tick. Returns the attack it wants to start.
pub fn think(
    enemy: &mut Enemy,
    body: &mut Body,
    facing: &mut Facing,
    knockback: &mut Knockback,
    surroundings: &Surroundings,
    rng: &mut impl Rng,
) -> Option<AttackRequest> {
    body.rect.x += knockback.apply();

    let center_x = body.rect.center_x();
    let player_x = surroundings.player_center.map(|center| center.x);
    let in_range = player_x.is_some_and(|x| (x - center_x).abs() < enemy.stats.aggro_range);
    let turn_chance = enemy.stats.turn_chance.clamp(0.0, 1.0);

    let request = match enemy.kind {
        EnemyKind::Bandit => {
            match player_x {
                Some(player_x) if in_range => {
                    *facing = Facing::toward(center_x, player_x);
                    ready_swing(enemy)
                }
                _ => {
                    body.rect.x += enemy.stats.speed * enemy.patrol.sign();
                    *facing = enemy.patrol;
                    if rng.gen_bool(turn_chance) {
                        enemy.patrol = enemy.patrol.flipped();
                    }
                    None
                }
            }
        }
        EnemyKind::Boss => {
            if let Some(player_x) = player_x {
                if rng.gen_bool(turn_chance) {
                    enemy.patrol = Facing::toward(center_x, player_x);
                }
            }
            body.rect.x += enemy.stats.speed * enemy.patrol.sign();
            *facing = enemy.patrol;

            match player_x {
                Some(player_x) if in_range && enemy.cooldown == 0 => {
                    *facing = Facing::toward(body.rect.center_x(), player_x);
                    ready_swing(enemy)
                }
                _ => None,
            }
        }
    };

    body.rect.clamp_x(0.0, surroundings.arena_width);
    step_body(body, surroundings.platforms);

    enemy.cooldown = enemy.cooldown.saturating_sub(1);
    enemy.hit_flash = enemy.hit_flash.saturating_sub(1);
    request
}

fn ready_swing(enemy: &mut Enemy) -> Option<AttackRequest> {
    if enemy.cooldown > 0 {
        return None;
    }
    enemy.cooldown = enemy.stats.attack_cooldown;
    Some(AttackRequest::Swing)
}

/// Run every active enemy's behaviour.
pub fn enemy_ai(
    mut commands: Commands,
    mut rng: ResMut<GameRng>,
    ctx: Res<SimContext>,
    platforms: Query<&Platform>,
    player_query: Query<&Body, (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<
        (Entity, &mut Enemy, &mut Body, &mut Facing, &mut Knockback),
        (Without<Benched>, Without<Player>),
    >,
) {
    let platforms: Vec<Aabb> = platforms.iter().map(|platform| platform.0).collect();
    let surroundings = Surroundings {
        player_center: player_query.get_single().ok().map(|body| body.rect.center()),
        platforms: &platforms,
        arena_width: ctx.arena_width,
    };

    for (entity, mut enemy, mut body, mut facing, mut knockback) in enemy_query.iter_mut() {
        let request = think(
            &mut enemy,
            &mut body,
            &mut facing,
            &mut knockback,
            &surroundings,
            &mut rng.0,
        );

        if let Some(request) = request {
            let attack = Attack::from_request(
                request,
                entity,
                Faction::Enemy,
                *facing,
                &body.rect,
                enemy.stats.swing_damage,
            );
            spawn_attack(&mut commands, attack);
        }
    }
}
