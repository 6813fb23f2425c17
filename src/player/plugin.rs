//! Player plugin - runs the controller each tick and handles the potion key.

use bevy::prelude::*;

use super::class::{ClassRegistry, ClassStats};
use super::components::*;
use crate::combat::{spawn_attack, Attack, Facing, Faction, Health};
use crate::core::{Action, GameState, ParticleBurst, ParticleKind, SimContext, SimSet};
use crate::physics::{Aabb, Body, Platform};

/// How long the potion message pauses the game.
pub const POTION_MESSAGE_TICKS: u32 = 72;

/// Player plugin - handles the class registry, potions and movement.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClassRegistry::load_embedded())
            .add_systems(
                FixedUpdate,
                (quick_potion, player_update).chain().in_set(SimSet::Player),
            );
    }
}

/// Components of a freshly spawned player with its top-left corner at `position`.
pub fn player_bundle(stats: ClassStats, position: Vec2) -> (Player, Body, Health, Facing) {
    let health = Health::new(stats.max_health);
    (
        Player::new(stats),
        Body::new(Aabb::new(position.x, position.y, PLAYER_SIZE.x, PLAYER_SIZE.y)),
        health,
        Facing::Right,
    )
}

/// Advance the player and spawn whatever it asked for.
pub fn player_update(
    mut commands: Commands,
    mut ctx: ResMut<SimContext>,
    input: Res<ButtonInput<Action>>,
    platforms: Query<&Platform>,
    mut players: Query<(Entity, &mut Player, &mut Body, &mut Facing)>,
    mut particles: EventWriter<ParticleBurst>,
) {
    let platforms: Vec<Aabb> = platforms.iter().map(|platform| platform.0).collect();

    for (entity, mut player, mut body, mut facing) in players.iter_mut() {
        let report = player.tick(&input, &mut body, &mut facing, &platforms, ctx.arena_width);

        if report.landed {
            particles.send(ParticleBurst {
                origin: Vec2::new(body.rect.center_x(), body.rect.bottom()),
                kind: ParticleKind::Dust,
                count: 3,
                direction: 0.0,
            });
        }

        if report.dashed {
            ctx.shake(3, 2);
        }

        if let Some(request) = report.attack {
            let damage = player.strike_damage(body.rect, request);
            let attack = Attack::from_request(
                request,
                entity,
                Faction::Player,
                *facing,
                &body.rect,
                damage,
            );
            if attack.is_projectile() {
                let hand = Vec2::new(
                    body.rect.center_x() + facing.sign() * body.rect.width / 2.0,
                    body.rect.center_y() - 10.0,
                );
                particles.send(ParticleBurst {
                    origin: hand,
                    kind: ParticleKind::Spark,
                    count: 6,
                    direction: facing.sign(),
                });
            }
            spawn_attack(&mut commands, attack);
        }
    }
}

/// Drink a potion when the potion key is pressed. Outside a duel the most
/// useful one is picked, inside a duel only a Health potion.
fn quick_potion(
    mut ctx: ResMut<SimContext>,
    input: Res<ButtonInput<Action>>,
    state: Res<State<GameState>>,
    mut players: Query<(&mut Player, &mut Health)>,
) {
    if !input.just_pressed(Action::UsePotion) {
        return;
    }

    let Ok((mut player, mut health)) = players.get_single_mut() else {
        return;
    };

    let drunk = if *state.get() == GameState::Duel {
        player.duel_use_potion(&mut health)
    } else {
        player.quick_use_potion(&mut health)
    };
    match drunk {
        Some(kind) => info!("You used a {} potion!", kind),
        None => info!("No potions."),
    }
    ctx.hold(POTION_MESSAGE_TICKS);
}
