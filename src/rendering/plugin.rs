//! Rendering plugin - flat coloured rectangles, a following camera and
//! screen shake.
//!
//! The simulation works in screen coordinates with `y` growing downward.
//! Everything here converts to Bevy's world space, where `y` grows upward.

use bevy::color::Alpha;
use bevy::prelude::*;
use rand::Rng;

use super::palette::Palette;
use super::particles::{spawn_particles, tick_particles};
use crate::combat::{Attack, AttackKind, Facing, Faction, BOLT_SIZE};
use crate::core::{GameRng, SimContext};
use crate::enemies::{Benched, Enemy};
use crate::physics::{Body, Platform, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::player::Player;
use crate::world::Landmark;

const LANDMARK_Z: f32 = -1.0;
const GROUND_Z: f32 = 0.0;
const ENEMY_Z: f32 = 1.0;
const PLAYER_Z: f32 = 2.0;
const ATTACK_Z: f32 = 3.0;

/// Rendering plugin - draws the simulation. Only the binary adds it.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Palette::load())
            .add_systems(Startup, setup_camera)
            .add_systems(FixedUpdate, tick_particles)
            .add_systems(
                Update,
                (
                    decorate_static,
                    decorate_bodies,
                    decorate_attacks,
                    sync_bodies,
                    sync_attacks,
                    spawn_particles,
                    update_camera,
                )
                    .chain(),
            );
    }
}

/// Screen position (y down) to world position (y up).
pub fn to_world(screen: Vec2) -> Vec2 {
    Vec2::new(screen.x, SCREEN_HEIGHT - screen.y)
}

/// Random camera offset of at most `intensity` pixels on each axis.
pub fn shake_offset(rng: &mut impl Rng, intensity: i32) -> Vec2 {
    if intensity <= 0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        rng.gen_range(-intensity..=intensity) as f32,
        rng.gen_range(-intensity..=intensity) as f32,
    )
}

fn setup_camera(mut commands: Commands, palette: Res<Palette>) {
    commands.insert_resource(ClearColor(Palette::color(palette.sky)));
    commands.spawn((
        Camera2d,
        Transform::from_xyz(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0, 100.0),
    ));
}

fn decorate_static(
    mut commands: Commands,
    palette: Res<Palette>,
    platforms: Query<(Entity, &Platform), Added<Platform>>,
    landmarks: Query<(Entity, &Landmark), Added<Landmark>>,
) {
    for (entity, platform) in platforms.iter() {
        commands.entity(entity).insert((
            Sprite::from_color(Palette::color(palette.ground), platform.0.size()),
            Transform::from_translation(to_world(platform.0.center()).extend(GROUND_Z)),
        ));
    }

    for (entity, landmark) in landmarks.iter() {
        let color = match landmark {
            Landmark::Shop(_) => palette.shop,
            Landmark::Portal(_) => palette.portal,
        };
        let rect = landmark.rect();
        commands.entity(entity).insert((
            Sprite::from_color(Palette::color(color), rect.size()),
            Transform::from_translation(to_world(rect.center()).extend(LANDMARK_Z)),
        ));
    }
}

fn decorate_bodies(
    mut commands: Commands,
    palette: Res<Palette>,
    bodies: Query<(Entity, &Body, Option<&Enemy>), Added<Body>>,
) {
    for (entity, body, enemy) in bodies.iter() {
        let color = match enemy {
            Some(enemy) if enemy.is_boss() => palette.boss,
            Some(_) => palette.bandit,
            None => palette.player,
        };
        commands.entity(entity).insert((
            Sprite::from_color(Palette::color(color), body.rect.size()),
            Transform::from_translation(to_world(body.rect.center()).extend(ENEMY_Z)),
        ));
    }
}

fn decorate_attacks(
    mut commands: Commands,
    palette: Res<Palette>,
    attacks: Query<(Entity, &Attack), Added<Attack>>,
) {
    for (entity, attack) in attacks.iter() {
        let (color, size) = match &attack.kind {
            AttackKind::Swing(swing) => {
                let color = match attack.faction {
                    Faction::Player => palette.player_swing,
                    Faction::Enemy => palette.enemy_swing,
                };
                (color, swing.profile.blade)
            }
            AttackKind::Bolt(_) => (palette.bolt, BOLT_SIZE),
        };
        commands.entity(entity).insert((
            Sprite::from_color(Palette::color(color), size),
            Transform::from_translation(to_world(attack.rect.center()).extend(ATTACK_Z)),
        ));
    }
}

#[allow(clippy::type_complexity)]
fn sync_bodies(
    palette: Res<Palette>,
    mut bodies: Query<(
        &Body,
        &Facing,
        &mut Transform,
        &mut Sprite,
        &mut Visibility,
        Option<&Enemy>,
        Option<&Player>,
        Has<Benched>,
    )>,
) {
    for (body, facing, mut transform, mut sprite, mut visibility, enemy, player, benched) in
        bodies.iter_mut()
    {
        let z = if player.is_some() { PLAYER_Z } else { ENEMY_Z };
        transform.translation = to_world(body.rect.center()).extend(z);
        sprite.flip_x = *facing == Facing::Left;
        *visibility = if benched {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };

        if let Some(enemy) = enemy {
            let base = if enemy.is_boss() { palette.boss } else { palette.bandit };
            let color = if enemy.hit_flash > 0 { palette.hit_flash } else { base };
            sprite.color = Palette::color(color);
        }
        if let Some(player) = player {
            let alpha = if player.is_invulnerable() { 0.5 } else { 1.0 };
            sprite.color = Palette::color(palette.player).with_alpha(alpha);
        }
    }
}

fn sync_attacks(mut attacks: Query<(&Attack, &mut Transform)>) {
    for (attack, mut transform) in attacks.iter_mut() {
        transform.translation = to_world(attack.rect.center()).extend(ATTACK_Z);
        if let Some(angle) = attack.angle() {
            transform.rotation = Quat::from_rotation_z(-angle.to_radians());
        }
    }
}

fn update_camera(
    ctx: Res<SimContext>,
    mut rng: ResMut<GameRng>,
    mut cameras: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(mut transform) = cameras.get_single_mut() else {
        return;
    };
    let intensity = if ctx.shake_ticks > 0 { ctx.shake_intensity } else { 0 };
    let offset = shake_offset(&mut rng.0, intensity);
    transform.translation.x = ctx.camera_x + SCREEN_WIDTH / 2.0 + offset.x;
    transform.translation.y = SCREEN_HEIGHT / 2.0 + offset.y;
}
