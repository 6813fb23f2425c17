//! Level layout and spawning.
//!
//! The level is four screens of flat ground with the village shop on the far
//! left, ten bandits spread across the middle, a secret portal and the Bandit
//! King at the far right.

use bevy::prelude::*;
use rand::Rng;

use super::error::DataLoadError;
use crate::combat::{Facing, Health, Knockback};
use crate::enemies::{Enemy, EnemyDefinition, EnemyKind, EnemyRegistry, Tag};
use crate::physics::{Aabb, Body, Platform, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::player::{player_bundle, ClassStats};

pub const LEVEL_WIDTH: f32 = SCREEN_WIDTH * 4.0;
pub const GROUND: Aabb = Aabb::new(0.0, SCREEN_HEIGHT - 40.0, LEVEL_WIDTH, 40.0);
pub const PLAYER_START: Vec2 = Vec2::new(120.0, 520.0);

pub const BANDIT_COUNT: usize = 10;
pub const BANDIT_MIN_X: f32 = SCREEN_WIDTH + 200.0;
pub const BANDIT_MAX_X: f32 = LEVEL_WIDTH - 300.0;
pub const BANDIT_JITTER: i32 = 120;
pub const BANDIT_Y: f32 = SCREEN_HEIGHT - 88.0;
pub const BOSS_START: Vec2 = Vec2::new(LEVEL_WIDTH - 300.0, SCREEN_HEIGHT - 140.0);
pub const BOSS_TAG: &str = "Bandit King";

pub const SHOP_AREA: Aabb = Aabb::new(40.0, SCREEN_HEIGHT - 200.0, 140.0, 160.0);
pub const PORTAL_AREA: Aabb = Aabb::new(LEVEL_WIDTH - 500.0, SCREEN_HEIGHT - 200.0, 60.0, 120.0);
/// Water needed to pass through the portal.
pub const PORTAL_COST: u32 = 50;

/// Interactive areas of the level.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum Landmark {
    Shop(Aabb),
    Portal(Aabb),
}

impl Landmark {
    pub fn rect(&self) -> &Aabb {
        match self {
            Landmark::Shop(rect) | Landmark::Portal(rect) => rect,
        }
    }
}

/// Evenly spaced bandit x positions with random jitter, kept inside the
/// bandit zone.
pub fn bandit_positions(rng: &mut impl Rng) -> Vec<f32> {
    (0..BANDIT_COUNT)
        .map(|i| {
            let t = i as f32 / (BANDIT_COUNT - 1) as f32;
            let base = BANDIT_MIN_X + t * (BANDIT_MAX_X - BANDIT_MIN_X);
            let jitter = rng.gen_range(-BANDIT_JITTER..=BANDIT_JITTER) as f32;
            (base + jitter).floor().clamp(BANDIT_MIN_X, BANDIT_MAX_X)
        })
        .collect()
}

/// Components of an enemy with its top-left corner at `position`.
pub fn enemy_bundle(
    definition: &EnemyDefinition,
    position: Vec2,
) -> (Enemy, Body, Health, Facing, Knockback) {
    let stats = definition.to_stats();
    let rect = Aabb::new(position.x, position.y, stats.size.x, stats.size.y);
    let health = Health::new(stats.max_health);
    (
        Enemy::new(definition.kind, stats),
        Body::new(rect),
        health,
        Facing::Right,
        Knockback::default(),
    )
}

/// Spawn the ground, landmarks, player, bandits and boss. Returns the player.
pub fn spawn_level(
    commands: &mut Commands,
    class_stats: ClassStats,
    enemies: &EnemyRegistry,
    rng: &mut impl Rng,
) -> Result<Entity, DataLoadError> {
    let bandit = enemies.get(EnemyKind::Bandit)?;
    let boss = enemies.get(EnemyKind::Boss)?;

    commands.spawn(Platform(GROUND));
    commands.spawn(Landmark::Shop(SHOP_AREA));
    commands.spawn(Landmark::Portal(PORTAL_AREA));

    info!("Spawning {} at {:?}", class_stats.class.name(), PLAYER_START);
    let player = commands.spawn(player_bundle(class_stats, PLAYER_START)).id();

    for (i, x) in bandit_positions(rng).into_iter().enumerate() {
        commands.spawn((
            enemy_bundle(bandit, Vec2::new(x, BANDIT_Y)),
            Tag(format!("Bandit {}", i + 1)),
        ));
    }

    commands.spawn((enemy_bundle(boss, BOSS_START), Tag(BOSS_TAG.to_string())));

    info!("Level ready: {} bandits and the {}", BANDIT_COUNT, BOSS_TAG);
    Ok(player)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn bandits_stay_near_their_slots() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let positions = bandit_positions(&mut rng);
            assert_eq!(positions.len(), BANDIT_COUNT);
            for (i, x) in positions.iter().enumerate() {
                let slot = BANDIT_MIN_X + i as f32 * (BANDIT_MAX_X - BANDIT_MIN_X) / 9.0;
                assert!((BANDIT_MIN_X..=BANDIT_MAX_X).contains(x));
                assert!((x - slot).abs() <= BANDIT_JITTER as f32 + 1.0);
            }
        }
    }

    #[test]
    fn layout_matches_level_size() {
        assert_eq!(LEVEL_WIDTH, 5120.0);
        assert_eq!(GROUND.top(), 680.0);
        assert_eq!(BANDIT_MIN_X, 1480.0);
        assert_eq!(BANDIT_MAX_X, 4820.0);
        assert_eq!(BOSS_START, Vec2::new(4820.0, 580.0));
        assert_eq!(PORTAL_AREA.x, 4620.0);
    }
}
