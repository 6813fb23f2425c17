//! Exploration and duels.
//!
//! While exploring, the whole level simulates but attacks are harmless. Getting
//! close to an enemy isolates the two of you in a one-screen arena; the duel
//! ends when one side falls.

use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use super::level::{Landmark, LEVEL_WIDTH, PORTAL_COST};
use crate::combat::{Health, Knockback};
use crate::core::{Ending, GameRng, GameState, Outcome, SimContext};
use crate::enemies::{Benched, Enemy, Tag};
use crate::physics::{Body, SCREEN_WIDTH};
use crate::player::{Player, PotionKind};

/// Centre distances within which an enemy engages.
pub const ENGAGE_DX: f32 = 100.0;
pub const ENGAGE_DY: f32 = 60.0;
/// Where the fighters are placed in the arena.
pub const DUEL_PLAYER_START: Vec2 = Vec2::new(SCREEN_WIDTH / 4.0, 520.0);
pub const DUEL_ENEMY_START: Vec2 = Vec2::new(SCREEN_WIDTH - 300.0, 632.0);
pub const REWARD_BASE_WATER: u32 = 10;
pub const REWARD_BONUS_WATER: u32 = 12;
pub const POTION_DROP_CHANCE: f64 = 0.35;
pub const VICTORY_HEAL: i32 = 30;
/// Pause for story text.
pub const STORY_HOLD_TICKS: u32 = 120;
/// Pause for the victory message.
pub const REWARD_HOLD_TICKS: u32 = 108;

/// The duel in progress, if any.
#[derive(Resource, Debug, Default, Clone)]
pub struct Encounter {
    pub opponent: Option<Entity>,
    pub boss: bool,
    pub tag: Option<String>,
    /// Where the player stood when the duel began.
    pub return_point: Vec2,
}

/// Spoils of a won duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reward {
    pub water: u32,
    pub potion: Option<PotionKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelVerdict {
    Ongoing,
    Won,
    Lost,
}

/// First candidate close enough to engage, in the order given.
pub fn find_engagement(
    player_center: Vec2,
    candidates: impl IntoIterator<Item = (Entity, Vec2)>,
) -> Option<Entity> {
    candidates.into_iter().find_map(|(entity, center)| {
        let close = (player_center.x - center.x).abs() < ENGAGE_DX
            && (player_center.y - center.y).abs() < ENGAGE_DY;
        close.then_some(entity)
    })
}

pub fn roll_reward(rng: &mut impl Rng) -> Reward {
    let water = REWARD_BASE_WATER + rng.gen_range(0..=REWARD_BONUS_WATER);
    let potion = if rng.gen_bool(POTION_DROP_CHANCE) {
        PotionKind::ALL.choose(rng).copied()
    } else {
        None
    };
    Reward { water, potion }
}

/// A fallen player loses even if the opponent fell in the same tick.
pub fn duel_verdict(player_dead: bool, opponent_alive: bool) -> DuelVerdict {
    if player_dead {
        DuelVerdict::Lost
    } else if !opponent_alive {
        DuelVerdict::Won
    } else {
        DuelVerdict::Ongoing
    }
}

/// Step through the portal with enough Water.
pub fn check_portal(
    mut ctx: ResMut<SimContext>,
    mut outcome: ResMut<Outcome>,
    mut next_state: ResMut<NextState<GameState>>,
    landmarks: Query<&Landmark>,
    player_query: Query<(&Body, &Player)>,
) {
    let Ok((body, player)) = player_query.get_single() else {
        return;
    };
    if player.water < PORTAL_COST {
        return;
    }

    let at_portal = landmarks
        .iter()
        .any(|landmark| matches!(landmark, Landmark::Portal(rect) if rect.overlaps(&body.rect)));
    if at_portal {
        info!("A STRANGE PORTAL: a shimmering gateway appears before you.");
        info!("You escape with {} Water to an alternate dimension.", player.water);
        outcome.0 = Some(Ending::Secret);
        ctx.hold(STORY_HOLD_TICKS);
        next_state.set(GameState::Ended);
    }
}

/// Start a duel with the first enemy the player walks into.
pub fn check_engagement(
    mut commands: Commands,
    mut ctx: ResMut<SimContext>,
    mut encounter: ResMut<Encounter>,
    mut next_state: ResMut<NextState<GameState>>,
    mut player_query: Query<&mut Body, (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<
        (Entity, &mut Body, &mut Knockback, &Enemy, Option<&Tag>),
        (Without<Player>, Without<Benched>),
    >,
) {
    if matches!(*next_state, NextState::Pending(_)) {
        return;
    }
    let Ok(mut player_body) = player_query.get_single_mut() else {
        return;
    };

    let mut candidates: Vec<(Entity, Vec2)> = enemy_query
        .iter()
        .map(|(entity, body, ..)| (entity, body.rect.center()))
        .collect();
    // Spawn order, so the leftmost slot wins ties between neighbours.
    candidates.sort_by_key(|(entity, _)| *entity);

    let Some(opponent) = find_engagement(player_body.rect.center(), candidates) else {
        return;
    };

    for (entity, mut body, mut knockback, enemy, tag) in enemy_query.iter_mut() {
        if entity != opponent {
            commands.entity(entity).insert(Benched);
            continue;
        }

        let tag = tag.map(|tag| tag.0.clone());
        if enemy.is_boss() {
            info!("THE BANDIT KING: At last, you face the tyrant! Victory or death awaits.");
        }
        info!("You approach {}!", tag.as_deref().unwrap_or("an enemy"));

        *encounter = Encounter {
            opponent: Some(entity),
            boss: enemy.is_boss(),
            tag,
            return_point: Vec2::new(player_body.rect.x, player_body.rect.y),
        };

        body.rect.move_to(DUEL_ENEMY_START);
        body.vel_y = 0.0;
        knockback.vel_x = 0.0;
    }

    player_body.rect.move_to(DUEL_PLAYER_START);
    player_body.vel_y = 0.0;

    ctx.arena_width = SCREEN_WIDTH;
    ctx.camera_x = 0.0;
    ctx.hold(STORY_HOLD_TICKS);
    next_state.set(GameState::Duel);
}

/// Decide the duel once either side has fallen.
pub fn resolve_duel(
    mut commands: Commands,
    mut ctx: ResMut<SimContext>,
    mut rng: ResMut<GameRng>,
    mut encounter: ResMut<Encounter>,
    mut outcome: ResMut<Outcome>,
    mut next_state: ResMut<NextState<GameState>>,
    mut player_query: Query<(&mut Player, &mut Health, &mut Body)>,
    enemies: Query<Entity, With<Enemy>>,
    benched: Query<Entity, With<Benched>>,
) {
    let Ok((mut player, mut health, mut body)) = player_query.get_single_mut() else {
        return;
    };
    let opponent_alive = encounter
        .opponent
        .is_some_and(|opponent| enemies.contains(opponent));

    match duel_verdict(health.is_dead(), opponent_alive) {
        DuelVerdict::Ongoing => {}
        DuelVerdict::Lost => {
            info!("You were defeated by {}.", encounter.tag.as_deref().unwrap_or("an enemy"));
            outcome.0 = Some(Ending::Bad);
            ctx.hold(STORY_HOLD_TICKS);
            next_state.set(GameState::Ended);
        }
        DuelVerdict::Won => {
            let reward = roll_reward(&mut rng.0);
            player.water += reward.water;
            if let Some(potion) = reward.potion {
                info!("The enemy dropped a {} potion.", potion);
                player.inventory.add(potion);
            }
            health.heal(VICTORY_HEAL);
            info!("Victory! +{} 67 water", reward.water);
            ctx.hold(REWARD_HOLD_TICKS);

            if encounter.boss {
                info!("VICTORY! The Bandit King falls...");
                outcome.0 = Some(Ending::Good);
                next_state.set(GameState::Ended);
            } else {
                for entity in benched.iter() {
                    commands.entity(entity).remove::<Benched>();
                }
                body.rect.move_to(encounter.return_point);
                body.vel_y = 0.0;
                ctx.arena_width = LEVEL_WIDTH;
                next_state.set(GameState::Exploring);
            }
            *encounter = Encounter::default();
        }
    }
}

/// Ease the camera toward the player.
pub fn follow_camera(mut ctx: ResMut<SimContext>, player_query: Query<&Body, With<Player>>) {
    if let Ok(body) = player_query.get_single() {
        ctx.follow(body.rect.center_x());
    }
}
