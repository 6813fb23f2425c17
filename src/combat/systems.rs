//! Combat systems - attack advancement, hit resolution and deaths.

use std::collections::HashMap;

use bevy::prelude::*;

use super::attacks::Attack;
use super::components::*;
use super::resolution::{resolve_attack, Combatant, HIT_FLASH_TICKS};
use crate::core::{DeathEvent, HitEvent, ParticleBurst, ParticleKind, SimContext};
use crate::enemies::{Benched, Enemy, Tag};
use crate::physics::Body;
use crate::player::Player;

/// Spawn an attack object and return its entity.
pub fn spawn_attack(commands: &mut Commands, attack: Attack) -> Entity {
    debug!(
        "{:?} attack from {:?} facing {:?}",
        attack.faction, attack.owner, attack.facing
    );
    commands.spawn(attack).id()
}

/// Move every attack one tick and drop the expired ones.
pub fn advance_attacks(
    mut commands: Commands,
    mut attacks: Query<(Entity, &mut Attack)>,
    bodies: Query<&Body>,
) {
    for (entity, mut attack) in attacks.iter_mut() {
        let owner_rect = bodies.get(attack.owner).ok().map(|body| body.rect);
        if !attack.advance(owner_rect.as_ref()) {
            commands.entity(entity).despawn();
        }
    }
}

/// Test every damage-active attack against the opposing side and apply hits.
pub fn resolve_combat(
    mut commands: Commands,
    mut ctx: ResMut<SimContext>,
    mut attacks: Query<(Entity, &mut Attack)>,
    mut fighters: Query<
        (
            Entity,
            &Body,
            &mut Health,
            Option<&Player>,
            Option<&mut Enemy>,
            Option<&mut Knockback>,
        ),
        Without<Benched>,
    >,
    mut hit_events: EventWriter<HitEvent>,
    mut particles: EventWriter<ParticleBurst>,
) {
    let snapshots: Vec<(Entity, Combatant)> = fighters
        .iter()
        .filter_map(|(entity, body, _, player, enemy, _)| match (player, enemy) {
            (Some(player), _) => Some((entity, player.combatant(body.rect))),
            (None, Some(enemy)) => Some((entity, enemy.combatant(body.rect))),
            (None, None) => None,
        })
        .collect();
    let by_entity: HashMap<Entity, Combatant> = snapshots.iter().copied().collect();

    for (attack_entity, mut attack) in attacks.iter_mut() {
        let owner = by_entity.get(&attack.owner).copied();
        let hits = resolve_attack(
            &mut attack,
            owner.as_ref(),
            snapshots.iter().map(|(entity, combatant)| (*entity, combatant)),
        );

        for hit in hits {
            let Ok((_, body, mut health, _, enemy, knockback)) = fighters.get_mut(hit.target) else {
                continue;
            };
            let dealt = health.take_damage(hit.damage);
            let position = body.rect.center();

            if let Some(mut enemy) = enemy {
                enemy.hit_flash = HIT_FLASH_TICKS;
                if let Some(mut knockback) = knockback {
                    knockback.vel_x = hit.knockback;
                }
                ctx.shake(2, 1);
                particles.send(ParticleBurst {
                    origin: position,
                    kind: ParticleKind::Blood,
                    count: 5,
                    direction: hit.knockback.signum(),
                });
            } else if dealt > 0 {
                ctx.shake(3, 1);
            }

            if dealt > 0 {
                hit_events.send(HitEvent {
                    attacker: attack.owner,
                    target: hit.target,
                    damage: dealt,
                    position,
                });
            }
        }

        if !attack.is_alive() {
            commands.entity(attack_entity).despawn();
        }
    }
}

/// Remove enemies whose health has run out.
pub fn despawn_dead_enemies(
    mut commands: Commands,
    enemies: Query<(Entity, &Health, Option<&Tag>), With<Enemy>>,
    mut death_events: EventWriter<DeathEvent>,
) {
    for (entity, health, tag) in enemies.iter() {
        if health.is_dead() {
            let tag = tag.map(|tag| tag.0.clone());
            info!("{} defeated", tag.as_deref().unwrap_or("Enemy"));
            commands.entity(entity).despawn_recursive();
            death_events.send(DeathEvent { entity, tag });
        }
    }
}

/// Drop every attack in flight.
pub fn clear_attacks(mut commands: Commands, attacks: Query<Entity, With<Attack>>) {
    for entity in attacks.iter() {
        commands.entity(entity).despawn();
    }
}
