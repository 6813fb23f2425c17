//! Hit resolution between attack objects and combatants.
//!
//! This is pure logic over snapshots so it can be tested without a world;
//! the systems in `systems.rs` build the snapshots and apply the results.

use bevy::prelude::*;

use super::attacks::Attack;
use super::components::Faction;
use crate::physics::Aabb;

/// Base damage of any player attack before bonuses.
pub const PLAYER_BASE_DAMAGE: i32 = 16;
/// Extra damage a projectile deals on top of the owner's strike.
pub const PROJECTILE_BONUS: i32 = 4;
/// Horizontal speed given to a struck enemy before boosts.
pub const KNOCKBACK_SPEED: f32 = 8.0;
pub const HIT_FLASH_TICKS: u32 = 8;

/// Everything resolution needs to know about one fighter this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Combatant {
    pub faction: Faction,
    pub rect: Aabb,
    /// Hits land but deal no damage while set.
    pub invulnerable: bool,
    /// Damage this fighter's melee strikes deal.
    pub strike: i32,
    pub knockback_boost: f32,
}

impl Combatant {
    pub fn player(rect: Aabb, attack_bonus: i32, knockback_boost: f32, invulnerable: bool) -> Self {
        Self {
            faction: Faction::Player,
            rect,
            invulnerable,
            strike: PLAYER_BASE_DAMAGE + attack_bonus,
            knockback_boost,
        }
    }

    pub fn enemy(rect: Aabb, swing_damage: i32) -> Self {
        Self {
            faction: Faction::Enemy,
            rect,
            invulnerable: false,
            strike: swing_damage,
            knockback_boost: 1.0,
        }
    }
}

/// Damage an attack from `owner` deals, with or without a projectile.
pub fn strike_damage(owner: &Combatant, projectile: bool) -> i32 {
    if projectile {
        owner.strike + PROJECTILE_BONUS
    } else {
        owner.strike
    }
}

/// One registered strike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub target: Entity,
    /// 0 when the target was invulnerable.
    pub damage: i32,
    /// Signed horizontal velocity to give the target. Only enemies are knocked back.
    pub knockback: f32,
}

/// Test `attack` against every candidate and register the strikes it lands.
///
/// The owner may be gone; its snapshot is then `None` and the attack's
/// fallback damage applies. A projectile stops after its first strike.
pub fn resolve_attack<'a>(
    attack: &mut Attack,
    owner: Option<&Combatant>,
    candidates: impl IntoIterator<Item = (Entity, &'a Combatant)>,
) -> Vec<Hit> {
    let mut hits = Vec::new();
    if !attack.is_damage_active() {
        return hits;
    }

    let damage = owner
        .map(|owner| strike_damage(owner, attack.is_projectile()))
        .unwrap_or(attack.fallback_damage);
    let owner_x = owner.map_or(attack.rect.center_x(), |owner| owner.rect.center_x());
    let boost = owner.map_or(1.0, |owner| owner.knockback_boost);

    for (entity, target) in candidates {
        if entity == attack.owner
            || !attack.faction.is_hostile_to(target.faction)
            || attack.has_hit(entity)
            || !attack.rect.overlaps(&target.rect)
        {
            continue;
        }

        attack.register_hit(entity);

        let knockback = match target.faction {
            Faction::Enemy => {
                let dir = if target.rect.center_x() > owner_x { 1.0 } else { -1.0 };
                dir * KNOCKBACK_SPEED * boost
            }
            Faction::Player => 0.0,
        };
        hits.push(Hit {
            target: entity,
            damage: if target.invulnerable { 0 } else { damage },
            knockback,
        });

        if attack.is_projectile() {
            break;
        }
    }

    hits
}
