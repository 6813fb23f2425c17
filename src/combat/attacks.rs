//! Attack objects: melee swings and magic bolts.
//!
//! An attack is a short-lived entity that owns its hit rectangle and remembers
//! every target it has already struck, so a single attack can never hit the
//! same entity twice.

use std::collections::HashSet;

use bevy::prelude::*;

use super::components::{Facing, Faction};
use crate::physics::Aabb;

/// Timing and geometry of a melee sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwingProfile {
    /// Total lifetime in ticks.
    pub lifetime: u32,
    /// First elapsed tick that can deal damage.
    pub active_start: u32,
    /// Last elapsed tick that can deal damage.
    pub active_end: u32,
    /// Sweep start angle in degrees when facing right.
    pub start_angle: f32,
    /// Sweep end angle in degrees when facing right.
    pub end_angle: f32,
    /// Blade surface before rotation.
    pub blade: Vec2,
    /// Gap between the owner's edge and the pivot.
    pub reach: f32,
}

impl SwingProfile {
    /// Wide overhead arc used by every melee fighter.
    pub const OVERHEAD: SwingProfile = SwingProfile {
        lifetime: 22,
        active_start: 7,
        active_end: 16,
        start_angle: -160.0,
        end_angle: 10.0,
        blade: Vec2::new(195.0, 38.0),
        reach: 32.0,
    };
}

pub const BOLT_SPEED: f32 = 14.0;
pub const BOLT_LIFETIME: u32 = 30;
pub const BOLT_SIZE: Vec2 = Vec2::new(19.0, 12.0);
/// Gap between the caster's edge and the bolt's centre.
pub const BOLT_OFFSET: f32 = 10.0;

/// What an entity asked to spawn this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackRequest {
    Swing,
    Bolt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swing {
    pub profile: SwingProfile,
    pub remaining: u32,
    /// Current blade angle in degrees, mirrored when facing left.
    pub angle: f32,
    pivot: Vec2,
}

impl Swing {
    pub fn elapsed(&self) -> u32 {
        self.profile.lifetime - self.remaining
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bolt {
    pub vel_x: f32,
    pub remaining: u32,
    /// Set once the bolt has struck something.
    pub spent: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttackKind {
    Swing(Swing),
    Bolt(Bolt),
}

/// A live attack object.
#[derive(Component, Debug, Clone)]
pub struct Attack {
    pub owner: Entity,
    pub faction: Faction,
    /// Facing of the owner when the attack started.
    pub facing: Facing,
    pub rect: Aabb,
    /// Damage used if the owner is gone by the time the attack connects.
    pub fallback_damage: i32,
    pub kind: AttackKind,
    did_hit: HashSet<Entity>,
}

impl Attack {
    pub fn swing(
        owner: Entity,
        faction: Faction,
        facing: Facing,
        owner_rect: &Aabb,
        fallback_damage: i32,
    ) -> Self {
        let profile = SwingProfile::OVERHEAD;
        let pivot = swing_pivot(&profile, owner_rect, facing);
        let angle = sweep_angle(&profile, facing, 0);
        Self {
            owner,
            faction,
            facing,
            rect: Aabb::rotated_bounds(pivot, profile.blade, angle),
            fallback_damage,
            kind: AttackKind::Swing(Swing {
                profile,
                remaining: profile.lifetime,
                angle,
                pivot,
            }),
            did_hit: HashSet::new(),
        }
    }

    pub fn bolt(
        owner: Entity,
        faction: Faction,
        facing: Facing,
        owner_rect: &Aabb,
        fallback_damage: i32,
    ) -> Self {
        let center = Vec2::new(
            owner_rect.center_x() + facing.sign() * (owner_rect.width / 2.0 + BOLT_OFFSET),
            owner_rect.center_y(),
        );
        Self {
            owner,
            faction,
            facing,
            rect: Aabb::from_center(center, BOLT_SIZE),
            fallback_damage,
            kind: AttackKind::Bolt(Bolt {
                vel_x: BOLT_SPEED * facing.sign(),
                remaining: BOLT_LIFETIME,
                spent: false,
            }),
            did_hit: HashSet::new(),
        }
    }

    pub fn from_request(
        request: AttackRequest,
        owner: Entity,
        faction: Faction,
        facing: Facing,
        owner_rect: &Aabb,
        fallback_damage: i32,
    ) -> Self {
        match request {
            AttackRequest::Swing => Self::swing(owner, faction, facing, owner_rect, fallback_damage),
            AttackRequest::Bolt => Self::bolt(owner, faction, facing, owner_rect, fallback_damage),
        }
    }

    /// Advance one tick. Swings follow their owner while it exists and stay
    /// where they are otherwise. Returns whether the attack is still alive.
    pub fn advance(&mut self, owner_rect: Option<&Aabb>) -> bool {
        match &mut self.kind {
            AttackKind::Swing(swing) => {
                swing.remaining = swing.remaining.saturating_sub(1);
                if let Some(owner_rect) = owner_rect {
                    swing.pivot = swing_pivot(&swing.profile, owner_rect, self.facing);
                }
                swing.angle = sweep_angle(&swing.profile, self.facing, swing.elapsed());
                self.rect = Aabb::rotated_bounds(swing.pivot, swing.profile.blade, swing.angle);
            }
            AttackKind::Bolt(bolt) => {
                self.rect.x += bolt.vel_x;
                bolt.remaining = bolt.remaining.saturating_sub(1);
            }
        }
        self.is_alive()
    }

    pub fn is_alive(&self) -> bool {
        match &self.kind {
            AttackKind::Swing(swing) => swing.remaining > 0,
            AttackKind::Bolt(bolt) => bolt.remaining > 0 && !bolt.spent,
        }
    }

    /// Whether the attack can deal damage this tick.
    pub fn is_damage_active(&self) -> bool {
        match &self.kind {
            AttackKind::Swing(swing) => {
                let elapsed = swing.elapsed();
                swing.remaining > 0
                    && swing.profile.active_start <= elapsed
                    && elapsed <= swing.profile.active_end
            }
            AttackKind::Bolt(_) => self.is_alive(),
        }
    }

    pub fn is_projectile(&self) -> bool {
        matches!(self.kind, AttackKind::Bolt(_))
    }

    pub fn has_hit(&self, target: Entity) -> bool {
        self.did_hit.contains(&target)
    }

    /// Record a strike on `target`. A bolt is spent by its first strike.
    pub fn register_hit(&mut self, target: Entity) {
        self.did_hit.insert(target);
        if let AttackKind::Bolt(bolt) = &mut self.kind {
            bolt.spent = true;
        }
    }

    /// Blade angle for drawing, if this is a swing.
    pub fn angle(&self) -> Option<f32> {
        match &self.kind {
            AttackKind::Swing(swing) => Some(swing.angle),
            AttackKind::Bolt(_) => None,
        }
    }
}

fn swing_pivot(profile: &SwingProfile, owner_rect: &Aabb, facing: Facing) -> Vec2 {
    Vec2::new(
        owner_rect.center_x() + facing.sign() * (owner_rect.width / 2.0 + profile.reach),
        owner_rect.center_y(),
    )
}

fn sweep_angle(profile: &SwingProfile, facing: Facing, elapsed: u32) -> f32 {
    let t = (elapsed as f32 / profile.lifetime as f32).clamp(0.0, 1.0);
    let angle = profile.start_angle + (profile.end_angle - profile.start_angle) * ease_in_out_quad(t);
    angle * facing.sign()
}

fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}
