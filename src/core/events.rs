//! Global events used for cross-system communication.
//!
//! The simulation reports what happened during a tick through these events so
//! presentation systems can react without re-deriving game logic.

use bevy::prelude::*;

/// Sent when an attack lands on a target and deals damage.
#[derive(Event, Debug, Clone)]
pub struct HitEvent {
    /// Entity that owns the attack
    pub attacker: Entity,
    /// Entity that was hit
    pub target: Entity,
    /// Health actually removed
    pub damage: i32,
    /// Centre of the target when it was hit
    pub position: Vec2,
}

/// Sent when an enemy's health reaches 0 and it leaves the roster.
#[derive(Event, Debug, Clone)]
pub struct DeathEvent {
    pub entity: Entity,
    /// Narrative label of the fallen enemy, if it had one
    pub tag: Option<String>,
}

/// Cosmetic particle kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Blue puff under the player's feet on landing
    Dust,
    /// Cyan flash at the Mage's hand when a bolt is released
    Spark,
    /// Red spray from a damaged enemy
    Blood,
}

/// Request for a burst of cosmetic particles.
#[derive(Event, Debug, Clone, Copy)]
pub struct ParticleBurst {
    pub origin: Vec2,
    pub kind: ParticleKind,
    pub count: u32,
    /// Facing of the emitter, biases the spray direction
    pub direction: f32,
}
