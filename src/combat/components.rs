//! Combat-related components.

use bevy::prelude::*;

/// Component for entities that can take damage.
///
/// `current` never leaves `0..=maximum`; an entity is dead at exactly 0.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
    pub maximum: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self {
            current: max,
            maximum: max,
        }
    }

    /// Remove up to `amount` health and return how much was removed.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let actual = amount.clamp(0, self.current);
        self.current -= actual;
        actual
    }

    /// Restore up to `amount` health and return how much was restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let actual = amount.clamp(0, self.maximum - self.current);
        self.current += actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}

/// Horizontal direction an entity faces.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1 for left, +1 for right.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    /// Facing from `from_x` toward `to_x`. Ties face right.
    pub fn toward(from_x: f32, to_x: f32) -> Self {
        if to_x < from_x {
            Facing::Left
        } else {
            Facing::Right
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }
}

/// Horizontal velocity imparted by hits, decaying every tick.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Knockback {
    pub vel_x: f32,
}

impl Knockback {
    pub const FRICTION: f32 = 0.90;

    /// Decay the velocity and return the displacement for this tick.
    pub fn apply(&mut self) -> f32 {
        self.vel_x *= Self::FRICTION;
        self.vel_x
    }
}

/// Which side an entity fights on. Attacks only hit the opposing faction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Faction {
    Player,
    Enemy,
}

impl Faction {
    pub fn is_hostile_to(self, other: Faction) -> bool {
        self != other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_stays_in_bounds() {
        let mut health = Health::new(60);
        assert_eq!(health.take_damage(22), 22);
        assert_eq!(health.current, 38);
        assert_eq!(health.take_damage(100), 38);
        assert_eq!(health.current, 0);
        assert!(health.is_dead());

        assert_eq!(health.heal(500), 60);
        assert_eq!(health.current, 60);
        assert_eq!(health.take_damage(-5), 0);
    }

    #[test]
    fn knockback_decays_before_moving() {
        let mut knockback = Knockback { vel_x: 8.0 };
        let dx = knockback.apply();
        assert!((dx - 7.2).abs() < 1e-5);
        assert!((knockback.vel_x - 7.2).abs() < 1e-5);
    }

    #[test]
    fn facing_toward_target() {
        assert_eq!(Facing::toward(100.0, 50.0), Facing::Left);
        assert_eq!(Facing::toward(100.0, 150.0), Facing::Right);
        assert_eq!(Facing::Left.flipped(), Facing::Right);
        assert_eq!(Facing::Left.sign(), -1.0);
    }
}
