//! Per-playthrough simulation context.
//!
//! Everything the simulation shares across entities (tick counter, camera,
//! screen shake, scripted holds, arena bounds, randomness) lives here instead
//! of in process-wide globals.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::physics::SCREEN_WIDTH;
use crate::world::LEVEL_WIDTH;

/// How quickly the camera catches up with the player each tick.
const CAMERA_FOLLOW: f32 = 0.12;

/// Shared simulation state, advanced once per fixed tick.
#[derive(Resource, Debug, Clone)]
pub struct SimContext {
    /// Fixed ticks elapsed since launch.
    pub tick: u64,
    /// Left edge of the visible area in level coordinates.
    pub camera_x: f32,
    /// Remaining ticks of screen shake.
    pub shake_ticks: u32,
    /// Maximum shake offset in pixels.
    pub shake_intensity: i32,
    /// Remaining ticks of a scripted pause; nothing simulates while non-zero.
    pub hold_ticks: u32,
    /// Horizontal extent bodies are clamped to (whole level, or the duel arena).
    pub arena_width: f32,
}

impl Default for SimContext {
    fn default() -> Self {
        Self {
            tick: 0,
            camera_x: 0.0,
            shake_ticks: 0,
            shake_intensity: 0,
            hold_ticks: 0,
            arena_width: LEVEL_WIDTH,
        }
    }
}

impl SimContext {
    /// Start a screen shake. Only overrides a running shake if stronger.
    pub fn shake(&mut self, ticks: u32, intensity: i32) {
        if intensity > self.shake_intensity || self.shake_ticks == 0 {
            self.shake_ticks = ticks;
            self.shake_intensity = intensity;
        }
    }

    /// Freeze the simulation for `ticks` ticks (story screens, messages).
    pub fn hold(&mut self, ticks: u32) {
        self.hold_ticks = self.hold_ticks.max(ticks);
    }

    pub fn is_holding(&self) -> bool {
        self.hold_ticks > 0
    }

    /// Ease the camera toward the player and keep it inside the level.
    pub fn follow(&mut self, target_center_x: f32) {
        let target = target_center_x - SCREEN_WIDTH / 2.0;
        self.camera_x += (target - self.camera_x) * CAMERA_FOLLOW;
        self.camera_x = self
            .camera_x
            .clamp(0.0, (self.arena_width - SCREEN_WIDTH).max(0.0));
    }
}

/// Source of every random decision the simulation makes.
#[derive(Resource)]
pub struct GameRng(pub StdRng);

impl Default for GameRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weaker_shake_does_not_override_stronger() {
        let mut ctx = SimContext::default();
        ctx.shake(3, 2);
        ctx.shake(2, 1);
        assert_eq!((ctx.shake_ticks, ctx.shake_intensity), (3, 2));

        ctx.shake_ticks = 0;
        ctx.shake(2, 1);
        assert_eq!((ctx.shake_ticks, ctx.shake_intensity), (2, 1));
    }

    #[test]
    fn camera_stays_inside_level() {
        let mut ctx = SimContext::default();
        for _ in 0..200 {
            ctx.follow(0.0);
        }
        assert_eq!(ctx.camera_x, 0.0);

        for _ in 0..500 {
            ctx.follow(LEVEL_WIDTH);
        }
        assert!((ctx.camera_x - (LEVEL_WIDTH - SCREEN_WIDTH)).abs() < 1e-3);
    }

    #[test]
    fn hold_keeps_longest_request() {
        let mut ctx = SimContext::default();
        ctx.hold(100);
        ctx.hold(20);
        assert_eq!(ctx.hold_ticks, 100);
        assert!(ctx.is_holding());
    }
}
