//! Cosmetic particles with gravity and fade.

use bevy::color::Alpha;
use bevy::prelude::*;
use rand::Rng;

use super::palette::Palette;
use super::plugin::to_world;
use crate::core::{GameRng, ParticleBurst, ParticleKind};

pub const PARTICLE_GRAVITY: f32 = 0.15;
pub const PARTICLE_SIZE: f32 = 4.0;

/// One particle, positioned in screen space.
#[derive(Component, Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    pub vel: Vec2,
    pub life: u32,
    pub max_life: u32,
}

impl Particle {
    /// A particle of `kind` leaving `origin` with a random velocity.
    pub fn random(kind: ParticleKind, origin: Vec2, direction: f32, rng: &mut impl Rng) -> Self {
        let (vel, life) = match kind {
            ParticleKind::Dust => (
                Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=0.5)),
                15,
            ),
            ParticleKind::Spark => (
                Vec2::new(
                    rng.gen_range(-1.5..=1.5) + direction * 0.5,
                    rng.gen_range(-1.0..=-0.2),
                ),
                12,
            ),
            ParticleKind::Blood => (
                Vec2::new(rng.gen_range(-2.0..=2.0), rng.gen_range(-3.0..=-1.0)),
                20,
            ),
        };
        Self {
            position: origin,
            vel,
            life,
            max_life: life,
        }
    }

    /// Advance one tick. Returns whether the particle is still alive.
    pub fn step(&mut self) -> bool {
        self.position += self.vel;
        self.vel.y += PARTICLE_GRAVITY;
        self.life = self.life.saturating_sub(1);
        self.life > 0
    }

    pub fn alpha(&self) -> f32 {
        self.life as f32 / self.max_life as f32
    }
}

pub fn spawn_particles(
    mut commands: Commands,
    mut bursts: EventReader<ParticleBurst>,
    mut rng: ResMut<GameRng>,
    palette: Res<Palette>,
) {
    for burst in bursts.read() {
        let color = Palette::color(match burst.kind {
            ParticleKind::Dust => palette.dust,
            ParticleKind::Spark => palette.spark,
            ParticleKind::Blood => palette.blood,
        });

        for _ in 0..burst.count {
            let particle = Particle::random(burst.kind, burst.origin, burst.direction, &mut rng.0);
            commands.spawn((
                Sprite::from_color(color, Vec2::splat(PARTICLE_SIZE)),
                Transform::from_translation(to_world(particle.position).extend(5.0)),
                particle,
            ));
        }
    }
}

pub fn tick_particles(
    mut commands: Commands,
    mut particles: Query<(Entity, &mut Particle, &mut Sprite, &mut Transform)>,
) {
    for (entity, mut particle, mut sprite, mut transform) in particles.iter_mut() {
        if !particle.step() {
            commands.entity(entity).despawn();
            continue;
        }
        sprite.color.set_alpha(particle.alpha());
        transform.translation = to_world(particle.position).extend(5.0);
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn particles_fall_and_fade_out() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut particle = Particle::random(ParticleKind::Blood, Vec2::new(100.0, 100.0), 1.0, &mut rng);
        assert!(particle.vel.y < 0.0);

        let lived = (0..100).take_while(|_| particle.step()).count();
        assert_eq!(lived, 19);
        assert_eq!(particle.alpha(), 0.0);
    }
}
