//! Particle bursts.
//!
//! Triggering a [`ParticleBurst`] spawns `amount` particles at a point. Each
//! particle is an entity with [`Particle`], [`RigidBody`] (its velocity),
//! [`Ttl`] (its lifetime) and [`MapPosition`]; the regular movement and ttl
//! systems take it from there.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Vector2};
use std::f32::consts::TAU;

use crate::components::mapposition::MapPosition;
use crate::components::particle::Particle;
use crate::components::rigidbody::RigidBody;
use crate::components::ttl::Ttl;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Fast orange/yellow debris flying in every direction.
    Explosion,
    /// Slow gray puffs drifting upwards.
    Smoke,
    /// Pale yellow sparks.
    Sparkles,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct ParticleBurst {
    pub kind: ParticleKind,
    pub position: Vector2,
    pub amount: usize,
}

/// Initial state of one particle.
#[derive(Debug, Clone, Copy)]
pub struct ParticleSpawn {
    pub velocity: Vector2,
    pub lifetime: f32,
    pub color: Color,
}

fn range(rng: &mut fastrand::Rng, min: f32, max: f32) -> f32 {
    min + rng.f32() * (max - min)
}

fn polar(angle: f32, speed: f32) -> Vector2 {
    Vector2 {
        x: angle.cos() * speed,
        y: angle.sin() * speed,
    }
}

impl ParticleKind {
    /// Roll the velocity, lifetime and color of one particle of this kind.
    pub fn roll(self, rng: &mut fastrand::Rng) -> ParticleSpawn {
        match self {
            ParticleKind::Explosion => ParticleSpawn {
                velocity: polar(range(rng, 0.0, TAU), range(rng, 50.0, 150.0)),
                lifetime: range(rng, 0.5, 1.5),
                color: Color::new(255, rng.u8(100..=255), 0, 255),
            },
            ParticleKind::Smoke => {
                let gray = rng.u8(100..=200);
                ParticleSpawn {
                    velocity: Vector2 {
                        x: range(rng, -20.0, 20.0),
                        y: range(rng, -50.0, -20.0),
                    },
                    lifetime: range(rng, 1.0, 3.0),
                    color: Color::new(gray, gray, gray, 255),
                }
            }
            ParticleKind::Sparkles => ParticleSpawn {
                velocity: polar(range(rng, 0.0, TAU), range(rng, 30.0, 100.0)),
                lifetime: range(rng, 0.3, 1.0),
                color: Color::new(255, 255, rng.u8(100..=255), 255),
            },
        }
    }
}

/// Spawns the particles of a [`ParticleBurst`].
pub fn spawn_particle_burst(
    trigger: On<ParticleBurst>,
    mut commands: Commands,
    mut rng: Local<fastrand::Rng>,
) {
    let burst = trigger.event();
    for _ in 0..burst.amount {
        let spawn = burst.kind.roll(&mut rng);
        commands.spawn((
            MapPosition {
                pos: burst.position,
            },
            RigidBody::with_velocity(spawn.velocity),
            Particle::new(spawn.color),
            Ttl::new(spawn.lifetime),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speed(v: Vector2) -> f32 {
        (v.x * v.x + v.y * v.y).sqrt()
    }

    #[test]
    fn test_explosion_ranges() {
        let mut rng = fastrand::Rng::with_seed(1);
        for _ in 0..200 {
            let p = ParticleKind::Explosion.roll(&mut rng);
            let s = speed(p.velocity);
            assert!((50.0 - 1e-3..=150.0 + 1e-3).contains(&s));
            assert!((0.5..=1.5).contains(&p.lifetime));
            assert_eq!((p.color.r, p.color.b), (255, 0));
            assert!(p.color.g >= 100);
        }
    }

    #[test]
    fn test_smoke_drifts_up_and_is_gray() {
        let mut rng = fastrand::Rng::with_seed(2);
        for _ in 0..200 {
            let p = ParticleKind::Smoke.roll(&mut rng);
            assert!((-20.0..=20.0).contains(&p.velocity.x));
            assert!((-50.0..=-20.0).contains(&p.velocity.y));
            assert!((1.0..=3.0).contains(&p.lifetime));
            assert_eq!(p.color.r, p.color.g);
            assert_eq!(p.color.g, p.color.b);
            assert!((100..=200).contains(&p.color.r));
        }
    }

    #[test]
    fn test_sparkles_ranges() {
        let mut rng = fastrand::Rng::with_seed(3);
        for _ in 0..200 {
            let p = ParticleKind::Sparkles.roll(&mut rng);
            let s = speed(p.velocity);
            assert!((30.0 - 1e-3..=100.0 + 1e-3).contains(&s));
            assert!((0.3..=1.0).contains(&p.lifetime));
            assert_eq!((p.color.r, p.color.g), (255, 255));
            assert!(p.color.b >= 100);
        }
    }
}
