//! Cosmetic particle effects.
//!
//! Purely visual, transient state. Nothing here feeds back into gameplay;
//! a presentation layer reads the particle list, the simulation only
//! spawns, advances, and prunes it.

use glam::DVec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// What spawned a burst, for presentation-side coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BurstKind {
    /// An entity was eliminated
    Explosion,
    /// A projectile struck an entity
    Hit,
    /// A projectile struck a platform
    Impact,
}

/// One burst particle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub size: f64,
    /// Remaining lifetime in ticks
    pub life: u32,
    /// Initial lifetime, for fade-out rendering
    pub max_life: u32,
    pub kind: BurstKind,
}

/// Particles per burst.
const BURST_COUNT: usize = 15;

/// Spawn a radial burst of particles at a point.
pub fn spawn_burst(particles: &mut Vec<Particle>, rng: &mut Pcg32, pos: DVec2, kind: BurstKind) {
    for i in 0..BURST_COUNT {
        let angle = (i as f64 / BURST_COUNT as f64) * std::f64::consts::TAU;
        let speed = rng.random_range(2.0..5.0);
        let life = rng.random_range(20..=40);
        particles.push(Particle {
            pos,
            vel: DVec2::new(angle.cos() * speed, angle.sin() * speed),
            size: rng.random_range(3.0..=8.0),
            life,
            max_life: life,
            kind,
        });
    }
}

/// Advance and prune all particles by one tick.
pub fn update(particles: &mut Vec<Particle>) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel;
        particle.life = particle.life.saturating_sub(1);
    }
    particles.retain(|p| p.life > 0);
}
