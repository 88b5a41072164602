//! Particle effects for jumps, coin pickups and wins.
//!
//! Bursts are created by gameplay events; integration runs on its own fixed
//! ~16ms tick, independent of the frame loop. Ids are monotonic and never
//! reused so render keys stay stable across rapid creation and pruning.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::{PARTICLE_DECAY, PARTICLE_GRAVITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Jump,
    Coin,
    Win,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Starts at 1.0, decays by a fixed step per tick; pruned at <= 0
    pub life: f32,
    pub kind: ParticleKind,
}

#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    pub particles: Vec<Particle>,
    next_id: u64,
}

impl ParticleSystem {
    /// Emit a burst at `origin`: 8 particles for coin pickups, 5 otherwise.
    pub fn burst(&mut self, rng: &mut Pcg32, origin: Vec2, kind: ParticleKind) {
        let count = if kind == ParticleKind::Coin { 8 } else { 5 };
        for _ in 0..count {
            self.next_id += 1;
            let vel = Vec2::new(
                (rng.random::<f32>() - 0.5) * 4.0,
                -rng.random::<f32>() * 3.0 - 1.0,
            );
            self.particles.push(Particle {
                id: self.next_id,
                pos: origin,
                vel,
                life: 1.0,
                kind,
            });
        }
    }

    /// One fixed integration step: move, pull down, decay, prune.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;
            p.vel.y += PARTICLE_GRAVITY;
            p.life -= PARTICLE_DECAY;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    /// Drop everything and restart the id sequence.
    pub fn reset(&mut self) {
        self.particles.clear();
        self.next_id = 0;
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
