//! Platformer state and core types.

use std::collections::HashSet;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::{PLAYER_SIZE, PLAYER_SPAWN_X, PLAYER_SPAWN_Y, STARTING_LIVES};
use super::input::HeldKeys;
use super::level::{self, builtin_levels, Level};
use super::particles::ParticleSystem;

/// Overall run status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
    Win,
}

/// The player's kinematic state. The bounding box is a `PLAYER_SIZE` square
/// anchored at `pos` (top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Player {
    /// Fresh player at the spawn point.
    pub fn spawn() -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            vel: Vec2::ZERO,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(PLAYER_SIZE / 2.0)
    }
}

/// Complete platformer engine state. The view layer reads this directly as
/// its per-frame snapshot.
#[derive(Debug, Clone)]
pub struct Platformer {
    /// Immutable level definitions, 1-based indexing via `current_level`
    pub levels: Vec<Level>,
    pub player: Player,
    pub grounded: bool,
    pub score: u32,
    pub lives: u32,
    pub current_level: u32,
    pub status: GameStatus,
    /// Per-level progress; ids are never removed within a level
    pub collected_coins: HashSet<String>,
    pub unlocked_gates: HashSet<String>,
    /// Id of the gate whose quiz modal is open. While set, the frame loop
    /// and jump input are suspended.
    pub open_gate: Option<String>,
    pub particles: ParticleSystem,
    pub(crate) held: HeldKeys,
    pub(crate) rng: Pcg32,
}

impl Platformer {
    /// Engine with the builtin two-level campaign.
    pub fn new(seed: u64) -> Self {
        Self::with_levels(seed, builtin_levels())
    }

    /// Engine over a custom level pack. An empty pack falls back to the
    /// builtin campaign rather than leaving the engine without geometry.
    pub fn with_levels(seed: u64, levels: Vec<Level>) -> Self {
        let levels = if levels.is_empty() { builtin_levels() } else { levels };
        Self {
            levels,
            player: Player::spawn(),
            grounded: false,
            score: 0,
            lives: STARTING_LIVES,
            current_level: 1,
            status: GameStatus::Playing,
            collected_coins: HashSet::new(),
            unlocked_gates: HashSet::new(),
            open_gate: None,
            particles: ParticleSystem::default(),
            held: HeldKeys::default(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// The current level, falling back to level 1 for out-of-range numbers.
    pub fn level(&self) -> &Level {
        level::level_or_first(&self.levels, self.current_level)
    }

    /// Whether a quiz modal is currently open.
    pub fn modal_open(&self) -> bool {
        self.open_gate.is_some()
    }
}
