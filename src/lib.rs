//! Quiz Arcade - headless engines for two educational mini-games
//!
//! Core modules:
//! - `rapidfire`: rapid-fire quiz (timed targets, combo scoring, spawn scheduler)
//! - `platformer`: side-scrolling platformer with quiz gates
//! - `sched`: discrete-event timer queue over virtual milliseconds
//! - `questions`: multiple-choice question records and builtin pools
//!
//! All gameplay logic is deterministic: seeded RNG, virtual time, stable
//! iteration order, no rendering or platform dependencies. The view layer
//! reads engine state by reference each tick and feeds back only discrete
//! intents (choice clicks, start/stop, key down/up edges).

pub mod platformer;
pub mod questions;
pub mod rapidfire;
pub mod sched;

pub use questions::Question;

/// Game configuration constants
pub mod consts {
    // --- Platformer physics (per-frame units, paced by the frame loop) ---

    /// Downward acceleration added to vertical velocity each frame
    pub const GRAVITY: f32 = 0.5;
    /// Vertical velocity applied on jump (negative = up)
    pub const JUMP_FORCE: f32 = -12.0;
    /// Horizontal displacement per held direction key, per frame
    pub const MOVE_SPEED: f32 = 5.0;
    /// Terminal fall speed
    pub const MAX_FALL_SPEED: f32 = 15.0;

    /// Player bounding box (square, anchored top-left)
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Rightmost reachable x for the player's left edge
    pub const WORLD_RIGHT: f32 = 950.0;
    /// y at which the ground plane catches a falling player
    pub const FLOOR_Y: f32 = 360.0;
    /// Spawn point on level entry and restart
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_SPAWN_Y: f32 = 200.0;

    /// Center-to-center pickup distance for coins
    pub const COIN_PICKUP_RADIUS: f32 = 30.0;
    /// Per-axis capture distance for the level goal
    pub const GOAL_CAPTURE: f32 = 30.0;
    /// Lives at the start of a run
    pub const STARTING_LIVES: u32 = 3;

    // --- Particle system (per ~16ms tick) ---

    /// Particle integration period in virtual milliseconds
    pub const PARTICLE_TICK_MS: u64 = 16;
    /// Downward acceleration applied to particles each tick
    pub const PARTICLE_GRAVITY: f32 = 0.2;
    /// Life lost per tick (life starts at 1.0)
    pub const PARTICLE_DECAY: f32 = 0.02;

    // --- Rapid-fire round scheduling (virtual milliseconds) ---

    /// Spawn ticker never fires more often than this
    pub const SPAWN_FLOOR_MS: u64 = 350;
    /// Spawn interval shrinks by this much per difficulty point
    pub const SPAWN_DIFFICULTY_STEP_MS: f32 = 80.0;
    /// Round countdown period
    pub const COUNTDOWN_MS: u64 = 1000;
    /// Expired-target sweep period
    pub const SWEEP_MS: u64 = 150;
    /// Difficulty scalar bounds
    pub const DIFFICULTY_MIN: f32 = 1.0;
    pub const DIFFICULTY_MAX: f32 = 8.0;
    /// Base target lifetime before difficulty and jitter are subtracted
    pub const TARGET_BASE_LIFETIME_MS: f32 = 24000.0;
}
