//! Rapid-fire state and core types.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::questions::{self, Question};
use crate::sched::TimerQueue;

/// Round configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RapidFireConfig {
    /// Round length in seconds
    pub round_time: u32,
    /// Base spawn interval in milliseconds; difficulty shortens it
    pub spawn_interval_ms: u64,
    /// Maximum simultaneously alive targets
    pub max_targets: usize,
}

impl Default for RapidFireConfig {
    fn default() -> Self {
        Self {
            round_time: 30,
            spawn_interval_ms: 1000,
            max_targets: 1,
        }
    }
}

/// Fixed 8-point layout targets spawn on, in play-area percent.
pub const SPAWN_GRID: [(f32, f32); 8] = [
    (8.0, 12.0),
    (50.0, 10.0),
    (85.0, 14.0),
    (20.0, 40.0),
    (65.0, 44.0),
    (45.0, 70.0),
    (80.0, 75.0),
    (12.0, 75.0),
];

/// A transient clickable question popup.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub id: u64,
    pub prompt: String,
    /// Shuffled permutation of the question's choices; contains `answer`
    /// exactly once.
    pub choices: Vec<String>,
    pub answer: String,
    /// Position in play-area percent
    pub pos: Vec2,
    pub lifetime_ms: u64,
    pub created_at_ms: u64,
}

impl Target {
    /// Whether the target has outlived its lifetime at `now_ms`.
    pub fn expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.created_at_ms) >= self.lifetime_ms
    }
}

/// Timers the round scheduler juggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundTimer {
    /// Spawn-if-capacity; period shrinks with difficulty
    Spawn,
    /// 1 Hz round countdown
    Countdown,
    /// Expired-target sweep
    Sweep,
}

/// Complete rapid-fire engine state (deterministic for a given seed and
/// input sequence). The view layer reads this directly as its per-tick
/// snapshot.
#[derive(Debug, Clone)]
pub struct RapidFire {
    pub config: RapidFireConfig,
    pub questions: Vec<Question>,
    /// Alive targets, oldest first; the last element is the newest spawn.
    pub targets: Vec<Target>,
    pub score: u32,
    pub combo: u32,
    /// Clamped to [DIFFICULTY_MIN, DIFFICULTY_MAX]
    pub difficulty: f32,
    /// Seconds remaining; reaches exactly 0 and stops
    pub time_left: u32,
    pub running: bool,
    pub(crate) timers: TimerQueue<RoundTimer>,
    pub(crate) rng: Pcg32,
    pub(crate) next_id: u64,
}

impl RapidFire {
    /// Engine with default config and the builtin arithmetic pool.
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, RapidFireConfig::default(), questions::rapid_fire_pool())
    }

    pub fn with_config(seed: u64, config: RapidFireConfig, questions: Vec<Question>) -> Self {
        let time_left = config.round_time;
        Self {
            config,
            questions,
            targets: Vec::new(),
            score: 0,
            combo: 0,
            difficulty: crate::consts::DIFFICULTY_MIN,
            time_left,
            running: false,
            timers: TimerQueue::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1000,
        }
    }

    /// Allocate the next target id (monotonic, never reused).
    pub(crate) fn next_target_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
