//! Round scheduling and scoring for the rapid-fire quiz.
//!
//! A round owns three periodic timers (spawn, countdown, sweep) in a
//! `TimerQueue`. `advance_to` drains every timer due at or before the given
//! virtual time; each firing reschedules itself from its own fire time, so
//! cadence is independent of how coarsely the caller advances the clock.

use glam::Vec2;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::consts::{
    COUNTDOWN_MS, DIFFICULTY_MAX, DIFFICULTY_MIN, SPAWN_DIFFICULTY_STEP_MS, SPAWN_FLOOR_MS,
    SWEEP_MS, TARGET_BASE_LIFETIME_MS,
};
use super::state::{RapidFire, RoundTimer, Target, SPAWN_GRID};

impl RapidFire {
    /// Begin a round at virtual time `now_ms`: resets score, combo,
    /// difficulty, countdown and targets, then arms all three timers.
    pub fn start(&mut self, now_ms: u64) {
        self.score = 0;
        self.combo = 0;
        self.difficulty = DIFFICULTY_MIN;
        self.time_left = self.config.round_time;
        self.targets.clear();
        self.running = true;

        self.timers.clear();
        self.timers.schedule(now_ms + self.spawn_interval_ms(), RoundTimer::Spawn);
        self.timers.schedule(now_ms + COUNTDOWN_MS, RoundTimer::Countdown);
        self.timers.schedule(now_ms + SWEEP_MS, RoundTimer::Sweep);

        log::info!(
            "round started: {}s, spawn base {}ms, cap {}",
            self.config.round_time,
            self.config.spawn_interval_ms,
            self.config.max_targets
        );
    }

    /// Halt the round and cancel every pending timer.
    pub fn stop(&mut self) {
        self.running = false;
        self.timers.clear();
    }

    /// Quick reset: clear the board and restore the clock without starting.
    /// Difficulty re-baselines on the next `start`.
    pub fn reset(&mut self) {
        self.targets.clear();
        self.score = 0;
        self.combo = 0;
        self.time_left = self.config.round_time;
    }

    /// Drain all timers due at or before `now_ms`. No-op when stopped
    /// (stopping clears the queue).
    pub fn advance_to(&mut self, now_ms: u64) {
        while let Some((at, timer)) = self.timers.pop_due(now_ms) {
            self.fire(at, timer);
        }
    }

    /// Spawn period under the current difficulty. Recomputed every time the
    /// next spawn is scheduled, so difficulty changes take effect on the
    /// next tick rather than retroactively or only on restart.
    pub fn spawn_interval_ms(&self) -> u64 {
        let shortened =
            self.config.spawn_interval_ms as f32 - self.difficulty * SPAWN_DIFFICULTY_STEP_MS;
        (shortened as i64).max(SPAWN_FLOOR_MS as i64) as u64
    }

    fn fire(&mut self, at: u64, timer: RoundTimer) {
        match timer {
            RoundTimer::Spawn => {
                self.spawn_if_capacity(at);
                if self.running {
                    self.timers.schedule(at + self.spawn_interval_ms(), RoundTimer::Spawn);
                }
            }
            RoundTimer::Countdown => {
                if self.time_left <= 1 {
                    self.time_left = 0;
                    log::info!("round over: score {}, combo {}", self.score, self.combo);
                    self.stop();
                } else {
                    self.time_left -= 1;
                    self.timers.schedule(at + COUNTDOWN_MS, RoundTimer::Countdown);
                }
            }
            RoundTimer::Sweep => {
                // Unanswered targets vanish silently, no penalty
                self.targets.retain(|t| !t.expired(at));
                if self.running {
                    self.timers.schedule(at + SWEEP_MS, RoundTimer::Sweep);
                }
            }
        }
    }

    /// Spawn a target unless the board is at capacity.
    fn spawn_if_capacity(&mut self, now_ms: u64) {
        if self.targets.len() >= self.config.max_targets {
            return;
        }
        let Some(question) = self.questions.choose(&mut self.rng).cloned() else {
            return;
        };

        let mut choices = question.choices;
        choices.shuffle(&mut self.rng);

        let (x, y) = SPAWN_GRID[self.rng.random_range(0..SPAWN_GRID.len())];
        let lifetime_ms = (TARGET_BASE_LIFETIME_MS - self.difficulty * 100.0) as u64
            - self.rng.random_range(0..300);

        let id = self.next_target_id();
        log::debug!("target {id} spawned: \"{}\" for {lifetime_ms}ms", question.prompt);
        self.targets.push(Target {
            id,
            prompt: question.prompt,
            choices,
            answer: question.answer,
            pos: Vec2::new(x, y),
            lifetime_ms,
            created_at_ms: now_ms,
        });
    }

    /// Resolve a choice click on a target. A second click on an
    /// already-removed target is a no-op: the lookup fails.
    pub fn select_choice(&mut self, target_id: u64, choice: &str) {
        let Some(idx) = self.targets.iter().position(|t| t.id == target_id) else {
            return;
        };
        let target = self.targets.remove(idx);

        if choice == target.answer {
            let delta = 10 + self.combo * 2 + (self.difficulty * 3.0).floor() as u32;
            self.score += delta;
            self.combo += 1;
            self.difficulty = (self.difficulty + 0.06).min(DIFFICULTY_MAX);
            log::debug!("target {target_id} correct: +{delta}, combo {}", self.combo);
        } else {
            self.score = self.score.saturating_sub(6);
            self.combo = 0;
            self.difficulty = (self.difficulty - 0.2).max(DIFFICULTY_MIN);
            log::debug!("target {target_id} wrong: score {}", self.score);
        }
    }

    /// Digit keys 1-3 pick the Nth choice of the most recently spawned
    /// target. Missing target or out-of-range ordinal is a no-op.
    pub fn press_digit(&mut self, digit: u8) {
        if !self.running || !(1..=3).contains(&digit) {
            return;
        }
        let Some(target) = self.targets.last() else {
            return;
        };
        let Some(choice) = target.choices.get(digit as usize - 1).cloned() else {
            return;
        };
        let id = target.id;
        self.select_choice(id, &choice);
    }
}
