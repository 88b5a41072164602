//! Per-frame advance: physics integration, collision resolution, pickups,
//! gate interrupts and goal progression.
//!
//! Order within a frame is fixed: horizontal movement, then gravity and
//! vertical integration, then platform/floor resolution, then coin, gate and
//! goal checks. The frame loop is suspended entirely while a quiz modal is
//! open or the run is over.

use glam::Vec2;

use crate::consts::{
    COIN_PICKUP_RADIUS, FLOOR_Y, GOAL_CAPTURE, GRAVITY, JUMP_FORCE, MAX_FALL_SPEED, MOVE_SPEED,
    PLAYER_SIZE, STARTING_LIVES, WORLD_RIGHT,
};
use super::input::{action_for_key, Action};
use super::level::level_or_first;
use super::particles::ParticleKind;
use super::state::{GameStatus, Platformer, Player};

impl Platformer {
    /// Advance one animation frame.
    pub fn frame(&mut self) {
        if self.status != GameStatus::Playing || self.open_gate.is_some() {
            return;
        }

        let level = level_or_first(&self.levels, self.current_level);
        let prev_x = self.player.pos.x;

        // Horizontal movement, clamped to the world span
        if self.held.is_down(Action::Left) {
            self.player.pos.x = (self.player.pos.x - MOVE_SPEED).max(0.0);
        }
        if self.held.is_down(Action::Right) {
            self.player.pos.x = (self.player.pos.x + MOVE_SPEED).min(WORLD_RIGHT);
        }

        // Gravity, capped at terminal speed, then integrate
        self.player.vel.y = (self.player.vel.y + GRAVITY).min(MAX_FALL_SPEED);
        self.player.pos.y += self.player.vel.y;

        // Platform resolution: land on a top surface crossed while falling
        let mut grounded = false;
        for platform in &level.platforms {
            let left = self.player.pos.x;
            let right = left + PLAYER_SIZE;
            let top = self.player.pos.y;
            let bottom = top + PLAYER_SIZE;

            if right > platform.x
                && left < platform.x + platform.width
                && bottom > platform.y
                && top < platform.y
                && self.player.vel.y >= 0.0
            {
                self.player.pos.y = platform.y - PLAYER_SIZE;
                self.player.vel.y = 0.0;
                grounded = true;
            }
        }

        // Ground plane
        if self.player.pos.y >= FLOOR_Y {
            self.player.pos.y = FLOOR_Y;
            self.player.vel.y = 0.0;
            grounded = true;
        }
        self.grounded = grounded;

        // Coin pickup by center distance
        for coin in &level.coins {
            if self.collected_coins.contains(&coin.id) {
                continue;
            }
            let center = self.player.pos + Vec2::splat(PLAYER_SIZE / 2.0);
            if center.distance(Vec2::new(coin.x, coin.y)) < COIN_PICKUP_RADIUS {
                self.collected_coins.insert(coin.id.clone());
                self.score += 10;
                self.particles
                    .burst(&mut self.rng, Vec2::new(coin.x, coin.y), ParticleKind::Coin);
                log::debug!("coin {} collected, score {}", coin.id, self.score);
            }
        }

        // Gate interrupt: the first locked gate overlapping the player wins;
        // horizontal movement is rolled back for the rest of this frame
        for gate in &level.gates {
            if self.unlocked_gates.contains(&gate.id) {
                continue;
            }
            let left = self.player.pos.x;
            let top = self.player.pos.y;
            if left + PLAYER_SIZE > gate.x
                && left < gate.x + gate.width
                && top < gate.y + gate.height
                && top + PLAYER_SIZE > gate.y
            {
                self.open_gate = Some(gate.id.clone());
                self.player.pos.x = prev_x;
                log::debug!("gate {} challenged", gate.id);
                break;
            }
        }

        // Goal capture
        let goal = level.goal;
        if (self.player.pos.x - goal.x).abs() < GOAL_CAPTURE
            && (self.player.pos.y - goal.y).abs() < GOAL_CAPTURE
        {
            if (self.current_level as usize) < self.levels.len() {
                self.current_level += 1;
                self.player = Player::spawn();
                self.collected_coins.clear();
                self.unlocked_gates.clear();
                self.particles
                    .burst(&mut self.rng, Vec2::new(goal.x, goal.y), ParticleKind::Win);
                log::info!("level {} reached", self.current_level);
            } else {
                self.status = GameStatus::Win;
                log::info!("run complete, final score {}", self.score);
            }
        }
    }

    /// Key-down intent with DOM-style key names. Held keys are tracked for
    /// movement; jump fires on the press edge only, and only while grounded.
    pub fn key_down(&mut self, key: &str) {
        if self.open_gate.is_some() || self.status != GameStatus::Playing {
            return;
        }
        let Some(action) = action_for_key(key) else {
            return;
        };
        let edge = self.held.press(action);
        if edge && action == Action::Jump && self.grounded {
            self.player.vel.y = JUMP_FORCE;
            let feet = self.player.pos + Vec2::new(PLAYER_SIZE / 2.0, PLAYER_SIZE);
            self.particles.burst(&mut self.rng, feet, ParticleKind::Jump);
        }
    }

    /// Key-up intent. Always clears the held state so a key released while a
    /// modal was open does not stay stuck down.
    pub fn key_up(&mut self, key: &str) {
        if let Some(action) = action_for_key(key) {
            self.held.release(action);
        }
    }

    /// Answer the open gate's question. Correct: score, unlock, celebrate.
    /// Wrong: lose a life, game over on the last one. The modal closes
    /// either way; an unlocked gate never reopens.
    pub fn answer_gate(&mut self, option: &str) {
        let Some(gate_id) = self.open_gate.take() else {
            return;
        };
        let Some(correct) = level_or_first(&self.levels, self.current_level)
            .gates
            .iter()
            .find(|g| g.id == gate_id)
            .map(|g| g.question.answer == option)
        else {
            return;
        };

        if correct {
            self.score += 50;
            self.unlocked_gates.insert(gate_id.clone());
            let center = self.player.center();
            self.particles.burst(&mut self.rng, center, ParticleKind::Win);
            log::debug!("gate {gate_id} unlocked, score {}", self.score);
        } else {
            self.lives = self.lives.saturating_sub(1);
            log::debug!("gate {gate_id} failed, {} lives left", self.lives);
            if self.lives == 0 {
                self.status = GameStatus::GameOver;
                log::info!("game over, final score {}", self.score);
            }
        }
    }

    /// Reset the whole run to its initial state.
    pub fn restart(&mut self) {
        self.player = Player::spawn();
        self.grounded = false;
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.current_level = 1;
        self.status = GameStatus::Playing;
        self.collected_coins.clear();
        self.unlocked_gates.clear();
        self.open_gate = None;
        self.particles.reset();
        self.held.clear();
        log::info!("run restarted");
    }

    /// One fixed ~16ms particle integration step. Runs on its own cadence,
    /// independent of the frame loop and of modal state.
    pub fn step_particles(&mut self) {
        self.particles.step();
    }
}
