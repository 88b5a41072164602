//! Integration test: platformer progression
//!
//! Drives the engine through coin pickups, gate challenges, level
//! transitions and the lose/win endings using scripted key intents.

use glam::Vec2;
use quiz_arcade::platformer::{GameStatus, Platformer};

/// Frames until the gate modal opens, bounded so a broken collision check
/// fails the test instead of hanging it.
fn walk_until_modal(game: &mut Platformer, max_frames: u32) {
    let mut frames = 0;
    while !game.modal_open() {
        game.frame();
        frames += 1;
        assert!(frames <= max_frames, "gate never challenged");
    }
}

#[test]
fn test_coin_gate_goal_progression() {
    let mut game = Platformer::new(5);

    // Drop next to the first coin
    game.player.pos = Vec2::new(140.0, 340.0);
    game.frame();
    assert_eq!(game.score, 10);
    assert!(game.collected_coins.contains("coin1"));

    // Walk into the gate and clear it
    game.player.pos = Vec2::new(450.0, 260.0);
    game.player.vel = Vec2::ZERO;
    game.key_down("d");
    walk_until_modal(&mut game, 20);
    assert_eq!(game.open_gate.as_deref(), Some("gate1"));

    game.answer_gate("96");
    assert_eq!(game.score, 60);
    assert!(game.unlocked_gates.contains("gate1"));

    // Gate stays open: walking the same spot again raises no modal
    for _ in 0..10 {
        game.frame();
        assert!(!game.modal_open());
    }
    game.key_up("d");

    // Reach the goal: next level, per-level progress forgotten
    game.player.pos = Vec2::new(890.0, 205.0);
    game.player.vel = Vec2::ZERO;
    game.frame();
    assert_eq!(game.current_level, 2);
    assert_eq!(game.player.pos, Vec2::new(100.0, 200.0));
    assert!(game.collected_coins.is_empty());
    assert!(game.unlocked_gates.is_empty());
    assert_eq!(game.score, 60, "score survives the transition");
}

#[test]
fn test_three_wrong_answers_end_the_run() {
    let mut game = Platformer::new(5);
    game.player.pos = Vec2::new(450.0, 260.0);
    game.key_down("ArrowRight");

    for expected_lives in [2, 1, 0] {
        walk_until_modal(&mut game, 20);
        game.answer_gate("88");
        assert_eq!(game.lives, expected_lives);
    }

    assert_eq!(game.status, GameStatus::GameOver);

    // Dead runs ignore frames and inputs
    let pos = game.player.pos;
    game.frame();
    game.key_down(" ");
    assert_eq!(game.player.pos, pos);

    // Restart brings everything back
    game.restart();
    assert_eq!(game.status, GameStatus::Playing);
    assert_eq!(game.lives, 3);
    assert_eq!(game.current_level, 1);
}

#[test]
fn test_clearing_the_last_level_wins() {
    let mut game = Platformer::new(5);

    // Finish level 1 at its goal
    game.player.pos = Vec2::new(890.0, 205.0);
    game.frame();
    assert_eq!(game.current_level, 2);

    // Finish level 2; no further level exists, so the run is won
    game.player.pos = Vec2::new(940.0, 205.0);
    game.player.vel = Vec2::ZERO;
    game.frame();
    assert_eq!(game.status, GameStatus::Win);

    let pos = game.player.pos;
    game.frame();
    assert_eq!(game.player.pos, pos, "no frame updates after the win");
}

#[test]
fn test_particles_animate_independently_of_modal() {
    let mut game = Platformer::new(5);

    // Collect a coin to raise a burst, then freeze the frame loop on a gate
    game.player.pos = Vec2::new(140.0, 340.0);
    game.frame();
    assert_eq!(game.particles.len(), 8);

    game.player.pos = Vec2::new(450.0, 260.0);
    game.player.vel = Vec2::ZERO;
    game.key_down("d");
    walk_until_modal(&mut game, 20);

    // The particle clock keeps running while the modal blocks frames
    let life_before = game.particles.particles[0].life;
    game.step_particles();
    assert!(game.particles.particles[0].life < life_before);
}
