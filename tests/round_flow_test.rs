//! Integration test: rapid-fire round flow
//!
//! Runs whole rounds through virtual time: spawn cadence, countdown halt,
//! lifetime sweeps and the scoring model working together.

use glam::Vec2;
use quiz_arcade::questions::rapid_fire_pool;
use quiz_arcade::rapidfire::{RapidFire, RapidFireConfig, Target};

fn round(seed: u64, round_time: u32, spawn_interval_ms: u64, max_targets: usize) -> RapidFire {
    RapidFire::with_config(
        seed,
        RapidFireConfig {
            round_time,
            spawn_interval_ms,
            max_targets,
        },
        rapid_fire_pool(),
    )
}

/// Forge a target directly on the board (tests own the id space above 5000).
fn forge_target(game: &mut RapidFire, id: u64, lifetime_ms: u64, created_at_ms: u64) {
    game.targets.push(Target {
        id,
        prompt: "7 - 2".into(),
        choices: vec!["4".into(), "5".into(), "6".into()],
        answer: "5".into(),
        pos: Vec2::new(20.0, 40.0),
        lifetime_ms,
        created_at_ms,
    });
}

#[test]
fn test_round_spawns_within_cap_and_halts_at_zero() {
    let mut game = round(11, 5, 500, 2);
    game.start(0);

    let mut now = 0;
    while now < 10_000 {
        now += 50;
        game.advance_to(now);
        assert!(game.targets.len() <= 2, "cap violated at t={now}");
        if now >= 5_000 {
            assert!(!game.running, "round must halt at t={now}");
        }
    }

    assert_eq!(game.time_left, 0, "countdown ends exactly at zero");
    assert!(!game.running);

    // Nothing spawns after the halt
    let frozen = game.targets.len();
    game.advance_to(120_000);
    assert_eq!(game.targets.len(), frozen);
}

#[test]
fn test_unanswered_target_expires_silently() {
    // 5s round, one 1000ms target spawned at t=0, left unanswered.
    let mut game = round(11, 5, 60_000, 1);
    game.start(0);
    forge_target(&mut game, 5000, 1000, 0);

    // Present right up to its lifetime...
    game.advance_to(999);
    assert!(game.targets.iter().any(|t| t.id == 5000));

    // ...and gone by the first 150ms-granularity sweep past 1000ms
    game.advance_to(1150);
    assert!(!game.targets.iter().any(|t| t.id == 5000));
    assert_eq!(game.score, 0, "expiry carries no penalty");
    assert_eq!(game.combo, 0);
    assert!(game.running, "the round itself keeps going");
}

#[test]
fn test_correct_answers_compound_through_a_round() {
    let mut game = round(7, 10, 400, 1);
    game.start(0);

    let mut now = 0;
    let mut last_score = 0;
    let mut answered = 0;
    while game.running && answered < 5 {
        now += 50;
        game.advance_to(now);
        if let Some(target) = game.targets.last() {
            let answer = target.answer.clone();
            let id = target.id;
            game.select_choice(id, &answer);
            answered += 1;
            assert!(game.score > last_score, "correct answers strictly increase score");
            assert_eq!(game.combo, answered, "combo counts consecutive corrects");
            last_score = game.score;
        }
    }
    assert_eq!(answered, 5);

    // One miss resets the streak but never drives the score negative
    forge_target(&mut game, 5001, 10_000, now);
    game.select_choice(5001, "4");
    assert_eq!(game.combo, 0);
    assert!(game.score >= last_score.saturating_sub(6));
}

#[test]
fn test_stop_cancels_all_scheduling() {
    let mut game = round(3, 30, 500, 3);
    game.start(0);
    game.advance_to(2_000);
    let (targets, time_left) = (game.targets.len(), game.time_left);

    game.stop();
    game.advance_to(90_000);
    assert_eq!(game.targets.len(), targets, "no spawns after stop");
    assert_eq!(game.time_left, time_left, "no countdown after stop");
}

#[test]
fn test_restarting_begins_a_fresh_round() {
    let mut game = round(3, 5, 500, 1);
    game.start(0);
    game.advance_to(6_000);
    assert!(!game.running);

    game.start(6_000);
    assert!(game.running);
    assert_eq!(game.time_left, 5);
    assert_eq!(game.score, 0);
    assert!(game.targets.is_empty());

    // The fresh round runs on the same schedule shape as the first
    game.advance_to(6_500);
    assert_eq!(game.targets.len(), 1);
}
