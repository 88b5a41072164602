//! Quiz Arcade entry point: a headless scripted session of both engines.
//!
//! Drives a full rapid-fire round and a platformer run under virtual time so
//! the engines can be watched through log output without a UI. Pass a seed
//! as the first argument to replay a specific session.

use quiz_arcade::platformer::{GameStatus, Platformer};
use quiz_arcade::rapidfire::RapidFire;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xDECAF);
    log::info!("session seed {seed}");

    run_rapid_fire(seed);
    run_platformer(seed);
}

/// Play a full round, answering the newest target via its digit key.
fn run_rapid_fire(seed: u64) {
    let mut game = RapidFire::new(seed);
    game.start(0);

    let mut now = 0u64;
    let mut answered = 0u32;
    while game.running {
        now += 50;
        game.advance_to(now);
        if let Some(target) = game.targets.last() {
            let digit = target
                .choices
                .iter()
                .position(|c| *c == target.answer)
                .map(|i| i as u8 + 1);
            if let Some(digit) = digit {
                game.press_digit(digit);
                answered += 1;
            }
        }
    }

    println!(
        "rapid-fire: {answered} targets answered, final score {}, difficulty {:.2}",
        game.score, game.difficulty
    );
}

/// Walk right with periodic hops, answering gates correctly. The frame cap
/// bounds the session in case the scripted route stalls on geometry.
fn run_platformer(seed: u64) {
    let mut game = Platformer::new(seed);
    game.key_down("ArrowRight");

    let mut frames = 0u32;
    while game.status == GameStatus::Playing && frames < 3600 {
        game.frame();
        game.step_particles();

        if frames % 40 == 0 {
            game.key_up(" ");
            game.key_down(" ");
        }
        if let Some(gate_id) = game.open_gate.clone() {
            let answer = game
                .level()
                .gates
                .iter()
                .find(|g| g.id == gate_id)
                .map(|g| g.question.answer.clone());
            if let Some(answer) = answer {
                game.answer_gate(&answer);
            }
        }
        frames += 1;
    }

    println!(
        "platformer: {:?} after {frames} frames, level {}, score {}, {} lives left",
        game.status, game.current_level, game.score, game.lives
    );
}
