//! Level geometry: platforms, quiz gates, coins and the goal.
//!
//! Levels are immutable once defined and indexed by 1-based number; lookups
//! outside the defined range fall back to level 1 rather than failing.

use serde::{Deserialize, Serialize};

use crate::questions::Question;

/// Axis-aligned platform rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A quiz checkpoint blocking progress until its question is answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub id: String,
    pub question: Question,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub x: f32,
    pub y: f32,
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub platforms: Vec<Platform>,
    pub gates: Vec<Gate>,
    pub coins: Vec<Coin>,
    pub goal: Goal,
}

/// Look up a level by 1-based number, falling back to level 1.
pub fn level_or_first(levels: &[Level], number: u32) -> &Level {
    number
        .checked_sub(1)
        .and_then(|i| levels.get(i as usize))
        .unwrap_or(&levels[0])
}

/// Parse a level pack from JSON.
pub fn levels_from_json(json: &str) -> serde_json::Result<Vec<Level>> {
    serde_json::from_str(json)
}

fn platform(x: f32, y: f32, width: f32, height: f32) -> Platform {
    Platform { x, y, width, height }
}

fn coin(x: f32, y: f32, id: &str) -> Coin {
    Coin { x, y, id: id.to_string() }
}

/// Builtin two-level campaign.
pub fn builtin_levels() -> Vec<Level> {
    vec![
        Level {
            platforms: vec![
                platform(0.0, 400.0, 300.0, 20.0),
                platform(350.0, 350.0, 150.0, 20.0),
                platform(550.0, 300.0, 150.0, 20.0),
                platform(750.0, 250.0, 200.0, 20.0),
            ],
            gates: vec![Gate {
                x: 480.0,
                y: 250.0,
                width: 20.0,
                height: 100.0,
                id: "gate1".to_string(),
                question: Question::new("What is 12 × 8?", &["88", "96", "104", "92"], "96"),
            }],
            coins: vec![
                coin(150.0, 350.0, "coin1"),
                coin(425.0, 300.0, "coin2"),
                coin(625.0, 250.0, "coin3"),
                coin(850.0, 200.0, "coin4"),
            ],
            goal: Goal { x: 900.0, y: 200.0 },
        },
        Level {
            platforms: vec![
                platform(0.0, 400.0, 200.0, 20.0),
                platform(250.0, 350.0, 100.0, 20.0),
                platform(400.0, 320.0, 150.0, 20.0),
                platform(600.0, 280.0, 100.0, 20.0),
                platform(750.0, 250.0, 250.0, 20.0),
            ],
            gates: vec![
                Gate {
                    x: 350.0,
                    y: 270.0,
                    width: 20.0,
                    height: 80.0,
                    id: "gate2".to_string(),
                    question: Question::new(
                        "Capital of France?",
                        &["London", "Paris", "Berlin", "Rome"],
                        "Paris",
                    ),
                },
                Gate {
                    x: 700.0,
                    y: 200.0,
                    width: 20.0,
                    height: 80.0,
                    id: "gate3".to_string(),
                    question: Question::new("√144 = ?", &["10", "11", "12", "14"], "12"),
                },
            ],
            coins: vec![
                coin(100.0, 350.0, "coin5"),
                coin(300.0, 300.0, "coin6"),
                coin(475.0, 270.0, "coin7"),
                coin(650.0, 230.0, "coin8"),
                coin(875.0, 200.0, "coin9"),
            ],
            goal: Goal { x: 950.0, y: 200.0 },
        },
    ]
}
