//! Multiple-choice question records shared by both games.
//!
//! The builtin pools cover quick mental-arithmetic rounds; gate checkpoints
//! embed their own question per gate (see `platformer::level`). Custom packs
//! can be loaded from JSON.

use serde::{Deserialize, Serialize};

/// A multiple-choice question. `answer` always appears in `choices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub choices: Vec<String>,
    pub answer: String,
}

impl Question {
    pub fn new(prompt: &str, choices: &[&str], answer: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            choices: choices.iter().map(|c| c.to_string()).collect(),
            answer: answer.to_string(),
        }
    }
}

/// Builtin rapid-fire pool: quick arithmetic, three choices each.
pub fn rapid_fire_pool() -> Vec<Question> {
    vec![
        Question::new("5 + 3", &["6", "8", "9"], "8"),
        Question::new("7 - 2", &["4", "5", "6"], "5"),
        Question::new("4 × 2", &["6", "8", "10"], "8"),
        Question::new("9 ÷ 3", &["2", "3", "4"], "3"),
        Question::new("12 - 7", &["4", "5", "6"], "5"),
        Question::new("6 + 4", &["9", "10", "11"], "10"),
    ]
}

/// Parse a question pack from JSON.
///
/// The only fallible surface in the crate; everything downstream treats
/// question data as trusted.
pub fn pool_from_json(json: &str) -> serde_json::Result<Vec<Question>> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_pool_answers_are_members() {
        for q in rapid_fire_pool() {
            assert_eq!(
                q.choices.iter().filter(|c| **c == q.answer).count(),
                1,
                "{} must list its answer exactly once",
                q.prompt
            );
            assert_eq!(q.choices.len(), 3);
        }
    }

    #[test]
    fn test_pool_from_json() {
        let json = r#"[
            {"prompt": "2 + 2", "choices": ["3", "4", "5"], "answer": "4"}
        ]"#;
        let pool = pool_from_json(json).unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].answer, "4");
    }

    #[test]
    fn test_pool_from_json_rejects_malformed() {
        assert!(pool_from_json("{not a pack}").is_err());
    }
}
