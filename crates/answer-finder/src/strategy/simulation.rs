//! Built-in sample quiz used when no upstream source yields data.

use super::QuizStrategy;
use crate::error::StrategyError;
use crate::model::{Answer, Question, QuizResult};
use async_trait::async_trait;

/// (prompt, answers, index of the correct answer)
const CATALOG: &[(&str, [&str; 4], usize)] = &[
    (
        "What is the capital of France?",
        ["Paris", "London", "Berlin", "Madrid"],
        0,
    ),
    (
        "Which planet is known as the Red Planet?",
        ["Earth", "Mars", "Jupiter", "Venus"],
        1,
    ),
    ("What is 2 + 2?", ["3", "4", "5", "22"], 1),
];

/// Always succeeds with a fixed placeholder quiz.
pub struct SimulationStrategy;

impl SimulationStrategy {
    /// The placeholder quiz, stamped with `quiz_id`.
    pub fn sample(quiz_id: &str) -> QuizResult {
        let questions = CATALOG
            .iter()
            .map(|(prompt, answers, correct)| {
                let answers = answers
                    .iter()
                    .enumerate()
                    .map(|(i, text)| Answer::new(*text, i == *correct))
                    .collect();
                Question::new(*prompt, answers)
            })
            .collect();
        QuizResult::new(quiz_id, questions)
    }
}

#[async_trait]
impl QuizStrategy for SimulationStrategy {
    fn name(&self) -> &'static str {
        "simulation"
    }

    fn is_placeholder(&self) -> bool {
        true
    }

    async fn attempt(&self, quiz_id: &str) -> Result<Option<QuizResult>, StrategyError> {
        Ok(Some(Self::sample(quiz_id)))
    }
}
