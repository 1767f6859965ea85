//! Canonical quiz types shared by every acquisition strategy.
//!
//! Values are built once by a strategy and never mutated afterwards, so the
//! fields are private and exposed through accessors.

use serde::Serialize;

/// Prompt used when an upstream source omits the question text.
pub const UNKNOWN_QUESTION: &str = "Unknown Question";

/// Text used when an upstream source omits an answer's text.
pub const UNKNOWN_ANSWER: &str = "Unknown";

/// A single answer option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    text: String,
    is_correct: bool,
}

impl Answer {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

/// A question with its answers in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    prompt: String,
    answers: Vec<Answer>,
}

impl Question {
    /// Build a question. A blank prompt is replaced by [`UNKNOWN_QUESTION`].
    pub fn new(prompt: impl Into<String>, answers: Vec<Answer>) -> Self {
        let prompt = prompt.into();
        let prompt = if prompt.trim().is_empty() {
            UNKNOWN_QUESTION.to_string()
        } else {
            prompt
        };
        Self { prompt, answers }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Whether at least one answer is marked correct.
    pub fn has_correct_answer(&self) -> bool {
        self.answers.iter().any(Answer::is_correct)
    }
}

/// The questions acquired for one quiz identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    quiz_id: String,
    questions: Vec<Question>,
}

impl QuizResult {
    pub fn new(quiz_id: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            quiz_id: quiz_id.into(),
            questions,
        }
    }

    pub fn quiz_id(&self) -> &str {
        &self.quiz_id
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// 1-based numbers of questions with no answer marked correct.
    pub fn unanswered(&self) -> Vec<usize> {
        self.questions
            .iter()
            .enumerate()
            .filter(|(_, q)| !q.has_correct_answer())
            .map(|(i, _)| i + 1)
            .collect()
    }
}
