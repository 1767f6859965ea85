//! Convert raw upstream question entries into the canonical model.
//!
//! The upstream shape nests the prompt under `structure.query.text` and the
//! answers under `structure.options`. Every field has a default, so a
//! malformed entry still yields a well-formed (if degenerate) [`Question`].

use crate::model::{Answer, Question, UNKNOWN_ANSWER, UNKNOWN_QUESTION};
use serde_json::Value;

/// Normalize a sequence of raw question entries, preserving order.
pub fn normalize(raw: &[Value]) -> Vec<Question> {
    let questions: Vec<Question> = raw.iter().map(normalize_question).collect();

    for (i, q) in questions.iter().enumerate() {
        if !q.has_correct_answer() {
            tracing::warn!("question {} has no answer marked correct", i + 1);
        }
    }

    questions
}

/// Normalize a single raw entry.
pub fn normalize_question(entry: &Value) -> Question {
    let structure = entry.get("structure");

    let prompt = structure
        .and_then(|s| s.get("query"))
        .and_then(|q| q.get("text"))
        .and_then(|t| t.as_str())
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(UNKNOWN_QUESTION);

    let answers = structure
        .and_then(|s| s.get("options"))
        .and_then(|o| o.as_array())
        .map(|options| options.iter().map(normalize_option).collect())
        .unwrap_or_default();

    Question::new(prompt, answers)
}

fn normalize_option(option: &Value) -> Answer {
    let text = option
        .get("text")
        .and_then(|t| t.as_str())
        .unwrap_or(UNKNOWN_ANSWER);
    let correct = option
        .get("correct")
        .and_then(|c| c.as_bool())
        .unwrap_or(false);
    Answer::new(text, correct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_well_formed_entry() {
        let tree = json!({"questions":[{"structure":{"query":{"text":"2+2?"},"options":[{"text":"4","correct":true},{"text":"5","correct":false}]}}]});
        let raw = tree["questions"].as_array().unwrap();

        let questions = normalize(raw);
        assert_eq!(questions.len(), 1);
        let q = &questions[0];
        assert_eq!(q.prompt(), "2+2?");
        assert_eq!(q.answers().len(), 2);
        assert_eq!(q.answers()[0].text(), "4");
        assert!(q.answers()[0].is_correct());
        assert_eq!(q.answers()[1].text(), "5");
        assert!(!q.answers()[1].is_correct());
    }

    #[test]
    fn test_empty_question_list() {
        let tree = json!({"questions": []});
        assert!(normalize(tree["questions"].as_array().unwrap()).is_empty());
    }

    #[test]
    fn test_missing_structure_uses_defaults() {
        let q = normalize_question(&json!({}));
        assert_eq!(q.prompt(), UNKNOWN_QUESTION);
        assert!(q.answers().is_empty());
    }

    #[test]
    fn test_malformed_fields_use_defaults() {
        let entries = [
            json!({"structure": {"query": {"text": 42}}}),
            json!({"structure": {"query": "not an object"}}),
            json!({"structure": {"query": {"text": "  "}}}),
            json!("a bare string"),
            json!(null),
        ];
        for entry in &entries {
            let q = normalize_question(entry);
            assert_eq!(q.prompt(), UNKNOWN_QUESTION, "entry: {entry}");
            assert!(q.answers().is_empty());
        }
    }

    #[test]
    fn test_option_defaults() {
        let entry = json!({
            "structure": {
                "query": {"text": "Pick"},
                "options": [
                    {"correct": true},
                    {"text": "B", "correct": "yes"},
                    {"text": 7},
                    "not an object"
                ]
            }
        });
        let q = normalize_question(&entry);
        let texts: Vec<&str> = q.answers().iter().map(|a| a.text()).collect();
        assert_eq!(texts, vec![UNKNOWN_ANSWER, "B", UNKNOWN_ANSWER, UNKNOWN_ANSWER]);
        let correct: Vec<bool> = q.answers().iter().map(|a| a.is_correct()).collect();
        assert_eq!(correct, vec![true, false, false, false]);
    }

    #[test]
    fn test_options_not_an_array() {
        let q = normalize_question(&json!({"structure": {"query": {"text": "x"}, "options": {"text": "a"}}}));
        assert_eq!(q.prompt(), "x");
        assert!(q.answers().is_empty());
    }
}
