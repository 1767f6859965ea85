//! The persisted answer sheet: a deterministic plain-text rendering.

use crate::model::QuizResult;
use std::fmt::Write;

/// Width of the rule under the sheet header.
const SHEET_RULE_WIDTH: usize = 50;

/// Label for the answer at `index`: A..Z, then AA, AB, …
pub fn answer_label(index: usize) -> String {
    let mut n = index + 1;
    let mut label = Vec::new();
    while n > 0 {
        n -= 1;
        label.push(char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }
    label.iter().rev().collect()
}

/// File name for a quiz's answer sheet.
///
/// Characters that are not valid in file names on common platforms are
/// replaced with `_`.
pub fn sheet_file_name(quiz_id: &str) -> String {
    let safe: String = quiz_id
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("quiz_answers_{safe}.txt")
}

/// Render the answer sheet text.
pub fn format_sheet(result: &QuizResult) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Quiz Answers - ID: {}", result.quiz_id());
    let _ = writeln!(out, "{}", "=".repeat(SHEET_RULE_WIDTH));
    out.push('\n');

    for (i, question) in result.questions().iter().enumerate() {
        let _ = writeln!(out, "Q{}. {}", i + 1, question.prompt());
        for (j, answer) in question.answers().iter().enumerate() {
            let marker = if answer.is_correct() {
                "[CORRECT]"
            } else {
                "[      ]"
            };
            let _ = writeln!(out, "  {marker} {}. {}", answer_label(j), answer.text());
        }
        out.push('\n');
    }

    out
}
