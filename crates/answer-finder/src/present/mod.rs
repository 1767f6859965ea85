//! Presentation sink: console view and persisted answer sheet.
//!
//! Rendering always happens before persistence, and a failed write is
//! reported as a warning without affecting what was already shown.

pub mod sheet;
pub mod style;

use crate::error::PersistError;
use crate::model::QuizResult;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub use sheet::{answer_label, format_sheet, sheet_file_name};
pub use style::Style;

/// Width of the console banner rules.
const CONSOLE_RULE_WIDTH: usize = 60;

/// Renders quiz results to a writer and saves them under `output_dir`.
#[derive(Debug, Clone)]
pub struct AnswerSink {
    style: Style,
    output_dir: PathBuf,
}

impl AnswerSink {
    pub fn new(style: Style, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            style,
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path the answer sheet for `quiz_id` is written to.
    pub fn sheet_path(&self, quiz_id: &str) -> PathBuf {
        self.output_dir.join(sheet_file_name(quiz_id))
    }

    /// Write the console view of `result`.
    ///
    /// An empty result prints an error notice and returns normally.
    pub fn render(&self, result: &QuizResult, out: &mut impl Write) -> io::Result<()> {
        let s = self.style;

        if result.is_empty() {
            writeln!(out, "{}", s.error("❌ No questions found!"))?;
            return Ok(());
        }

        let rule = "=".repeat(CONSOLE_RULE_WIDTH);
        writeln!(out)?;
        writeln!(out, "{}", s.rule(&rule))?;
        writeln!(
            out,
            "{}",
            s.title(&format!("📝 QUIZ ANSWERS - ID: {}", result.quiz_id()))
        )?;
        writeln!(out, "{}", s.rule(&rule))?;
        writeln!(out)?;

        for (i, question) in result.questions().iter().enumerate() {
            writeln!(
                out,
                "{}",
                s.question(&format!("Q{}. {}", i + 1, question.prompt()))
            )?;

            for (j, answer) in question.answers().iter().enumerate() {
                let line = format!("{}. {}", answer_label(j), answer.text());
                if answer.is_correct() {
                    writeln!(out, "  ✅ {}", s.correct(&line))?;
                } else {
                    writeln!(out, "     {}", s.answer(&line))?;
                }
            }

            if !question.has_correct_answer() {
                writeln!(
                    out,
                    "  {}",
                    s.warning("⚠️ no answer is marked correct for this question")
                )?;
            }
            writeln!(out)?;
        }

        writeln!(out, "{}", s.rule(&rule))?;
        writeln!(
            out,
            "{}",
            s.success(&format!("📊 Total Questions: {}", result.questions().len()))
        )?;
        writeln!(out, "{}", s.rule(&rule))?;
        Ok(())
    }

    /// Write the answer sheet, replacing any previous one for the same quiz.
    pub fn persist(&self, result: &QuizResult) -> Result<PathBuf, PersistError> {
        let path = self.sheet_path(result.quiz_id());
        std::fs::write(&path, format_sheet(result)).map_err(|source| PersistError {
            path: path.clone(),
            source,
        })?;
        tracing::info!("answer sheet written to {}", path.display());
        Ok(path)
    }

    /// Render, then persist. Persistence failures are reported on `out` and
    /// logged, never returned.
    pub fn present(
        &self,
        result: &QuizResult,
        out: &mut impl Write,
    ) -> io::Result<Option<PathBuf>> {
        self.render(result, out)?;
        self.save(result, out)
    }

    /// Persist and report the outcome on `out`.
    pub fn save(
        &self,
        result: &QuizResult,
        out: &mut impl Write,
    ) -> io::Result<Option<PathBuf>> {
        let s = self.style;
        match self.persist(result) {
            Ok(path) => {
                writeln!(
                    out,
                    "{}",
                    s.success(&format!("💾 Answers saved to: {}", path.display()))
                )?;
                Ok(Some(path))
            }
            Err(e) => {
                tracing::warn!("{e}");
                writeln!(out, "{}", s.warning(&format!("⚠️ Could not save to file: {e}")))?;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Answer, Question};

    fn sample() -> QuizResult {
        QuizResult::new(
            "abc",
            vec![
                Question::new(
                    "2+2?",
                    vec![Answer::new("4", true), Answer::new("5", false)],
                ),
                Question::new("Trick", vec![Answer::new("none", false)]),
            ],
        )
    }

    fn render_to_string(sink: &AnswerSink, result: &QuizResult) -> String {
        let mut buf = Vec::new();
        sink.render(result, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_plain() {
        let sink = AnswerSink::new(Style::Plain, ".");
        let text = render_to_string(&sink, &sample());

        assert!(text.contains("QUIZ ANSWERS - ID: abc"));
        assert!(text.contains("Q1. 2+2?\n  ✅ A. 4\n     B. 5\n"));
        assert!(text.contains("Q2. Trick\n     A. none\n  ⚠️ no answer is marked correct"));
        assert!(text.contains("Total Questions: 2"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_render_is_idempotent() {
        let sink = AnswerSink::new(Style::Colored, ".");
        let result = sample();
        assert_eq!(render_to_string(&sink, &result), render_to_string(&sink, &result));
    }

    #[test]
    fn test_render_empty_result() {
        let sink = AnswerSink::new(Style::Plain, ".");
        let text = render_to_string(&sink, &QuizResult::new("abc", vec![]));
        assert_eq!(text, "❌ No questions found!\n");
    }

    #[test]
    fn test_persist_overwrites_with_identical_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let sink = AnswerSink::new(Style::Plain, dir.path());
        let result = sample();

        let first = sink.persist(&result).unwrap();
        let bytes = std::fs::read(&first).unwrap();
        let second = sink.persist(&result).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, dir.path().join("quiz_answers_abc.txt"));
        assert_eq!(std::fs::read(&second).unwrap(), bytes);
        assert_eq!(String::from_utf8(bytes).unwrap(), format_sheet(&result));
    }

    #[test]
    fn test_persist_failure_is_a_warning() {
        let dir = tempfile::tempdir().unwrap();
        let sink = AnswerSink::new(Style::Plain, dir.path().join("missing").join("nested"));

        let mut buf = Vec::new();
        let saved = sink.present(&sample(), &mut buf).unwrap();
        assert!(saved.is_none());

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Total Questions: 2"));
        assert!(text.contains("Could not save to file"));
    }

    #[test]
    fn test_persist_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let sink = AnswerSink::new(Style::Plain, dir.path().join("missing"));
        let err = sink.persist(&sample()).unwrap_err();
        assert!(err.path.ends_with("quiz_answers_abc.txt"));
    }
}
