//! Locate quiz payloads embedded in page scripts.
//!
//! Quiz pages ship their state as a JSON object inside a `<script>` block,
//! often wrapped in JavaScript (`window.__STATE__ = {...};`). Blocks that
//! mention a marker token are scanned for balanced `{...}` substrings, which
//! are decoded in document order until one carries a `questions` array.

use crate::error::StrategyError;
use scraper::{Html, Selector};
use serde_json::Value;

/// Tokens whose presence marks a script block as a quiz payload candidate.
pub const MARKER_TOKENS: &[&str] = &["quizData", "questions"];

/// Maximum number of brace-delimited candidates decoded per block.
const MAX_CANDIDATES_PER_BLOCK: usize = 16;

/// Maximum nesting depth searched for a `questions` array.
const MAX_SEARCH_DEPTH: usize = 6;

/// Find the raw question entries embedded in an HTML document.
///
/// Returns `Ok(None)` when no block carries a marker, or when payloads
/// decode but none holds questions. Returns [`StrategyError::Parse`] when
/// marker blocks exist but not a single candidate decodes.
pub fn find_questions(html: &str) -> Result<Option<Vec<Value>>, StrategyError> {
    let document = Html::parse_document(html);
    let sel = Selector::parse("script").expect("valid selector");

    let mut marker_blocks = 0usize;
    let mut decoded_any = false;

    for element in document.select(&sel) {
        let text: String = element.text().collect();
        if !MARKER_TOKENS.iter().any(|m| text.contains(m)) {
            continue;
        }
        marker_blocks += 1;

        if let Some(questions) = scan_block(&text, &mut decoded_any) {
            tracing::debug!(
                "found {} raw questions in script block {marker_blocks}",
                questions.len()
            );
            return Ok(Some(questions));
        }
    }

    if marker_blocks > 0 && !decoded_any {
        return Err(StrategyError::Parse(format!(
            "{marker_blocks} script block(s) mention quiz data but none decodes as JSON"
        )));
    }

    Ok(None)
}

fn scan_block(text: &str, decoded_any: &mut bool) -> Option<Vec<Value>> {
    let mut from = 0;
    let mut tried = 0;

    while tried < MAX_CANDIDATES_PER_BLOCK {
        let start = from + text[from..].find('{')?;
        tried += 1;

        let Some(len) = balanced_len(&text[start..]) else {
            from = start + 1;
            continue;
        };
        let candidate = &text[start..start + len];

        match serde_json::from_str::<Value>(candidate) {
            Ok(value) => {
                *decoded_any = true;
                if let Some(questions) = questions_in(&value, 0) {
                    return Some(questions.clone());
                }
                from = start + len;
            }
            Err(e) => {
                tracing::debug!("candidate at byte {start} is not JSON: {e}");
                from = start + 1;
            }
        }
    }

    None
}

/// Length of the balanced `{...}` run at the start of `s`.
///
/// Braces inside string literals (double or single quoted, with backslash
/// escapes) are ignored.
pub fn balanced_len(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '"' | '\'' => quote = Some(c),
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }

    None
}

fn questions_in(value: &Value, depth: usize) -> Option<&Vec<Value>> {
    if let Some(questions) = value.get("questions").and_then(|q| q.as_array()) {
        return Some(questions);
    }
    if depth >= MAX_SEARCH_DEPTH {
        return None;
    }
    match value {
        Value::Object(map) => map.values().find_map(|v| questions_in(v, depth + 1)),
        Value::Array(items) => items.iter().find_map(|v| questions_in(v, depth + 1)),
        _ => None,
    }
}
