//! Extract schema.org `Question` markup from raw HTML.
//!
//! Pages that publish quizzes for search engines describe them with the
//! schema.org `Quiz`/`Question`/`Answer` vocabulary, either as JSON-LD or as
//! microdata attributes. Both are read here with `scraper`, without relying
//! on the site's own application state.

use crate::model::{Answer, Question, UNKNOWN_ANSWER};
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;

/// Maximum JSON-LD nesting depth searched for `Question` nodes.
const MAX_JSONLD_DEPTH: usize = 8;

/// Extract questions from JSON-LD, falling back to microdata.
pub fn extract_questions(html: &str) -> Vec<Question> {
    let document = Html::parse_document(html);

    let questions = extract_jsonld(&document);
    if !questions.is_empty() {
        return questions;
    }
    extract_microdata(&document)
}

// ── JSON-LD extraction ──────────────────────────────────────────────────────

fn extract_jsonld(document: &Html) -> Vec<Question> {
    let sel = Selector::parse(r#"script[type="application/ld+json"]"#).expect("valid selector");
    let mut questions = Vec::new();

    for element in document.select(&sel) {
        let text: String = element.text().collect();
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(text) {
            Ok(value) => collect_jsonld_questions(&value, 0, &mut questions),
            Err(e) => tracing::debug!("skipping malformed JSON-LD block: {e}"),
        }
    }

    questions
}

fn collect_jsonld_questions(value: &Value, depth: usize, out: &mut Vec<Question>) {
    if depth > MAX_JSONLD_DEPTH {
        return;
    }
    match value {
        Value::Array(items) => {
            for item in items {
                collect_jsonld_questions(item, depth + 1, out);
            }
        }
        Value::Object(map) => {
            if has_type(value, "Question") {
                out.push(parse_jsonld_question(value));
                return;
            }
            // @graph, hasPart, mainEntity and friends
            for child in map.values() {
                collect_jsonld_questions(child, depth + 1, out);
            }
        }
        _ => {}
    }
}

fn has_type(value: &Value, wanted: &str) -> bool {
    match value.get("@type") {
        Some(Value::String(t)) => t == wanted,
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some(wanted)),
        _ => false,
    }
}

fn jsonld_text(v: &Value) -> Option<&str> {
    v.get("text")
        .or_else(|| v.get("name"))
        .and_then(|t| t.as_str())
        .filter(|t| !t.trim().is_empty())
}

fn parse_jsonld_question(v: &Value) -> Question {
    let prompt = jsonld_text(v).unwrap_or_default();

    // (position, answer) pairs; accepted answers come first when unpositioned
    let mut answers: Vec<(Option<u64>, Answer)> = Vec::new();
    for (key, correct) in [("acceptedAnswer", true), ("suggestedAnswer", false)] {
        let Some(node) = v.get(key) else { continue };
        let nodes = match node {
            Value::Array(items) => items.iter().collect::<Vec<_>>(),
            other => vec![other],
        };
        for a in nodes {
            let text = jsonld_text(a)
                .or_else(|| a.as_str())
                .unwrap_or(UNKNOWN_ANSWER);
            let position = a.get("position").and_then(|p| {
                p.as_u64()
                    .or_else(|| p.as_str().and_then(|s| s.parse().ok()))
            });
            answers.push((position, Answer::new(text, correct)));
        }
    }

    if answers.iter().all(|(p, _)| p.is_some()) {
        answers.sort_by_key(|(p, _)| *p);
    }

    Question::new(prompt, answers.into_iter().map(|(_, a)| a).collect())
}

// ── Microdata extraction (itemprop) ─────────────────────────────────────────

fn extract_microdata(document: &Html) -> Vec<Question> {
    let sel = Selector::parse(r#"[itemscope][itemtype$="schema.org/Question"]"#)
        .expect("valid selector");

    document
        .select(&sel)
        .map(|question| {
            let props = scope_properties(question);
            let prompt = props
                .iter()
                .find(|(name, _)| *name == "text" || *name == "name")
                .map(|(_, el)| itemprop_text(el))
                .unwrap_or_default();

            let answers = props
                .iter()
                .filter_map(|(name, el)| {
                    let correct = match *name {
                        "acceptedAnswer" => true,
                        "suggestedAnswer" => false,
                        _ => return None,
                    };
                    Some(Answer::new(answer_text(el), correct))
                })
                .collect();

            Question::new(prompt, answers)
        })
        .collect()
}

/// Properties declared directly in `scope`, not inside nested item scopes.
fn scope_properties<'a>(scope: ElementRef<'a>) -> Vec<(&'a str, ElementRef<'a>)> {
    let mut props = Vec::new();
    collect_properties(scope, &mut props);
    props
}

fn collect_properties<'a>(el: ElementRef<'a>, props: &mut Vec<(&'a str, ElementRef<'a>)>) {
    for child in el.children().filter_map(ElementRef::wrap) {
        if let Some(names) = child.value().attr("itemprop") {
            for name in names.split_whitespace() {
                props.push((name, child));
            }
        }
        if child.value().attr("itemscope").is_none() {
            collect_properties(child, props);
        }
    }
}

fn answer_text(el: &ElementRef<'_>) -> String {
    if el.value().attr("itemscope").is_none() {
        return itemprop_text(el);
    }
    scope_properties(*el)
        .iter()
        .find(|(name, _)| *name == "text" || *name == "name")
        .map(|(_, t)| itemprop_text(t))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNKNOWN_ANSWER.to_string())
}

fn itemprop_text(el: &ElementRef<'_>) -> String {
    el.value()
        .attr("content")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| el.text().flat_map(str::split_whitespace).collect::<Vec<_>>().join(" "))
}
