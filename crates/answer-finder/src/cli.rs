//! The `answer-finder` command: acquire a quiz, show it, save it.

use crate::chain::{Acquisition, StrategyChain};
use crate::config::{FetcherConfig, Overrides};
use crate::error::StrategyError;
use crate::present::{AnswerSink, Style};
use anyhow::{bail, Context, Result};
use serde_json::json;
use std::io::{BufRead, Write};

/// Options for one fetch, usually parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub quiz_id: Option<String>,
    pub overrides: Overrides,
    pub no_save: bool,
    pub no_fallback: bool,
    pub json: bool,
    pub no_color: bool,
}

/// Build the strategy chain for the given options.
pub fn build_chain(
    config: &FetcherConfig,
    no_fallback: bool,
) -> Result<StrategyChain, StrategyError> {
    if no_fallback {
        Ok(StrategyChain::builder().remote(config)?.build())
    } else {
        StrategyChain::standard(config)
    }
}

/// Ask for a quiz id on `input` when none was given.
pub fn resolve_quiz_id(
    given: Option<String>,
    input: &mut impl BufRead,
    out: &mut impl Write,
    style: Style,
) -> Result<String> {
    let raw = match given {
        Some(id) => id,
        None => {
            write!(out, "{}", style.title("📝 Enter Quiz ID: "))?;
            out.flush()?;
            let mut line = String::new();
            input
                .read_line(&mut line)
                .context("failed to read quiz id")?;
            line
        }
    };

    let id = raw.trim();
    if id.is_empty() {
        bail!("Quiz ID required");
    }
    Ok(id.to_string())
}

/// Run one fetch end to end, writing the console view to `out`.
pub async fn run(
    opts: FetchOptions,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Acquisition> {
    let style = if opts.json {
        Style::Plain
    } else {
        Style::detect(opts.no_color)
    };
    let quiz_id = resolve_quiz_id(opts.quiz_id, input, out, style)?;
    let config = FetcherConfig::resolve(opts.overrides);
    tracing::debug!("resolved config: {config:?}");

    if !opts.json {
        writeln!(
            out,
            "{}",
            style.rule(&format!("🔍 Fetching answers for Quiz ID: {quiz_id}"))
        )?;
    }

    let chain = build_chain(&config, opts.no_fallback).context("invalid fetcher settings")?;
    let acquisition = chain.run(&quiz_id).await?;

    let sink = AnswerSink::new(style, &config.output_dir);

    if opts.json {
        let doc = json!({
            "quiz_id": acquisition.result().quiz_id(),
            "strategy": acquisition.strategy(),
            "placeholder": acquisition.is_placeholder(),
            "questions": acquisition.result().questions(),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        if !opts.no_save {
            if let Err(e) = sink.persist(acquisition.result()) {
                tracing::warn!("{e}");
            }
        }
        return Ok(acquisition);
    }

    if acquisition.is_placeholder() {
        writeln!(
            out,
            "{}",
            style.warning("⚠️ Using sample data (real fetching unavailable)")
        )?;
    }

    if opts.no_save {
        sink.render(acquisition.result(), out)?;
    } else {
        sink.present(acquisition.result(), out)?;
    }

    Ok(acquisition)
}
