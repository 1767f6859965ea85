// Copyright 2026 Answer Finder Contributors
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use answer_finder::cli::{self, FetchOptions};
use answer_finder::config::Overrides;

#[derive(Parser)]
#[command(
    name = "answer-finder",
    about = "Answer Finder — fetch the questions and answers of a quiz",
    version
)]
struct Cli {
    /// Quiz identifier (prompted for when omitted)
    quiz_id: Option<String>,

    /// Upstream host serving /quiz/<id> pages
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_ms: Option<u64>,

    /// User-Agent header sent upstream
    #[arg(long)]
    user_agent: Option<String>,

    /// Directory the answer sheet is written to
    #[arg(long, short)]
    output_dir: Option<PathBuf>,

    /// Do not write the answer sheet
    #[arg(long)]
    no_save: bool,

    /// Fail instead of showing sample data when no upstream source works
    #[arg(long)]
    no_fallback: bool,

    /// Output results as JSON (machine-readable)
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = FetchOptions {
        quiz_id: cli.quiz_id,
        overrides: Overrides {
            base_url: cli.base_url,
            timeout_ms: cli.timeout_ms,
            user_agent: cli.user_agent,
            output_dir: cli.output_dir,
        },
        no_save: cli.no_save,
        no_fallback: cli.no_fallback,
        json: cli.json,
        no_color: cli.no_color,
    };

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = cli::run(opts, &mut input, &mut out).await {
        if cli.json {
            println!(
                "{}",
                serde_json::json!({ "error": true, "message": format!("{e:#}") })
            );
        } else {
            eprintln!("  ❌ Error: {e:#}");
        }
        std::process::exit(1);
    }

    Ok(())
}
