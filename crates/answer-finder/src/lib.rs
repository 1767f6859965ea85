// Copyright 2026 Answer Finder Contributors
// SPDX-License-Identifier: Apache-2.0

//! Answer Finder — acquire quiz questions and answers from unreliable
//! upstream pages.
//!
//! The pipeline is an ordered chain of [`strategy::QuizStrategy`]
//! implementations: decode the application state embedded in the quiz page,
//! read schema.org markup from the same page, and finally fall back to a
//! built-in sample quiz. Results are rendered to the console and saved as a
//! plain-text answer sheet.
//!
//! ```rust,no_run
//! use answer_finder::chain::StrategyChain;
//! use answer_finder::config::{FetcherConfig, Overrides};
//! use answer_finder::present::{AnswerSink, Style};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let config = FetcherConfig::resolve(Overrides::default());
//! let acquisition = StrategyChain::standard(&config)?.run("5f1a2b").await?;
//! let sink = AnswerSink::new(Style::Plain, &config.output_dir);
//! sink.present(acquisition.result(), &mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

pub mod acquisition;
pub mod chain;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod present;
pub mod strategy;

pub use chain::{Acquisition, StrategyChain};
pub use error::{AcquisitionFailed, PersistError, StrategyError};
pub use model::{Answer, Question, QuizResult};
