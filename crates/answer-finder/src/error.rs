//! Error taxonomy for acquisition and persistence.

use std::fmt;
use std::path::PathBuf;

/// Failure raised inside a single strategy attempt.
///
/// These never cross the chain boundary; the chain records them as
/// [`StrategyFailure`]s and moves on to the next strategy.
#[derive(thiserror::Error, Debug)]
pub enum StrategyError {
    /// Transport failure, including an expired timeout.
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered with a non-success status.
    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The HTTP client could not be built from the configured settings.
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    /// The upstream URL could not be built from the configured base.
    #[error("invalid upstream url: {0}")]
    Url(String),

    /// An embedded payload was present but could not be decoded.
    #[error("malformed payload: {0}")]
    Parse(String),
}

/// Why one strategy did not produce a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The strategy ran cleanly but found no quiz data.
    NotFound,
    /// The strategy raised an error; the message is kept for reporting.
    Error(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::NotFound => write!(f, "not found"),
            FailureReason::Error(msg) => write!(f, "{msg}"),
        }
    }
}

/// One strategy's failure, as recorded by the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyFailure {
    pub strategy: &'static str,
    pub reason: FailureReason,
}

impl fmt::Display for StrategyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.strategy, self.reason)
    }
}

/// Every registered strategy failed or found nothing.
#[derive(thiserror::Error, Debug)]
#[error("all strategies failed for quiz {quiz_id}: {}", summarize(.failures))]
pub struct AcquisitionFailed {
    pub quiz_id: String,
    pub failures: Vec<StrategyFailure>,
}

fn summarize(failures: &[StrategyFailure]) -> String {
    if failures.is_empty() {
        return "no strategies registered".to_string();
    }
    failures
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Writing the answer sheet to disk failed.
#[derive(thiserror::Error, Debug)]
#[error("could not write {}: {source}", .path.display())]
pub struct PersistError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
