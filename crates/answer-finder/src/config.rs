//! Configuration loading and resolution.
//!
//! Each setting resolves from an explicit override (CLI flag), then an
//! environment variable, then a built-in default.

use std::path::PathBuf;

/// Default upstream host serving quiz pages.
pub const DEFAULT_BASE_URL: &str = "https://quizizz.com";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Desktop Chrome user agent; bare HTTP clients are commonly rejected.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                                      AppleWebKit/537.36 (KHTML, like Gecko) \
                                      Chrome/131.0.0.0 Safari/537.36";

pub const ENV_BASE_URL: &str = "ANSWER_FINDER_BASE_URL";
pub const ENV_TIMEOUT_MS: &str = "ANSWER_FINDER_TIMEOUT_MS";
pub const ENV_USER_AGENT: &str = "ANSWER_FINDER_USER_AGENT";
pub const ENV_OUTPUT_DIR: &str = "ANSWER_FINDER_OUTPUT_DIR";

/// Settings for the acquisition pipeline and the answer sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub user_agent: String,
    pub output_dir: PathBuf,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

/// Values supplied explicitly by the caller, usually from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub timeout_ms: Option<u64>,
    pub user_agent: Option<String>,
    pub output_dir: Option<PathBuf>,
}

impl FetcherConfig {
    /// Resolve against the process environment.
    pub fn resolve(overrides: Overrides) -> Self {
        Self::resolve_with(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve against an arbitrary environment lookup.
    pub fn resolve_with<F>(overrides: Overrides, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = overrides
            .base_url
            .or_else(|| env(ENV_BASE_URL))
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.base_url);

        let timeout_ms = overrides
            .timeout_ms
            .filter(|&ms| {
                if ms == 0 {
                    tracing::warn!("ignoring zero timeout override");
                }
                ms > 0
            })
            .or_else(|| env(ENV_TIMEOUT_MS).and_then(|raw| parse_timeout(&raw)))
            .unwrap_or(defaults.timeout_ms);

        let user_agent = overrides
            .user_agent
            .or_else(|| env(ENV_USER_AGENT))
            .filter(|s| !s.trim().is_empty())
            .filter(|s| valid_header_value(s))
            .unwrap_or(defaults.user_agent);

        let output_dir = overrides
            .output_dir
            .or_else(|| env(ENV_OUTPUT_DIR).map(PathBuf::from))
            .unwrap_or(defaults.output_dir);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_ms,
            user_agent,
            output_dir,
        }
    }
}

fn valid_header_value(raw: &str) -> bool {
    let ok = reqwest::header::HeaderValue::from_str(raw).is_ok();
    if !ok {
        tracing::warn!("ignoring invalid user agent {raw:?}, using default");
    }
    ok
}

fn parse_timeout(raw: &str) -> Option<u64> {
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Some(ms),
        _ => {
            tracing::warn!("ignoring invalid {ENV_TIMEOUT_MS}={raw:?}, using default");
            None
        }
    }
}
