//! Ordered fallback over acquisition strategies.
//!
//! Strategies run one at a time in registration order. The first one to
//! return a result wins; errors and empty outcomes are logged, recorded and
//! never abort the chain.

use crate::acquisition::http_client::HttpClient;
use crate::config::FetcherConfig;
use crate::error::{AcquisitionFailed, FailureReason, StrategyError, StrategyFailure};
use crate::model::QuizResult;
use crate::strategy::{PageScrapeStrategy, QuizStrategy, RemoteFetchStrategy, SimulationStrategy};

/// A successful pipeline run.
#[derive(Debug)]
pub struct Acquisition {
    result: QuizResult,
    strategy: &'static str,
    placeholder: bool,
    failures: Vec<StrategyFailure>,
}

impl Acquisition {
    pub fn result(&self) -> &QuizResult {
        &self.result
    }

    pub fn into_result(self) -> QuizResult {
        self.result
    }

    /// Name of the strategy that produced the result.
    pub fn strategy(&self) -> &'static str {
        self.strategy
    }

    /// True when the result came from the built-in sample quiz.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    /// Strategies tried before the successful one, and why they failed.
    pub fn failures(&self) -> &[StrategyFailure] {
        &self.failures
    }
}

/// Statically ordered set of strategies.
pub struct StrategyChain {
    strategies: Vec<Box<dyn QuizStrategy>>,
}

impl StrategyChain {
    /// The default order: remote fetch, page scrape, then the sample quiz.
    pub fn standard(config: &FetcherConfig) -> Result<Self, StrategyError> {
        Ok(Self::builder()
            .remote(config)?
            .with(SimulationStrategy)
            .build())
    }

    pub fn builder() -> StrategyChainBuilder {
        StrategyChainBuilder::default()
    }

    /// Registered strategy names, in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Run strategies until one yields a result.
    pub async fn run(&self, quiz_id: &str) -> Result<Acquisition, AcquisitionFailed> {
        let mut failures = Vec::new();

        for strategy in &self.strategies {
            let name = strategy.name();
            tracing::info!("trying strategy {name} for quiz {quiz_id}");

            match strategy.attempt(quiz_id).await {
                Ok(Some(result)) => {
                    let placeholder = strategy.is_placeholder();
                    if placeholder {
                        tracing::warn!(
                            "no upstream data for quiz {quiz_id}, using placeholder from {name}"
                        );
                    } else {
                        tracing::info!(
                            "strategy {name} acquired {} questions",
                            result.questions().len()
                        );
                    }
                    return Ok(Acquisition {
                        result,
                        strategy: name,
                        placeholder,
                        failures,
                    });
                }
                Ok(None) => {
                    tracing::info!("strategy {name} found no quiz data");
                    failures.push(StrategyFailure {
                        strategy: name,
                        reason: FailureReason::NotFound,
                    });
                }
                Err(e) => {
                    tracing::warn!("strategy {name} failed: {e}");
                    failures.push(StrategyFailure {
                        strategy: name,
                        reason: FailureReason::Error(e.to_string()),
                    });
                }
            }
        }

        Err(AcquisitionFailed {
            quiz_id: quiz_id.to_string(),
            failures,
        })
    }
}

/// Registers strategies in the order they should run.
#[derive(Default)]
pub struct StrategyChainBuilder {
    strategies: Vec<Box<dyn QuizStrategy>>,
}

impl StrategyChainBuilder {
    pub fn with(mut self, strategy: impl QuizStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Add the two HTTP strategies, sharing one client.
    pub fn remote(self, config: &FetcherConfig) -> Result<Self, StrategyError> {
        let client = HttpClient::new(&config.user_agent, config.timeout_ms)?;
        Ok(self
            .with(RemoteFetchStrategy::new(client.clone(), &config.base_url))
            .with(PageScrapeStrategy::new(client, &config.base_url)))
    }

    pub fn build(self) -> StrategyChain {
        StrategyChain {
            strategies: self.strategies,
        }
    }
}
