//! Acquisition strategies.
//!
//! Each strategy is one self-contained technique for turning a quiz
//! identifier into a [`QuizResult`]. The chain tries them in order.

pub mod page_scrape;
pub mod remote_fetch;
pub mod simulation;

use crate::error::StrategyError;
use crate::model::QuizResult;
use async_trait::async_trait;

pub use page_scrape::PageScrapeStrategy;
pub use remote_fetch::RemoteFetchStrategy;
pub use simulation::SimulationStrategy;

/// A technique for obtaining quiz content from one upstream shape.
#[async_trait]
pub trait QuizStrategy: Send + Sync {
    /// Stable name used in logs and failure reports.
    fn name(&self) -> &'static str;

    /// Whether results from this strategy are placeholders rather than
    /// upstream data.
    fn is_placeholder(&self) -> bool {
        false
    }

    /// Try to acquire the quiz. `Ok(None)` means the strategy ran cleanly
    /// but found nothing.
    async fn attempt(&self, quiz_id: &str) -> Result<Option<QuizResult>, StrategyError>;
}
