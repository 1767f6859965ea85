//! Fetch the quiz page and decode the application state embedded in it.

use super::QuizStrategy;
use crate::acquisition::embedded;
use crate::acquisition::http_client::{quiz_url, HttpClient};
use crate::error::StrategyError;
use crate::model::QuizResult;
use crate::normalize::normalize;
use async_trait::async_trait;

pub struct RemoteFetchStrategy {
    client: HttpClient,
    base_url: String,
}

impl RemoteFetchStrategy {
    pub fn new(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl QuizStrategy for RemoteFetchStrategy {
    fn name(&self) -> &'static str {
        "remote-fetch"
    }

    async fn attempt(&self, quiz_id: &str) -> Result<Option<QuizResult>, StrategyError> {
        let url = quiz_url(&self.base_url, quiz_id)?;
        let resp = self.client.get(&url).await?;
        tracing::debug!(
            "fetched {} ({} bytes, status {})",
            resp.final_url,
            resp.body.len(),
            resp.status
        );

        let Some(raw) = embedded::find_questions(&resp.body)? else {
            return Ok(None);
        };
        Ok(Some(QuizResult::new(quiz_id, normalize(&raw))))
    }
}
