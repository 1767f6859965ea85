//! Fetch the quiz page and read its schema.org question markup.

use super::QuizStrategy;
use crate::acquisition::http_client::{quiz_url, HttpClient};
use crate::acquisition::schema_org;
use crate::error::StrategyError;
use crate::model::QuizResult;
use async_trait::async_trait;

pub struct PageScrapeStrategy {
    client: HttpClient,
    base_url: String,
}

impl PageScrapeStrategy {
    pub fn new(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl QuizStrategy for PageScrapeStrategy {
    fn name(&self) -> &'static str {
        "page-scrape"
    }

    async fn attempt(&self, quiz_id: &str) -> Result<Option<QuizResult>, StrategyError> {
        let url = quiz_url(&self.base_url, quiz_id)?;
        let resp = self.client.get(&url).await?;

        let questions = schema_org::extract_questions(&resp.body);
        if questions.is_empty() {
            return Ok(None);
        }
        Ok(Some(QuizResult::new(quiz_id, questions)))
    }
}
