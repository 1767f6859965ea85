//! Async HTTP client wrapping reqwest.
//!
//! Not a browser, just HTTP requests. One attempt per call with a bounded
//! timeout; callers treat any failure as a failure of their own strategy.

use crate::error::StrategyError;
use std::time::Duration;

/// Response from an HTTP GET request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Original requested URL.
    pub url: String,
    /// Final URL after redirects.
    pub final_url: String,
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

/// HTTP client shared by the remote strategies.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a client with the given user agent and request timeout.
    ///
    /// Fails when the user agent is not a valid header value.
    pub fn new(user_agent: &str, timeout_ms: u64) -> Result<Self, StrategyError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(user_agent)
            .build()
            .map_err(StrategyError::Client)?;

        Ok(Self { client })
    }

    /// Perform a single GET request.
    ///
    /// Transport errors and timeouts map to [`StrategyError::Fetch`]; a
    /// non-success status maps to [`StrategyError::Status`].
    pub async fn get(&self, url: &str) -> Result<HttpResponse, StrategyError> {
        let r = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| StrategyError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = r.status().as_u16();
        let final_url = r.url().to_string();

        if !r.status().is_success() {
            return Err(StrategyError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = r.text().await.map_err(|source| StrategyError::Fetch {
            url: url.to_string(),
            source,
        })?;

        Ok(HttpResponse {
            url: url.to_string(),
            final_url,
            status,
            body,
        })
    }
}

/// Build `{base_url}/quiz/{quiz_id}`, percent-encoding the identifier.
pub fn quiz_url(base_url: &str, quiz_id: &str) -> Result<String, StrategyError> {
    let mut url =
        url::Url::parse(base_url).map_err(|e| StrategyError::Url(format!("{base_url}: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| StrategyError::Url(format!("{base_url}: cannot be a base")))?
        .pop_if_empty()
        .push("quiz")
        .push(quiz_id);
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_user_agent_is_rejected() {
        assert!(matches!(
            HttpClient::new("bad\nagent", 1000),
            Err(StrategyError::Client(_))
        ));
        assert!(HttpClient::new("test-agent", 1000).is_ok());
    }

    #[tokio::test]
    async fn test_timeout_is_applied() {
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let client = HttpClient::new("test-agent", 200).unwrap();
        let started = std::time::Instant::now();
        let err = client.get(&server.uri()).await.unwrap_err();

        assert!(matches!(err, StrategyError::Fetch { .. }));
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn test_quiz_url() {
        assert_eq!(
            quiz_url("https://quizizz.com", "5f1a2b").unwrap(),
            "https://quizizz.com/quiz/5f1a2b"
        );
        assert_eq!(
            quiz_url("http://127.0.0.1:9000/", "abc").unwrap(),
            "http://127.0.0.1:9000/quiz/abc"
        );
    }

    #[test]
    fn test_quiz_url_encodes_identifier() {
        assert_eq!(
            quiz_url("https://quizizz.com", "a/b c").unwrap(),
            "https://quizizz.com/quiz/a%2Fb%20c"
        );
    }

    #[test]
    fn test_quiz_url_rejects_bad_base() {
        assert!(matches!(
            quiz_url("not a url", "abc"),
            Err(StrategyError::Url(_))
        ));
    }
}
