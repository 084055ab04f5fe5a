//! Remote search suggestion client.
//!
//! One request shape: `GET <base>/suggestions?q=<query>`, answered with a
//! raw response body. Parsing, caching, retries, and rate limiting are the
//! caller's concern; this layer only owns query validation, the transport,
//! and the error mapping.

use crate::common::errors::SearchError;
use crate::provider::SearchProvider;
use std::time::Duration;

/// How much of an error response body is kept in the error value.
const ERROR_BODY_SNIPPET_LEN: usize = 200;

/// HTTP client for a provider's suggestion endpoint.
#[derive(Debug, Clone)]
pub struct SuggestionClient {
    client: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl SuggestionClient {
    /// Create a client for the given base URL.
    ///
    /// The base URL is validated eagerly so misconfiguration surfaces at
    /// startup rather than on the first keystroke.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SearchError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url).map_err(|e| SearchError::InvalidBaseUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::ClientCreation {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url,
            timeout_secs: timeout.as_secs(),
        })
    }

    /// Create a client for a registered provider's suggestion endpoint.
    pub fn for_provider(
        provider: &SearchProvider,
        timeout: Duration,
    ) -> Result<Self, SearchError> {
        let base = provider
            .suggestions_base
            .ok_or_else(|| SearchError::UnsupportedProvider {
                id: provider.id.to_string(),
            })?;
        Self::new(base, timeout)
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the request URL for a query.
    ///
    /// Rejects empty and whitespace-only queries before any I/O happens.
    pub fn suggestion_url(&self, query: &str) -> Result<String, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        Ok(format!(
            "{}/suggestions?q={}",
            self.base_url,
            urlencoding::encode(query)
        ))
    }

    /// Fetch suggestions for a query and return the raw response body.
    ///
    /// Issues exactly one GET per call. Non-success statuses become
    /// [`SearchError::HttpStatus`] with a body snippet for logging.
    pub async fn fetch_raw(&self, query: &str) -> Result<String, SearchError> {
        let url = self.suggestion_url(query)?;
        log::debug!("Fetching suggestions from {url}");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                SearchError::Timeout {
                    url: url.clone(),
                    seconds: self.timeout_secs,
                }
            } else {
                SearchError::RequestFailed {
                    url: url.clone(),
                    reason: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            body.truncate(ERROR_BODY_SNIPPET_LEN);
            return Err(SearchError::HttpStatus {
                url,
                status: status.as_u16(),
                body,
            });
        }

        response
            .text()
            .await
            .map_err(|e| SearchError::InvalidResponse {
                url,
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider;
    use claims::{assert_err, assert_ok};

    fn client() -> SuggestionClient {
        SuggestionClient::new("https://www.startpage.com", Duration::from_secs(10))
            .expect("valid base url")
    }

    #[test]
    fn test_suggestion_url_carries_query_parameter() {
        let url = client().suggestion_url("rust launcher").expect("valid query");
        assert_eq!(url, "https://www.startpage.com/suggestions?q=rust%20launcher");
    }

    #[test]
    fn test_suggestion_url_encodes_reserved_characters() {
        let url = client().suggestion_url("a&b=c").expect("valid query");
        assert_eq!(url, "https://www.startpage.com/suggestions?q=a%26b%3Dc");
    }

    #[test]
    fn test_trailing_slash_in_base_url_is_normalized() {
        let client = SuggestionClient::new("https://www.startpage.com/", Duration::from_secs(10))
            .expect("valid base url");
        let url = client.suggestion_url("x").expect("valid query");
        assert_eq!(url, "https://www.startpage.com/suggestions?q=x");
    }

    #[test]
    fn test_empty_query_is_rejected() {
        assert!(matches!(
            client().suggestion_url(""),
            Err(SearchError::EmptyQuery)
        ));
        assert!(matches!(
            client().suggestion_url("   "),
            Err(SearchError::EmptyQuery)
        ));
    }

    #[tokio::test]
    async fn test_fetch_rejects_empty_query_before_any_io() {
        // Unroutable base URL: if validation did not short-circuit, this
        // would fail with a transport error instead of EmptyQuery.
        let client =
            SuggestionClient::new("http://invalid.invalid", Duration::from_secs(1)).unwrap();
        assert!(matches!(
            client.fetch_raw("  ").await,
            Err(SearchError::EmptyQuery)
        ));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert_err!(SuggestionClient::new(
            "not a url",
            Duration::from_secs(10)
        ));
    }

    #[test]
    fn test_client_for_provider() {
        assert_ok!(SuggestionClient::for_provider(
            &provider::STARTPAGE,
            Duration::from_secs(10)
        ));
        assert!(matches!(
            SuggestionClient::for_provider(&provider::GOOGLE, Duration::from_secs(10)),
            Err(SearchError::UnsupportedProvider { .. })
        ));
    }
}
