use thiserror::Error;

/// Errors produced by the search subsystem.
///
/// This enum classifies everything that can go wrong between the launcher
/// asking for suggestions and a response body arriving: query validation,
/// client construction, transport failures, and non-success HTTP statuses.
/// Each variant carries enough context (URL, status, reason) to be logged
/// or surfaced to the user without further lookups.
///
/// # Examples
///
/// ```no_run
/// use hearth_core::SearchError;
///
/// fn describe(error: &SearchError) -> String {
///     match error {
///         SearchError::EmptyQuery => "Type something to search for.".to_string(),
///         SearchError::Timeout { url, seconds } => {
///             format!("{url} did not answer within {seconds}s")
///         }
///         SearchError::HttpStatus { status, .. } => {
///             format!("The suggestion service answered with HTTP {status}")
///         }
///         other => other.to_string(),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum SearchError {
    /// The query was empty or whitespace-only. Rejected before any I/O.
    #[error("Suggestion query must not be empty")]
    EmptyQuery,

    /// The configured suggestion base URL could not be parsed.
    #[error("Invalid suggestion base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Failed to construct the HTTP client.
    #[error("Failed to create HTTP client: {reason}")]
    ClientCreation { reason: String },

    /// The request could not be completed (DNS, connect, TLS, ...).
    #[error("Request to {url} failed: {reason}")]
    RequestFailed { url: String, reason: String },

    /// The request exceeded the configured timeout.
    #[error("Request to {url} timed out after {seconds}s")]
    Timeout { url: String, seconds: u64 },

    /// The service answered with a non-success status.
    #[error("Request to {url} returned HTTP {status}: {body}")]
    HttpStatus {
        url: String,
        status: u16,
        body: String,
    },

    /// The response body could not be read.
    #[error("Failed to read response body from {url}: {reason}")]
    InvalidResponse { url: String, reason: String },

    /// The selected provider does not expose a suggestion endpoint.
    #[error("Search provider '{id}' has no suggestion endpoint")]
    UnsupportedProvider { id: String },
}
