use thiserror::Error;

/// Maximum characters to include in error message body for debugging.
pub(crate) const MAX_ERROR_BODY_CHARS: usize = 200;

/// Errors that can occur when talking to the Docebo LMS.
#[derive(Debug, Error)]
pub enum SsoError {
    /// HTTP/network layer error from reqwest.
    #[error("HTTP request failed: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// The LMS answered with a status code >= 300. The body is never parsed.
    #[error("HTTP {status} with body: {body}")]
    Http { status: u16, body: String },

    /// A success response whose body is not JSON, surfaced on request.
    #[error("response body is not valid JSON: {0}")]
    Decode(String),

    /// A decoded body did not match the requested type.
    #[error("deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// The configured domain or a derived URL is malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Client configuration error.
    #[error("config error: {0}")]
    Config(String),
}

impl SsoError {
    /// Returns `true` if the error is potentially recoverable by retrying.
    ///
    /// Timeouts, connection failures, HTTP 429 and 5xx are retryable.
    /// Everything else is scoped to a call that will fail the same way again.
    pub fn is_retryable(&self) -> bool {
        match self {
            SsoError::HttpClient(e) => e.is_timeout() || e.is_connect(),
            SsoError::Http { status, .. } => *status == 429 || *status >= 500,
            SsoError::Decode(_)
            | SsoError::Deserialize(_)
            | SsoError::InvalidUrl(_)
            | SsoError::Config(_) => false,
        }
    }

    /// Returns the HTTP status code if the LMS rejected the call.
    pub fn status(&self) -> Option<u16> {
        match self {
            SsoError::Http { status, .. } => Some(*status),
            SsoError::HttpClient(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// A specialized Result type for Docebo operations.
pub type Result<T> = std::result::Result<T, SsoError>;

/// Truncates a string to at most `max_chars` characters on a valid UTF-8 boundary.
pub(crate) fn truncate_str(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
