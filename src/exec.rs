//! Common execution utilities for async and blocking clients.

use std::time::Duration;

use crate::config::RetryPolicy;
use crate::error::{MAX_ERROR_BODY_CHARS, Result, SsoError, truncate_str};
use crate::response::ApiResponse;

/// Interprets a response: status >= 300 is an error and the body is never
/// parsed, anything else is handed to [`ApiResponse::from_body`].
pub(crate) fn handle_response(status: reqwest::StatusCode, text: String) -> Result<ApiResponse> {
    if status.as_u16() >= 300 {
        return Err(SsoError::Http {
            status: status.as_u16(),
            body: truncate_str(&text, MAX_ERROR_BODY_CHARS).to_string(),
        });
    }
    Ok(ApiResponse::from_body(text))
}

/// Decides whether a failed attempt is retried.
///
/// `attempt` counts completed attempts, starting at 1. Returns the delay to
/// wait before the next attempt, or `None` to give up.
pub(crate) fn next_retry_delay(
    policy: &RetryPolicy,
    attempt: u32,
    err: &SsoError,
) -> Option<Duration> {
    if attempt > policy.max_retries || !err.is_retryable() {
        return None;
    }
    Some(policy.delay_for(attempt))
}
