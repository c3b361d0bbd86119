//! HTTP-specific error types.
//!
//! - [`HttpResponseError`]: a non-2xx response that is not worth retrying
//! - [`MaxHttpRetriesExceededError`]: the retry budget was spent on transient failures
//! - [`HttpError`]: unified error type for the transport layer
//!
//! # Example
//!
//! ```rust,ignore
//! use product_lookup::clients::HttpError;
//!
//! match client.get(&url).await {
//!     Ok(body) => println!("{body}"),
//!     Err(HttpError::Response(e)) => println!("HTTP {}: {}", e.code, e.body),
//!     Err(HttpError::MaxRetries(e)) => println!("gave up after {} tries", e.tries),
//!     Err(HttpError::Network(e)) => println!("network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-retryable, non-2xx response.
///
/// The body is kept verbatim so callers can inspect the service's error
/// document.
///
/// # Example
///
/// ```rust
/// use product_lookup::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 403,
///     body: "<ItemLookupErrorResponse/>".to_string(),
/// };
/// assert_eq!(error.to_string(), "HTTP request failed with status 403");
/// ```
#[derive(Debug, Error)]
#[error("HTTP request failed with status {code}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
}

/// Error returned when the retry budget has been exhausted.
///
/// Raised when every attempt ended in a transient failure: a connection
/// error, a timeout, or a 429/5xx response.
///
/// # Example
///
/// ```rust
/// use product_lookup::clients::MaxHttpRetriesExceededError;
///
/// let error = MaxHttpRetriesExceededError {
///     code: Some(503),
///     tries: 4,
///     message: "Service Unavailable".to_string(),
/// };
///
/// assert!(error.to_string().starts_with("Exceeded maximum retry count of 4."));
/// ```
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response, if one was received.
    pub code: Option<u16>,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// Description of the last failure.
    pub message: String,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response that is not retried.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Network or connection error that is not retried.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_includes_status_code() {
        let error = HttpResponseError {
            code: 404,
            body: "Not Found".to_string(),
        };
        assert!(error.to_string().contains("404"));
    }

    #[test]
    fn test_max_retries_error_includes_retry_count() {
        let error = MaxHttpRetriesExceededError {
            code: None,
            tries: 3,
            message: "operation timed out".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains('3'));
        assert!(message.contains("Exceeded maximum retry count"));
        assert!(message.contains("operation timed out"));
    }

    #[test]
    fn test_http_error_wraps_response_error() {
        let error: HttpError = HttpResponseError {
            code: 400,
            body: String::new(),
        }
        .into();
        assert!(matches!(error, HttpError::Response(HttpResponseError { code: 400, .. })));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let error: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            body: "test".to_string(),
        };
        let _ = error;

        let error: &dyn std::error::Error = &MaxHttpRetriesExceededError {
            code: Some(429),
            tries: 3,
            message: "test".to_string(),
        };
        let _ = error;
    }
}
