//! HTTP transport for signed lookups.
//!
//! This module provides the [`HttpClient`] type, which performs a single GET
//! of a fully-formed URL with a timeout and a transport-level retry budget.

use std::time::Duration;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::config::ProductApiConfig;

/// Fixed retry wait time in seconds.
pub const RETRY_WAIT_TIME: u64 = 1;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client that fetches signed request URLs.
///
/// The client handles:
/// - The per-attempt timeout
/// - Automatic retries for connection failures, timeouts, 429 and 5xx responses
/// - Returning the body text of 2xx responses
///
/// Other statuses (400, 403, ...) are returned immediately as
/// [`HttpError::Response`]; they mean the request itself was rejected and
/// sending it again would not help.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use std::time::Duration;
/// use product_lookup::clients::HttpClient;
///
/// let client = HttpClient::new(Duration::from_secs(3), 3);
/// let body = client.get(signed.url()).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Total attempts per request (retries + 1).
    tries: u32,
    /// Per-attempt timeout.
    timeout: Duration,
    /// Wait between attempts.
    retry_wait: Duration,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `timeout` - Per-attempt timeout
    /// * `retries` - Number of retries after the first attempt
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(timeout: Duration, retries: u32) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .user_agent(format!("product-lookup-api/{SDK_VERSION}"))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            tries: retries.saturating_add(1),
            timeout,
            retry_wait: Duration::from_secs(RETRY_WAIT_TIME),
        }
    }

    /// Creates a client using the timeout and retry count of a configuration.
    #[must_use]
    pub fn from_config(config: &ProductApiConfig) -> Self {
        Self::new(config.request_timeout(), config.request_retries())
    }

    /// Overrides the wait between attempts.
    #[must_use]
    pub fn with_retry_wait(mut self, wait: Duration) -> Self {
        self.retry_wait = wait;
        self
    }

    /// Returns the total number of attempts per request.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// Returns the per-attempt timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the wait between attempts.
    #[must_use]
    pub const fn retry_wait(&self) -> Duration {
        self.retry_wait
    }

    /// Sends a GET request and returns the body text of a 2xx response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - A non-retryable status is received (`Response`)
    /// - A non-retryable network error occurs (`Network`)
    /// - Every attempt failed transiently (`MaxRetries`); with a single
    ///   attempt configured the underlying error is returned instead
    pub async fn get(&self, url: &str) -> Result<String, HttpError> {
        let mut tries: u32 = 0;
        loop {
            tries += 1;

            let failure = match self.client.get(url).send().await {
                Ok(res) => {
                    let code = res.status().as_u16();
                    let body = res.text().await?;

                    if is_success(code) {
                        return Ok(body);
                    }
                    if !Self::is_retryable_status(code) {
                        return Err(HttpResponseError { code, body }.into());
                    }
                    TransientFailure::Status { code, body }
                }
                Err(err) if Self::is_transient(&err) => TransientFailure::Network(err),
                Err(err) => return Err(err.into()),
            };

            if tries >= self.tries {
                return Err(failure.into_error(self.tries));
            }

            tracing::warn!(
                attempt = tries,
                max_tries = self.tries,
                "Transient failure fetching lookup response, retrying: {}",
                failure.describe()
            );
            tokio::time::sleep(self.retry_wait).await;
        }
    }

    /// Returns `true` for statuses that indicate a transient server condition.
    #[must_use]
    pub const fn is_retryable_status(code: u16) -> bool {
        code == 429 || (code >= 500 && code <= 599)
    }

    fn is_transient(err: &reqwest::Error) -> bool {
        err.is_connect() || err.is_timeout()
    }
}

const fn is_success(code: u16) -> bool {
    code >= 200 && code <= 299
}

/// The last transient failure of a retry loop.
enum TransientFailure {
    Status { code: u16, body: String },
    Network(reqwest::Error),
}

impl TransientFailure {
    fn describe(&self) -> String {
        match self {
            Self::Status { code, .. } => format!("HTTP status {code}"),
            Self::Network(err) => err.to_string(),
        }
    }

    fn into_error(self, tries: u32) -> HttpError {
        if tries == 1 {
            return match self {
                Self::Status { code, body } => HttpResponseError { code, body }.into(),
                Self::Network(err) => err.into(),
            };
        }

        match self {
            Self::Status { code, body } => MaxHttpRetriesExceededError {
                code: Some(code),
                tries,
                message: body,
            }
            .into(),
            Self::Network(err) => MaxHttpRetriesExceededError {
                code: None,
                tries,
                message: err.to_string(),
            }
            .into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessKey, AssociateTag, SecretKey};

    #[test]
    fn test_tries_is_retries_plus_one() {
        let client = HttpClient::new(Duration::from_secs(3), 3);
        assert_eq!(client.tries(), 4);
        assert_eq!(client.timeout(), Duration::from_secs(3));
        assert_eq!(client.retry_wait(), Duration::from_secs(RETRY_WAIT_TIME));

        let client = HttpClient::new(Duration::from_secs(1), 0);
        assert_eq!(client.tries(), 1);
    }

    #[test]
    fn test_from_config_uses_transport_settings() {
        let config = ProductApiConfig::builder()
            .access_key(AccessKey::new("key").unwrap())
            .secret_key(SecretKey::new("secret").unwrap())
            .associate_tag(AssociateTag::new("tag-20").unwrap())
            .request_timeout(Duration::from_secs(7))
            .request_retries(2)
            .build()
            .unwrap();

        let client = HttpClient::from_config(&config);
        assert_eq!(client.timeout(), Duration::from_secs(7));
        assert_eq!(client.tries(), 3);
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(HttpClient::is_retryable_status(429));
        assert!(HttpClient::is_retryable_status(500));
        assert!(HttpClient::is_retryable_status(503));
        assert!(!HttpClient::is_retryable_status(400));
        assert!(!HttpClient::is_retryable_status(403));
        assert!(!HttpClient::is_retryable_status(404));
    }

    #[test]
    fn test_single_try_status_failure_is_a_response_error() {
        let failure = TransientFailure::Status {
            code: 503,
            body: "busy".to_string(),
        };
        assert!(matches!(
            failure.into_error(1),
            HttpError::Response(HttpResponseError { code: 503, .. })
        ));
    }

    #[test]
    fn test_exhausted_status_failure_is_max_retries() {
        let failure = TransientFailure::Status {
            code: 500,
            body: "oops".to_string(),
        };
        match failure.into_error(4) {
            HttpError::MaxRetries(e) => {
                assert_eq!(e.code, Some(500));
                assert_eq!(e.tries, 4);
                assert_eq!(e.message, "oops");
            }
            other => panic!("Expected MaxRetries, got {other:?}"),
        }
    }
}
