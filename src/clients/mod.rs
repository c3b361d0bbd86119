//! HTTP transport layer.
//!
//! This module provides the thin transport used by
//! [`ProductApi`](crate::ProductApi): a GET of an already-signed URL with a
//! timeout and a retry budget.
//!
//! - [`HttpClient`]: The async HTTP client
//! - [`HttpError`]: Unified transport error type
//!
//! # Retry Behavior
//!
//! - **Connection failures and timeouts**: retried
//! - **429 and 5xx**: retried with a fixed 1-second delay
//! - **Other non-2xx (400, 403, ...)**: returned immediately without retry
//!
//! The number of retries comes from
//! [`ProductApiConfig::request_retries`](crate::ProductApiConfig::request_retries).

mod errors;
mod http_client;

pub use errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
pub use http_client::{HttpClient, RETRY_WAIT_TIME, SDK_VERSION};
