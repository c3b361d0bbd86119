//! Configuration types for the lookup client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ProductApiConfig`]: The configuration struct holding all client settings
//! - [`ProductApiConfigBuilder`]: A builder for constructing [`ProductApiConfig`] instances
//! - [`AccessKey`], [`SecretKey`], [`AssociateTag`]: Validated credential newtypes
//! - [`Endpoint`]: The validated service endpoint (scheme, host, path)
//! - [`ApiVersion`]: The API version sent with every request
//!
//! # Example
//!
//! ```rust
//! use product_lookup::{AccessKey, AssociateTag, ProductApiConfig, SecretKey};
//!
//! let config = ProductApiConfig::builder()
//!     .access_key(AccessKey::new("my-access-key").unwrap())
//!     .secret_key(SecretKey::new("my-secret").unwrap())
//!     .associate_tag(AssociateTag::new("mytag-20").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.request_retries(), 3);
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessKey, AssociateTag, Endpoint, SecretKey};
pub use version::ApiVersion;

use std::time::Duration;

use crate::error::ConfigError;

/// Default pacing interval between lookups (advisory).
pub const DEFAULT_QUERY_RATE: Duration = Duration::from_millis(1100);

/// Default per-attempt request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

/// Default number of transport-level retries after the first attempt.
pub const DEFAULT_REQUEST_RETRIES: u32 = 3;

/// Configuration for the lookup client.
///
/// Holds the credentials used to sign requests, the endpoint they are sent
/// to, and the transport policy.
///
/// # Pacing
///
/// `query_rate` is the interval the service expects between calls. The client
/// does not sleep or throttle on it; callers that issue many lookups should
/// space them out themselves.
///
/// # Thread Safety
///
/// `ProductApiConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ProductApiConfig {
    access_key: AccessKey,
    secret_key: SecretKey,
    associate_tag: AssociateTag,
    endpoint: Endpoint,
    api_version: ApiVersion,
    query_rate: Duration,
    request_timeout: Duration,
    request_retries: u32,
}

impl ProductApiConfig {
    /// Creates a new builder for constructing a `ProductApiConfig`.
    #[must_use]
    pub fn builder() -> ProductApiConfigBuilder {
        ProductApiConfigBuilder::new()
    }

    /// Returns the access key.
    #[must_use]
    pub const fn access_key(&self) -> &AccessKey {
        &self.access_key
    }

    /// Returns the secret key.
    #[must_use]
    pub const fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Returns the associate tag.
    #[must_use]
    pub const fn associate_tag(&self) -> &AssociateTag {
        &self.associate_tag
    }

    /// Returns the service endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the advisory pacing interval between lookups.
    #[must_use]
    pub const fn query_rate(&self) -> Duration {
        self.query_rate
    }

    /// Returns the per-attempt request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the number of transport-level retries.
    #[must_use]
    pub const fn request_retries(&self) -> u32 {
        self.request_retries
    }
}

// Verify ProductApiConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ProductApiConfig>();
};

/// Builder for constructing [`ProductApiConfig`] instances.
///
/// Required fields are `access_key`, `secret_key` and `associate_tag`.
///
/// # Defaults
///
/// - `endpoint`: [`Endpoint::DEFAULT_URL`]
/// - `api_version`: [`ApiVersion::latest`]
/// - `query_rate`: 1.1 seconds
/// - `request_timeout`: 3 seconds
/// - `request_retries`: 3
#[derive(Debug, Default)]
pub struct ProductApiConfigBuilder {
    access_key: Option<AccessKey>,
    secret_key: Option<SecretKey>,
    associate_tag: Option<AssociateTag>,
    endpoint: Option<Endpoint>,
    api_version: Option<ApiVersion>,
    query_rate: Option<Duration>,
    request_timeout: Option<Duration>,
    request_retries: Option<u32>,
}

impl ProductApiConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access key (required).
    #[must_use]
    pub fn access_key(mut self, key: AccessKey) -> Self {
        self.access_key = Some(key);
        self
    }

    /// Sets the secret key (required).
    #[must_use]
    pub fn secret_key(mut self, key: SecretKey) -> Self {
        self.secret_key = Some(key);
        self
    }

    /// Sets the associate tag (required).
    #[must_use]
    pub fn associate_tag(mut self, tag: AssociateTag) -> Self {
        self.associate_tag = Some(tag);
        self
    }

    /// Sets the service endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the advisory pacing interval.
    #[must_use]
    pub const fn query_rate(mut self, rate: Duration) -> Self {
        self.query_rate = Some(rate);
        self
    }

    /// Sets the per-attempt request timeout.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Sets the number of transport-level retries after the first attempt.
    #[must_use]
    pub const fn request_retries(mut self, retries: u32) -> Self {
        self.request_retries = Some(retries);
        self
    }

    /// Builds the [`ProductApiConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_key`,
    /// `secret_key` or `associate_tag` are not set.
    pub fn build(self) -> Result<ProductApiConfig, ConfigError> {
        let access_key = self.access_key.ok_or(ConfigError::MissingRequiredField {
            field: "access_key",
        })?;
        let secret_key = self.secret_key.ok_or(ConfigError::MissingRequiredField {
            field: "secret_key",
        })?;
        let associate_tag = self
            .associate_tag
            .ok_or(ConfigError::MissingRequiredField {
                field: "associate_tag",
            })?;

        Ok(ProductApiConfig {
            access_key,
            secret_key,
            associate_tag,
            endpoint: self.endpoint.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            query_rate: self.query_rate.unwrap_or(DEFAULT_QUERY_RATE),
            request_timeout: self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
            request_retries: self.request_retries.unwrap_or(DEFAULT_REQUEST_RETRIES),
        })
    }
}
