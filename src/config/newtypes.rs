//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::auth::encode_latin1;
use crate::error::ConfigError;
use std::fmt;

/// A validated AWS access key id.
///
/// Sent verbatim as the `AWSAccessKeyId` query parameter.
///
/// # Example
///
/// ```rust
/// use product_lookup::AccessKey;
///
/// let key = AccessKey::new("AKIAEXAMPLE").unwrap();
/// assert_eq!(key.as_ref(), "AKIAEXAMPLE");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessKey(String);

impl AccessKey {
    /// Creates a new validated access key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyAccessKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for AccessKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated AWS secret access key.
///
/// The key is used as HMAC key material and must therefore be representable
/// in ISO-8859-1: every character is one byte of the key. Keys containing
/// characters above `U+00FF` are rejected on construction.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `SecretKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use product_lookup::SecretKey;
///
/// let secret = SecretKey::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "SecretKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    /// Creates a new validated secret key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySecretKey`] if the key is empty, or
    /// [`ConfigError::SecretKeyNotLatin1`] if it cannot be encoded as ISO-8859-1.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptySecretKey);
        }
        if encode_latin1(&key).is_none() {
            return Err(ConfigError::SecretKeyNotLatin1);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for SecretKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(*****)")
    }
}

/// A validated associate (affiliate) tag.
///
/// # Example
///
/// ```rust
/// use product_lookup::AssociateTag;
///
/// let tag = AssociateTag::new("mytag-20").unwrap();
/// assert_eq!(tag.as_ref(), "mytag-20");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssociateTag(String);

impl AssociateTag {
    /// Creates a new validated associate tag.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAssociateTag`] if the tag is empty.
    pub fn new(tag: impl Into<String>) -> Result<Self, ConfigError> {
        let tag = tag.into();
        let tag = tag.trim().to_string();
        if tag.is_empty() {
            return Err(ConfigError::EmptyAssociateTag);
        }
        Ok(Self(tag))
    }
}

impl AsRef<str> for AssociateTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated service endpoint: scheme, host (with optional port) and path.
///
/// The host and path are part of the signed string, so they are kept exactly
/// as they will be sent. The host is lowercased; the path defaults to `/`.
///
/// # Example
///
/// ```rust
/// use product_lookup::Endpoint;
///
/// let endpoint = Endpoint::default();
/// assert_eq!(endpoint.scheme(), "http");
/// assert_eq!(endpoint.host(), "webservices.amazon.com");
/// assert_eq!(endpoint.path(), "/onca/xml");
///
/// let endpoint = Endpoint::new("https://webservices.amazon.co.uk/onca/xml").unwrap();
/// assert_eq!(endpoint.host(), "webservices.amazon.co.uk");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    scheme: String,
    host: String,
    path: String,
}

impl Endpoint {
    /// The endpoint used when none is configured.
    pub const DEFAULT_URL: &'static str = "http://webservices.amazon.com/onca/xml";

    /// Creates a new validated endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URL has no scheme, no
    /// host, non-ASCII characters, or a query string or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().to_string();
        let invalid = || ConfigError::InvalidEndpoint { url: url.clone() };

        if !url.is_ascii() || url.contains(['?', '#', ' ']) {
            return Err(invalid());
        }

        let (scheme, rest) = url.split_once("://").ok_or_else(invalid)?;
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let (host, path) = rest
            .find('/')
            .map_or((rest, "/"), |i| (&rest[..i], &rest[i..]));
        if host.is_empty() || host.starts_with(':') {
            return Err(invalid());
        }

        Ok(Self {
            scheme: scheme.to_ascii_lowercase(),
            host: host.to_ascii_lowercase(),
            path: path.to_string(),
        })
    }

    /// Returns the URL scheme (e.g., "http").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the host, including the port when one was given.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the request path (e.g., "/onca/xml").
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Builds the absolute URL for the given query string.
    #[must_use]
    pub fn url_with_query(&self, query: &str) -> String {
        format!("{}://{}{}?{}", self.scheme, self.host, self.path, query)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            host: "webservices.amazon.com".to_string(),
            path: "/onca/xml".to_string(),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.host, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_key_rejects_empty_string() {
        assert!(matches!(AccessKey::new(""), Err(ConfigError::EmptyAccessKey)));
    }

    #[test]
    fn test_secret_key_masks_value_in_debug() {
        let secret = SecretKey::new("super-secret-key").unwrap();
        let debug_output = format!("{:?}", secret);
        assert_eq!(debug_output, "SecretKey(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_secret_key_accepts_latin1_and_rejects_wider_characters() {
        assert!(SecretKey::new("caf\u{e9}").is_ok());
        assert!(matches!(
            SecretKey::new("\u{20ac}uro"),
            Err(ConfigError::SecretKeyNotLatin1)
        ));
        assert!(matches!(SecretKey::new(""), Err(ConfigError::EmptySecretKey)));
    }

    #[test]
    fn test_associate_tag_is_trimmed() {
        let tag = AssociateTag::new("  mytag-20 ").unwrap();
        assert_eq!(tag.as_ref(), "mytag-20");
        assert!(matches!(
            AssociateTag::new("   "),
            Err(ConfigError::EmptyAssociateTag)
        ));
    }

    #[test]
    fn test_default_endpoint_matches_default_url() {
        let parsed = Endpoint::new(Endpoint::DEFAULT_URL).unwrap();
        assert_eq!(parsed, Endpoint::default());
        assert_eq!(parsed.to_string(), Endpoint::DEFAULT_URL);
    }

    #[test]
    fn test_endpoint_keeps_port_in_host() {
        let endpoint = Endpoint::new("http://127.0.0.1:8080/onca/xml").unwrap();
        assert_eq!(endpoint.host(), "127.0.0.1:8080");
        assert_eq!(endpoint.path(), "/onca/xml");
        assert_eq!(
            endpoint.url_with_query("A=1"),
            "http://127.0.0.1:8080/onca/xml?A=1"
        );
    }

    #[test]
    fn test_endpoint_without_path_defaults_to_root() {
        let endpoint = Endpoint::new("HTTPS://Example.COM").unwrap();
        assert_eq!(endpoint.scheme(), "https");
        assert_eq!(endpoint.host(), "example.com");
        assert_eq!(endpoint.path(), "/");
    }

    #[test]
    fn test_endpoint_rejects_invalid() {
        assert!(Endpoint::new("webservices.amazon.com/onca/xml").is_err());
        assert!(Endpoint::new("http://").is_err());
        assert!(Endpoint::new("://example.com").is_err());
        assert!(Endpoint::new("http://example.com/onca/xml?x=1").is_err());
        assert!(Endpoint::new("http://exämple.com/").is_err());
    }
}
