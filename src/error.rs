//! Error types for client configuration.
//!
//! This module contains the error type returned while building
//! [`ProductApiConfig`](crate::ProductApiConfig) and its validated newtypes.
//! Lookup-time errors live in [`crate::lookup`].
//!
//! # Example
//!
//! ```rust
//! use product_lookup::{AccessKey, ConfigError};
//!
//! let result = AccessKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access key cannot be empty.
    #[error("Access key cannot be empty. Please provide a valid AWS access key id.")]
    EmptyAccessKey,

    /// Secret key cannot be empty.
    #[error("Secret key cannot be empty. Please provide a valid AWS secret access key.")]
    EmptySecretKey,

    /// Secret key contains characters outside ISO-8859-1.
    #[error("Secret key contains characters that cannot be encoded as ISO-8859-1.")]
    SecretKeyNotLatin1,

    /// Associate tag cannot be empty.
    #[error("Associate tag cannot be empty. Please provide your associate (affiliate) tag.")]
    EmptyAssociateTag,

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint '{url}'. Expected format: 'http://host/path' (e.g., 'http://webservices.amazon.com/onca/xml').")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM-DD' (e.g., '2013-08-01').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_access_key_error_message() {
        let message = ConfigError::EmptyAccessKey.to_string();
        assert!(message.contains("Access key cannot be empty"));
    }

    #[test]
    fn test_invalid_endpoint_error_message() {
        let error = ConfigError::InvalidEndpoint {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("Expected format"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "associate_tag",
        };
        let message = error.to_string();
        assert!(message.contains("associate_tag"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptySecretKey;
        let _: &dyn std::error::Error = &error;
    }
}
