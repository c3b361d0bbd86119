//! Error types for item lookups.
//!
//! # Error Types
//!
//! - [`CallSetupError`]: malformed caller input, detected before any I/O
//! - [`ApiReturnError`]: the service explicitly rejected the request
//! - [`UnknownResponseShapeError`]: the response did not have the expected shape
//! - [`LookupError`]: unified error returned by [`ProductApi::lookup`](crate::ProductApi::lookup),
//!   which also wraps transport failures ([`HttpError`])
//!
//! # Example
//!
//! ```rust,ignore
//! match api.lookup(&request).await {
//!     Ok(items) => println!("{} items", items.len()),
//!     Err(LookupError::CallSetup(e)) => eprintln!("bad input: {e}"),
//!     Err(LookupError::Transport(e)) => eprintln!("network: {e}"),
//!     Err(LookupError::ApiReturn(e)) => eprintln!("rejected: {e}"),
//!     Err(LookupError::UnknownResponseShape(e)) => eprintln!("unexpected: {e}"),
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

use crate::clients::HttpError;

/// Maximum number of identifiers a single lookup may carry.
pub const MAX_IDENTIFIERS: usize = 10;

/// Errors in the caller's lookup input.
///
/// These are raised before any parameter is encoded or any request is sent,
/// and are never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CallSetupError {
    /// The identifier count is outside `1..=10`.
    #[error("API item lookups must contain 1-10 items, got {count}.")]
    IdentifierCount {
        /// The number of identifiers supplied.
        count: usize,
    },

    /// An identifier is empty or contains the list separator `,`.
    #[error("Invalid item identifier '{identifier}'. Identifiers must be non-empty and must not contain ','.")]
    InvalidIdentifier {
        /// The offending identifier.
        identifier: String,
    },

    /// The response group list was explicitly set to empty.
    #[error("At least one response group must be requested.")]
    NoResponseGroups,

    /// A response group name is not part of the known vocabulary.
    #[error("Unknown response group '{value}'.")]
    UnknownResponseGroup {
        /// The unrecognised value.
        value: String,
    },

    /// A condition filter is not one of New, Used, Collectible, Refurbished, All.
    #[error("Unknown condition '{value}'. Expected one of: New, Used, Collectible, Refurbished, All.")]
    UnknownCondition {
        /// The unrecognised value.
        value: String,
    },

    /// A merchant filter is not one of All, Amazon.
    #[error("Unknown merchant filter '{value}'. Expected one of: All, Amazon.")]
    UnknownMerchantFilter {
        /// The unrecognised value.
        value: String,
    },

    /// An identifier type is not one of ASIN, SKU, UPC, EAN, ISBN.
    #[error("Unknown identifier type '{value}'. Expected one of: ASIN, SKU, UPC, EAN, ISBN.")]
    UnknownIdType {
        /// The unrecognised value.
        value: String,
    },

    /// A value that is signed cannot be encoded as ISO-8859-1.
    #[error("The {field} cannot be encoded as ISO-8859-1 for signing.")]
    NotLatin1 {
        /// Which value failed to encode.
        field: &'static str,
    },
}

/// One error record returned by the service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoteError {
    /// The service error code (e.g., `AWS.InvalidParameterValue`).
    pub code: String,
    /// The human-readable message.
    pub message: String,
}

/// The service rejected the request.
///
/// Codes and messages are carried verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiReturnError {
    /// A single error record was returned.
    #[error("API Lookup Error {code} - {message}")]
    Single {
        /// The service error code.
        code: String,
        /// The service error message.
        message: String,
    },

    /// Several error records were returned; `dump` is their pretty JSON form.
    #[error("{dump}")]
    Multiple {
        /// Every error record, in document order.
        errors: Vec<RemoteError>,
        /// Pretty-printed JSON of the error records.
        dump: String,
    },
}

impl ApiReturnError {
    /// Builds the error from the records found in a response.
    ///
    /// Returns `None` when `errors` is empty.
    #[must_use]
    pub fn from_records(mut errors: Vec<RemoteError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => {
                let RemoteError { code, message } = errors.remove(0);
                Some(Self::Single { code, message })
            }
            _ => {
                let dump = serde_json::to_string_pretty(&errors).unwrap_or_default();
                Some(Self::Multiple { errors, dump })
            }
        }
    }

    /// Returns every error record carried by this error.
    #[must_use]
    pub fn records(&self) -> Vec<RemoteError> {
        match self {
            Self::Single { code, message } => vec![RemoteError {
                code: code.clone(),
                message: message.clone(),
            }],
            Self::Multiple { errors, .. } => errors.clone(),
        }
    }
}

/// The response document did not have the expected shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown response shape at '{path}': {reason}")]
pub struct UnknownResponseShapeError {
    /// The document path that was being resolved.
    pub path: String,
    /// What was found instead.
    pub reason: String,
}

impl UnknownResponseShapeError {
    pub(crate) fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Unified error type for [`ProductApi::lookup`](crate::ProductApi::lookup).
///
/// Every failure surfaces here; there are no partial results.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Malformed caller input.
    #[error(transparent)]
    CallSetup(#[from] CallSetupError),

    /// Transport failure after the retry budget was spent.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The service rejected the request.
    #[error(transparent)]
    ApiReturn(#[from] ApiReturnError),

    /// The response did not have the expected shape.
    #[error(transparent)]
    UnknownResponseShape(#[from] UnknownResponseShapeError),
}

// Verify LookupError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LookupError>();
};
