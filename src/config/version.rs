//! Product Advertising API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for the `Version` query
//! parameter sent with every request.

use crate::error::ConfigError;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Product Advertising API version.
///
/// Versions are dated (`YYYY-MM-DD`). Known versions have their own variant;
/// any other well-formed date is accepted as `Custom`.
///
/// # Example
///
/// ```rust
/// use product_lookup::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version.to_string(), "2013-08-01");
///
/// let version: ApiVersion = "2011-08-01".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2011_08_01);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2011-08-01.
    V2011_08_01,
    /// API version 2013-08-01, the last published version of the XML API.
    V2013_08_01,
    /// Any other dated version string.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest known API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2013_08_01
    }

    /// Returns `true` for the known (non-`Custom`) versions.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    fn is_valid_version_format(s: &str) -> bool {
        s.len() == 10 && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V2011_08_01 => "2011-08-01",
            Self::V2013_08_01 => "2013-08-01",
            Self::Custom(s) => s,
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        match s {
            "2011-08-01" => Ok(Self::V2011_08_01),
            "2013-08-01" => Ok(Self::V2013_08_01),
            _ if Self::is_valid_version_format(s) => Ok(Self::Custom(s.to_string())),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}
