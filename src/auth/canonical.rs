//! Canonical query construction.
//!
//! The service verifies a signature computed over the exact query string, so
//! the query must be rebuilt identically on both sides: values are
//! form-encoded and parameter names are sorted by byte value.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::config::ProductApiConfig;
use crate::lookup::LookupRequest;

/// `strftime` pattern of the `Timestamp` parameter.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Value of the `Service` parameter.
pub const SERVICE_NAME: &str = "AWSECommerceService";

/// Value of the `Operation` parameter.
pub const LOOKUP_OPERATION: &str = "ItemLookup";

/// Form-encodes a query value.
///
/// `A-Z a-z 0-9 - _ . ~` are kept, a space becomes `+`, and every other byte
/// of the UTF-8 value becomes `%XX` with upper-case hex digits.
///
/// # Example
///
/// ```rust
/// use product_lookup::auth::encode_query_value;
///
/// assert_eq!(encode_query_value("a b,c"), "a+b%2Cc");
/// assert_eq!(encode_query_value("2014-08-18T12:00:00Z"), "2014-08-18T12%3A00%3A00Z");
/// ```
#[must_use]
pub fn encode_query_value(value: &str) -> String {
    // A literal "%20" in the input is encoded as "%2520", so this only
    // rewrites encoded spaces.
    urlencoding::encode(value).replace("%20", "+")
}

/// The sorted, encoded parameter set of one request.
///
/// Names are kept in a `BTreeMap<String, _>`, whose ordering is the byte-wise
/// ordering of the names (upper case before lower case), which is the order
/// the service uses to rebuild the string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CanonicalQuery {
    params: BTreeMap<String, String>,
}

impl CanonicalQuery {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the `ItemLookup` parameter set for a request.
    ///
    /// `MerchantId` is only present when the merchant filter is `Amazon`.
    #[must_use]
    pub fn for_lookup(
        config: &ProductApiConfig,
        request: &LookupRequest,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let mut query = Self::new();
        query.insert("Service", SERVICE_NAME);
        query.insert("AWSAccessKeyId", config.access_key().as_ref());
        query.insert("Operation", LOOKUP_OPERATION);
        query.insert("ItemId", &request.item_id_param());
        query.insert("ResponseGroup", &request.response_group_param());
        query.insert("Version", &config.api_version().to_string());
        query.insert("Timestamp", &timestamp.format(TIMESTAMP_FORMAT).to_string());
        query.insert("AssociateTag", config.associate_tag().as_ref());
        query.insert("Condition", request.condition().as_str());
        query.insert(
            "IncludeReviewsSummary",
            request.include_reviews_summary_param(),
        );
        query.insert("IdType", request.id_type().as_str());

        if let Some(merchant_id) = request.merchant().merchant_id() {
            query.insert("MerchantId", merchant_id);
        }

        query
    }

    /// Inserts a parameter, encoding its raw value.
    pub fn insert(&mut self, name: impl Into<String>, raw_value: &str) {
        self.params.insert(name.into(), encode_query_value(raw_value));
    }

    /// Returns the encoded value of a parameter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Returns `true` if the parameter is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Returns the parameter names in canonical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Serializes the parameters as `name=value` pairs joined with `&`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Display for CanonicalQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}
