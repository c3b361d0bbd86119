//! Request authentication.
//!
//! Every request carries a `Signature` parameter: an HMAC-SHA256 over the
//! canonical (sorted, encoded) query string, keyed with the secret key.
//!
//! - [`CanonicalQuery`]: the sorted, encoded parameter set
//! - [`SignedRequest`]: a canonical query with its signature appended
//! - [`compute_signature_base64`]: the raw HMAC step
//!
//! # Example
//!
//! ```rust
//! use product_lookup::auth::{CanonicalQuery, SignedRequest};
//! use product_lookup::Endpoint;
//!
//! let mut query = CanonicalQuery::new();
//! query.insert("Operation", "ItemLookup");
//! query.insert("ItemId", "B00008OE6I");
//!
//! let signed = SignedRequest::sign(&query, &Endpoint::default(), "secret").unwrap();
//! assert!(signed.query().starts_with("ItemId=B00008OE6I&Operation=ItemLookup&Signature="));
//! ```

mod canonical;
mod signature;

pub use canonical::{
    encode_query_value, CanonicalQuery, LOOKUP_OPERATION, SERVICE_NAME, TIMESTAMP_FORMAT,
};
pub use signature::{
    compute_signature_base64, encode_latin1, string_to_sign, SignedRequest, SIGNED_METHOD,
};
