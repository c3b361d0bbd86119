//! HMAC-SHA256 request signing.
//!
//! The string to sign is four newline-separated fields:
//!
//! ```text
//! GET
//! {host}
//! {path}
//! {canonical query string}
//! ```
//!
//! # Byte encoding
//!
//! Both the secret key and the string to sign are converted to bytes as
//! ISO-8859-1: every character must be at most `U+00FF` and becomes exactly
//! one byte. This is what the service expects; signing the UTF-8 bytes of a
//! key such as `"caf\u{e9}"` produces a different digest that the service
//! rejects.
//!
//! # Example
//!
//! ```rust
//! use product_lookup::auth::compute_signature_base64;
//!
//! let sig = compute_signature_base64("message", "key").unwrap();
//! assert_eq!(sig, "bp7ym3X//Ft6uuUn1Y/a2y/kLnIZARl2kXNDBl9Y7Uo=");
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::canonical::{encode_query_value, CanonicalQuery};
use crate::config::Endpoint;
use crate::lookup::CallSetupError;

type HmacSha256 = Hmac<Sha256>;

/// HTTP method token of the string to sign.
pub const SIGNED_METHOD: &str = "GET";

/// Encodes a string as ISO-8859-1 bytes.
///
/// Returns `None` if any character is above `U+00FF`.
#[must_use]
pub fn encode_latin1(value: &str) -> Option<Vec<u8>> {
    value
        .chars()
        .map(|c| u8::try_from(u32::from(c)).ok())
        .collect()
}

/// Builds the string to sign for a canonical query string.
#[must_use]
pub fn string_to_sign(endpoint: &Endpoint, canonical_query: &str) -> String {
    format!(
        "{SIGNED_METHOD}\n{}\n{}\n{canonical_query}",
        endpoint.host(),
        endpoint.path()
    )
}

/// Computes the base64-encoded HMAC-SHA256 of `message` keyed with `secret`.
///
/// # Errors
///
/// Returns [`CallSetupError::NotLatin1`] if either value cannot be encoded
/// as ISO-8859-1.
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature_base64(message: &str, secret: &str) -> Result<String, CallSetupError> {
    let key = encode_latin1(secret).ok_or(CallSetupError::NotLatin1 {
        field: "secret key",
    })?;
    let message = encode_latin1(message).ok_or(CallSetupError::NotLatin1 {
        field: "string to sign",
    })?;

    let mut mac = HmacSha256::new_from_slice(&key).expect("HMAC can take key of any size");
    mac.update(&message);
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// A canonical query with its `Signature` appended, ready to send.
///
/// Immutable; the transport consumes it with [`SignedRequest::into_url`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedRequest {
    url: String,
    query: String,
    signature: String,
}

impl SignedRequest {
    /// Signs a canonical query for the given endpoint.
    ///
    /// The `Signature` parameter is appended after the sorted parameters,
    /// not sorted into them.
    ///
    /// # Errors
    ///
    /// Returns [`CallSetupError::NotLatin1`] if the secret or the string to
    /// sign cannot be encoded as ISO-8859-1.
    pub fn sign(
        canonical: &CanonicalQuery,
        endpoint: &Endpoint,
        secret: &str,
    ) -> Result<Self, CallSetupError> {
        let canonical_query = canonical.to_query_string();
        let digest = compute_signature_base64(&string_to_sign(endpoint, &canonical_query), secret)?;
        let signature = encode_query_value(&digest);

        let query = format!("{canonical_query}&Signature={signature}");
        let url = endpoint.url_with_query(&query);

        Ok(Self {
            url,
            query,
            signature,
        })
    }

    /// Returns the absolute request URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the full query string, including the signature.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the percent-encoded signature.
    #[must_use]
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Consumes the request, returning the URL to send.
    #[must_use]
    pub fn into_url(self) -> String {
        self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_signature_matches_known_value() {
        // HMAC-SHA256("message", "key") = 6e9ef29b...58ed4a
        let sig = compute_signature_base64("message", "key").unwrap();
        assert_eq!(sig, "bp7ym3X//Ft6uuUn1Y/a2y/kLnIZARl2kXNDBl9Y7Uo=");
    }

    #[test]
    fn test_compute_signature_produces_44_base64_chars() {
        let sig = compute_signature_base64("", "secret").unwrap();
        assert_eq!(sig.len(), 44);
        assert!(sig
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='));
    }

    #[test]
    fn test_encode_latin1() {
        assert_eq!(encode_latin1("abc"), Some(b"abc".to_vec()));
        assert_eq!(encode_latin1("caf\u{e9}"), Some(vec![b'c', b'a', b'f', 0xe9]));
        assert_eq!(encode_latin1("\u{ff}"), Some(vec![0xff]));
        assert_eq!(encode_latin1("\u{100}"), None);
    }

    #[test]
    fn test_latin1_key_differs_from_utf8_key() {
        let latin1 = compute_signature_base64("message", "caf\u{e9}").unwrap();

        // Same key as UTF-8 bytes: "caf" + 0xC3 0xA9
        let mut mac = HmacSha256::new_from_slice("caf\u{e9}".as_bytes()).unwrap();
        mac.update(b"message");
        let utf8 = STANDARD.encode(mac.finalize().into_bytes());

        assert_ne!(latin1, utf8);
        // HMAC-SHA256("message", b"caf\xe9")
        assert_eq!(latin1, "T6HS4fV4y09rcz3grTqUPPNCtfqqv8VfSl2mWqrMyYk=");
    }

    #[test]
    fn test_non_latin1_secret_is_rejected() {
        assert_eq!(
            compute_signature_base64("message", "\u{20ac}"),
            Err(CallSetupError::NotLatin1 {
                field: "secret key"
            })
        );
    }

    #[test]
    fn test_string_to_sign_layout() {
        let endpoint = Endpoint::default();
        assert_eq!(
            string_to_sign(&endpoint, "A=1&B=2"),
            "GET\nwebservices.amazon.com\n/onca/xml\nA=1&B=2"
        );
    }

    #[test]
    fn test_signature_is_appended_last_and_encoded() {
        let mut canonical = CanonicalQuery::new();
        canonical.insert("Zeta", "1");
        canonical.insert("Alpha", "2");

        let signed = SignedRequest::sign(&canonical, &Endpoint::default(), "secret").unwrap();

        assert!(signed.query().starts_with("Alpha=2&Zeta=1&Signature="));
        assert!(!signed.signature().contains(['+', '/', '=']));
        assert!(signed
            .url()
            .starts_with("http://webservices.amazon.com/onca/xml?Alpha=2"));
    }

    #[test]
    fn test_signing_is_deterministic() {
        let mut canonical = CanonicalQuery::new();
        canonical.insert("Timestamp", "2014-08-18T12:00:00Z");
        canonical.insert("ItemId", "B00008OE6I");

        let first = SignedRequest::sign(&canonical, &Endpoint::default(), "secret").unwrap();
        for _ in 0..5 {
            let again = SignedRequest::sign(&canonical, &Endpoint::default(), "secret").unwrap();
            assert_eq!(again, first);
        }
    }
}
