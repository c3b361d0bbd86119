//! Item lookups.
//!
//! - [`ProductApi`]: the lookup client
//! - [`LookupRequest`]: a validated request, built with [`LookupRequestBuilder`]
//! - [`ResponseGroup`], [`Condition`], [`MerchantFilter`], [`IdType`]: closed
//!   parameter vocabularies
//! - [`LookupError`] and its parts: every way a lookup can fail

mod client;
mod errors;
mod request;
mod vocabulary;

pub use client::ProductApi;
pub use errors::{
    ApiReturnError, CallSetupError, LookupError, RemoteError, UnknownResponseShapeError,
    MAX_IDENTIFIERS,
};
pub use request::{LookupRequest, LookupRequestBuilder};
pub use vocabulary::{Condition, IdType, MerchantFilter, ResponseGroup};
