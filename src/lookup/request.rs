//! Lookup request types.
//!
//! This module provides [`LookupRequest`] and its builder. All input
//! validation happens in [`LookupRequestBuilder::build`], before anything is
//! encoded or sent.

use crate::lookup::errors::{CallSetupError, MAX_IDENTIFIERS};
use crate::lookup::vocabulary::{Condition, IdType, MerchantFilter, ResponseGroup};

/// A validated `ItemLookup` request.
///
/// # Example
///
/// ```rust
/// use product_lookup::{Condition, LookupRequest, MerchantFilter, ResponseGroup};
///
/// let request = LookupRequest::builder()
///     .identifiers(["B00008OE6I", "B00004TKVY"])
///     .response_groups([ResponseGroup::ItemAttributes, ResponseGroup::Offers])
///     .condition(Condition::Used)
///     .merchant(MerchantFilter::Amazon)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.item_id_param(), "B00008OE6I,B00004TKVY");
/// assert_eq!(request.response_group_param(), "ItemAttributes,Offers");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupRequest {
    identifiers: Vec<String>,
    id_type: IdType,
    response_groups: Vec<ResponseGroup>,
    condition: Condition,
    merchant: MerchantFilter,
    include_reviews_summary: bool,
}

impl LookupRequest {
    /// Creates a new builder for constructing a `LookupRequest`.
    #[must_use]
    pub fn builder() -> LookupRequestBuilder {
        LookupRequestBuilder::new()
    }

    /// Returns the identifiers, in request order.
    #[must_use]
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Returns the identifier type.
    #[must_use]
    pub const fn id_type(&self) -> IdType {
        self.id_type
    }

    /// Returns the requested response groups, in request order.
    #[must_use]
    pub fn response_groups(&self) -> &[ResponseGroup] {
        &self.response_groups
    }

    /// Returns the condition filter.
    #[must_use]
    pub const fn condition(&self) -> Condition {
        self.condition
    }

    /// Returns the merchant filter.
    #[must_use]
    pub const fn merchant(&self) -> MerchantFilter {
        self.merchant
    }

    /// Returns whether the review summary is requested.
    #[must_use]
    pub const fn include_reviews_summary(&self) -> bool {
        self.include_reviews_summary
    }

    /// Returns the `ItemId` parameter value (identifiers joined with `,`).
    #[must_use]
    pub fn item_id_param(&self) -> String {
        self.identifiers.join(",")
    }

    /// Returns the `ResponseGroup` parameter value (groups joined with `,`).
    #[must_use]
    pub fn response_group_param(&self) -> String {
        self.response_groups
            .iter()
            .map(ResponseGroup::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Returns the `IncludeReviewsSummary` parameter value.
    #[must_use]
    pub const fn include_reviews_summary_param(&self) -> &'static str {
        if self.include_reviews_summary {
            "True"
        } else {
            "False"
        }
    }
}

/// Builder for constructing [`LookupRequest`] instances.
///
/// # Defaults
///
/// - `id_type`: [`IdType::Asin`]
/// - `response_groups`: `[Large]`
/// - `condition`: [`Condition::New`]
/// - `merchant`: [`MerchantFilter::All`]
/// - `include_reviews_summary`: `true`
#[derive(Debug, Default)]
pub struct LookupRequestBuilder {
    identifiers: Vec<String>,
    id_type: Option<IdType>,
    response_groups: Option<Vec<ResponseGroup>>,
    condition: Option<Condition>,
    merchant: Option<MerchantFilter>,
    include_reviews_summary: Option<bool>,
}

impl LookupRequestBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the identifiers with the given ordered sequence.
    #[must_use]
    pub fn identifiers<I, S>(mut self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.identifiers = identifiers.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a single identifier.
    #[must_use]
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifiers.push(identifier.into());
        self
    }

    /// Sets the identifier type.
    #[must_use]
    pub const fn id_type(mut self, id_type: IdType) -> Self {
        self.id_type = Some(id_type);
        self
    }

    /// Replaces the response groups with the given ordered sequence.
    #[must_use]
    pub fn response_groups(mut self, groups: impl IntoIterator<Item = ResponseGroup>) -> Self {
        self.response_groups = Some(groups.into_iter().collect());
        self
    }

    /// Appends a single response group.
    ///
    /// The first call replaces the default `[Large]` selection.
    #[must_use]
    pub fn response_group(mut self, group: ResponseGroup) -> Self {
        self.response_groups.get_or_insert_with(Vec::new).push(group);
        self
    }

    /// Sets the condition filter.
    #[must_use]
    pub const fn condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Sets the merchant filter.
    #[must_use]
    pub const fn merchant(mut self, merchant: MerchantFilter) -> Self {
        self.merchant = Some(merchant);
        self
    }

    /// Sets whether the review summary is requested.
    #[must_use]
    pub const fn include_reviews_summary(mut self, include: bool) -> Self {
        self.include_reviews_summary = Some(include);
        self
    }

    /// Builds the [`LookupRequest`], validating the input.
    ///
    /// # Errors
    ///
    /// Returns [`CallSetupError`] if:
    /// - there are no identifiers or more than ten (`IdentifierCount`)
    /// - an identifier is empty or contains `,` (`InvalidIdentifier`)
    /// - the response groups were set to an empty sequence (`NoResponseGroups`)
    pub fn build(self) -> Result<LookupRequest, CallSetupError> {
        let count = self.identifiers.len();
        if count == 0 || count > MAX_IDENTIFIERS {
            return Err(CallSetupError::IdentifierCount { count });
        }

        if let Some(bad) = self
            .identifiers
            .iter()
            .find(|id| id.trim().is_empty() || id.contains(','))
        {
            return Err(CallSetupError::InvalidIdentifier {
                identifier: bad.clone(),
            });
        }

        let response_groups = self
            .response_groups
            .unwrap_or_else(|| vec![ResponseGroup::Large]);
        if response_groups.is_empty() {
            return Err(CallSetupError::NoResponseGroups);
        }

        Ok(LookupRequest {
            identifiers: self.identifiers,
            id_type: self.id_type.unwrap_or_default(),
            response_groups,
            condition: self.condition.unwrap_or_default(),
            merchant: self.merchant.unwrap_or_default(),
            include_reviews_summary: self.include_reviews_summary.unwrap_or(true),
        })
    }
}
