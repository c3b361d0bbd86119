//! Closed vocabularies for lookup parameters.
//!
//! Each enum parses from its exact wire spelling via [`FromStr`] and displays
//! back to it. Unknown spellings are rejected with a [`CallSetupError`].

use std::fmt;
use std::str::FromStr;

use crate::lookup::errors::CallSetupError;

/// A named bundle of fields the service includes in the response.
///
/// # Example
///
/// ```rust
/// use product_lookup::ResponseGroup;
///
/// let group: ResponseGroup = "OfferSummary".parse().unwrap();
/// assert_eq!(group, ResponseGroup::OfferSummary);
/// assert_eq!(group.to_string(), "OfferSummary");
/// assert!("Everything".parse::<ResponseGroup>().is_err());
/// ```
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResponseGroup {
    Request,
    ItemIds,
    Small,
    Medium,
    Large,
    Offers,
    OfferFull,
    OfferSummary,
    OfferListings,
    PromotionSummary,
    PromotionDetails,
    Variations,
    VariationImages,
    VariationMinimum,
    VariationSummary,
    TagsSummary,
    Tags,
    VariationMatrix,
    VariationOffers,
    ItemAttributes,
    MerchantItemAttributes,
    Tracks,
    Accessories,
    EditorialReview,
    SalesRank,
    BrowseNodes,
    Images,
    Similarities,
    Subjects,
    Reviews,
    SearchInside,
    PromotionalTag,
    AlternateVersions,
    Collections,
    ShippingCharges,
    RelatedItems,
    ShippingOptions,
}

impl ResponseGroup {
    /// Every response group, in the service's documentation order.
    pub const ALL: [Self; 37] = [
        Self::Request,
        Self::ItemIds,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::Offers,
        Self::OfferFull,
        Self::OfferSummary,
        Self::OfferListings,
        Self::PromotionSummary,
        Self::PromotionDetails,
        Self::Variations,
        Self::VariationImages,
        Self::VariationMinimum,
        Self::VariationSummary,
        Self::TagsSummary,
        Self::Tags,
        Self::VariationMatrix,
        Self::VariationOffers,
        Self::ItemAttributes,
        Self::MerchantItemAttributes,
        Self::Tracks,
        Self::Accessories,
        Self::EditorialReview,
        Self::SalesRank,
        Self::BrowseNodes,
        Self::Images,
        Self::Similarities,
        Self::Subjects,
        Self::Reviews,
        Self::SearchInside,
        Self::PromotionalTag,
        Self::AlternateVersions,
        Self::Collections,
        Self::ShippingCharges,
        Self::RelatedItems,
        Self::ShippingOptions,
    ];

    /// Returns the wire spelling of this group.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Request => "Request",
            Self::ItemIds => "ItemIds",
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::Offers => "Offers",
            Self::OfferFull => "OfferFull",
            Self::OfferSummary => "OfferSummary",
            Self::OfferListings => "OfferListings",
            Self::PromotionSummary => "PromotionSummary",
            Self::PromotionDetails => "PromotionDetails",
            Self::Variations => "Variations",
            Self::VariationImages => "VariationImages",
            Self::VariationMinimum => "VariationMinimum",
            Self::VariationSummary => "VariationSummary",
            Self::TagsSummary => "TagsSummary",
            Self::Tags => "Tags",
            Self::VariationMatrix => "VariationMatrix",
            Self::VariationOffers => "VariationOffers",
            Self::ItemAttributes => "ItemAttributes",
            Self::MerchantItemAttributes => "MerchantItemAttributes",
            Self::Tracks => "Tracks",
            Self::Accessories => "Accessories",
            Self::EditorialReview => "EditorialReview",
            Self::SalesRank => "SalesRank",
            Self::BrowseNodes => "BrowseNodes",
            Self::Images => "Images",
            Self::Similarities => "Similarities",
            Self::Subjects => "Subjects",
            Self::Reviews => "Reviews",
            Self::SearchInside => "SearchInside",
            Self::PromotionalTag => "PromotionalTag",
            Self::AlternateVersions => "AlternateVersions",
            Self::Collections => "Collections",
            Self::ShippingCharges => "ShippingCharges",
            Self::RelatedItems => "RelatedItems",
            Self::ShippingOptions => "ShippingOptions",
        }
    }
}

impl fmt::Display for ResponseGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseGroup {
    type Err = CallSetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| CallSetupError::UnknownResponseGroup {
                value: s.to_string(),
            })
    }
}

/// Offer condition filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Condition {
    /// New items only.
    #[default]
    New,
    /// Used items only.
    Used,
    /// Collectible items only.
    Collectible,
    /// Refurbished items only.
    Refurbished,
    /// Any condition.
    All,
}

impl Condition {
    /// Returns the wire spelling of this condition.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Used => "Used",
            Self::Collectible => "Collectible",
            Self::Refurbished => "Refurbished",
            Self::All => "All",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = CallSetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(Self::New),
            "Used" => Ok(Self::Used),
            "Collectible" => Ok(Self::Collectible),
            "Refurbished" => Ok(Self::Refurbished),
            "All" => Ok(Self::All),
            _ => Err(CallSetupError::UnknownCondition {
                value: s.to_string(),
            }),
        }
    }
}

/// Merchant filter.
///
/// Only `Amazon` is sent on the wire (as `MerchantId=Amazon`); `All` means the
/// parameter is omitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MerchantFilter {
    /// Offers from every merchant.
    #[default]
    All,
    /// Offers sold by Amazon only.
    Amazon,
}

impl MerchantFilter {
    /// Returns the wire spelling of this filter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Amazon => "Amazon",
        }
    }

    /// Returns the `MerchantId` parameter value, if this filter sends one.
    #[must_use]
    pub const fn merchant_id(&self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Amazon => Some("Amazon"),
        }
    }
}

impl fmt::Display for MerchantFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MerchantFilter {
    type Err = CallSetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(Self::All),
            "Amazon" => Ok(Self::Amazon),
            _ => Err(CallSetupError::UnknownMerchantFilter {
                value: s.to_string(),
            }),
        }
    }
}

/// The kind of identifier being looked up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IdType {
    /// Amazon Standard Identification Number.
    #[default]
    Asin,
    /// Merchant stock keeping unit.
    Sku,
    /// Universal Product Code.
    Upc,
    /// European Article Number.
    Ean,
    /// International Standard Book Number.
    Isbn,
}

impl IdType {
    /// Returns the wire spelling of this identifier type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asin => "ASIN",
            Self::Sku => "SKU",
            Self::Upc => "UPC",
            Self::Ean => "EAN",
            Self::Isbn => "ISBN",
        }
    }
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdType {
    type Err = CallSetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASIN" => Ok(Self::Asin),
            "SKU" => Ok(Self::Sku),
            "UPC" => Ok(Self::Upc),
            "EAN" => Ok(Self::Ean),
            "ISBN" => Ok(Self::Isbn),
            _ => Err(CallSetupError::UnknownIdType {
                value: s.to_string(),
            }),
        }
    }
}
