//! Offer views.
//!
//! `OfferSummary` counts offers and carries the lowest price per condition.
//! `Offers` describes the buy box only.

use crate::item::{minor_units, text_at};
use crate::response::Node;

/// Borrowed view of an item's `OfferSummary` block.
#[derive(Clone, Copy, Debug)]
pub struct OfferSummary<'a> {
    node: Option<&'a Node>,
}

impl<'a> OfferSummary<'a> {
    pub(crate) const fn new(node: Option<&'a Node>) -> Self {
        Self { node }
    }

    /// Lowest new price in minor currency units.
    #[must_use]
    pub fn lowest_new_price(&self) -> Option<i64> {
        minor_units(text_at(self.node, &["LowestNewPrice", "Amount"]))
    }

    /// Lowest used price, as the service's raw amount string.
    #[must_use]
    pub fn lowest_used_price(&self) -> Option<&'a str> {
        text_at(self.node, &["LowestUsedPrice", "Amount"])
    }

    /// Lowest collectible price, as the service's raw amount string.
    #[must_use]
    pub fn lowest_collectible_price(&self) -> Option<&'a str> {
        text_at(self.node, &["LowestCollectiblePrice", "Amount"])
    }

    /// Lowest refurbished price, as the service's raw amount string.
    #[must_use]
    pub fn lowest_refurbished_price(&self) -> Option<&'a str> {
        text_at(self.node, &["LowestRefurbishedPrice", "Amount"])
    }

    /// Number of new offers.
    #[must_use]
    pub fn new_offers(&self) -> Option<&'a str> {
        text_at(self.node, &["TotalNew"])
    }

    /// Number of used offers.
    #[must_use]
    pub fn used_offers(&self) -> Option<&'a str> {
        text_at(self.node, &["TotalUsed"])
    }

    /// Number of collectible offers.
    #[must_use]
    pub fn collectible_offers(&self) -> Option<&'a str> {
        text_at(self.node, &["TotalCollectible"])
    }

    /// Number of refurbished offers.
    #[must_use]
    pub fn refurbished_offers(&self) -> Option<&'a str> {
        text_at(self.node, &["TotalRefurbished"])
    }
}

/// Borrowed view of an item's `Offers` block.
///
/// When several `Offer` entries are present, the first one is the buy box.
#[derive(Clone, Copy, Debug)]
pub struct Offers<'a> {
    node: Option<&'a Node>,
}

impl<'a> Offers<'a> {
    pub(crate) const fn new(node: Option<&'a Node>) -> Self {
        Self { node }
    }

    /// Total number of offers.
    #[must_use]
    pub fn total_offers(&self) -> Option<&'a str> {
        text_at(self.node, &["TotalOffers"])
    }

    /// URL of the full offer listing.
    ///
    /// The service sends `0` when there is none; that reads as `None`.
    #[must_use]
    pub fn more_offers_url(&self) -> Option<&'a str> {
        text_at(self.node, &["MoreOffersUrl"]).filter(|url| *url != "0")
    }

    /// Condition of the buy-box offer.
    #[must_use]
    pub fn condition(&self) -> Option<&'a str> {
        text_at(self.buy_box(), &["OfferAttributes", "Condition"])
    }

    /// Buy-box price in minor currency units.
    #[must_use]
    pub fn buy_box_price(&self) -> Option<i64> {
        minor_units(text_at(self.listing(), &["Price", "Amount"]))
    }

    /// Whether the buy-box offer ships with free super saver shipping.
    #[must_use]
    pub fn super_saver_shipping(&self) -> bool {
        text_at(self.listing(), &["IsEligibleForSuperSaverShipping"]) == Some("1")
    }

    /// Whether the buy-box offer is Prime eligible.
    #[must_use]
    pub fn prime_shipping(&self) -> bool {
        text_at(self.listing(), &["IsEligibleForPrime"]) == Some("1")
    }

    fn buy_box(&self) -> Option<&'a Node> {
        self.node.and_then(|n| n.get("Offer")).and_then(Node::first)
    }

    fn listing(&self) -> Option<&'a Node> {
        self.buy_box()
            .and_then(|offer| offer.get("OfferListing"))
            .and_then(Node::first)
    }
}
