//! Typed item model.
//!
//! An [`Item`] owns one `Item` record of a lookup response and exposes typed,
//! optional-valued accessors over it. Grouped fields are reachable through
//! borrowed views:
//!
//! - [`ItemAttributes`]: descriptive attributes (`ItemAttributes`)
//! - [`OfferSummary`]: offer counts and lowest prices (`OfferSummary`)
//! - [`Offers`]: the buy-box offer (`Offers`)
//! - [`ItemLinks`]: well-known item links (`ItemLinks`)
//!
//! `Item` also carries shortcuts for every view accessor.
//!
//! # Prices
//!
//! `list_price`, `buy_box_price` and `lowest_new_price` are integers in minor
//! currency units (`1999` is $19.99). The remaining lowest prices are the
//! service's raw amount strings.
//!
//! # Example
//!
//! ```rust
//! use product_lookup::{Item, Node};
//!
//! let node = Node::parse(
//!     "<Item><ASIN>B00008OE6I</ASIN>\
//!      <ItemAttributes><Title>Canon PowerShot</Title>\
//!      <ListPrice><Amount>34999</Amount></ListPrice></ItemAttributes></Item>",
//! )
//! .unwrap()
//! .into_child("Item")
//! .unwrap();
//!
//! let item = Item::from_node(node);
//! assert_eq!(item.to_string(), "ASIN: B00008OE6I");
//! assert_eq!(item.title(), Some("Canon PowerShot"));
//! assert_eq!(item.list_price(), Some(34999));
//! assert_eq!(item.buy_box_price(), None);
//! ```

mod attributes;
mod links;
mod offers;

use std::fmt;

use serde::Serialize;

use crate::response::Node;

pub use attributes::ItemAttributes;
pub use links::{ItemLinks, ALL_OFFERS, TECHNICAL_DETAILS};
pub use offers::{OfferSummary, Offers};

/// One item of a lookup response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Item {
    node: Node,
}

// Verify Item is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Item>();
};

impl Item {
    /// Wraps an `Item` record.
    #[must_use]
    pub const fn from_node(node: Node) -> Self {
        Self { node }
    }

    /// Returns the raw record.
    #[must_use]
    pub const fn raw(&self) -> &Node {
        &self.node
    }

    /// Consumes the item, returning the raw record.
    #[must_use]
    pub fn into_raw(self) -> Node {
        self.node
    }

    /// Renders the raw record as indented JSON.
    #[must_use]
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.node).unwrap_or_default()
    }

    /// Amazon Standard Identification Number.
    #[must_use]
    pub fn asin(&self) -> Option<&str> {
        self.text(&["ASIN"])
    }

    /// ASIN of the parent item, for variations.
    #[must_use]
    pub fn parent_asin(&self) -> Option<&str> {
        self.text(&["ParentASIN"])
    }

    /// Product detail page URL.
    #[must_use]
    pub fn detail_page_url(&self) -> Option<&str> {
        self.text(&["DetailPageURL"])
    }

    /// Sales rank, as sent by the service.
    #[must_use]
    pub fn sales_rank(&self) -> Option<&str> {
        self.text(&["SalesRank"])
    }

    /// URL of the small product image.
    #[must_use]
    pub fn small_image_url(&self) -> Option<&str> {
        self.text(&["SmallImage", "URL"])
    }

    /// URL of the medium product image.
    #[must_use]
    pub fn medium_image_url(&self) -> Option<&str> {
        self.text(&["MediumImage", "URL"])
    }

    /// URL of the large product image.
    #[must_use]
    pub fn large_image_url(&self) -> Option<&str> {
        self.text(&["LargeImage", "URL"])
    }

    /// `SimilarProduct` records (`ASIN`, `Title`).
    #[must_use]
    pub fn similar_items(&self) -> &[Node] {
        self.records(&["SimilarProducts", "SimilarProduct"])
    }

    /// `Accessory` records (`ASIN`, `Title`).
    #[must_use]
    pub fn accessories(&self) -> &[Node] {
        self.records(&["Accessories", "Accessory"])
    }

    /// Returns the `ItemAttributes` view.
    #[must_use]
    pub fn item_attributes(&self) -> ItemAttributes<'_> {
        ItemAttributes::new(self.node.get("ItemAttributes"))
    }

    /// Returns the `OfferSummary` view.
    #[must_use]
    pub fn offer_summary(&self) -> OfferSummary<'_> {
        OfferSummary::new(self.node.get("OfferSummary"))
    }

    /// Returns the `Offers` view (buy box only).
    #[must_use]
    pub fn offers(&self) -> Offers<'_> {
        Offers::new(self.node.get("Offers"))
    }

    /// Returns the `ItemLinks` view.
    #[must_use]
    pub fn item_links(&self) -> ItemLinks<'_> {
        ItemLinks::new(self.node.get("ItemLinks"))
    }

    /// See [`ItemAttributes::binding`].
    #[must_use]
    pub fn binding(&self) -> Option<&str> {
        self.item_attributes().binding()
    }

    /// See [`ItemAttributes::brand`].
    #[must_use]
    pub fn brand(&self) -> Option<&str> {
        self.item_attributes().brand()
    }

    /// See [`ItemAttributes::ean`].
    #[must_use]
    pub fn ean(&self) -> Option<&str> {
        self.item_attributes().ean()
    }

    /// See [`ItemAttributes::dimensions`].
    #[must_use]
    pub fn dimensions(&self) -> Option<&Node> {
        self.item_attributes().dimensions()
    }

    /// See [`ItemAttributes::label`].
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.item_attributes().label()
    }

    /// List price in minor currency units. See [`ItemAttributes::list_price`].
    #[must_use]
    pub fn list_price(&self) -> Option<i64> {
        self.item_attributes().list_price()
    }

    /// See [`ItemAttributes::model`].
    #[must_use]
    pub fn model(&self) -> Option<&str> {
        self.item_attributes().model()
    }

    /// See [`ItemAttributes::title`].
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.item_attributes().title()
    }

    /// See [`ItemAttributes::platform`].
    #[must_use]
    pub fn platform(&self) -> Option<&str> {
        self.item_attributes().platform()
    }

    /// See [`ItemAttributes::upc`].
    #[must_use]
    pub fn upc(&self) -> Option<&str> {
        self.item_attributes().upc()
    }

    /// See [`ItemAttributes::upc_list`].
    #[must_use]
    pub fn upc_list(&self) -> Vec<&str> {
        self.item_attributes().upc_list()
    }

    /// Lowest new price in minor currency units. See [`OfferSummary::lowest_new_price`].
    #[must_use]
    pub fn lowest_new_price(&self) -> Option<i64> {
        self.offer_summary().lowest_new_price()
    }

    /// See [`OfferSummary::lowest_used_price`].
    #[must_use]
    pub fn lowest_used_price(&self) -> Option<&str> {
        self.offer_summary().lowest_used_price()
    }

    /// See [`OfferSummary::lowest_collectible_price`].
    #[must_use]
    pub fn lowest_collectible_price(&self) -> Option<&str> {
        self.offer_summary().lowest_collectible_price()
    }

    /// See [`OfferSummary::lowest_refurbished_price`].
    #[must_use]
    pub fn lowest_refurbished_price(&self) -> Option<&str> {
        self.offer_summary().lowest_refurbished_price()
    }

    /// See [`OfferSummary::new_offers`].
    #[must_use]
    pub fn new_offers(&self) -> Option<&str> {
        self.offer_summary().new_offers()
    }

    /// See [`OfferSummary::used_offers`].
    #[must_use]
    pub fn used_offers(&self) -> Option<&str> {
        self.offer_summary().used_offers()
    }

    /// See [`OfferSummary::collectible_offers`].
    #[must_use]
    pub fn collectible_offers(&self) -> Option<&str> {
        self.offer_summary().collectible_offers()
    }

    /// See [`OfferSummary::refurbished_offers`].
    #[must_use]
    pub fn refurbished_offers(&self) -> Option<&str> {
        self.offer_summary().refurbished_offers()
    }

    /// See [`Offers::total_offers`].
    #[must_use]
    pub fn total_offers(&self) -> Option<&str> {
        self.offers().total_offers()
    }

    /// See [`Offers::more_offers_url`].
    #[must_use]
    pub fn more_offers_url(&self) -> Option<&str> {
        self.offers().more_offers_url()
    }

    /// See [`Offers::condition`].
    #[must_use]
    pub fn condition(&self) -> Option<&str> {
        self.offers().condition()
    }

    /// Buy-box price in minor currency units. See [`Offers::buy_box_price`].
    #[must_use]
    pub fn buy_box_price(&self) -> Option<i64> {
        self.offers().buy_box_price()
    }

    /// See [`Offers::super_saver_shipping`].
    #[must_use]
    pub fn super_saver_shipping(&self) -> bool {
        self.offers().super_saver_shipping()
    }

    /// See [`Offers::prime_shipping`].
    #[must_use]
    pub fn prime_shipping(&self) -> bool {
        self.offers().prime_shipping()
    }

    /// See [`ItemLinks::description_url`].
    #[must_use]
    pub fn description_url(&self) -> Option<&str> {
        self.item_links().description_url()
    }

    /// See [`ItemLinks::all_offers_url`].
    #[must_use]
    pub fn all_offers_url(&self) -> Option<&str> {
        self.item_links().all_offers_url()
    }

    fn text(&self, path: &[&str]) -> Option<&str> {
        text_at(Some(&self.node), path)
    }

    fn records(&self, path: &[&str]) -> &[Node] {
        self.node.at(path).map_or(&[][..], Node::records)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ASIN: {}", self.asin().unwrap_or_default())
    }
}

/// Text at `path` below `node`.
pub(crate) fn text_at<'a>(node: Option<&'a Node>, path: &[&str]) -> Option<&'a str> {
    node.and_then(|n| n.at(path)).and_then(Node::text)
}

/// Texts of a node that may be a single value or a list of values.
pub(crate) fn texts(node: Option<&Node>) -> Vec<&str> {
    match node {
        Some(Node::List(values)) => values.iter().filter_map(Node::text).collect(),
        Some(value) => value.text().into_iter().collect(),
        None => Vec::new(),
    }
}

/// Parses a price amount in minor currency units.
pub(crate) fn minor_units(amount: Option<&str>) -> Option<i64> {
    amount.and_then(|a| a.trim().parse().ok())
}
