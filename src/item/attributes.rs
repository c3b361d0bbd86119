//! Descriptive item attributes.
//!
//! [`ItemAttributes`] reads the `ItemAttributes` block: title, brand, codes,
//! list price and dimensions.

use crate::item::{minor_units, text_at, texts};
use crate::response::Node;

/// Borrowed view of an item's `ItemAttributes` block.
///
/// Every accessor returns `None` when the field is absent, including when
/// the whole block is missing.
#[derive(Clone, Copy, Debug)]
pub struct ItemAttributes<'a> {
    node: Option<&'a Node>,
}

impl<'a> ItemAttributes<'a> {
    pub(crate) const fn new(node: Option<&'a Node>) -> Self {
        Self { node }
    }

    /// Returns `true` if the response carried an `ItemAttributes` block.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.node.is_some()
    }

    /// Binding (e.g. `Electronics`, `Paperback`).
    #[must_use]
    pub fn binding(&self) -> Option<&'a str> {
        text_at(self.node, &["Binding"])
    }

    /// Brand name.
    #[must_use]
    pub fn brand(&self) -> Option<&'a str> {
        text_at(self.node, &["Brand"])
    }

    /// EAN code.
    #[must_use]
    pub fn ean(&self) -> Option<&'a str> {
        text_at(self.node, &["EAN"])
    }

    /// The raw `ItemDimensions` subtree (`Height`, `Length`, `Weight`, `Width`
    /// with their `@Units`).
    #[must_use]
    pub fn dimensions(&self) -> Option<&'a Node> {
        self.node.and_then(|n| n.get("ItemDimensions"))
    }

    /// Record label or publisher label.
    #[must_use]
    pub fn label(&self) -> Option<&'a str> {
        text_at(self.node, &["Label"])
    }

    /// List price in minor currency units.
    #[must_use]
    pub fn list_price(&self) -> Option<i64> {
        minor_units(text_at(self.node, &["ListPrice", "Amount"]))
    }

    /// Model designation.
    #[must_use]
    pub fn model(&self) -> Option<&'a str> {
        text_at(self.node, &["Model"])
    }

    /// Product title.
    #[must_use]
    pub fn title(&self) -> Option<&'a str> {
        text_at(self.node, &["Title"])
    }

    /// Platform (for software and games).
    #[must_use]
    pub fn platform(&self) -> Option<&'a str> {
        text_at(self.node, &["Platform"])
    }

    /// UPC code.
    #[must_use]
    pub fn upc(&self) -> Option<&'a str> {
        text_at(self.node, &["UPC"])
    }

    /// Every UPC listed under `UPCList`, in document order.
    ///
    /// Empty when the list is absent.
    #[must_use]
    pub fn upc_list(&self) -> Vec<&'a str> {
        texts(self.node.and_then(|n| n.at(&["UPCList", "UPCListElement"])))
    }
}
