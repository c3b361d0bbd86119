//! Well-known item links.
//!
//! `ItemLinks` holds one `ItemLink` record or a list of them; each has a
//! `Description` and a `URL`. Links are matched by exact description.

use crate::item::text_at;
use crate::response::Node;

/// Description of the technical details link.
pub const TECHNICAL_DETAILS: &str = "Technical Details";

/// Description of the all offers link.
pub const ALL_OFFERS: &str = "All Offers";

/// Borrowed view of an item's `ItemLinks` block.
#[derive(Clone, Copy, Debug)]
pub struct ItemLinks<'a> {
    node: Option<&'a Node>,
}

impl<'a> ItemLinks<'a> {
    pub(crate) const fn new(node: Option<&'a Node>) -> Self {
        Self { node }
    }

    /// URL of the technical details page.
    #[must_use]
    pub fn description_url(&self) -> Option<&'a str> {
        self.url_for(TECHNICAL_DETAILS)
    }

    /// URL of the all offers page.
    #[must_use]
    pub fn all_offers_url(&self) -> Option<&'a str> {
        self.url_for(ALL_OFFERS)
    }

    /// URL of the first link whose description is exactly `description`.
    #[must_use]
    pub fn url_for(&self, description: &str) -> Option<&'a str> {
        self.links()
            .iter()
            .find(|link| text_at(Some(*link), &["Description"]) == Some(description))
            .and_then(|link| text_at(Some(link), &["URL"]))
    }

    fn links(&self) -> &'a [Node] {
        self.node
            .and_then(|n| n.get("ItemLink"))
            .map_or(&[][..], Node::records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(xml: &str) -> Node {
        Node::parse(xml).unwrap().into_child("ItemLinks").unwrap()
    }

    #[test]
    fn test_finds_links_by_description() {
        let node = links(
            "<ItemLinks>\
             <ItemLink><Description>Add To Wishlist</Description><URL>https://example.com/wish</URL></ItemLink>\
             <ItemLink><Description>Technical Details</Description><URL>https://example.com/tech</URL></ItemLink>\
             <ItemLink><Description>All Offers</Description><URL>https://example.com/offers</URL></ItemLink>\
             <ItemLink><Description>All Offers</Description><URL>https://example.com/second</URL></ItemLink>\
             </ItemLinks>",
        );
        let view = ItemLinks::new(Some(&node));

        assert_eq!(view.description_url(), Some("https://example.com/tech"));
        assert_eq!(view.all_offers_url(), Some("https://example.com/offers"));
        assert_eq!(view.url_for("Add To Wishlist"), Some("https://example.com/wish"));
    }

    #[test]
    fn test_single_link_record() {
        let node = links(
            "<ItemLinks><ItemLink><Description>Technical Details</Description>\
             <URL>https://example.com/tech</URL></ItemLink></ItemLinks>",
        );
        let view = ItemLinks::new(Some(&node));

        assert_eq!(view.description_url(), Some("https://example.com/tech"));
        assert_eq!(view.all_offers_url(), None);
    }

    #[test]
    fn test_description_match_is_exact() {
        let node = links(
            "<ItemLinks><ItemLink><Description>technical details</Description>\
             <URL>https://example.com/tech</URL></ItemLink></ItemLinks>",
        );
        assert_eq!(ItemLinks::new(Some(&node)).description_url(), None);
        assert_eq!(ItemLinks::new(None).all_offers_url(), None);
    }
}
