//! Turns a lookup response body into items or a typed failure.

use crate::item::Item;
use crate::lookup::{ApiReturnError, LookupError, RemoteError, UnknownResponseShapeError};
use crate::response::tree::Node;

const ITEMS_PATH: [&str; 2] = ["ItemLookupResponse", "Items"];
const IS_VALID_PATH: &str = "ItemLookupResponse/Items/Request/IsValid";
const ERRORS_PATH: &str = "ItemLookupResponse/Items/Request/Errors/Error";
const ITEM_PATH: &str = "ItemLookupResponse/Items/Item";

/// The `Item` node of a response: one record or several.
///
/// A response holding one item carries a record where a response holding
/// several carries a list. Both collapse to a `Vec` through
/// [`ItemsShape::into_nodes`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemsShape {
    /// Exactly one item.
    Single(Node),
    /// Any number of items, in the service's order.
    Sequence(Vec<Node>),
}

impl ItemsShape {
    /// Classifies an `Item` node.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownResponseShapeError`] if the node is neither a record
    /// nor a list.
    pub fn classify(node: Node) -> Result<Self, UnknownResponseShapeError> {
        match node {
            Node::Map(_) => Ok(Self::Single(node)),
            Node::List(items) => Ok(Self::Sequence(items)),
            other => Err(UnknownResponseShapeError::new(
                ITEM_PATH,
                format!("expected a record or a list, found {}", other.kind()),
            )),
        }
    }

    /// Returns the item nodes as a sequence.
    #[must_use]
    pub fn into_nodes(self) -> Vec<Node> {
        match self {
            Self::Single(node) => vec![node],
            Self::Sequence(nodes) => nodes,
        }
    }
}

/// Normalizes a lookup response body into its items.
///
/// # Errors
///
/// - [`LookupError::ApiReturn`] if the request was marked invalid, or if no
///   item resolved and the service reported why
/// - [`LookupError::UnknownResponseShape`] if the body is not XML, lacks the
///   validity flag, or carries neither items nor errors
///
/// # Example
///
/// ```rust
/// use product_lookup::response::normalize;
///
/// let body = "<ItemLookupResponse><Items>\
///     <Request><IsValid>True</IsValid></Request>\
///     <Item><ASIN>B00008OE6I</ASIN></Item>\
///     </Items></ItemLookupResponse>";
///
/// let items = normalize(body).unwrap();
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0].asin(), Some("B00008OE6I"));
/// ```
pub fn normalize(body: &str) -> Result<Vec<Item>, LookupError> {
    let tree = Node::parse(body)
        .map_err(|e| UnknownResponseShapeError::new(ITEMS_PATH.join("/"), e.to_string()))?;

    let items = tree.into_at(&ITEMS_PATH).ok_or_else(|| {
        UnknownResponseShapeError::new(ITEMS_PATH.join("/"), "element is missing")
    })?;

    let valid = items
        .at(&["Request", "IsValid"])
        .and_then(Node::text)
        .ok_or_else(|| UnknownResponseShapeError::new(IS_VALID_PATH, "validity flag is missing"))?;
    let is_valid = !valid.trim().eq_ignore_ascii_case("False");

    let errors = remote_errors(items.at(&["Request", "Errors", "Error"]));

    if !is_valid {
        return Err(ApiReturnError::from_records(errors)
            .map_or_else(
                || {
                    LookupError::from(UnknownResponseShapeError::new(
                        ERRORS_PATH,
                        "request is marked invalid but carries no error records",
                    ))
                },
                LookupError::from,
            ));
    }

    let Some(item_node) = items.into_child("Item") else {
        return Err(ApiReturnError::from_records(errors).map_or_else(
            || LookupError::from(UnknownResponseShapeError::new(ITEM_PATH, "element is missing")),
            LookupError::from,
        ));
    };

    if !errors.is_empty() {
        tracing::warn!(
            errors = errors.len(),
            "Lookup response carries request errors alongside items: {}",
            errors
                .iter()
                .map(|e| e.code.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    let result: Vec<Item> = ItemsShape::classify(item_node)?
        .into_nodes()
        .into_iter()
        .map(Item::from_node)
        .collect();

    tracing::debug!(items = result.len(), "Normalized lookup response");
    Ok(result)
}

/// Reads the service's error document from a rejected (non-2xx) response.
///
/// The document has the form
/// `<ItemLookupErrorResponse><Error><Code/><Message/></Error></ItemLookupErrorResponse>`;
/// any root element whose name ends in `ErrorResponse` is accepted.
/// Returns `None` when the body is not such a document.
#[must_use]
pub fn rejection_from_error_document(body: &str) -> Option<ApiReturnError> {
    let tree = Node::parse(body).ok()?;
    let Node::Map(roots) = tree else {
        return None;
    };
    let (name, root) = roots.first()?;
    if !name.ends_with("ErrorResponse") {
        return None;
    }
    ApiReturnError::from_records(remote_errors(root.get("Error")))
}

fn remote_errors(node: Option<&Node>) -> Vec<RemoteError> {
    node.map_or(&[][..], Node::records)
        .iter()
        .map(|record| RemoteError {
            code: field_text(record, "Code"),
            message: field_text(record, "Message"),
        })
        .collect()
}

fn field_text(record: &Node, key: &str) -> String {
    record
        .get(key)
        .and_then(Node::text)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(request: &str, items: &str) -> String {
        format!(
            "<?xml version=\"1.0\" ?>\
             <ItemLookupResponse xmlns=\"http://webservices.amazon.com/AWSECommerceService/2013-08-01\">\
             <OperationRequest><RequestId>abc</RequestId></OperationRequest>\
             <Items><Request>{request}</Request>{items}</Items>\
             </ItemLookupResponse>"
        )
    }

    #[test]
    fn test_single_item_record_yields_one_item() {
        let body = response(
            "<IsValid>True</IsValid>",
            "<Item><ASIN>B00008OE6I</ASIN></Item>",
        );
        let items = normalize(&body).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].asin(), Some("B00008OE6I"));
    }

    #[test]
    fn test_item_list_keeps_service_order() {
        let body = response(
            "<IsValid>True</IsValid>",
            "<Item><ASIN>A1</ASIN></Item><Item><ASIN>A2</ASIN></Item><Item><ASIN>A3</ASIN></Item>",
        );
        let items = normalize(&body).unwrap();

        let asins: Vec<_> = items.iter().filter_map(Item::asin).collect();
        assert_eq!(asins, vec!["A1", "A2", "A3"]);
    }

    #[test]
    fn test_invalid_request_with_single_error() {
        let body = response(
            "<IsValid>False</IsValid><Errors><Error>\
             <Code>AWS.InvalidParameterValue</Code><Message>foo</Message>\
             </Error></Errors>",
            "",
        );

        match normalize(&body) {
            Err(LookupError::ApiReturn(e)) => {
                assert_eq!(e.to_string(), "API Lookup Error AWS.InvalidParameterValue - foo");
            }
            other => panic!("Expected ApiReturn, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_request_with_several_errors() {
        let body = response(
            "<IsValid>False</IsValid><Errors>\
             <Error><Code>A</Code><Message>first</Message></Error>\
             <Error><Code>B</Code><Message>second</Message></Error>\
             </Errors>",
            "",
        );

        match normalize(&body) {
            Err(LookupError::ApiReturn(ApiReturnError::Multiple { errors, dump })) => {
                assert_eq!(errors.len(), 2);
                assert!(dump.contains("first"));
                assert!(dump.contains("second"));
            }
            other => panic!("Expected ApiReturn::Multiple, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_request_without_errors_is_unknown_shape() {
        let body = response("<IsValid>False</IsValid>", "");
        assert!(matches!(
            normalize(&body),
            Err(LookupError::UnknownResponseShape(_))
        ));
    }

    #[test]
    fn test_missing_validity_flag_is_unknown_shape() {
        let body = response("", "<Item><ASIN>A1</ASIN></Item>");
        match normalize(&body) {
            Err(LookupError::UnknownResponseShape(e)) => assert_eq!(e.path, IS_VALID_PATH),
            other => panic!("Expected UnknownResponseShape, got {other:?}"),
        }
    }

    #[test]
    fn test_unparsable_body_is_unknown_shape() {
        assert!(matches!(
            normalize("not xml <"),
            Err(LookupError::UnknownResponseShape(_))
        ));
        assert!(matches!(
            normalize("<Other/>"),
            Err(LookupError::UnknownResponseShape(_))
        ));
    }

    #[test]
    fn test_text_item_is_unknown_shape() {
        let body = response("<IsValid>True</IsValid>", "<Item>B00008OE6I</Item>");
        match normalize(&body) {
            Err(LookupError::UnknownResponseShape(e)) => {
                assert_eq!(e.path, ITEM_PATH);
                assert!(e.reason.contains("text"));
            }
            other => panic!("Expected UnknownResponseShape, got {other:?}"),
        }
    }

    #[test]
    fn test_no_items_but_errors_is_api_return() {
        let body = response(
            "<IsValid>True</IsValid><Errors><Error>\
             <Code>AWS.ECommerceService.ItemNotAccessible</Code>\
             <Message>This item is not accessible through the Product Advertising API.</Message>\
             </Error></Errors>",
            "",
        );
        assert!(matches!(normalize(&body), Err(LookupError::ApiReturn(_))));
    }

    #[test]
    fn test_no_items_and_no_errors_is_unknown_shape() {
        let body = response("<IsValid>True</IsValid>", "");
        assert!(matches!(
            normalize(&body),
            Err(LookupError::UnknownResponseShape(_))
        ));
    }

    #[test]
    fn test_unresolved_identifiers_are_omitted() {
        let body = response(
            "<IsValid>True</IsValid><Errors><Error>\
             <Code>AWS.InvalidParameterValue</Code><Message>BAD is not a valid value</Message>\
             </Error></Errors>",
            "<Item><ASIN>A1</ASIN></Item>",
        );
        let items = normalize(&body).unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_single_record_and_one_element_list_normalize_alike() {
        let record = Node::parse("<Item><ASIN>B1</ASIN><Title>One</Title></Item>")
            .unwrap()
            .into_child("Item")
            .unwrap();

        let single = ItemsShape::classify(record.clone()).unwrap();
        let sequence = ItemsShape::classify(Node::List(vec![record])).unwrap();

        assert!(matches!(single, ItemsShape::Single(_)));
        assert!(matches!(sequence, ItemsShape::Sequence(_)));
        assert_eq!(single.into_nodes(), sequence.into_nodes());
        assert!(ItemsShape::classify(Node::Text("x".to_string())).is_err());
    }

    #[test]
    fn test_classify_rejects_empty_node() {
        assert!(ItemsShape::classify(Node::Null).is_err());
        assert_eq!(
            ItemsShape::classify(Node::List(vec![Node::Null, Node::Null]))
                .unwrap()
                .into_nodes()
                .len(),
            2
        );
    }

    #[test]
    fn test_error_document_is_read() {
        let body = "<?xml version=\"1.0\"?>\
            <ItemLookupErrorResponse xmlns=\"http://ecs.amazonaws.com/doc/2013-08-01/\">\
            <Error><Code>SignatureDoesNotMatch</Code>\
            <Message>The request signature we calculated does not match the signature you provided.</Message>\
            </Error><RequestId>abc</RequestId></ItemLookupErrorResponse>";

        match rejection_from_error_document(body) {
            Some(ApiReturnError::Single { code, .. }) => assert_eq!(code, "SignatureDoesNotMatch"),
            other => panic!("Expected a single rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_other_bodies_are_not_error_documents() {
        assert!(rejection_from_error_document("Service Unavailable").is_none());
        assert!(rejection_from_error_document("<html><body>503</body></html>").is_none());
        assert!(rejection_from_error_document("<ItemLookupErrorResponse/>").is_none());
    }
}
