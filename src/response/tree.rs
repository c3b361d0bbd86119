//! Generic document tree.
//!
//! [`Node`] mirrors the XML wire structure without interpreting it:
//!
//! - an element with neither children nor attributes is `Text` (or `Null` when empty)
//! - an element with children or attributes is a `Map` of child name to node,
//!   in document order; attributes appear as `@name`, and any text beside
//!   children as `#text`
//! - sibling elements with the same name collapse into one `List` entry
//!
//! The last rule is the source of the single-vs-many ambiguity: one `<Item>`
//! becomes a `Map`, two become a `List`. Accessors such as [`Node::records`]
//! and [`Node::first`] absorb it.
//!
//! Every lookup returns `Option`; a missing step never fails.

use std::slice;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// A node of the response tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// An empty element.
    Null,
    /// An element holding only text.
    Text(String),
    /// An element with children or attributes, in document order.
    Map(Vec<(String, Node)>),
    /// Repeated sibling elements sharing one name.
    List(Vec<Node>),
}

/// Errors raised while parsing a document into a [`Node`].
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The XML itself is malformed.
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The document contains no element.
    #[error("document has no root element")]
    Empty,

    /// The document ended before an element was closed.
    #[error("document ended inside element '{0}'")]
    Unclosed(String),
}

impl Node {
    /// Parses an XML document.
    ///
    /// The result is a `Map` with a single entry for the root element.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError`] if the document is malformed or empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use product_lookup::response::Node;
    ///
    /// let tree = Node::parse("<A><B>1</B><B>2</B><C/></A>").unwrap();
    /// assert_eq!(tree.at(&["A", "B"]).map(|b| b.records().len()), Some(2));
    /// assert_eq!(tree.at(&["A", "C"]), Some(&Node::Null));
    /// assert!(tree.at(&["A", "D", "E"]).is_none());
    /// ```
    pub fn parse(xml: &str) -> Result<Self, DocumentError> {
        let mut reader = Reader::from_str(xml);

        let mut stack: Vec<Frame> = Vec::new();
        let mut root: Vec<(String, Self)> = Vec::new();

        loop {
            match reader.read_event()? {
                Event::Start(start) => stack.push(Frame::open(&start)?),
                Event::Empty(start) => {
                    let (name, node) = Frame::open(&start)?.close();
                    attach(&mut stack, &mut root, name, node);
                }
                Event::End(_) => {
                    if let Some(frame) = stack.pop() {
                        let (name, node) = frame.close();
                        attach(&mut stack, &mut root, name, node);
                    }
                }
                Event::Text(text) => {
                    if let Some(frame) = stack.last_mut() {
                        frame.text.push_str(&text.unescape()?);
                    }
                }
                Event::CData(data) => {
                    if let Some(frame) = stack.last_mut() {
                        frame.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(frame) = stack.pop() {
            return Err(DocumentError::Unclosed(frame.name));
        }
        if root.is_empty() {
            return Err(DocumentError::Empty);
        }
        Ok(Self::Map(root))
    }

    /// Returns the child with the given name, if this is a `Map`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Follows a path of child names.
    #[must_use]
    pub fn at(&self, path: &[&str]) -> Option<&Self> {
        path.iter().try_fold(self, |node, key| node.get(key))
    }

    /// Consumes the node, returning the subtree at `path`.
    #[must_use]
    pub fn into_at(self, path: &[&str]) -> Option<Self> {
        path.iter().try_fold(self, |node, key| node.into_child(key))
    }

    /// Consumes the node, returning the child with the given name.
    #[must_use]
    pub fn into_child(self, key: &str) -> Option<Self> {
        match self {
            Self::Map(entries) => entries.into_iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Returns the text content.
    ///
    /// For a `Map` (an element with attributes), this is its `#text` entry.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Map(_) => self.get("#text").and_then(Self::text),
            _ => None,
        }
    }

    /// Returns the node as a sequence of records.
    ///
    /// A `List` yields its elements, a `Map` yields itself as the only
    /// record, and anything else yields nothing.
    #[must_use]
    pub fn records(&self) -> &[Self] {
        match self {
            Self::List(items) => items,
            Self::Map(_) => slice::from_ref(self),
            _ => &[],
        }
    }

    /// Returns the first element of a `List`, or the node itself otherwise.
    ///
    /// `Null` yields `None`.
    #[must_use]
    pub fn first(&self) -> Option<&Self> {
        match self {
            Self::List(items) => items.first(),
            Self::Null => None,
            _ => Some(self),
        }
    }

    /// Returns a short name of the variant, for error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "empty element",
            Self::Text(_) => "text",
            Self::Map(_) => "record",
            Self::List(_) => "list",
        }
    }

    /// Returns `true` if this is a `Map`.
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Returns `true` if this is a `List`.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Text(text) => serializer.serialize_str(text),
            Self::Map(entries) => serializer.collect_map(entries.iter().map(|(k, v)| (k, v))),
            Self::List(items) => serializer.collect_seq(items),
        }
    }
}

/// An element being built.
struct Frame {
    name: String,
    entries: Vec<(String, Node)>,
    text: String,
}

impl Frame {
    fn open(start: &BytesStart<'_>) -> Result<Self, DocumentError> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut entries = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = format!("@{}", String::from_utf8_lossy(attr.key.as_ref()));
            let value = attr.unescape_value()?.into_owned();
            entries.push((key, Node::Text(value)));
        }
        Ok(Self {
            name,
            entries,
            text: String::new(),
        })
    }

    fn close(self) -> (String, Node) {
        let Self {
            name,
            mut entries,
            text,
        } = self;
        // Fragments split by comments or CDATA are joined raw and trimmed once.
        let text = text.trim();

        let node = if entries.is_empty() {
            if text.is_empty() {
                Node::Null
            } else {
                Node::Text(text.to_string())
            }
        } else {
            if !text.is_empty() {
                entries.push(("#text".to_string(), Node::Text(text.to_string())));
            }
            Node::Map(entries)
        };
        (name, node)
    }
}

fn attach(stack: &mut [Frame], root: &mut Vec<(String, Node)>, name: String, node: Node) {
    match stack.last_mut() {
        Some(parent) => insert_entry(&mut parent.entries, name, node),
        None => insert_entry(root, name, node),
    }
}

/// Adds a child, collapsing repeated names into a `List`.
fn insert_entry(entries: &mut Vec<(String, Node)>, name: String, node: Node) {
    match entries.iter_mut().find(|(k, _)| *k == name) {
        Some((_, Node::List(items))) => items.push(node),
        Some((_, existing)) => {
            let previous = std::mem::replace(existing, Node::Null);
            *existing = Node::List(vec![previous, node]);
        }
        None => entries.push((name, node)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_empty_elements() {
        let tree = Node::parse("<Root><Title>Kindle</Title><Empty/><Blank></Blank></Root>").unwrap();

        assert_eq!(tree.at(&["Root", "Title"]).and_then(Node::text), Some("Kindle"));
        assert_eq!(tree.at(&["Root", "Empty"]), Some(&Node::Null));
        assert_eq!(tree.at(&["Root", "Blank"]), Some(&Node::Null));
    }

    #[test]
    fn test_repeated_siblings_become_a_list() {
        let tree = Node::parse("<Items><Item>a</Item><Other/><Item>b</Item><Item>c</Item></Items>")
            .unwrap();

        let items = tree.at(&["Items", "Item"]).unwrap();
        assert!(items.is_list());
        assert_eq!(items.records().len(), 3);
        assert_eq!(tree.at(&["Items", "Other"]), Some(&Node::Null));
        match items {
            Node::List(values) => assert_eq!(
                values,
                &vec![
                    Node::Text("a".to_string()),
                    Node::Text("b".to_string()),
                    Node::Text("c".to_string())
                ]
            ),
            other => panic!("Expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_single_record_is_one_record() {
        let tree = Node::parse("<Items><Item><ASIN>X</ASIN></Item></Items>").unwrap();
        let item = tree.at(&["Items", "Item"]).unwrap();

        assert!(item.is_map());
        assert_eq!(item.records().len(), 1);
        assert_eq!(item.first(), Some(item));
    }

    #[test]
    fn test_attributes_and_mixed_text() {
        let tree = Node::parse(r#"<Dim><Height Units="hundredths-inches">750</Height></Dim>"#)
            .unwrap();
        let height = tree.at(&["Dim", "Height"]).unwrap();

        assert_eq!(height.get("@Units").and_then(Node::text), Some("hundredths-inches"));
        assert_eq!(height.text(), Some("750"));
    }

    #[test]
    fn test_text_split_by_comment_keeps_inner_spaces() {
        let tree = Node::parse("<R><T>Tom <!-- c --> Jerry</T><U>\n  padded  \n</U></R>").unwrap();

        assert_eq!(tree.at(&["R", "T"]).and_then(Node::text), Some("Tom  Jerry"));
        assert_eq!(tree.at(&["R", "U"]).and_then(Node::text), Some("padded"));
    }

    #[test]
    fn test_whitespace_between_children_is_not_text() {
        let tree = Node::parse("<R>\n  <A>1</A>\n  <B>2</B>\n</R>").unwrap();
        let r = tree.get("R").unwrap();

        assert!(r.get("#text").is_none());
        assert_eq!(r.get("B").and_then(Node::text), Some("2"));
    }

    #[test]
    fn test_entities_and_cdata_are_decoded() {
        let tree = Node::parse("<R><A>Tom &amp; Jerry</A><B><![CDATA[<b>x</b>]]></B></R>").unwrap();

        assert_eq!(tree.at(&["R", "A"]).and_then(Node::text), Some("Tom & Jerry"));
        assert_eq!(tree.at(&["R", "B"]).and_then(Node::text), Some("<b>x</b>"));
    }

    #[test]
    fn test_missing_paths_resolve_to_none() {
        let tree = Node::parse("<R><A>1</A></R>").unwrap();

        assert!(tree.at(&["R", "B"]).is_none());
        assert!(tree.at(&["R", "A", "C"]).is_none());
        assert!(tree.at(&["X"]).is_none());
        assert_eq!(Node::Null.first(), None);
        assert!(Node::Null.records().is_empty());
    }

    #[test]
    fn test_into_at_takes_ownership_of_subtree() {
        let tree = Node::parse("<R><A><B>deep</B></A></R>").unwrap();
        let b = tree.into_at(&["R", "A", "B"]).unwrap();
        assert_eq!(b, Node::Text("deep".to_string()));
    }

    #[test]
    fn test_malformed_documents_are_rejected() {
        assert!(matches!(Node::parse(""), Err(DocumentError::Empty)));
        assert!(matches!(Node::parse("<A><B></A>"), Err(DocumentError::Xml(_))));
        assert!(Node::parse("<A><B>").is_err());
    }

    #[test]
    fn test_serializes_as_json_object() {
        let tree = Node::parse("<E><Code>X</Code><Message>y</Message><N/></E>").unwrap();
        let json = serde_json::to_value(&tree).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"E": {"Code": "X", "Message": "y", "N": null}})
        );
    }
}
