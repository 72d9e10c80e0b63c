//! Mission document structures
//!
//! A small generic XML tree: the toolkit needs exact attribute and content
//! round trips, so everything the parser sees (declaration, comments,
//! whitespace runs, CDATA) is kept as a node.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A parsed mission XML document.
///
/// Owns the ordered top-level nodes: the XML declaration, comments and
/// whitespace around the root, and the root element itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissionDocument {
    /// Top-level nodes in document order.
    pub nodes: Vec<XmlNode>,
}

/// A node in a mission document tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum XmlNode {
    /// The XML declaration content (between `<?` and `?>`).
    Declaration(String),
    /// A DOCTYPE declaration body.
    DocType(String),
    /// A processing instruction body.
    ProcessingInstruction(String),
    /// A comment body (between `<!--` and `-->`).
    Comment(String),
    /// A text run, unescaped, whitespace preserved.
    Text(String),
    /// A CDATA section body.
    CData(String),
    /// An element with attributes and children.
    Element(XmlElement),
}

/// An element in a mission document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XmlElement {
    /// Tag name.
    pub name: String,
    /// Attributes in document order, values unescaped.
    pub attributes: IndexMap<String, String>,
    /// Child nodes in document order.
    pub children: Vec<XmlNode>,
    /// Whether the element was written as `<tag/>`.
    pub self_closing: bool,
}

impl MissionDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The document's root element, if one exists.
    #[must_use]
    pub fn root_element(&self) -> Option<&XmlElement> {
        self.nodes.iter().find_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Mutable access to the document's root element.
    pub fn root_element_mut(&mut self) -> Option<&mut XmlElement> {
        self.nodes.iter_mut().find_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            _ => None,
        })
    }
}

impl XmlElement {
    /// Creates an element with the given tag name and no attributes.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        XmlElement {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
            self_closing: false,
        }
    }

    /// Look up an attribute value by exact name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Whether the element declares the attribute, regardless of value.
    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Set an attribute value. An existing attribute keeps its position in
    /// the tag; a new one is appended.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// The element's direct text content: all text and CDATA children
    /// concatenated, child elements skipped.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            match child {
                XmlNode::Text(run) | XmlNode::CData(run) => text.push_str(run),
                _ => {}
            }
        }
        text
    }

    /// Replace the element's content with a single text run.
    ///
    /// A self-closing element becomes an open/close pair.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![XmlNode::Text(text.into())];
        self.self_closing = false;
    }

    /// Iterate over direct child elements.
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Iterate over direct child elements with the given tag name.
    pub fn child_elements_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.child_elements().filter(move |element| element.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_lookup_is_exact() {
        let mut element = XmlElement::new("condition");
        element.set_attr("stringId", "MISS-MI01S001");
        element.set_attr("dropdownCompareStringId", "other");

        assert_eq!(element.attr("stringId"), Some("MISS-MI01S001"));
        assert!(!element.has_attr("StringId"));
        assert!(element.has_attr("dropdownCompareStringId"));
    }

    #[test]
    fn test_set_attr_keeps_position() {
        let mut element = XmlElement::new("window");
        element.set_attr("position", "default");
        element.set_attr("stringId", "");
        element.set_attr("gamepad", "true");

        element.set_attr("stringId", "MISS-MI01S001-INFO");

        let names: Vec<&str> = element.attributes.keys().map(String::as_str).collect();
        assert_eq!(names, ["position", "stringId", "gamepad"]);
    }

    #[test]
    fn test_text_content_joins_runs() {
        let mut element = XmlElement::new("element");
        element.children.push(XmlNode::Text("Drive ".to_string()));
        element.children.push(XmlNode::Element(XmlElement::new("b")));
        element.children.push(XmlNode::CData("to the shop".to_string()));

        assert_eq!(element.text_content(), "Drive to the shop");
    }

    #[test]
    fn test_set_text_clears_self_closing() {
        let mut element = XmlElement::new("window");
        element.self_closing = true;
        element.set_text("Hello");

        assert!(!element.self_closing);
        assert_eq!(element.text_content(), "Hello");
    }
}
