//! Mission document serialization
//!
//! Hand-built writer instead of an event writer: attribute values carry
//! translated text, so the quote character has to adapt to the value and
//! literal newlines inside values must survive untouched.

use std::borrow::Cow;

use super::document::{MissionDocument, XmlElement, XmlNode};

/// Serialize a document back to XML text.
///
/// Layout whitespace, comments, and attribute order come straight from the
/// tree, so a freshly parsed document serializes back to its source form.
#[must_use]
pub fn serialize_mission(doc: &MissionDocument) -> String {
    let mut out = String::new();
    for node in &doc.nodes {
        write_node(&mut out, node);
    }
    out
}

fn write_node(out: &mut String, node: &XmlNode) {
    match node {
        XmlNode::Declaration(content) => {
            out.push_str("<?");
            out.push_str(content);
            out.push_str("?>");
        }
        XmlNode::DocType(content) => {
            out.push_str("<!DOCTYPE ");
            out.push_str(content.trim());
            out.push('>');
        }
        XmlNode::ProcessingInstruction(content) => {
            out.push_str("<?");
            out.push_str(content);
            out.push_str("?>");
        }
        XmlNode::Comment(content) => {
            out.push_str("<!--");
            out.push_str(content);
            out.push_str("-->");
        }
        XmlNode::Text(text) => out.push_str(&escape_text_minimal(text)),
        XmlNode::CData(text) => {
            out.push_str("<![CDATA[");
            out.push_str(text);
            out.push_str("]]>");
        }
        XmlNode::Element(element) => write_element(out, element),
    }
}

fn write_element(out: &mut String, element: &XmlElement) {
    out.push('<');
    out.push_str(&element.name);

    for (name, value) in &element.attributes {
        out.push(' ');
        out.push_str(name);
        out.push('=');
        write_attr_value(out, value);
    }

    if element.self_closing {
        out.push_str("/>");
        return;
    }

    out.push('>');
    for child in &element.children {
        write_node(out, child);
    }
    out.push_str("</");
    out.push_str(&element.name);
    out.push('>');
}

/// Write a quoted attribute value, picking a quote character that does not
/// collide with the value: `"` preferred, `'` when the value contains `"`,
/// and `"` with `&quot;` entities when it contains both.
fn write_attr_value(out: &mut String, value: &str) {
    let escaped = escape_text_minimal(value);

    if escaped.contains('"') {
        if escaped.contains('\'') {
            out.push('"');
            out.push_str(&escaped.replace('"', "&quot;"));
            out.push('"');
        } else {
            out.push('\'');
            out.push_str(&escaped);
            out.push('\'');
        }
    } else {
        out.push('"');
        out.push_str(&escaped);
        out.push('"');
    }
}

/// Escape only the characters XML requires everywhere. In text content and
/// quoted attribute values, only `<` and `&` are unsafe; quotes are handled
/// per attribute.
fn escape_text_minimal(s: &str) -> Cow<'_, str> {
    if s.contains('&') || s.contains('<') {
        Cow::Owned(s.replace('&', "&amp;").replace('<', "&lt;"))
    } else {
        Cow::Borrowed(s)
    }
}
