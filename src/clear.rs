//! StringId clearing
//!
//! Resets every managed identifier attribute to the empty string so a
//! mission can be renumbered from scratch. Works on the parsed tree with
//! exact attribute-name matching, so look-alike attributes such as
//! `dropdownCompareStringId` are never touched.

use tracing::info;

use crate::error::Result;
use crate::mission::{MissionDocument, XmlElement, XmlNode, parse_mission, serialize_mission};
use crate::stringid::StringIdAttr;

/// Set every `stringId`, `titleStringId`, and `expandedStringId` attribute
/// in the tree to `""`, returning how many attributes were emptied.
///
/// Attributes stay declared; only their values are dropped. Elements
/// without a managed attribute are left alone.
pub fn clear_string_ids(doc: &mut MissionDocument) -> usize {
    let mut cleared = 0;
    for node in &mut doc.nodes {
        if let XmlNode::Element(element) = node {
            clear_element(element, &mut cleared);
        }
    }

    info!("cleared {cleared} stringId attributes");
    cleared
}

/// Parse `source`, clear all stringIds, and serialize the result.
///
/// # Errors
///
/// Returns an error when `source` is not well-formed XML.
pub fn clear_text(source: &str) -> Result<(String, usize)> {
    let mut doc = parse_mission(source)?;
    let cleared = clear_string_ids(&mut doc);
    Ok((serialize_mission(&doc), cleared))
}

fn clear_element(element: &mut XmlElement, cleared: &mut usize) {
    for attr in StringIdAttr::ALL {
        if element.has_attr(attr.as_str()) {
            element.set_attr(attr.as_str(), "");
            *cleared += 1;
        }
    }

    for child in &mut element.children {
        if let XmlNode::Element(child) = child {
            clear_element(child, cleared);
        }
    }
}
