//! StringId assignment
//!
//! Walks a mission document in order and rewrites every declared
//! identifier attribute from the mission base: `{base}TITL` for the name,
//! `{base}DESS`/`{base}DESL` for descriptions, and numbered condition
//! chains (`{base}S001`, `-INFO`, `-I001`, ...) for the briefing tree.
//! Attributes are only ever updated in place; an element that does not
//! declare `stringId` never gains one.

use tracing::info;

use crate::error::Result;
use crate::mission::{MissionDocument, XmlElement, XmlNode, parse_mission, serialize_mission};
use crate::stringid::{
    DescriptionVariant, IdentifierBase, WindowKind, condition_token, description_token,
    element_token, expanded_token, title_token, window_title_token, window_token,
};

/// Counts of identifier attributes written by one assignment run, by role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssignSummary {
    /// `stringId` attributes written on `name` elements.
    pub names: usize,
    /// `stringId` attributes written on `description` elements.
    pub descriptions: usize,
    /// `stringId` and `expandedStringId` attributes written on conditions.
    pub conditions: usize,
    /// `stringId` and `titleStringId` attributes written on windows.
    pub windows: usize,
    /// `stringId` attributes written on text elements.
    pub elements: usize,
}

impl AssignSummary {
    /// Total attributes written across all roles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.names + self.descriptions + self.conditions + self.windows + self.elements
    }
}

/// Traversal state threaded through the walk.
///
/// Condition numbering is document-global while element numbering restarts
/// at each window, so both live here rather than in the recursion frames.
#[derive(Default)]
struct WalkState {
    condition_index: u32,
    condition_token: Option<String>,
    window_kind: Option<WindowKind>,
    element_index: u32,
}

/// Rewrite every declared identifier attribute in `doc` from `base`.
///
/// Tokens depend only on the document structure, so running this twice
/// produces the same document as running it once.
///
/// # Errors
///
/// Returns [`Error::IndexOverflow`](crate::Error::IndexOverflow) when a
/// condition or element index no longer fits its 3-digit field. The
/// document may be partially updated in that case; callers should discard
/// it.
pub fn assign_string_ids(
    doc: &mut MissionDocument,
    base: &IdentifierBase,
) -> Result<AssignSummary> {
    let mut state = WalkState::default();
    let mut summary = AssignSummary::default();

    for node in &mut doc.nodes {
        if let XmlNode::Element(element) = node {
            walk(element, base, &mut state, false, &mut summary)?;
        }
    }

    info!(
        "assigned {} stringIds for base {} ({} conditions numbered)",
        summary.total(),
        base,
        state.condition_index
    );
    Ok(summary)
}

/// Parse `source`, assign stringIds, and serialize the result.
///
/// # Errors
///
/// Returns an error when `source` is not well-formed XML or an index
/// overflows its token field.
pub fn assign_text(source: &str, base: &IdentifierBase) -> Result<(String, AssignSummary)> {
    let mut doc = parse_mission(source)?;
    let summary = assign_string_ids(&mut doc, base)?;
    Ok((serialize_mission(&doc), summary))
}

fn walk(
    element: &mut XmlElement,
    base: &IdentifierBase,
    state: &mut WalkState,
    inside_stop: bool,
    summary: &mut AssignSummary,
) -> Result<()> {
    match element.name.as_str() {
        "name" => {
            if element.has_attr("stringId") {
                element.set_attr("stringId", title_token(base));
                summary.names += 1;
            }
        }
        "description" => {
            let variant = element
                .attr("type")
                .and_then(DescriptionVariant::from_type_attr);
            if let Some(variant) = variant {
                if element.has_attr("stringId") {
                    element.set_attr("stringId", description_token(base, variant));
                    summary.descriptions += 1;
                }
            }
        }
        "condition" => {
            if inside_stop {
                state.condition_index += 1;
                let token = condition_token(base, state.condition_index)?;
                if element.has_attr("stringId") {
                    element.set_attr("stringId", token.clone());
                    summary.conditions += 1;
                }
                if element.has_attr("expandedStringId") {
                    element.set_attr("expandedStringId", expanded_token(&token));
                    summary.conditions += 1;
                }
                state.condition_token = Some(token);
            } else {
                // Conditions outside stops (templates, dropdown banks) are
                // never numbered and must not leak context to later windows.
                state.condition_token = None;
                state.window_kind = None;
            }
        }
        "window" => {
            if let Some(token) = state.condition_token.clone() {
                let kind = if is_gamepad(element) {
                    WindowKind::Gamepad
                } else {
                    WindowKind::Info
                };
                state.window_kind = Some(kind);
                state.element_index = 0;

                if element.has_attr("stringId") {
                    element.set_attr("stringId", window_token(&token, kind));
                    summary.windows += 1;
                }
                if element.has_attr("titleStringId") {
                    element.set_attr("titleStringId", window_title_token(&token, kind));
                    summary.windows += 1;
                }
            }
        }
        "element" => {
            if element.attr("type") == Some("text") {
                if let (Some(token), Some(kind)) =
                    (state.condition_token.clone(), state.window_kind)
                {
                    // Every text element consumes an index, declared or not,
                    // so numbering tracks structure rather than attributes.
                    state.element_index += 1;
                    let id = element_token(&token, kind, state.element_index)?;
                    if element.has_attr("stringId") {
                        element.set_attr("stringId", id);
                        summary.elements += 1;
                    }
                }
            }
        }
        _ => {}
    }

    let inside_stop = inside_stop || element.name == "stop";
    for child in &mut element.children {
        if let XmlNode::Element(child) = child {
            walk(child, base, state, inside_stop, summary)?;
        }
    }
    Ok(())
}

/// A window is a gamepad window when its `gamepad` attribute is present
/// with a truthy value.
fn is_gamepad(element: &XmlElement) -> bool {
    match element.attr("gamepad") {
        Some(value) => !(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false")),
        None => false,
    }
}
