//! Translation merge
//!
//! Applies a parsed translation table back onto a mission document. Every
//! element whose identifier attribute matches a table key gets its
//! translated text written to the place extraction read it from: the
//! `description`/`expandedDescription` attribute when declared, the inner
//! content otherwise. Window titles are reported but never rewritten,
//! since the document holds no title text to replace.

use indexmap::IndexSet;
use tracing::info;

use crate::error::Result;
use crate::mission::{MissionDocument, XmlElement, XmlNode, parse_mission, serialize_mission};
use crate::sheet::{TranslationTable, unescape_text};
use crate::stringid::StringIdAttr;

/// Counts from one merge run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Translations written into the document.
    pub replaced: usize,
    /// `titleStringId` matches left alone.
    pub skipped_titles: usize,
    /// Matches with empty text or no writable target.
    pub skipped: usize,
}

/// StringIds that exist on only one side of the merge.
///
/// Diagnostic only; the merge proceeds for every matched entry regardless
/// of what is listed here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciliationReport {
    /// Table keys that match no identifier in the document, in table order.
    pub missing_in_xml: Vec<String>,
    /// Document identifiers absent from the table, in document order,
    /// deduplicated.
    pub missing_in_clipboard: Vec<String>,
}

impl ReconciliationReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missing_in_xml.is_empty() && self.missing_in_clipboard.is_empty()
    }

    /// Render the mismatch table as markdown, columns padded to the widest
    /// entry. Document-only ids go under `Clipboard` (they are missing
    /// there), table-only ids under `XML`.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let left_width = column_width("Clipboard", &self.missing_in_clipboard);
        let right_width = column_width("XML", &self.missing_in_xml);

        let mut lines = vec![
            "# Missing StringIds".to_string(),
            String::new(),
            format!("| {:<left_width$} | {:<right_width$} |", "Clipboard", "XML"),
            format!("| {:-<left_width$} | {:-<right_width$} |", "", ""),
        ];
        for id in &self.missing_in_clipboard {
            lines.push(format!("| {id:<left_width$} | {:<right_width$} |", ""));
        }
        for id in &self.missing_in_xml {
            lines.push(format!("| {:<left_width$} | {id:<right_width$} |", ""));
        }
        lines.join("\n")
    }
}

fn column_width(header: &str, ids: &[String]) -> usize {
    ids.iter()
        .map(String::len)
        .chain([header.len()])
        .max()
        .unwrap_or(header.len())
}

/// Everything one merge run produced.
#[derive(Debug, Clone, Default)]
pub struct MergeOutcome {
    pub summary: MergeSummary,
    pub report: ReconciliationReport,
}

/// Write the table's translations into `doc`.
///
/// The reconciliation report is computed against the untouched document,
/// then every matched entry is applied. Empty translations and window
/// titles are counted but never written.
pub fn apply_translations(doc: &mut MissionDocument, table: &TranslationTable) -> MergeOutcome {
    let report = reconcile(doc, table);

    let mut summary = MergeSummary::default();
    for node in &mut doc.nodes {
        if let XmlNode::Element(element) = node {
            merge_element(element, table, &mut summary);
        }
    }

    info!(
        "merged {} translations ({} title matches and {} entries skipped)",
        summary.replaced, summary.skipped_titles, summary.skipped
    );
    MergeOutcome { summary, report }
}

/// Parse `source`, apply `table`, and serialize the result.
///
/// # Errors
///
/// Returns an error when `source` is not well-formed XML.
pub fn merge_text(source: &str, table: &TranslationTable) -> Result<(String, MergeOutcome)> {
    let mut doc = parse_mission(source)?;
    let outcome = apply_translations(&mut doc, table);
    Ok((serialize_mission(&doc), outcome))
}

fn reconcile(doc: &MissionDocument, table: &TranslationTable) -> ReconciliationReport {
    let mut doc_ids = IndexSet::new();
    for node in &doc.nodes {
        if let XmlNode::Element(element) = node {
            collect_ids(element, &mut doc_ids);
        }
    }

    let missing_in_xml = table
        .keys()
        .filter(|key| !doc_ids.contains(*key))
        .map(String::from)
        .collect();
    let missing_in_clipboard = doc_ids
        .iter()
        .filter(|id| !table.contains_key(id))
        .cloned()
        .collect();

    ReconciliationReport {
        missing_in_xml,
        missing_in_clipboard,
    }
}

fn collect_ids(element: &XmlElement, ids: &mut IndexSet<String>) {
    for attr in StringIdAttr::ALL {
        if let Some(value) = element.attr(attr.as_str()) {
            if !value.is_empty() {
                ids.insert(value.to_string());
            }
        }
    }
    for child in element.child_elements() {
        collect_ids(child, ids);
    }
}

fn merge_element(element: &mut XmlElement, table: &TranslationTable, summary: &mut MergeSummary) {
    if let Some(text) = element.attr("stringId").and_then(|id| table.get(id)) {
        if text.is_empty() {
            summary.skipped += 1;
        } else {
            let text = unescape_text(text);
            if element.has_attr("description") {
                element.set_attr("description", text);
            } else if text.contains('\n') {
                element.set_text(format!("\n{text}\n"));
            } else {
                element.set_text(text);
            }
            summary.replaced += 1;
        }
    }

    if element
        .attr("titleStringId")
        .is_some_and(|id| table.contains_key(id))
    {
        summary.skipped_titles += 1;
    }

    if let Some(text) = element.attr("expandedStringId").and_then(|id| table.get(id)) {
        if text.is_empty() {
            summary.skipped += 1;
        } else if element.has_attr("expandedDescription") {
            element.set_attr("expandedDescription", unescape_text(text));
            summary.replaced += 1;
        } else {
            // The inner content already belongs to the stringId role.
            summary.skipped += 1;
        }
    }

    for child in &mut element.children {
        if let XmlNode::Element(child) = child {
            merge_element(child, table, summary);
        }
    }
}
