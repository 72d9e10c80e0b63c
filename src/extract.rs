//! Translatable text extraction
//!
//! Walks the briefing schema path (`mission > stop > conditions >
//! condition > window > page > element`) and yields one entry per
//! stringId that has text to translate. Entries come out in document
//! order, already escaped for single-line sheet cells.

use serde::{Deserialize, Serialize};

use crate::mission::{MissionDocument, XmlElement};
use crate::sheet::{SheetLanguage, escape_text};

/// Window titles carry no text in the document, so exported rows get this
/// marker for the translator to replace.
pub const WINDOW_TITLE_PLACEHOLDER: &str = "TODO: CUSTOM WINDOW TITLE";

/// One exportable stringId with its source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedEntry {
    /// The identifier as written in the document.
    pub string_id: String,
    /// Cell-safe text, escaped via [`escape_text`].
    pub text: String,
}

/// Iterate the translatable entries of a document in document order.
///
/// The iterator is lazy; nothing is visited until it is advanced. A
/// candidate without an identifier, with an empty identifier, or whose
/// text trims to nothing is skipped.
pub fn extract_entries(doc: &MissionDocument) -> Entries<'_> {
    let mut stack = Vec::new();

    if let Some(mission) = doc.root_element() {
        // Tasks pop in reverse push order, so each group goes in backwards.
        let conditions: Vec<&XmlElement> = mission
            .child_elements_named("stop")
            .flat_map(|stop| stop.child_elements_named("conditions"))
            .flat_map(|block| block.child_elements_named("condition"))
            .collect();
        for condition in conditions.into_iter().rev() {
            stack.push(Task::Condition(condition));
        }

        let descriptions: Vec<&XmlElement> = mission.child_elements_named("description").collect();
        for description in descriptions.into_iter().rev() {
            stack.push(Task::Description(description));
        }

        let names: Vec<&XmlElement> = mission.child_elements_named("name").collect();
        for name in names.into_iter().rev() {
            stack.push(Task::Name(name));
        }
    }

    Entries { stack }
}

/// Render entries as sheet rows, one `stringId<SEP>text` line per entry.
///
/// The separator width decides which spreadsheet column the text lands in,
/// see [`SheetLanguage::column_separator`].
pub fn render_sheet<I>(entries: I, language: SheetLanguage) -> String
where
    I: IntoIterator<Item = ExtractedEntry>,
{
    let separator = language.column_separator();
    let rows: Vec<String> = entries
        .into_iter()
        .map(|entry| format!("{}{separator}{}", entry.string_id, entry.text))
        .collect();
    rows.join("\n")
}

/// Pending work for [`Entries`]. Structural tasks expand into entry tasks
/// plus more structure; entry tasks emit at most one entry.
enum Task<'a> {
    Name(&'a XmlElement),
    Description(&'a XmlElement),
    Condition(&'a XmlElement),
    ConditionEntry(&'a XmlElement),
    ExpandedEntry(&'a XmlElement),
    Window(&'a XmlElement),
    WindowEntry(&'a XmlElement),
    TitleEntry(&'a XmlElement),
    TextElement(&'a XmlElement),
}

/// Lazy iterator over the translatable entries of one document.
pub struct Entries<'a> {
    stack: Vec<Task<'a>>,
}

impl<'a> Entries<'a> {
    fn expand_condition(&mut self, condition: &'a XmlElement) {
        let windows: Vec<&XmlElement> = condition.child_elements_named("window").collect();
        for window in windows.into_iter().rev() {
            self.stack.push(Task::Window(window));
        }
        self.stack.push(Task::ExpandedEntry(condition));
        self.stack.push(Task::ConditionEntry(condition));
    }

    fn expand_window(&mut self, window: &'a XmlElement) {
        let elements: Vec<&XmlElement> = window
            .child_elements_named("page")
            .flat_map(|page| page.child_elements_named("element"))
            .filter(|element| element.attr("type") == Some("text"))
            .collect();
        for element in elements.into_iter().rev() {
            self.stack.push(Task::TextElement(element));
        }
        self.stack.push(Task::TitleEntry(window));
        self.stack.push(Task::WindowEntry(window));
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = ExtractedEntry;

    fn next(&mut self) -> Option<ExtractedEntry> {
        while let Some(task) = self.stack.pop() {
            let entry = match task {
                Task::Condition(element) => {
                    self.expand_condition(element);
                    continue;
                }
                Task::Window(element) => {
                    self.expand_window(element);
                    continue;
                }
                Task::Name(element) | Task::Description(element) | Task::WindowEntry(element) => {
                    entry_for(element.attr("stringId"), &element.text_content())
                }
                Task::TextElement(element) => {
                    entry_for(element.attr("stringId"), &element.text_content())
                }
                Task::ConditionEntry(element) => {
                    let inner;
                    // A declared description attribute wins even when empty;
                    // only an absent attribute falls back to inner text.
                    let text = match element.attr("description") {
                        Some(attr) => attr,
                        None => {
                            inner = element.text_content();
                            &inner
                        }
                    };
                    entry_for(element.attr("stringId"), text)
                }
                Task::ExpandedEntry(element) => match element.attr("expandedDescription") {
                    Some(text) => entry_for(element.attr("expandedStringId"), text),
                    None => None,
                },
                Task::TitleEntry(element) => {
                    entry_for(element.attr("titleStringId"), WINDOW_TITLE_PLACEHOLDER)
                }
            };

            if entry.is_some() {
                return entry;
            }
        }
        None
    }
}

fn entry_for(id: Option<&str>, text: &str) -> Option<ExtractedEntry> {
    let id = id?;
    let text = text.trim();
    if id.is_empty() || text.is_empty() {
        return None;
    }
    Some(ExtractedEntry {
        string_id: id.to_string(),
        text: escape_text(text),
    })
}
