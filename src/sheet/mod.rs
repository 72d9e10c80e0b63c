//! Translation sheet interchange
//!
//! Exported entries travel through a spreadsheet as tab-separated rows,
//! one stringId per line. This module renders rows for export, parses
//! pasted sheet data back into a lookup table, and handles the escape
//! sequences cells use for control characters.

mod escape;

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};

pub use escape::{escape_text, unescape_text};

lazy_static! {
    /// Sheet data that starts with a path-like cell carries a leading
    /// file column in front of the stringId column.
    static ref PATH_CELL: Regex = Regex::new(r"^[A-Za-z0-9_]+?/").unwrap();
}

/// Target column for exported rows.
///
/// The tab count between stringId and text decides which spreadsheet
/// column the text lands in when the rows are pasted next to existing
/// translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetLanguage {
    /// One tab: text lands in the column right of the stringId.
    German,
    /// Two tabs: text skips the German column.
    English,
    /// Three tabs: text skips both stock language columns.
    Custom,
}

impl SheetLanguage {
    /// Separator between the stringId cell and the text cell.
    #[must_use]
    pub const fn column_separator(self) -> &'static str {
        match self {
            Self::German => "\t",
            Self::English => "\t\t",
            Self::Custom => "\t\t\t",
        }
    }
}

impl fmt::Display for SheetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::German => "german",
            Self::English => "english",
            Self::Custom => "custom",
        };
        write!(f, "{name}")
    }
}

impl FromStr for SheetLanguage {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "german" => Ok(Self::German),
            "english" => Ok(Self::English),
            "custom" => Ok(Self::Custom),
            other => Err(format!(
                "unknown language '{other}' (expected german, english, or custom)"
            )),
        }
    }
}

/// Translations parsed from pasted sheet data, keyed by stringId.
///
/// Entries keep their sheet order. A stringId that appears twice keeps its
/// first position and the last row's text.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: IndexMap<String, String>,
}

impl TranslationTable {
    /// Parse tab-separated sheet data into a table.
    ///
    /// Each non-empty line is one entry. The English cell wins when it has
    /// text, otherwise the German cell is taken, possibly empty. Rows
    /// without at least a stringId cell and one value cell are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoClipboardData`] when the payload has no content.
    pub fn parse_sheet(payload: &str) -> Result<Self> {
        if payload.trim().is_empty() {
            return Err(Error::NoClipboardData);
        }

        // A leading file column shifts every other column right by one.
        let (id_col, german_col, english_col) = if PATH_CELL.is_match(payload) {
            (1, 2, 3)
        } else {
            (0, 1, 2)
        };

        let mut entries = IndexMap::new();
        for line in payload.split('\n') {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }

            let cells: Vec<&str> = line.split('\t').collect();
            if cells.len() < 2 {
                continue;
            }

            let id = cells.get(id_col).copied().unwrap_or("");
            if id.is_empty() {
                continue;
            }

            let english = cells.get(english_col).copied().unwrap_or("");
            let text = if english.is_empty() {
                cells.get(german_col).copied().unwrap_or("")
            } else {
                english
            };

            entries.insert(id.to_string(), text.to_string());
        }

        Ok(Self { entries })
    }

    /// Build a table directly from id/text pairs.
    pub fn from_entries<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { entries }
    }

    /// Look up the text for a stringId.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// StringIds in sheet order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
