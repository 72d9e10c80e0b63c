//! # missionloc
//!
//! A library for managing localization stringIds in mission XML files.
//!
//! ## Toolkit
//!
//! - **Assign** - Stamp deterministic stringIds onto briefing names, descriptions,
//!   stop conditions, info/gamepad windows, and their text elements
//! - **Clear** - Blank every stringId attribute while leaving the attributes in place
//! - **Export** - Collect identified text into a tab-separated translation sheet or JSON
//! - **Import** - Merge translated sheet rows back into the document, with a
//!   reconciliation report for ids missing on either side
//! - **Cleanup** - Convert fixed-size windows to dynamic height and strip stray
//!   backslashes left behind by sheet escaping
//!
//! ## Quick Start
//!
//! ### Assigning StringIds
//!
//! ```no_run
//! use missionloc::assign::assign_text;
//! use missionloc::stringid::IdentifierBase;
//!
//! let xml = std::fs::read_to_string("mission_05.xml")?;
//! let base: IdentifierBase = "MISS-MI05".parse()?;
//! let (updated, summary) = assign_text(&xml, &base)?;
//! println!("Stamped {} stringIds", summary.total());
//! std::fs::write("mission_05.xml", updated)?;
//! # Ok::<(), missionloc::Error>(())
//! ```
//!
//! ### Exporting a Translation Sheet
//!
//! ```no_run
//! use missionloc::extract::{extract_entries, render_sheet};
//! use missionloc::mission::parse_mission;
//! use missionloc::sheet::SheetLanguage;
//!
//! let xml = std::fs::read_to_string("mission_05.xml")?;
//! let doc = parse_mission(&xml)?;
//! let sheet = render_sheet(extract_entries(&doc), SheetLanguage::English);
//! print!("{sheet}");
//! # Ok::<(), missionloc::Error>(())
//! ```
//!
//! ### Importing Translations
//!
//! ```no_run
//! use missionloc::merge::merge_text;
//! use missionloc::sheet::TranslationTable;
//!
//! let xml = std::fs::read_to_string("mission_05.xml")?;
//! let payload = std::fs::read_to_string("translated.tsv")?;
//! let table = TranslationTable::parse_sheet(&payload)?;
//! let (updated, outcome) = merge_text(&xml, &table)?;
//! println!("Replaced {} translations", outcome.summary.replaced);
//! # Ok::<(), missionloc::Error>(())
//! ```
//!
//! ### Using the Prelude
//!
//! The prelude provides convenient access to commonly used types:
//!
//! ```
//! use missionloc::prelude::*;
//!
//! // Now you have access to:
//! // - MissionDocument, parse_mission, serialize_mission
//! // - assign_text, clear_text, merge_text, extract_entries
//! // - IdentifierBase, TranslationTable, SheetLanguage
//! // - Error, Result, and more
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `missionloc` command-line binary

pub mod error;
pub mod mission;
pub mod stringid;
pub mod sheet;
pub mod assign;
pub mod clear;
pub mod extract;
pub mod merge;
pub mod cleanup;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::mission::{
        MissionDocument, XmlElement, XmlNode, parse_mission, read_mission, serialize_mission,
    };
    pub use crate::stringid::{IdentifierBase, StringIdAttr, WindowKind, derive_base};

    // Document operations
    pub use crate::assign::{AssignSummary, assign_string_ids, assign_text};
    pub use crate::clear::{clear_string_ids, clear_text};
    pub use crate::extract::{ExtractedEntry, extract_entries, render_sheet};
    pub use crate::merge::{
        MergeOutcome, MergeSummary, ReconciliationReport, apply_translations, merge_text,
    };

    // Sheet handling
    pub use crate::sheet::{SheetLanguage, TranslationTable, escape_text, unescape_text};

    // Window cleanup
    pub use crate::cleanup::{clean_backslashes, convert_windows_to_dynamic_height};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
