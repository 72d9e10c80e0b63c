//! Error types for `missionloc`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `missionloc` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Document Errors ====================
    /// The input file is not an XML document.
    #[error("not an XML document: {path}")]
    NotAnXmlDocument {
        /// The offending file path.
        path: PathBuf,
    },

    /// XML parsing error.
    #[error("XML parse error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// XML attribute error.
    #[error("XML attribute error: {0}")]
    XmlAttrError(String),

    /// The document structure is not well-formed.
    #[error("malformed XML document: {0}")]
    MalformedDocument(String),

    // ==================== Identifier Errors ====================
    /// The supplied stringId base fails the 4-character-block grammar.
    #[error("invalid stringId base '{base}': {reason}")]
    InvalidIdentifierBase {
        /// The base string that was rejected.
        base: String,
        /// Why the base was rejected.
        reason: String,
    },

    /// A structural index no longer fits its fixed-width token field.
    #[error("{kind} index {index} exceeds the token field limit of {limit}")]
    IndexOverflow {
        /// Which index overflowed ("condition" or "element").
        kind: &'static str,
        /// The index value that overflowed.
        index: u32,
        /// The largest value the token field can hold.
        limit: u32,
    },

    // ==================== Sheet Errors ====================
    /// The sheet payload was empty during import.
    #[error("no sheet data to import")]
    NoClipboardData,
}

// Add conversion from quick_xml::events::attributes::AttrError
impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlAttrError(err.to_string())
    }
}

/// A specialized Result type for `missionloc` operations.
pub type Result<T> = std::result::Result<T, Error>;
