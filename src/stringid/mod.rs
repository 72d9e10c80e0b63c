//! StringId grammar
//!
//! The fixed-width token format shared by every identifier the toolkit
//! writes:
//! - Mission-level tokens: `{base}TITL`, `{base}DESS`/`{base}DESL`
//! - Condition tokens: `{base}S{nnn}` plus `-EXPA` for expanded descriptions
//! - Window tokens: `-INFO`/`-GPAD` and the title variants `-ITIT`/`-GTIT`
//! - Element tokens: `-I{nnn}`/`-G{nnn}`, numbered per window
//!
//! All formatting is pure; structural indices start at 1 and zero-fill to
//! their field width. An index that no longer fits its field is an error,
//! never a wider token.

mod derive;

pub use derive::derive_base;

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Largest index a 3-digit token field can hold.
pub const MAX_FIELD_INDEX: u32 = 999;

// ============================================================================
// Identifier base
// ============================================================================

/// A validated stringId base such as `CAMP-C001-M001`.
///
/// Every block between `-` separators has exactly 4 characters drawn from
/// `[A-Za-z0-9_]`. Construction goes through [`IdentifierBase::new`], so a
/// value of this type is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentifierBase(String);

impl IdentifierBase {
    /// Validate `base` against the 4-character-block grammar.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIdentifierBase`] when the base is empty, a
    /// block is not exactly 4 characters long, or a block contains a
    /// character outside `[A-Za-z0-9_]`.
    pub fn new(base: impl Into<String>) -> Result<Self> {
        let base = base.into();
        if base.is_empty() {
            return Err(invalid_base(&base, "base is empty".to_string()));
        }

        for (index, block) in base.split('-').enumerate() {
            let number = index + 1;
            if let Some(bad) = block.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
                return Err(invalid_base(
                    &base,
                    format!("invalid character '{bad}' in block {number} (\"{block}\")"),
                ));
            }
            if block.len() < 4 {
                return Err(invalid_base(
                    &base,
                    format!("fewer than 4 characters in block {number} (\"{block}\")"),
                ));
            }
            if block.len() > 4 {
                return Err(invalid_base(
                    &base,
                    format!("more than 4 characters in block {number} (\"{block}\")"),
                ));
            }
        }

        Ok(Self(base))
    }

    /// The validated base as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentifierBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for IdentifierBase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for IdentifierBase {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn invalid_base(base: &str, reason: String) -> Error {
    Error::InvalidIdentifierBase {
        base: base.to_string(),
        reason,
    }
}

// ============================================================================
// Recognized identifier attributes
// ============================================================================

/// The fixed set of identifier attribute names the toolkit manages.
///
/// Matching is exact and case-sensitive; attributes whose names merely
/// contain "stringId" (`dropdownCompareStringId` and friends) are never
/// touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringIdAttr {
    /// The primary `stringId` attribute.
    StringId,
    /// The `titleStringId` attribute on windows.
    TitleStringId,
    /// The `expandedStringId` attribute on conditions.
    ExpandedStringId,
}

impl StringIdAttr {
    /// All managed attributes, in the order they are processed.
    pub const ALL: [Self; 3] = [Self::StringId, Self::TitleStringId, Self::ExpandedStringId];

    /// The attribute name as it appears in the document.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StringId => "stringId",
            Self::TitleStringId => "titleStringId",
            Self::ExpandedStringId => "expandedStringId",
        }
    }
}

// ============================================================================
// Window kinds and description variants
// ============================================================================

/// Window variant, encoded into window and element tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    /// Keyboard/mouse window.
    Info,
    /// Gamepad window.
    Gamepad,
}

impl WindowKind {
    /// The single-letter element prefix (`I` or `G`).
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::Info => 'I',
            Self::Gamepad => 'G',
        }
    }

    /// The window token suffix (`-INFO` or `-GPAD`).
    #[must_use]
    pub fn window_suffix(self) -> &'static str {
        match self {
            Self::Info => "-INFO",
            Self::Gamepad => "-GPAD",
        }
    }

    /// The window title token suffix (`-ITIT` or `-GTIT`).
    #[must_use]
    pub fn title_suffix(self) -> &'static str {
        match self {
            Self::Info => "-ITIT",
            Self::Gamepad => "-GTIT",
        }
    }
}

/// Mission description variant, read from the `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionVariant {
    /// `type="short"` descriptions.
    Short,
    /// `type="long"` descriptions.
    Long,
}

impl DescriptionVariant {
    /// Map a `type` attribute value to a variant.
    ///
    /// Only the exact values `short` and `long` are recognized; everything
    /// else yields `None` and the description is left untouched.
    #[must_use]
    pub fn from_type_attr(value: &str) -> Option<Self> {
        match value {
            "short" => Some(Self::Short),
            "long" => Some(Self::Long),
            _ => None,
        }
    }

    /// The description token suffix (`DESS` or `DESL`).
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Short => "DESS",
            Self::Long => "DESL",
        }
    }
}

// ============================================================================
// Token formatting
// ============================================================================

/// Format the token for the mission `name` element: `{base}TITL`.
#[must_use]
pub fn title_token(base: &IdentifierBase) -> String {
    format!("{base}TITL")
}

/// Format the token for a mission `description` element: `{base}DESS` or
/// `{base}DESL`.
#[must_use]
pub fn description_token(base: &IdentifierBase, variant: DescriptionVariant) -> String {
    format!("{base}{}", variant.suffix())
}

/// Format the token for the `index`-th condition: `{base}S{index:03}`.
///
/// # Errors
/// Returns [`Error::IndexOverflow`] when `index` exceeds
/// [`MAX_FIELD_INDEX`].
pub fn condition_token(base: &IdentifierBase, index: u32) -> Result<String> {
    check_field_index("condition", index)?;
    Ok(format!("{base}S{index:03}"))
}

/// Format the token for a window under a condition: appends `-INFO` or
/// `-GPAD` to the condition token.
#[must_use]
pub fn window_token(condition_token: &str, kind: WindowKind) -> String {
    format!("{condition_token}{}", kind.window_suffix())
}

/// Format the title token for a window: appends `-ITIT` or `-GTIT` to the
/// condition token.
#[must_use]
pub fn window_title_token(condition_token: &str, kind: WindowKind) -> String {
    format!("{condition_token}{}", kind.title_suffix())
}

/// Format the token for the `index`-th text element of a window: appends
/// `-I{index:03}` or `-G{index:03}` to the condition token.
///
/// # Errors
/// Returns [`Error::IndexOverflow`] when `index` exceeds
/// [`MAX_FIELD_INDEX`].
pub fn element_token(condition_token: &str, kind: WindowKind, index: u32) -> Result<String> {
    check_field_index("element", index)?;
    Ok(format!("{condition_token}-{}{index:03}", kind.letter()))
}

/// Format the expanded-description token for a condition: appends `-EXPA`
/// to the condition token.
#[must_use]
pub fn expanded_token(condition_token: &str) -> String {
    format!("{condition_token}-EXPA")
}

fn check_field_index(kind: &'static str, index: u32) -> Result<()> {
    if index > MAX_FIELD_INDEX {
        return Err(Error::IndexOverflow {
            kind,
            index,
            limit: MAX_FIELD_INDEX,
        });
    }
    Ok(())
}
