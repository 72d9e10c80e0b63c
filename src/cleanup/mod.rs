//! Cosmetic document filters
//!
//! Text-level passes that tidy mission files without going through the
//! parsed tree: asset-path separator normalization and the legacy window
//! upgrade. Both operate on the raw document text, keeping every byte of
//! the hand-edited layout around them.

mod windows;

pub use windows::convert_windows_to_dynamic_height;

/// Replace every backslash with a forward slash, returning the new text
/// and how many separators were rewritten.
///
/// Asset references pasted from a file manager arrive with `\` separators
/// that the runtime does not resolve.
#[must_use]
pub fn clean_backslashes(text: &str) -> (String, usize) {
    let count = text.matches('\\').count();
    (text.replace('\\', "/"), count)
}
