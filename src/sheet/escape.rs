//! Escape sequences for sheet cells
//!
//! Sheet rows are one line per entry, so control characters inside a
//! translation travel as literal `\n`, `\r`, and `\t`, with quotes
//! backslash-protected. These helpers convert between document text and
//! the sheet form.

/// Escape text for a single sheet cell.
///
/// Quotes that are not already backslash-protected gain a backslash, then
/// line breaks and tabs become literal escape sequences. `\r\n` and `\n\r`
/// pairs collapse to a single `\n` before the remaining bare characters
/// are rewritten.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    for ch in text.chars() {
        if (ch == '"' || ch == '\'') && prev != Some('\\') {
            quoted.push('\\');
        }
        quoted.push(ch);
        prev = Some(ch);
    }

    quoted
        .replace("\r\n", "\\n")
        .replace("\n\r", "\\n")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Undo [`escape_text`], restoring control characters and bare quotes.
///
/// A backslash followed by anything other than a known escape character is
/// kept as-is.
#[must_use]
pub fn unescape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.peek() {
            Some('n') => {
                chars.next();
                out.push('\n');
            }
            Some('r') => {
                chars.next();
                out.push('\r');
            }
            Some('t') => {
                chars.next();
                out.push('\t');
            }
            Some('"') => {
                chars.next();
                out.push('"');
            }
            Some('\'') => {
                chars.next();
                out.push('\'');
            }
            _ => out.push('\\'),
        }
    }

    out
}
