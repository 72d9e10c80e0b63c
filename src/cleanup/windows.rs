//! Dynamic window height conversion
//!
//! Upgrades hand-written window tags in three text passes:
//!
//! 1. normalize window open tags to carry `position` before `size`,
//!    inserting defaults where either is missing;
//! 2. rewrite legacy windows (text directly in the window body, no pages)
//!    into the `window > page > element` shape;
//! 3. add `dynamicHeight="true" maxHeight="N"` to windows that lack it,
//!    with `N` derived from the position's screen metrics.
//!
//! The passes run on the raw text rather than the parsed tree and keep
//! the surrounding layout byte-for-byte.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref SIZE_BEFORE_POSITION: Regex =
        Regex::new(r#"<window size="(.*?)"[ \t\r\n]+?position="(.*?)""#).unwrap();
    static ref LEGACY_WINDOW: Regex =
        Regex::new(r#"(?ms)^(\t*)<window([^\n\r]*?[ \t])stringId="(.*?)"(.*?)>(.*?)</window>"#)
            .unwrap();
    static ref SIZED_WINDOW: Regex =
        Regex::new(r#"(?ms)^(\t*)<window(.*?)position="(.+?)"(.*?)size="(.+?)"(.*?>.*?</window>)"#)
            .unwrap();
    static ref DIGITS: Regex = Regex::new(r"[0-9]").unwrap();
}

/// Vertical space consumed by window chrome before any content.
const CONTENT_OFFSET: u32 = 60;
/// Extra space reserved when a page shows the continue button.
const BUTTON_HEIGHT: u32 = 60;
/// Extra space reserved by the page indicator on multi-page windows.
const EXTRA_PAGES_HEIGHT: u32 = 40;

/// Run all three conversion passes over the document text.
#[must_use]
pub fn convert_windows_to_dynamic_height(text: &str) -> String {
    let text = set_position_size_attributes(text);
    let text = convert_legacy_windows(&text);
    add_dynamic_height(&text)
}

/// Pass 1: ensure every window open tag carries `position` and `size`,
/// in that order.
fn set_position_size_attributes(text: &str) -> String {
    let text = insert_missing_attr(text, "size", r#"size="small""#);
    let text = insert_missing_attr(&text, "position", r#"position="default""#);
    SIZE_BEFORE_POSITION
        .replace_all(&text, r#"<window position="$2" size="$1""#)
        .into_owned()
}

/// Insert `default_attr` right after `<window ` on every line whose
/// window tag does not already mention `attr_name`.
fn insert_missing_attr(text: &str, attr_name: &str, default_attr: &str) -> String {
    let lines: Vec<String> = text
        .split('\n')
        .map(|line| match line.find("<window ") {
            Some(start) if !line[start..].contains(attr_name) => {
                let insert_at = start + "<window ".len();
                format!(
                    "{}{} {}",
                    &line[..insert_at],
                    default_attr,
                    &line[insert_at..]
                )
            }
            _ => line.to_string(),
        })
        .collect();
    lines.join("\n")
}

/// Pass 2: rewrite legacy windows into `window > page > element`, moving
/// the window's stringId onto the new text element.
fn convert_legacy_windows(text: &str) -> String {
    LEGACY_WINDOW
        .replace_all(text, |caps: &Captures<'_>| {
            let content = &caps[5];
            if content.contains("<page") {
                return caps[0].to_string();
            }

            let indent = &caps[1];
            let mut out = format!("{indent}<window");
            if !caps[0].contains(r#"position=""#) {
                out.push_str(r#" position="underCondition""#);
            }
            if !caps[0].contains(r#"size=""#) {
                out.push_str(r#" size="underCondition""#);
            }
            out.push_str(&caps[2]);
            out.push_str(&caps[4]);
            out.push_str(">\n");

            out.push_str(&format!("{indent}\t<page>\n"));
            out.push_str(&format!(
                "{indent}\t\t<element type=\"text\" stringId=\"{}\">{}</element>\n",
                &caps[3],
                content.trim()
            ));
            out.push_str(&format!("{indent}\t</page>\n"));
            out.push_str(&format!("{indent}</window>"));
            out
        })
        .into_owned()
}

/// Pass 3: add `dynamicHeight`/`maxHeight` to windows missing them and
/// strip stray digits from `size` values.
fn add_dynamic_height(text: &str) -> String {
    SIZED_WINDOW
        .replace_all(text, |caps: &Captures<'_>| {
            let indent = &caps[1];
            let before_position = &caps[2];
            let position = &caps[3];
            let before_size = &caps[4];
            let size = DIGITS.replace_all(&caps[5], "");
            let after_size = &caps[6];

            let mut out = format!(
                "{indent}<window{before_position}position=\"{position}\"{before_size}size=\"{size}\""
            );

            if !after_size.contains("dynamicHeight") {
                let has_button = after_size.contains(r#"showContinue="true""#);
                let multi_page = after_size.matches("<page").count() > 1;
                let max_height = optimal_height(position, has_button, multi_page);
                out.push_str(&format!(
                    " dynamicHeight=\"true\" maxHeight=\"{max_height}\""
                ));
            }

            out.push_str(after_size);
            out
        })
        .into_owned()
}

/// Screen metrics for one window position: usable height and the margins
/// reserved by surrounding HUD elements.
struct PositionMetrics {
    total: u32,
    top_margin: u32,
    bottom_margin: u32,
}

fn position_metrics(position: &str) -> PositionMetrics {
    let (total, top_margin, bottom_margin) = match position {
        "default" => (1080, 90, 120),
        "center" => (1080, 120, 120),
        "centerTop" => (1080, 20, 120),
        "rightCenter" => (1080, 300, 300),
        "rightTop" => (1080, 0, 300),
        "rightUnderCondition" => (1080, 175, 300),
        // underCondition, and the fallback for unknown positions.
        _ => (610, 0, 0),
    };
    PositionMetrics {
        total,
        top_margin,
        bottom_margin,
    }
}

fn optimal_height(position: &str, button: bool, multi_page: bool) -> u32 {
    let metrics = position_metrics(position);
    let mut height = metrics.total - metrics.top_margin - metrics.bottom_margin - CONTENT_OFFSET;
    if button {
        height -= BUTTON_HEIGHT;
    }
    if multi_page {
        height -= EXTRA_PAGES_HEIGHT;
    }
    height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_window_full_conversion() {
        let source = "\t\t\t<window stringId=\"A-S001-INFO\">Some text</window>";
        let expected = concat!(
            "\t\t\t<window position=\"default\" size=\"small\" dynamicHeight=\"true\" maxHeight=\"810\" >\n",
            "\t\t\t\t<page>\n",
            "\t\t\t\t\t<element type=\"text\" stringId=\"A-S001-INFO\">Some text</element>\n",
            "\t\t\t\t</page>\n",
            "\t\t\t</window>"
        );
        assert_eq!(convert_windows_to_dynamic_height(source), expected);
    }

    #[test]
    fn test_attribute_order_swap_and_multi_page_height() {
        let source = "\t<window size=\"big\" position=\"center\"><page/><page/></window>";
        let expected = "\t<window position=\"center\" size=\"big\" dynamicHeight=\"true\" maxHeight=\"740\"><page/><page/></window>";
        assert_eq!(convert_windows_to_dynamic_height(source), expected);
    }

    #[test]
    fn test_existing_dynamic_height_kept_and_size_digits_stripped() {
        let source =
            "\t<window position=\"rightTop\" size=\"small420\" dynamicHeight=\"false\"><page/></window>";
        let expected =
            "\t<window position=\"rightTop\" size=\"small\" dynamicHeight=\"false\"><page/></window>";
        assert_eq!(convert_windows_to_dynamic_height(source), expected);
    }

    #[test]
    fn test_continue_button_reduces_height() {
        let source = "\t<window position=\"underCondition\" size=\"underCondition\"><page showContinue=\"true\">x</page></window>";
        let converted = convert_windows_to_dynamic_height(source);
        assert!(converted.contains("maxHeight=\"490\""));
    }

    #[test]
    fn test_unknown_position_falls_back() {
        let source = "\t<window position=\"hud\" size=\"s\"><page/></window>";
        let converted = convert_windows_to_dynamic_height(source);
        assert!(converted.contains("maxHeight=\"550\""));
    }

    #[test]
    fn test_paged_window_only_gains_attributes() {
        let source = "\t<window stringId=\"X\"><page>c</page></window>";
        let expected = "\t<window position=\"default\" size=\"small\" dynamicHeight=\"true\" maxHeight=\"810\" stringId=\"X\"><page>c</page></window>";
        assert_eq!(convert_windows_to_dynamic_height(source), expected);
    }

    #[test]
    fn test_bare_window_untouched() {
        let source = "\t<window>text</window>";
        assert_eq!(convert_windows_to_dynamic_height(source), source);
    }

    #[test]
    fn test_optimal_height_table() {
        assert_eq!(optimal_height("default", false, false), 810);
        assert_eq!(optimal_height("center", false, false), 780);
        assert_eq!(optimal_height("centerTop", false, false), 880);
        assert_eq!(optimal_height("rightCenter", false, false), 420);
        assert_eq!(optimal_height("rightTop", false, false), 720);
        assert_eq!(optimal_height("rightUnderCondition", false, false), 545);
        assert_eq!(optimal_height("underCondition", false, false), 550);
        assert_eq!(optimal_height("underCondition", true, true), 450);
    }
}
