//! Deriving a stringId base proposal from mission file paths
//!
//! Campaign, mission, and tutorial files follow loose naming conventions
//! (`campaign_001/mission_002.xml`, `tutorial_1_2_3.xml`). This module turns
//! such a path into a base proposal; callers may still override it.

use std::path::Path;

use regex::Regex;

use super::IdentifierBase;

lazy_static::lazy_static! {
    static ref NUMERIC_RUN: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// Mission file classification by naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MissionKind {
    Campaign,
    Mission,
    Tutorial,
}

/// Propose a stringId base for a mission file path.
///
/// Classification is a case-insensitive substring search: a parent directory
/// containing `campaign` forces Campaign; otherwise the filename decides, in
/// priority order `campaign`, `mission`, `tutorial`. Numeric runs in the
/// path components fill the base's index fields:
///
/// - Tutorial: first three runs -> `TUTO-{n1:02}{n2:02}-T{n3:03}`
/// - Mission: first run -> `MISS-MI{n:02}`
/// - Campaign: parent run -> `C{n:03}`, filename run -> `M{n:03}`, either
///   segment omitted when absent
///
/// Returns `None` when no convention matches, when required runs are
/// missing, or when a run is too wide for its field (the candidate then
/// fails base validation).
#[must_use]
pub fn derive_base<P: AsRef<Path>>(path: P) -> Option<IdentifierBase> {
    let path = path.as_ref();
    let filename = path.file_name()?.to_string_lossy().to_lowercase();
    let parent = path
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let candidate = match classify(&filename, &parent)? {
        MissionKind::Tutorial => tutorial_base(&filename)?,
        MissionKind::Mission => mission_base(&filename)?,
        MissionKind::Campaign => campaign_base(&filename, &parent)?,
    };

    IdentifierBase::new(candidate).ok()
}

fn classify(filename: &str, parent: &str) -> Option<MissionKind> {
    // Campaign-folder convention: any file inside a campaign directory
    if parent.contains("campaign") {
        return Some(MissionKind::Campaign);
    }

    if filename.contains("campaign") {
        Some(MissionKind::Campaign)
    } else if filename.contains("mission") {
        Some(MissionKind::Mission)
    } else if filename.contains("tutorial") {
        Some(MissionKind::Tutorial)
    } else {
        None
    }
}

fn numeric_runs(text: &str) -> Vec<u32> {
    NUMERIC_RUN
        .find_iter(text)
        .filter_map(|run| run.as_str().parse().ok())
        .collect()
}

fn tutorial_base(filename: &str) -> Option<String> {
    let runs = numeric_runs(filename);
    if runs.len() < 3 {
        return None;
    }
    Some(format!("TUTO-{:02}{:02}-T{:03}", runs[0], runs[1], runs[2]))
}

fn mission_base(filename: &str) -> Option<String> {
    let first = numeric_runs(filename).into_iter().next()?;
    Some(format!("MISS-MI{first:02}"))
}

fn campaign_base(filename: &str, parent: &str) -> Option<String> {
    let mut base = String::from("CAMP");
    if let Some(run) = numeric_runs(parent).into_iter().next() {
        base.push_str(&format!("-C{run:03}"));
    }
    if let Some(run) = numeric_runs(filename).into_iter().next() {
        base.push_str(&format!("-M{run:03}"));
    }

    // No usable numeric run on either side
    if base == "CAMP" {
        return None;
    }
    Some(base)
}
