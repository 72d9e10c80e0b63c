//! CLI command for sheet export

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::cli::commands::read_document;
use crate::extract::{ExtractedEntry, extract_entries, render_sheet};
use crate::mission::parse_mission;
use crate::sheet::SheetLanguage;

pub fn execute(
    file: &Path,
    language: SheetLanguage,
    json: bool,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let source = read_document(file)?;
    let doc = parse_mission(&source)?;
    let entries: Vec<ExtractedEntry> = extract_entries(&doc).collect();
    let count = entries.len();

    let rendered = if json {
        serde_json::to_string_pretty(&entries)?
    } else {
        render_sheet(entries, language)
    };

    match output {
        Some(path) => {
            fs::write(path, &rendered).with_context(|| format!("writing {}", path.display()))?;
            println!("Exported {count} entries to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
