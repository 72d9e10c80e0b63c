//! CLI command for merging sheet translations

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use console::style;

use crate::cli::commands::{read_document, write_document};
use crate::merge::merge_text;
use crate::sheet::TranslationTable;

pub fn execute(
    file: &Path,
    sheet: Option<&Path>,
    output: Option<&Path>,
    report: Option<&Path>,
) -> anyhow::Result<()> {
    let source = read_document(file)?;
    let payload = match sheet {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading sheet data from stdin")?;
            buffer
        }
    };

    let table = TranslationTable::parse_sheet(&payload)?;
    let (converted, outcome) = merge_text(&source, &table)?;
    write_document(file, output, &converted)?;

    let summary = outcome.summary;
    println!(
        "Replaced {} translations ({} skipped, {} window titles left alone)",
        summary.replaced, summary.skipped, summary.skipped_titles
    );

    if let Some(path) = report {
        fs::write(path, outcome.report.to_markdown())
            .with_context(|| format!("writing {}", path.display()))?;
    }

    if !outcome.report.is_empty() {
        let missing =
            outcome.report.missing_in_clipboard.len() + outcome.report.missing_in_xml.len();
        eprintln!(
            "{} {missing} stringIds have no counterpart on the other side",
            style("warning:").yellow().bold()
        );
        match report {
            Some(path) => eprintln!("  details written to {}", path.display()),
            None => eprintln!("{}", outcome.report.to_markdown()),
        }
    }

    Ok(())
}
