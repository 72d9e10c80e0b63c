//! CLI command for stringId assignment

use std::path::Path;

use crate::assign::assign_text;
use crate::cli::commands::{read_document, write_document};
use crate::stringid::{IdentifierBase, derive_base};

pub fn execute(file: &Path, base: Option<&str>, output: Option<&Path>) -> anyhow::Result<()> {
    let base = match base {
        Some(raw) => raw.parse::<IdentifierBase>()?,
        None => derive_base(file).ok_or_else(|| {
            anyhow::anyhow!(
                "cannot derive a base identifier from '{}'; pass one with --base",
                file.display()
            )
        })?,
    };

    let source = read_document(file)?;
    let (converted, summary) = assign_text(&source, &base)?;
    write_document(file, output, &converted)?;

    println!("Assigned {} stringIds with base {}", summary.total(), base);
    println!("  Names: {}", summary.names);
    println!("  Descriptions: {}", summary.descriptions);
    println!("  Conditions: {}", summary.conditions);
    println!("  Windows: {}", summary.windows);
    println!("  Elements: {}", summary.elements);

    Ok(())
}
