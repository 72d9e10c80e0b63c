//! CLI commands for the cosmetic document filters

use std::path::Path;

use crate::cleanup::{clean_backslashes, convert_windows_to_dynamic_height};
use crate::cli::commands::{read_document, write_document};

pub fn backslashes(file: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let source = read_document(file)?;
    let (converted, count) = clean_backslashes(&source);
    write_document(file, output, &converted)?;

    println!("Replaced {count} backslashes");

    Ok(())
}

pub fn dynamic_height(file: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let source = read_document(file)?;
    let converted = convert_windows_to_dynamic_height(&source);
    write_document(file, output, &converted)?;

    if converted == source {
        println!("No windows needed conversion");
    } else {
        println!("Converted windows to dynamic height");
    }

    Ok(())
}
