//! CLI command for stringId clearing

use std::path::Path;

use crate::clear::clear_text;
use crate::cli::commands::{read_document, write_document};

pub fn execute(file: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let source = read_document(file)?;
    let (converted, cleared) = clear_text(&source)?;
    write_document(file, output, &converted)?;

    println!("Cleared {cleared} stringId attributes");

    Ok(())
}
