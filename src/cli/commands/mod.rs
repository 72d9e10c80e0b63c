use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Subcommand;

use crate::error::Error;
use crate::sheet::SheetLanguage;

pub mod assign;
pub mod cleanup;
pub mod clear;
pub mod export;
pub mod import;

#[derive(Subcommand)]
pub enum Commands {
    /// Assign stringIds throughout a mission file
    Assign {
        /// Mission XML file
        file: PathBuf,

        /// Base identifier (derived from the file path when omitted)
        #[arg(short, long)]
        base: Option<String>,

        /// Write the result here instead of in place
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Reset every stringId attribute to an empty value
    Clear {
        /// Mission XML file
        file: PathBuf,

        /// Write the result here instead of in place
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export translatable entries as sheet rows or JSON
    Export {
        /// Mission XML file
        file: PathBuf,

        /// Target sheet column: german, english, or custom
        #[arg(short, long, default_value = "english")]
        language: SheetLanguage,

        /// Emit a JSON array instead of tab-separated rows
        #[arg(long)]
        json: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Merge sheet translations back into a mission file
    Import {
        /// Mission XML file
        file: PathBuf,

        /// Tab-separated sheet file (stdin when omitted)
        #[arg(short, long)]
        sheet: Option<PathBuf>,

        /// Write the result here instead of in place
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the reconciliation report to this markdown file
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Replace backslashes with forward slashes in asset paths
    CleanBackslashes {
        /// Mission XML file
        file: PathBuf,

        /// Write the result here instead of in place
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert window tags to the dynamic-height format
    DynamicHeight {
        /// Mission XML file
        file: PathBuf,

        /// Write the result here instead of in place
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Assign { file, base, output } => {
                assign::execute(file, base.as_deref(), output.as_deref())
            }
            Commands::Clear { file, output } => clear::execute(file, output.as_deref()),
            Commands::Export {
                file,
                language,
                json,
                output,
            } => export::execute(file, *language, *json, output.as_deref()),
            Commands::Import {
                file,
                sheet,
                output,
                report,
            } => import::execute(file, sheet.as_deref(), output.as_deref(), report.as_deref()),
            Commands::CleanBackslashes { file, output } => {
                cleanup::backslashes(file, output.as_deref())
            }
            Commands::DynamicHeight { file, output } => {
                cleanup::dynamic_height(file, output.as_deref())
            }
        }
    }
}

/// Read a mission document, enforcing the `.xml` extension before touching
/// the file.
pub(crate) fn read_document(path: &Path) -> anyhow::Result<String> {
    let is_xml = path
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));
    if !is_xml {
        return Err(Error::NotAnXmlDocument {
            path: path.to_path_buf(),
        }
        .into());
    }

    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Write transformed text back over the source file, or to `output` when
/// one was given.
pub(crate) fn write_document(path: &Path, output: Option<&Path>, text: &str) -> anyhow::Result<()> {
    let target = output.unwrap_or(path);
    fs::write(target, text).with_context(|| format!("writing {}", target.display()))
}
