// src/cli.rs
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::convert::convert_vault;
use crate::models::ConvertStats;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the note vault containing markdown files
    pub vault: PathBuf,

    /// Site root directory to write generated content into (defaults to the current directory)
    #[arg(short = 's', long, default_value = ".")]
    pub site_root: PathBuf,
}

/// Runs a full conversion with the given arguments.
///
/// # Errors
///
/// Returns an error if the output content directory cannot be created or an
/// unexpected file system failure occurs outside per-note processing.
pub fn run(args: &Args) -> Result<ConvertStats> {
    convert_vault(&args.vault, &args.site_root)
}
