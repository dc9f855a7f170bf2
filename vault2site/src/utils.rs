// src/utils.rs
use anyhow::{Context as _, Result};
use chrono::{DateTime, Local, NaiveDate};
use std::fs;
use std::path::Path;

pub fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

/// Returns the file's last-modified timestamp as a local calendar date.
///
/// # Errors
///
/// Returns an error if the file metadata or its modification time cannot be
/// read.
pub fn modified_date(path: &Path) -> Result<NaiveDate> {
    let modified = fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .with_context(|| format!("failed to read modification time of {}", path.display()))?;
    Ok(DateTime::<Local>::from(modified).date_naive())
}
