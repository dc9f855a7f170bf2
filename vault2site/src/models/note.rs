// src/models/note.rs
use chrono::NaiveDate;
use std::path::PathBuf;

/// A markdown note read from the vault, transformed in memory and never
/// mutated in place on disk.
#[derive(Debug, Clone)]
pub struct Note {
    pub path: PathBuf,
    pub content: String,
    pub title: String,
    pub slug: String,
    pub date: NaiveDate,
}
