// src/models/image_ref.rs
use std::path::PathBuf;

/// A resolved image reference: the name exactly as written in the note and
/// the source file it resolved to inside the vault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub name: String,
    pub source: PathBuf,
}
