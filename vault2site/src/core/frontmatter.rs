// src/core/frontmatter.rs
use anyhow::{Context as _, Result};
use chrono::NaiveDate;

use crate::models::FrontMatter;

/// Builds the fenced metadata block for a generated page.
///
/// The mapping is serialized block-style in declaration order: `title`,
/// `date` as `YYYY-MM-DD`, `draft: false`, and `tags` only when a non-empty
/// list is supplied.
///
/// # Errors
///
/// Returns an error if YAML serialization fails.
pub fn render_front_matter(
    title: &str,
    date: NaiveDate,
    tags: Option<Vec<String>>,
) -> Result<String> {
    let front_matter = FrontMatter {
        title: title.to_owned(),
        date,
        draft: false,
        tags: tags.filter(|tags| !tags.is_empty()),
    };

    let yaml = serde_yaml_ng::to_string(&front_matter).context("failed to serialize front matter")?;
    Ok(format!("---\n{yaml}---\n"))
}
