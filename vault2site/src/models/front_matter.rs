// src/models/front_matter.rs
use chrono::NaiveDate;
use serde::Serialize;

/// Metadata header for a generated page. Serialized in declaration order;
/// `tags` is omitted entirely when absent.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    pub date: NaiveDate,
    pub draft: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}
