// src/core/slug.rs
use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization as _;

static SEPARATOR_RUNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s-]+").expect("separator pattern is valid")
});

/// Converts arbitrary text into a URL-safe slug.
///
/// The text is compatibility-decomposed first so accented characters degrade
/// to their base form, then lowercased; anything that is not a word
/// character, whitespace or a hyphen is dropped, separator runs collapse to
/// a single hyphen, and leading/trailing hyphens are trimmed.
///
/// Two distinct inputs can produce the same slug; no uniqueness is provided.
#[must_use]
pub fn slugify(text: &str) -> String {
    let cleaned: String = text
        .nfkd()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();
    let lowered = cleaned.to_lowercase();
    let collapsed = SEPARATOR_RUNS.replace_all(&lowered, "-");
    collapsed.trim_matches('-').to_owned()
}
