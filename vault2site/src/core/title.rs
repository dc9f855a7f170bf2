// src/core/title.rs
use regex::Regex;
use std::sync::LazyLock;

static H1_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^#\s+(.+)$").expect("h1 pattern is valid")
});

static ANY_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^#{1,6}\s+(.+)$").expect("heading pattern is valid")
});

/// Derives a page title from the note content, falling back to the filename
/// stem.
///
/// The first level-1 heading wins; failing that, the first heading of any
/// level; failing that, the stem with hyphens and underscores replaced by
/// spaces and each word capitalized.
#[must_use]
pub fn extract_title(content: &str, fallback_stem: &str) -> String {
    if let Some(caps) = H1_HEADING.captures(content) {
        return caps[1].trim().to_owned();
    }
    if let Some(caps) = ANY_HEADING.captures(content) {
        return caps[1].trim().to_owned();
    }
    title_case(fallback_stem)
}

fn title_case(stem: &str) -> String {
    stem.replace(['-', '_'], " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}
