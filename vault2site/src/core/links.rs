// src/core/links.rs
use regex::{Captures, Regex};
use std::sync::LazyLock;

static WIKI_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(!)?\[\[([^\]|]+)(?:\|([^\]]+))?\]\]").expect("wiki link pattern is valid")
});

/// Strips `[[Target]]` and `[[Target|Display]]` links, keeping the display
/// text when present and the target otherwise.
///
/// `![[...]]` embeds are left untouched for the image pass: the `regex`
/// crate has no look-behind, so the leading `!` is captured and the whole
/// match re-emitted unchanged when it is present.
#[must_use]
pub fn rewrite_links(content: &str) -> String {
    WIKI_LINK
        .replace_all(content, |caps: &Captures<'_>| {
            if caps.get(1).is_some() {
                return caps[0].to_owned();
            }
            caps.get(3)
                .map_or_else(|| caps[2].to_owned(), |display| display.as_str().to_owned())
        })
        .into_owned()
}
