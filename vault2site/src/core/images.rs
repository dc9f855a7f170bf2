// src/core/images.rs
use log::warn;
use regex::{Captures, Regex};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

use crate::models::ImageRef;

/// Vault subdirectories searched for attachments, in priority order.
const ATTACHMENT_DIRS: [&str; 4] = ["attachments", "images", "assets", "files"];

static WIKI_EMBED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[\[([^\]]+)\]\]").expect("wiki embed pattern is valid")
});

static MARKDOWN_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("markdown image pattern is valid")
});

/// Searches the vault for an image file with the given name.
///
/// Candidate roots are the vault itself followed by its conventional
/// attachment subdirectories, in a fixed order; the first root containing
/// the file wins. Each root is checked for the exact filename first, then
/// searched recursively. Recursive traversal order is filesystem-dependent,
/// so which of several same-named files wins is not guaranteed.
#[must_use]
pub fn find_image(vault: &Path, name: &str) -> Option<PathBuf> {
    let mut search_roots = vec![vault.to_path_buf()];
    search_roots.extend(ATTACHMENT_DIRS.iter().map(|dir| vault.join(dir)));

    for root in search_roots {
        if !root.exists() {
            continue;
        }

        let direct = root.join(name);
        if direct.is_file() {
            return Some(direct);
        }

        for entry in WalkDir::new(&root).into_iter().filter_map(Result::ok) {
            if entry.file_type().is_file() && entry.file_name().to_string_lossy() == name {
                return Some(entry.into_path());
            }
        }
    }

    None
}

/// Rewrites both embed syntaxes to reference resolved images by bare
/// filename, so they sit alongside the generated page.
///
/// Returns the rewritten content together with every resolved reference.
/// The returned list may contain duplicates (the same image referenced more
/// than once records more than one entry); callers de-duplicate at copy
/// time, keyed by referenced name.
///
/// `![[name]]` embeds are rewritten to `![name](name)` whether or not the
/// name resolves; a failed resolution only logs a warning. `![alt](path)`
/// embeds resolve by the filename component of the path and are left
/// completely untouched when resolution fails or when the path is an
/// `http://`/`https://` URL.
#[must_use]
pub fn rewrite_images(content: &str, vault: &Path) -> (String, Vec<ImageRef>) {
    let mut images = Vec::new();

    let wiki_pass = WIKI_EMBED.replace_all(content, |caps: &Captures<'_>| {
        let name = &caps[1];
        if let Some(source) = find_image(vault, name) {
            images.push(ImageRef { name: name.to_owned(), source });
        } else {
            warn!("image '{name}' not found in vault");
        }
        format!("![{name}]({name})")
    });

    let markdown_pass = MARKDOWN_IMAGE.replace_all(&wiki_pass, |caps: &Captures<'_>| {
        let alt = &caps[1];
        let target = &caps[2];

        if target.starts_with("http://") || target.starts_with("https://") {
            return caps[0].to_owned();
        }

        let name = Path::new(target)
            .file_name()
            .map_or_else(|| target.to_owned(), |name| name.to_string_lossy().into_owned());

        match find_image(vault, &name) {
            Some(source) => {
                images.push(ImageRef { name: name.clone(), source });
                format!("![{alt}]({name})")
            }
            None => caps[0].to_owned(),
        }
    });

    (markdown_pass.into_owned(), images)
}
