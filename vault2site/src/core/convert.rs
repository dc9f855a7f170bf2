// src/core/convert.rs
use anyhow::{Context as _, Result};
use log::{error, info, warn};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::core::frontmatter::render_front_matter;
use crate::core::images::rewrite_images;
use crate::core::links::rewrite_links;
use crate::core::slug::slugify;
use crate::core::title::extract_title;
use crate::models::{ConvertStats, ImageRef, Note};
use crate::utils::{is_markdown, modified_date};

/// Reads a note from disk and derives its title, slug and date.
///
/// The date comes from the file's last-modified timestamp, not the current
/// time.
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8 text or its
/// metadata cannot be queried.
pub fn load_note(path: &Path) -> Result<Note> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let title = extract_title(&content, &stem);
    let slug = slugify(&title);
    let date = modified_date(path)?;

    Ok(Note {
        path: path.to_path_buf(),
        content,
        title,
        slug,
        date,
    })
}

/// Converts a single note into a page bundle under `posts_dir`.
///
/// The pipeline is read, link rewriting, image rewriting, image copying,
/// then the front matter + body write. Link rewriting must run before image
/// rewriting: its embed guard relies on image syntax not yet being
/// rewritten.
///
/// # Errors
///
/// Any failure short of an image copy (which only warns) aborts this note
/// and is reported to the caller; the batch is expected to continue with
/// other notes.
pub fn process_note(path: &Path, vault: &Path, posts_dir: &Path) -> Result<()> {
    let note = load_note(path)?;

    let post_dir = posts_dir.join(&note.slug);
    fs::create_dir_all(&post_dir)
        .with_context(|| format!("failed to create post directory {}", post_dir.display()))?;

    let body = rewrite_links(&note.content);
    let (body, images) = rewrite_images(&body, vault);

    copy_images(&images, &post_dir);

    let front_matter = render_front_matter(&note.title, note.date, None)?;
    let index_path = post_dir.join("index.md");
    fs::write(&index_path, format!("{front_matter}\n{body}"))
        .with_context(|| format!("failed to write {}", index_path.display()))?;

    info!("converted '{}' -> {}", note.title, note.slug);
    Ok(())
}

/// Copies resolved images into the post directory, de-duplicated by
/// referenced name. A failed copy is a warning, never an error.
fn copy_images(images: &[ImageRef], post_dir: &Path) {
    let mut copied: HashSet<&str> = HashSet::new();

    for image in images {
        if !copied.insert(image.name.as_str()) {
            continue;
        }

        let dest = post_dir.join(&image.name);
        match fs::copy(&image.source, &dest) {
            Ok(_) => info!("copied image: {}", image.name),
            Err(err) => warn!("failed to copy image {}: {err}", image.name),
        }
    }
}

/// Converts every markdown note under `vault` into a page bundle below
/// `<site_root>/content/posts`.
///
/// A missing vault reports an error and performs no work. Per-note failures
/// are logged and counted; they never abort the batch. Enumeration order
/// follows the filesystem and is not guaranteed stable.
///
/// # Errors
///
/// Returns an error only if the output content directory cannot be created.
pub fn convert_vault(vault: &Path, site_root: &Path) -> Result<ConvertStats> {
    let mut stats = ConvertStats::new();

    if !vault.exists() {
        error!("vault folder '{}' does not exist", vault.display());
        return Ok(stats);
    }

    let posts_dir = site_root.join("content").join("posts");
    fs::create_dir_all(&posts_dir)
        .with_context(|| format!("failed to create posts directory {}", posts_dir.display()))?;

    let mut notes = Vec::new();
    for entry in WalkDir::new(vault) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable entry: {err}");
                continue;
            }
        };
        if entry.file_type().is_file() && is_markdown(entry.path()) {
            notes.push(entry.into_path());
        }
    }

    if notes.is_empty() {
        println!("No markdown files found in '{}'", vault.display());
        return Ok(stats);
    }

    println!("Found {} markdown files to process", notes.len());

    for path in &notes {
        match process_note(path, vault, &posts_dir) {
            Ok(()) => stats.converted = stats.converted.saturating_add(1),
            Err(err) => {
                error!("error processing {}: {err:#}", path.display());
                stats.failed = stats.failed.saturating_add(1);
            }
        }
    }

    println!("\nConversion complete:");
    println!("Successfully processed: {}", stats.converted);
    println!("Failed: {}", stats.failed);

    Ok(stats)
}
