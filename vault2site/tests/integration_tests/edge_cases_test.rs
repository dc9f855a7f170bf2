// tests/integration_tests/edge_cases_test.rs
use super::common::create_test_file;
use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use vault2site::{convert_vault, extract_title, slugify};

#[test]
fn test_empty_vault_is_a_clean_run() -> Result<()> {
    let vault = TempDir::new()?;
    let site = TempDir::new()?;

    let stats = convert_vault(vault.path(), site.path())?;

    assert_eq!(stats.total(), 0);
    let posts = site.path().join("content").join("posts");
    assert!(posts.exists());
    assert_eq!(fs::read_dir(posts)?.count(), 0, "no posts may be produced");
    Ok(())
}

#[test]
fn test_nonexistent_vault_is_a_clean_run() -> Result<()> {
    let site = TempDir::new()?;

    let stats = convert_vault(Path::new("/definitely/not/here"), site.path())?;

    assert_eq!(stats.total(), 0);
    Ok(())
}

#[test]
fn test_undecodable_note_fails_in_isolation() -> Result<()> {
    let vault = TempDir::new()?;
    create_test_file(vault.path(), "fine.md", "# Fine\ncontent")?;
    fs::write(vault.path().join("binary.md"), [0xc3, 0x28, 0xa0, 0xa1])?;

    let site = TempDir::new()?;
    let stats = convert_vault(vault.path(), site.path())?;

    assert_eq!(stats.converted, 1);
    assert_eq!(stats.failed, 1);
    assert!(site.path().join("content/posts/fine/index.md").exists());
    Ok(())
}

#[test]
fn test_h2_only_note_titles_from_heading() -> Result<()> {
    assert_eq!(extract_title("## Second Level\ntext", "fallback"), "Second Level");
    Ok(())
}

#[test]
fn test_slug_collision_is_not_disambiguated() -> Result<()> {
    // Two notes with the same title share one output directory; the later
    // one wins. Known limitation, intentionally not fixed.
    let vault = TempDir::new()?;
    create_test_file(vault.path(), "one.md", "# Same Title\nfrom one")?;
    create_test_file(vault.path(), "two.md", "# Same Title\nfrom two")?;

    let site = TempDir::new()?;
    let stats = convert_vault(vault.path(), site.path())?;

    assert_eq!(stats.converted, 2, "both notes process successfully");
    let posts = site.path().join("content").join("posts");
    assert_eq!(fs::read_dir(&posts)?.count(), 1, "they collide on one directory");
    assert!(posts.join("same-title").join("index.md").exists());
    Ok(())
}

#[test]
fn test_slug_round_trip_is_stable() {
    let slug = slugify("Überraschung! Ein Test");
    assert_eq!(slugify(&slug), slug);
}
