// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

pub fn create_binary_file(dir: &Path, name: &str, content: &[u8]) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

pub fn setup_test_vault() -> Result<TempDir> {
    let vault = TempDir::new()?;

    create_test_file(
        vault.path(),
        "welcome.md",
        "# Welcome\nStart at [[Projects|the project list]].\n",
    )?;

    create_test_file(
        vault.path(),
        "projects.md",
        "# Projects\nCurrent focus: [[Welcome]].\n![[diagram.png]]\n",
    )?;

    create_test_file(vault.path(), "notes/untitled.md", "just a stray thought\n")?;

    create_binary_file(vault.path(), "attachments/diagram.png", b"fake png data")?;

    Ok(vault)
}
