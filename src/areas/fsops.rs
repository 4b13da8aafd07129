//! Filesystem capability: recursive copy and removal
//!
//! The environment collaborator the core builds on: copy a file or a whole
//! directory tree from A to B, creating intermediate directories as needed,
//! and remove a file or tree that may or may not exist.

use anyhow::Context;
use std::path::Path;

/// Copy a file or directory tree, creating parent directories as needed
///
/// An existing destination file is overwritten; an existing destination
/// directory is merged into.
pub fn copy_recursive(source: &Path, destination: &Path) -> anyhow::Result<()> {
    if source.is_dir() {
        std::fs::create_dir_all(destination)
            .with_context(|| format!("failed to create directory {:?}", destination))?;

        for entry in std::fs::read_dir(source)
            .with_context(|| format!("failed to list directory {:?}", source))?
        {
            let entry = entry?;
            copy_recursive(&entry.path(), &destination.join(entry.file_name()))?;
        }

        return Ok(());
    }

    if let Some(parent) = destination.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create parent directories for {:?}", destination))?;
    }
    std::fs::copy(source, destination)
        .with_context(|| format!("failed to copy {:?} to {:?}", source, destination))?;

    Ok(())
}

/// Replace the destination with a copy of the source
///
/// Whatever is at the destination (file or tree) is removed first, so a
/// directory can replace a file and vice versa.
pub fn replace(source: &Path, destination: &Path) -> anyhow::Result<()> {
    remove_existing(destination)?;
    copy_recursive(source, destination)
}

/// Remove a file or directory tree if it exists
pub fn remove_existing(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        return Ok(());
    }

    if path.is_dir() {
        std::fs::remove_dir_all(path)
            .with_context(|| format!("failed to remove directory {:?}", path))
    } else {
        std::fs::remove_file(path).with_context(|| format!("failed to remove file {:?}", path))
    }
}
