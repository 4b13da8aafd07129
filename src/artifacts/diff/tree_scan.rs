use crate::artifacts::path_map::REPO_DIR;
use anyhow::Context;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// One file or empty directory found under a tree root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Path relative to the scanned root
    pub relative: PathBuf,
    /// Absolute location on disk
    pub absolute: PathBuf,
    pub is_dir: bool,
}

/// Enumerate every file and empty directory under `root`, recursively
///
/// Entries are reported in name order, skipping nothing except the `.vcs`
/// storage directory (relevant only when scanning the working tree; the
/// staging and image roots live inside `.vcs` themselves and their relative
/// paths never contain it). Non-empty directories are implied by their
/// contents and are not reported.
pub fn scan_tree(root: &Path) -> anyhow::Result<Vec<TreeEntry>> {
    if !root.is_dir() {
        anyhow::bail!("tree root does not exist: {:?}", root);
    }

    let mut entries = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to scan tree at {:?}", root))?;
        let relative = match entry.path().strip_prefix(root) {
            Ok(relative) if !relative.as_os_str().is_empty() => relative.to_path_buf(),
            _ => continue,
        };

        if is_internal(&relative) {
            continue;
        }

        let is_dir = entry.file_type().is_dir();
        if is_dir && !is_empty_dir(entry.path())? {
            continue;
        }

        entries.push(TreeEntry {
            relative,
            absolute: entry.path().to_path_buf(),
            is_dir,
        });
    }

    Ok(entries)
}

fn is_internal(relative: &Path) -> bool {
    relative
        .components()
        .any(|component| matches!(component, Component::Normal(name) if name == REPO_DIR))
}

fn is_empty_dir(path: &Path) -> anyhow::Result<bool> {
    let mut children = path
        .read_dir()
        .with_context(|| format!("failed to list directory {:?}", path))?;

    Ok(children.next().is_none())
}
