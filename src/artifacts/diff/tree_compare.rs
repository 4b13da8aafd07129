//! Primitive tree comparisons
//!
//! Both comparisons take two file-tree roots and yield original
//! (de-mirrored) relative paths, so trees rooted at the working tree, the
//! staging area, and any image can be compared interchangeably.

use crate::artifacts::diff::tree_scan::scan_tree;
use anyhow::Context;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Files present in both trees whose byte content differs
///
/// Directories are never reported as changed; a file shadowed by a
/// directory of the same name on the other side counts as changed. Files
/// present in only one tree are not reported here.
pub fn changed_files(tree_a: &Path, tree_b: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries_b = scan_tree(tree_b)?
        .into_iter()
        .map(|entry| (entry.relative.clone(), entry))
        .collect::<HashMap<_, _>>();

    let mut changed = Vec::new();

    for entry_a in scan_tree(tree_a)? {
        if entry_a.is_dir {
            continue;
        }
        let Some(entry_b) = entries_b.get(&entry_a.relative) else {
            continue;
        };

        if entry_b.is_dir || read_bytes(&entry_a.absolute)? != read_bytes(&entry_b.absolute)? {
            changed.push(entry_a.relative);
        }
    }

    Ok(changed)
}

/// Entries of `tree_a` whose relative path has no counterpart in `tree_b`
pub fn missing_files(tree_a: &Path, tree_b: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let present_in_b = scan_tree(tree_b)?
        .into_iter()
        .map(|entry| entry.relative)
        .collect::<std::collections::HashSet<_>>();

    Ok(scan_tree(tree_a)?
        .into_iter()
        .map(|entry| entry.relative)
        .filter(|relative| !present_in_b.contains(relative))
        .collect())
}

fn read_bytes(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("failed to read file {:?}", path))
}
