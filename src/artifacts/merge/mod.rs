//! Merge resolution
//!
//! A merge reconciles the staging area with another branch before a regular
//! commit is taken with both tips as parents:
//!
//! 1. `base_finder` locates the common ancestor used as the baseline.
//! 2. `reconcile_staging` overlays onto the staging area every file the
//!    other branch changed or removed relative to that baseline.
//!
//! This is a last-writer-wins reconciliation, not a three-way content
//! merge: for every file the other branch touched, the other branch's tip
//! version wins, and a file it deleted is deleted from staging.

pub mod base_finder;

pub use base_finder::find_merge_base;

use crate::areas::fsops;
use crate::artifacts::diff::{changed_files, missing_files};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Overwrite the staging area with the other branch's version of every file
/// it changed or removed relative to the merge base
///
/// `base_tree` and `other_tree` are image roots; `staging_root` is the
/// staging area. Returns the original relative paths that were touched.
pub fn reconcile_staging(
    base_tree: &Path,
    other_tree: &Path,
    staging_root: &Path,
) -> anyhow::Result<Vec<PathBuf>> {
    let changed = changed_files(base_tree, other_tree)?;
    let removed = missing_files(base_tree, other_tree)?;

    for relative in &changed {
        fsops::replace(&other_tree.join(relative), &staging_root.join(relative))
            .with_context(|| format!("failed to reconcile {:?} into staging", relative))?;
    }

    for relative in &removed {
        fsops::remove_existing(&staging_root.join(relative))
            .with_context(|| format!("failed to remove {:?} from staging", relative))?;
    }

    Ok(changed.into_iter().chain(removed).collect())
}
