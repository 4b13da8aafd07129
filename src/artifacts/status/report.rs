//! Four-way status classification
//!
//! Status combines the primitive tree comparisons across the working tree,
//! the staging area, and the last commit's image into four disjoint
//! classifications, all keyed by original relative path:
//!
//! - **staged**: new or changed in staging versus the last commit
//! - **unstaged**: working tree differs from staging
//! - **untracked**: in the working tree, not in staging
//! - **removed**: in the last commit, absent from the working tree
//!
//! Before the first commit, "staged" degenerates to everything currently in
//! the staging area and "removed" is empty.

use crate::areas::repository::Repository;
use crate::artifacts::diff::{changed_files, missing_files, scan_tree};
use crate::artifacts::image::commit_id::CommitId;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct StatusReport {
    pub head: Option<CommitId>,
    pub active_branch: String,
    pub staged: Vec<PathBuf>,
    pub unstaged: Vec<PathBuf>,
    pub untracked: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
}

impl StatusReport {
    /// Classify every file of the repository
    ///
    /// Read-only: inspecting status never mutates any area.
    pub fn inspect(repository: &Repository) -> anyhow::Result<Self> {
        let staging = repository.staging_path();
        let worktree = repository.workspace().path().to_path_buf();
        let head = repository.refs().read_head()?;

        let (staged, removed) = match &head {
            Some(id) => {
                let image = repository.images().image_path(id);
                let mut staged = missing_files(&staging, &image)?;
                staged.extend(changed_files(&staging, &image)?);

                (staged, missing_files(&image, &worktree)?)
            }
            None => {
                let staged = scan_tree(&staging)?
                    .into_iter()
                    .map(|entry| entry.relative)
                    .collect();

                (staged, Vec::new())
            }
        };

        Ok(Self {
            head,
            active_branch: repository.refs().active_branch()?,
            staged,
            unstaged: changed_files(&worktree, &staging)?,
            untracked: missing_files(&worktree, &staging)?,
            removed,
        })
    }

    /// Deltas that block a checkout
    pub fn has_uncommitted_changes(&self) -> bool {
        !self.staged.is_empty() || !self.unstaged.is_empty()
    }

    /// Deltas that justify taking a commit
    pub fn has_changes_to_commit(&self) -> bool {
        !self.staged.is_empty() || !self.removed.is_empty()
    }
}
