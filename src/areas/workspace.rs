use crate::areas::fsops;
use crate::artifacts::diff::{TreeEntry, scan_tree};
use derive_new::new;
use std::path::{Path, PathBuf};

/// The user's real working tree
///
/// The system only ever reads it (add, status, rm) or writes image content
/// back into it (checkout); it is not owned by the repository.
#[derive(Debug, new)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn absolute(&self, relative: &Path) -> PathBuf {
        self.path.join(relative)
    }

    /// Every file and empty directory in the working tree, skipping `.vcs`
    pub fn scan(&self) -> anyhow::Result<Vec<TreeEntry>> {
        scan_tree(&self.path)
    }

    /// Write a stored file or directory back at its original relative
    /// location, replacing whatever is there
    pub fn restore(&self, source: &Path, relative: &Path) -> anyhow::Result<()> {
        fsops::replace(source, &self.path.join(relative))
    }

    /// Delete a relative path from the working tree, if present
    pub fn remove(&self, relative: &Path) -> anyhow::Result<()> {
        fsops::remove_existing(&self.path.join(relative))
    }
}
