use crate::areas::fsops;
use derive_new::new;
use std::path::Path;

/// The staging area: a mutable mirror of the subset of the working tree
/// slated for the next commit
///
/// Files enter it through `add`, `checkout`, and merge reconciliation, and
/// leave it only through explicit removal or checkout replacement. It is
/// the sole input to a commit snapshot.
#[derive(Debug, new)]
pub struct Staging {
    path: Box<Path>,
}

impl Staging {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Mirror a working-tree file or directory at its relative location,
    /// replacing whatever the mirror currently holds there
    pub fn stage(&self, source: &Path, relative: &Path) -> anyhow::Result<()> {
        fsops::replace(source, &self.path.join(relative))
    }

    /// Drop a relative path from the mirror, if present
    pub fn remove(&self, relative: &Path) -> anyhow::Result<()> {
        fsops::remove_existing(&self.path.join(relative))
    }
}
