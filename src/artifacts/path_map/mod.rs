//! Path translation between the working tree and internal storage
//!
//! The staging area and every image mirror the structure of the working
//! tree under `.vcs/`. This module owns the (pure) translation between a
//! file's original location and its mirrored locations:
//!
//! ```text
//! <root>/a/b.txt                      original (real) path
//! <root>/.vcs/staging/a/b.txt         staging mirror
//! <root>/.vcs/images/<id>/a/b.txt     image mirror
//! ```

use crate::artifacts::image::commit_id::CommitId;
use crate::errors::Error;
use derive_new::new;
use std::path::{Component, Path, PathBuf};

/// Name of the repository storage directory
pub const REPO_DIR: &str = ".vcs";

/// Name of the staging directory under `.vcs`
pub const STAGING_DIR: &str = "staging";

/// Name of the image store directory under `.vcs`
pub const IMAGES_DIR: &str = "images";

/// Translator between real working-tree paths and their storage mirrors
///
/// Stateless apart from the repository root it is anchored at.
#[derive(Debug, Clone, new)]
pub struct PathMap {
    root: Box<Path>,
}

impl PathMap {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn vcs_root(&self) -> PathBuf {
        self.root.join(REPO_DIR)
    }

    pub fn staging_root(&self) -> PathBuf {
        self.vcs_root().join(STAGING_DIR)
    }

    pub fn images_root(&self) -> PathBuf {
        self.vcs_root().join(IMAGES_DIR)
    }

    /// Check whether a path points inside repository storage
    pub fn is_internal(path: &Path) -> bool {
        path.components()
            .any(|component| matches!(component, Component::Normal(name) if name == REPO_DIR))
    }

    /// Translate an absolute working-tree path to its repository-relative form
    ///
    /// Fails with an invalid-path error when the path lies outside the
    /// repository root or inside `.vcs` itself.
    pub fn relativize(&self, absolute: &Path) -> anyhow::Result<PathBuf> {
        let relative = absolute
            .strip_prefix(self.root.as_ref())
            .map_err(|_| Error::InvalidPath(absolute.to_path_buf()))?;

        if Self::is_internal(relative) {
            return Err(Error::InvalidPath(absolute.to_path_buf()).into());
        }

        Ok(relative.to_path_buf())
    }

    /// Mirror location of a repository-relative path inside the staging area
    pub fn staging_path(&self, relative: &Path) -> PathBuf {
        self.staging_root().join(relative)
    }

    /// Mirror location of a repository-relative path inside an image
    pub fn image_path(&self, id: &CommitId, relative: &Path) -> PathBuf {
        self.images_root().join(id.as_ref()).join(relative)
    }

    /// Recover the original repository-relative path of a storage mirror
    ///
    /// Accepts paths inside `.vcs/staging` or `.vcs/images/<id>`.
    pub fn original_path(&self, storage: &Path) -> anyhow::Result<PathBuf> {
        if let Ok(relative) = storage.strip_prefix(self.staging_root()) {
            return Ok(relative.to_path_buf());
        }

        if let Ok(under_images) = storage.strip_prefix(self.images_root()) {
            // first component under images/ is the commit id
            let relative = under_images.components().skip(1).collect::<PathBuf>();
            return Ok(relative);
        }

        Err(Error::InvalidPath(storage.to_path_buf()).into())
    }
}
