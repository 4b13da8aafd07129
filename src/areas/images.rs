//! Snapshot (image) store
//!
//! Owns everything under `.vcs/images`: one directory per commit holding
//! the full file tree that was staged at commit time, plus a `<id>.meta`
//! sidecar with parentage, timestamp, and message. Images are write-once:
//! the store only ever creates new entries and never mutates or deletes an
//! existing one.

use crate::areas::fsops;
use crate::artifacts::diff::{TreeEntry, scan_tree};
use crate::artifacts::image::commit_id::CommitId;
use crate::artifacts::image::metadata::ImageMetadata;
use crate::errors::Error;
use anyhow::Context;
use derive_new::new;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Extension of the metadata sidecar file
const METADATA_EXTENSION: &str = "meta";

#[derive(Debug, new)]
pub struct Images {
    path: Box<Path>,
}

impl Images {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn image_path(&self, id: &CommitId) -> PathBuf {
        self.path.join(id.as_ref())
    }

    fn metadata_path(&self, id: &CommitId) -> PathBuf {
        self.path
            .join(format!("{}.{}", id.as_ref(), METADATA_EXTENSION))
    }

    pub fn contains(&self, id: &CommitId) -> bool {
        self.image_path(id).is_dir()
    }

    /// Persist the staging area as a new immutable image
    ///
    /// Generates a fresh random identifier and copies the whole staging
    /// tree under it. Refuses to overwrite an existing image directory,
    /// which turns an (astronomically unlikely) identifier collision into
    /// an error instead of silent corruption.
    pub fn create_snapshot(&self, staging_root: &Path) -> anyhow::Result<CommitId> {
        let id = CommitId::generate();
        let destination = self.image_path(&id);

        if destination.exists() {
            anyhow::bail!("commit identifier collision on {}", id);
        }

        fsops::copy_recursive(staging_root, &destination)
            .with_context(|| format!("failed to snapshot staging area into image {}", id))?;

        Ok(id)
    }

    /// Every file and empty directory stored under an image, recursively
    pub fn read_snapshot(&self, id: &CommitId) -> anyhow::Result<Vec<TreeEntry>> {
        if !self.contains(id) {
            return Err(Error::MissingReference(id.to_string()).into());
        }

        scan_tree(&self.image_path(id))
    }

    /// Write the metadata sidecar for a freshly created image
    ///
    /// Like the image tree itself the sidecar is write-once.
    pub fn write_metadata(&self, id: &CommitId, metadata: &ImageMetadata) -> anyhow::Result<()> {
        let path = self.metadata_path(id);
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .with_context(|| format!("failed to create metadata file at {:?}", path))?;

        file.write_all(metadata.serialize().as_bytes())
            .with_context(|| format!("failed to write metadata file at {:?}", path))?;

        Ok(())
    }

    pub fn read_metadata(&self, id: &CommitId) -> anyhow::Result<ImageMetadata> {
        let path = self.metadata_path(id);
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read metadata file at {:?}", path))?;

        ImageMetadata::parse(&text)
    }

    /// Parent IDs recorded in an image's metadata (empty for a root)
    pub fn parents_of(&self, id: &CommitId) -> anyhow::Result<Vec<CommitId>> {
        Ok(self.read_metadata(id)?.parents)
    }

    /// IDs of every image in the store, in name order
    pub fn list(&self) -> anyhow::Result<Vec<CommitId>> {
        let mut ids = std::fs::read_dir(self.path.as_ref())
            .with_context(|| format!("failed to list image store at {:?}", self.path))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| CommitId::try_parse(entry.file_name().to_string_lossy().to_string()).ok())
            .collect::<Vec<_>>();

        ids.sort();
        Ok(ids)
    }
}
