use crate::areas::images::Images;
use crate::areas::refs::Refs;
use crate::areas::staging::Staging;
use crate::areas::workspace::Workspace;
use crate::artifacts::path_map::{PathMap, REPO_DIR};
use crate::errors::Error;
use anyhow::Context;
use file_guard::{FileGuard, Lock};
use std::cell::RefMut;
use std::cell::RefCell;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

const LOCK_FILE: &str = "lock";

/// Handle to one repository, carried explicitly through every operation
///
/// Owns the on-disk areas (workspace, staging, image store, references) and
/// the output writer. Mutating operations additionally take an exclusive
/// advisory lock on `.vcs/lock` so two processes cannot interleave.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    staging: Arc<Mutex<Staging>>,
    images: Images,
    workspace: Workspace,
    refs: Refs,
    path_map: PathMap,
}

impl Repository {
    /// Open a repository rooted at an explicit path (used by `init`, which
    /// must work before `.vcs` exists)
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(path)
                .with_context(|| format!("failed to create repository root at {:?}", path))?;
        }
        let path = path
            .canonicalize()
            .with_context(|| format!("failed to resolve repository root at {:?}", path))?;

        let path_map = PathMap::new(path.clone().into_boxed_path());
        let staging = Staging::new(path_map.staging_root().into_boxed_path());
        let images = Images::new(path_map.images_root().into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(path_map.vcs_root().into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            staging: Arc::new(Mutex::new(staging)),
            images,
            workspace,
            refs,
            path_map,
        })
    }

    /// Discover the repository enclosing `start` by walking up towards the
    /// filesystem root until a `.vcs` directory is found
    pub fn discover(start: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let start = start
            .canonicalize()
            .with_context(|| format!("failed to resolve directory {:?}", start))?;

        let mut candidate = Some(start.as_path());
        while let Some(dir) = candidate {
            if dir.join(REPO_DIR).is_dir() {
                return Self::new(dir, writer);
            }
            candidate = dir.parent();
        }

        Err(Error::NotARepository(start).into())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn staging(&self) -> Arc<Mutex<Staging>> {
        self.staging.clone()
    }

    /// Location of the staging area, for read-only inspection that does not
    /// need to hold the staging mutex
    pub fn staging_path(&self) -> PathBuf {
        self.path_map.staging_root()
    }

    pub fn images(&self) -> &Images {
        &self.images
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn path_map(&self) -> &PathMap {
        &self.path_map
    }

    /// Take the repository-wide advisory lock for a mutating operation
    ///
    /// The lock is released when the returned guard drops. Advisory only:
    /// it serializes cooperating processes, nothing more.
    pub fn guard(&self) -> anyhow::Result<FileGuard<Box<File>>> {
        let path = self.path_map.vcs_root().join(LOCK_FILE);
        let file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .with_context(|| format!("failed to open repository lock file at {:?}", path))?;

        Ok(file_guard::lock(Box::new(file), Lock::Exclusive, 0, 1)?)
    }
}
