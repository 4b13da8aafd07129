//! References (branches, HEAD) and the active-branch marker
//!
//! References are human-readable names pointing to commit identifiers.
//! Two reserved entries exist once any commit does:
//!
//! - `HEAD`: the commit checked out or most recently committed
//! - `master`: the default branch
//!
//! ## File format
//!
//! The table lives in `.vcs/references` as `name=commitId` lines, one per
//! reference, in insertion order. The active branch (the one that advances
//! automatically on the next commit) is a single line in `.vcs/activated`,
//! possibly empty when HEAD is detached.

use crate::areas::images::Images;
use crate::artifacts::image::commit_id::CommitId;
use crate::errors::Error;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// Name of the default branch
pub const DEFAULT_BRANCH: &str = "master";

const REFERENCES_FILE: &str = "references";
const ACTIVATED_FILE: &str = "activated";

/// Reference manager
///
/// Owns the `name -> commit id` table and the active-branch marker.
/// Table writes take an exclusive advisory lock on the references file.
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the storage directory (`.vcs`)
    path: Box<Path>,
}

impl Refs {
    fn references_path(&self) -> PathBuf {
        self.path.join(REFERENCES_FILE)
    }

    fn activated_path(&self) -> PathBuf {
        self.path.join(ACTIVATED_FILE)
    }

    /// Read the whole reference table, preserving file order
    ///
    /// A repository with no commits yet has no references file; that reads
    /// as an empty table.
    pub fn read_table(&self) -> anyhow::Result<Vec<(String, CommitId)>> {
        let path = self.references_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read references file at {:?}", path))?;

        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                let (name, id) = line
                    .split_once('=')
                    .ok_or_else(|| anyhow::anyhow!("malformed reference line: {}", line))?;
                Ok((name.to_string(), CommitId::try_parse(id.trim().to_string())?))
            })
            .collect()
    }

    fn write_table(&self, table: &[(String, CommitId)]) -> anyhow::Result<()> {
        let path = self.references_path();
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("failed to open references file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut file, Lock::Exclusive, 0, 1)?;

        let text = table
            .iter()
            .map(|(name, id)| format!("{}={}", name, id))
            .collect::<Vec<_>>()
            .join("\n");
        lock.deref_mut().write_all(text.as_bytes())?;

        Ok(())
    }

    pub fn read_head(&self) -> anyhow::Result<Option<CommitId>> {
        self.lookup(HEAD_REF_NAME)
    }

    /// Look a symbolic name up in the reference table
    pub fn lookup(&self, name: &str) -> anyhow::Result<Option<CommitId>> {
        Ok(self
            .read_table()?
            .into_iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, id)| id))
    }

    /// Resolve a symbolic name or raw commit identifier to a commit
    ///
    /// A string that is itself a valid, existing commit identifier resolves
    /// to itself; anything else goes through the reference table. Fails
    /// with a missing-reference error when neither matches.
    pub fn resolve(&self, name: &str, images: &Images) -> anyhow::Result<CommitId> {
        if let Ok(id) = CommitId::try_parse(name.to_string())
            && images.contains(&id)
        {
            return Ok(id);
        }

        if let Some(id) = self.lookup(name)? {
            return Ok(id);
        }

        Err(Error::MissingReference(name.to_string()).into())
    }

    /// Record a freshly created commit in the table
    ///
    /// The first commit creates the table with `HEAD` and `master` both at
    /// the new commit. Afterwards `HEAD` always moves, and the active
    /// branch moves with it only if it was pointing at the old `HEAD` value
    /// (a branch left behind by a checkout stays put).
    pub fn record_commit(&self, new_id: &CommitId) -> anyhow::Result<()> {
        let mut table = self.read_table()?;

        if table.is_empty() {
            table.push((HEAD_REF_NAME.to_string(), new_id.clone()));
            table.push((DEFAULT_BRANCH.to_string(), new_id.clone()));
            return self.write_table(&table);
        }

        let old_head = self
            .read_head()?
            .ok_or_else(|| Error::MissingReference(HEAD_REF_NAME.to_string()))?;
        let active = self.active_branch()?;

        for (name, id) in table.iter_mut() {
            if name == HEAD_REF_NAME {
                *id = new_id.clone();
            } else if *name == active && *id == old_head {
                *id = new_id.clone();
            }
        }

        self.write_table(&table)
    }

    /// Unconditionally rewrite the `HEAD` entry, leaving every branch
    /// pointer untouched (used by checkout)
    pub fn set_head(&self, new_id: &CommitId) -> anyhow::Result<()> {
        let mut table = self.read_table()?;

        match table.iter_mut().find(|(name, _)| name == HEAD_REF_NAME) {
            Some((_, id)) => *id = new_id.clone(),
            None => table.insert(0, (HEAD_REF_NAME.to_string(), new_id.clone())),
        }

        self.write_table(&table)
    }

    /// Insert a new branch pointing at the current `HEAD`
    ///
    /// Does not switch the active branch; checkout is a separate, explicit
    /// step.
    pub fn create_branch(&self, name: &str) -> anyhow::Result<CommitId> {
        if name.is_empty()
            || name == HEAD_REF_NAME
            || name.contains('=')
            || name.chars().any(char::is_whitespace)
        {
            anyhow::bail!("invalid branch name '{}'", name);
        }

        let mut table = self.read_table()?;
        if table.iter().any(|(entry, _)| entry == name) {
            return Err(Error::DuplicateBranch(name.to_string()).into());
        }

        let head = self
            .read_head()?
            .ok_or_else(|| Error::MissingReference(HEAD_REF_NAME.to_string()))?;

        table.push((name.to_string(), head.clone()));
        self.write_table(&table)?;

        Ok(head)
    }

    /// First branch (not `HEAD`) pointing at the given commit, in table order
    pub fn branch_for(&self, id: &CommitId) -> anyhow::Result<Option<String>> {
        Ok(self
            .read_table()?
            .into_iter()
            .find(|(name, entry)| name != HEAD_REF_NAME && entry == id)
            .map(|(name, _)| name))
    }

    /// Name of the active branch; empty means detached
    pub fn active_branch(&self) -> anyhow::Result<String> {
        let path = self.activated_path();
        if !path.exists() {
            return Ok(String::new());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read active-branch marker at {:?}", path))?;

        Ok(content.trim().to_string())
    }

    /// Overwrite the active-branch marker, including to empty (detached)
    pub fn set_active_branch(&self, name: &str) -> anyhow::Result<()> {
        let path = self.activated_path();

        std::fs::write(&path, name)
            .with_context(|| format!("failed to write active-branch marker at {:?}", path))
    }
}
