//! Typed error kinds for repository operations
//!
//! Validation errors are raised before any on-disk mutation, so failing
//! operations are all-or-nothing with respect to these checks. Filesystem
//! failures encountered mid-operation are propagated as plain `anyhow`
//! errors with context and are not rolled back.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no '.vcs' directory found in `{0}` or any of its parent directories")]
    NotARepository(PathBuf),
    #[error("reference '{0}' not found")]
    MissingReference(String),
    #[error("a branch named '{0}' already exists")]
    DuplicateBranch(String),
    #[error("there are changes not yet committed")]
    UncommittedChanges,
    #[error("invalid path `{0}`: use a path inside the working tree")]
    InvalidPath(PathBuf),
}
