//! On-disk areas of the repository
//!
//! - `fsops`: recursive copy/remove primitives used by every area
//! - `images`: immutable snapshot store (`.vcs/images`)
//! - `refs`: reference table and active-branch marker
//! - `repository`: repository handle, discovery, and operation locking
//! - `staging`: mutable staging mirror (`.vcs/staging`)
//! - `workspace`: the user's real working tree

pub mod fsops;
pub mod images;
pub mod refs;
pub mod repository;
pub mod staging;
pub mod workspace;
