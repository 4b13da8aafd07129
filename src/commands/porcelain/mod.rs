//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: create the `.vcs` storage layout
//! - `add`: mirror a file or directory into the staging area
//! - `commit`: snapshot the staging area into a new image
//! - `status`: print the four status classifications
//! - `checkout`: restore an image into the working tree and staging
//! - `rm`: remove a path from the working tree and staging
//! - `branch`: label the current commit with a new branch name
//! - `merge`: reconcile staging from another branch, then commit
//! - `graph`: print commit adjacency and branch labels

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod graph;
pub mod init;
pub mod merge;
pub mod rm;
pub mod status;
