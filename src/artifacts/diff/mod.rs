//! Change detection between file trees
//!
//! - `tree_scan`: recursive enumeration of the files (and empty
//!   directories) under a tree root
//! - `tree_compare`: the two primitive comparisons every status and merge
//!   computation is built from

pub mod tree_compare;
pub mod tree_scan;

pub use tree_compare::{changed_files, missing_files};
pub use tree_scan::{TreeEntry, scan_tree};
