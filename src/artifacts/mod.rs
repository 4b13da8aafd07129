//! Domain data structures and algorithms
//!
//! This module contains the pure version-control logic, kept apart from the
//! on-disk areas that feed it:
//!
//! - `diff`: file-tree scanning and changed/missing comparisons
//! - `graph`: commit graph traversal (parents, ancestry closure, reachability)
//! - `image`: commit identifiers and image metadata
//! - `merge`: merge-base search and staging reconciliation
//! - `path_map`: real path <-> storage path translation
//! - `status`: four-way status classification

pub mod diff;
pub mod graph;
pub mod image;
pub mod merge;
pub mod path_map;
pub mod status;
