//! User-facing repository operations
//!
//! Each porcelain command composes the on-disk areas and the domain
//! artifacts into one workflow; argument parsing and exit-code mapping
//! live in the binary, outside this module.

pub mod porcelain;
