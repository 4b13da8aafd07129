pub mod commit_id;
pub mod metadata;

/// Length of a rendered commit identifier in hexadecimal characters
pub const COMMIT_ID_LENGTH: usize = 40;
