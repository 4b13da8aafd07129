//! Commit (image) identifier
//!
//! Commit IDs are 40-character lowercase hexadecimal strings generated
//! uniformly at random when an image is created. They carry no structural
//! meaning: the ID is a name for a snapshot, not a hash of its content.
//!
//! ## Format
//!
//! - Full: 40 lowercase hex characters (e.g., "a3f0...9c1d")
//! - Short: first 7 characters, used in user-facing messages
//!
//! ## Storage
//!
//! Images are stored in `.vcs/images/<id>/` with metadata in
//! `.vcs/images/<id>.meta`.

use crate::artifacts::image::COMMIT_ID_LENGTH;
use rand::Rng;

const HEX_CHARS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
];

/// Commit identifier: a 160-bit random value rendered as 40 hex characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// Generate a fresh random identifier
    ///
    /// Collisions are astronomically unlikely at 160 bits; the snapshot
    /// store still refuses to overwrite an existing image directory.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let id = (0..COMMIT_ID_LENGTH)
            .map(|_| HEX_CHARS[rng.random_range(0..HEX_CHARS.len())])
            .collect();

        Self(id)
    }

    /// Parse and validate a commit ID from a string
    ///
    /// # Returns
    ///
    /// Validated CommitId or error if the length is wrong or a character is
    /// not lowercase hexadecimal
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != COMMIT_ID_LENGTH {
            return Err(anyhow::anyhow!("invalid commit ID length: {}", id.len()));
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        {
            return Err(anyhow::anyhow!("invalid commit ID characters: {}", id));
        }

        Ok(Self(id))
    }

    /// Get the abbreviated form of the commit ID (first 7 characters)
    pub fn to_short(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
