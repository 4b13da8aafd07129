//! Image metadata record
//!
//! Every image carries a sidecar metadata file (`.vcs/images/<id>.meta`)
//! recording its parentage, creation time, and optional free-text message.
//!
//! ## File format
//!
//! ```text
//! parent=None | parent=<id>[, <id>]
//! date=<timestamp>
//! message=<text>          (optional, single line)
//! ```
//!
//! Root commits record the literal string `None`; merge commits record both
//! tips, comma-space separated.

use crate::artifacts::image::commit_id::CommitId;
use anyhow::Context;

/// Timestamp format used in metadata files
const DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y %z";

/// Marker written in place of a parent list for root commits
const NO_PARENT: &str = "None";

/// Separator between parent IDs of a merge commit
const PARENT_SEPARATOR: &str = ", ";

/// Parentage, creation time, and optional message of one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMetadata {
    pub parents: Vec<CommitId>,
    pub date: String,
    pub message: Option<String>,
}

impl ImageMetadata {
    /// Build a record for an image created now
    pub fn now(parents: Vec<CommitId>, message: Option<String>) -> Self {
        Self {
            parents,
            date: chrono::Local::now().format(DATE_FORMAT).to_string(),
            message,
        }
    }

    /// Render the record in its on-disk text form
    pub fn serialize(&self) -> String {
        let parent = if self.parents.is_empty() {
            NO_PARENT.to_string()
        } else {
            self.parents
                .iter()
                .map(|id| id.as_ref())
                .collect::<Vec<_>>()
                .join(PARENT_SEPARATOR)
        };

        let mut text = format!("parent={}\ndate={}", parent, self.date);
        if let Some(message) = &self.message {
            text.push_str(&format!("\nmessage={}", message));
        }

        text
    }

    /// Parse a record from its on-disk text form
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let mut parents = Vec::new();
        let mut date = None;
        let mut message = None;

        for line in text.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };

            match key {
                "parent" if value.trim() != NO_PARENT => {
                    parents = value
                        .split(',')
                        .map(|id| CommitId::try_parse(id.trim().to_string()))
                        .collect::<anyhow::Result<Vec<_>>>()
                        .context("malformed parent list in image metadata")?;
                }
                "date" => date = Some(value.to_string()),
                "message" => message = Some(value.to_string()),
                _ => {}
            }
        }

        Ok(Self {
            parents,
            date: date.context("missing date in image metadata")?,
            message,
        })
    }
}
