//! Commit records
//!
//! A commit is an immutable snapshot of which filenames were staged at the
//! moment of commit, with an id, message, and human-readable timestamp. It
//! exclusively owns its file snapshot: clearing the staging index after a
//! commit never reaches back into history.

pub mod commit_id;

use crate::artifacts::commit::commit_id::CommitId;
use derive_new::new;
use std::collections::BTreeSet;

/// Timestamp capture format, local time
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Commit {
    id: CommitId,
    message: String,
    timestamp: String,
    files: BTreeSet<String>,
}

impl Commit {
    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Snapshot of the staging index at commit time
    pub fn files(&self) -> &BTreeSet<String> {
        &self.files
    }

    /// One-line `[<id>] <message>` form used by status sidebars
    pub fn summary(&self) -> String {
        format!("[{}] {}", self.id, self.message)
    }
}
