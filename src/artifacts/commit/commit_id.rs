//! Abbreviated commit identifiers
//!
//! Ids are the first 7 characters of a SHA-1 digest over the commit's
//! content plus its position in the history. Within a session that makes
//! them distinct with overwhelming probability, and they are never
//! regenerated once assigned. The format is opaque to callers; only
//! "short, unique, hex-like" is promised.

use sha1::{Digest, Sha1};
use std::collections::BTreeSet;

pub const COMMIT_ID_LENGTH: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// Derive an id from the commit's content
    ///
    /// `sequence` is the number of commits already in the history; including
    /// it keeps ids distinct even for identical content committed twice in
    /// the same second.
    pub(crate) fn generate(
        message: &str,
        timestamp: &str,
        files: &BTreeSet<String>,
        sequence: u64,
    ) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(sequence.to_be_bytes());
        hasher.update(timestamp.as_bytes());
        hasher.update(message.as_bytes());
        for file in files {
            hasher.update(file.as_bytes());
            hasher.update([0]);
        }

        let digest = hasher.finalize();
        Self(format!("{digest:x}")[..COMMIT_ID_LENGTH].to_string())
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
