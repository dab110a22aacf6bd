use crate::artifacts::commit::Commit;
use std::collections::BTreeSet;

/// Simulated repository state
///
/// Holds the working directory file set, the staging index, and the commit
/// history for one session. Nothing here touches a real filesystem: files are
/// bare names, commits are in-memory records.
///
/// Mutation happens only through the command handlers in `crate::commands`;
/// every accessor below is read-only. The one structural invariant is that
/// the index is always a subset of the working directory, enforced at staging
/// time since files are never removed.
#[derive(Debug, Default)]
pub struct RepositoryState {
    initialized: bool,
    files: BTreeSet<String>,
    index: BTreeSet<String>,
    commits: Vec<Commit>,
}

impl RepositoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `git init` has run in this session
    pub fn initialized(&self) -> bool {
        self.initialized
    }

    /// Every filename ever created in the working directory
    pub fn files(&self) -> &BTreeSet<String> {
        &self.files
    }

    /// Filenames staged for the next commit
    pub fn index(&self) -> &BTreeSet<String> {
        &self.index
    }

    /// Commit history, oldest first
    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    /// The latest `count` commits, newest first
    ///
    /// Used by front-ends for the repository status sidebar.
    pub fn recent_commits(&self, count: usize) -> impl Iterator<Item = &Commit> {
        self.commits.iter().rev().take(count)
    }

    pub fn contains_file(&self, name: &str) -> bool {
        self.files.contains(name)
    }

    /// Working directory files not currently staged
    pub fn unstaged_files(&self) -> BTreeSet<String> {
        self.files.difference(&self.index).cloned().collect()
    }

    /// Flip the session into an initialized repository
    ///
    /// Always clears all three collections, so re-running `git init` wipes
    /// history. Intentional: re-init means starting over.
    pub(crate) fn initialize(&mut self) {
        self.initialized = true;
        self.files.clear();
        self.index.clear();
        self.commits.clear();
    }

    /// Add a filename to the working directory
    ///
    /// Re-creating an existing file is a no-op, like `touch` refreshing a
    /// timestamp.
    pub(crate) fn track_file(&mut self, name: &str) {
        self.files.insert(name.to_string());
    }

    /// Stage a single file for the next commit
    ///
    /// Returns `false` without mutating anything when the file does not exist
    /// in the working directory.
    pub(crate) fn stage(&mut self, name: &str) -> bool {
        if !self.files.contains(name) {
            return false;
        }
        self.index.insert(name.to_string());
        true
    }

    /// Stage every working directory file (`git add .`)
    pub(crate) fn stage_all(&mut self) {
        self.index = self.files.clone();
    }

    /// Append a commit and clear the staging index
    ///
    /// The commit already owns its snapshot of the staged files, so clearing
    /// the index here cannot affect it.
    pub(crate) fn record_commit(&mut self, commit: Commit) {
        self.commits.push(commit);
        self.index.clear();
    }
}
