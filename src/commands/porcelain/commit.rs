use crate::areas::session::Session;
use crate::artifacts::command::{CommandLine, MessageOption};
use crate::artifacts::commit::commit_id::CommitId;
use crate::artifacts::commit::{Commit, TIMESTAMP_FORMAT};

impl Session {
    /// `git commit -m <message...>`
    ///
    /// Appends a commit owning a snapshot of the staged files, then clears
    /// the index. The tracked-but-uncommitted distinction is not modeled;
    /// after a commit the working tree reads as clean until files are staged
    /// again.
    pub(crate) fn commit(&mut self, command: &CommandLine) {
        let message = match command.commit_message() {
            MessageOption::Missing => {
                self.transcript_mut()
                    .log(command.raw(), "error: command 'commit' requires -m option");
                return;
            }
            MessageOption::Empty => {
                self.transcript_mut()
                    .log(command.raw(), "error: switch `m` requires a value");
                return;
            }
            MessageOption::Provided(message) => message,
        };

        if self.repository().index().is_empty() {
            self.transcript_mut()
                .log(command.raw(), "nothing to commit, working tree clean");
            return;
        }

        let snapshot = self.repository().index().clone();
        let staged_count = snapshot.len();
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        let sequence = self.repository().commits().len() as u64;
        let id = CommitId::generate(&message, &timestamp, &snapshot, sequence);

        let output = format!("[main {id}] {message}\n {staged_count} file(s) changed");
        self.repository_mut()
            .record_commit(Commit::new(id, message, timestamp, snapshot));
        self.transcript_mut().log(command.raw(), output);
    }
}
