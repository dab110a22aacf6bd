use crate::areas::session::Session;
use crate::artifacts::command::CommandLine;
use crate::artifacts::commit::Commit;
use std::fmt::Write;

impl Session {
    /// `git log` or `git log --oneline`, newest first
    pub(crate) fn log(&mut self, command: &CommandLine) {
        let commits = self.repository().commits();

        let mut output = String::new();
        for commit in commits.iter().rev() {
            if command.has_flag("--oneline") {
                show_commit_oneline(&mut output, commit);
            } else {
                show_commit_medium(&mut output, commit);
            }
        }

        let output = output.trim_end().to_string();
        self.transcript_mut().log(command.raw(), output);
    }
}

fn show_commit_oneline(output: &mut String, commit: &Commit) {
    writeln!(output, "{} {}", commit.id(), commit.message()).unwrap();
}

fn show_commit_medium(output: &mut String, commit: &Commit) {
    writeln!(output, "commit {}", commit.id()).unwrap();
    writeln!(output, "Date:   {}", commit.timestamp()).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "    {}", commit.message()).unwrap();
    writeln!(output).unwrap();
}
