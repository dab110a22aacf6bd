use crate::areas::repository::RepositoryState;
use crate::areas::session::Session;
use crate::artifacts::command::CommandLine;
use derive_new::new;
use std::fmt::Write;

impl Session {
    /// `git status`, read-only
    pub(crate) fn status(&mut self, command: &CommandLine) {
        let report = StatusReport::new(self.repository()).render();
        self.transcript_mut().log(command.raw(), report);
    }
}

/// Formatter for the working tree status report
///
/// "Untracked" here is simply `files - index`: prior commits are not
/// consulted, so a committed file reappears as untracked once the index is
/// cleared. The tracked/modified distinction of real git is out of scope.
#[derive(new)]
struct StatusReport<'r> {
    repository: &'r RepositoryState,
}

impl<'r> StatusReport<'r> {
    fn render(&self) -> String {
        let staged = self.repository.index();
        let not_staged = self.repository.unstaged_files();

        let mut report = String::from("On branch main\n");

        if !staged.is_empty() {
            report.push_str("Changes to be committed:\n");
            report.push_str("  (use \"git restore --staged <file>...\" to unstage)\n");
            for file in staged {
                writeln!(report, "\tnew file:   {file}").unwrap();
            }
        }

        if !not_staged.is_empty() {
            report.push_str("\nUntracked files:\n");
            report.push_str("  (use \"git add <file>...\" to include in what will be committed)\n");
            for file in &not_staged {
                writeln!(report, "\t{file}").unwrap();
            }
        }

        if staged.is_empty() && not_staged.is_empty() {
            report.push_str("nothing to commit, working tree clean");
        }

        report.trim_end().to_string()
    }
}
