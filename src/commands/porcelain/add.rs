use crate::areas::session::Session;
use crate::artifacts::command::CommandLine;

impl Session {
    /// `git add <target>` or `git add .`
    ///
    /// Staging an unknown pathspec is rejected without mutation; success
    /// logs an entry with empty output, as real git does.
    pub(crate) fn add(&mut self, command: &CommandLine) {
        let output = match command.token(2) {
            None => "nothing specified, nothing added.".to_string(),
            Some(".") => {
                self.repository_mut().stage_all();
                String::new()
            }
            Some(target) => {
                if self.repository_mut().stage(target) {
                    String::new()
                } else {
                    format!("fatal: pathspec '{target}' did not match any files")
                }
            }
        };

        self.transcript_mut().log(command.raw(), output);
    }
}
