use crate::areas::session::Session;
use crate::artifacts::command::CommandLine;

impl Session {
    /// `touch <filename>`
    ///
    /// Creating an existing file is a no-op, like refreshing a timestamp.
    /// Either way an entry with empty output is logged, mirroring the silent
    /// success of the real command.
    pub(crate) fn touch(&mut self, command: &CommandLine) {
        let Some(filename) = command.token(1) else {
            self.transcript_mut().log(command.raw(), "usage: touch <filename>");
            return;
        };

        self.repository_mut().track_file(filename);
        self.transcript_mut().log(command.raw(), "");
    }
}
