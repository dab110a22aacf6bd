use crate::areas::session::Session;
use crate::artifacts::command::CommandLine;

const INIT_OUTPUT: &str = "Initialized empty Git repository in /project/.git/";

impl Session {
    /// `git init`
    ///
    /// Safe to call repeatedly, but always clears files, index, and commits;
    /// re-initializing an existing repository wipes its history. The
    /// transcript is left alone.
    pub(crate) fn init(&mut self, command: &CommandLine) {
        self.repository_mut().initialize();
        self.transcript_mut().log(command.raw(), INIT_OUTPUT);
    }
}
