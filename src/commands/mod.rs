//! Command implementations
//!
//! This module contains all command handlers, organized into two categories:
//!
//! - `porcelain`: The simulated `git` subcommands (init, status, add, commit, log)
//! - `shell`: The non-git verbs of the simulator (touch, reset, help)
//!
//! Each handler lives in its own file as an `impl Session` block; dispatch
//! happens here. Handlers never return errors: every failure becomes a
//! descriptive transcript line and the repository state is left untouched.

pub mod porcelain;
pub mod shell;

use crate::areas::session::Session;
use crate::artifacts::command::CommandLine;

pub(crate) const NOT_A_REPOSITORY: &str =
    "fatal: not a git repository (or any of the parent directories): .git";

impl Session {
    /// Run one command line against the session
    ///
    /// Blank lines are ignored without a transcript entry. Dispatch order
    /// matters: `reset` and `help` are always available, `git init` bypasses
    /// the initialization gate, and everything else is rejected until the
    /// repository exists.
    pub fn run(&mut self, line: &str) {
        let Some(command) = CommandLine::parse(line) else {
            return;
        };

        match command.token(0) {
            Some("reset") => self.reset(),
            Some("help") => self.help(&command),
            Some("git") if command.token(1) == Some("init") => self.init(&command),
            _ if !self.repository().initialized() => {
                self.transcript_mut().log(command.raw(), NOT_A_REPOSITORY);
            }
            Some("touch") => self.touch(&command),
            Some("git") => self.git(&command),
            Some(verb) => {
                let output = format!("{verb}: command not found");
                self.transcript_mut().log(command.raw(), output);
            }
            None => unreachable!("parsed command lines have at least one token"),
        }
    }

    /// Run a newline-separated batch of commands, in order
    ///
    /// State carries forward between lines within the batch.
    pub fn run_script(&mut self, input: &str) {
        for line in input.lines() {
            self.run(line);
        }
    }

    fn git(&mut self, command: &CommandLine) {
        match command.token(1) {
            None => {
                self.transcript_mut().log(command.raw(), "usage: git <command>");
            }
            Some("status") => self.status(command),
            Some("add") => self.add(command),
            Some("commit") => self.commit(command),
            Some("log") => self.log(command),
            Some(subcmd) => {
                let output = format!("git: '{subcmd}' is not a git command. See 'git --help'.");
                self.transcript_mut().log(command.raw(), output);
            }
        }
    }
}
