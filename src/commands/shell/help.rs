use crate::areas::session::Session;
use crate::artifacts::command::CommandLine;

/// Supported commands, in display order
const SUPPORTED_COMMANDS: &[&str] = &[
    "git init",
    "touch <filename>",
    "git status",
    "git add <file> | .",
    "git commit -m <message>",
    "git log [--oneline]",
    "reset",
    "help",
];

/// Usage summary per supported command
static COMMAND_SUMMARIES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "git init" => "Initialize a new repository",
    "touch <filename>" => "Create a file in the working directory",
    "git status" => "Show the working tree status",
    "git add <file> | ." => "Stage a file (or everything) for commit",
    "git commit -m <message>" => "Record the staged files as a new commit",
    "git log [--oneline]" => "Show the commit history",
    "reset" => "Restart the simulator from scratch",
    "help" => "Show this command list",
};

impl Session {
    /// `help`, available before `git init` like `reset`
    pub(crate) fn help(&mut self, command: &CommandLine) {
        let width = SUPPORTED_COMMANDS
            .iter()
            .map(|usage| usage.len())
            .max()
            .unwrap_or(0);

        let output = SUPPORTED_COMMANDS
            .iter()
            .map(|usage| {
                let summary = *COMMAND_SUMMARIES.get(*usage).unwrap_or(&"");
                format!("{usage:width$}   {summary}")
            })
            .collect::<Vec<_>>()
            .join("\n");

        self.transcript_mut().log(command.raw(), output);
    }
}
