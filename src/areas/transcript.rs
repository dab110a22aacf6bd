/// Banner seeded as the first transcript entry of every fresh session
pub const WELCOME: &str = "Welcome to Git Simulator! Type 'git init' to start.";

/// One line of terminal history
///
/// A `Command` entry pairs the submitted line with its textual result; the
/// result may be empty (e.g. `touch`), which still counts as an entry. A
/// `Notice` is a line the simulator itself emits, currently only the welcome
/// banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEntry {
    Notice(String),
    Command { input: String, output: String },
}

/// Append-only record of commands and their results
///
/// Entries are never rewritten or truncated during a session; the only way to
/// drop them is the full session reset, which replaces the transcript
/// wholesale.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// A fresh transcript carrying the welcome banner
    pub(crate) fn seeded() -> Self {
        Self {
            entries: vec![TranscriptEntry::Notice(WELCOME.to_string())],
        }
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// The output of the most recent command entry, if any
    pub fn last_output(&self) -> Option<&str> {
        self.entries.iter().rev().find_map(|entry| match entry {
            TranscriptEntry::Command { output, .. } => Some(output.as_str()),
            TranscriptEntry::Notice(_) => None,
        })
    }

    pub(crate) fn log(&mut self, input: &str, output: impl Into<String>) {
        self.entries.push(TranscriptEntry::Command {
            input: input.to_string(),
            output: output.into(),
        });
    }

    /// Render the whole history as terminal text
    ///
    /// Commands are prefixed with `$ `; non-empty outputs follow on their own
    /// line(s).
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        for entry in &self.entries {
            match entry {
                TranscriptEntry::Notice(text) => lines.push(text.clone()),
                TranscriptEntry::Command { input, output } => {
                    lines.push(format!("$ {input}"));
                    if !output.is_empty() {
                        lines.push(output.clone());
                    }
                }
            }
        }
        lines.join("\n")
    }
}
