//! Tokenized command lines
//!
//! Parsing is plain whitespace splitting; there is no shell grammar. The one
//! concession to shell syntax is the commit message rule: everything after
//! `-m` is joined with single spaces and one layer of surrounding quote
//! characters is trimmed. That rule is deliberately not general quoting
//! support and applies nowhere else.

/// A single submitted line, split into whitespace-delimited tokens
///
/// Blank lines do not parse; they produce no transcript entry at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    raw: String,
    tokens: Vec<String>,
}

/// Result of looking for `-m <message...>` among the tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageOption {
    /// No `-m` token present
    Missing,
    /// `-m` present as the final token, with no message after it
    Empty,
    /// The joined, quote-trimmed message
    Provided(String),
}

impl CommandLine {
    /// Tokenize one raw input line; `None` for blank input
    pub fn parse(line: &str) -> Option<Self> {
        if line.trim().is_empty() {
            return None;
        }

        Some(Self {
            raw: line.to_string(),
            tokens: line.split_whitespace().map(str::to_string).collect(),
        })
    }

    /// The line exactly as submitted, for transcript logging
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Whether `flag` appears anywhere among the tokens
    pub fn has_flag(&self, flag: &str) -> bool {
        self.tokens.iter().any(|token| token == flag)
    }

    /// Extract the commit message per the `-m` rule
    pub fn commit_message(&self) -> MessageOption {
        let Some(position) = self.tokens.iter().position(|token| token == "-m") else {
            return MessageOption::Missing;
        };

        let rest = &self.tokens[position + 1..];
        if rest.is_empty() {
            return MessageOption::Empty;
        }

        let joined = rest.join(" ");
        MessageOption::Provided(trim_quotes(&joined).to_string())
    }
}

/// Trim one layer of quote characters from each end
///
/// Leading and trailing quotes are trimmed independently, so an unbalanced
/// `"msg` still loses its quote. This simulates the shell having consumed the
/// quotes, nothing more.
fn trim_quotes(message: &str) -> &str {
    let message = message
        .strip_prefix('"')
        .or_else(|| message.strip_prefix('\''))
        .unwrap_or(message);
    message
        .strip_suffix('"')
        .or_else(|| message.strip_suffix('\''))
        .unwrap_or(message)
}
