#![allow(dead_code)]

use fake::Fake;
use fake::faker::lorem::en::{Word, Words};
use gitsim::Session;

/// Run a batch of command lines through a fresh session
pub fn run_session(lines: &[&str]) -> Session {
    let mut session = Session::new();
    for line in lines {
        session.run(line);
    }
    session
}

/// Output of the most recent command entry, empty if none
pub fn last_output(session: &Session) -> &str {
    session.transcript().last_output().unwrap_or("")
}

/// Extract the commit id from a `[main <id>] <message>` commit confirmation
pub fn commit_id_from_output(output: &str) -> &str {
    output
        .strip_prefix("[main ")
        .and_then(|rest| rest.split(']').next())
        .expect("output is not a commit confirmation")
}

pub fn random_file_name() -> String {
    format!("{}.txt", Word().fake::<String>())
}

pub fn random_commit_message() -> String {
    Words(3..6).fake::<Vec<String>>().join(" ")
}
