//! An educational Git command simulator
//!
//! This crate mimics the observable behavior of a small subset of the Git
//! command-line tool without touching any real filesystem or object database.
//! A [`Session`] owns the simulated repository state and an append-only
//! transcript; callers feed it command lines one at a time and read both back
//! to render a terminal-style view.
//!
//! ```
//! use gitsim::Session;
//!
//! let mut session = Session::new();
//! session.run("git init");
//! session.run("touch a.txt");
//! session.run("git add a.txt");
//! session.run("git commit -m \"first\"");
//!
//! assert_eq!(session.repository().commits().len(), 1);
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use areas::session::Session;
