//! Simulator data structures
//!
//! This module contains the domain types of the simulator:
//!
//! - `command`: Tokenized command lines and the commit message option rule
//! - `commit`: Immutable commit records and their abbreviated ids

pub mod command;
pub mod commit;
