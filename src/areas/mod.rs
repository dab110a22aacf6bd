//! Core session components
//!
//! This module contains the state containers of the simulator:
//!
//! - `repository`: Simulated repository state (working directory, index, commits)
//! - `session`: Owner of one repository state plus one transcript
//! - `transcript`: Append-only record of commands and their textual results

pub mod repository;
pub mod session;
pub mod transcript;
