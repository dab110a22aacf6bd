//! Simulated `git` subcommands

pub(crate) mod add;
pub(crate) mod commit;
pub(crate) mod init;
pub(crate) mod log;
pub(crate) mod status;
