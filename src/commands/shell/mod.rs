//! Non-git verbs of the simulator

pub(crate) mod help;
pub(crate) mod reset;
pub(crate) mod touch;
