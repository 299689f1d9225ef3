//! CLI subcommand implementations.

pub mod check;
pub mod days;
pub mod layout;
mod util;
