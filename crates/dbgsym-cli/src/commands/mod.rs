//! Subcommand implementations.

pub mod completion;
pub mod extract;
pub mod fetch;
pub mod list;
