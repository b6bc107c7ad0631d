//! rawkv binary internals: argument parsing and command dispatch.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands};
pub use commands::run;
