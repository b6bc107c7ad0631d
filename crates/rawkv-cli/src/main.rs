//! RawKV command-line interface.
//!
//! # Usage
//!
//! ```bash
//! rawkv put --cf users alice '{"name":"Alice"}'
//! rawkv get --cf users alice
//! rawkv scan --cf users --start a --limit 10
//! rawkv stats
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/rawkv/config.toml)
//! 3. Environment variables (RAWKV_*)
//! 4. CLI flags

use anyhow::Result;
use clap::Parser;

use rawkv_cli::{commands, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::run(cli)
}
