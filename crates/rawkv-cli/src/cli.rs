//! CLI argument parsing for the rawkv binary.
//!
//! CLI flags override config file and environment settings.

use clap::{Parser, Subcommand};

/// RawKV
///
/// A single-node raw key-value store with column families.
#[derive(Parser, Debug)]
#[command(name = "rawkv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default ~/.config/rawkv/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override database path
    #[arg(long, global = true)]
    pub db_path: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Store commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Get the value of a key
    Get {
        /// Column family
        #[arg(long, default_value = "default")]
        cf: String,

        /// Key to look up
        key: String,
    },

    /// Store a key-value pair
    Put {
        /// Column family
        #[arg(long, default_value = "default")]
        cf: String,

        /// Key to store
        key: String,

        /// Value to store
        value: String,
    },

    /// Delete a key
    Delete {
        /// Column family
        #[arg(long, default_value = "default")]
        cf: String,

        /// Key to delete
        key: String,
    },

    /// Scan keys in ascending order
    Scan {
        /// Column family
        #[arg(long, default_value = "default")]
        cf: String,

        /// Start from the first key >= this value
        #[arg(long, default_value = "")]
        start: String,

        /// Maximum number of pairs to return
        #[arg(long, default_value = "100")]
        limit: u32,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show store statistics
    Stats,

    /// Trigger manual compaction
    Compact,

    /// Flush buffered writes to disk
    Flush,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
