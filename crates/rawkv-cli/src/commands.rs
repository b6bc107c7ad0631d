//! Command handlers for the rawkv binary.
//!
//! Each invocation opens the store directly at the configured path,
//! runs one operation through the service layer, and exits.

use std::fs;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::info;

use rawkv_service::RawKvService;
use rawkv_storage::{StandaloneStorage, Storage};
use rawkv_types::{
    RawDeleteRequest, RawGetRequest, RawPutRequest, RawScanRequest, Settings,
};

use crate::cli::{Cli, Commands};

/// Resolve settings, open the store, and dispatch the command.
pub fn run(cli: Cli) -> Result<()> {
    let mut settings = Settings::load(cli.config.as_deref())?;

    // Apply CLI overrides (highest precedence)
    if let Some(db_path) = cli.db_path {
        settings.db_path = db_path;
    }
    if let Some(log_level) = cli.log_level {
        settings.log_level = log_level;
    }

    init_logging(&settings.log_level);

    let db_path = settings.db_path();
    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent).context("Failed to create database directory")?;
    }

    let storage =
        Arc::new(StandaloneStorage::open(&db_path).context("Failed to open storage")?);
    let service = RawKvService::new(Arc::clone(&storage));

    match cli.command {
        Commands::Get { cf, key } => {
            let resp = service.raw_get(&RawGetRequest {
                cf,
                key: key.into_bytes(),
            });
            if let Some(err) = resp.error {
                bail!("get failed: {err}");
            }
            if resp.not_found {
                println!("(not found)");
            } else {
                println!("{}", String::from_utf8_lossy(&resp.value));
            }
        }
        Commands::Put { cf, key, value } => {
            let resp = service.raw_put(&RawPutRequest {
                cf,
                key: key.into_bytes(),
                value: value.into_bytes(),
            });
            if let Some(err) = resp.error {
                bail!("put failed: {err}");
            }
            println!("OK");
        }
        Commands::Delete { cf, key } => {
            let resp = service.raw_delete(&RawDeleteRequest {
                cf,
                key: key.into_bytes(),
            });
            if let Some(err) = resp.error {
                bail!("delete failed: {err}");
            }
            println!("OK");
        }
        Commands::Scan {
            cf,
            start,
            limit,
            json,
        } => {
            let resp = service.raw_scan(&RawScanRequest {
                cf,
                start_key: start.into_bytes(),
                limit,
            });
            if let Some(err) = resp.error {
                bail!("scan failed: {err}");
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&resp.kvs)?);
            } else {
                for pair in &resp.kvs {
                    println!(
                        "{}\t{}",
                        String::from_utf8_lossy(&pair.key),
                        String::from_utf8_lossy(&pair.value)
                    );
                }
            }
        }
        Commands::Stats => {
            let stats = storage.stats()?;
            println!("Total entries:  {}", stats.total_entries);
            println!("Disk usage:     {} bytes", stats.disk_usage_bytes);
            for (cf, count) in &stats.entries_per_cf {
                println!("  {cf}: {count}");
            }
        }
        Commands::Compact => {
            storage.compact();
            println!("OK");
        }
        Commands::Flush => {
            storage.flush()?;
            println!("OK");
        }
    }

    info!("Command complete");
    Ok(())
}

fn init_logging(log_level: &str) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .finish();
    // A subscriber may already be installed when run is invoked more than
    // once in the same process; keep the first one.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
