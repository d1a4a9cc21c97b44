//! Disable-sync command implementation
//!
//! Writes the global disable marker into the store. Syncs that honor the
//! marker then serve the expired placeholder for every document. In dry-run
//! mode the store is only read.

use super::exit_code_for;
use crate::adapters::store::GitHubStore;
use crate::config::load_config;
use crate::core::sync::{ensure_marker, MarkerStatus, MARKER_COMMIT_MESSAGE};
use crate::domain::SyncError;
use chrono::Utc;
use clap::Args;

/// Arguments for the disable-sync command
#[derive(Args, Debug, Default)]
pub struct DisableArgs {
    /// Dry run mode - check for the marker, never write it
    #[arg(long)]
    pub dry_run: bool,
}

impl DisableArgs {
    /// Execute the disable-sync command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Configuration error: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        let mut store_config = config.store.clone();
        store_config.commit_message = MARKER_COMMIT_MESSAGE.to_string();
        let store = match GitHubStore::new(&store_config) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Failed to initialize store: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        let now = match config.expiry.offset() {
            Ok(offset) => Utc::now().with_timezone(&offset),
            Err(e) => return Ok(exit_code_for(&e)),
        };

        let dry_run = self.dry_run || config.application.dry_run;
        if dry_run {
            println!("🔍 DRY RUN MODE - The marker will not be written");
            println!();
        }

        let path = &config.store.disable_marker_path;
        match ensure_marker(&store, path, now, dry_run).await {
            Ok(MarkerStatus::Created) => {
                println!("✅ Created {path} in {}", config.store.repository);
                if !config.store.honor_disable_marker {
                    println!("   Note: store.honor_disable_marker is false, syncs will ignore it");
                }
                Ok(0)
            }
            Ok(MarkerStatus::AlreadyPresent) => {
                println!("ℹ️  {path} already exists in {}", config.store.repository);
                Ok(0)
            }
            Ok(MarkerStatus::WouldCreate) => {
                println!("Would create {path} in {}", config.store.repository);
                Ok(0)
            }
            Err(e) => {
                let err = SyncError::from(e);
                tracing::error!(error = %err, "Failed to write disable marker");
                eprintln!("Failed to write disable marker: {err}");
                Ok(exit_code_for(&err))
            }
        }
    }
}
