//! Sync command implementation
//!
//! This module implements the `sync` command: one full pass over the target
//! month's documents.

use super::{exit_code_for, TargetArgs};
use crate::config::read_config;
use crate::core::sync::{SyncCoordinator, SyncSummary};
use crate::log_error_with_context;
use clap::Args;
use tokio::sync::watch;

/// Arguments for the sync command
#[derive(Args, Debug, Default)]
pub struct SyncArgs {
    /// Dry run mode - read and compare, never write
    #[arg(long)]
    pub dry_run: bool,

    /// Treat every document as expired regardless of its date
    #[arg(long)]
    pub force_expired: bool,

    #[command(flatten)]
    pub target: TargetArgs,
}

impl SyncArgs {
    /// Execute the sync command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting sync command");

        let mut config = match read_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        self.target.apply(&mut config.target);
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(exit_code_for(&e));
        }

        if config.application.dry_run {
            println!("🔍 DRY RUN MODE - No documents will be written");
            println!();
        }

        let coordinator = match SyncCoordinator::new(config, shutdown_signal) {
            Ok(c) => c.with_force_expired(self.force_expired),
            Err(e) => {
                tracing::error!(error = %e, "Failed to create sync coordinator");
                eprintln!("Failed to initialize sync: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        println!("🚀 Starting sync...");
        println!();

        let summary = match coordinator.execute().await {
            Ok(s) => s,
            Err(e) => {
                log_error_with_context!(&e, "Sync failed");
                eprintln!("Sync failed: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        summary.log_summary();
        print_summary(&summary);

        Ok(summary_exit_code(&summary))
    }
}

fn print_summary(summary: &SyncSummary) {
    for report in &summary.reports {
        let state = if report.expired { "expired" } else { "live" };
        println!(
            "  {:<24} {:<8} {}",
            report.identifier.as_str(),
            state,
            report.outcome.as_str()
        );
    }

    println!();
    println!("📊 Sync Summary:");
    println!("  Identifiers: {}", summary.total_identifiers);
    println!("  Processed: {}", summary.processed());
    println!("  Created: {}", summary.created);
    println!("  Updated: {}", summary.updated);
    println!("  Unchanged: {}", summary.unchanged);
    println!("  Conflicts: {}", summary.conflicts);
    println!("  Failed: {}", summary.failed);
    println!("  Expired: {}", summary.expired);
    if summary.forced_expired {
        println!("  All documents forced to expired");
    }
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!();

    if !summary.errors.is_empty() {
        println!("⚠️  Errors encountered:");
        for error in &summary.errors {
            println!("  - {:?}: {}", error.kind, error.message);
            if let Some(context) = &error.context {
                println!("    Context: {context}");
            }
        }
        println!();
    }
}

/// Exit code for a finished run
pub fn summary_exit_code(summary: &SyncSummary) -> i32 {
    if summary.interrupted {
        println!("⚠️  Sync interrupted. Run the same command again to finish.");
        tracing::info!("Sync interrupted by user signal");
        130
    } else if summary.is_successful() {
        println!("✅ Sync completed successfully!");
        0
    } else {
        println!("⚠️  Sync completed with failures");
        1
    }
}
