//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for playlist-sync using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// playlist-sync - keeps dated playlist files in step with a live source
#[derive(Parser, Debug)]
#[command(name = "playlist-sync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "playlist-sync.toml", env = "PLAYLIST_SYNC_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PLAYLIST_SYNC_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sync every document of the target month with the live source
    Sync(commands::sync::SyncArgs),

    /// Show identifiers, dates, cutoffs and expiry without touching the network
    Plan(commands::plan::PlanArgs),

    /// Create the global disable marker in the store
    DisableSync(commands::disable::DisableArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
