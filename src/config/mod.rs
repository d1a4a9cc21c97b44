//! Configuration management for playlist-sync.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! playlist-sync uses a TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `PLAYLIST_SYNC_*` environment overrides
//! - Default values for optional settings
//! - Validation before any network call is made
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [source]
//! url = "https://raw.githubusercontent.com/owner/source/main/live.m3u"
//!
//! [store]
//! repository = "owner/playlists"
//! branch = "main"
//! token = "${GITHUB_PAT}"
//!
//! [expiry]
//! hour = 13
//! minute = 0
//! utc_offset_hours = 7
//!
//! [target]
//! month = "OKTOBER"
//! year = 2026
//! prefix = "WN"
//! ```
//!
//! When `store.token` is omitted, the `GITHUB_PAT` environment variable is used.
//! A configuration with neither fails validation with
//! [`SyncError::MissingCredential`](crate::domain::SyncError::MissingCredential).

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, read_config};
pub use schema::{
    ApplicationConfig, ExpiryConfig, LoggingConfig, PacingConfig, SourceConfig, StoreConfig,
    SyncConfig, TargetConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
