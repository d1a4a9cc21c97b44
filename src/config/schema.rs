//! Configuration schema types
//!
//! This module defines the configuration structure for playlist-sync. The whole
//! structure is built once at process start and handed by reference to every
//! component that needs it.

use crate::config::SecretString;
use crate::domain::{Month, Result, SyncError};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

/// Main playlist-sync configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Upstream playlist source
    pub source: SourceConfig,

    /// Destination repository on GitHub
    pub store: StoreConfig,

    /// Expiry cutoff settings
    #[serde(default)]
    pub expiry: ExpiryConfig,

    /// Which month of documents this run maintains
    pub target: TargetConfig,

    /// Write pacing
    #[serde(default)]
    pub sync: PacingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SyncConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// - [`SyncError::MissingCredential`] when no store token is configured
    /// - [`SyncError::UnrecognizedMonth`] when `target.month` is not a known name
    /// - [`SyncError::Configuration`] for every other invalid value
    pub fn validate(&self) -> Result<()> {
        self.application
            .validate()
            .map_err(SyncError::Configuration)?;
        self.source.validate().map_err(SyncError::Configuration)?;
        self.store.validate()?;
        self.expiry.validate()?;
        self.target.validate()?;
        self.logging.validate().map_err(SyncError::Configuration)?;
        Ok(())
    }

    /// Validates only what offline planning needs: target and expiry
    ///
    /// No credential is required.
    pub fn validate_schedule(&self) -> Result<()> {
        self.expiry.validate()?;
        self.target.validate()
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (read and compare, never write)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Upstream playlist source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// URL of the live playlist
    pub url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// User-Agent header sent with the request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl SourceConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        validate_http_url("source.url", &self.url)?;
        if self.timeout_seconds == 0 {
            return Err("source.timeout_seconds must be greater than 0".to_string());
        }
        if self.user_agent.trim().is_empty() {
            return Err("source.user_agent cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Destination repository on GitHub
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Repository in `owner/name` form
    pub repository: String,

    /// Branch every read and write targets
    #[serde(default = "default_branch")]
    pub branch: String,

    /// GitHub REST API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Personal access token
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub token: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Commit message used for every create and update
    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    /// Path of the global "sync disabled" marker file
    #[serde(default = "default_disable_marker_path")]
    pub disable_marker_path: String,

    /// Whether the marker forces every document to the expired placeholder
    #[serde(default)]
    pub honor_disable_marker: bool,
}

impl StoreConfig {
    fn validate(&self) -> Result<()> {
        use secrecy::ExposeSecret;

        let parts: Vec<&str> = self.repository.split('/').collect();
        if parts.len() != 2 || parts.iter().any(|p| p.trim().is_empty()) {
            return Err(SyncError::Configuration(format!(
                "store.repository must be in 'owner/name' form, got '{}'",
                self.repository
            )));
        }

        if self.branch.trim().is_empty() {
            return Err(SyncError::Configuration(
                "store.branch cannot be empty".to_string(),
            ));
        }

        validate_http_url("store.api_base_url", &self.api_base_url)
            .map_err(SyncError::Configuration)?;

        if self.timeout_seconds == 0 {
            return Err(SyncError::Configuration(
                "store.timeout_seconds must be greater than 0".to_string(),
            ));
        }

        if self.commit_message.trim().is_empty() {
            return Err(SyncError::Configuration(
                "store.commit_message cannot be empty".to_string(),
            ));
        }

        if self.disable_marker_path.trim().is_empty() {
            return Err(SyncError::Configuration(
                "store.disable_marker_path cannot be empty".to_string(),
            ));
        }

        let has_token = self
            .token
            .as_ref()
            .map(|t| !t.expose_secret().is_blank())
            .unwrap_or(false);
        if !has_token {
            return Err(SyncError::MissingCredential(
                "set store.token or the GITHUB_PAT environment variable".to_string(),
            ));
        }

        Ok(())
    }

    /// Repository owner
    pub fn owner(&self) -> &str {
        self.repository.split('/').next().unwrap_or_default()
    }

    /// Repository name
    pub fn repo_name(&self) -> &str {
        self.repository.split('/').nth(1).unwrap_or_default()
    }
}

/// Expiry cutoff configuration
///
/// A document expires on its own date at `hour:minute` in the fixed
/// `utc_offset_hours` zone (WIB, UTC+7, by default).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpiryConfig {
    /// Local cutoff hour (0-23)
    #[serde(default = "default_expiry_hour")]
    pub hour: u32,

    /// Local cutoff minute (0-59)
    #[serde(default)]
    pub minute: u32,

    /// Fixed UTC offset in whole hours
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,
}

impl ExpiryConfig {
    /// Checks the cutoff time and offset
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Configuration`] for an hour past 23, a minute past
    /// 59 or an offset outside -12..=14.
    pub fn validate(&self) -> Result<()> {
        if self.hour > 23 {
            return Err(SyncError::Configuration(format!(
                "expiry.hour must be 0-23, got {}",
                self.hour
            )));
        }
        if self.minute > 59 {
            return Err(SyncError::Configuration(format!(
                "expiry.minute must be 0-59, got {}",
                self.minute
            )));
        }
        if !(-12..=14).contains(&self.utc_offset_hours) {
            return Err(SyncError::Configuration(format!(
                "expiry.utc_offset_hours must be between -12 and 14, got {}",
                self.utc_offset_hours
            )));
        }
        Ok(())
    }

    /// The fixed offset cutoffs and "now" are read in
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the offset is out of range.
    pub fn offset(&self) -> Result<FixedOffset> {
        self.utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                SyncError::Configuration(format!(
                    "Invalid UTC offset: {} hours",
                    self.utc_offset_hours
                ))
            })
    }
}

impl Default for ExpiryConfig {
    fn default() -> Self {
        Self {
            hour: default_expiry_hour(),
            minute: 0,
            utc_offset_hours: default_utc_offset_hours(),
        }
    }
}

/// Documents maintained by this run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Indonesian month name (case-insensitive)
    pub month: String,

    /// Four-digit year
    pub year: i32,

    /// Identifier prefix, e.g. `WN`
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl TargetConfig {
    fn validate(&self) -> Result<()> {
        Month::from_name(&self.month)?;
        if !(1000..=9999).contains(&self.year) {
            return Err(SyncError::Configuration(format!(
                "target.year must have four digits, got {}",
                self.year
            )));
        }
        if self.prefix.contains('/') || self.prefix.contains("..") {
            return Err(SyncError::Configuration(format!(
                "target.prefix must not contain path separators, got '{}'",
                self.prefix
            )));
        }
        Ok(())
    }
}

/// Write pacing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Delay after each write, in milliseconds
    #[serde(default = "default_pacing_delay_ms")]
    pub pacing_delay_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            pacing_delay_ms: default_pacing_delay_ms(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation (daily, hourly, never)
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err(
                "logging.local_path cannot be empty when local logging is enabled".to_string(),
            );
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

fn validate_http_url(field: &str, value: &str) -> std::result::Result<(), String> {
    let parsed = url::Url::parse(value).map_err(|e| format!("{field} is not a valid URL: {e}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!(
            "{field} must use http or https, got '{other}'"
        )),
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    "MagelifeSync/1.0 (+https://lynk.id/magelife)".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_api_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_commit_message() -> String {
    "Auto update: Sync playlist from source + footer update".to_string()
}

fn default_disable_marker_path() -> String {
    ".SYNC_DISABLED".to_string()
}

fn default_expiry_hour() -> u32 {
    13
}

fn default_utc_offset_hours() -> i32 {
    7
}

fn default_prefix() -> String {
    "WN".to_string()
}

fn default_pacing_delay_ms() -> u64 {
    700
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}
