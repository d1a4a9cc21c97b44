//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::SyncConfig;
use super::secret::secret_string;
use crate::domain::errors::SyncError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Environment variable the store token falls back to
pub const TOKEN_ENV_VAR: &str = "GITHUB_PAT";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into SyncConfig
/// 4. Applies environment variable overrides (PLAYLIST_SYNC_* prefix, GITHUB_PAT)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails (including a missing store token)
///
/// # Examples
///
/// ```no_run
/// use playlist_sync::config::loader::load_config;
///
/// let config = load_config("playlist-sync.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<SyncConfig> {
    let config = read_config(path)?;
    config.validate()?;
    Ok(config)
}

/// Loads configuration without validating it
///
/// Used by commands that apply CLI overrides before validating.
pub fn read_config(path: impl AsRef<Path>) -> Result<SyncConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SyncError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SyncError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: SyncConfig = toml::from_str(&contents)
        .map_err(|e| SyncError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    tracing::debug!(
        config_path = %path.display(),
        repository = %config.store.repository,
        branch = %config.store.branch,
        "Configuration read"
    );

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied verbatim.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| SyncError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(SyncError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the PLAYLIST_SYNC_* prefix
///
/// Environment variables follow the pattern: PLAYLIST_SYNC_<SECTION>_<KEY>.
/// The store token additionally falls back to `GITHUB_PAT` when the file
/// does not set one.
fn apply_env_overrides(config: &mut SyncConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("PLAYLIST_SYNC_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("PLAYLIST_SYNC_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // Source overrides
    if let Ok(val) = std::env::var("PLAYLIST_SYNC_SOURCE_URL") {
        config.source.url = val;
    }

    // Store overrides
    if let Ok(val) = std::env::var("PLAYLIST_SYNC_STORE_REPOSITORY") {
        config.store.repository = val;
    }
    if let Ok(val) = std::env::var("PLAYLIST_SYNC_STORE_BRANCH") {
        config.store.branch = val;
    }
    if let Ok(val) = std::env::var("PLAYLIST_SYNC_STORE_HONOR_DISABLE_MARKER") {
        config.store.honor_disable_marker = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("PLAYLIST_SYNC_STORE_TOKEN") {
        config.store.token = Some(secret_string(val));
    } else if config.store.token.is_none() {
        if let Ok(val) = std::env::var(TOKEN_ENV_VAR) {
            config.store.token = Some(secret_string(val));
        }
    }

    // Target overrides
    if let Ok(val) = std::env::var("PLAYLIST_SYNC_TARGET_MONTH") {
        config.target.month = val;
    }
    if let Ok(val) = std::env::var("PLAYLIST_SYNC_TARGET_YEAR") {
        if let Ok(year) = val.parse() {
            config.target.year = year;
        }
    }
    if let Ok(val) = std::env::var("PLAYLIST_SYNC_TARGET_PREFIX") {
        config.target.prefix = val;
    }

    // Pacing overrides
    if let Ok(val) = std::env::var("PLAYLIST_SYNC_SYNC_PACING_DELAY_MS") {
        if let Ok(delay) = val.parse() {
            config.sync.pacing_delay_ms = delay;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("PLAYLIST_SYNC_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("PLAYLIST_SYNC_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
