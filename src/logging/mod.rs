//! Logging and observability
//!
//! Structured logging with:
//! - Configurable log levels
//! - Console output
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use playlist_sync::logging::init_logging;
//! use playlist_sync::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of a sync run
///
/// # Example
///
/// ```no_run
/// use playlist_sync::log_sync_start;
///
/// log_sync_start!("OKTOBER", 2026, 31, "owner/repo@main");
/// ```
#[macro_export]
macro_rules! log_sync_start {
    ($month:expr, $year:expr, $count:expr, $location:expr) => {
        tracing::info!(
            month = %$month,
            year = $year,
            identifiers = $count,
            location = %$location,
            "Starting sync"
        );
    };
}

/// Log the outcome for one identifier
///
/// Errors log at warn, everything else at info.
///
/// # Example
///
/// ```no_run
/// use playlist_sync::log_identifier_outcome;
/// use playlist_sync::core::sync::SyncOutcome;
///
/// log_identifier_outcome!("WN01OKTOBER2026", false, SyncOutcome::Created);
/// ```
#[macro_export]
macro_rules! log_identifier_outcome {
    ($identifier:expr, $expired:expr, $outcome:expr) => {
        match &$outcome {
            $crate::core::sync::SyncOutcome::Conflict(message)
            | $crate::core::sync::SyncOutcome::Failed(message) => tracing::warn!(
                identifier = %$identifier,
                expired = $expired,
                outcome = $outcome.as_str(),
                error = %message,
                "Identifier not synced"
            ),
            _ => tracing::info!(
                identifier = %$identifier,
                expired = $expired,
                outcome = $outcome.as_str(),
                "Identifier synced"
            ),
        }
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use playlist_sync::log_error_with_context;
/// use playlist_sync::domain::SyncError;
///
/// let error = SyncError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
