//! Integration tests for logging functionality
//!
//! A global subscriber can be installed once per process, so only one test
//! here calls `init_logging`.

use playlist_sync::config::LoggingConfig;
use playlist_sync::logging::init_logging;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "logs");
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_invalid_level_is_rejected_before_install() {
    let result = init_logging("verbose", &LoggingConfig::default());
    assert!(result.is_err());
}

#[test]
fn test_file_logging_creates_directory() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("nested").join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };

    assert!(!log_path.exists());
    let guard = init_logging("debug", &config).unwrap();
    tracing::info!(identifier = "WN01OKTOBER2026", "logging smoke test");
    drop(guard);

    assert!(log_path.is_dir());
    assert!(log_path.join("playlist-sync.log").exists());
}
