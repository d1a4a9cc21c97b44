//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold `ENV_MUTEX` so they do not
//! interfere with each other.

use playlist_sync::config::{load_config, read_config};
use playlist_sync::domain::SyncError;
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    for var in [
        "GITHUB_PAT",
        "PLAYLIST_SYNC_APPLICATION_LOG_LEVEL",
        "PLAYLIST_SYNC_APPLICATION_DRY_RUN",
        "PLAYLIST_SYNC_STORE_TOKEN",
        "PLAYLIST_SYNC_STORE_BRANCH",
        "PLAYLIST_SYNC_TARGET_MONTH",
        "PLAYLIST_SYNC_TARGET_YEAR",
        "PLAYLIST_SYNC_SYNC_PACING_DELAY_MS",
        "TEST_PLAYLIST_SOURCE_URL",
    ] {
        std::env::remove_var(var);
    }
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const MINIMAL: &str = r#"
[source]
url = "https://example.com/live.m3u"

[store]
repository = "owner/playlists"

[target]
month = "OKTOBER"
year = 2026
"#;

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "debug"
dry_run = true

[source]
url = "https://example.com/live.m3u"
timeout_seconds = 10
user_agent = "custom-agent/1.0"

[store]
repository = "owner/playlists"
branch = "release"
api_base_url = "https://github.example.com/api/v3"
token = "ghp_inline"
timeout_seconds = 15
commit_message = "Sync"
disable_marker_path = "control/.SYNC_DISABLED"
honor_disable_marker = true

[expiry]
hour = 12
minute = 30
utc_offset_hours = 8

[target]
month = "desember"
year = 2025
prefix = "DC"

[sync]
pacing_delay_ms = 250

[logging]
local_enabled = true
local_path = "/tmp/playlist-sync-logs"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert!(config.application.dry_run);
    assert_eq!(config.source.timeout_seconds, 10);
    assert_eq!(config.source.user_agent, "custom-agent/1.0");
    assert_eq!(config.store.owner(), "owner");
    assert_eq!(config.store.repo_name(), "playlists");
    assert_eq!(config.store.branch, "release");
    assert_eq!(config.store.disable_marker_path, "control/.SYNC_DISABLED");
    assert!(config.store.honor_disable_marker);
    assert_eq!(config.expiry.hour, 12);
    assert_eq!(config.expiry.minute, 30);
    assert_eq!(config.expiry.utc_offset_hours, 8);
    assert_eq!(config.target.prefix, "DC");
    assert_eq!(config.sync.pacing_delay_ms, 250);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_defaults_applied() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("GITHUB_PAT", "ghp_from_env");

    let file = write_config(MINIMAL);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.store.branch, "main");
    assert_eq!(config.store.api_base_url, "https://api.github.com");
    assert_eq!(
        config.store.commit_message,
        "Auto update: Sync playlist from source + footer update"
    );
    assert_eq!(config.store.disable_marker_path, ".SYNC_DISABLED");
    assert!(!config.store.honor_disable_marker);
    assert_eq!(config.expiry.hour, 13);
    assert_eq!(config.expiry.minute, 0);
    assert_eq!(config.expiry.utc_offset_hours, 7);
    assert_eq!(config.target.prefix, "WN");
    assert_eq!(config.sync.pacing_delay_ms, 700);
    assert_eq!(config.source.timeout_seconds, 30);
    assert_eq!(
        config.source.user_agent,
        "MagelifeSync/1.0 (+https://lynk.id/magelife)"
    );

    cleanup_env_vars();
}

#[test]
fn test_token_falls_back_to_github_pat() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("GITHUB_PAT", "ghp_from_env");

    let file = write_config(MINIMAL);
    let config = load_config(file.path()).unwrap();
    let token = config.store.token.unwrap();
    assert_eq!(token.expose_secret(), "ghp_from_env");

    cleanup_env_vars();
}

#[test]
fn test_missing_token_is_missing_credential() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(MINIMAL);
    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, SyncError::MissingCredential(_)));

    // Reading without validation still works, e.g. for offline planning
    let config = read_config(file.path()).unwrap();
    assert!(config.store.token.is_none());
    assert!(config.validate_schedule().is_ok());
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("PLAYLIST_SYNC_STORE_TOKEN", "ghp_override");
    std::env::set_var("PLAYLIST_SYNC_STORE_BRANCH", "staging");
    std::env::set_var("PLAYLIST_SYNC_TARGET_MONTH", "NOVEMBER");
    std::env::set_var("PLAYLIST_SYNC_TARGET_YEAR", "2025");
    std::env::set_var("PLAYLIST_SYNC_SYNC_PACING_DELAY_MS", "0");
    std::env::set_var("PLAYLIST_SYNC_APPLICATION_DRY_RUN", "true");

    let file = write_config(MINIMAL);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.store.branch, "staging");
    assert_eq!(config.target.month, "NOVEMBER");
    assert_eq!(config.target.year, 2025);
    assert_eq!(config.sync.pacing_delay_ms, 0);
    assert!(config.application.dry_run);
    assert_eq!(
        config.store.token.unwrap().expose_secret(),
        "ghp_override"
    );

    cleanup_env_vars();
}

#[test]
fn test_env_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_PLAYLIST_SOURCE_URL", "https://cdn.example.com/live.m3u");
    std::env::set_var("GITHUB_PAT", "ghp_from_env");

    let file = write_config(
        r#"
# url = "${NOT_SET_ANYWHERE}"
[source]
url = "${TEST_PLAYLIST_SOURCE_URL}"

[store]
repository = "owner/playlists"

[target]
month = "OKTOBER"
year = 2026
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.source.url, "https://cdn.example.com/live.m3u");

    cleanup_env_vars();
}

#[test]
fn test_unknown_month_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("GITHUB_PAT", "ghp_from_env");

    let file = write_config(&MINIMAL.replace("OKTOBER", "October"));
    let err = load_config(file.path()).unwrap_err();
    match err {
        SyncError::UnrecognizedMonth { given, valid } => {
            assert_eq!(given, "OCTOBER");
            assert!(valid.contains("OKTOBER"));
            assert!(valid.contains("DESEMBER"));
        }
        other => panic!("unexpected error: {other}"),
    }

    cleanup_env_vars();
}

#[test]
fn test_missing_file() {
    let err = load_config("/nonexistent/playlist-sync.toml").unwrap_err();
    assert!(matches!(err, SyncError::Configuration(_)));
}

#[test]
fn test_invalid_toml() {
    let file = write_config("[source\nurl = ");
    assert!(matches!(
        read_config(file.path()),
        Err(SyncError::Configuration(_))
    ));
}
