//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "playlist-sync.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing playlist-sync configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your source URL and repository", self.output);
                println!("  2. Export GITHUB_PAT (or put it in a .env file)");
                println!("  3. Preview: playlist-sync plan");
                println!("  4. Validate: playlist-sync validate-config");
                println!("  5. Run: playlist-sync sync --dry-run, then playlist-sync sync");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }
}

/// Sample configuration with every setting at its default
pub fn sample_config() -> &'static str {
    r#"# playlist-sync configuration

[application]
log_level = "info"
dry_run = false

[source]
url = "https://raw.githubusercontent.com/Xaffin/-/refs/heads/main/%E0%B8%AD%E0%B8%B1%E0%B8%9F%E0%B8%9F%E0%B8%B4%E0%B8%99"
timeout_seconds = 30
user_agent = "MagelifeSync/1.0 (+https://lynk.id/magelife)"

[store]
repository = "uppermoon77/wasan"
branch = "main"
api_base_url = "https://api.github.com"
# Falls back to the GITHUB_PAT environment variable when omitted
# token = "${GITHUB_PAT}"
timeout_seconds = 30
commit_message = "Auto update: Sync playlist from source + footer update"
disable_marker_path = ".SYNC_DISABLED"
honor_disable_marker = false

[expiry]
# Documents expire at hour:minute on their own date, UTC+utc_offset_hours (WIB)
hour = 13
minute = 0
utc_offset_hours = 7

[target]
# JANUARI FEBRUARI MARET APRIL MEI JUNI JULI AGUSTUS SEPTEMBER OKTOBER NOVEMBER DESEMBER
month = "OKTOBER"
year = 2026
prefix = "WN"

[sync]
pacing_delay_ms = 700

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"  # daily | hourly | never
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SyncConfig;
    use tempfile::TempDir;

    #[test]
    fn test_sample_config_parses_and_validates_with_token() {
        let mut config: SyncConfig = toml::from_str(sample_config()).unwrap();
        assert_eq!(config.target.month, "OKTOBER");
        assert_eq!(config.sync.pacing_delay_ms, 700);
        assert!(config.store.token.is_none());

        config.store.token = Some(crate::config::secret_string("ghp_test".to_string()));
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("playlist-sync.toml");
        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };

        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(output.exists());
        assert_eq!(args.execute().await.unwrap(), 2);

        let forced = InitArgs {
            force: true,
            ..args
        };
        assert_eq!(forced.execute().await.unwrap(), 0);
    }
}
