//! Validate config command implementation

use super::exit_code_for;
use crate::config::read_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match read_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        match config.validate() {
            Ok(_) => {
                println!("✅ Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Log Level: {}", config.application.log_level);
                println!("  Dry Run: {}", config.application.dry_run);
                println!("  Source: {}", config.source.url);
                println!(
                    "  Store: {}@{}",
                    config.store.repository, config.store.branch
                );
                println!("  Token: configured");
                println!(
                    "  Cutoff: {:02}:{:02} UTC{:+}",
                    config.expiry.hour, config.expiry.minute, config.expiry.utc_offset_hours
                );
                println!(
                    "  Target: {}{{DD}}{}{}",
                    config.target.prefix,
                    config.target.month.to_uppercase(),
                    config.target.year
                );
                println!("  Pacing: {} ms", config.sync.pacing_delay_ms);
                println!(
                    "  Disable Marker: {} (honored: {})",
                    config.store.disable_marker_path, config.store.honor_disable_marker
                );
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(exit_code_for(&e))
            }
        }
    }
}
