//! Core business logic for playlist-sync.
//!
//! # Modules
//!
//! - [`dates`] - Date extraction from identifiers
//! - [`expiry`] - Cutoff computation and expiry verdicts
//! - [`footer`] - Trailing marker line strip/apply
//! - [`compose`] - Live body or expired placeholder, plus footer
//! - [`targets`] - Identifier generation for a month
//! - [`sync`] - Per-identifier reconciliation and run coordination
//!
//! # Sync Workflow
//!
//! 1. **Generate**: one identifier per day of the target month
//! 2. **Fetch**: download the live playlist once and strip its footer
//! 3. **Decide**: per identifier, live body or expired placeholder
//! 4. **Reconcile**: create, update or skip each remote document
//! 5. **Report**: produce a sync summary
//!
//! # Example
//!
//! ```rust,no_run
//! use playlist_sync::config::load_config;
//! use playlist_sync::core::sync::SyncCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("playlist-sync.toml")?;
//! let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//!
//! let coordinator = SyncCoordinator::new(config, shutdown_rx)?;
//! let summary = coordinator.execute().await?;
//!
//! println!("Created: {}", summary.created);
//! println!("Updated: {}", summary.updated);
//! println!("Unchanged: {}", summary.unchanged);
//! # Ok(())
//! # }
//! ```

pub mod compose;
pub mod dates;
pub mod expiry;
pub mod footer;
pub mod sync;
pub mod targets;
