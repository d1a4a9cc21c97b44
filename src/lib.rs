// playlist-sync - dated playlist document sync
// Copyright (c) 2025 playlist-sync Contributors
// Licensed under the MIT License

//! # playlist-sync
//!
//! Keeps a month of remotely hosted playlist files in step with one live
//! upstream playlist. Each file is named after a day (`WN21NOVEMBER2025`);
//! once that day's cutoff has passed the file switches to a fixed "expired"
//! placeholder.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Extracting** a calendar date from free-form identifiers
//! - **Deciding** expiry against a cutoff in a fixed UTC offset
//! - **Composing** document bodies with an idempotent trailing marker line
//! - **Reconciling** remote documents: create, update or leave unchanged
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (dates, expiry, footer, composition, sync)
//! - [`adapters`] - External integrations (HTTP source, GitHub store)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use playlist_sync::config::load_config;
//! use playlist_sync::core::sync::SyncCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("playlist-sync.toml")?;
//!     let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//!
//!     let summary = SyncCoordinator::new(config, shutdown_rx)?.execute().await?;
//!
//!     println!("{} created, {} updated", summary.created, summary.updated);
//!     Ok(())
//! }
//! ```
//!
//! ## Footer Idempotence
//!
//! ```rust
//! use playlist_sync::core::footer::FooterCodec;
//!
//! # fn example() -> playlist_sync::domain::Result<()> {
//! let codec = FooterCodec::new()?;
//! let once = codec.add_footer("#EXTINF:-1,A\nhttp://a", "WN01OKTOBER2026", false);
//! let twice = codec.add_footer(&once, "WN01OKTOBER2026", false);
//! assert_eq!(once, twice);
//! assert_eq!(codec.count_markers(&twice), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`], whose error is
//! [`domain::SyncError`]. Per-identifier store failures never abort a run;
//! they are collected in the [`core::sync::SyncSummary`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
