//! External system integrations for playlist-sync.
//!
//! - [`source`] - upstream playlist fetch over HTTP
//! - [`store`] - versioned remote document store (GitHub contents API)
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies and
//! enable testing with mock implementations. The sync core only sees the
//! [`source::SourceFetcher`] and [`store::RemoteStore`] traits.
//!
//! ```rust,no_run
//! use playlist_sync::adapters::store::{GitHubStore, RemoteStore};
//! use playlist_sync::config::{secret_string, StoreConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StoreConfig {
//!     repository: "owner/playlists".to_string(),
//!     branch: "main".to_string(),
//!     api_base_url: "https://api.github.com".to_string(),
//!     token: Some(secret_string("ghp_example".to_string())),
//!     timeout_seconds: 30,
//!     commit_message: "Auto update".to_string(),
//!     disable_marker_path: ".SYNC_DISABLED".to_string(),
//!     honor_disable_marker: false,
//! };
//!
//! let store = GitHubStore::new(&config)?;
//! if let Some(doc) = store.get("WN01OKTOBER2026").await? {
//!     println!("{} at {}", doc.path, doc.version);
//! }
//! # Ok(())
//! # }
//! ```

pub mod source;
pub mod store;
