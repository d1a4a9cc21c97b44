//! Domain models and types for playlist-sync.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`Identifier`])
//! - **Calendar vocabulary** ([`Month`], Indonesian month names)
//! - **Error types** ([`SyncError`], [`SourceError`], [`StoreError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, SyncError>`]:
//!
//! ```rust
//! use playlist_sync::domain::{Month, Result};
//!
//! fn example() -> Result<u32> {
//!     let month = Month::from_name("februari")?;
//!     Ok(month.number())
//! }
//! ```

pub mod errors;
pub mod ids;
pub mod month;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{SourceError, StoreError, SyncError};
pub use ids::Identifier;
pub use month::Month;
pub use result::Result;
