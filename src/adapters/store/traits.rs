//! Remote document store abstraction
//!
//! The sync loop only needs four operations from the place documents live:
//! read with a version token, create, update against a version token, and an
//! existence check.

use crate::domain::StoreError;
use async_trait::async_trait;

/// Result alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// A document as currently stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDocument {
    /// Path of the document inside the store
    pub path: String,

    /// Decoded body text
    pub body: String,

    /// Opaque version token for optimistic updates
    pub version: String,
}

/// Versioned document store
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetches a document, `Ok(None)` when it does not exist
    async fn get(&self, path: &str) -> StoreResult<Option<RemoteDocument>>;

    /// Creates a new document
    async fn create(&self, path: &str, body: &str) -> StoreResult<()>;

    /// Replaces a document's body
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] when `version` is no longer current.
    async fn update(&self, path: &str, body: &str, version: &str) -> StoreResult<()>;

    /// Whether a document exists
    async fn exists(&self, path: &str) -> StoreResult<bool> {
        Ok(self.get(path).await?.is_some())
    }

    /// Human readable location, e.g. `owner/repo@main`
    fn location(&self) -> String;
}
