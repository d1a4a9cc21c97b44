//! Domain error types
//!
//! This module defines the error hierarchy for playlist-sync.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main playlist-sync error type
///
/// Run-level failures (configuration, credential, source fetch) surface as this
/// type and stop the run before any document is written. Per-identifier store
/// failures are carried as [`StoreError`] and recorded in the sync summary.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The remote store credential is not configured
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// A month name outside the recognized set
    #[error("Unrecognized month '{given}'. Use one of: {valid}")]
    UnrecognizedMonth { given: String, valid: String },

    /// Upstream source errors
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Remote store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Upstream playlist source errors
#[derive(Debug, Error)]
pub enum SourceError {
    /// Could not reach the source
    #[error("Failed to connect to source: {0}")]
    ConnectionFailed(String),

    /// Source answered with a non-success status
    #[error("Source returned status {status}: {message}")]
    BadStatus { status: u16, message: String },

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Body could not be read as text
    #[error("Invalid response body: {0}")]
    InvalidBody(String),
}

/// Remote document store errors
///
/// `NotFound` and `Conflict` are part of the normal sync protocol; the other
/// variants are reported per identifier without aborting the run.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Document does not exist
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Version token is stale (document changed since it was fetched)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Credential rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Any other non-success API answer
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to connect to the store
    #[error("Failed to connect to store: {0}")]
    ConnectionFailed(String),

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Response could not be decoded
    #[error("Invalid response from store: {0}")]
    InvalidResponse(String),
}

impl StoreError {
    /// Whether this error means the version token went stale
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict(_))
    }
}

impl From<std::io::Error> for SyncError {
    fn from(err: std::io::Error) -> Self {
        SyncError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for SyncError {
    fn from(err: toml::de::Error) -> Self {
        SyncError::Configuration(format!("TOML parse error: {err}"))
    }
}
