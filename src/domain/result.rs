//! Result type alias for playlist-sync

use super::errors::SyncError;

/// Result type alias for playlist-sync operations
///
/// # Examples
///
/// ```
/// use playlist_sync::domain::result::Result;
/// use playlist_sync::domain::errors::SyncError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(SyncError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, SyncError>;
