//! Global "sync disabled" marker
//!
//! A sentinel file in the store. When honored, its presence forces every
//! identifier to the expired placeholder and the upstream fetch is skipped.

use crate::adapters::store::{RemoteStore, StoreResult};
use chrono::{DateTime, FixedOffset, SecondsFormat};

/// Commit message used when the marker is written
pub const MARKER_COMMIT_MESSAGE: &str = "Mark: sync disabled (manual/opsional)";

/// Result of [`ensure_marker`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStatus {
    Created,
    AlreadyPresent,
    /// Dry run: the marker is absent and nothing was written
    WouldCreate,
}

/// Whether the marker exists
///
/// A failed check is logged and treated as absent so a flaky read never
/// expires every document.
pub async fn marker_present(store: &dyn RemoteStore, path: &str) -> bool {
    match store.exists(path).await {
        Ok(present) => {
            tracing::debug!(path = %path, present, "Checked disable marker");
            present
        }
        Err(e) => {
            tracing::warn!(
                path = %path,
                error = %e,
                "Disable marker check failed, assuming absent"
            );
            false
        }
    }
}

/// Body written into a new marker
pub fn marker_body(now: DateTime<FixedOffset>) -> String {
    let stamp = now.to_rfc3339_opts(SecondsFormat::Secs, false);
    if now.offset().local_minus_utc() == 7 * 3600 {
        format!("Marked at {stamp} WIB\n")
    } else {
        format!("Marked at {stamp}\n")
    }
}

/// Creates the marker unless it already exists
///
/// With `dry_run` set the store is only read.
pub async fn ensure_marker(
    store: &dyn RemoteStore,
    path: &str,
    now: DateTime<FixedOffset>,
    dry_run: bool,
) -> StoreResult<MarkerStatus> {
    if store.exists(path).await? {
        tracing::info!(path = %path, "Disable marker already present");
        return Ok(MarkerStatus::AlreadyPresent);
    }

    if dry_run {
        tracing::info!(path = %path, "[DRY RUN] Would create disable marker");
        return Ok(MarkerStatus::WouldCreate);
    }

    store.create(path, &marker_body(now)).await?;
    tracing::info!(path = %path, location = %store.location(), "Disable marker created");
    Ok(MarkerStatus::Created)
}
