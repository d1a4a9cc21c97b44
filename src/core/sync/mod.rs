//! Sync workflow
//!
//! [`SyncCoordinator`] runs one full pass: identifiers, marker check, source
//! fetch, then the [`SyncOrchestrator`] loop that reconciles each remote
//! document.

pub mod coordinator;
pub mod marker;
pub mod orchestrator;
pub mod pacing;
pub mod summary;

pub use coordinator::SyncCoordinator;
pub use marker::{ensure_marker, marker_body, marker_present, MarkerStatus, MARKER_COMMIT_MESSAGE};
pub use orchestrator::SyncOrchestrator;
pub use pacing::{NoPacing, Pacer, TokioPacer};
pub use summary::{IdentifierReport, SyncIssue, SyncIssueKind, SyncOutcome, SyncSummary};
