//! Sync summary and reporting
//!
//! This module defines structures for tracking and reporting sync results.

use crate::domain::{Identifier, StoreError};
use std::fmt;
use std::time::Duration;

/// What happened to one identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Document did not exist and was created
    Created,
    /// Document differed and was rewritten
    Updated,
    /// Stored content already matched, nothing written
    Unchanged,
    /// Dry run: would have created the document
    WouldCreate,
    /// Dry run: would have rewritten the document
    WouldUpdate,
    /// Version token went stale before the update landed
    Conflict(String),
    /// Any other store failure
    Failed(String),
}

impl SyncOutcome {
    /// Short label for tables and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncOutcome::Created => "created",
            SyncOutcome::Updated => "updated",
            SyncOutcome::Unchanged => "unchanged",
            SyncOutcome::WouldCreate => "would-create",
            SyncOutcome::WouldUpdate => "would-update",
            SyncOutcome::Conflict(_) => "conflict",
            SyncOutcome::Failed(_) => "failed",
        }
    }

    /// Whether this outcome counts against the run
    pub fn is_error(&self) -> bool {
        matches!(self, SyncOutcome::Conflict(_) | SyncOutcome::Failed(_))
    }
}

impl fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<StoreError> for SyncOutcome {
    fn from(err: StoreError) -> Self {
        if err.is_conflict() {
            SyncOutcome::Conflict(err.to_string())
        } else {
            SyncOutcome::Failed(err.to_string())
        }
    }
}

/// Result for one identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierReport {
    pub identifier: Identifier,
    pub expired: bool,
    pub outcome: SyncOutcome,
}

/// Summary of a sync run
#[derive(Debug, Clone)]
pub struct SyncSummary {
    /// Number of identifiers the run was asked to process
    pub total_identifiers: usize,

    /// Documents created
    pub created: usize,

    /// Documents rewritten
    pub updated: usize,

    /// Documents already up to date
    pub unchanged: usize,

    /// Stale version token on update
    pub conflicts: usize,

    /// Other per-identifier failures
    pub failed: usize,

    /// Identifiers that received the expired placeholder
    pub expired: usize,

    /// Every identifier was forced to expired (disable marker or override)
    pub forced_expired: bool,

    /// No writes were made
    pub dry_run: bool,

    /// Stopped early by a shutdown signal
    pub interrupted: bool,

    /// Duration of the run
    pub duration: Duration,

    /// Per-identifier results, in processing order
    pub reports: Vec<IdentifierReport>,

    /// Errors encountered during the run
    pub errors: Vec<SyncIssue>,
}

impl SyncSummary {
    /// Create a new empty summary
    pub fn new(total_identifiers: usize) -> Self {
        Self {
            total_identifiers,
            created: 0,
            updated: 0,
            unchanged: 0,
            conflicts: 0,
            failed: 0,
            expired: 0,
            forced_expired: false,
            dry_run: false,
            interrupted: false,
            duration: Duration::from_secs(0),
            reports: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record the result for one identifier and update the counters
    pub fn record(&mut self, identifier: Identifier, expired: bool, outcome: SyncOutcome) {
        match &outcome {
            SyncOutcome::Created | SyncOutcome::WouldCreate => self.created += 1,
            SyncOutcome::Updated | SyncOutcome::WouldUpdate => self.updated += 1,
            SyncOutcome::Unchanged => self.unchanged += 1,
            SyncOutcome::Conflict(message) => {
                self.conflicts += 1;
                self.add_error(
                    SyncIssue::new(SyncIssueKind::Conflict, message.clone())
                        .with_context(identifier.to_string()),
                );
            }
            SyncOutcome::Failed(message) => {
                self.failed += 1;
                self.add_error(
                    SyncIssue::new(SyncIssueKind::Store, message.clone())
                        .with_context(identifier.to_string()),
                );
            }
        }
        if expired {
            self.expired += 1;
        }
        self.reports.push(IdentifierReport {
            identifier,
            expired,
            outcome,
        });
    }

    /// Add an error
    pub fn add_error(&mut self, error: SyncIssue) {
        self.errors.push(error);
    }

    /// Number of identifiers actually visited
    pub fn processed(&self) -> usize {
        self.reports.len()
    }

    /// Check if the run was successful (no conflicts or failures)
    pub fn is_successful(&self) -> bool {
        self.errors.is_empty() && !self.reports.iter().any(|r| r.outcome.is_error())
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total = self.total_identifiers,
            processed = self.processed(),
            created = self.created,
            updated = self.updated,
            unchanged = self.unchanged,
            conflicts = self.conflicts,
            failed = self.failed,
            expired = self.expired,
            forced_expired = self.forced_expired,
            dry_run = self.dry_run,
            interrupted = self.interrupted,
            duration_ms = self.duration.as_millis() as u64,
            "Sync completed"
        );

        if !self.errors.is_empty() {
            tracing::warn!(error_count = self.errors.len(), "Sync completed with errors");
            for error in &self.errors {
                tracing::warn!(
                    kind = ?error.kind,
                    message = %error.message,
                    context = error.context.as_deref().unwrap_or(""),
                    "Sync error"
                );
            }
        }
    }
}

impl Default for SyncSummary {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Kind of sync error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncIssueKind {
    /// Stale version token
    Conflict,
    /// Store read or write failure
    Store,
}

/// Sync error with context
#[derive(Debug, Clone)]
pub struct SyncIssue {
    /// Kind of error
    pub kind: SyncIssueKind,

    /// Error message
    pub message: String,

    /// Optional context (usually the identifier)
    pub context: Option<String>,
}

impl SyncIssue {
    /// Create a new sync error
    pub fn new(kind: SyncIssueKind, message: String) -> Self {
        Self {
            kind,
            message,
            context: None,
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: String) -> Self {
        self.context = Some(context);
        self
    }
}
