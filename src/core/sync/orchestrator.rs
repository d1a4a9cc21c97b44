//! Per-identifier sync loop
//!
//! Identifiers are processed one at a time in the order given. A failure on
//! one identifier is recorded and the loop moves on; only a shutdown signal
//! stops it early.

use super::pacing::Pacer;
use super::summary::{SyncOutcome, SyncSummary};
use crate::adapters::store::{RemoteStore, StoreResult};
use crate::core::compose::ContentComposer;
use crate::core::expiry::ExpiryClock;
use crate::domain::Identifier;
use crate::log_identifier_outcome;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;

/// Reconciles remote documents with the composed bodies
pub struct SyncOrchestrator {
    store: Arc<dyn RemoteStore>,
    expiry: ExpiryClock,
    composer: ContentComposer,
    pacer: Arc<dyn Pacer>,
    dry_run: bool,
    shutdown_signal: Option<watch::Receiver<bool>>,
}

impl SyncOrchestrator {
    pub fn new(
        store: Arc<dyn RemoteStore>,
        expiry: ExpiryClock,
        composer: ContentComposer,
        pacer: Arc<dyn Pacer>,
    ) -> Self {
        Self {
            store,
            expiry,
            composer,
            pacer,
            dry_run: false,
            shutdown_signal: None,
        }
    }

    /// Read and decide, but never write
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Stop between identifiers once the receiver reads `true`
    pub fn with_shutdown_signal(mut self, shutdown_signal: watch::Receiver<bool>) -> Self {
        self.shutdown_signal = Some(shutdown_signal);
        self
    }

    fn shutdown_requested(&self) -> bool {
        self.shutdown_signal
            .as_ref()
            .map(|rx| *rx.borrow())
            .unwrap_or(false)
    }

    /// Syncs every identifier against `live_body`
    ///
    /// `live_body` must already be footer-stripped. `forced_expired` overrides
    /// the per-identifier expiry verdict when set.
    pub async fn sync(
        &self,
        identifiers: &[Identifier],
        live_body: &str,
        forced_expired: Option<bool>,
    ) -> SyncSummary {
        let start_time = Instant::now();
        let mut summary = SyncSummary::new(identifiers.len());
        summary.dry_run = self.dry_run;
        summary.forced_expired = forced_expired == Some(true);

        for identifier in identifiers {
            if self.shutdown_requested() {
                tracing::warn!(
                    processed = summary.processed(),
                    remaining = identifiers.len() - summary.processed(),
                    "Shutdown requested, stopping before next identifier"
                );
                summary.interrupted = true;
                break;
            }

            let expired =
                forced_expired.unwrap_or_else(|| self.expiry.is_expired(identifier.as_str()));
            let outcome = match self.sync_one(identifier, live_body, expired).await {
                Ok(outcome) => outcome,
                Err(e) => SyncOutcome::from(e),
            };

            log_identifier_outcome!(identifier, expired, outcome);
            summary.record(identifier.clone(), expired, outcome);
        }

        summary.with_duration(start_time.elapsed())
    }

    async fn sync_one(
        &self,
        identifier: &Identifier,
        live_body: &str,
        expired: bool,
    ) -> StoreResult<SyncOutcome> {
        let path = identifier.as_str();
        let footer = self.composer.footer();
        let chosen = self.composer.select_body(live_body, expired);
        let new_body = self.composer.compose(path, live_body, expired);

        match self.store.get(path).await? {
            None if self.dry_run => Ok(SyncOutcome::WouldCreate),
            None => {
                let result = self.store.create(path, &new_body).await;
                self.pacer.pause().await;
                result.map(|_| SyncOutcome::Created)
            }
            Some(current) if footer.strip_footer(&current.body) == footer.strip_footer(chosen) => {
                Ok(SyncOutcome::Unchanged)
            }
            Some(_) if self.dry_run => Ok(SyncOutcome::WouldUpdate),
            Some(current) => {
                let result = self
                    .store
                    .update(path, &new_body, &current.version)
                    .await;
                self.pacer.pause().await;
                result.map(|_| SyncOutcome::Updated)
            }
        }
    }
}
