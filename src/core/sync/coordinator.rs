//! Sync coordinator - runs one full sync
//!
//! Wires configuration to the store, source, clock and pacer, then:
//! 1. Generates the target identifiers (an unknown month stops the run here)
//! 2. Checks the disable marker when it is honored
//! 3. Fetches and footer-strips the live body unless every identifier is
//!    forced expired
//! 4. Hands everything to the [`SyncOrchestrator`]

use super::marker::marker_present;
use super::orchestrator::SyncOrchestrator;
use super::pacing::{NoPacing, Pacer, TokioPacer};
use super::summary::SyncSummary;
use crate::adapters::source::{HttpSource, SourceFetcher};
use crate::adapters::store::{GitHubStore, RemoteStore};
use crate::config::SyncConfig;
use crate::core::compose::ContentComposer;
use crate::core::expiry::{Clock, ExpiryClock, SystemClock};
use crate::core::footer::FooterCodec;
use crate::core::targets::IdentifierGenerator;
use crate::domain::Result;
use crate::log_sync_start;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;

/// Sync coordinator
pub struct SyncCoordinator {
    config: SyncConfig,
    store: Arc<dyn RemoteStore>,
    source: Arc<dyn SourceFetcher>,
    clock: Arc<dyn Clock>,
    pacer: Arc<dyn Pacer>,
    force_expired: bool,
    shutdown_signal: Option<watch::Receiver<bool>>,
}

impl SyncCoordinator {
    /// Create a coordinator talking to GitHub and the configured source URL
    pub fn new(config: SyncConfig, shutdown_signal: watch::Receiver<bool>) -> Result<Self> {
        let store: Arc<dyn RemoteStore> = Arc::new(GitHubStore::new(&config.store)?);
        let source: Arc<dyn SourceFetcher> = Arc::new(HttpSource::new(&config.source)?);
        let pacer: Arc<dyn Pacer> = if config.application.dry_run {
            Arc::new(NoPacing)
        } else {
            Arc::new(TokioPacer::from_millis(config.sync.pacing_delay_ms))
        };

        Ok(Self::with_components(config, store, source, Arc::new(SystemClock), pacer)
            .with_shutdown_signal(shutdown_signal))
    }

    /// Create a coordinator from explicit collaborators
    pub fn with_components(
        config: SyncConfig,
        store: Arc<dyn RemoteStore>,
        source: Arc<dyn SourceFetcher>,
        clock: Arc<dyn Clock>,
        pacer: Arc<dyn Pacer>,
    ) -> Self {
        Self {
            config,
            store,
            source,
            clock,
            pacer,
            force_expired: false,
            shutdown_signal: None,
        }
    }

    /// Treat every identifier as expired regardless of its date
    pub fn with_force_expired(mut self, force_expired: bool) -> Self {
        self.force_expired = force_expired;
        self
    }

    pub fn with_shutdown_signal(mut self, shutdown_signal: watch::Receiver<bool>) -> Self {
        self.shutdown_signal = Some(shutdown_signal);
        self
    }

    /// Execute one sync run
    ///
    /// # Errors
    ///
    /// Returns an error only for run-level failures: an unknown target month,
    /// a bad expiry offset, or a failed source fetch. Per-identifier store
    /// failures are reported in the summary.
    pub async fn execute(&self) -> Result<SyncSummary> {
        let start_time = Instant::now();
        let dry_run = self.config.application.dry_run;

        let identifiers = IdentifierGenerator.from_config(&self.config.target)?;
        let expiry = ExpiryClock::from_config(&self.config.expiry, self.clock.clone())?;
        let composer = ContentComposer::new(FooterCodec::new()?);

        log_sync_start!(
            self.config.target.month,
            self.config.target.year,
            identifiers.len(),
            self.store.location()
        );

        let marker_forced = self.config.store.honor_disable_marker
            && marker_present(self.store.as_ref(), &self.config.store.disable_marker_path).await;
        if marker_forced {
            tracing::warn!(
                path = %self.config.store.disable_marker_path,
                "Sync disabled marker present, forcing every document to expired"
            );
        }

        let forced_expired = (self.force_expired || marker_forced).then_some(true);

        let live_body = if forced_expired.is_some() {
            tracing::info!("All documents forced expired, skipping source fetch");
            String::new()
        } else {
            tracing::info!(source = %self.source.describe(), "Fetching live playlist");
            let raw = self.source.fetch().await?;
            composer.footer().strip_footer(&raw)
        };

        let mut orchestrator =
            SyncOrchestrator::new(self.store.clone(), expiry, composer, self.pacer.clone())
                .with_dry_run(dry_run);
        if let Some(rx) = &self.shutdown_signal {
            orchestrator = orchestrator.with_shutdown_signal(rx.clone());
        }

        let summary = orchestrator
            .sync(&identifiers, &live_body, forced_expired)
            .await;

        Ok(summary.with_duration(start_time.elapsed()))
    }
}
