//! Integration tests for dry-run mode
//!
//! A dry run reads every document and makes every decision but writes nothing.

mod common;

use common::{clock_at, config_for, CountingPacer, MemoryStore, StaticSource, LIVE_BODY};
use playlist_sync::core::sync::{SyncCoordinator, SyncOutcome};
use std::sync::atomic::Ordering;
use std::sync::Arc;

#[tokio::test]
async fn test_dry_run_reports_without_writing() {
    let store = MemoryStore::new();
    store.insert("WN01MARET2025", "stale body");
    let store = Arc::new(store);
    let pacer = Arc::new(CountingPacer::default());

    let mut config = config_for("MARET", 2025, "WN");
    config.application.dry_run = true;

    let summary = SyncCoordinator::with_components(
        config,
        store.clone(),
        Arc::new(StaticSource::new(LIVE_BODY)),
        Arc::new(clock_at("2025-02-01T00:00:00+07:00")),
        pacer.clone(),
    )
    .execute()
    .await
    .unwrap();

    assert!(summary.dry_run);
    assert_eq!(summary.reports[0].outcome, SyncOutcome::WouldUpdate);
    assert!(summary.reports[1..]
        .iter()
        .all(|r| r.outcome == SyncOutcome::WouldCreate));
    assert_eq!(summary.updated, 1);
    assert_eq!(summary.created, 30);

    assert_eq!(store.writes(), 0);
    assert_eq!(store.gets.load(Ordering::SeqCst), 31);
    assert_eq!(store.body("WN01MARET2025").as_deref(), Some("stale body"));
    assert_eq!(pacer.count(), 0);
}

#[tokio::test]
async fn test_dry_run_still_reports_unchanged() {
    let store = Arc::new(MemoryStore::new());
    let config = config_for("MARET", 2025, "WN");
    let now = "2025-02-01T00:00:00+07:00";

    SyncCoordinator::with_components(
        config.clone(),
        store.clone(),
        Arc::new(StaticSource::new(LIVE_BODY)),
        Arc::new(clock_at(now)),
        Arc::new(CountingPacer::default()),
    )
    .execute()
    .await
    .unwrap();

    let mut dry = config;
    dry.application.dry_run = true;
    let summary = SyncCoordinator::with_components(
        dry,
        store.clone(),
        Arc::new(StaticSource::new(LIVE_BODY)),
        Arc::new(clock_at(now)),
        Arc::new(CountingPacer::default()),
    )
    .execute()
    .await
    .unwrap();

    assert_eq!(summary.unchanged, 31);
    assert!(summary.is_successful());
}
