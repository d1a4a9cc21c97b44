//! Shared test doubles for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use playlist_sync::adapters::source::SourceFetcher;
use playlist_sync::adapters::store::{RemoteDocument, RemoteStore, StoreResult};
use playlist_sync::config::{
    secret_string, ApplicationConfig, ExpiryConfig, LoggingConfig, PacingConfig, SourceConfig,
    StoreConfig, SyncConfig, TargetConfig,
};
use playlist_sync::core::expiry::FixedClock;
use playlist_sync::core::sync::Pacer;
use playlist_sync::domain::{SourceError, StoreError};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::watch;

/// In-memory versioned store
#[derive(Default)]
pub struct MemoryStore {
    docs: Mutex<HashMap<String, (String, u64)>>,
    pub gets: AtomicUsize,
    pub creates: AtomicUsize,
    pub updates: AtomicUsize,
    conflict_paths: HashSet<String>,
    failing_paths: HashSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates to these paths always report a stale version
    pub fn with_conflicts(mut self, paths: &[&str]) -> Self {
        self.conflict_paths = paths.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Reads of these paths fail with a server error
    pub fn with_failures(mut self, paths: &[&str]) -> Self {
        self.failing_paths = paths.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn insert(&self, path: &str, body: &str) {
        self.docs
            .lock()
            .unwrap()
            .insert(path.to_string(), (body.to_string(), 1));
    }

    pub fn body(&self, path: &str) -> Option<String> {
        self.docs.lock().unwrap().get(path).map(|(b, _)| b.clone())
    }

    pub fn len(&self) -> usize {
        self.docs.lock().unwrap().len()
    }

    pub fn writes(&self) -> usize {
        self.creates.load(Ordering::SeqCst) + self.updates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteStore for MemoryStore {
    async fn get(&self, path: &str) -> StoreResult<Option<RemoteDocument>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.failing_paths.contains(path) {
            return Err(StoreError::Api {
                status: 502,
                message: "Bad Gateway".to_string(),
            });
        }
        Ok(self
            .docs
            .lock()
            .unwrap()
            .get(path)
            .map(|(body, version)| RemoteDocument {
                path: path.to_string(),
                body: body.clone(),
                version: version.to_string(),
            }))
    }

    async fn create(&self, path: &str, body: &str) -> StoreResult<()> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        let mut docs = self.docs.lock().unwrap();
        if docs.contains_key(path) {
            return Err(StoreError::Conflict(format!("{path} already exists")));
        }
        docs.insert(path.to_string(), (body.to_string(), 1));
        Ok(())
    }

    async fn update(&self, path: &str, body: &str, version: &str) -> StoreResult<()> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        if self.conflict_paths.contains(path) {
            return Err(StoreError::Conflict(format!("{path} does not match {version}")));
        }
        let mut docs = self.docs.lock().unwrap();
        let entry = docs
            .get_mut(path)
            .ok_or_else(|| StoreError::NotFound(path.to_string()))?;
        if entry.1.to_string() != version {
            return Err(StoreError::Conflict(format!("{path} does not match {version}")));
        }
        *entry = (body.to_string(), entry.1 + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "memory@main".to_string()
    }
}

/// Source returning a fixed body
pub struct StaticSource {
    body: Mutex<String>,
    pub fetches: AtomicUsize,
}

impl StaticSource {
    pub fn new(body: &str) -> Self {
        Self {
            body: Mutex::new(body.to_string()),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn set_body(&self, body: &str) {
        *self.body.lock().unwrap() = body.to_string();
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SourceFetcher for StaticSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.body.lock().unwrap().clone())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

/// Source that always fails
pub struct FailingSource;

#[async_trait]
impl SourceFetcher for FailingSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        Err(SourceError::BadStatus {
            status: 503,
            message: "Service Unavailable".to_string(),
        })
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}

/// Counts pauses without sleeping
#[derive(Default)]
pub struct CountingPacer {
    pub pauses: AtomicUsize,
}

impl CountingPacer {
    pub fn count(&self) -> usize {
        self.pauses.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Pacer for CountingPacer {
    async fn pause(&self) {
        self.pauses.fetch_add(1, Ordering::SeqCst);
    }
}

/// Raises the shutdown flag after a number of pauses
pub struct ShutdownAfterPacer {
    remaining: AtomicUsize,
    tx: watch::Sender<bool>,
}

impl ShutdownAfterPacer {
    pub fn new(writes: usize, tx: watch::Sender<bool>) -> Self {
        Self {
            remaining: AtomicUsize::new(writes),
            tx,
        }
    }
}

#[async_trait]
impl Pacer for ShutdownAfterPacer {
    async fn pause(&self) {
        if self.remaining.fetch_sub(1, Ordering::SeqCst) == 1 {
            let _ = self.tx.send(true);
        }
    }
}

/// Fixed clock at an RFC 3339 instant
pub fn clock_at(instant: &str) -> FixedClock {
    let parsed: DateTime<FixedOffset> = DateTime::parse_from_rfc3339(instant).unwrap();
    FixedClock::new(parsed)
}

/// Valid configuration for the given target month
pub fn config_for(month: &str, year: i32, prefix: &str) -> SyncConfig {
    SyncConfig {
        application: ApplicationConfig::default(),
        source: SourceConfig {
            url: "https://example.com/live.m3u".to_string(),
            timeout_seconds: 5,
            user_agent: "MagelifeSync/1.0 (+https://lynk.id/magelife)".to_string(),
        },
        store: StoreConfig {
            repository: "owner/playlists".to_string(),
            branch: "main".to_string(),
            api_base_url: "https://api.github.com".to_string(),
            token: Some(secret_string("ghp_test".to_string())),
            timeout_seconds: 5,
            commit_message: "Auto update: Sync playlist from source + footer update".to_string(),
            disable_marker_path: ".SYNC_DISABLED".to_string(),
            honor_disable_marker: false,
        },
        expiry: ExpiryConfig::default(),
        target: TargetConfig {
            month: month.to_string(),
            year,
            prefix: prefix.to_string(),
        },
        sync: PacingConfig::default(),
        logging: LoggingConfig::default(),
    }
}

pub const LIVE_BODY: &str = "#EXTM3U\n#EXTINF:-1 tvg-id=\"one\",Channel One\nhttp://live.example.com/one.m3u8\n#EXTINF:-1 tvg-id=\"two\",Channel Two\nhttp://live.example.com/two.m3u8";
