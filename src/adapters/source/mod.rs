//! Upstream playlist source
//!
//! The source is a single text document fetched once per run. Any failure here
//! aborts the run before the store is touched.

pub mod http;

pub use http::HttpSource;

use crate::domain::SourceError;
use async_trait::async_trait;

/// Fetches the live playlist body
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// Downloads the current body as text
    async fn fetch(&self) -> std::result::Result<String, SourceError>;

    /// Where the body comes from, for logs
    fn describe(&self) -> String;
}
