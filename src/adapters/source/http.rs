//! Plain HTTP GET source

use super::SourceFetcher;
use crate::config::SourceConfig;
use crate::domain::{Result, SourceError, SyncError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Fetches the playlist from a fixed URL
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Creates a source from configuration
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| SyncError::Other(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl SourceFetcher for HttpSource {
    async fn fetch(&self) -> std::result::Result<String, SourceError> {
        tracing::debug!(url = %self.url, "Fetching source playlist");

        let resp = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::Timeout(e.to_string())
            } else {
                SourceError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SourceError::BadStatus {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| SourceError::InvalidBody(e.to_string()))?;
        let text = String::from_utf8(bytes.to_vec())
            .map_err(|e| SourceError::InvalidBody(format!("Body is not valid UTF-8: {e}")))?;

        tracing::info!(url = %self.url, bytes = text.len(), "Fetched source playlist");
        Ok(text)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: String) -> SourceConfig {
        SourceConfig {
            url,
            timeout_seconds: 5,
            user_agent: "MagelifeSync/1.0 (+https://lynk.id/magelife)".to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_returns_body_and_sends_user_agent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/playlist")
            .match_header("user-agent", "MagelifeSync/1.0 (+https://lynk.id/magelife)")
            .with_status(200)
            .with_body("#EXTINF:-1,Channel\nhttp://example.com/a.m3u8\n")
            .create_async()
            .await;

        let source = HttpSource::new(&config(format!("{}/playlist", server.url()))).unwrap();
        let body = source.fetch().await.unwrap();

        mock.assert_async().await;
        assert_eq!(body, "#EXTINF:-1,Channel\nhttp://example.com/a.m3u8\n");
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/playlist")
            .with_status(503)
            .with_body("unavailable")
            .create_async()
            .await;

        let source = HttpSource::new(&config(format!("{}/playlist", server.url()))).unwrap();
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(
            err,
            SourceError::BadStatus { status: 503, ref message } if message == "unavailable"
        ));
    }

    #[tokio::test]
    async fn test_fetch_invalid_utf8() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/playlist")
            .with_status(200)
            .with_body(vec![0xff, 0xfe, 0x00])
            .create_async()
            .await;

        let source = HttpSource::new(&config(format!("{}/playlist", server.url()))).unwrap();
        assert!(matches!(
            source.fetch().await.unwrap_err(),
            SourceError::InvalidBody(_)
        ));
    }

    #[tokio::test]
    async fn test_fetch_unreachable() {
        // Nothing listens on port 9 (discard) on the loopback in CI
        let source = HttpSource::new(&config("http://127.0.0.1:9/playlist".to_string())).unwrap();
        assert!(matches!(
            source.fetch().await.unwrap_err(),
            SourceError::ConnectionFailed(_) | SourceError::Timeout(_)
        ));
    }
}
