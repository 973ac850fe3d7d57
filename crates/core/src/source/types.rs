//! Types for the upstream source abstraction.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::CatalogEntry;
use crate::episodes::Episode;

/// Everything extracted from a title's primary detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowPage {
    /// Absolute cover image URL, empty if the page has none.
    pub thumbnail_url: String,
    pub title: String,
    pub summary: String,
    /// Episodes listed on the primary page itself.
    pub episodes: Vec<Episode>,
    /// Links to the other season pages, in document order.
    pub season_links: Vec<String>,
}

/// Errors that can occur while fetching from the listing site.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream request timed out")]
    Timeout,

    #[error("Upstream connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Upstream returned HTTP {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    #[error("Failed to extract page content: {0}")]
    Parse(String),
}

impl SourceError {
    /// Whether the upstream reported the requested page as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::UpstreamStatus { status: 404, .. })
    }
}

/// Trait for listing site backends.
#[async_trait]
pub trait ShowSource: Send + Sync {
    /// Source name for logging.
    fn name(&self) -> &str;

    /// Fetch and extract the full title listing.
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>, SourceError>;

    /// Fetch and extract the primary detail page of a title.
    async fn fetch_show_page(&self, id: &str) -> Result<ShowPage, SourceError>;

    /// Fetch and extract the episodes of one season page.
    async fn fetch_season_page(&self, link_path: &str) -> Result<Vec<Episode>, SourceError>;

    /// Download raw bytes (cover images).
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        let err = SourceError::UpstreamStatus {
            status: 404,
            url: "https://example.org/anime/stream/missing".to_string(),
        };
        assert!(err.is_not_found());
        assert!(!SourceError::Timeout.is_not_found());
        assert!(!SourceError::UpstreamStatus {
            status: 500,
            url: String::new()
        }
        .is_not_found());
    }

    #[test]
    fn test_error_messages() {
        let err = SourceError::UpstreamStatus {
            status: 503,
            url: "https://example.org/animes".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Upstream returned HTTP 503 for https://example.org/animes"
        );
    }
}
