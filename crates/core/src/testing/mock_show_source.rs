//! Mock listing site source for testing.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::catalog::CatalogEntry;
use crate::episodes::Episode;
use crate::source::{ShowPage, ShowSource, SourceError};

/// Mock implementation of the ShowSource trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable catalog, show pages, season pages and images
/// - Track season page fetches for assertions
/// - Simulate failures and slow pages
///
/// Pages and images that were never configured answer with an upstream 404.
///
/// # Example
///
/// ```rust,ignore
/// use animestream_core::testing::{MockShowSource, fixtures};
///
/// let source = MockShowSource::new();
/// source.set_catalog(vec![fixtures::catalog_entry("aot", "Attack on Titan", &[])]).await;
/// source.set_show_page("aot", fixtures::show_page(vec![], &["/s2"])).await;
/// source.fail_season_page("/s2").await;
/// ```
#[derive(Debug, Default)]
pub struct MockShowSource {
    /// Configured catalog listing.
    catalog: Arc<RwLock<Vec<CatalogEntry>>>,
    /// If set, the next catalog fetch fails with this error.
    next_catalog_error: Arc<RwLock<Option<SourceError>>>,
    /// Primary pages by title id.
    show_pages: Arc<RwLock<HashMap<String, ShowPage>>>,
    /// Season pages by link path.
    season_pages: Arc<RwLock<HashMap<String, Vec<Episode>>>>,
    /// Season pages that answer with an upstream error.
    failing_seasons: Arc<RwLock<HashSet<String>>>,
    /// Artificial latency per season page.
    season_delays: Arc<RwLock<HashMap<String, Duration>>>,
    /// Images by URL.
    images: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    /// Recorded fetches.
    catalog_fetches: Arc<RwLock<usize>>,
    show_fetches: Arc<RwLock<Vec<String>>>,
    season_fetches: Arc<RwLock<Vec<String>>>,
    image_fetches: Arc<RwLock<Vec<String>>>,
}

fn not_found(url: &str) -> SourceError {
    SourceError::UpstreamStatus {
        status: 404,
        url: url.to_string(),
    }
}

impl MockShowSource {
    /// Create a new mock source with nothing configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the catalog returned by subsequent refreshes.
    pub async fn set_catalog(&self, entries: Vec<CatalogEntry>) {
        *self.catalog.write().await = entries;
    }

    /// Configure the next catalog fetch to fail with the given error.
    pub async fn set_next_catalog_error(&self, error: SourceError) {
        *self.next_catalog_error.write().await = Some(error);
    }

    /// Set the primary page for a title id.
    pub async fn set_show_page(&self, id: &str, page: ShowPage) {
        self.show_pages.write().await.insert(id.to_string(), page);
    }

    /// Set the episodes of a season page.
    pub async fn set_season_page(&self, link_path: &str, episodes: Vec<Episode>) {
        self.season_pages
            .write()
            .await
            .insert(link_path.to_string(), episodes);
    }

    /// Make a season page fail with an upstream 500.
    pub async fn fail_season_page(&self, link_path: &str) {
        self.failing_seasons
            .write()
            .await
            .insert(link_path.to_string());
    }

    /// Delay the response of a season page.
    pub async fn set_season_delay(&self, link_path: &str, delay: Duration) {
        self.season_delays
            .write()
            .await
            .insert(link_path.to_string(), delay);
    }

    /// Set the bytes served for an image URL.
    pub async fn set_bytes(&self, url: &str, bytes: Vec<u8>) {
        self.images.write().await.insert(url.to_string(), bytes);
    }

    /// Number of catalog fetches performed.
    pub async fn catalog_fetch_count(&self) -> usize {
        *self.catalog_fetches.read().await
    }

    /// Title ids whose primary page was fetched, in call order.
    pub async fn show_fetches(&self) -> Vec<String> {
        self.show_fetches.read().await.clone()
    }

    /// Season links fetched, in call order.
    pub async fn season_fetches(&self) -> Vec<String> {
        self.season_fetches.read().await.clone()
    }

    /// Image URLs fetched, in call order.
    pub async fn image_fetches(&self) -> Vec<String> {
        self.image_fetches.read().await.clone()
    }
}

#[async_trait]
impl ShowSource for MockShowSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>, SourceError> {
        *self.catalog_fetches.write().await += 1;

        if let Some(err) = self.next_catalog_error.write().await.take() {
            return Err(err);
        }

        Ok(self.catalog.read().await.clone())
    }

    async fn fetch_show_page(&self, id: &str) -> Result<ShowPage, SourceError> {
        self.show_fetches.write().await.push(id.to_string());

        self.show_pages
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| not_found(&format!("mock://anime/stream/{}", id)))
    }

    async fn fetch_season_page(&self, link_path: &str) -> Result<Vec<Episode>, SourceError> {
        self.season_fetches
            .write()
            .await
            .push(link_path.to_string());

        let delay = self.season_delays.read().await.get(link_path).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing_seasons.read().await.contains(link_path) {
            return Err(SourceError::UpstreamStatus {
                status: 500,
                url: format!("mock://{}", link_path),
            });
        }

        self.season_pages
            .read()
            .await
            .get(link_path)
            .cloned()
            .ok_or_else(|| not_found(link_path))
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, SourceError> {
        self.image_fetches.write().await.push(url.to_string());

        self.images
            .read()
            .await
            .get(url)
            .cloned()
            .ok_or_else(|| not_found(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_unconfigured_pages_are_not_found() {
        let source = MockShowSource::new();

        assert!(source.fetch_show_page("x").await.unwrap_err().is_not_found());
        assert!(source.fetch_season_page("/x").await.unwrap_err().is_not_found());
        assert!(source.fetch_bytes("https://x").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_catalog_error_is_one_shot() {
        let source = MockShowSource::new();
        source
            .set_catalog(vec![fixtures::catalog_entry("a", "A", &[])])
            .await;
        source.set_next_catalog_error(SourceError::Timeout).await;

        assert!(matches!(
            source.fetch_catalog().await,
            Err(SourceError::Timeout)
        ));
        assert_eq!(source.fetch_catalog().await.unwrap().len(), 1);
        assert_eq!(source.catalog_fetch_count().await, 2);
    }
}
