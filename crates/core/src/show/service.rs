use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

use crate::episodes::{aggregate, Episode, ShowDetail};
use crate::metrics::SEASON_PAGES;
use crate::source::{ShowSource, SourceError};

/// Builds `ShowDetail` values from a `ShowSource`.
pub struct ShowDetailService {
    source: Arc<dyn ShowSource>,
    season_fetch_concurrency: usize,
}

impl ShowDetailService {
    /// Create a service fetching at most `season_fetch_concurrency` season
    /// pages at once.
    pub fn new(source: Arc<dyn ShowSource>, season_fetch_concurrency: usize) -> Self {
        Self {
            source,
            season_fetch_concurrency: season_fetch_concurrency.max(1),
        }
    }

    /// Fetch the full detail view of a title.
    ///
    /// A failure of the primary page fails the whole request. A failed
    /// season page is logged and its episodes are left out.
    pub async fn fetch(&self, id: &str) -> Result<ShowDetail, SourceError> {
        let page = self.source.fetch_show_page(id).await?;
        let additional = self.fetch_season_pages(id, &page.season_links).await;

        let episodes = aggregate(page.episodes, additional);
        debug!(id, episodes = episodes.len(), "Show detail assembled");

        Ok(ShowDetail {
            thumbnail_url: page.thumbnail_url,
            title: page.title,
            summary: page.summary,
            episodes,
        })
    }

    /// Fetch season pages concurrently. Batches come back in link order
    /// regardless of which fetch finishes first.
    async fn fetch_season_pages(&self, id: &str, links: &[String]) -> Vec<Vec<Episode>> {
        let source = &self.source;
        let results: Vec<(String, Result<Vec<Episode>, SourceError>)> =
            stream::iter(links.to_vec())
                .map(|link| async move {
                    let result = source.fetch_season_page(&link).await;
                    (link, result)
                })
                .buffered(self.season_fetch_concurrency)
                .collect()
                .await;

        results
            .into_iter()
            .filter_map(|(link, result)| match result {
                Ok(episodes) => {
                    SEASON_PAGES.with_label_values(&["success"]).inc();
                    Some(episodes)
                }
                Err(e) => {
                    SEASON_PAGES.with_label_values(&["skipped"]).inc();
                    warn!(id, link = %link, error = %e, "Skipping season page");
                    None
                }
            })
            .collect()
    }
}
