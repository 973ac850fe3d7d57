use animestream_core::{CatalogStore, Config, ShowDetailService, ShowSource, ThumbnailCache};
use std::sync::Arc;

/// Shared application state
pub struct AppState {
    config: Config,
    source: Arc<dyn ShowSource>,
    catalog: CatalogStore,
    shows: ShowDetailService,
    thumbnails: ThumbnailCache,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn ShowSource>) -> Self {
        let shows =
            ShowDetailService::new(Arc::clone(&source), config.source.season_fetch_concurrency);
        let thumbnails = ThumbnailCache::new(config.thumbnails.cache_dir.clone());

        Self {
            config,
            source,
            catalog: CatalogStore::new(),
            shows,
            thumbnails,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn source(&self) -> &Arc<dyn ShowSource> {
        &self.source
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn shows(&self) -> &ShowDetailService {
        &self.shows
    }

    pub fn thumbnails(&self) -> &ThumbnailCache {
        &self.thumbnails
    }
}
