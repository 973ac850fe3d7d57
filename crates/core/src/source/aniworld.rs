//! Listing site backend over plain HTTP.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;

use super::extract::{
    parse_catalog, parse_season, parse_show_page, resolve_url, SHOW_PATH_PREFIX,
};
use super::{ShowPage, ShowSource, SourceError};
use crate::catalog::CatalogEntry;
use crate::config::SourceConfig;
use crate::episodes::Episode;
use crate::metrics::{UPSTREAM_FETCHES, UPSTREAM_FETCH_DURATION};

/// Path of the full title listing.
const CATALOG_PATH: &str = "/animes";

/// Listing site client that fetches pages with `reqwest` and extracts them
/// with CSS selectors.
pub struct AniworldSource {
    client: Client,
    base_url: String,
}

impl AniworldSource {
    /// Create a new source with the given configuration.
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        let mut builder =
            Client::builder().timeout(Duration::from_secs(config.timeout_secs as u64));
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL all site-relative paths are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn show_url(&self, id: &str) -> String {
        format!(
            "{}{}{}",
            self.base_url,
            SHOW_PATH_PREFIX,
            urlencoding::encode(id)
        )
    }

    /// GET `url`, failing on transport errors and non-2xx statuses.
    async fn get(&self, url: &str, page: &str) -> Result<Response, SourceError> {
        debug!(url, page, "Fetching upstream");
        let start = Instant::now();

        let result = self.send(url).await;

        UPSTREAM_FETCH_DURATION
            .with_label_values(&[page])
            .observe(start.elapsed().as_secs_f64());
        UPSTREAM_FETCHES
            .with_label_values(&[page, if result.is_ok() { "success" } else { "error" }])
            .inc();

        result
    }

    async fn send(&self, url: &str) -> Result<Response, SourceError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::Timeout
            } else if e.is_connect() {
                SourceError::ConnectionFailed(e.to_string())
            } else {
                SourceError::Http(e)
            }
        })?;

        if !response.status().is_success() {
            return Err(SourceError::UpstreamStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }

    async fn get_text(&self, url: &str, page: &str) -> Result<String, SourceError> {
        let response = self.get(url, page).await?;
        response.text().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::Timeout
            } else {
                SourceError::Http(e)
            }
        })
    }
}

#[async_trait]
impl ShowSource for AniworldSource {
    fn name(&self) -> &str {
        "aniworld"
    }

    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>, SourceError> {
        let url = format!("{}{}", self.base_url, CATALOG_PATH);
        let html = self.get_text(&url, "catalog").await?;
        let entries = parse_catalog(&html)?;
        debug!(entries = entries.len(), "Catalog page extracted");
        Ok(entries)
    }

    async fn fetch_show_page(&self, id: &str) -> Result<ShowPage, SourceError> {
        let html = self.get_text(&self.show_url(id), "show").await?;
        let page = parse_show_page(&html, &self.base_url)?;
        debug!(
            id,
            episodes = page.episodes.len(),
            season_links = page.season_links.len(),
            "Show page extracted"
        );
        Ok(page)
    }

    async fn fetch_season_page(&self, link_path: &str) -> Result<Vec<Episode>, SourceError> {
        let url = resolve_url(&self.base_url, link_path);
        let html = self.get_text(&url, "season").await?;
        parse_season(&html)
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, SourceError> {
        let url = resolve_url(&self.base_url, url);
        let response = self.get(&url, "image").await?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
