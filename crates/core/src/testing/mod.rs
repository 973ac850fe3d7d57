//! Testing utilities and mock implementations.
//!
//! This module provides a mock implementation of the `ShowSource` trait,
//! allowing service and HTTP tests without reaching the real listing site.
//!
//! # Example
//!
//! ```rust,ignore
//! use animestream_core::testing::{fixtures, MockShowSource};
//!
//! let source = MockShowSource::new();
//! source.set_catalog(vec![fixtures::catalog_entry("k", "K", &[])]).await;
//!
//! // Use in AppState...
//! ```

mod mock_show_source;

pub use mock_show_source::MockShowSource;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::CatalogEntry;
    use crate::episodes::Episode;
    use crate::source::ShowPage;

    /// Create a catalog entry whose link path follows the site's layout.
    pub fn catalog_entry(id: &str, title: &str, alternative_titles: &[&str]) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            title: title.to_string(),
            alternative_titles: alternative_titles.iter().map(|t| t.to_string()).collect(),
            link_path: format!("/anime/stream/{}", id),
        }
    }

    /// Create an episode with generated labels.
    pub fn episode(season: i64, number: i64) -> Episode {
        titled_episode(season, number, &format!("Episode {}", number))
    }

    /// Create an episode with an explicit title.
    pub fn titled_episode(season: i64, number: i64, title: &str) -> Episode {
        Episode {
            link_path: format!("/anime/stream/test/staffel-{}/episode-{}", season, number),
            title: title.to_string(),
            secondary_title: title.to_string(),
            episode_number: number,
            season_number: season,
        }
    }

    /// Create a primary page with the given episodes and season links.
    pub fn show_page(episodes: Vec<Episode>, season_links: &[&str]) -> ShowPage {
        ShowPage {
            thumbnail_url: String::new(),
            title: "Test Show".to_string(),
            summary: "A show used in tests.".to_string(),
            episodes,
            season_links: season_links.iter().map(|l| l.to_string()).collect(),
        }
    }
}
