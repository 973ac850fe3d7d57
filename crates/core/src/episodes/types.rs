//! Types for episode listings and show details.

use serde::{Deserialize, Serialize};

/// One episode as listed on a season page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Site-relative path of the episode page.
    pub link_path: String,
    /// Primary label.
    pub title: String,
    /// Alternate-language label; equals `title` when the page has only one.
    #[serde(default)]
    pub secondary_title: String,
    /// Episode number within the season (0 when the page carried none).
    #[serde(rename = "episode")]
    pub episode_number: i64,
    /// Season number (0 when the page carried none).
    #[serde(rename = "season")]
    pub season_number: i64,
}

impl Episode {
    /// Sort key used when merging batches.
    pub fn position(&self) -> (i64, i64) {
        (self.season_number, self.episode_number)
    }
}

/// Full detail view of a title, built fresh per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowDetail {
    /// Absolute URL of the cover image (empty when the page had none).
    #[serde(rename = "thumbnail")]
    pub thumbnail_url: String,
    pub title: String,
    pub summary: String,
    pub episodes: Vec<Episode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episode_json_field_names() {
        let episode = Episode {
            link_path: "/anime/stream/x/staffel-1/episode-2".to_string(),
            title: "Der Anfang".to_string(),
            secondary_title: "The Beginning".to_string(),
            episode_number: 2,
            season_number: 1,
        };

        let json = serde_json::to_value(&episode).unwrap();
        assert_eq!(json["link_path"], "/anime/stream/x/staffel-1/episode-2");
        assert_eq!(json["secondary_title"], "The Beginning");
        assert_eq!(json["episode"], 2);
        assert_eq!(json["season"], 1);
    }

    #[test]
    fn test_show_detail_thumbnail_field_name() {
        let detail = ShowDetail {
            thumbnail_url: "https://example.org/cover.jpg".to_string(),
            title: "Show".to_string(),
            summary: "About".to_string(),
            episodes: vec![],
        };

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["thumbnail"], "https://example.org/cover.jpg");
        assert!(json["episodes"].as_array().unwrap().is_empty());
    }
}
