//! Types for the title catalog.

use serde::{Deserialize, Serialize};

/// A single title known to the listing site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stable identifier derived from the link path (never from the title).
    pub id: String,
    /// Primary display name.
    pub title: String,
    /// Alternative names (other languages, romanizations).
    #[serde(default)]
    pub alternative_titles: Vec<String>,
    /// Site-relative path of the detail page.
    pub link_path: String,
}

impl CatalogEntry {
    /// All names this entry can be matched by, primary title first.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.title.as_str())
            .chain(self.alternative_titles.iter().map(String::as_str))
    }
}

/// Immutable point-in-time view of the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CatalogSnapshot {
    entries: Vec<CatalogEntry>,
}

impl CatalogSnapshot {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<CatalogEntry>> for CatalogSnapshot {
    fn from(entries: Vec<CatalogEntry>) -> Self {
        Self::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, title: &str, alternative_titles: &[&str]) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            title: title.to_string(),
            alternative_titles: alternative_titles.iter().map(|s| s.to_string()).collect(),
            link_path: format!("/anime/stream/{}", id),
        }
    }

    #[test]
    fn test_titles_primary_first() {
        let e = entry("aot", "Attack on Titan", &["Shingeki no Kyojin", "AoT"]);
        let titles: Vec<&str> = e.titles().collect();
        assert_eq!(titles, vec!["Attack on Titan", "Shingeki no Kyojin", "AoT"]);
    }

    #[test]
    fn test_catalog_entry_json_field_names() {
        let e = entry("aot", "Attack on Titan", &["Shingeki no Kyojin"]);
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["id"], "aot");
        assert_eq!(json["alternative_titles"][0], "Shingeki no Kyojin");
        assert_eq!(json["link_path"], "/anime/stream/aot");
    }

    #[test]
    fn test_snapshot_serializes_as_array() {
        let snapshot = CatalogSnapshot::new(vec![entry("a", "A", &[]), entry("b", "B", &[])]);
        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.is_array());
        assert_eq!(json.as_array().unwrap().len(), 2);
        assert_eq!(snapshot.len(), 2);
        assert!(!snapshot.is_empty());
    }
}
