//! HTML extraction for listing, detail and season pages.
//!
//! Missing nodes and attributes degrade to empty strings (and to 0 for
//! numbers); only an unparsable selector is an error.

use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::{ShowPage, SourceError};
use crate::catalog::CatalogEntry;
use crate::episodes::{parse_number, Episode};

/// Path prefix of detail pages; the remainder is the title id.
pub(crate) const SHOW_PATH_PREFIX: &str = "/anime/stream/";

fn selector(css: &str) -> Result<Selector, SourceError> {
    Selector::parse(css).map_err(|e| SourceError::Parse(format!("selector '{}': {}", css, e)))
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn first_attr(document: &Html, selector: &Selector, attr: &str) -> String {
    document
        .select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .unwrap_or_default()
        .to_string()
}

/// Extract every title from the listing page.
///
/// Entries whose link does not yield an id are skipped, as are repeats of an
/// id already seen (the first occurrence wins).
pub fn parse_catalog(html: &str) -> Result<Vec<CatalogEntry>, SourceError> {
    let document = Html::parse_document(html);
    let link_selector = selector("#seriesContainer li a")?;

    let mut entries = Vec::new();
    let mut seen = HashSet::new();
    for anchor in document.select(&link_selector) {
        let link_path = anchor.value().attr("href").unwrap_or_default();
        let id = link_path
            .strip_prefix(SHOW_PATH_PREFIX)
            .unwrap_or(link_path)
            .trim_matches('/');

        if id.is_empty() {
            debug!(link_path, "Skipping catalog link without id");
            continue;
        }
        if !seen.insert(id.to_string()) {
            debug!(id, link_path, "Skipping duplicate catalog id");
            continue;
        }

        let alternative_titles = anchor
            .value()
            .attr("data-alternative-title")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        entries.push(CatalogEntry {
            id: id.to_string(),
            title: text_of(anchor),
            alternative_titles,
            link_path: link_path.to_string(),
        });
    }

    Ok(entries)
}

/// Extract the season number and episode rows from a season page.
pub fn parse_season(html: &str) -> Result<Vec<Episode>, SourceError> {
    let document = Html::parse_document(html);
    parse_season_document(&document)
}

fn parse_season_document(document: &Html) -> Result<Vec<Episode>, SourceError> {
    let season_selector = selector("meta[itemprop='seasonNumber']")?;
    let episode_selector = selector("[itemprop='episode']")?;
    let anchor_selector = selector(".seasonEpisodeTitle a")?;
    let label_selector = selector("strong, span")?;

    let season_number = parse_number(&first_attr(document, &season_selector, "content"));

    let episodes = document
        .select(&episode_selector)
        .map(|row| {
            let anchor = row.select(&anchor_selector).next();
            let link_path = anchor
                .and_then(|a| a.value().attr("href"))
                .unwrap_or_default()
                .to_string();

            let labels: Vec<String> = anchor
                .map(|a| a.select(&label_selector).map(text_of).collect())
                .unwrap_or_default();
            let title = labels.first().cloned().unwrap_or_default();
            let secondary_title = labels.last().cloned().unwrap_or_default();

            Episode {
                link_path,
                title,
                secondary_title,
                episode_number: parse_number(
                    row.value().attr("data-episode-season-id").unwrap_or_default(),
                ),
                season_number,
            }
        })
        .collect();

    Ok(episodes)
}

/// Extract the primary detail page of a title.
///
/// The cover image path is resolved against `base_url`.
pub fn parse_show_page(html: &str, base_url: &str) -> Result<ShowPage, SourceError> {
    let document = Html::parse_document(html);
    let cover_selector = selector(".seriesCoverBox img")?;
    let title_selector = selector(".series-title h1 span")?;
    let summary_selector = selector("[itemprop='accessibilitySummary']")?;
    let season_link_selector = selector("#stream ul:first-child li a:not(.active)")?;

    let cover_path = first_attr(&document, &cover_selector, "data-src");
    let thumbnail_url = if cover_path.is_empty() {
        String::new()
    } else {
        resolve_url(base_url, &cover_path)
    };

    let title = document
        .select(&title_selector)
        .next()
        .map(text_of)
        .unwrap_or_default();

    let season_links = document
        .select(&season_link_selector)
        .filter_map(|a| a.value().attr("href"))
        .map(str::to_string)
        .collect();

    Ok(ShowPage {
        thumbnail_url,
        title,
        summary: first_attr(&document, &summary_selector, "data-full-description"),
        episodes: parse_season_document(&document)?,
        season_links,
    })
}

/// Join a site-relative path onto the base URL; absolute URLs pass through.
pub(crate) fn resolve_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
