//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Upstream fetches (listing, detail, season and image requests)
//! - Catalog refreshes and snapshot size
//! - Season page aggregation
//! - Thumbnail cache

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts};

// =============================================================================
// Upstream Metrics
// =============================================================================

/// Upstream fetch duration in seconds.
pub static UPSTREAM_FETCH_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "animestream_upstream_fetch_duration_seconds",
            "Duration of upstream page and image fetches",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["page"], // "catalog", "show", "season", "image"
    )
    .unwrap()
});

/// Upstream fetches total.
pub static UPSTREAM_FETCHES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "animestream_upstream_fetches_total",
            "Total upstream fetches",
        ),
        &["page", "status"], // status: "success", "error"
    )
    .unwrap()
});

// =============================================================================
// Catalog Metrics
// =============================================================================

/// Catalog refreshes by result.
pub static CATALOG_REFRESHES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "animestream_catalog_refreshes_total",
            "Total catalog refresh attempts",
        ),
        &["result"], // "success", "error"
    )
    .unwrap()
});

/// Entries in the current catalog snapshot.
pub static CATALOG_ENTRIES: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "animestream_catalog_entries",
        "Number of entries in the current catalog snapshot",
    )
    .unwrap()
});

// =============================================================================
// Episode Aggregation Metrics
// =============================================================================

/// Season page fetches during aggregation.
pub static SEASON_PAGES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "animestream_season_pages_total",
            "Season pages fetched while building show details",
        ),
        &["result"], // "success", "skipped"
    )
    .unwrap()
});

// =============================================================================
// Thumbnail Metrics
// =============================================================================

/// Thumbnail cache lookups and writes.
pub static THUMBNAIL_CACHE: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "animestream_thumbnail_cache_total",
            "Thumbnail cache operations",
        ),
        &["result"], // "hit", "miss", "stored", "error"
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        // Upstream
        Box::new(UPSTREAM_FETCH_DURATION.clone()),
        Box::new(UPSTREAM_FETCHES.clone()),
        // Catalog
        Box::new(CATALOG_REFRESHES.clone()),
        Box::new(CATALOG_ENTRIES.clone()),
        // Aggregation
        Box::new(SEASON_PAGES.clone()),
        // Thumbnails
        Box::new(THUMBNAIL_CACHE.clone()),
    ]
}
