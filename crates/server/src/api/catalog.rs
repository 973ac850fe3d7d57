//! Catalog API handlers.

use std::sync::Arc;

use animestream_core::{metrics::CATALOG_REFRESHES, rank, CatalogEntry};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::{error, info};

use super::handlers::{api_error, source_error, ApiError};
use crate::state::AppState;

// ============================================================================
// Request types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub phrase: String,
    #[serde(default)]
    pub limit: Option<usize>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /animes
///
/// Refresh the catalog from the listing site and return every entry.
/// A failed refresh leaves the previous snapshot in place.
pub async fn list_animes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CatalogEntry>>, ApiError> {
    let entries = match state.source().fetch_catalog().await {
        Ok(entries) => entries,
        Err(e) => {
            CATALOG_REFRESHES.with_label_values(&["error"]).inc();
            error!(error = %e, "Catalog refresh failed");
            return Err(source_error(e));
        }
    };

    let snapshot = state.catalog().publish(entries).await;
    CATALOG_REFRESHES.with_label_values(&["success"]).inc();
    info!(entries = snapshot.len(), "Catalog refreshed");

    Ok(Json(snapshot.entries().to_vec()))
}

/// GET /search?phrase=<text>[&limit=<n>]
///
/// Rank the last published snapshot against the phrase.
pub async fn search(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<CatalogEntry>>, ApiError> {
    let Query(params) =
        params.map_err(|rejection| api_error(StatusCode::BAD_REQUEST, rejection.body_text()))?;
    let limit = state.config().search.effective_limit(params.limit);
    let snapshot = state.catalog().snapshot().await;

    Ok(Json(rank(&params.phrase, &snapshot, limit)))
}
