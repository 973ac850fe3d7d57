//! Show detail and thumbnail API handlers.

use std::sync::Arc;

use animestream_core::{ShowDetail, ThumbnailCache};
use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, warn};

use super::handlers::{source_error, thumbnail_error, ApiError};
use crate::state::AppState;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// GET /anime/{id}
///
/// Fetch the title's pages and return the merged detail. The cover image is
/// cached in the background when it is not on disk yet.
pub async fn get_anime(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ShowDetail>, ApiError> {
    let detail = state.shows().fetch(&id).await.map_err(source_error)?;

    if !detail.thumbnail_url.trim().is_empty() {
        spawn_thumbnail_store(Arc::clone(&state), id, detail.thumbnail_url.clone());
    }

    Ok(Json(detail))
}

fn spawn_thumbnail_store(state: Arc<AppState>, id: String, url: String) {
    tokio::spawn(async move {
        let thumbnails = state.thumbnails();
        match thumbnails.contains(&id).await {
            Ok(true) => {
                debug!(id, "Thumbnail already cached");
                return;
            }
            Ok(false) => {}
            Err(e) => {
                warn!(id, error = %e, "Thumbnail cache lookup failed");
                return;
            }
        }

        if let Err(e) = thumbnails
            .fetch_and_store(state.source().as_ref(), &id, &url)
            .await
        {
            warn!(id, url, error = %e, "Failed to cache thumbnail");
        }
    });
}

/// GET /thumbnail/{id}
///
/// Serve the cached cover image, fetching and caching it first on a miss.
pub async fn get_thumbnail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    ThumbnailCache::validate_id(&id).map_err(thumbnail_error)?;

    if let Some(bytes) = state.thumbnails().read(&id).await.map_err(thumbnail_error)? {
        return Ok(image_response(bytes));
    }

    // Only the primary page is needed to resolve the cover URL.
    let page = state
        .source()
        .fetch_show_page(&id)
        .await
        .map_err(source_error)?;

    let bytes = state
        .thumbnails()
        .fetch_and_store(state.source().as_ref(), &id, &page.thumbnail_url)
        .await
        .map_err(thumbnail_error)?;

    Ok(image_response(bytes))
}

fn image_response(bytes: Vec<u8>) -> Response {
    let content_type = infer::get(&bytes)
        .map(|kind| kind.mime_type())
        .unwrap_or(FALLBACK_CONTENT_TYPE);

    ([(header::CONTENT_TYPE, content_type)], bytes).into_response()
}
