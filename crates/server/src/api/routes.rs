use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::middleware::{cors_middleware, metrics_middleware};
use super::{catalog, handlers, shows};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Liveness and metrics
        .route("/ping", get(handlers::ping))
        .route("/metrics", get(handlers::metrics))
        // Catalog
        .route("/animes", get(catalog::list_animes))
        .route("/search", get(catalog::search))
        // Show details
        .route("/anime/{id}", get(shows::get_anime))
        .route("/thumbnail/{id}", get(shows::get_thumbnail))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(cors_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
