use animestream_core::{SourceError, ThumbnailError};
use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::metrics::encode_metrics;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error half of every fallible handler.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn api_error(status: StatusCode, error: impl ToString) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

/// Map an upstream failure to the status reported to the client.
pub fn source_error_status(error: &SourceError) -> StatusCode {
    match error {
        e if e.is_not_found() => StatusCode::NOT_FOUND,
        SourceError::Timeout => StatusCode::GATEWAY_TIMEOUT,
        _ => StatusCode::BAD_GATEWAY,
    }
}

pub fn source_error(error: SourceError) -> ApiError {
    api_error(source_error_status(&error), error)
}

pub fn thumbnail_error(error: ThumbnailError) -> ApiError {
    match error {
        ThumbnailError::InvalidId(_) => api_error(StatusCode::BAD_REQUEST, error),
        ThumbnailError::NoThumbnail(_) => api_error(StatusCode::NOT_FOUND, error),
        ThumbnailError::Source(e) => source_error(e),
        ThumbnailError::Io(_) => api_error(StatusCode::INTERNAL_SERVER_ERROR, error),
    }
}

/// GET /ping
pub async fn ping() -> &'static str {
    "pong"
}

/// GET /metrics
pub async fn metrics() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        encode_metrics(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_status() {
        assert_eq!(
            source_error_status(&SourceError::UpstreamStatus {
                status: 404,
                url: String::new()
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            source_error_status(&SourceError::UpstreamStatus {
                status: 503,
                url: String::new()
            }),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            source_error_status(&SourceError::Timeout),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            source_error_status(&SourceError::Parse("bad".to_string())),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_thumbnail_error_status() {
        let (status, _) = thumbnail_error(ThumbnailError::InvalidId("..".to_string()));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = thumbnail_error(ThumbnailError::NoThumbnail("x".to_string()));
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = thumbnail_error(ThumbnailError::Io(std::io::Error::other("disk")));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, _) = thumbnail_error(ThumbnailError::Source(SourceError::Timeout));
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    }
}
