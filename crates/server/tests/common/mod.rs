//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! with a mock listing site injected, enabling E2E testing without
//! network access.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use animestream_core::{testing::MockShowSource, Config, ShowSource, ThumbnailConfig};

/// Re-export fixtures for test convenience
pub use animestream_core::testing::fixtures;

/// Test fixture for E2E testing with a mock listing site.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_search() {
///     let fixture = TestFixture::new().await;
///     fixture.source.set_catalog(vec![fixtures::catalog_entry("k", "K", &[])]).await;
///     fixture.get("/animes").await;
///
///     let response = fixture.get("/search?phrase=k").await;
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock listing site - configure pages and failures
    pub source: Arc<MockShowSource>,
    /// Temporary directory holding the thumbnail cache
    pub temp_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub bytes: Bytes,
    pub body: Value,
}

impl TestFixture {
    /// Create a new test fixture with default configuration.
    pub async fn new() -> Self {
        Self::with_config(Config::default()).await
    }

    /// Create a test fixture from a custom configuration.
    ///
    /// The thumbnail cache directory is always redirected into a temp dir.
    pub async fn with_config(mut config: Config) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        config.thumbnails = ThumbnailConfig {
            cache_dir: temp_dir.path().join("thumbnails"),
        };

        let source = Arc::new(MockShowSource::new());
        let state = Arc::new(animestream_server::state::AppState::new(
            config,
            Arc::clone(&source) as Arc<dyn ShowSource>,
        ));
        let router = animestream_server::api::create_router(state);

        Self {
            router,
            source,
            temp_dir,
        }
    }

    /// Path of the cached thumbnail for `id`.
    pub fn thumbnail_path(&self, id: &str) -> PathBuf {
        self.temp_dir.path().join("thumbnails").join(id)
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Method::GET, path).await
    }

    /// Send a request with an empty body to the test server.
    pub async fn request(&self, method: Method, path: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            headers,
            bytes,
            body,
        }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}
