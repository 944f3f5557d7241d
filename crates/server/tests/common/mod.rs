//! Common test utilities for API testing with a mock design source.
//!
//! This module provides a test fixture that builds the router in-process with
//! a [`MockDesignSource`] injected and all output paths pointing into a
//! temporary directory.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use figma_export_core::testing::MockDesignSource;
use figma_export_core::{Config, DesignSource, ExportConfig, FigmaConfig, ServerConfig};

/// Re-export fixtures for test convenience
pub use figma_export_core::testing::fixtures;

/// Test fixture for API testing with a mock Figma API.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_fetch_file() {
///     let fixture = TestFixture::new();
///     fixture.source.add_file("KEY", fixtures::file_with_images(&[])).await;
///
///     let response = fixture.post_empty("/api/v1/figma/file?file_key=KEY").await;
///
///     assert_eq!(response.body["status"], "success");
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock design source - configure files, URLs and image bodies
    pub source: Arc<MockDesignSource>,
    /// Temporary directory holding every output path
    pub temp_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a new test fixture with an empty mock source.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let source = Arc::new(MockDesignSource::new());

        let config = Config {
            figma: FigmaConfig {
                token: Some("figd_secret_test_token".to_string()),
                ..Default::default()
            },
            export: ExportConfig {
                file_key: None,
                document_path: temp_dir.path().join("figmaFile.json"),
                images_dir: temp_dir.path().join("figmaImages"),
                summary: false,
                summary_path: temp_dir.path().join("figmaExtracted.json"),
            },
            server: ServerConfig {
                host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
                port: 8080, // Not used for in-process testing
            },
        };

        let state = Arc::new(figma_export_server::state::AppState::new(
            config,
            Arc::clone(&source) as Arc<dyn DesignSource>,
        ));
        let router = figma_export_server::api::create_router(state);

        Self {
            router,
            source,
            temp_dir,
        }
    }

    /// Path of the saved document.
    pub fn document_path(&self) -> PathBuf {
        self.temp_dir.path().join("figmaFile.json")
    }

    /// Path of the images directory.
    pub fn images_dir(&self) -> PathBuf {
        self.temp_dir.path().join("figmaImages")
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a POST request without a body.
    pub async fn post_empty(&self, path: &str) -> TestResponse {
        self.request("POST", path, None).await
    }

    /// Send a POST request with raw string body (for testing malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        let request = request_builder.body(body).unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}
