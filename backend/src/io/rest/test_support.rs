//! Router harness for the handler tests

use axum::{
    body::{Body, Bytes},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`

use crate::config::AppConfig;
use crate::storage::DbConnection;
use crate::{create_router, AppState};

/// The full application router over a fresh in-memory database
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = AppConfig::from_lookup(|_| None).expect("Failed to build default config");
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let state = AppState::new(db, config.summary_species);

        Self {
            router: create_router(state, &config),
        }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Bytes) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes)
    }
}
