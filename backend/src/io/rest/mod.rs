//! # REST API Interface Layer
//!
//! HTTP endpoints for FincaPiza. Each resource has its own `*_apis` module
//! with a `router()` that is nested under `/api` by [`crate::create_router`].
//!
//! Handlers deserialize the request, log it, call one service method and
//! return either the DTO with its status code or an [`ApiError`]. No business
//! rules live here.

pub mod animal_apis;
pub mod dashboard_apis;
pub mod error;
pub mod extract;
pub mod finance_apis;
pub mod health_apis;
pub mod production_apis;
pub mod species_apis;
pub mod vaccine_apis;

#[cfg(test)]
pub(crate) mod test_support;

use axum::Router;

use crate::AppState;

pub use error::ApiError;

/// All resource routers, relative to `/api`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/animales", animal_apis::router())
        .nest("/especies", species_apis::router())
        .nest("/vacunas", vaccine_apis::router())
        .nest("/finanzas", finance_apis::router())
        .nest("/produccion", production_apis::router())
        .nest("/dashboard", dashboard_apis::router())
        .merge(health_apis::router())
}
