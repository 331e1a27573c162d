//! # FincaPiza Backend
//!
//! REST backend for the farm: herd, vaccinations, finances, milk production
//! and the dashboard summary.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST API under /api)
//!     ↓
//! Domain Layer (services, validation, error classification)
//!     ↓
//! Storage Layer (SQLite through sqlx)
//! ```
//!
//! `main.rs` reads [`config::AppConfig`], calls [`initialize_backend`] and
//! serves [`create_router`].

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::Method,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{AppConfig, SummarySpecies};
use crate::domain::{
    AnimalService, DashboardService, FinanceService, MilkProductionService, SpeciesService,
    VaccineService,
};
use crate::storage::DbConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub animal_service: AnimalService,
    pub species_service: SpeciesService,
    pub vaccine_service: VaccineService,
    pub finance_service: FinanceService,
    pub milk_production_service: MilkProductionService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub fn new(db: DbConnection, summary_species: SummarySpecies) -> Self {
        Self {
            animal_service: AnimalService::new(db.clone()),
            species_service: SpeciesService::new(db.clone()),
            vaccine_service: VaccineService::new(db.clone()),
            finance_service: FinanceService::new(db.clone()),
            milk_production_service: MilkProductionService::new(db.clone()),
            dashboard_service: DashboardService::new(db, summary_species),
        }
    }
}

/// Open the database and build every service.
///
/// The connection is returned alongside the state so the caller can close
/// the pool on shutdown.
pub async fn initialize_backend(config: &AppConfig) -> Result<(AppState, DbConnection)> {
    info!("Setting up database at {}", config.database_url);
    let db = DbConnection::new(&config.database_url, config.max_connections).await?;

    info!("Setting up application state");
    let state = AppState::new(db.clone(), config.summary_species);

    Ok((state, db))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);
    let cors = match config.cors_allowed_origin.clone() {
        Some(origin) => cors.allow_origin(origin),
        None => cors.allow_origin(Any),
    };

    let mut app = Router::new().nest("/api", io::rest::api_router());

    if let Some(dist) = &config.frontend_dist {
        info!("Serving frontend assets from {}", dist.display());
        app = app.fallback_service(ServeDir::new(dist));
    }

    app.layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
