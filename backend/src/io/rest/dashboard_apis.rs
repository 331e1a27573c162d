use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use tracing::info;

use super::ApiError;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/summary", get(get_summary))
}

/// Active animal counts and the finance balance
pub async fn get_summary(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/dashboard/summary");
    Ok(Json(state.dashboard_service.summary().await?))
}
