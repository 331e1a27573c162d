use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::info;

use shared::MilkProductionRequest;

use super::extract::{ApiJson, ApiPath};
use super::ApiError;
use crate::AppState;

/// Create the milk production API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_records).post(create_record))
        .route("/:id", get(get_record).put(update_record).delete(delete_record))
}

pub async fn list_records(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/produccion");
    Ok(Json(state.milk_production_service.list_records().await?))
}

pub async fn get_record(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/produccion/{}", id);
    Ok(Json(state.milk_production_service.get_record(id).await?))
}

pub async fn create_record(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<MilkProductionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/produccion - request: {:?}", request);
    let record = state.milk_production_service.create_record(request).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn update_record(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(request): ApiJson<MilkProductionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("PUT /api/produccion/{} - request: {:?}", id, request);
    Ok(Json(state.milk_production_service.update_record(id, request).await?))
}

pub async fn delete_record(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("DELETE /api/produccion/{}", id);
    state.milk_production_service.delete_record(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
