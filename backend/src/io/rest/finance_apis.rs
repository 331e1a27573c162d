//! # REST API for Finances
//!
//! Income and expense transactions, listed most recent first.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::info;

use shared::TransactionRequest;

use super::extract::{ApiJson, ApiPath};
use super::ApiError;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_transactions).post(create_transaction))
        .route(
            "/:id",
            get(get_transaction).put(update_transaction).delete(delete_transaction),
        )
}

pub async fn list_transactions(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/finanzas");
    Ok(Json(state.finance_service.list_transactions().await?))
}

pub async fn get_transaction(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/finanzas/{}", id);
    Ok(Json(state.finance_service.get_transaction(id).await?))
}

pub async fn create_transaction(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<TransactionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/finanzas - request: {:?}", request);
    let transaction = state.finance_service.create_transaction(request).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

pub async fn update_transaction(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(request): ApiJson<TransactionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("PUT /api/finanzas/{} - request: {:?}", id, request);
    Ok(Json(state.finance_service.update_transaction(id, request).await?))
}

pub async fn delete_transaction(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("DELETE /api/finanzas/{}", id);
    state.finance_service.delete_transaction(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
