use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::ErrorResponse;
use tracing::error;

use crate::domain::DomainError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor.";

/// Error returned by every handler; renders as `{ "error": "..." }`
#[derive(Debug)]
pub struct ApiError(DomainError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DomainError::Validation(_) | DomainError::InvalidReference(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Conflict(_) => StatusCode::CONFLICT,
            DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DomainError::Validation(format!(
            "Cuerpo de la solicitud inválido: {}",
            rejection.body_text()
        )))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(DomainError::Validation(format!(
            "Parámetro de ruta inválido: {}",
            rejection.body_text()
        )))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self.0 {
            DomainError::Storage(e) => {
                // Store details stay in the log
                error!("Unhandled storage failure: {}", e);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageError;

    async fn render(err: DomainError) -> (StatusCode, ErrorResponse) {
        let response = ApiError::from(err).into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_error_kinds_map_to_status_codes() {
        let cases = [
            (DomainError::Validation("faltan campos".into()), StatusCode::BAD_REQUEST),
            (DomainError::InvalidReference("especie".into()), StatusCode::BAD_REQUEST),
            (DomainError::NotFound("no existe".into()), StatusCode::NOT_FOUND),
            (DomainError::Conflict("duplicado".into()), StatusCode::CONFLICT),
        ];

        for (err, expected) in cases {
            let message = err.to_string();
            let (status, body) = render(err).await;
            assert_eq!(status, expected);
            assert_eq!(body.error, message);
        }
    }

    #[tokio::test]
    async fn test_storage_failures_are_opaque() {
        let err = DomainError::Storage(StorageError::Database(sqlx::Error::PoolClosed));

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, INTERNAL_ERROR_MESSAGE);
    }
}
