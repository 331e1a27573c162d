use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use tracing::info;

use shared::VaccineRequest;

use super::extract::ApiJson;
use super::ApiError;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_vaccines).post(create_vaccine))
}

pub async fn list_vaccines(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/vacunas");
    Ok(Json(state.vaccine_service.list_vaccines().await?))
}

pub async fn create_vaccine(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<VaccineRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/vacunas - request: {:?}", request);
    let vaccine = state.vaccine_service.create_vaccine(request).await?;
    Ok((StatusCode::CREATED, Json(vaccine)))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::TestApp;
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use shared::Vaccine;

    #[tokio::test]
    async fn test_create_and_list_vaccines() {
        let app = TestApp::new().await;

        let (status, body) = app
            .send(
                Method::POST,
                "/api/vacunas",
                Some(json!({ "nombre": "Brucelosis", "descripcion": "Cepa 19" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        let created: Vaccine = serde_json::from_slice(&body).unwrap();
        assert_eq!(created.descripcion.as_deref(), Some("Cepa 19"));

        let (status, body) = app.send(Method::GET, "/api/vacunas", None).await;
        assert_eq!(status, StatusCode::OK);
        let vaccines: Vec<Vaccine> = serde_json::from_slice(&body).unwrap();
        assert_eq!(vaccines, vec![created]);
    }

    #[tokio::test]
    async fn test_vaccine_without_name_is_rejected() {
        let app = TestApp::new().await;

        let (status, _) = app
            .send(Method::POST, "/api/vacunas", Some(json!({ "descripcion": "sin nombre" })))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
