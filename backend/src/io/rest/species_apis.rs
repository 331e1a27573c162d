use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use tracing::info;

use super::ApiError;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_species))
}

/// Species catalog used by the animal forms
pub async fn list_species(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/especies");
    Ok(Json(state.species_service.list_species().await?))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::TestApp;
    use axum::http::{Method, StatusCode};
    use shared::Species;

    #[tokio::test]
    async fn test_list_species() {
        let app = TestApp::new().await;

        let (status, body) = app.send(Method::GET, "/api/especies", None).await;

        assert_eq!(status, StatusCode::OK);
        let species: Vec<Species> = serde_json::from_slice(&body).unwrap();
        assert_eq!(species.len(), 2);
        assert_eq!(species[0].nombre, "Bovino");
    }
}
