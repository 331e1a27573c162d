//! # REST API for Animals
//!
//! CRUD on the herd plus the vaccination and medical-history records hanging
//! off each animal. Vaccination records are deleted by their own id under
//! `/vacunas/:registro_id`.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::info;

use shared::{AnimalRequest, MedicalHistoryRequest, VaccinationRequest};

use super::extract::{ApiJson, ApiPath};
use super::ApiError;
use crate::AppState;

/// Create the animal API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_animals).post(create_animal))
        .route("/:id", get(get_animal).put(update_animal).delete(delete_animal))
        .route("/:id/vacunas", post(add_vaccination))
        .route("/:id/historial", post(add_medical_entry))
        .route("/vacunas/:registro_id", delete(delete_vaccination))
}

pub async fn list_animals(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/animales");
    Ok(Json(state.animal_service.list_animals().await?))
}

pub async fn get_animal(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/animales/{}", id);
    Ok(Json(state.animal_service.get_animal(id).await?))
}

pub async fn create_animal(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AnimalRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/animales - request: {:?}", request);
    let animal = state.animal_service.create_animal(request).await?;
    Ok((StatusCode::CREATED, Json(animal)))
}

pub async fn update_animal(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(request): ApiJson<AnimalRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("PUT /api/animales/{} - request: {:?}", id, request);
    Ok(Json(state.animal_service.update_animal(id, request).await?))
}

pub async fn delete_animal(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("DELETE /api/animales/{}", id);
    state.animal_service.delete_animal(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_vaccination(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(request): ApiJson<VaccinationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/animales/{}/vacunas - request: {:?}", id, request);
    let record = state.animal_service.add_vaccination(id, request).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn delete_vaccination(
    State(state): State<AppState>,
    ApiPath(registro_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("DELETE /api/animales/vacunas/{}", registro_id);
    state.animal_service.delete_vaccination(registro_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_medical_entry(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(request): ApiJson<MedicalHistoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/animales/{}/historial - request: {:?}", id, request);
    let entry = state.animal_service.add_medical_entry(id, request).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::TestApp;
    use axum::http::{Method, StatusCode};
    use serde_json::{json, Value};
    use shared::{Animal, AnimalDetail, AnimalWithSpecies, ErrorResponse, VaccinationRecord, Vaccine};

    async fn create_vaccine(app: &TestApp) -> Vaccine {
        let (status, body) = app
            .send(Method::POST, "/api/vacunas", Some(json!({ "nombre": "Aftosa" })))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        serde_json::from_slice(&body).unwrap()
    }

    async fn create_animal(app: &TestApp, tag: &str) -> Animal {
        let (status, body) = app
            .send(
                Method::POST,
                "/api/animales",
                Some(json!({ "numero_etiqueta": tag, "especie_id": "1", "fecha_nacimiento": "2022-06-15" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_list_animals() {
        let app = TestApp::new().await;
        let created = create_animal(&app, "A1").await;

        assert!(created.id > 0);
        assert_eq!(created.estado, "activo");
        assert_eq!(created.fecha_nacimiento.as_deref(), Some("2022-06-15T00:00:00.000Z"));

        let (status, body) = app.send(Method::GET, "/api/animales", None).await;
        assert_eq!(status, StatusCode::OK);
        let animals: Vec<AnimalWithSpecies> = serde_json::from_slice(&body).unwrap();
        assert_eq!(animals.len(), 1);
        assert_eq!(animals[0].especie.nombre, "Bovino");
    }

    #[tokio::test]
    async fn test_duplicate_tag_is_conflict() {
        let app = TestApp::new().await;
        create_animal(&app, "A1").await;

        let (status, body) = app
            .send(Method::POST, "/api/animales", Some(json!({ "numero_etiqueta": "A1", "especie_id": 2 })))
            .await;

        assert_eq!(status, StatusCode::CONFLICT);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(!error.error.is_empty());

        let (_, body) = app.send(Method::GET, "/api/animales", None).await;
        let animals: Vec<Value> = serde_json::from_slice(&body).unwrap();
        assert_eq!(animals.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_fields_and_unknown_species_are_bad_requests() {
        let app = TestApp::new().await;

        let (status, _) = app
            .send(Method::POST, "/api/animales", Some(json!({ "nombre": "Lola" })))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = app
            .send(Method::POST, "/api/animales", Some(json!({ "numero_etiqueta": "A9", "especie_id": 77 })))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wrongly_typed_body_is_bad_request_with_error_body() {
        let app = TestApp::new().await;

        let (status, body) = app
            .send(Method::POST, "/api/animales", Some(json!({ "numero_etiqueta": 123, "especie_id": 1 })))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error.error.starts_with("Cuerpo de la solicitud inválido"));
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_bad_request_with_error_body() {
        let app = TestApp::new().await;

        for uri in ["/api/animales/abc", "/api/animales/99999999999999999999"] {
            let (status, body) = app.send(Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
            assert!(error.error.starts_with("Parámetro de ruta inválido"));
        }

        let (status, body) = app.send(Method::DELETE, "/api/animales/vacunas/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(serde_json::from_slice::<ErrorResponse>(&body).is_ok());
    }

    #[tokio::test]
    async fn test_unknown_animal_is_not_found() {
        let app = TestApp::new().await;

        let (status, body) = app.send(Method::GET, "/api/animales/404", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "Animal no encontrado.");

        let (status, _) = app.send(Method::DELETE, "/api/animales/404", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_put_after_delete_is_not_found() {
        let app = TestApp::new().await;
        let animal = create_animal(&app, "A1").await;
        let uri = format!("/api/animales/{}", animal.id);

        let (status, body) = app
            .send(Method::PUT, &uri, Some(json!({ "numero_etiqueta": "A1", "especie_id": 2, "estado": "vendido" })))
            .await;
        assert_eq!(status, StatusCode::OK);
        let updated: Animal = serde_json::from_slice(&body).unwrap();
        assert_eq!(updated.estado, "vendido");
        assert_eq!(updated.fecha_nacimiento, None);

        let (status, body) = app.send(Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        let (status, _) = app.send(Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = app
            .send(Method::PUT, &uri, Some(json!({ "numero_etiqueta": "A1", "especie_id": 1 })))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_vaccination_history_scenario() {
        let app = TestApp::new().await;
        let vaccine = create_vaccine(&app).await;
        let animal = create_animal(&app, "A1").await;
        let uri = format!("/api/animales/{}", animal.id);

        let (_, body) = app.send(Method::GET, &uri, None).await;
        let detail: AnimalDetail = serde_json::from_slice(&body).unwrap();
        assert!(detail.vacunaciones.is_empty());

        let (status, body) = app
            .send(
                Method::POST,
                &format!("{}/vacunas", uri),
                Some(json!({ "vacuna_id": vaccine.id, "fecha_aplicacion": "2024-01-01" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        let record: VaccinationRecord = serde_json::from_slice(&body).unwrap();

        let (_, body) = app.send(Method::GET, &uri, None).await;
        let detail: AnimalDetail = serde_json::from_slice(&body).unwrap();
        assert_eq!(detail.vacunaciones.len(), 1);
        assert_eq!(detail.vacunaciones[0].record.fecha_aplicacion, "2024-01-01T00:00:00.000Z");
        assert_eq!(detail.vacunaciones[0].vacuna.nombre, "Aftosa");

        let (status, _) = app
            .send(Method::DELETE, &format!("/api/animales/vacunas/{}", record.id), None)
            .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, body) = app.send(Method::GET, &uri, None).await;
        let detail: AnimalDetail = serde_json::from_slice(&body).unwrap();
        assert!(detail.vacunaciones.is_empty());

        let (status, _) = app
            .send(Method::DELETE, &format!("/api/animales/vacunas/{}", record.id), None)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_vaccination_requires_vaccine_and_date() {
        let app = TestApp::new().await;
        let animal = create_animal(&app, "A1").await;

        let (status, _) = app
            .send(
                Method::POST,
                &format!("/api/animales/{}/vacunas", animal.id),
                Some(json!({ "fecha_aplicacion": "2024-01-01" })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = app
            .send(
                Method::POST,
                "/api/animales/999/vacunas",
                Some(json!({ "vacuna_id": 1, "fecha_aplicacion": "2024-01-01" })),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_medical_history_entry() {
        let app = TestApp::new().await;
        let animal = create_animal(&app, "A1").await;

        let (status, _) = app
            .send(
                Method::POST,
                &format!("/api/animales/{}/historial", animal.id),
                Some(json!({ "fecha": "2024-04-01", "descripcion": "Mastitis", "veterinario": "Dra. Pérez" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, body) = app.send(Method::GET, &format!("/api/animales/{}", animal.id), None).await;
        let detail: AnimalDetail = serde_json::from_slice(&body).unwrap();
        assert_eq!(detail.historial_medico.len(), 1);
        assert_eq!(detail.historial_medico[0].descripcion, "Mastitis");
    }
}
