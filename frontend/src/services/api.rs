use gloo::net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    Animal, AnimalDetail, AnimalRequest, AnimalWithSpecies, DashboardSummary, ErrorResponse,
    FinancialTransaction, MedicalHistoryEntry, MedicalHistoryRequest, MilkProductionRecord,
    MilkProductionRequest, Species, TransactionRequest, VaccinationRecord, VaccinationRequest,
    Vaccine,
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    // Dashboard

    pub async fn get_summary(&self) -> Result<DashboardSummary, String> {
        self.get("/dashboard/summary").await
    }

    // Catalogs

    pub async fn list_species(&self) -> Result<Vec<Species>, String> {
        self.get("/especies").await
    }

    pub async fn list_vaccines(&self) -> Result<Vec<Vaccine>, String> {
        self.get("/vacunas").await
    }

    // Animals

    pub async fn list_animals(&self) -> Result<Vec<AnimalWithSpecies>, String> {
        self.get("/animales").await
    }

    pub async fn get_animal(&self, id: i64) -> Result<AnimalDetail, String> {
        self.get(&format!("/animales/{}", id)).await
    }

    pub async fn create_animal(&self, request: &AnimalRequest) -> Result<Animal, String> {
        self.post("/animales", request).await
    }

    pub async fn update_animal(&self, id: i64, request: &AnimalRequest) -> Result<Animal, String> {
        self.put(&format!("/animales/{}", id), request).await
    }

    pub async fn delete_animal(&self, id: i64) -> Result<(), String> {
        self.delete(&format!("/animales/{}", id)).await
    }

    pub async fn add_vaccination(
        &self,
        animal_id: i64,
        request: &VaccinationRequest,
    ) -> Result<VaccinationRecord, String> {
        self.post(&format!("/animales/{}/vacunas", animal_id), request).await
    }

    pub async fn delete_vaccination(&self, record_id: i64) -> Result<(), String> {
        self.delete(&format!("/animales/vacunas/{}", record_id)).await
    }

    pub async fn add_medical_entry(
        &self,
        animal_id: i64,
        request: &MedicalHistoryRequest,
    ) -> Result<MedicalHistoryEntry, String> {
        self.post(&format!("/animales/{}/historial", animal_id), request).await
    }

    // Finances

    pub async fn list_transactions(&self) -> Result<Vec<FinancialTransaction>, String> {
        self.get("/finanzas").await
    }

    pub async fn create_transaction(&self, request: &TransactionRequest) -> Result<FinancialTransaction, String> {
        self.post("/finanzas", request).await
    }

    pub async fn delete_transaction(&self, id: i64) -> Result<(), String> {
        self.delete(&format!("/finanzas/{}", id)).await
    }

    // Milk production

    pub async fn list_production(&self) -> Result<Vec<MilkProductionRecord>, String> {
        self.get("/produccion").await
    }

    pub async fn get_production(&self, id: i64) -> Result<MilkProductionRecord, String> {
        self.get(&format!("/produccion/{}", id)).await
    }

    pub async fn create_production(&self, request: &MilkProductionRequest) -> Result<MilkProductionRecord, String> {
        self.post("/produccion", request).await
    }

    pub async fn update_production(
        &self,
        id: i64,
        request: &MilkProductionRequest,
    ) -> Result<MilkProductionRecord, String> {
        self.put(&format!("/produccion/{}", id), request).await
    }

    pub async fn delete_production(&self, id: i64) -> Result<(), String> {
        self.delete(&format!("/produccion/{}", id)).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        parse_json(Request::get(&self.url(path)).send().await).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, String> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await;
        parse_json(response).await
    }

    async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, String> {
        let response = Request::put(&self.url(path))
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await;
        parse_json(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), String> {
        match Request::delete(&self.url(path)).send().await {
            Ok(response) if response.ok() => Ok(()),
            Ok(response) => Err(read_error(response).await),
            Err(e) => Err(format!("Error de red: {}", e)),
        }
    }
}

async fn parse_json<T: DeserializeOwned>(
    response: Result<Response, gloo::net::Error>,
) -> Result<T, String> {
    match response {
        Ok(response) => {
            if response.ok() {
                response
                    .json::<T>()
                    .await
                    .map_err(|e| format!("Respuesta inválida del servidor: {}", e))
            } else {
                Err(read_error(response).await)
            }
        }
        Err(e) => Err(format!("Error de red: {}", e)),
    }
}

async fn read_error(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error_message(status, &body)
}

/// The message shown to the user for a failed request: the server's
/// `{ "error": ... }` text when present, otherwise the raw body or status.
pub fn error_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(body) {
        return parsed.error;
    }
    let body = body.trim();
    if body.is_empty() {
        format!("Error {} del servidor", status)
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_server_text() {
        assert_eq!(
            error_message(409, r#"{"error":"Ya existe un animal con ese número de etiqueta."}"#),
            "Ya existe un animal con ese número de etiqueta."
        );
        assert_eq!(error_message(400, "Failed to parse the request body"), "Failed to parse the request body");
        assert_eq!(error_message(500, "  "), "Error 500 del servidor");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = ApiClient::with_base_url("http://finca.local:8080/".to_string());
        assert_eq!(client.url("/animales"), "http://finca.local:8080/api/animales");
        assert_eq!(ApiClient::new().url("/vacunas"), "http://localhost:3001/api/vacunas");
    }
}
