use tracing::{info, warn};

use shared::{MilkProductionRecord, MilkProductionRequest};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::models::MilkProductionFields;
use crate::storage::{DbConnection, MilkProductionRepository};

pub const PRODUCTION_NOT_FOUND: &str = "Registro de producción no encontrado.";

/// Service for daily milk production and its income
#[derive(Clone)]
pub struct MilkProductionService {
    records: MilkProductionRepository,
}

impl MilkProductionService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            records: MilkProductionRepository::new(db),
        }
    }

    pub async fn list_records(&self) -> DomainResult<Vec<MilkProductionRecord>> {
        Ok(self.records.list_records().await?)
    }

    pub async fn get_record(&self, record_id: i64) -> DomainResult<MilkProductionRecord> {
        self.records
            .get_record(record_id)
            .await?
            .ok_or_else(|| not_found(record_id))
    }

    pub async fn create_record(&self, request: MilkProductionRequest) -> DomainResult<MilkProductionRecord> {
        let fields = MilkProductionFields::from_request(request)?;
        info!(
            "Recording milk production: liters={}, price={}",
            fields.litros_producidos, fields.precio_litro
        );

        Ok(self.records.store_record(&fields).await?)
    }

    /// Replace date, liters and price. Expenses change only when supplied.
    pub async fn update_record(
        &self,
        record_id: i64,
        request: MilkProductionRequest,
    ) -> DomainResult<MilkProductionRecord> {
        let fields = MilkProductionFields::from_request(request)?;
        info!("Updating milk production record {}", record_id);

        self.records
            .update_record(record_id, &fields)
            .await?
            .ok_or_else(|| not_found(record_id))
    }

    pub async fn delete_record(&self, record_id: i64) -> DomainResult<()> {
        info!("Deleting milk production record {}", record_id);

        if self.records.delete_record(record_id).await? {
            Ok(())
        } else {
            Err(not_found(record_id))
        }
    }
}

fn not_found(record_id: i64) -> DomainError {
    warn!("Milk production record not found: {}", record_id);
    DomainError::NotFound(PRODUCTION_NOT_FOUND.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::NumericInput;

    fn request(fecha: &str, litros: &str, precio: f64, gastos: Option<f64>) -> MilkProductionRequest {
        MilkProductionRequest {
            fecha: Some(fecha.to_string()),
            litros_producidos: Some(NumericInput::Text(litros.to_string())),
            precio_litro: Some(NumericInput::Number(precio)),
            gastos_asociados: gastos.map(NumericInput::Number),
        }
    }

    async fn setup_test() -> MilkProductionService {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        MilkProductionService::new(db)
    }

    #[tokio::test]
    async fn test_income_is_recomputed_on_update() {
        let service = setup_test().await;

        let created = service
            .create_record(request("2024-03-01", "100", 0.5, Some(5.0)))
            .await
            .unwrap();
        assert_eq!(created.ingreso_total, 45.0);

        let updated = service
            .update_record(created.id, request("2024-03-01", "150", 0.5, None))
            .await
            .unwrap();
        assert_eq!(updated.gastos_asociados, 5.0);
        assert_eq!(updated.ingreso_total, 70.0);
        assert_eq!(service.get_record(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_missing_record_is_not_found() {
        let service = setup_test().await;

        assert!(matches!(service.get_record(5).await, Err(DomainError::NotFound(ref m)) if m == PRODUCTION_NOT_FOUND));
        assert!(matches!(
            service.update_record(5, request("2024-03-01", "1", 1.0, None)).await,
            Err(DomainError::NotFound(_))
        ));
        assert!(matches!(service.delete_record(5).await, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_missing_liters_is_a_validation_error() {
        let service = setup_test().await;
        let mut incomplete = request("2024-03-01", "", 0.5, None);
        incomplete.litros_producidos = None;

        assert!(matches!(service.create_record(incomplete).await, Err(DomainError::Validation(_))));
    }
}
