use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use shared::{milk_income, MilkProductionRecord};

use super::to_db_timestamp;
use crate::domain::models::MilkProductionFields;
use crate::storage::connection::DbConnection;
use crate::storage::error::StorageResult;

const PRODUCTION_SELECT: &str = r#"
    SELECT id, fecha, litros_producidos, precio_litro, gastos_asociados, ingreso_total
    FROM produccion_lechera
"#;

/// Repository for daily milk production records
#[derive(Clone)]
pub struct MilkProductionRepository {
    db: DbConnection,
}

impl MilkProductionRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// All records, most recent date first
    pub async fn list_records(&self) -> StorageResult<Vec<MilkProductionRecord>> {
        let query = format!("{} ORDER BY fecha DESC, id DESC", PRODUCTION_SELECT);
        let rows = sqlx::query(&query).fetch_all(self.db.pool()).await?;

        let records = rows
            .iter()
            .map(record_from_row)
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        Ok(records)
    }

    pub async fn get_record(&self, record_id: i64) -> StorageResult<Option<MilkProductionRecord>> {
        let query = format!("{} WHERE id = ?", PRODUCTION_SELECT);
        let row = sqlx::query(&query)
            .bind(record_id)
            .fetch_optional(self.db.pool())
            .await?;

        match row {
            Some(r) => Ok(Some(record_from_row(&r)?)),
            None => Ok(None),
        }
    }

    /// Store a record; missing expenses are stored as zero
    pub async fn store_record(&self, fields: &MilkProductionFields) -> StorageResult<MilkProductionRecord> {
        let gastos = fields.gastos_asociados.unwrap_or(0.0);
        let ingreso_total = milk_income(fields.litros_producidos, fields.precio_litro, gastos);

        let result = sqlx::query(
            r#"
            INSERT INTO produccion_lechera (fecha, litros_producidos, precio_litro, gastos_asociados, ingreso_total)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(to_db_timestamp(fields.fecha))
        .bind(fields.litros_producidos)
        .bind(fields.precio_litro)
        .bind(gastos)
        .bind(ingreso_total)
        .execute(self.db.pool())
        .await?;

        Ok(MilkProductionRecord {
            id: result.last_insert_rowid(),
            fecha: to_db_timestamp(fields.fecha),
            litros_producidos: fields.litros_producidos,
            precio_litro: fields.precio_litro,
            gastos_asociados: gastos,
            ingreso_total,
        })
    }

    /// Replace date, liters and price; expenses only when supplied.
    /// Total income is recomputed from the resulting row.
    pub async fn update_record(
        &self,
        record_id: i64,
        fields: &MilkProductionFields,
    ) -> StorageResult<Option<MilkProductionRecord>> {
        // SET expressions read the pre-update row, so COALESCE sees the stored expenses
        let result = sqlx::query(
            r#"
            UPDATE produccion_lechera
            SET fecha = ?,
                litros_producidos = ?,
                precio_litro = ?,
                gastos_asociados = COALESCE(?, gastos_asociados),
                ingreso_total = ? * ? - COALESCE(?, gastos_asociados)
            WHERE id = ?
            "#,
        )
        .bind(to_db_timestamp(fields.fecha))
        .bind(fields.litros_producidos)
        .bind(fields.precio_litro)
        .bind(fields.gastos_asociados)
        .bind(fields.litros_producidos)
        .bind(fields.precio_litro)
        .bind(fields.gastos_asociados)
        .bind(record_id)
        .execute(self.db.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_record(record_id).await
    }

    pub async fn delete_record(&self, record_id: i64) -> StorageResult<bool> {
        let result = sqlx::query("DELETE FROM produccion_lechera WHERE id = ?")
            .bind(record_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn record_from_row(row: &SqliteRow) -> Result<MilkProductionRecord, sqlx::Error> {
    Ok(MilkProductionRecord {
        id: row.try_get("id")?,
        fecha: row.try_get("fecha")?,
        litros_producidos: row.try_get("litros_producidos")?,
        precio_litro: row.try_get("precio_litro")?,
        gastos_asociados: row.try_get("gastos_asociados")?,
        ingreso_total: row.try_get("ingreso_total")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::parse_wire_date;

    fn fields(date: &str, litros: f64, precio: f64, gastos: Option<f64>) -> MilkProductionFields {
        MilkProductionFields {
            fecha: parse_wire_date(date).unwrap(),
            litros_producidos: litros,
            precio_litro: precio,
            gastos_asociados: gastos,
        }
    }

    async fn setup_test() -> MilkProductionRepository {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        MilkProductionRepository::new(db)
    }

    #[tokio::test]
    async fn test_store_computes_income_with_default_expenses() {
        let repo = setup_test().await;

        let record = repo.store_record(&fields("2024-03-01", 100.0, 0.5, None)).await.unwrap();

        assert_eq!(record.gastos_asociados, 0.0);
        assert_eq!(record.ingreso_total, 50.0);
        assert_eq!(repo.get_record(record.id).await.unwrap(), Some(record));
    }

    #[tokio::test]
    async fn test_update_keeps_expenses_when_not_supplied() {
        let repo = setup_test().await;
        let record = repo.store_record(&fields("2024-03-01", 100.0, 0.5, Some(10.0))).await.unwrap();
        assert_eq!(record.ingreso_total, 40.0);

        let updated = repo
            .update_record(record.id, &fields("2024-03-02", 200.0, 0.5, None))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.fecha, "2024-03-02T00:00:00.000Z");
        assert_eq!(updated.gastos_asociados, 10.0);
        assert_eq!(updated.ingreso_total, 90.0);

        let replaced_expenses = repo
            .update_record(record.id, &fields("2024-03-02", 200.0, 0.5, Some(0.0)))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(replaced_expenses.ingreso_total, 100.0);
    }

    #[tokio::test]
    async fn test_list_order_and_delete() {
        let repo = setup_test().await;
        let older = repo.store_record(&fields("2024-01-01", 10.0, 1.0, None)).await.unwrap();
        let newer = repo.store_record(&fields("2024-02-01", 20.0, 1.0, None)).await.unwrap();

        let ids: Vec<i64> = repo.list_records().await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![newer.id, older.id]);

        assert!(repo.delete_record(older.id).await.unwrap());
        assert!(repo.get_record(older.id).await.unwrap().is_none());
        assert!(repo.update_record(older.id, &fields("2024-01-01", 1.0, 1.0, None)).await.unwrap().is_none());
    }
}
