use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use shared::FinancialTransaction;

use super::to_db_timestamp;
use crate::domain::models::TransactionFields;
use crate::storage::connection::DbConnection;
use crate::storage::error::StorageResult;

/// Repository for financial transactions
#[derive(Clone)]
pub struct TransactionRepository {
    db: DbConnection,
}

impl TransactionRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// All transactions ordered by date descending (most recent first)
    pub async fn list_transactions(&self) -> StorageResult<Vec<FinancialTransaction>> {
        let rows = sqlx::query(
            r#"
            SELECT id, tipo_transaccion, descripcion, monto, fecha, categoria
            FROM transacciones_financieras
            ORDER BY fecha DESC, id DESC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        let transactions = rows
            .iter()
            .map(transaction_from_row)
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        Ok(transactions)
    }

    pub async fn get_transaction(&self, transaction_id: i64) -> StorageResult<Option<FinancialTransaction>> {
        let row = sqlx::query(
            r#"
            SELECT id, tipo_transaccion, descripcion, monto, fecha, categoria
            FROM transacciones_financieras
            WHERE id = ?
            "#,
        )
        .bind(transaction_id)
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Ok(Some(transaction_from_row(&r)?)),
            None => Ok(None),
        }
    }

    pub async fn store_transaction(&self, fields: &TransactionFields) -> StorageResult<FinancialTransaction> {
        let result = sqlx::query(
            r#"
            INSERT INTO transacciones_financieras (tipo_transaccion, descripcion, monto, fecha, categoria)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&fields.tipo_transaccion)
        .bind(&fields.descripcion)
        .bind(fields.monto)
        .bind(to_db_timestamp(fields.fecha))
        .bind(&fields.categoria)
        .execute(self.db.pool())
        .await?;

        Ok(transaction_from_fields(result.last_insert_rowid(), fields))
    }

    /// Replace every field. Returns `None` when the id does not exist.
    pub async fn update_transaction(
        &self,
        transaction_id: i64,
        fields: &TransactionFields,
    ) -> StorageResult<Option<FinancialTransaction>> {
        let result = sqlx::query(
            r#"
            UPDATE transacciones_financieras
            SET tipo_transaccion = ?, descripcion = ?, monto = ?, fecha = ?, categoria = ?
            WHERE id = ?
            "#,
        )
        .bind(&fields.tipo_transaccion)
        .bind(&fields.descripcion)
        .bind(fields.monto)
        .bind(to_db_timestamp(fields.fecha))
        .bind(&fields.categoria)
        .bind(transaction_id)
        .execute(self.db.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(transaction_from_fields(transaction_id, fields)))
    }

    pub async fn delete_transaction(&self, transaction_id: i64) -> StorageResult<bool> {
        let result = sqlx::query("DELETE FROM transacciones_financieras WHERE id = ?")
            .bind(transaction_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Sum of amounts grouped by transaction type
    pub async fn totals_by_type(&self) -> StorageResult<Vec<(String, f64)>> {
        let totals: Vec<(String, f64)> = sqlx::query_as(
            r#"
            SELECT tipo_transaccion, COALESCE(SUM(monto), 0.0)
            FROM transacciones_financieras
            GROUP BY tipo_transaccion
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(totals)
    }
}

fn transaction_from_fields(id: i64, fields: &TransactionFields) -> FinancialTransaction {
    FinancialTransaction {
        id,
        tipo_transaccion: fields.tipo_transaccion.clone(),
        descripcion: fields.descripcion.clone(),
        monto: fields.monto,
        fecha: to_db_timestamp(fields.fecha),
        categoria: fields.categoria.clone(),
    }
}

fn transaction_from_row(row: &SqliteRow) -> Result<FinancialTransaction, sqlx::Error> {
    Ok(FinancialTransaction {
        id: row.try_get("id")?,
        tipo_transaccion: row.try_get("tipo_transaccion")?,
        descripcion: row.try_get("descripcion")?,
        monto: row.try_get("monto")?,
        fecha: row.try_get("fecha")?,
        categoria: row.try_get("categoria")?,
    })
}
