use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use shared::{VaccinationEntry, VaccinationRecord, Vaccine};

use super::to_db_timestamp;
use crate::domain::models::VaccinationFields;
use crate::storage::connection::DbConnection;
use crate::storage::error::StorageResult;

/// Repository for the animal ↔ vaccine join records
#[derive(Clone)]
pub struct VaccinationRepository {
    db: DbConnection,
}

impl VaccinationRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    pub async fn store_vaccination(
        &self,
        animal_id: i64,
        fields: &VaccinationFields,
    ) -> StorageResult<VaccinationRecord> {
        let fecha_aplicacion = to_db_timestamp(fields.fecha_aplicacion);
        let proxima_dosis = fields.proxima_dosis.map(to_db_timestamp);

        let result = sqlx::query(
            r#"
            INSERT INTO calendario_vacunacion (animal_id, vacuna_id, fecha_aplicacion, proxima_dosis)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(animal_id)
        .bind(fields.vacuna_id)
        .bind(&fecha_aplicacion)
        .bind(&proxima_dosis)
        .execute(self.db.pool())
        .await?;

        Ok(VaccinationRecord {
            id: result.last_insert_rowid(),
            animal_id,
            vacuna_id: fields.vacuna_id,
            fecha_aplicacion,
            proxima_dosis,
        })
    }

    /// Vaccination history of one animal, most recent application first
    pub async fn list_for_animal(&self, animal_id: i64) -> StorageResult<Vec<VaccinationEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT cv.id, cv.animal_id, cv.vacuna_id, cv.fecha_aplicacion, cv.proxima_dosis,
                   v.nombre AS vacuna_nombre, v.descripcion AS vacuna_descripcion
            FROM calendario_vacunacion cv
            JOIN vacunas v ON v.id = cv.vacuna_id
            WHERE cv.animal_id = ?
            ORDER BY cv.fecha_aplicacion DESC, cv.id DESC
            "#,
        )
        .bind(animal_id)
        .fetch_all(self.db.pool())
        .await?;

        let entries = rows
            .iter()
            .map(entry_from_row)
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        Ok(entries)
    }

    /// Delete one join record by its own id. Returns false when it does not exist.
    pub async fn delete_vaccination(&self, record_id: i64) -> StorageResult<bool> {
        let result = sqlx::query("DELETE FROM calendario_vacunacion WHERE id = ?")
            .bind(record_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn entry_from_row(row: &SqliteRow) -> Result<VaccinationEntry, sqlx::Error> {
    let record = VaccinationRecord {
        id: row.try_get("id")?,
        animal_id: row.try_get("animal_id")?,
        vacuna_id: row.try_get("vacuna_id")?,
        fecha_aplicacion: row.try_get("fecha_aplicacion")?,
        proxima_dosis: row.try_get("proxima_dosis")?,
    };
    let vacuna = Vaccine {
        id: record.vacuna_id,
        nombre: row.try_get("vacuna_nombre")?,
        descripcion: row.try_get("vacuna_descripcion")?,
    };
    Ok(VaccinationEntry { record, vacuna })
}
