use sqlx::Row;
use shared::MedicalHistoryEntry;

use super::to_db_timestamp;
use crate::domain::models::MedicalHistoryFields;
use crate::storage::connection::DbConnection;
use crate::storage::error::StorageResult;

/// Repository for an animal's medical history
#[derive(Clone)]
pub struct MedicalHistoryRepository {
    db: DbConnection,
}

impl MedicalHistoryRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    pub async fn store_entry(
        &self,
        animal_id: i64,
        fields: &MedicalHistoryFields,
    ) -> StorageResult<MedicalHistoryEntry> {
        let fecha = to_db_timestamp(fields.fecha);

        let result = sqlx::query(
            r#"
            INSERT INTO historial_medico (animal_id, fecha, descripcion, tratamiento, veterinario)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(animal_id)
        .bind(&fecha)
        .bind(&fields.descripcion)
        .bind(&fields.tratamiento)
        .bind(&fields.veterinario)
        .execute(self.db.pool())
        .await?;

        Ok(MedicalHistoryEntry {
            id: result.last_insert_rowid(),
            animal_id,
            fecha,
            descripcion: fields.descripcion.clone(),
            tratamiento: fields.tratamiento.clone(),
            veterinario: fields.veterinario.clone(),
        })
    }

    /// Medical history of one animal, most recent first
    pub async fn list_for_animal(&self, animal_id: i64) -> StorageResult<Vec<MedicalHistoryEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT id, animal_id, fecha, descripcion, tratamiento, veterinario
            FROM historial_medico
            WHERE animal_id = ?
            ORDER BY fecha DESC, id DESC
            "#,
        )
        .bind(animal_id)
        .fetch_all(self.db.pool())
        .await?;

        let entries = rows
            .iter()
            .map(|row| {
                Ok(MedicalHistoryEntry {
                    id: row.try_get("id")?,
                    animal_id: row.try_get("animal_id")?,
                    fecha: row.try_get("fecha")?,
                    descripcion: row.try_get("descripcion")?,
                    tratamiento: row.try_get("tratamiento")?,
                    veterinario: row.try_get("veterinario")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        Ok(entries)
    }
}
