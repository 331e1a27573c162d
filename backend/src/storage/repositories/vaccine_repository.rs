use sqlx::Row;
use shared::Vaccine;

use crate::domain::models::VaccineFields;
use crate::storage::connection::DbConnection;
use crate::storage::error::StorageResult;

/// Repository for the vaccine catalog
#[derive(Clone)]
pub struct VaccineRepository {
    db: DbConnection,
}

impl VaccineRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    pub async fn list_vaccines(&self) -> StorageResult<Vec<Vaccine>> {
        let rows = sqlx::query("SELECT id, nombre, descripcion FROM vacunas ORDER BY id ASC")
            .fetch_all(self.db.pool())
            .await?;

        let vaccines = rows
            .iter()
            .map(|row| {
                Ok(Vaccine {
                    id: row.try_get("id")?,
                    nombre: row.try_get("nombre")?,
                    descripcion: row.try_get("descripcion")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        Ok(vaccines)
    }

    /// Store a vaccine. Names are not unique.
    pub async fn store_vaccine(&self, fields: &VaccineFields) -> StorageResult<Vaccine> {
        let result = sqlx::query("INSERT INTO vacunas (nombre, descripcion) VALUES (?, ?)")
            .bind(&fields.nombre)
            .bind(&fields.descripcion)
            .execute(self.db.pool())
            .await?;

        Ok(Vaccine {
            id: result.last_insert_rowid(),
            nombre: fields.nombre.clone(),
            descripcion: fields.descripcion.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_and_list_vaccines_allows_duplicates() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let repo = VaccineRepository::new(db);

        let fields = VaccineFields {
            nombre: "Aftosa".to_string(),
            descripcion: Some("Fiebre aftosa".to_string()),
        };
        let first = repo.store_vaccine(&fields).await.expect("Failed to store vaccine");
        let second = repo.store_vaccine(&fields).await.expect("Duplicate names are allowed");
        assert_ne!(first.id, second.id);

        let vaccines = repo.list_vaccines().await.expect("Failed to list vaccines");
        assert_eq!(vaccines, vec![first, second]);
    }
}
