use sqlx::Row;
use shared::Species;

use crate::storage::connection::DbConnection;
use crate::storage::error::StorageResult;

/// Repository for the species catalog
#[derive(Clone)]
pub struct SpeciesRepository {
    db: DbConnection,
}

impl SpeciesRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    pub async fn list_species(&self) -> StorageResult<Vec<Species>> {
        let rows = sqlx::query("SELECT id, nombre FROM especies ORDER BY id ASC")
            .fetch_all(self.db.pool())
            .await?;

        let species = rows
            .iter()
            .map(|row| {
                Ok(Species {
                    id: row.try_get("id")?,
                    nombre: row.try_get("nombre")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        Ok(species)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_species_returns_seeded_catalog() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let repo = SpeciesRepository::new(db);

        let species = repo.list_species().await.expect("Failed to list species");

        assert_eq!(species.len(), 2);
        assert_eq!(species[0].nombre, "Bovino");
        assert_eq!(species[1].nombre, "Equino");
    }
}
