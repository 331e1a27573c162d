use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use shared::{Animal, AnimalWithSpecies, Species};

use super::to_db_timestamp;
use crate::domain::models::AnimalFields;
use crate::storage::connection::DbConnection;
use crate::storage::error::StorageResult;

const ANIMAL_WITH_SPECIES_SELECT: &str = r#"
    SELECT a.id, a.numero_etiqueta, a.nombre, a.especie_id, a.fecha_nacimiento,
           a.estado, a.fecha_compra, a.precio_compra,
           e.nombre AS especie_nombre
    FROM animales a
    JOIN especies e ON e.id = a.especie_id
"#;

/// Repository for animal operations
#[derive(Clone)]
pub struct AnimalRepository {
    db: DbConnection,
}

impl AnimalRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// List all animals with their species, oldest registration first
    pub async fn list_animals(&self) -> StorageResult<Vec<AnimalWithSpecies>> {
        let query = format!("{} ORDER BY a.id ASC", ANIMAL_WITH_SPECIES_SELECT);
        let rows = sqlx::query(&query).fetch_all(self.db.pool()).await?;

        let animals = rows
            .iter()
            .map(animal_with_species_from_row)
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        Ok(animals)
    }

    /// Get an animal with its species joined
    pub async fn get_animal(&self, animal_id: i64) -> StorageResult<Option<AnimalWithSpecies>> {
        let query = format!("{} WHERE a.id = ?", ANIMAL_WITH_SPECIES_SELECT);
        let row = sqlx::query(&query)
            .bind(animal_id)
            .fetch_optional(self.db.pool())
            .await?;

        match row {
            Some(r) => Ok(Some(animal_with_species_from_row(&r)?)),
            None => Ok(None),
        }
    }

    pub async fn animal_exists(&self, animal_id: i64) -> StorageResult<bool> {
        let row = sqlx::query("SELECT 1 FROM animales WHERE id = ?")
            .bind(animal_id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(row.is_some())
    }

    /// Store a new animal and return it with its generated id
    pub async fn store_animal(&self, fields: &AnimalFields) -> StorageResult<Animal> {
        let result = sqlx::query(
            r#"
            INSERT INTO animales (numero_etiqueta, nombre, especie_id, fecha_nacimiento,
                                  estado, fecha_compra, precio_compra)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&fields.numero_etiqueta)
        .bind(&fields.nombre)
        .bind(fields.especie_id)
        .bind(fields.fecha_nacimiento.map(to_db_timestamp))
        .bind(&fields.estado)
        .bind(fields.fecha_compra.map(to_db_timestamp))
        .bind(fields.precio_compra)
        .execute(self.db.pool())
        .await?;

        Ok(animal_from_fields(result.last_insert_rowid(), fields))
    }

    /// Replace every field of an animal. Returns `None` when the id does not exist.
    pub async fn update_animal(&self, animal_id: i64, fields: &AnimalFields) -> StorageResult<Option<Animal>> {
        let result = sqlx::query(
            r#"
            UPDATE animales
            SET numero_etiqueta = ?, nombre = ?, especie_id = ?, fecha_nacimiento = ?,
                estado = ?, fecha_compra = ?, precio_compra = ?
            WHERE id = ?
            "#,
        )
        .bind(&fields.numero_etiqueta)
        .bind(&fields.nombre)
        .bind(fields.especie_id)
        .bind(fields.fecha_nacimiento.map(to_db_timestamp))
        .bind(&fields.estado)
        .bind(fields.fecha_compra.map(to_db_timestamp))
        .bind(fields.precio_compra)
        .bind(animal_id)
        .execute(self.db.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(animal_from_fields(animal_id, fields)))
    }

    /// Delete an animal; its vaccinations and medical history cascade.
    /// Returns false when the id does not exist.
    pub async fn delete_animal(&self, animal_id: i64) -> StorageResult<bool> {
        let result = sqlx::query("DELETE FROM animales WHERE id = ?")
            .bind(animal_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count animals with the given status, optionally of one species
    pub async fn count_by_status(&self, estado: &str, especie_id: Option<i64>) -> StorageResult<i64> {
        let (count,): (i64,) = match especie_id {
            Some(especie_id) => {
                sqlx::query_as("SELECT COUNT(*) FROM animales WHERE estado = ? AND especie_id = ?")
                    .bind(estado)
                    .bind(especie_id)
                    .fetch_one(self.db.pool())
                    .await?
            }
            None => {
                sqlx::query_as("SELECT COUNT(*) FROM animales WHERE estado = ?")
                    .bind(estado)
                    .fetch_one(self.db.pool())
                    .await?
            }
        };
        Ok(count)
    }
}

fn animal_from_fields(id: i64, fields: &AnimalFields) -> Animal {
    Animal {
        id,
        numero_etiqueta: fields.numero_etiqueta.clone(),
        nombre: fields.nombre.clone(),
        especie_id: fields.especie_id,
        fecha_nacimiento: fields.fecha_nacimiento.map(to_db_timestamp),
        estado: fields.estado.clone(),
        fecha_compra: fields.fecha_compra.map(to_db_timestamp),
        precio_compra: fields.precio_compra,
    }
}

fn animal_with_species_from_row(row: &SqliteRow) -> Result<AnimalWithSpecies, sqlx::Error> {
    let animal = Animal {
        id: row.try_get("id")?,
        numero_etiqueta: row.try_get("numero_etiqueta")?,
        nombre: row.try_get("nombre")?,
        especie_id: row.try_get("especie_id")?,
        fecha_nacimiento: row.try_get("fecha_nacimiento")?,
        estado: row.try_get("estado")?,
        fecha_compra: row.try_get("fecha_compra")?,
        precio_compra: row.try_get("precio_compra")?,
    };
    let especie = Species {
        id: animal.especie_id,
        nombre: row.try_get("especie_nombre")?,
    };
    Ok(AnimalWithSpecies { animal, especie })
}
