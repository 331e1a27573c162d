use anyhow::Result;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool};
use std::str::FromStr;
use tracing::info;

/// DbConnection owns the SQLite pool shared by every repository
#[derive(Clone)]
pub struct DbConnection {
    pool: SqlitePool,
}

impl DbConnection {
    /// Open (and create if needed) the database at `url`, then set up the schema
    pub async fn new(url: &str, max_connections: u32) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            info!("Creating database {}", url);
            Sqlite::create_database(url).await?
        }

        let options = SqliteConnectOptions::from_str(url)?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Self::setup_schema(&pool).await?;

        Ok(Self { pool })
    }

    /// Initialize an isolated in-memory database for a single test.
    ///
    /// A single connection that never expires keeps the in-memory database
    /// alive for the lifetime of the pool.
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::setup_schema(&pool).await?;

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection. Used on graceful shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS especies (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                nombre TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Ids 1 and 2 are the species the dashboard counts by default
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO especies (id, nombre) VALUES (1, 'Bovino'), (2, 'Equino');
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS animales (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                numero_etiqueta TEXT NOT NULL UNIQUE,
                nombre TEXT,
                especie_id INTEGER NOT NULL,
                fecha_nacimiento TEXT,
                estado TEXT NOT NULL DEFAULT 'activo',
                fecha_compra TEXT,
                precio_compra REAL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                FOREIGN KEY (especie_id) REFERENCES especies (id)
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Dashboard counts filter on estado and especie_id
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_animales_estado_especie
            ON animales(estado, especie_id);
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS vacunas (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                nombre TEXT NOT NULL,
                descripcion TEXT
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS calendario_vacunacion (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                animal_id INTEGER NOT NULL,
                vacuna_id INTEGER NOT NULL,
                fecha_aplicacion TEXT NOT NULL,
                proxima_dosis TEXT,
                FOREIGN KEY (animal_id) REFERENCES animales (id) ON DELETE CASCADE,
                FOREIGN KEY (vacuna_id) REFERENCES vacunas (id)
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_calendario_vacunacion_animal
            ON calendario_vacunacion(animal_id, fecha_aplicacion DESC);
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS historial_medico (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                animal_id INTEGER NOT NULL,
                fecha TEXT NOT NULL,
                descripcion TEXT NOT NULL,
                tratamiento TEXT,
                veterinario TEXT,
                FOREIGN KEY (animal_id) REFERENCES animales (id) ON DELETE CASCADE
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_historial_medico_animal
            ON historial_medico(animal_id);
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS transacciones_financieras (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                tipo_transaccion TEXT NOT NULL,
                descripcion TEXT NOT NULL,
                monto REAL NOT NULL,
                fecha TEXT NOT NULL,
                categoria TEXT
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_transacciones_fecha
            ON transacciones_financieras(fecha DESC);
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS produccion_lechera (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                fecha TEXT NOT NULL,
                litros_producidos REAL NOT NULL,
                precio_litro REAL NOT NULL,
                gastos_asociados REAL NOT NULL DEFAULT 0,
                ingreso_total REAL NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_produccion_fecha
            ON produccion_lechera(fecha DESC);
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_schema_seeds_default_species() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");

        let names: Vec<(i64, String)> = sqlx::query_as("SELECT id, nombre FROM especies ORDER BY id")
            .fetch_all(db.pool())
            .await
            .expect("Failed to read species");

        assert_eq!(names, vec![(1, "Bovino".to_string()), (2, "Equino".to_string())]);
    }

    #[tokio::test]
    async fn test_file_database_is_created_and_reopened() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = format!("sqlite:{}", dir.path().join("finca.db").display());

        let db = DbConnection::new(&url, 2).await.expect("Failed to create database");
        sqlx::query("INSERT INTO vacunas (nombre) VALUES ('Aftosa')")
            .execute(db.pool())
            .await
            .expect("Failed to insert");
        db.close().await;

        // Schema setup is idempotent and data survives a reopen
        let reopened = DbConnection::new(&url, 2).await.expect("Failed to reopen database");
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM vacunas")
            .fetch_one(reopened.pool())
            .await
            .expect("Failed to count");
        assert_eq!(count, 1);

        let (species,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM especies")
            .fetch_one(reopened.pool())
            .await
            .expect("Failed to count species");
        assert_eq!(species, 2);
    }
}
