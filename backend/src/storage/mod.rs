//! # Storage Module
//!
//! Handles all data persistence for FincaPiza.
//!
//! The store is a single SQLite database reached through one connection pool
//! (`DbConnection`). Each table has its own repository; repositories issue
//! plain SQL through sqlx and return the shared DTOs directly.
//!
//! Uniqueness and referential integrity are enforced by the schema, not by
//! the repositories. Constraint failures come back as [`StorageError`]
//! variants so the layers above can classify them.

pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::DbConnection;
pub use error::{StorageError, StorageResult};
pub use repositories::{
    AnimalRepository, MedicalHistoryRepository, MilkProductionRepository, SpeciesRepository,
    TransactionRepository, VaccinationRepository, VaccineRepository,
};
