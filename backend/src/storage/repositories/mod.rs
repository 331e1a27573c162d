// Repository modules
pub mod animal_repository;
pub mod medical_history_repository;
pub mod milk_production_repository;
pub mod species_repository;
pub mod transaction_repository;
pub mod vaccination_repository;
pub mod vaccine_repository;

// Re-export repository types
pub use animal_repository::AnimalRepository;
pub use medical_history_repository::MedicalHistoryRepository;
pub use milk_production_repository::MilkProductionRepository;
pub use species_repository::SpeciesRepository;
pub use transaction_repository::TransactionRepository;
pub use vaccination_repository::VaccinationRepository;
pub use vaccine_repository::VaccineRepository;

use chrono::{DateTime, Utc};

/// Timestamps are stored as the same RFC 3339 text the API returns, so
/// ordering by the column orders chronologically.
pub(crate) fn to_db_timestamp(timestamp: DateTime<Utc>) -> String {
    shared::format_timestamp(timestamp)
}
