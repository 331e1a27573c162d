//! Validated input models.
//!
//! Each model is built from its wire request by `from_request`, which runs
//! the presence checks and converts wire dates and numbers to typed values.
//! Repositories only ever receive these validated models.

pub mod animal;
pub mod finance;
pub mod health;
pub mod production;

pub use animal::AnimalFields;
pub use finance::TransactionFields;
pub use health::{MedicalHistoryFields, VaccinationFields, VaccineFields};
pub use production::MilkProductionFields;
