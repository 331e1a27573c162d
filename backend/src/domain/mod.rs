//! # Domain Module
//!
//! Business rules for FincaPiza. Services take wire requests, validate them
//! into the models under [`models`], call the repositories and classify every
//! failure as a [`DomainError`] that the REST layer maps to a status code.

pub mod animal_service;
pub mod catalog_service;
pub mod dashboard_service;
pub mod error;
pub mod finance_service;
pub mod milk_production_service;
pub mod models;
pub mod validation;

pub use animal_service::AnimalService;
pub use catalog_service::{SpeciesService, VaccineService};
pub use dashboard_service::DashboardService;
pub use error::{DomainError, DomainResult};
pub use finance_service::FinanceService;
pub use milk_production_service::MilkProductionService;
