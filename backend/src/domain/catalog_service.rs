//! Read-mostly catalogs: species and vaccines

use tracing::info;

use shared::{Species, Vaccine, VaccineRequest};

use crate::domain::error::DomainResult;
use crate::domain::models::VaccineFields;
use crate::storage::{DbConnection, SpeciesRepository, VaccineRepository};

#[derive(Clone)]
pub struct SpeciesService {
    species: SpeciesRepository,
}

impl SpeciesService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            species: SpeciesRepository::new(db),
        }
    }

    pub async fn list_species(&self) -> DomainResult<Vec<Species>> {
        Ok(self.species.list_species().await?)
    }
}

#[derive(Clone)]
pub struct VaccineService {
    vaccines: VaccineRepository,
}

impl VaccineService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            vaccines: VaccineRepository::new(db),
        }
    }

    pub async fn list_vaccines(&self) -> DomainResult<Vec<Vaccine>> {
        Ok(self.vaccines.list_vaccines().await?)
    }

    /// Add a vaccine to the catalog. Names are not required to be unique.
    pub async fn create_vaccine(&self, request: VaccineRequest) -> DomainResult<Vaccine> {
        let fields = VaccineFields::from_request(request)?;
        info!("Creating vaccine: {}", fields.nombre);

        Ok(self.vaccines.store_vaccine(&fields).await?)
    }
}
