use tracing::{info, warn};

use shared::{
    Animal, AnimalDetail, AnimalRequest, AnimalWithSpecies, MedicalHistoryEntry,
    MedicalHistoryRequest, VaccinationRecord, VaccinationRequest,
};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::models::{AnimalFields, MedicalHistoryFields, VaccinationFields};
use crate::storage::{AnimalRepository, DbConnection, MedicalHistoryRepository, VaccinationRepository};

pub const ANIMAL_NOT_FOUND: &str = "Animal no encontrado.";
pub const VACCINATION_NOT_FOUND: &str = "Registro de vacunación no encontrado.";
pub const DUPLICATE_TAG: &str = "Ya existe un animal con ese número de etiqueta.";
pub const UNKNOWN_SPECIES: &str = "La especie indicada no existe.";
pub const UNKNOWN_VACCINE: &str = "La vacuna indicada no existe.";

/// Service for animals and the health records attached to them
#[derive(Clone)]
pub struct AnimalService {
    animals: AnimalRepository,
    vaccinations: VaccinationRepository,
    medical_history: MedicalHistoryRepository,
}

impl AnimalService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            animals: AnimalRepository::new(db.clone()),
            vaccinations: VaccinationRepository::new(db.clone()),
            medical_history: MedicalHistoryRepository::new(db),
        }
    }

    pub async fn list_animals(&self) -> DomainResult<Vec<AnimalWithSpecies>> {
        let animals = self.animals.list_animals().await?;
        info!("Found {} animals", animals.len());
        Ok(animals)
    }

    /// One animal with its species, vaccination history and medical history
    pub async fn get_animal(&self, animal_id: i64) -> DomainResult<AnimalDetail> {
        let Some(found) = self.animals.get_animal(animal_id).await? else {
            warn!("Animal not found: {}", animal_id);
            return Err(DomainError::NotFound(ANIMAL_NOT_FOUND.to_string()));
        };

        let vacunaciones = self.vaccinations.list_for_animal(animal_id).await?;
        let historial_medico = self.medical_history.list_for_animal(animal_id).await?;

        Ok(AnimalDetail {
            animal: found.animal,
            especie: found.especie,
            vacunaciones,
            historial_medico,
        })
    }

    pub async fn create_animal(&self, request: AnimalRequest) -> DomainResult<Animal> {
        let fields = AnimalFields::from_request(request)?;
        info!("Creating animal: tag={}, species={}", fields.numero_etiqueta, fields.especie_id);

        let animal = self
            .animals
            .store_animal(&fields)
            .await
            .map_err(|e| DomainError::from(e).with_messages(DUPLICATE_TAG, UNKNOWN_SPECIES))?;

        info!("Created animal {} with ID: {}", animal.numero_etiqueta, animal.id);
        Ok(animal)
    }

    /// Replace an animal. Omitted optional fields are cleared.
    pub async fn update_animal(&self, animal_id: i64, request: AnimalRequest) -> DomainResult<Animal> {
        let fields = AnimalFields::from_request(request)?;
        info!("Updating animal {}", animal_id);

        let updated = self
            .animals
            .update_animal(animal_id, &fields)
            .await
            .map_err(|e| DomainError::from(e).with_messages(DUPLICATE_TAG, UNKNOWN_SPECIES))?;

        updated.ok_or_else(|| {
            warn!("Animal not found for update: {}", animal_id);
            DomainError::NotFound(ANIMAL_NOT_FOUND.to_string())
        })
    }

    pub async fn delete_animal(&self, animal_id: i64) -> DomainResult<()> {
        info!("Deleting animal {}", animal_id);

        if !self.animals.delete_animal(animal_id).await? {
            warn!("Animal not found for delete: {}", animal_id);
            return Err(DomainError::NotFound(ANIMAL_NOT_FOUND.to_string()));
        }
        Ok(())
    }

    pub async fn add_vaccination(
        &self,
        animal_id: i64,
        request: VaccinationRequest,
    ) -> DomainResult<VaccinationRecord> {
        let fields = VaccinationFields::from_request(request)?;
        self.ensure_animal_exists(animal_id).await?;

        info!("Recording vaccine {} for animal {}", fields.vacuna_id, animal_id);
        let record = self
            .vaccinations
            .store_vaccination(animal_id, &fields)
            .await
            .map_err(|e| DomainError::from(e).with_messages(UNKNOWN_VACCINE, UNKNOWN_VACCINE))?;

        Ok(record)
    }

    pub async fn delete_vaccination(&self, record_id: i64) -> DomainResult<()> {
        info!("Deleting vaccination record {}", record_id);

        if !self.vaccinations.delete_vaccination(record_id).await? {
            warn!("Vaccination record not found: {}", record_id);
            return Err(DomainError::NotFound(VACCINATION_NOT_FOUND.to_string()));
        }
        Ok(())
    }

    pub async fn add_medical_entry(
        &self,
        animal_id: i64,
        request: MedicalHistoryRequest,
    ) -> DomainResult<MedicalHistoryEntry> {
        let fields = MedicalHistoryFields::from_request(request)?;
        self.ensure_animal_exists(animal_id).await?;

        info!("Adding medical history entry for animal {}", animal_id);
        let entry = self
            .medical_history
            .store_entry(animal_id, &fields)
            .await
            .map_err(|e| DomainError::from(e).with_messages(ANIMAL_NOT_FOUND, ANIMAL_NOT_FOUND))?;

        Ok(entry)
    }

    async fn ensure_animal_exists(&self, animal_id: i64) -> DomainResult<()> {
        if self.animals.animal_exists(animal_id).await? {
            Ok(())
        } else {
            warn!("Animal not found: {}", animal_id);
            Err(DomainError::NotFound(ANIMAL_NOT_FOUND.to_string()))
        }
    }
}
