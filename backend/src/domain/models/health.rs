//! Vaccine catalog, vaccination records and medical history inputs

use chrono::{DateTime, Utc};
use shared::{MedicalHistoryRequest, VaccinationRequest, VaccineRequest};

use crate::domain::error::DomainResult;
use crate::domain::validation;

pub const MISSING_VACCINE_NAME: &str = "El nombre de la vacuna es obligatorio.";
pub const MISSING_VACCINATION_FIELDS: &str = "La vacuna y la fecha son obligatorias.";
pub const MISSING_MEDICAL_FIELDS: &str = "La fecha y la descripción son obligatorias.";

#[derive(Debug, Clone, PartialEq)]
pub struct VaccineFields {
    pub nombre: String,
    pub descripcion: Option<String>,
}

impl VaccineFields {
    pub fn from_request(request: VaccineRequest) -> DomainResult<Self> {
        Ok(Self {
            nombre: validation::require(validation::text(request.nombre), MISSING_VACCINE_NAME)?,
            descripcion: validation::text(request.descripcion),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VaccinationFields {
    pub vacuna_id: i64,
    pub fecha_aplicacion: DateTime<Utc>,
    pub proxima_dosis: Option<DateTime<Utc>>,
}

impl VaccinationFields {
    pub fn from_request(request: VaccinationRequest) -> DomainResult<Self> {
        let vacuna_id = validation::id("vacuna_id", request.vacuna_id)?;
        let fecha_aplicacion = validation::date("fecha_aplicacion", request.fecha_aplicacion)?;

        Ok(Self {
            vacuna_id: validation::require(vacuna_id, MISSING_VACCINATION_FIELDS)?,
            fecha_aplicacion: validation::require(fecha_aplicacion, MISSING_VACCINATION_FIELDS)?,
            proxima_dosis: validation::date("proxima_dosis", request.proxima_dosis)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MedicalHistoryFields {
    pub fecha: DateTime<Utc>,
    pub descripcion: String,
    pub tratamiento: Option<String>,
    pub veterinario: Option<String>,
}

impl MedicalHistoryFields {
    pub fn from_request(request: MedicalHistoryRequest) -> DomainResult<Self> {
        let fecha = validation::date("fecha", request.fecha)?;

        Ok(Self {
            fecha: validation::require(fecha, MISSING_MEDICAL_FIELDS)?,
            descripcion: validation::require(validation::text(request.descripcion), MISSING_MEDICAL_FIELDS)?,
            tratamiento: validation::text(request.tratamiento),
            veterinario: validation::text(request.veterinario),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use shared::NumericInput;

    #[test]
    fn test_vaccination_requires_vaccine_and_date() {
        let ok = VaccinationFields::from_request(VaccinationRequest {
            vacuna_id: Some(NumericInput::Text("3".to_string())),
            fecha_aplicacion: Some("2024-01-01".to_string()),
            proxima_dosis: Some("2024-07-01".to_string()),
        })
        .unwrap();
        assert_eq!(ok.vacuna_id, 3);
        assert!(ok.proxima_dosis.is_some());

        let missing_date = VaccinationFields::from_request(VaccinationRequest {
            vacuna_id: Some(NumericInput::Number(3.0)),
            ..Default::default()
        });
        assert!(matches!(missing_date, Err(DomainError::Validation(ref m)) if m == MISSING_VACCINATION_FIELDS));
    }

    #[test]
    fn test_vaccine_name_is_required() {
        let result = VaccineFields::from_request(VaccineRequest {
            nombre: None,
            descripcion: Some("Triple".to_string()),
        });
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
