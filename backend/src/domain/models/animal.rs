use chrono::{DateTime, Utc};
use shared::{AnimalRequest, STATUS_ACTIVE};

use crate::domain::error::DomainResult;
use crate::domain::validation;

pub const MISSING_ANIMAL_FIELDS: &str = "El número de etiqueta y la especie son obligatorios.";

/// A complete animal record as written on create and on replace
#[derive(Debug, Clone, PartialEq)]
pub struct AnimalFields {
    pub numero_etiqueta: String,
    pub nombre: Option<String>,
    pub especie_id: i64,
    pub fecha_nacimiento: Option<DateTime<Utc>>,
    pub estado: String,
    pub fecha_compra: Option<DateTime<Utc>>,
    pub precio_compra: Option<f64>,
}

impl AnimalFields {
    pub fn from_request(request: AnimalRequest) -> DomainResult<Self> {
        let numero_etiqueta = validation::text(request.numero_etiqueta);
        let especie_id = validation::id("especie_id", request.especie_id)?;

        Ok(Self {
            numero_etiqueta: validation::require(numero_etiqueta, MISSING_ANIMAL_FIELDS)?,
            especie_id: validation::require(especie_id, MISSING_ANIMAL_FIELDS)?,
            nombre: validation::text(request.nombre),
            fecha_nacimiento: validation::date("fecha_nacimiento", request.fecha_nacimiento)?,
            estado: validation::text(request.estado).unwrap_or_else(|| STATUS_ACTIVE.to_string()),
            fecha_compra: validation::date("fecha_compra", request.fecha_compra)?,
            precio_compra: validation::number("precio_compra", request.precio_compra)?,
        })
    }
}
