use chrono::{DateTime, Utc};
use shared::MilkProductionRequest;

use crate::domain::error::DomainResult;
use crate::domain::validation;

pub const MISSING_PRODUCTION_FIELDS: &str = "La fecha, los litros y el precio son obligatorios.";

/// A milk production day. `gastos_asociados` is `None` when the client did
/// not send it: creation stores zero, replacement keeps the stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct MilkProductionFields {
    pub fecha: DateTime<Utc>,
    pub litros_producidos: f64,
    pub precio_litro: f64,
    pub gastos_asociados: Option<f64>,
}

impl MilkProductionFields {
    pub fn from_request(request: MilkProductionRequest) -> DomainResult<Self> {
        let fecha = validation::date("fecha", request.fecha)?;
        let litros = validation::number("litros_producidos", request.litros_producidos)?;
        let precio = validation::number("precio_litro", request.precio_litro)?;

        Ok(Self {
            fecha: validation::require(fecha, MISSING_PRODUCTION_FIELDS)?,
            litros_producidos: validation::require(litros, MISSING_PRODUCTION_FIELDS)?,
            precio_litro: validation::require(precio, MISSING_PRODUCTION_FIELDS)?,
            gastos_asociados: validation::number("gastos_asociados", request.gastos_asociados)?,
        })
    }
}
