use chrono::{DateTime, Utc};
use shared::TransactionRequest;

use crate::domain::error::DomainResult;
use crate::domain::validation;

pub const MISSING_TRANSACTION_FIELDS: &str = "Todos los campos requeridos deben ser completados.";

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFields {
    pub tipo_transaccion: String,
    pub descripcion: String,
    pub monto: f64,
    pub fecha: DateTime<Utc>,
    pub categoria: Option<String>,
}

impl TransactionFields {
    pub fn from_request(request: TransactionRequest) -> DomainResult<Self> {
        let tipo_transaccion = validation::text(request.tipo_transaccion);
        let descripcion = validation::text(request.descripcion);
        let monto = validation::number("monto", request.monto)?;
        let fecha = validation::date("fecha", request.fecha)?;

        Ok(Self {
            tipo_transaccion: validation::require(tipo_transaccion, MISSING_TRANSACTION_FIELDS)?,
            descripcion: validation::require(descripcion, MISSING_TRANSACTION_FIELDS)?,
            monto: validation::require(monto, MISSING_TRANSACTION_FIELDS)?,
            fecha: validation::require(fecha, MISSING_TRANSACTION_FIELDS)?,
            categoria: validation::text(request.categoria),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use shared::NumericInput;

    #[test]
    fn test_amount_is_coerced_from_text() {
        let fields = TransactionFields::from_request(TransactionRequest {
            tipo_transaccion: Some("gasto".to_string()),
            descripcion: Some("Concentrado".to_string()),
            monto: Some(NumericInput::Text("40.5".to_string())),
            fecha: Some("2024-02-01".to_string()),
            categoria: None,
        })
        .unwrap();

        assert_eq!(fields.monto, 40.5);
        assert_eq!(fields.categoria, None);
    }

    #[test]
    fn test_every_required_field_is_checked() {
        let complete = TransactionRequest {
            tipo_transaccion: Some("ingreso".to_string()),
            descripcion: Some("Venta".to_string()),
            monto: Some(NumericInput::Number(100.0)),
            fecha: Some("2024-02-01".to_string()),
            categoria: Some("ventas".to_string()),
        };
        assert!(TransactionFields::from_request(complete.clone()).is_ok());

        let without_type = TransactionRequest { tipo_transaccion: None, ..complete.clone() };
        let without_description = TransactionRequest { descripcion: None, ..complete.clone() };
        let without_amount = TransactionRequest { monto: None, ..complete.clone() };
        let without_date = TransactionRequest { fecha: None, ..complete };

        for request in [without_type, without_description, without_amount, without_date] {
            let result = TransactionFields::from_request(request);
            assert!(matches!(result, Err(DomainError::Validation(ref m)) if m == MISSING_TRANSACTION_FIELDS));
        }
    }
}
