//! Presence and format checks shared by the request models.
//!
//! Only presence and parseability are checked; values such as animal status
//! or transaction type are stored as given.

use chrono::{DateTime, Utc};
use shared::{parse_wire_date, NumericInput};

use super::error::{DomainError, DomainResult};

/// Trimmed text, with empty strings treated as absent
pub fn text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn number(field: &str, value: Option<NumericInput>) -> DomainResult<Option<f64>> {
    match value {
        None => Ok(None),
        Some(v) if v.is_blank() => Ok(None),
        Some(v) => v
            .as_f64()
            .map(Some)
            .ok_or_else(|| DomainError::Validation(format!("El campo '{}' debe ser un número.", field))),
    }
}

pub fn id(field: &str, value: Option<NumericInput>) -> DomainResult<Option<i64>> {
    match value {
        None => Ok(None),
        Some(v) if v.is_blank() => Ok(None),
        Some(v) => v
            .as_i64()
            .map(Some)
            .ok_or_else(|| DomainError::Validation(format!("El campo '{}' debe ser un identificador entero.", field))),
    }
}

pub fn date(field: &str, value: Option<String>) -> DomainResult<Option<DateTime<Utc>>> {
    match text(value) {
        None => Ok(None),
        Some(v) => parse_wire_date(&v).map(Some).ok_or_else(|| {
            DomainError::Validation(format!(
                "El campo '{}' debe ser una fecha válida (AAAA-MM-DD).",
                field
            ))
        }),
    }
}

/// Unwrap a set of required values or fail with one message for the group
pub fn require<T>(value: Option<T>, message: &str) -> DomainResult<T> {
    value.ok_or_else(|| DomainError::Validation(message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_trims_and_drops_empty() {
        assert_eq!(text(Some("  Lola ".to_string())), Some("Lola".to_string()));
        assert_eq!(text(Some("   ".to_string())), None);
        assert_eq!(text(None), None);
    }

    #[test]
    fn test_number_reports_field_name() {
        assert_eq!(number("monto", Some(NumericInput::Text("12".into()))).unwrap(), Some(12.0));
        assert_eq!(number("monto", Some(NumericInput::Text("".into()))).unwrap(), None);

        let err = number("monto", Some(NumericInput::Text("doce".into()))).unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref m) if m.contains("monto")));
    }

    #[test]
    fn test_id_rejects_fractions() {
        assert_eq!(id("especie_id", Some(NumericInput::Number(1.0))).unwrap(), Some(1));
        assert!(id("especie_id", Some(NumericInput::Number(1.5))).is_err());
        assert!(id("especie_id", Some(NumericInput::Number(1e20))).is_err());
    }

    #[test]
    fn test_zero_is_a_present_number() {
        assert_eq!(number("monto", Some(NumericInput::Number(0.0))).unwrap(), Some(0.0));
        assert_eq!(number("precio_litro", Some(NumericInput::Text("0".into()))).unwrap(), Some(0.0));
    }

    #[test]
    fn test_date_parsing() {
        let parsed = date("fecha", Some("2024-01-01".to_string())).unwrap().unwrap();
        assert_eq!(shared::format_timestamp(parsed), "2024-01-01T00:00:00.000Z");
        assert_eq!(date("fecha", Some("".to_string())).unwrap(), None);
        assert!(date("fecha", Some("mañana".to_string())).is_err());
    }
}
