use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Animal status values offered by the client. The backend stores any string.
pub const STATUS_ACTIVE: &str = "activo";
pub const STATUS_SOLD: &str = "vendido";
pub const STATUS_DECEASED: &str = "fallecido";

/// Transaction type values used by the dashboard aggregation.
pub const TRANSACTION_INCOME: &str = "ingreso";
pub const TRANSACTION_EXPENSE: &str = "gasto";

/// A species from the catalog (Bovino, Equino, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub id: i64,
    pub nombre: String,
}

/// An animal as stored, without joined data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub id: i64,
    pub numero_etiqueta: String,
    pub nombre: Option<String>,
    pub especie_id: i64,
    /// RFC 3339 timestamp, midnight UTC
    pub fecha_nacimiento: Option<String>,
    pub estado: String,
    pub fecha_compra: Option<String>,
    pub precio_compra: Option<f64>,
}

/// List entry: an animal with its species joined
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalWithSpecies {
    #[serde(flatten)]
    pub animal: Animal,
    pub especie: Species,
}

/// Full animal view with vaccination and medical history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalDetail {
    #[serde(flatten)]
    pub animal: Animal,
    pub especie: Species,
    /// Ordered by application date, most recent first
    pub vacunaciones: Vec<VaccinationEntry>,
    pub historial_medico: Vec<MedicalHistoryEntry>,
}

/// Create or replace payload for an animal.
///
/// Every field is optional on the wire so presence can be checked server side
/// and reported as a validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimalRequest {
    pub numero_etiqueta: Option<String>,
    pub nombre: Option<String>,
    pub especie_id: Option<NumericInput>,
    /// Calendar date (YYYY-MM-DD) or RFC 3339
    pub fecha_nacimiento: Option<String>,
    pub estado: Option<String>,
    pub fecha_compra: Option<String>,
    pub precio_compra: Option<NumericInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vaccine {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VaccineRequest {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
}

/// Join record linking an animal to an applied vaccine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaccinationRecord {
    pub id: i64,
    pub animal_id: i64,
    pub vacuna_id: i64,
    pub fecha_aplicacion: String,
    pub proxima_dosis: Option<String>,
}

/// Vaccination record with the vaccine joined, as shown in an animal's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaccinationEntry {
    #[serde(flatten)]
    pub record: VaccinationRecord,
    pub vacuna: Vaccine,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VaccinationRequest {
    pub vacuna_id: Option<NumericInput>,
    pub fecha_aplicacion: Option<String>,
    pub proxima_dosis: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalHistoryEntry {
    pub id: i64,
    pub animal_id: i64,
    pub fecha: String,
    pub descripcion: String,
    pub tratamiento: Option<String>,
    pub veterinario: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicalHistoryRequest {
    pub fecha: Option<String>,
    pub descripcion: Option<String>,
    pub tratamiento: Option<String>,
    pub veterinario: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialTransaction {
    pub id: i64,
    /// "ingreso" or "gasto"
    pub tipo_transaccion: String,
    pub descripcion: String,
    pub monto: f64,
    pub fecha: String,
    pub categoria: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub tipo_transaccion: Option<String>,
    pub descripcion: Option<String>,
    pub monto: Option<NumericInput>,
    pub fecha: Option<String>,
    pub categoria: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilkProductionRecord {
    pub id: i64,
    pub fecha: String,
    pub litros_producidos: f64,
    pub precio_litro: f64,
    pub gastos_asociados: f64,
    /// litros_producidos * precio_litro - gastos_asociados
    pub ingreso_total: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MilkProductionRequest {
    pub fecha: Option<String>,
    pub litros_producidos: Option<NumericInput>,
    pub precio_litro: Option<NumericInput>,
    pub gastos_asociados: Option<NumericInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub animales: AnimalCounts,
    pub finanzas: FinanceTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalCounts {
    /// Active animals of every species
    pub total: i64,
    pub bovinos: i64,
    pub equinos: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceTotals {
    pub ingresos: f64,
    pub gastos: f64,
    pub balance: f64,
}

impl FinanceTotals {
    pub fn new(ingresos: f64, gastos: f64) -> Self {
        Self {
            ingresos,
            gastos,
            balance: ingresos - gastos,
        }
    }
}

/// Body of every non-2xx API response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A number coming from a JSON body, either as a JSON number or as the string
/// an HTML input produces ("12.5").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    /// True when the value carries nothing (empty or whitespace-only text)
    pub fn is_blank(&self) -> bool {
        matches!(self, NumericInput::Text(s) if s.trim().is_empty())
    }

    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            NumericInput::Number(n) => *n,
            NumericInput::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// Integer view, used for ids. Fractional and out-of-range numbers are rejected.
    pub fn as_i64(&self) -> Option<i64> {
        // i64::MAX rounds up to 2^63 as f64, so the upper bound is exclusive
        const MIN: f64 = i64::MIN as f64;
        const MAX: f64 = i64::MAX as f64;
        match self {
            NumericInput::Number(n) if n.fract() == 0.0 && (MIN..MAX).contains(n) => Some(*n as i64),
            NumericInput::Number(_) => None,
            NumericInput::Text(s) => s.trim().parse::<i64>().ok(),
        }
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<i64> for NumericInput {
    fn from(value: i64) -> Self {
        NumericInput::Number(value as f64)
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericInput::Number(n) => write!(f, "{}", n),
            NumericInput::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Parse a wire date. Accepts a calendar date (YYYY-MM-DD), interpreted as
/// midnight UTC, or a full RFC 3339 timestamp.
pub fn parse_wire_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Render a timestamp the way the API returns it: `2024-01-01T00:00:00.000Z`
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Calendar part of a wire timestamp, for date inputs and tables.
/// `"2024-01-01T00:00:00.000Z"` becomes `"2024-01-01"`.
pub fn calendar_date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// Income of a milk production day
pub fn milk_income(litros: f64, precio_litro: f64, gastos: f64) -> f64 {
    litros * precio_litro - gastos
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_input_accepts_numbers_and_strings() {
        let from_number: NumericInput = serde_json::from_value(json!(100)).unwrap();
        assert_eq!(from_number.as_f64(), Some(100.0));
        assert_eq!(from_number.as_i64(), Some(100));

        let from_text: NumericInput = serde_json::from_value(json!(" 12.5 ")).unwrap();
        assert_eq!(from_text.as_f64(), Some(12.5));
        assert_eq!(from_text.as_i64(), None);

        let id_text: NumericInput = serde_json::from_value(json!("2")).unwrap();
        assert_eq!(id_text.as_i64(), Some(2));
    }

    #[test]
    fn test_numeric_input_rejects_garbage() {
        assert_eq!(NumericInput::Text("abc".to_string()).as_f64(), None);
        assert_eq!(NumericInput::Text("NaN".to_string()).as_f64(), None);
        assert_eq!(NumericInput::Number(1.5).as_i64(), None);
        assert!(NumericInput::Text("   ".to_string()).is_blank());
        assert!(!NumericInput::Number(0.0).is_blank());
    }

    #[test]
    fn test_numeric_input_ids_must_fit_in_i64() {
        let huge: NumericInput = serde_json::from_value(json!(1e20)).unwrap();
        assert_eq!(huge.as_i64(), None);
        assert_eq!(NumericInput::Number(-1e20).as_i64(), None);
        assert_eq!(NumericInput::Number(f64::INFINITY).as_i64(), None);
        assert_eq!(NumericInput::Number(i64::MIN as f64).as_i64(), Some(i64::MIN));
        assert_eq!(NumericInput::Number(9_007_199_254_740_992.0).as_i64(), Some(9_007_199_254_740_992));
    }

    #[test]
    fn test_parse_wire_date_calendar_and_rfc3339() {
        let date = parse_wire_date("2024-01-01").unwrap();
        assert_eq!(format_timestamp(date), "2024-01-01T00:00:00.000Z");

        let ts = parse_wire_date("2024-03-05T10:30:00-04:00").unwrap();
        assert_eq!(format_timestamp(ts), "2024-03-05T14:30:00.000Z");

        assert!(parse_wire_date("01/02/2024").is_none());
        assert!(parse_wire_date("").is_none());
    }

    #[test]
    fn test_calendar_date() {
        assert_eq!(calendar_date("2024-01-01T00:00:00.000Z"), "2024-01-01");
        assert_eq!(calendar_date("2024-01-01"), "2024-01-01");
    }

    #[test]
    fn test_milk_income_and_finance_totals() {
        assert_eq!(milk_income(100.0, 0.5, 10.0), 40.0);
        let totals = FinanceTotals::new(100.0, 40.0);
        assert_eq!(totals.balance, 60.0);
    }

    #[test]
    fn test_animal_detail_flattens_animal_fields() {
        let detail = AnimalDetail {
            animal: Animal {
                id: 7,
                numero_etiqueta: "A1".to_string(),
                nombre: None,
                especie_id: 1,
                fecha_nacimiento: None,
                estado: STATUS_ACTIVE.to_string(),
                fecha_compra: None,
                precio_compra: None,
            },
            especie: Species { id: 1, nombre: "Bovino".to_string() },
            vacunaciones: vec![],
            historial_medico: vec![],
        };

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["numero_etiqueta"], "A1");
        assert_eq!(value["especie"]["nombre"], "Bovino");
        assert!(value["vacunaciones"].as_array().unwrap().is_empty());

        let back: AnimalDetail = serde_json::from_value(value).unwrap();
        assert_eq!(back, detail);
    }

    #[test]
    fn test_requests_tolerate_missing_fields() {
        let request: AnimalRequest = serde_json::from_value(json!({ "nombre": "Lola" })).unwrap();
        assert_eq!(request.numero_etiqueta, None);
        assert_eq!(request.especie_id, None);
        assert_eq!(request.nombre.as_deref(), Some("Lola"));
    }
}
