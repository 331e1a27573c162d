//! Display helpers for the pages

use shared::{calendar_date, STATUS_ACTIVE, STATUS_DECEASED, STATUS_SOLD, TRANSACTION_EXPENSE, TRANSACTION_INCOME};

/// Colombian peso amount without decimals, e.g. `$ 1.234.567`
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{}", rounded.abs() as u64);

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if rounded < 0.0 {
        format!("-$ {}", grouped)
    } else {
        format!("$ {}", grouped)
    }
}

pub fn format_liters(liters: f64) -> String {
    format!("{:.2} L", liters)
}

/// Calendar date of an optional wire timestamp, `N/A` when absent
pub fn display_date(timestamp: Option<&str>) -> String {
    match timestamp {
        Some(ts) if !ts.is_empty() => calendar_date(ts).to_string(),
        _ => "N/A".to_string(),
    }
}

/// Value for an `<input type="date">` from an optional wire timestamp
pub fn date_input_value(timestamp: Option<&str>) -> String {
    timestamp.map(|ts| calendar_date(ts).to_string()).unwrap_or_default()
}

pub fn status_label(estado: &str) -> String {
    match estado {
        STATUS_ACTIVE => "Activo".to_string(),
        STATUS_SOLD => "Vendido".to_string(),
        STATUS_DECEASED => "Fallecido".to_string(),
        other => other.to_string(),
    }
}

pub fn transaction_label(tipo: &str) -> String {
    match tipo {
        TRANSACTION_INCOME => "Ingreso".to_string(),
        TRANSACTION_EXPENSE => "Gasto".to_string(),
        other => other.to_string(),
    }
}

/// Heading for an animal: its name, or the tag when unnamed
pub fn animal_title(nombre: Option<&str>, numero_etiqueta: &str) -> String {
    match nombre {
        Some(n) if !n.trim().is_empty() => n.to_string(),
        _ => format!("Animal #{}", numero_etiqueta),
    }
}

/// Today's date as `YYYY-MM-DD`, from the browser clock
pub fn today() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$ 0");
        assert_eq!(format_currency(950.0), "$ 950");
        assert_eq!(format_currency(1234567.4), "$ 1.234.567");
        assert_eq!(format_currency(-60000.0), "-$ 60.000");
    }

    #[test]
    fn test_dates() {
        assert_eq!(display_date(Some("2024-01-01T00:00:00.000Z")), "2024-01-01");
        assert_eq!(display_date(None), "N/A");
        assert_eq!(date_input_value(Some("2023-05-09T00:00:00.000Z")), "2023-05-09");
        assert_eq!(date_input_value(None), "");
    }

    #[test]
    fn test_labels() {
        assert_eq!(status_label("vendido"), "Vendido");
        assert_eq!(status_label("prestado"), "prestado");
        assert_eq!(transaction_label("gasto"), "Gasto");
        assert_eq!(animal_title(None, "A12"), "Animal #A12");
        assert_eq!(animal_title(Some("Lola"), "A12"), "Lola");
    }
}
