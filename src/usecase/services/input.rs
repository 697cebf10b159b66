//! Turns raw widget input into a cell value of the column's type.

use chrono::{DateTime, NaiveDate};

use crate::domain::entities::table::{CellValue, ColumnType};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn coerce_input(column_type: ColumnType, raw: &str) -> CellValue {
    match column_type {
        ColumnType::Text => CellValue::Text(raw.to_string()),
        ColumnType::Select => CellValue::Select(raw.to_string()),
        ColumnType::Date => CellValue::Date(
            parse_date(raw).map(date_value).unwrap_or_default(),
        ),
        ColumnType::Number => CellValue::Number(parse_number(raw)),
        ColumnType::Checkbox => CellValue::Checkbox(parse_flag(raw)),
    }
}

/// Empty or unparsable input coerces to the number default.
pub fn parse_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

pub fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "on" | "1")
}

/// Stored form of a chosen date.
pub fn date_value(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Accepts a plain `YYYY-MM-DD` date or a full RFC 3339 timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}
