use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A monetary value as it arrives from the CRUD backend, before normalization.
///
/// The REST layer returns amounts inconsistently: sometimes a JSON number,
/// sometimes a string with currency symbols or comma decimal separators
/// ("R$ 1.234,56"), sometimes null. This enum deserializes all of those shapes
/// directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_string())
    }
}

/// Converts a raw monetary value into a finite number.
///
/// - Finite numeric input is returned unchanged.
/// - Textual input is stripped of everything except digits, minus, comma and
///   period, then parsed; a comma acting as the decimal separator is converted
///   to a period and thousands periods are dropped.
/// - Anything unparseable, missing or non-finite yields exactly `0.0`.
///
/// Never returns NaN or infinity, never panics.
pub fn normalize_amount(raw: &RawAmount) -> f64 {
    match raw {
        RawAmount::Number(n) if n.is_finite() => *n,
        RawAmount::Number(_) => 0.0,
        RawAmount::Text(text) => normalize_text(text),
        RawAmount::Missing => 0.0,
    }
}

fn normalize_text(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '-' | ',' | '.'))
        .collect();

    if cleaned.is_empty() {
        return 0.0;
    }

    let candidate = match (cleaned.rfind(','), cleaned.rfind('.')) {
        // Comma after the last period (or no period at all): the comma is the
        // decimal separator and any periods are thousands separators.
        (Some(comma_idx), period_idx) if period_idx.map_or(true, |p| comma_idx > p) => cleaned
            .char_indices()
            .filter_map(|(idx, c)| match c {
                '.' => None,
                ',' if idx == comma_idx => Some('.'),
                ',' => None,
                other => Some(other),
            })
            .collect(),
        // Comma before a period: commas are thousands separators.
        (Some(_), _) => cleaned.replace(',', ""),
        (None, _) => cleaned,
    };

    match candidate.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}
