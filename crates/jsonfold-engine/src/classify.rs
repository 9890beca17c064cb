use jsonfold_types::{CellKind, JsonValue};
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER_STRING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("valid number-string pattern"));

/// Map a value to its semantic cell kind. Total function, first match wins;
/// the order mirrors the formatting rules (NaN before Number, ISO-looking
/// strings before plain strings).
pub fn classify(value: &JsonValue) -> CellKind {
    match value {
        JsonValue::Undefined => CellKind::Undefined,
        JsonValue::Number(n) if n.is_nan() => CellKind::Nan,
        JsonValue::Date(_) => CellKind::Date,
        JsonValue::Number(_) => CellKind::Number,
        JsonValue::Bool(_) => CellKind::Boolean,
        JsonValue::String(s) => {
            if is_iso_date_like(s) {
                CellKind::Date
            } else if NUMBER_STRING.is_match(s) {
                CellKind::NumberString
            } else {
                CellKind::String
            }
        }
        JsonValue::Null => CellKind::Null,
        JsonValue::Array(_) | JsonValue::Object(_) => CellKind::Complex,
    }
}

/// Cheap shape test for ISO-8601-like timestamps: 20-29 bytes with the fixed
/// separators `----`/`-`/`T` at positions 4, 7 and 10. Actual parsing (and the
/// `Invalid Date` fallback) happens at format time.
pub fn is_iso_date_like(s: &str) -> bool {
    let b = s.as_bytes();
    (20..=29).contains(&b.len()) && b[4] == b'-' && b[7] == b'-' && b[10] == b'T'
}
