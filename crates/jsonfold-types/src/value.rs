use chrono::{DateTime, Utc};

/// The in-memory value a render pass consumes. A conforming parser (serde_json
/// for the CLI) is assumed to have produced it already; object entries keep
/// their insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Date(DateTime<Utc>),
    Array(Vec<JsonValue>),
    Object(Vec<(String, JsonValue)>),
}

impl JsonValue {
    /// Anything that is not an array or object.
    pub fn is_primitive(&self) -> bool {
        !matches!(self, JsonValue::Array(_) | JsonValue::Object(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(b),
            serde_json::Value::Number(n) => JsonValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => JsonValue::String(s),
            serde_json::Value::Array(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(map) => {
                // serde_json is built with preserve_order, so this keeps the
                // key order of the source document.
                JsonValue::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

/// Semantic kind of a rendered cell. Derived solely from a value's runtime
/// shape; also the vocabulary of per-cell CSS classes in the markup contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Undefined,
    Null,
    Nan,
    Date,
    Number,
    NumberString,
    String,
    Boolean,
    Complex,
    /// Reserved slot in the markup contract; the closed `JsonValue` enum never
    /// produces it.
    Other,
}

impl CellKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CellKind::Undefined => "undefined",
            CellKind::Null => "null",
            CellKind::Nan => "nan",
            CellKind::Date => "date",
            CellKind::Number => "number",
            CellKind::NumberString => "number-string",
            CellKind::String => "string",
            CellKind::Boolean => "boolean",
            CellKind::Complex => "complex",
            CellKind::Other => "other",
        }
    }
}
