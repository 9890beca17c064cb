use crate::classify::is_iso_date_like;
use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use jsonfold_types::{CellBody, JsonValue, Segment};
use once_cell::sync::Lazy;
use regex::Regex;

static URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("valid url pattern"));

/// Format a date for display, always evaluated in UTC regardless of viewer
/// locale. Exact-midnight timestamps drop the time-of-day suffix.
pub fn format_date(date: &DateTime<Utc>) -> String {
    if date.hour() == 0 && date.minute() == 0 {
        date.format("%a, %b %-d, %Y").to_string()
    } else {
        date.format("%a, %b %-d, %Y %-I:%M %p").to_string()
    }
}

/// Parse an ISO-8601-like string and format it; unparseable input surfaces the
/// literal `Invalid Date` instead of failing the render.
pub fn format_date_string(s: &str) -> String {
    match parse_iso_date(s) {
        Some(date) => format_date(&date),
        None => "Invalid Date".to_string(),
    }
}

fn parse_iso_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(s) {
        return Some(date.with_timezone(&Utc));
    }
    // Timezone-less variants ("2024-01-01T12:30:00.000") read as UTC.
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Numbers render the way a JSON author wrote them: no trailing `.0` on
/// whole values.
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n == n.trunc() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Split a string into literal text and `http(s)://` link runs (greedy,
/// whitespace-terminated). Concatenating the segments reconstructs the input
/// exactly; nothing is dropped or duplicated.
pub fn linkify(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;
    for m in URL.find_iter(text) {
        if m.start() > last {
            segments.push(Segment::Text(text[last..m.start()].to_string()));
        }
        segments.push(Segment::Link(m.as_str().to_string()));
        last = m.end();
    }
    if last < text.len() || segments.is_empty() {
        segments.push(Segment::Text(text[last..].to_string()));
    }
    segments
}

/// Display form of a primitive value. Complex values never reach this; the
/// renderer descends into them instead.
pub fn format_primitive(value: &JsonValue) -> CellBody {
    let literal = |text: &str| CellBody::Text(vec![Segment::Text(text.to_string())]);

    match value {
        JsonValue::Undefined => literal("undefined"),
        JsonValue::Null => literal("null"),
        JsonValue::Number(n) if n.is_nan() => literal("NaN"),
        JsonValue::Number(n) => literal(&format_number(*n)),
        JsonValue::Bool(b) => literal(if *b { "✓" } else { "•" }),
        JsonValue::Date(d) => literal(&format_date(d)),
        JsonValue::String(s) if is_iso_date_like(s) => literal(&format_date_string(s)),
        JsonValue::String(s) if s.is_empty() => CellBody::EmptyString,
        JsonValue::String(s) => CellBody::Text(linkify(s)),
        JsonValue::Array(_) | JsonValue::Object(_) => literal(""),
    }
}
