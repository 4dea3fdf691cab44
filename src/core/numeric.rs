use serde_json::Value;

/// Parses a text cell into a finite number.
///
/// Surrounding whitespace is ignored. Empty text, non-numeric text and
/// non-finite results (`nan`, `inf`) yield `None` so callers can decide how
/// to plot the gap.
#[must_use]
pub fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Coerces a JSON scalar into a finite number.
///
/// Numbers pass through, strings go through [`parse_numeric`], booleans map
/// to `1.0`/`0.0`. Nulls, arrays and objects are treated as missing.
#[must_use]
pub fn coerce_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|value| value.is_finite()),
        Value::String(text) => parse_numeric(text),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
