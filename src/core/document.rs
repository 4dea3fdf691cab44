use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::core::numeric::coerce_numeric;
use crate::error::DashboardResult;

pub const RECORDS_KEY: &str = "data";
pub const RECORD_VALUE_KEY: &str = "value";

/// Parsed JSON document with an optional `data` record list.
///
/// Arbitrary nesting is accepted; only `data[*].value` feeds the charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructuredDocument(Value);

impl Default for StructuredDocument {
    fn default() -> Self {
        Self(json!({ RECORDS_KEY: [] }))
    }
}

impl StructuredDocument {
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn parse(text: &str) -> DashboardResult<Self> {
        Ok(Self(serde_json::from_str(text)?))
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Records under `data`, or an empty slice when the key is absent or not a list.
    #[must_use]
    pub fn records(&self) -> &[Value] {
        self.0
            .get(RECORDS_KEY)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn has_records(&self) -> bool {
        !self.records().is_empty()
    }

    /// Numeric `value` of every record in order; failures become `None`.
    #[must_use]
    pub fn coerced_values(&self) -> Vec<Option<f64>> {
        self.records()
            .iter()
            .map(|record| record.get(RECORD_VALUE_KEY).and_then(coerce_numeric))
            .collect()
    }
}
