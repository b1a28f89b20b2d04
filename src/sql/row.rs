use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::sql::data_value::DataValue;

/// One parsed row: column name to value. Missing positions are absent keys.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct Row {
    values: BTreeMap<String, DataValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zips column names with values. Surplus columns stay unmapped.
    pub fn from_pairs(columns: &[String], values: Vec<DataValue>) -> Self {
        let values = columns.iter().cloned().zip(values).collect();
        Row { values }
    }

    pub fn insert(&mut self, column: impl Into<String>, value: DataValue) {
        self.values.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<&DataValue> {
        self.values.get(column)
    }

    pub fn number(&self, column: &str) -> Option<f64> {
        self.get(column).and_then(DataValue::as_number)
    }

    /// Numeric value of `column`, or `default` when absent or not numeric.
    pub fn number_or(&self, column: &str, default: f64) -> f64 {
        self.number(column).unwrap_or(default)
    }

    pub fn floored_or(&self, column: &str, default: f64) -> f64 {
        self.number_or(column, default).floor()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &DataValue)> {
        self.values.iter()
    }
}
