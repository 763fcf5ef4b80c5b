//! Scalar values and the record map.

use chancery_ids::RecordId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One scalar cell. Dates and datetimes are ISO-8601 strings carried in
/// [`Value::Text`]; date semantics come from the field schema, not the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view used by exact-match and range filters.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Text(s) => s.trim().parse::<f64>().ok(),
            Value::Bool(_) | Value::Null => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::Float(v) if v.fract() == 0.0 => Some(*v as i64),
            Value::Float(_) => None,
            Value::Text(s) => s.trim().parse::<i64>().ok(),
            Value::Bool(_) | Value::Null => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// String rendering used by text filters and table cells. Null renders
    /// empty; the display layer substitutes its own placeholder.
    pub fn render(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(v) => v.to_string(),
            Value::Int(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            Value::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// One row of a module collection: named scalar fields plus the reserved
/// `extra_data` sub-map whose valid keys depend on the record's
/// discriminator value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    #[serde(flatten)]
    fields: BTreeMap<String, Value>,
    #[serde(default, rename = "extra_data", skip_serializing_if = "BTreeMap::is_empty")]
    extra: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Builder form of [`Record::set`], for seed data.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn extra(&self) -> &BTreeMap<String, Value> {
        &self.extra
    }

    pub fn extra_mut(&mut self) -> &mut BTreeMap<String, Value> {
        &mut self.extra
    }

    pub fn get_extra(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }

    /// Identity under the module's id field, when assigned.
    pub fn id(&self, id_field: &str) -> Option<RecordId> {
        self.get(id_field).and_then(Value::as_i64).map(RecordId::new)
    }

    pub fn set_id(&mut self, id_field: &str, id: RecordId) {
        self.set(id_field, id.value());
    }

    /// String rendering of a field, empty when null or absent.
    pub fn render(&self, key: &str) -> String {
        self.get(key).map(Value::render).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_numeric_views_coerce_text() {
        assert_eq!(Value::Text("42".into()).as_i64(), Some(42));
        assert_eq!(Value::Text(" 3.5 ".into()).as_f64(), Some(3.5));
        assert_eq!(Value::Int(7).as_f64(), Some(7.0));
        assert_eq!(Value::Null.as_f64(), None);
        assert_eq!(Value::Bool(true).as_i64(), None);
    }

    #[test]
    fn record_roundtrips_through_json() {
        let record = Record::new()
            .with("citizen_id", 1)
            .with("citizen_last_name", "ADAMOU")
            .with("detached_date", Value::Null)
            .with_extra("institution", "Université de Paris");

        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        assert_eq!(
            back.get_extra("institution").and_then(Value::as_str),
            Some("Université de Paris")
        );
    }

    #[test]
    fn record_id_reads_through_the_id_field() {
        let mut record = Record::new().with("asset_id", 9);
        assert_eq!(record.id("asset_id").map(|id| id.value()), Some(9));
        record.set_id("asset_id", chancery_ids::RecordId::new(10));
        assert_eq!(record.render("asset_id"), "10");
        assert_eq!(record.id("missing"), None);
    }
}
