//! Filtering, sorting, and dynamic column derivation over a record
//! collection.
//!
//! The query never mutates the collection; it borrows records and returns a
//! projected view. All active filters AND-combine.

use crate::fields::{DynamicFieldSchema, ModuleSchema};
use crate::record::{Record, Value};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::cmp::Ordering;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// One filter over one field. A filter with a blank payload is inactive and
/// matches everything.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Case-insensitive substring containment on the string rendering.
    Text { field: String, query: String },
    /// Numeric equality after coercion (reference ids).
    Exact { field: String, value: i64 },
    /// Inclusive timestamp range; a date-only `to` bound is pushed to the
    /// end of its day.
    DateRange {
        field: String,
        from: Option<String>,
        to: Option<String>,
    },
    /// Inclusive numeric range.
    NumberRange {
        field: String,
        min: Option<f64>,
        max: Option<f64>,
    },
}

impl Filter {
    pub fn field(&self) -> &str {
        match self {
            Filter::Text { field, .. }
            | Filter::Exact { field, .. }
            | Filter::DateRange { field, .. }
            | Filter::NumberRange { field, .. } => field,
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            Filter::Text { query, .. } => !query.trim().is_empty(),
            Filter::Exact { .. } => true,
            Filter::DateRange { from, to, .. } => from.is_some() || to.is_some(),
            Filter::NumberRange { min, max, .. } => min.is_some() || max.is_some(),
        }
    }

    fn matches(&self, record: &Record) -> bool {
        if !self.is_active() {
            return true;
        }
        match self {
            Filter::Text { field, query } => {
                let haystack = record.render(field).to_lowercase();
                haystack.contains(query.trim().to_lowercase().as_str())
            }
            Filter::Exact { field, value } => {
                record.get(field).and_then(Value::as_i64) == Some(*value)
            }
            Filter::DateRange { field, from, to } => {
                let Some(stamp) = record.get(field).and_then(value_timestamp) else {
                    return false;
                };
                if let Some(lower) = from.as_deref().and_then(parse_timestamp) {
                    if stamp < lower {
                        return false;
                    }
                }
                if let Some(upper) = to.as_deref().and_then(parse_timestamp_end) {
                    if stamp > upper {
                        return false;
                    }
                }
                true
            }
            Filter::NumberRange { field, min, max } => {
                let Some(number) = record.get(field).and_then(Value::as_f64) else {
                    return false;
                };
                if let Some(min) = min {
                    if number < *min {
                        return false;
                    }
                }
                if let Some(max) = max {
                    if number > *max {
                        return false;
                    }
                }
                true
            }
        }
    }
}

/// Filter + sort state of one table view.
#[derive(Debug, Clone)]
pub struct TableQuery {
    pub filters: Vec<Filter>,
    pub sort_field: String,
    pub direction: SortDirection,
}

impl TableQuery {
    pub fn new(sort_field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            filters: Vec::new(),
            sort_field: sort_field.into(),
            direction,
        }
    }

    /// Same field flips direction; a new field resets to ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.direction = self.direction.toggled();
        } else {
            self.sort_field = field.to_string();
            self.direction = SortDirection::Ascending;
        }
    }

    /// Replace the filter on `field`, or push a new one. Inactive filters
    /// are dropped so the active set stays minimal.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filters.retain(|existing| existing.field() != filter.field());
        if filter.is_active() {
            self.filters.push(filter);
        }
    }

    pub fn clear_filter(&mut self, field: &str) {
        self.filters.retain(|existing| existing.field() != field);
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    pub fn filter_on(&self, field: &str) -> Option<&Filter> {
        self.filters.iter().find(|filter| filter.field() == field)
    }

    /// The active discriminator id, when an exact filter is set on the
    /// module's discriminator field. Dynamic columns hinge on this.
    pub fn discriminator_value(&self, schema: &ModuleSchema) -> Option<i64> {
        let key = schema.discriminator?;
        match self.filter_on(key) {
            Some(Filter::Exact { value, .. }) => Some(*value),
            _ => None,
        }
    }

    /// Filtered, stably sorted projection of the collection.
    pub fn apply<'a>(&self, records: &'a [Record], schema: &ModuleSchema) -> Vec<&'a Record> {
        let mut rows: Vec<&Record> = records
            .iter()
            .filter(|record| self.filters.iter().all(|filter| filter.matches(record)))
            .collect();

        let as_date = schema.sorts_as_date(&self.sort_field);
        rows.sort_by(|a, b| self.compare(a, b, as_date));
        rows
    }

    fn compare(&self, a: &Record, b: &Record, as_date: bool) -> Ordering {
        let left = a.get(&self.sort_field).filter(|value| !value.is_null());
        let right = b.get(&self.sort_field).filter(|value| !value.is_null());

        // Absent values sort after present ones in either direction.
        let (left, right) = match (left, right) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Greater,
            (Some(_), None) => return Ordering::Less,
            (Some(l), Some(r)) => (l, r),
        };

        let ordering = compare_values(left, right, as_date);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

fn compare_values(left: &Value, right: &Value, as_date: bool) -> Ordering {
    if as_date {
        if let (Some(l), Some(r)) = (value_timestamp(left), value_timestamp(right)) {
            return l.cmp(&r);
        }
    }
    match (left, right) {
        (Value::Int(l), Value::Int(r)) => l.cmp(r),
        (Value::Float(l), Value::Float(r)) => l.partial_cmp(r).unwrap_or(Ordering::Equal),
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => left
            .as_f64()
            .partial_cmp(&right.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::Bool(l), Value::Bool(r)) => l.cmp(r),
        // Case-insensitive comparison stands in for locale collation.
        (Value::Text(l), Value::Text(r)) => l.to_lowercase().cmp(&r.to_lowercase()),
        _ => left.render().to_lowercase().cmp(&right.render().to_lowercase()),
    }
}

fn value_timestamp(value: &Value) -> Option<i64> {
    value.as_str().and_then(parse_timestamp)
}

/// Parse an ISO-8601 date or datetime into epoch seconds. Accepts RFC 3339,
/// a bare `YYYY-MM-DDTHH:MM:SS`, and a bare `YYYY-MM-DD` (start of day).
pub fn parse_timestamp(input: &str) -> Option<i64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(input) {
        return Some(stamp.timestamp());
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Some(stamp.and_utc().timestamp());
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp());
    }
    None
}

/// Like [`parse_timestamp`], but a date-only input maps to the end of its
/// day so an inclusive `to` bound covers the whole date.
fn parse_timestamp_end(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date.and_hms_opt(23, 59, 59)?.and_utc().timestamp());
    }
    parse_timestamp(trimmed)
}

/// One derived `extra_data` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicColumn {
    pub key: String,
    pub label: String,
}

/// Columns for the discriminator value currently filtered on: the keys
/// actually present in the filtered rows, in declared order, labelled from
/// the dynamic schema with the raw key as last resort.
pub fn dynamic_columns(
    schema: &DynamicFieldSchema,
    discriminator_value: i64,
    rows: &[&Record],
) -> Vec<DynamicColumn> {
    let mut present: BTreeSet<&str> = BTreeSet::new();
    for row in rows {
        for key in row.extra().keys() {
            present.insert(key.as_str());
        }
    }

    let mut columns = Vec::new();
    for field in schema.fields_for(discriminator_value) {
        if present.remove(field.key) {
            columns.push(DynamicColumn {
                key: field.key.to_string(),
                label: field.label.to_string(),
            });
        }
    }
    // Stored keys not declared for this value keep their best-known label.
    for key in present {
        columns.push(DynamicColumn {
            key: key.to_string(),
            label: schema
                .label_anywhere(key)
                .map(str::to_string)
                .unwrap_or_else(|| key.to_string()),
        });
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{DynamicField, FieldKind, FieldSchema};

    fn schema() -> ModuleSchema {
        ModuleSchema {
            id_field: "citizen_id",
            discriminator: Some("citizen_type_id"),
            fields: vec![
                FieldSchema::text("citizen_last_name", "Nom"),
                FieldSchema::date("attached_date", "Attachement"),
                FieldSchema::number("salary_min", "Salaire min"),
            ],
            dynamic: DynamicFieldSchema::empty(),
            rules: vec![],
        }
    }

    fn citizen(id: i64, last_name: &str, attached: Option<&str>) -> Record {
        let mut record = Record::new()
            .with("citizen_id", id)
            .with("citizen_last_name", last_name);
        match attached {
            Some(date) => record.set("attached_date", date),
            None => record.set("attached_date", Value::Null),
        }
        record
    }

    #[test]
    fn text_filter_is_case_insensitive_substring() {
        let records = vec![
            citizen(1, "ADAMOU", Some("2023-01-02")),
            citizen(2, "MAHAMANE", Some("2022-09-15")),
            citizen(3, "ISSOUFOU", Some("2021-05-20")),
        ];
        let mut query = TableQuery::new("citizen_id", SortDirection::Ascending);
        query.set_filter(Filter::Text {
            field: "citizen_last_name".into(),
            query: "ma".into(),
        });
        let rows = query.apply(&records, &schema());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].render("citizen_last_name"), "MAHAMANE");
    }

    #[test]
    fn blank_text_filter_is_inactive_and_dropped() {
        let mut query = TableQuery::new("citizen_id", SortDirection::Ascending);
        query.set_filter(Filter::Text {
            field: "citizen_last_name".into(),
            query: "   ".into(),
        });
        assert!(query.filters.is_empty());
    }

    #[test]
    fn date_range_bounds_are_inclusive_with_end_of_day_to() {
        let records = vec![
            citizen(1, "A", Some("2023-01-02")),
            citizen(2, "B", Some("2023-03-10T08:30:00")),
            citizen(3, "C", Some("2023-06-01")),
            citizen(4, "D", None),
        ];
        let mut query = TableQuery::new("citizen_id", SortDirection::Ascending);
        query.set_filter(Filter::DateRange {
            field: "attached_date".into(),
            from: Some("2023-01-02".into()),
            to: Some("2023-03-10".into()),
        });
        let rows = query.apply(&records, &schema());
        let ids: Vec<String> = rows.iter().map(|r| r.render("citizen_id")).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn absent_values_sort_last_in_both_directions() {
        let records = vec![
            citizen(1, "A", Some("2023-01-02")),
            citizen(2, "B", None),
            citizen(3, "C", Some("2021-05-20")),
        ];
        let mut query = TableQuery::new("attached_date", SortDirection::Ascending);
        let ascending: Vec<String> = query
            .apply(&records, &schema())
            .iter()
            .map(|r| r.render("citizen_id"))
            .collect();
        assert_eq!(ascending, vec!["3", "1", "2"]);

        query.direction = SortDirection::Descending;
        let descending: Vec<String> = query
            .apply(&records, &schema())
            .iter()
            .map(|r| r.render("citizen_id"))
            .collect();
        assert_eq!(descending, vec!["1", "3", "2"]);
    }

    #[test]
    fn toggle_sort_flips_then_resets() {
        let mut query = TableQuery::new("created", SortDirection::Descending);
        query.toggle_sort("created");
        assert_eq!(query.direction, SortDirection::Ascending);
        query.toggle_sort("citizen_last_name");
        assert_eq!(query.sort_field, "citizen_last_name");
        assert_eq!(query.direction, SortDirection::Ascending);
    }

    #[test]
    fn dynamic_columns_follow_declared_order_and_presence() {
        let dynamic = DynamicFieldSchema::new(vec![(
            1,
            vec![
                DynamicField::new("brand", "Marque", FieldKind::Text),
                DynamicField::new("license_plate", "Plaque d'Immatriculation", FieldKind::Text),
                DynamicField::new("mileage", "Kilométrage", FieldKind::Number),
            ],
        )]);
        let rows = vec![
            Record::new()
                .with("asset_id", 1)
                .with_extra("license_plate", "AB-123-CD")
                .with_extra("brand", "Toyota"),
        ];
        let borrowed: Vec<&Record> = rows.iter().collect();
        let columns = dynamic_columns(&dynamic, 1, &borrowed);
        let keys: Vec<&str> = columns.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["brand", "license_plate"]);
        assert_eq!(columns[1].label, "Plaque d'Immatriculation");
    }

    #[test]
    fn undeclared_extra_keys_fall_back_to_raw_key_label() {
        let dynamic = DynamicFieldSchema::new(vec![(1, vec![])]);
        let rows = vec![Record::new().with_extra("legacy_key", "x")];
        let borrowed: Vec<&Record> = rows.iter().collect();
        let columns = dynamic_columns(&dynamic, 1, &borrowed);
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].label, "legacy_key");
    }
}
