//! Fixed and dynamic field schemas.

use crate::record::Value;
use crate::reference::ReferenceList;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Input kind of a field. Drives coercion on submit, comparison in the
/// table engine, and the edit widget in the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Number,
    Date,
    DateTime,
    Boolean,
    Select,
    File,
}

impl FieldKind {
    pub fn is_date(self) -> bool {
        matches!(self, FieldKind::Date | FieldKind::DateTime)
    }
}

/// Schema of one fixed field.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Options for [`FieldKind::Select`].
    pub reference: Option<Arc<ReferenceList>>,
    /// Seed for create-mode forms when the source defines one
    /// (e.g. the owning organisation id).
    pub default: Option<Value>,
}

impl FieldSchema {
    fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
            reference: None,
            default: None,
        }
    }

    pub fn text(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    pub fn textarea(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::TextArea)
    }

    pub fn number(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Number)
    }

    pub fn date(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Date)
    }

    pub fn datetime(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::DateTime)
    }

    pub fn boolean(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Boolean)
    }

    pub fn file(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::File)
    }

    pub fn select(key: &'static str, label: &'static str, list: Arc<ReferenceList>) -> Self {
        let mut field = Self::new(key, label, FieldKind::Select);
        field.reference = Some(list);
        field
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// One discriminator-conditional sub-field of `extra_data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicField {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl DynamicField {
    pub fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { key, label, kind }
    }
}

/// Discriminator value -> ordered dynamic field list.
#[derive(Debug, Clone, Default)]
pub struct DynamicFieldSchema {
    by_value: BTreeMap<i64, Vec<DynamicField>>,
}

impl DynamicFieldSchema {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(groups: Vec<(i64, Vec<DynamicField>)>) -> Self {
        Self {
            by_value: groups.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.by_value.is_empty()
    }

    /// Fields declared for a discriminator value; empty when undeclared.
    pub fn fields_for(&self, value: i64) -> &[DynamicField] {
        self.by_value
            .get(&value)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn declared_values(&self) -> impl Iterator<Item = i64> + '_ {
        self.by_value.keys().copied()
    }

    /// Label for a key under a specific discriminator value.
    pub fn label_for(&self, value: i64, key: &str) -> Option<&'static str> {
        self.fields_for(value)
            .iter()
            .find(|field| field.key == key)
            .map(|field| field.label)
    }

    /// Label for a key under any discriminator value. The table view falls
    /// back to this (and then to the raw key) when a stored key is not
    /// declared for the active value.
    pub fn label_anywhere(&self, key: &str) -> Option<&'static str> {
        self.by_value
            .values()
            .flatten()
            .find(|field| field.key == key)
            .map(|field| field.label)
    }
}

/// Date semantics follow the schema kind where one exists, with the source's
/// key-name convention as fallback for untyped keys like `created`.
pub fn is_date_key(key: &str) -> bool {
    key.contains("date") || key == "created" || key == "updated"
}

/// The full schema of one module: what the engines need to run a collection.
/// Presentation concerns (title, table columns, filter bar) stay in the
/// application layer.
#[derive(Debug, Clone)]
pub struct ModuleSchema {
    /// Key of the immutable identity field (`citizen_id`, ...).
    pub id_field: &'static str,
    /// Key of the discriminator field, for modules with dynamic sub-fields.
    pub discriminator: Option<&'static str>,
    pub fields: Vec<FieldSchema>,
    pub dynamic: DynamicFieldSchema,
    pub rules: Vec<crate::form::Rule>,
}

impl ModuleSchema {
    pub fn field(&self, key: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.key == key)
    }

    /// Whether a sort on `key` compares by parsed timestamp.
    pub fn sorts_as_date(&self, key: &str) -> bool {
        match self.field(key) {
            Some(field) => field.kind.is_date(),
            None => is_date_key(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dynamic_schema_resolves_labels_with_fallbacks() {
        let schema = DynamicFieldSchema::new(vec![
            (
                1,
                vec![DynamicField::new("license_plate", "Plaque d'Immatriculation", FieldKind::Text)],
            ),
            (
                2,
                vec![DynamicField::new("material", "Matériau", FieldKind::Text)],
            ),
        ]);
        assert_eq!(
            schema.label_for(1, "license_plate"),
            Some("Plaque d'Immatriculation")
        );
        assert_eq!(schema.label_for(1, "material"), None);
        assert_eq!(schema.label_anywhere("material"), Some("Matériau"));
        assert!(schema.fields_for(99).is_empty());
    }

    #[test]
    fn date_detection_prefers_schema_over_key_convention() {
        let schema = ModuleSchema {
            id_field: "id",
            discriminator: None,
            fields: vec![
                FieldSchema::date("attached_date", "Attachement"),
                FieldSchema::text("update_notes", "Notes"),
            ],
            dynamic: DynamicFieldSchema::empty(),
            rules: vec![],
        };
        assert!(schema.sorts_as_date("attached_date"));
        assert!(schema.sorts_as_date("created"));
        assert!(!schema.sorts_as_date("update_notes"));
        assert!(!schema.sorts_as_date("salary_min"));
    }
}
