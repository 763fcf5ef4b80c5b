//! Form state: initialization, dynamic field activation, validation,
//! coercion, and submit normalization.
//!
//! The form holds raw input strings exactly as typed. Coercion to [`Value`]
//! happens once, on submit. Values belonging to inactive discriminator
//! values stay in the draft (switching back restores them) but are pruned
//! from the submitted record.

use crate::fields::{DynamicField, FieldKind, FieldSchema, ModuleSchema};
use crate::record::{Record, Value};
use crate::table::parse_timestamp;
use chancery_ids::{IdAllocator, RecordId};
use chrono::{SecondsFormat, Utc};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Declarative validation rule, evaluated synchronously on submit.
/// Messages come from the module configuration so the original wording is
/// preserved per module.
#[derive(Debug, Clone)]
pub enum Rule {
    Required {
        field: &'static str,
        message: &'static str,
    },
    /// Required only when the form is in create mode (e.g. passwords).
    RequiredOnCreate {
        field: &'static str,
        message: &'static str,
    },
    /// `end` must not precede `start`; both optional, checked when present.
    DateOrder {
        start: &'static str,
        end: &'static str,
        message: &'static str,
    },
    /// `max` must not be below `min`; both optional, checked when present.
    NumericOrder {
        min: &'static str,
        max: &'static str,
        message: &'static str,
    },
    /// At least one of `fields` must be a non-zero number. The error
    /// attaches to `attach` (a synthetic key is fine).
    AnyNonZero {
        fields: &'static [&'static str],
        attach: &'static str,
        message: &'static str,
    },
}

/// Editable draft of one record.
#[derive(Debug, Clone)]
pub struct FormState {
    mode: FormMode,
    id: Option<RecordId>,
    values: BTreeMap<String, String>,
    extra: BTreeMap<String, String>,
    errors: BTreeMap<String, String>,
    /// `created`/`createdby` of the record being edited, preserved on
    /// submit.
    created: Option<String>,
    created_by: Option<i64>,
}

impl FormState {
    /// Build a draft from a record (edit) or from schema defaults (create).
    pub fn new(schema: &ModuleSchema, initial: Option<&Record>) -> Self {
        let mode = if initial.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        };

        let mut values = BTreeMap::new();
        for field in &schema.fields {
            let input = match initial.and_then(|record| record.get(field.key)) {
                Some(value) => value_to_input(value),
                None => default_input(field),
            };
            values.insert(field.key.to_string(), input);
        }

        let mut extra = BTreeMap::new();
        if let Some(record) = initial {
            for (key, value) in record.extra() {
                extra.insert(key.clone(), value_to_input(value));
            }
        }

        Self {
            mode,
            id: initial.and_then(|record| record.id(schema.id_field)),
            values,
            extra,
            errors: BTreeMap::new(),
            created: initial
                .and_then(|record| record.get("created"))
                .and_then(Value::as_str)
                .map(str::to_string),
            created_by: initial
                .and_then(|record| record.get("createdby"))
                .and_then(Value::as_i64),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn id(&self) -> Option<RecordId> {
        self.id
    }

    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn set_value(&mut self, key: &str, input: impl Into<String>) {
        self.values.insert(key.to_string(), input.into());
    }

    pub fn extra_value(&self, key: &str) -> &str {
        self.extra.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn set_extra(&mut self, key: &str, input: impl Into<String>) {
        self.extra.insert(key.to_string(), input.into());
    }

    pub fn error(&self, key: &str) -> Option<&str> {
        self.errors.get(key).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Current discriminator id, parsed from the draft.
    pub fn discriminator_value(&self, schema: &ModuleSchema) -> Option<i64> {
        let key = schema.discriminator?;
        self.value(key).trim().parse::<i64>().ok()
    }

    /// Dynamic fields active for the draft's current discriminator value.
    /// Re-derived on every call, so changing the discriminator re-shapes the
    /// form immediately.
    pub fn active_dynamic_fields<'a>(&self, schema: &'a ModuleSchema) -> &'a [DynamicField] {
        match self.discriminator_value(schema) {
            Some(value) => schema.dynamic.fields_for(value),
            None => &[],
        }
    }

    /// Run every rule; violations attach one message per field. Returns
    /// whether the draft is submittable.
    pub fn validate(&mut self, schema: &ModuleSchema) -> bool {
        self.errors.clear();
        for rule in &schema.rules {
            match rule {
                Rule::Required { field, message } => {
                    if self.value(field).trim().is_empty() {
                        self.attach(field, message);
                    }
                }
                Rule::RequiredOnCreate { field, message } => {
                    if self.mode == FormMode::Create && self.value(field).trim().is_empty() {
                        self.attach(field, message);
                    }
                }
                Rule::DateOrder {
                    start,
                    end,
                    message,
                } => {
                    let lower = parse_timestamp(self.value(start));
                    let upper = parse_timestamp(self.value(end));
                    if let (Some(lower), Some(upper)) = (lower, upper) {
                        if upper < lower {
                            self.attach(end, message);
                        }
                    }
                }
                Rule::NumericOrder { min, max, message } => {
                    let lower = self.value(min).trim().parse::<f64>().ok();
                    let upper = self.value(max).trim().parse::<f64>().ok();
                    if let (Some(lower), Some(upper)) = (lower, upper) {
                        if lower > upper {
                            self.attach(max, message);
                        }
                    }
                }
                Rule::AnyNonZero {
                    fields,
                    attach,
                    message,
                } => {
                    let any = fields.iter().any(|field| {
                        self.value(field)
                            .trim()
                            .parse::<f64>()
                            .map(|number| number != 0.0)
                            .unwrap_or(false)
                    });
                    if !any {
                        self.attach(attach, message);
                    }
                }
            }
        }
        self.errors.is_empty()
    }

    fn attach(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    /// Validate, coerce, and normalize the draft into a record. `None`
    /// while violations remain. Merging into the collection is the
    /// caller's job.
    pub fn submit(
        &mut self,
        schema: &ModuleSchema,
        allocator: &mut IdAllocator,
        actor: i64,
    ) -> Option<Record> {
        if !self.validate(schema) {
            debug!(errors = self.errors.len(), "submit blocked by validation");
            return None;
        }

        let mut record = Record::new();
        for field in &schema.fields {
            record.set(field.key, coerce_fixed(field.kind, self.value(field.key)));
        }

        // Only keys declared for the current discriminator value survive;
        // values for other discriminator values stay in the draft only.
        for field in self.active_dynamic_fields(schema) {
            let input = self.extra_value(field.key);
            if !input.trim().is_empty() {
                record
                    .extra_mut()
                    .insert(field.key.to_string(), coerce_dynamic(field.kind, input));
            }
        }

        let id = match self.id {
            Some(id) => id,
            None => allocator.next(),
        };
        record.set_id(schema.id_field, id);
        self.id = Some(id);

        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        match self.mode {
            FormMode::Create => {
                record.set("created", self.created.clone().unwrap_or(now));
                record.set("createdby", actor);
                record.set("updated", Value::Null);
                record.set("updatedby", Value::Null);
            }
            FormMode::Edit => {
                match &self.created {
                    Some(created) => record.set("created", created.clone()),
                    None => record.set("created", Value::Null),
                }
                match self.created_by {
                    Some(author) => record.set("createdby", author),
                    None => record.set("createdby", Value::Null),
                }
                record.set("updated", now);
                record.set("updatedby", actor);
            }
        }

        Some(record)
    }
}

fn value_to_input(value: &Value) -> String {
    value.render()
}

fn default_input(field: &FieldSchema) -> String {
    if let Some(default) = &field.default {
        return value_to_input(default);
    }
    match field.kind {
        FieldKind::Boolean => "false".to_string(),
        _ => String::new(),
    }
}

/// Coercion for fixed fields, by declared kind.
fn coerce_fixed(kind: FieldKind, input: &str) -> Value {
    match kind {
        FieldKind::Boolean => Value::Bool(input.trim() == "true"),
        FieldKind::Number => coerce_number(input),
        FieldKind::Select => match input.trim().parse::<i64>() {
            Ok(id) => Value::Int(id),
            Err(_) if input.trim().is_empty() => Value::Null,
            Err(_) => Value::Text(input.trim().to_string()),
        },
        FieldKind::Date | FieldKind::DateTime | FieldKind::File => {
            if input.trim().is_empty() {
                Value::Null
            } else {
                Value::Text(input.trim().to_string())
            }
        }
        FieldKind::Text | FieldKind::TextArea => Value::Text(input.to_string()),
    }
}

/// Coercion for dynamic sub-fields: booleans from their "true"/"false"
/// select strings, numbers parsed (empty stays empty, never zero),
/// everything else passes through as text.
fn coerce_dynamic(kind: FieldKind, input: &str) -> Value {
    match kind {
        FieldKind::Boolean => Value::Bool(input.trim() == "true"),
        FieldKind::Number => coerce_number(input),
        _ => Value::Text(input.trim().to_string()),
    }
}

fn coerce_number(input: &str) -> Value {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return Value::Int(int);
    }
    match trimmed.parse::<f64>() {
        Ok(float) => Value::Float(float),
        Err(_) => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{DynamicFieldSchema, FieldSchema};
    use crate::reference::ReferenceList;
    use std::sync::Arc;

    fn schema() -> ModuleSchema {
        let types = Arc::new(ReferenceList::new(
            "citizen_types",
            &[(1, "Étudiant"), (2, "Professionnel")],
        ));
        ModuleSchema {
            id_field: "citizen_id",
            discriminator: Some("citizen_type_id"),
            fields: vec![
                FieldSchema::text("citizen_last_name", "Nom").required(),
                FieldSchema::select("citizen_type_id", "Type", types),
                FieldSchema::date("attached_date", "Date d'attachement"),
                FieldSchema::date("detached_date", "Date de détachement"),
                FieldSchema::boolean("active", "Actif"),
                FieldSchema::number("children", "Enfants"),
            ],
            dynamic: DynamicFieldSchema::new(vec![
                (
                    1,
                    vec![
                        DynamicField::new("institution", "Institution", FieldKind::Text),
                        DynamicField::new("scholarship", "Boursier", FieldKind::Boolean),
                    ],
                ),
                (
                    2,
                    vec![DynamicField::new("company", "Entreprise", FieldKind::Text)],
                ),
            ]),
            rules: vec![
                Rule::Required {
                    field: "citizen_last_name",
                    message: "Nom requis",
                },
                Rule::DateOrder {
                    start: "attached_date",
                    end: "detached_date",
                    message: "La date de détachement doit être postérieure à la date d'attachement",
                },
            ],
        }
    }

    #[test]
    fn create_mode_seeds_defaults() {
        let form = FormState::new(&schema(), None);
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.value("citizen_last_name"), "");
        assert_eq!(form.value("active"), "false");
        assert!(form.id().is_none());
    }

    #[test]
    fn required_violation_blocks_then_clears() {
        let schema = schema();
        let mut alloc = IdAllocator::new();
        let mut form = FormState::new(&schema, None);

        assert!(form.submit(&schema, &mut alloc, 1).is_none());
        assert_eq!(form.error("citizen_last_name"), Some("Nom requis"));

        form.set_value("citizen_last_name", "ADAMOU");
        let record = form.submit(&schema, &mut alloc, 1).expect("submit");
        assert!(!form.has_errors());
        assert_eq!(record.render("citizen_last_name"), "ADAMOU");
    }

    #[test]
    fn date_order_violation_attaches_to_end_field() {
        let schema = schema();
        let mut form = FormState::new(&schema, None);
        form.set_value("citizen_last_name", "X");
        form.set_value("attached_date", "2023-05-01");
        form.set_value("detached_date", "2023-01-01");
        assert!(!form.validate(&schema));
        assert!(form.error("detached_date").is_some());
        assert!(form.error("attached_date").is_none());
    }

    #[test]
    fn coercion_follows_field_kinds() {
        let schema = schema();
        let mut alloc = IdAllocator::new();
        let mut form = FormState::new(&schema, None);
        form.set_value("citizen_last_name", "X");
        form.set_value("citizen_type_id", "2");
        form.set_value("active", "true");
        form.set_value("children", "");
        let record = form.submit(&schema, &mut alloc, 1).unwrap();

        assert_eq!(record.get("citizen_type_id"), Some(&Value::Int(2)));
        assert_eq!(record.get("active"), Some(&Value::Bool(true)));
        assert_eq!(record.get("children"), Some(&Value::Null));
    }

    #[test]
    fn stale_extras_stay_in_draft_but_not_in_record() {
        let schema = schema();
        let mut alloc = IdAllocator::new();
        let mut form = FormState::new(&schema, None);
        form.set_value("citizen_last_name", "X");
        form.set_value("citizen_type_id", "1");
        form.set_extra("institution", "Université de Paris");
        form.set_extra("scholarship", "true");

        // Switch discriminator: étudiant fields become inactive.
        form.set_value("citizen_type_id", "2");
        form.set_extra("company", "TechPro");
        let record = form.submit(&schema, &mut alloc, 1).unwrap();

        assert_eq!(
            record.get_extra("company"),
            Some(&Value::Text("TechPro".into()))
        );
        assert!(record.get_extra("institution").is_none());
        assert!(record.get_extra("scholarship").is_none());

        // Switching back restores the retained draft values.
        form.set_value("citizen_type_id", "1");
        assert_eq!(form.extra_value("institution"), "Université de Paris");
    }

    #[test]
    fn edit_mode_preserves_identity_and_created() {
        let schema = schema();
        let mut alloc = IdAllocator::seeded([RecordId::new(7)]);
        let existing = Record::new()
            .with("citizen_id", 7)
            .with("citizen_last_name", "MAHAMANE")
            .with("created", "2022-09-15T12:00:00Z")
            .with("createdby", 3);

        let mut form = FormState::new(&schema, Some(&existing));
        assert_eq!(form.mode(), FormMode::Edit);
        form.set_value("citizen_last_name", "MAHAMANE AISSA");
        let record = form.submit(&schema, &mut alloc, 9).unwrap();

        assert_eq!(record.id("citizen_id"), Some(RecordId::new(7)));
        assert_eq!(record.render("created"), "2022-09-15T12:00:00Z");
        assert_eq!(record.get("createdby"), Some(&Value::Int(3)));
        assert_eq!(record.get("updatedby"), Some(&Value::Int(9)));
        assert!(!record.render("updated").is_empty());
    }

    #[test]
    fn create_then_reload_reproduces_visible_values() {
        let schema = schema();
        let mut alloc = IdAllocator::new();
        let mut form = FormState::new(&schema, None);
        form.set_value("citizen_last_name", "ISSOUFOU");
        form.set_value("citizen_type_id", "1");
        form.set_extra("institution", "ENA");
        let record = form.submit(&schema, &mut alloc, 1).unwrap();

        let reloaded = FormState::new(&schema, Some(&record));
        for field in &schema.fields {
            assert_eq!(
                reloaded.value(field.key),
                form.value(field.key),
                "field {} drifted across reload",
                field.key
            );
        }
        assert_eq!(reloaded.extra_value("institution"), "ENA");
    }
}
