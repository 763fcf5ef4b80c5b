//! Coherence checks over every registered module: schemas, seeds, filters,
//! and columns must agree, no matter which domain the data came from.

use chancery::modules::{self, FilterKind};
use chancery_schema::Value;
use std::collections::HashSet;

const AUDIT_FIELDS: [&str; 4] = ["created", "updated", "createdby", "updatedby"];

#[test]
fn module_keys_are_unique() {
    let registry = modules::registry();
    let mut seen = HashSet::new();
    for config in &registry {
        assert!(seen.insert(config.key), "duplicate module key {}", config.key);
    }
    assert!(registry.len() >= 15);
}

#[test]
fn seed_ids_are_present_and_unique() {
    for config in modules::registry() {
        let mut seen = HashSet::new();
        for seed in &config.seeds {
            let id = seed
                .id(config.schema.id_field)
                .unwrap_or_else(|| panic!("{}: seed without id", config.key));
            assert!(
                seen.insert(id),
                "{}: duplicate seed id {}",
                config.key,
                id
            );
        }
    }
}

#[test]
fn seed_fields_are_declared_in_the_schema() {
    for config in modules::registry() {
        let declared: HashSet<&str> = config
            .schema
            .fields
            .iter()
            .map(|field| field.key)
            .chain([config.schema.id_field])
            .chain(AUDIT_FIELDS)
            .collect();
        for seed in &config.seeds {
            for key in seed.keys() {
                assert!(
                    declared.contains(key.as_str()),
                    "{}: seed field {} not in schema",
                    config.key,
                    key
                );
            }
        }
    }
}

#[test]
fn seed_extras_match_their_discriminator_value() {
    for config in modules::registry() {
        let Some(discriminator) = config.schema.discriminator else {
            for seed in &config.seeds {
                assert!(
                    seed.extra().is_empty(),
                    "{}: extra_data without a discriminator",
                    config.key
                );
            }
            continue;
        };
        for seed in &config.seeds {
            let value = seed
                .get(discriminator)
                .and_then(Value::as_i64)
                .unwrap_or_else(|| panic!("{}: seed without {}", config.key, discriminator));
            let declared: HashSet<&str> = config
                .schema
                .dynamic
                .fields_for(value)
                .iter()
                .map(|field| field.key)
                .collect();
            for key in seed.extra().keys() {
                assert!(
                    declared.contains(key.as_str()),
                    "{}: extra key {} not declared for discriminator {}",
                    config.key,
                    key,
                    value
                );
            }
        }
    }
}

#[test]
fn columns_and_filters_reference_schema_fields() {
    for config in modules::registry() {
        for column in &config.columns {
            assert!(
                config.schema.field(column).is_some(),
                "{}: column {} not in schema",
                config.key,
                column
            );
        }
        for filter in &config.filters {
            assert!(
                config.schema.field(filter.field).is_some(),
                "{}: filter {} not in schema",
                config.key,
                filter.field
            );
        }
    }
}

#[test]
fn discriminator_modules_expose_a_reference_filter() {
    for config in modules::registry() {
        let Some(discriminator) = config.schema.discriminator else {
            continue;
        };
        let spec = config
            .filters
            .iter()
            .find(|filter| filter.field == discriminator)
            .unwrap_or_else(|| panic!("{}: no filter on {}", config.key, discriminator));
        assert!(
            matches!(spec.kind, FilterKind::Reference(_)),
            "{}: discriminator filter is not a reference filter",
            config.key
        );
    }
}

#[test]
fn select_fields_carry_their_reference_lists() {
    for config in modules::registry() {
        for field in &config.schema.fields {
            if field.kind == chancery_schema::FieldKind::Select {
                let list = field
                    .reference
                    .as_ref()
                    .unwrap_or_else(|| panic!("{}: select {} without list", config.key, field.key));
                assert!(!list.is_empty(), "{}: empty list on {}", config.key, field.key);
            }
        }
    }
}

#[test]
fn default_sort_fields_exist() {
    for config in modules::registry() {
        let (field, _) = config.default_sort;
        let known = config.schema.field(field).is_some() || AUDIT_FIELDS.contains(&field);
        assert!(known, "{}: default sort on unknown field {}", config.key, field);
    }
}
