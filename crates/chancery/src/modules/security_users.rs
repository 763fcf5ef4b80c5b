//! Access accounts (rôles d'accès utilisateur).

use super::{FilterSpec, ModuleConfig};
use chancery_schema::{
    DynamicFieldSchema, FieldSchema, ModuleSchema, Record, ReferenceList, Rule, SortDirection,
};
use std::sync::Arc;

fn user_types() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "user_types",
        &[
            (100, "Admin"),
            (101, "Utilisateur local"),
            (102, "Utilisateur extérieur"),
            (103, "Chef"),
        ],
    ))
}

fn seeds() -> Vec<Record> {
    vec![
        Record::new()
            .with("user_id", 1)
            .with("username", "admin")
            .with("password_hash", "***")
            .with("email", "admin@example.com")
            .with("full_name", "Administrateur Système")
            .with("org_id", "AMB_NI_FR")
            .with("user_type_id", 100)
            .with("is_active", true)
            .with("created", "2025-08-01T09:00:00Z")
            .with("createdby", 1),
        Record::new()
            .with("user_id", 2)
            .with("username", "oplocal")
            .with("password_hash", "***")
            .with("email", "operateur@example.com")
            .with("full_name", "Opérateur Local")
            .with("org_id", "AMB_NI_FR")
            .with("user_type_id", 101)
            .with("is_active", true)
            .with("created", "2025-08-02T10:00:00Z")
            .with("createdby", 1),
    ]
}

pub(super) fn config() -> ModuleConfig {
    let types = user_types();
    ModuleConfig {
        key: "security_users",
        group: "Sécurité",
        title: "Rôle d'accès utilisateur",
        description: "Comptes et rôles d'accès",
        schema: ModuleSchema {
            id_field: "user_id",
            discriminator: None,
            fields: vec![
                FieldSchema::text("org_id", "Organisation").default_value("AMB_NI_FR"),
                FieldSchema::text("username", "Nom d'utilisateur").required(),
                FieldSchema::text("password_hash", "Mot de passe"),
                FieldSchema::text("email", "Email"),
                FieldSchema::text("full_name", "Nom complet"),
                FieldSchema::select("user_type_id", "Type utilisateur", types.clone()),
                FieldSchema::boolean("is_active", "Actif").default_value(true),
            ],
            dynamic: DynamicFieldSchema::empty(),
            rules: vec![
                Rule::Required {
                    field: "username",
                    message: "Nom d'utilisateur requis",
                },
                // Existing accounts keep their hash; only new ones must set it.
                Rule::RequiredOnCreate {
                    field: "password_hash",
                    message: "Mot de passe requis",
                },
                Rule::Required {
                    field: "user_type_id",
                    message: "Type utilisateur requis",
                },
            ],
        },
        filters: vec![
            FilterSpec::text("username", "Utilisateur"),
            FilterSpec::text("full_name", "Nom"),
            FilterSpec::reference("user_type_id", "Type", types),
        ],
        columns: vec!["username", "full_name", "email", "user_type_id", "is_active"],
        default_sort: ("username", SortDirection::Ascending),
        seeds: seeds(),
    }
}
