//! Chart of accounts.

use super::{FilterSpec, ModuleConfig};
use chancery_schema::{
    DynamicFieldSchema, FieldSchema, ModuleSchema, Record, ReferenceList, Rule, SortDirection,
};
use std::sync::Arc;

fn account_types() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "account_types",
        &[
            (200, "Actif"),
            (201, "Passif"),
            (202, "Charge"),
            (203, "Produit"),
        ],
    ))
}

fn currencies() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "account_currencies",
        &[(300, "XOF"), (301, "EUR"), (302, "USD")],
    ))
}

fn account(
    id: i64,
    code: &str,
    name: &str,
    type_id: i64,
    description: &str,
    created: &str,
) -> Record {
    Record::new()
        .with("account_id", id)
        .with("org_id", "AMB_NI_FR")
        .with("account_code", code)
        .with("account_name", name)
        .with("account_type_id", type_id)
        .with("currency_id", 301)
        .with("description", description)
        .with("created", created)
        .with("createdby", 1)
}

fn seeds() -> Vec<Record> {
    vec![
        account(
            9001,
            "512",
            "Banque Courante",
            200,
            "Compte bancaire courant",
            "2025-08-01T09:00:00Z",
        ),
        account(
            9002,
            "6061",
            "Budget Fonctionnement",
            202,
            "Compte de charges de fonctionnement",
            "2025-08-01T09:00:00Z",
        ),
        account(
            9003,
            "512B",
            "Compte Bourse",
            200,
            "Compte dédié aux bourses",
            "2025-08-03T09:00:00Z",
        ),
    ]
}

pub(super) fn config() -> ModuleConfig {
    let types = account_types();
    let currency_list = currencies();
    ModuleConfig {
        key: "accounts",
        group: "Finance",
        title: "Plan comptable",
        description: "Comptes de l'organisation",
        schema: ModuleSchema {
            id_field: "account_id",
            discriminator: None,
            fields: vec![
                FieldSchema::text("org_id", "Organisation").default_value("AMB_NI_FR"),
                FieldSchema::text("account_code", "Code").required(),
                FieldSchema::text("account_name", "Nom").required(),
                FieldSchema::select("account_type_id", "Type", types.clone()),
                FieldSchema::select("currency_id", "Devise", currency_list.clone()),
                FieldSchema::textarea("description", "Description"),
            ],
            dynamic: DynamicFieldSchema::empty(),
            rules: vec![
                Rule::Required {
                    field: "account_code",
                    message: "Code requis",
                },
                Rule::Required {
                    field: "account_name",
                    message: "Nom requis",
                },
                Rule::Required {
                    field: "account_type_id",
                    message: "Type requis",
                },
                Rule::Required {
                    field: "currency_id",
                    message: "Devise requise",
                },
            ],
        },
        filters: vec![
            FilterSpec::text("account_code", "Code"),
            FilterSpec::text("account_name", "Nom"),
            FilterSpec::reference("account_type_id", "Type", types),
            FilterSpec::reference("currency_id", "Devise", currency_list),
        ],
        columns: vec![
            "account_code",
            "account_name",
            "account_type_id",
            "currency_id",
            "description",
        ],
        default_sort: ("account_code", SortDirection::Ascending),
        seeds: seeds(),
    }
}
