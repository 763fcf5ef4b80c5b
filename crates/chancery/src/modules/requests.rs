//! Shared shape of the request-ledger modules (consular cards, annual
//! registrations, scholarship requests): same fixed columns, same status
//! workflow, different request types and dynamic sub-fields.

use super::{FilterSpec, ModuleConfig};
use chancery_schema::{
    DynamicFieldSchema, FieldSchema, ModuleSchema, Record, ReferenceList, Rule, SortDirection,
    Value,
};
use std::sync::Arc;

pub(super) fn request_statuses() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::with_codes(
        "request_statuses",
        &[
            (501, "PENDING", "En attente"),
            (502, "IN_PROGRESS", "En cours"),
            (503, "APPROVED", "Approuvée"),
            (504, "REJECTED", "Rejetée"),
            (505, "CLOSED", "Clôturée"),
        ],
    ))
}

fn fields(
    types: Arc<ReferenceList>,
    statuses: Arc<ReferenceList>,
    default_org: &'static str,
) -> Vec<FieldSchema> {
    vec![
        FieldSchema::text("org_id", "Organisation").default_value(default_org),
        FieldSchema::number("citizen_id", "Citoyen").required(),
        FieldSchema::select("request_type_id", "Type de demande", types),
        FieldSchema::text("request_title", "Titre").required(),
        FieldSchema::textarea("request_description", "Description"),
        FieldSchema::select("request_status_id", "Statut", statuses).default_value(501),
        FieldSchema::date("request_date", "Date de demande"),
        FieldSchema::date("processed_date", "Date de traitement"),
        FieldSchema::number("from_user", "Demandeur"),
        FieldSchema::number("to_user", "Traitant"),
        FieldSchema::number("amount", "Montant"),
        FieldSchema::file("file_1", "Pièce 1"),
        FieldSchema::file("file_2", "Pièce 2"),
        FieldSchema::file("file_3", "Pièce 3"),
    ]
}

fn rules() -> Vec<Rule> {
    vec![
        Rule::Required {
            field: "citizen_id",
            message: "Citoyen requis",
        },
        Rule::Required {
            field: "request_type_id",
            message: "Type requis",
        },
        Rule::Required {
            field: "request_title",
            message: "Titre requis",
        },
        Rule::DateOrder {
            start: "request_date",
            end: "processed_date",
            message: "La date de traitement ne peut précéder la demande",
        },
    ]
}

#[allow(clippy::too_many_arguments)]
pub(super) fn seed(
    id: i64,
    citizen_id: i64,
    org_id: &str,
    type_id: i64,
    title: &str,
    description: &str,
    status_id: i64,
    request_date: &str,
    amount: f64,
) -> Record {
    Record::new()
        .with("request_id", id)
        .with("citizen_id", citizen_id)
        .with("org_id", org_id)
        .with("request_type_id", type_id)
        .with("request_title", title)
        .with("request_description", description)
        .with("request_status_id", status_id)
        .with("request_date", request_date)
        .with("processed_date", Value::Null)
        .with("from_user", 2)
        .with("to_user", 3)
        .with("amount", amount)
        .with("created", request_date)
        .with("createdby", 1)
}

/// Assemble a request-ledger module around its type list and dynamic
/// sub-fields.
pub(super) fn config(
    key: &'static str,
    group: &'static str,
    title: &'static str,
    description: &'static str,
    default_org: &'static str,
    types: Arc<ReferenceList>,
    dynamic: DynamicFieldSchema,
    seeds: Vec<Record>,
) -> ModuleConfig {
    let statuses = request_statuses();
    ModuleConfig {
        key,
        group,
        title,
        description,
        schema: ModuleSchema {
            id_field: "request_id",
            discriminator: Some("request_type_id"),
            fields: fields(types.clone(), statuses.clone(), default_org),
            dynamic,
            rules: rules(),
        },
        filters: vec![
            FilterSpec::text("request_title", "Titre"),
            FilterSpec::reference("request_type_id", "Type", types),
            FilterSpec::reference("request_status_id", "Statut", statuses),
            FilterSpec::date_range("request_date", "Période"),
        ],
        columns: vec![
            "request_title",
            "request_type_id",
            "request_status_id",
            "request_date",
            "amount",
        ],
        default_sort: ("request_date", SortDirection::Descending),
        seeds,
    }
}
