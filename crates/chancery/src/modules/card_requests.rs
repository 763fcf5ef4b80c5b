//! Consular requests: cards, visas, état civil, prises en charge.

use super::{requests, ModuleConfig};
use chancery_schema::{DynamicField, DynamicFieldSchema, FieldKind, Record, ReferenceList};
use std::sync::Arc;

const DEFAULT_ORG: &str = "AMB_NI_FR";

fn request_types() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::with_codes(
        "card_request_types",
        &[
            (201, "CONSULAR_CARD", "Carte consulaire"),
            (202, "VISA", "Visa"),
            (203, "ETAT_CIVIL", "État civil"),
            (204, "PRISE_EN_CHARGE", "Prise en charge"),
        ],
    ))
}

// Every consular request type shares the same applicant dossier fields.
fn dossier_fields() -> Vec<DynamicField> {
    use FieldKind::{Boolean, Number, Text};
    vec![
        DynamicField::new("passport_number", "Numéro de passeport", Text),
        DynamicField::new("applicant_address", "Adresse du demandeur", Text),
        DynamicField::new("delivery_office", "Lieu de délivrance", Text),
        DynamicField::new("card_validity_years", "Validité (années)", Number),
        DynamicField::new("urgency", "Urgent", Boolean),
    ]
}

fn dynamic_fields() -> DynamicFieldSchema {
    DynamicFieldSchema::new(
        [201, 202, 203, 204]
            .into_iter()
            .map(|type_id| (type_id, dossier_fields()))
            .collect(),
    )
}

fn seeds() -> Vec<Record> {
    vec![
        requests::seed(
            30001,
            1001,
            DEFAULT_ORG,
            201,
            "Demande de carte consulaire",
            "Première demande de carte consulaire",
            501,
            "2025-08-07T09:00:00Z",
            15000.0,
        )
        .with_extra("passport_number", "NIA123456")
        .with_extra("applicant_address", "Paris 15e")
        .with_extra("delivery_office", "Ambassade - Paris")
        .with_extra("card_validity_years", 3)
        .with_extra("urgency", false),
        requests::seed(
            30002,
            1002,
            DEFAULT_ORG,
            201,
            "Renouvellement carte consulaire",
            "Renouvellement pour expiration",
            502,
            "2025-08-06T14:30:00Z",
            15000.0,
        )
        .with_extra("passport_number", "NIB987654")
        .with_extra("applicant_address", "Lyon 3e")
        .with_extra("delivery_office", "Consulat - Lyon")
        .with_extra("card_validity_years", 3)
        .with_extra("urgency", true),
    ]
}

pub(super) fn config() -> ModuleConfig {
    requests::config(
        "card_requests",
        "Consulat",
        "Demandes consulaires",
        "Cartes consulaires, visas et actes",
        DEFAULT_ORG,
        request_types(),
        dynamic_fields(),
        seeds(),
    )
}
