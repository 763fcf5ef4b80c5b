//! Scholarship requests (bourses).

use super::{requests, ModuleConfig};
use chancery_schema::{DynamicField, DynamicFieldSchema, FieldKind, Record, ReferenceList};
use std::sync::Arc;

const DEFAULT_ORG: &str = "AMB_NI_FR";

fn request_types() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::with_codes(
        "scholarship_request_types",
        &[
            (901, "ACTIVATION", "Activation"),
            (902, "RENOUVELLEMENT", "Renouvellement"),
            (903, "RECLAMATION", "Réclamation"),
        ],
    ))
}

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
        [901, 902, 903]
            .into_iter()
            .map(|type_id| (type_id, dossier_fields()))
            .collect(),
    )
}

fn seeds() -> Vec<Record> {
    vec![
        requests::seed(
            40001,
            1001,
            DEFAULT_ORG,
            901,
            "Activation bourse",
            "Activation initiale",
            501,
            "2025-08-07T10:00:00Z",
            0.0,
        )
        .with_extra("passport_number", "NIA123456")
        .with_extra("applicant_address", "Paris 15e")
        .with_extra("delivery_office", "Ambassade - Paris")
        .with_extra("card_validity_years", 1)
        .with_extra("urgency", false),
        requests::seed(
            40002,
            1002,
            DEFAULT_ORG,
            902,
            "Renouvellement bourse",
            "Renouvellement annuel",
            502,
            "2025-08-06T10:00:00Z",
            0.0,
        )
        .with_extra("passport_number", "NIB987654")
        .with_extra("applicant_address", "Lyon 3e")
        .with_extra("delivery_office", "Consulat - Lyon")
        .with_extra("card_validity_years", 1)
        .with_extra("urgency", true),
    ]
}

pub(super) fn config() -> ModuleConfig {
    requests::config(
        "scholarships",
        "Académiques",
        "Bourse",
        "Demandes liées aux bourses d'études",
        DEFAULT_ORG,
        request_types(),
        dynamic_fields(),
        seeds(),
    )
}
