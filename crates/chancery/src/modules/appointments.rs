//! Consular appointments (rendez-vous).

use super::{FilterSpec, ModuleConfig};
use chancery_schema::{
    DynamicFieldSchema, FieldSchema, ModuleSchema, Record, ReferenceList, Rule, SortDirection,
};
use std::sync::Arc;

const DEFAULT_ORG: &str = "AMBASSADE_DEFAULT";

fn appointment_types() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::with_codes(
        "appointment_types",
        &[
            (301, "DEMANDE", "Demande"),
            (302, "SUIVI", "Suivi"),
            (303, "DEPOT", "Dépôt de dossier"),
        ],
    ))
}

fn services() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::with_codes(
        "appointment_services",
        &[
            (401, "CONSULAT", "Consulat"),
            (402, "AFF_SOC", "Affaires sociales"),
            (403, "ETAT_CIVIL", "État civil"),
        ],
    ))
}

fn document_types() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::with_codes(
        "document_types",
        &[
            (501, "VISA", "Visa"),
            (502, "PASSEPORT", "Passeport"),
            (503, "ATTEST", "Attestation"),
        ],
    ))
}

fn citizenships() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::with_codes(
        "citizenships",
        &[(601, "NER", "Nigérienne"), (602, "ETR", "Étrangère")],
    ))
}

fn citizen_categories() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::with_codes(
        "citizen_categories",
        &[
            (701, "ETUD", "Étudiant"),
            (702, "PRO", "Professionnel"),
            (703, "AUTRE", "Autre"),
        ],
    ))
}

fn seeds() -> Vec<Record> {
    vec![
        Record::new()
            .with("appointment_id", 1)
            .with("org_id", DEFAULT_ORG)
            .with("first_name", "Amina")
            .with("last_name", "Diallo")
            .with("email", "amina@example.com")
            .with("phone", "+33 6 11 22 33 44")
            .with("appointment_date", "2025-10-05")
            .with("appointment_time", "10:30")
            .with("notes", "Renouvellement de passeport")
            .with("appointment_type_id", 301)
            .with("service_id", 401)
            .with("document_type_id", 502)
            .with("citizenship_id", 601)
            .with("citizen_type_id", 702)
            .with("created", "2025-08-07T09:15:00Z")
            .with("createdby", 1),
        Record::new()
            .with("appointment_id", 2)
            .with("org_id", DEFAULT_ORG)
            .with("first_name", "Moussa")
            .with("last_name", "Harouna")
            .with("email", "moussa@example.com")
            .with("phone", "+33 7 22 33 44 55")
            .with("appointment_date", "2025-10-06")
            .with("appointment_time", "14:00")
            .with("notes", "Demande de visa")
            .with("appointment_type_id", 301)
            .with("service_id", 401)
            .with("document_type_id", 501)
            .with("citizenship_id", 601)
            .with("citizen_type_id", 703)
            .with("created", "2025-08-07T09:20:00Z")
            .with("createdby", 1),
    ]
}

pub(super) fn config() -> ModuleConfig {
    let types = appointment_types();
    let service_list = services();
    ModuleConfig {
        key: "appointments",
        group: "Consulat",
        title: "Rendez-vous",
        description: "Rendez-vous consulaires",
        schema: ModuleSchema {
            id_field: "appointment_id",
            discriminator: None,
            fields: vec![
                FieldSchema::text("org_id", "Organisation").default_value(DEFAULT_ORG),
                FieldSchema::text("last_name", "Nom").required(),
                FieldSchema::text("first_name", "Prénom").required(),
                FieldSchema::text("email", "Email"),
                FieldSchema::text("phone", "Téléphone"),
                FieldSchema::date("appointment_date", "Date").required(),
                FieldSchema::text("appointment_time", "Heure").required(),
                FieldSchema::select("appointment_type_id", "Type", types.clone()),
                FieldSchema::select("service_id", "Service", service_list.clone()),
                FieldSchema::select("document_type_id", "Document", document_types()),
                FieldSchema::select("citizenship_id", "Nationalité", citizenships()),
                FieldSchema::select("citizen_type_id", "Catégorie", citizen_categories()),
                FieldSchema::textarea("notes", "Notes"),
            ],
            dynamic: DynamicFieldSchema::empty(),
            rules: vec![
                Rule::Required {
                    field: "first_name",
                    message: "Prénom requis",
                },
                Rule::Required {
                    field: "last_name",
                    message: "Nom requis",
                },
                Rule::Required {
                    field: "appointment_date",
                    message: "Date requise",
                },
                Rule::Required {
                    field: "appointment_time",
                    message: "Heure requise",
                },
                Rule::Required {
                    field: "appointment_type_id",
                    message: "Type requis",
                },
            ],
        },
        filters: vec![
            FilterSpec::text("last_name", "Nom"),
            FilterSpec::reference("appointment_type_id", "Type", types),
            FilterSpec::reference("service_id", "Service", service_list),
            FilterSpec::date_range("appointment_date", "Période"),
        ],
        columns: vec![
            "last_name",
            "first_name",
            "appointment_date",
            "appointment_time",
            "appointment_type_id",
            "service_id",
        ],
        default_sort: ("appointment_date", SortDirection::Ascending),
        seeds: seeds(),
    }
}
