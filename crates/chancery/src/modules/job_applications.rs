//! Applications received against published job offers.

use super::{FilterSpec, ModuleConfig};
use chancery_schema::{
    DynamicFieldSchema, FieldSchema, ModuleSchema, Record, ReferenceList, Rule, SortDirection,
    Value,
};
use std::sync::Arc;

fn application_statuses() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "application_statuses",
        &[(1, "Reçu"), (2, "En cours"), (3, "Accepté"), (4, "Rejeté")],
    ))
}

fn education_levels() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "education_levels",
        &[(1, "Licence"), (2, "Master"), (3, "Doctorat")],
    ))
}

fn work_mode_preferences() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "work_mode_preferences",
        &[(1, "Présentiel"), (2, "Télétravail"), (3, "Hybride")],
    ))
}

fn seeds() -> Vec<Record> {
    vec![
        Record::new()
            .with("application_id", 101)
            .with("job_offer_id", 1)
            .with("citizen_id", Value::Null)
            .with("full_name", "Amadou Boubacar")
            .with("email", "amadou@example.com")
            .with("phone", "+33 6 12 34 56 78")
            .with("address", "12 Rue de Paris, 75001 Paris")
            .with("resume_file", Value::Null)
            .with("portfolio_url", Value::Null)
            .with("education_level_id", 2)
            .with("experience_years", 4)
            .with("work_mode_preference_id", 3)
            .with("languages", "Français (C1); Anglais (B2)")
            .with("application_date", "2025-08-09T10:30:00Z")
            .with("status_id", 2)
            .with("interview_date", Value::Null)
            .with("interview_notes", "")
            .with("recruiter_notes", "")
            .with("created", "2025-08-09T10:30:00Z"),
        Record::new()
            .with("application_id", 102)
            .with("job_offer_id", 2)
            .with("citizen_id", Value::Null)
            .with("full_name", "Seynabou Diallo")
            .with("email", "seynabou@example.com")
            .with("phone", "+33 7 22 33 44 55")
            .with("address", "Lyon, France")
            .with("resume_file", Value::Null)
            .with("portfolio_url", "https://portfolio.example.com/seynabou")
            .with("education_level_id", 1)
            .with("experience_years", 2)
            .with("work_mode_preference_id", 2)
            .with("languages", "Français (B2); Anglais (B2)")
            .with("application_date", "2025-08-10T08:15:00Z")
            .with("status_id", 1)
            .with("interview_date", Value::Null)
            .with("interview_notes", "")
            .with("recruiter_notes", "")
            .with("created", "2025-08-10T08:15:00Z"),
    ]
}

pub(super) fn config() -> ModuleConfig {
    let statuses = application_statuses();
    ModuleConfig {
        key: "job_applications",
        group: "Citoyens",
        title: "Candidatures",
        description: "Candidatures reçues sur les offres",
        schema: ModuleSchema {
            id_field: "application_id",
            discriminator: None,
            fields: vec![
                FieldSchema::number("job_offer_id", "Offre d'emploi").required(),
                FieldSchema::number("citizen_id", "Citoyen"),
                FieldSchema::text("full_name", "Nom complet").required(),
                FieldSchema::text("email", "Email").required(),
                FieldSchema::text("phone", "Téléphone"),
                FieldSchema::text("address", "Adresse"),
                FieldSchema::file("resume_file", "CV"),
                FieldSchema::text("portfolio_url", "Portfolio"),
                FieldSchema::select("education_level_id", "Niveau d'études", education_levels()),
                FieldSchema::number("experience_years", "Années d'expérience"),
                FieldSchema::select(
                    "work_mode_preference_id",
                    "Mode de travail souhaité",
                    work_mode_preferences(),
                ),
                FieldSchema::text("languages", "Langues"),
                FieldSchema::datetime("application_date", "Date de candidature"),
                FieldSchema::select("status_id", "Statut", statuses.clone()).default_value(1),
                FieldSchema::date("interview_date", "Date d'entretien"),
                FieldSchema::textarea("interview_notes", "Notes d'entretien"),
                FieldSchema::textarea("recruiter_notes", "Notes recruteur"),
            ],
            dynamic: DynamicFieldSchema::empty(),
            rules: vec![
                Rule::Required {
                    field: "job_offer_id",
                    message: "Offre d'emploi requise",
                },
                Rule::Required {
                    field: "full_name",
                    message: "Nom complet requis",
                },
                Rule::Required {
                    field: "email",
                    message: "Email requis",
                },
                Rule::DateOrder {
                    start: "application_date",
                    end: "interview_date",
                    message: "L'entretien ne peut précéder la candidature",
                },
            ],
        },
        filters: vec![
            FilterSpec::text("full_name", "Nom complet"),
            FilterSpec::text("email", "Email"),
            FilterSpec::reference("status_id", "Statut", statuses),
            FilterSpec::number_range("experience_years", "Expérience"),
        ],
        columns: vec![
            "full_name",
            "email",
            "job_offer_id",
            "education_level_id",
            "application_date",
            "status_id",
        ],
        default_sort: ("application_date", SortDirection::Descending),
        seeds: seeds(),
    }
}
