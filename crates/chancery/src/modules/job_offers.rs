//! Job offers published for the diaspora.

use super::{FilterSpec, ModuleConfig};
use chancery_schema::{
    DynamicFieldSchema, FieldSchema, ModuleSchema, Record, ReferenceList, Rule, SortDirection,
};
use std::sync::Arc;

fn job_types() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "job_types",
        &[(1, "CDI"), (2, "CDD"), (3, "Stage"), (4, "Freelance")],
    ))
}

fn work_modes() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "work_modes",
        &[(1, "Présentiel"), (2, "Télétravail"), (3, "Hybride")],
    ))
}

fn education_levels() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "education_levels",
        &[(1, "Licence"), (2, "Master"), (3, "Doctorat")],
    ))
}

fn experience_levels() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "experience_levels",
        &[(1, "Junior"), (2, "Confirmé"), (3, "Senior")],
    ))
}

fn job_statuses() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "job_statuses",
        &[(1, "Ouverte"), (2, "Fermée"), (3, "Annulée")],
    ))
}

fn currencies() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::with_codes(
        "currencies",
        &[
            (1, "EUR", "Euro"),
            (2, "USD", "US Dollar"),
            (3, "XOF", "Franc CFA"),
        ],
    ))
}

fn seeds() -> Vec<Record> {
    vec![
        Record::new()
            .with("job_offer_id", 1)
            .with("org_id", "AMB-NIGER-PARIS")
            .with("company_name", "Ambassade du Niger")
            .with("job_title", "Chargé de Communication")
            .with("job_description", "Gestion des communications internes et externes.")
            .with("job_type_id", 2)
            .with("work_mode_id", 3)
            .with("education_level_id", 2)
            .with("experience_level_id", 2)
            .with("language_requirements", "Français (C1), Anglais (B2)")
            .with("location", "Paris")
            .with("salary_min", 2800)
            .with("salary_max", 3500)
            .with("currency_id", 1)
            .with("benefits", "Transport, repas")
            .with("start_date", "2025-10-01")
            .with("end_date", "2025-09-30")
            .with("status_id", 1)
            .with("created", "2025-08-01T09:00:00Z"),
        Record::new()
            .with("job_offer_id", 2)
            .with("org_id", "AMB-NIGER-PARIS")
            .with("company_name", "TechPro")
            .with("job_title", "Développeur Full-Stack")
            .with("job_description", "Développement d'applications web.")
            .with("job_type_id", 1)
            .with("work_mode_id", 2)
            .with("education_level_id", 1)
            .with("experience_level_id", 1)
            .with("language_requirements", "Français (B2), Anglais (B2)")
            .with("location", "Télétravail")
            .with("salary_min", 3200)
            .with("salary_max", 4200)
            .with("currency_id", 1)
            .with("benefits", "Matériel fourni")
            .with("start_date", "2025-09-15")
            .with("end_date", "2025-12-31")
            .with("status_id", 1)
            .with("created", "2025-08-03T10:00:00Z"),
    ]
}

pub(super) fn config() -> ModuleConfig {
    let types = job_types();
    let statuses = job_statuses();
    ModuleConfig {
        key: "job_offers",
        group: "Citoyens",
        title: "Offres d'emploi",
        description: "Offres d'emploi publiées",
        schema: ModuleSchema {
            id_field: "job_offer_id",
            discriminator: None,
            fields: vec![
                FieldSchema::text("org_id", "Organisation").default_value("AMB-NIGER-PARIS"),
                FieldSchema::text("company_name", "Entreprise"),
                FieldSchema::text("job_title", "Intitulé").required(),
                FieldSchema::textarea("job_description", "Description").required(),
                FieldSchema::select("job_type_id", "Type de contrat", types.clone()),
                FieldSchema::select("work_mode_id", "Mode de travail", work_modes()),
                FieldSchema::select("education_level_id", "Niveau d'études", education_levels()),
                FieldSchema::select("experience_level_id", "Expérience", experience_levels()),
                FieldSchema::text("language_requirements", "Langues"),
                FieldSchema::text("location", "Lieu"),
                FieldSchema::number("salary_min", "Salaire min"),
                FieldSchema::number("salary_max", "Salaire max"),
                FieldSchema::select("currency_id", "Devise", currencies()),
                FieldSchema::text("benefits", "Avantages"),
                FieldSchema::date("start_date", "Date de début"),
                FieldSchema::date("end_date", "Date limite"),
                FieldSchema::select("status_id", "Statut", statuses.clone()).default_value(1),
            ],
            dynamic: DynamicFieldSchema::empty(),
            rules: vec![
                Rule::Required {
                    field: "job_title",
                    message: "Intitulé requis",
                },
                Rule::Required {
                    field: "job_description",
                    message: "Description requise",
                },
                Rule::NumericOrder {
                    min: "salary_min",
                    max: "salary_max",
                    message: "Salaire max doit être supérieur au salaire min",
                },
                Rule::DateOrder {
                    start: "start_date",
                    end: "end_date",
                    message: "Date limite antérieure à la date de début",
                },
            ],
        },
        filters: vec![
            FilterSpec::text("job_title", "Intitulé"),
            FilterSpec::text("company_name", "Entreprise"),
            FilterSpec::reference("job_type_id", "Type", types),
            FilterSpec::reference("status_id", "Statut", statuses),
            FilterSpec::number_range("salary_min", "Salaire"),
        ],
        columns: vec![
            "job_title",
            "company_name",
            "job_type_id",
            "location",
            "salary_min",
            "salary_max",
            "status_id",
        ],
        default_sort: ("created", SortDirection::Descending),
        seeds: seeds(),
    }
}
