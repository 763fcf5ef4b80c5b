//! Registered citizens — the official list kept by the chancery.
//!
//! The citizen type drives the dynamic sub-fields: a student carries an
//! institution and a scholarship type, a professional a company and a work
//! permit, and so on.

use super::{FilterSpec, ModuleConfig};
use chancery_schema::{
    DynamicField, DynamicFieldSchema, FieldKind, FieldSchema, ModuleSchema, Record, ReferenceList,
    Rule, SortDirection, Value,
};
use std::sync::Arc;

fn citizen_types() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "citizen_types",
        &[
            (1, "Étudiant"),
            (2, "Professionnel"),
            (3, "Professionnel en mission"),
            (4, "Diplomate"),
            (5, "Citoyen de passage / touriste"),
            (6, "Réfugié / demandeur d'asile"),
        ],
    ))
}

fn sexes() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "sexes",
        &[(1, "Masculin"), (2, "Féminin")],
    ))
}

fn dynamic_fields() -> DynamicFieldSchema {
    use FieldKind::{Boolean, Date, Text};
    DynamicFieldSchema::new(vec![
        (
            1, // Étudiant
            vec![
                DynamicField::new("institution", "Institution", Text),
                DynamicField::new("field_of_study", "Filière", Text),
                DynamicField::new("student_id", "Code étudiant", Text),
                DynamicField::new("level", "Niveau", Text),
                DynamicField::new("school_year", "Année scolaire", Text),
                DynamicField::new("scholarship_type", "Type de bourse", Text),
            ],
        ),
        (
            2, // Professionnel
            vec![
                DynamicField::new("company", "Entreprise", Text),
                DynamicField::new("position", "Poste", Text),
                DynamicField::new("work_permit", "Permis de travail", Boolean),
                DynamicField::new("contract_type", "Type de contrat", Text),
                DynamicField::new("contract_duration", "Durée du contrat", Text),
                DynamicField::new("contract_start_date", "Date de début du contrat", Date),
            ],
        ),
        (
            3, // Professionnel en mission
            vec![
                DynamicField::new("mission_location", "Lieu de Mission", Text),
                DynamicField::new("accommodation", "Hébergement", Text),
                DynamicField::new("start_date", "Date de début", Date),
                DynamicField::new("end_date", "Date de fin", Date),
                DynamicField::new("mission_objective", "Objectif de mission", Text),
                DynamicField::new("company", "Entreprise", Text),
                DynamicField::new("position", "Poste", Text),
            ],
        ),
        (
            4, // Diplomate
            vec![
                DynamicField::new("diplomatic_rank", "Grade diplomatique", Text),
                DynamicField::new("arrival_date", "Date d'arrivée", Date),
                DynamicField::new("departure_date", "Date de départ", Date),
                DynamicField::new("diplomatic_card_number", "Numéro de carte diplomatique", Text),
                DynamicField::new(
                    "diplomatic_card_validity",
                    "Validité de la carte diplomatique",
                    Text,
                ),
            ],
        ),
        (
            5, // Citoyen de passage / touriste
            vec![
                DynamicField::new("reason_for_visit", "Motif de visite", Text),
                DynamicField::new("arrival_date", "Date d'arrivée", Date),
                DynamicField::new("departure_date", "Date de départ", Date),
                DynamicField::new("accommodation", "Hébergement", Text),
            ],
        ),
        (
            6, // Réfugié / demandeur d'asile
            vec![
                DynamicField::new("arrival_date", "Date d'arrivée", Date),
                DynamicField::new("case_number", "Numéro de dossier", Text),
                DynamicField::new("current_status", "Statut actuel", Text),
                DynamicField::new("shelter_address", "Adresse de l'asile", Text),
            ],
        ),
    ])
}

fn seeds() -> Vec<Record> {
    vec![
        Record::new()
            .with("citizen_id", 1)
            .with("org_id", "AMB-NIGER-PARIS")
            .with("citizen_last_name", "ADAMOU")
            .with("citizen_first_name", "Yahouza")
            .with("sex_id", 1)
            .with("birth_date", "1990-05-12")
            .with("birth_place", "Niamey")
            .with("nationality_id", 1001)
            .with("citizen_type_id", 1)
            .with("telephone", "+33 6 12 34 56 78")
            .with("email", "yahouza@example.com")
            .with("address", "10 Rue de Paris")
            .with("city_id", 2001)
            .with("country_id", 3001)
            .with("passport_number", "NIG123456")
            .with("cni_number", "CNI987654")
            .with("attached_date", "2023-01-02")
            .with("detached_date", Value::Null)
            .with("photo_url", Value::Null)
            .with("created", "2023-01-02T10:00:00Z")
            .with_extra("institution", "Université de Paris")
            .with_extra("field_of_study", "Informatique")
            .with_extra("student_id", "UP2023-001")
            .with_extra("level", "Licence 3")
            .with_extra("school_year", "2022-2023")
            .with_extra("scholarship_type", "Boursier National"),
        Record::new()
            .with("citizen_id", 2)
            .with("org_id", "AMB-NIGER-PARIS")
            .with("citizen_last_name", "MAHAMANE")
            .with("citizen_first_name", "Aisha")
            .with("sex_id", 2)
            .with("birth_date", "1988-03-22")
            .with("birth_place", "Zinder")
            .with("nationality_id", 1001)
            .with("citizen_type_id", 2)
            .with("telephone", "+33 6 98 76 54 32")
            .with("email", "aisha@example.com")
            .with("address", "5 Avenue Victor Hugo")
            .with("city_id", 2002)
            .with("country_id", 3001)
            .with("passport_number", "NIG654321")
            .with("cni_number", "CNI123456")
            .with("attached_date", "2022-09-15")
            .with("detached_date", Value::Null)
            .with("photo_url", Value::Null)
            .with("created", "2022-09-15T12:00:00Z")
            .with_extra("company", "TechPro")
            .with_extra("position", "Ingénieure")
            .with_extra("work_permit", true)
            .with_extra("contract_type", "CDI")
            .with_extra("contract_start_date", "2023-09-15")
            .with_extra("contract_duration", "Indéfini"),
        Record::new()
            .with("citizen_id", 3)
            .with("org_id", "AMB-NIGER-PARIS")
            .with("citizen_last_name", "ISSOUFOU")
            .with("citizen_first_name", "Salif")
            .with("sex_id", 1)
            .with("birth_date", "1979-11-02")
            .with("birth_place", "Maradi")
            .with("nationality_id", 1001)
            .with("citizen_type_id", 3)
            .with("telephone", "+33 7 11 22 33 44")
            .with("email", "salif@example.com")
            .with("address", "12 Rue Lafayette")
            .with("city_id", 2003)
            .with("country_id", 3001)
            .with("passport_number", "NIG777888")
            .with("cni_number", "CNI567890")
            .with("attached_date", "2021-05-20")
            .with("detached_date", Value::Null)
            .with("photo_url", Value::Null)
            .with("created", "2021-05-20T09:30:00Z")
            .with_extra("company", "Ministère de l'Économie")
            .with_extra("position", "Conseiller Technique")
            .with_extra("mission_objective", "Négociations commerciales")
            .with_extra("mission_location", "Paris")
            .with_extra("accommodation", "Hôtel")
            .with_extra("start_date", "2023-04-01")
            .with_extra("end_date", "2024-04-01"),
    ]
}

pub(super) fn config() -> ModuleConfig {
    let types = citizen_types();
    ModuleConfig {
        key: "citizens",
        group: "Citoyens",
        title: "Liste de citoyens",
        description: "Liste officielle des citoyens",
        schema: ModuleSchema {
            id_field: "citizen_id",
            discriminator: Some("citizen_type_id"),
            fields: vec![
                FieldSchema::text("org_id", "Organisation").default_value("AMB-NIGER-PARIS"),
                FieldSchema::text("citizen_last_name", "Nom").required(),
                FieldSchema::text("citizen_first_name", "Prénom").required(),
                FieldSchema::select("sex_id", "Sexe", sexes()),
                FieldSchema::date("birth_date", "Date de Naissance"),
                FieldSchema::text("birth_place", "Lieu de Naissance"),
                FieldSchema::number("nationality_id", "Nationalité"),
                FieldSchema::select("citizen_type_id", "Type", types.clone()),
                FieldSchema::text("telephone", "Téléphone"),
                FieldSchema::text("email", "Email"),
                FieldSchema::text("address", "Adresse"),
                FieldSchema::number("city_id", "Ville"),
                FieldSchema::number("country_id", "Pays"),
                FieldSchema::text("passport_number", "Passeport").required(),
                FieldSchema::text("cni_number", "CNI"),
                FieldSchema::date("attached_date", "Date d'attachement"),
                FieldSchema::date("detached_date", "Date de détachement"),
                FieldSchema::file("photo_url", "Photo"),
            ],
            dynamic: dynamic_fields(),
            rules: vec![
                Rule::Required {
                    field: "citizen_last_name",
                    message: "Nom requis",
                },
                Rule::Required {
                    field: "citizen_first_name",
                    message: "Prénom requis",
                },
                Rule::Required {
                    field: "passport_number",
                    message: "Passeport requis",
                },
                Rule::DateOrder {
                    start: "attached_date",
                    end: "detached_date",
                    message: "La date de détachement doit être postérieure à la date d'attachement",
                },
            ],
        },
        filters: vec![
            FilterSpec::text("citizen_last_name", "Nom"),
            FilterSpec::text("citizen_first_name", "Prénom"),
            FilterSpec::text("passport_number", "Passeport"),
            FilterSpec::reference("citizen_type_id", "Type", types),
        ],
        columns: vec![
            "citizen_last_name",
            "citizen_first_name",
            "citizen_type_id",
            "passport_number",
            "attached_date",
        ],
        default_sort: ("created", SortDirection::Descending),
        seeds: seeds(),
    }
}
