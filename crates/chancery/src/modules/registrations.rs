//! Annual consular registration (inscription annuelle).

use super::{requests, ModuleConfig};
use chancery_schema::{DynamicField, DynamicFieldSchema, FieldKind, Record, ReferenceList};
use std::sync::Arc;

const DEFAULT_ORG: &str = "AMB_NI_FR";

fn subscription_types() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::with_codes(
        "subscription_types",
        &[
            (1001, "ETUDIANT", "Étudiant"),
            (1002, "PROFESSIONNEL", "Professionnel"),
            (1003, "TOURISTE", "Touriste"),
            (1004, "EXPATRIE", "Expatrié"),
            (1005, "DIPLOMATE", "Diplomate en mission"),
        ],
    ))
}

fn dynamic_fields() -> DynamicFieldSchema {
    use FieldKind::{Date, Number, Text};
    DynamicFieldSchema::new(vec![
        (
            1001, // Étudiant
            vec![
                DynamicField::new("annee_academique", "Année académique", Text),
                DynamicField::new("etablissement", "Établissement", Text),
                DynamicField::new("formation", "Formation", Text),
                DynamicField::new("cycle_id", "Cycle (ID)", Number),
                DynamicField::new("niveau_id", "Niveau (ID)", Number),
            ],
        ),
        (
            1002, // Professionnel
            vec![
                DynamicField::new("societe", "Société", Text),
                DynamicField::new("poste", "Poste", Text),
                DynamicField::new("secteur_id", "Secteur (ID)", Number),
                DynamicField::new("contrat_type_id", "Type de contrat (ID)", Number),
            ],
        ),
        (
            1003, // Touriste
            vec![
                DynamicField::new("motif_visite", "Motif de la visite", Text),
                DynamicField::new("duree_sejour", "Durée du séjour (jours)", Number),
                DynamicField::new("hebergement", "Hébergement", Text),
            ],
        ),
        (
            1004, // Expatrié
            vec![
                DynamicField::new("pays_residence", "Pays de résidence", Text),
                DynamicField::new("date_arrivee", "Date d'arrivée", Date),
                DynamicField::new("date_depart_prevue", "Date de départ prévue", Date),
            ],
        ),
        (
            1005, // Diplomate en mission
            vec![
                DynamicField::new("mission_id", "Type de mission (ID)", Number),
                DynamicField::new("fonction_diplomatique", "Fonction diplomatique", Text),
                DynamicField::new("institution_origine", "Institution d'origine", Text),
            ],
        ),
    ])
}

fn seeds() -> Vec<Record> {
    vec![
        requests::seed(
            50001,
            1001,
            DEFAULT_ORG,
            1001,
            "Inscription — Étudiant",
            "Inscription académique 2024-2025",
            501,
            "2025-08-07T08:30:00Z",
            0.0,
        )
        .with_extra("annee_academique", "2024-2025")
        .with_extra("etablissement", "Université de Paris")
        .with_extra("formation", "Licence Informatique")
        .with_extra("cycle_id", 101)
        .with_extra("niveau_id", 1),
        requests::seed(
            50002,
            1002,
            DEFAULT_ORG,
            1002,
            "Inscription — Professionnel",
            "Inscription annuelle",
            503,
            "2025-08-05T11:00:00Z",
            0.0,
        )
        .with_extra("societe", "TechPro")
        .with_extra("poste", "Ingénieure")
        .with_extra("secteur_id", 12)
        .with_extra("contrat_type_id", 1),
    ]
}

pub(super) fn config() -> ModuleConfig {
    requests::config(
        "registrations",
        "Consulat",
        "Inscription Annuelle",
        "Inscriptions consulaires annuelles",
        DEFAULT_ORG,
        subscription_types(),
        dynamic_fields(),
        seeds(),
    )
}
