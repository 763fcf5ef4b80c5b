//! Security events: incidents, alerts, inspections.

use super::{FilterSpec, ModuleConfig};
use chancery_schema::{
    DynamicFieldSchema, FieldSchema, ModuleSchema, Record, ReferenceList, Rule, SortDirection,
};
use std::sync::Arc;

fn event_types() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "event_types",
        &[
            (1, "Incident"),
            (2, "Alerte"),
            (3, "Inspection"),
            (4, "Menace"),
            (5, "Exercice"),
        ],
    ))
}

fn severities() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "severities",
        &[(10, "Mineur"), (11, "Majeur"), (12, "Critique")],
    ))
}

fn categories() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "event_categories",
        &[
            (20, "Physique"),
            (21, "Informatique"),
            (22, "RH"),
            (23, "Diplomatique"),
            (24, "Autre"),
        ],
    ))
}

fn statuses() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "event_statuses",
        &[
            (30, "Ouvert"),
            (31, "En cours"),
            (32, "Résolu"),
            (33, "Archivé"),
        ],
    ))
}

fn seeds() -> Vec<Record> {
    vec![
        Record::new()
            .with("security_event_id", 1001)
            .with("org_id", "AMB_NI_FR")
            .with("event_type_id", 1)
            .with("severity_id", 11)
            .with("category_id", 20)
            .with("title", "Intrusion suspecte")
            .with(
                "description",
                "Personne non autorisée repérée près de l'entrée secondaire.",
            )
            .with("event_date", "2025-08-09T20:15:00Z")
            .with("location", "Entrée secondaire")
            .with("reported_by", 2)
            .with("assigned_to", 1)
            .with("status_id", 31)
            .with("actions_taken", "Patrouille envoyée, verrouillage temporaire.")
            .with("created", "2025-08-09T20:20:00Z"),
        Record::new()
            .with("security_event_id", 1002)
            .with("org_id", "AMB_NI_FR")
            .with("event_type_id", 3)
            .with("severity_id", 10)
            .with("category_id", 21)
            .with("title", "Inspection système")
            .with(
                "description",
                "Inspection programmée du système de contrôle d'accès.",
            )
            .with("event_date", "2025-08-08T10:00:00Z")
            .with("location", "Salle serveur")
            .with("reported_by", 1)
            .with("assigned_to", 3)
            .with("status_id", 30)
            .with("actions_taken", "Checklist préparée.")
            .with("created", "2025-08-08T09:45:00Z"),
    ]
}

pub(super) fn config() -> ModuleConfig {
    let types = event_types();
    let severity_list = severities();
    let status_list = statuses();
    ModuleConfig {
        key: "security_events",
        group: "Sécurité",
        title: "Evenements",
        description: "Journal des événements de sécurité",
        schema: ModuleSchema {
            id_field: "security_event_id",
            discriminator: None,
            fields: vec![
                FieldSchema::text("org_id", "Organisation").default_value("AMB_NI_FR"),
                FieldSchema::text("title", "Titre").required(),
                FieldSchema::select("event_type_id", "Type d'événement", types.clone()),
                FieldSchema::select("severity_id", "Gravité", severity_list.clone()),
                FieldSchema::select("category_id", "Catégorie", categories()),
                FieldSchema::textarea("description", "Description"),
                FieldSchema::datetime("event_date", "Date de l'événement"),
                FieldSchema::text("location", "Lieu"),
                FieldSchema::number("reported_by", "Signalé par"),
                FieldSchema::number("assigned_to", "Assigné à"),
                FieldSchema::select("status_id", "Statut", status_list.clone()).default_value(30),
                FieldSchema::textarea("actions_taken", "Actions menées"),
                FieldSchema::file("attachment", "Pièce jointe"),
            ],
            dynamic: DynamicFieldSchema::empty(),
            rules: vec![
                Rule::Required {
                    field: "title",
                    message: "Titre requis",
                },
                Rule::Required {
                    field: "event_type_id",
                    message: "Type d'événement requis",
                },
                Rule::Required {
                    field: "severity_id",
                    message: "Gravité requise",
                },
                Rule::Required {
                    field: "status_id",
                    message: "Statut requis",
                },
            ],
        },
        filters: vec![
            FilterSpec::text("title", "Titre"),
            FilterSpec::reference("event_type_id", "Type", types),
            FilterSpec::reference("severity_id", "Gravité", severity_list),
            FilterSpec::reference("status_id", "Statut", status_list),
            FilterSpec::date_range("event_date", "Période"),
        ],
        columns: vec![
            "title",
            "event_type_id",
            "severity_id",
            "event_date",
            "location",
            "status_id",
        ],
        default_sort: ("event_date", SortDirection::Descending),
        seeds: seeds(),
    }
}
