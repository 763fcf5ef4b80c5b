//! Communications: internal notes, public announcements, invitations,
//! events. The communication type selects the dynamic sub-fields (channel
//! and hashtag for public posts, venue and programme for events, ...).

use super::{FilterSpec, ModuleConfig};
use chancery_schema::{
    DynamicField, DynamicFieldSchema, FieldKind, FieldSchema, ModuleSchema, Record, ReferenceList,
    Rule, SortDirection,
};
use std::sync::Arc;

fn communication_types() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "communication_types",
        &[
            (1, "Message interne"),
            (2, "Message public"),
            (3, "Invitation"),
            (4, "Événement"),
        ],
    ))
}

fn communication_statuses() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "communication_statuses",
        &[
            (1, "Brouillon"),
            (2, "Planifiée"),
            (3, "Envoyée"),
            (4, "Annulée"),
        ],
    ))
}

fn dynamic_fields() -> DynamicFieldSchema {
    use FieldKind::{Boolean, Text};
    DynamicFieldSchema::new(vec![
        (
            1, // Message interne
            vec![
                DynamicField::new("importance", "Importance", Text),
                DynamicField::new("piece_jointe", "Pièce jointe (nom)", Text),
            ],
        ),
        (
            2, // Message public
            vec![
                DynamicField::new("canal", "Canal", Text),
                DynamicField::new("hashtag", "Hashtag", Text),
            ],
        ),
        (
            3, // Invitation
            vec![
                DynamicField::new("lieu", "Lieu", Text),
                DynamicField::new("programme", "Programme", Text),
            ],
        ),
        (
            4, // Événement
            vec![
                DynamicField::new("lieu", "Lieu", Text),
                DynamicField::new("programme", "Programme", Text),
                DynamicField::new("livestream", "Diffusion en direct", Boolean),
            ],
        ),
    ])
}

fn seeds() -> Vec<Record> {
    vec![
        Record::new()
            .with("org_communication_id", 101)
            .with("org_id", "ORG-001")
            .with("communication_type_id", 1)
            .with("communication_status_id", 3)
            .with("title", "Note interne: maintenance")
            .with("message", "Interruption des services samedi 14h-16h")
            .with("start_date", "2025-08-12")
            .with("end_date", "2025-08-12")
            .with("created", "2025-08-09T09:00:00Z")
            .with("createdby", 1)
            .with_extra("importance", "Haute")
            .with_extra("piece_jointe", "maintenance.pdf"),
        Record::new()
            .with("org_communication_id", 102)
            .with("org_id", "ORG-001")
            .with("communication_type_id", 2)
            .with("communication_status_id", 2)
            .with("title", "Annonce publique: journée citoyenne")
            .with("message", "Rejoignez-nous pour la journée citoyenne")
            .with("start_date", "2025-09-01")
            .with("end_date", "2025-09-01")
            .with("created", "2025-08-08")
            .with("createdby", 2)
            .with_extra("canal", "Facebook")
            .with_extra("hashtag", "#CivDay"),
        Record::new()
            .with("org_communication_id", 103)
            .with("org_id", "ORG-001")
            .with("communication_type_id", 3)
            .with("communication_status_id", 1)
            .with("title", "Invitation: réunion de coordination")
            .with("message", "Réunion avec partenaires")
            .with("start_date", "2025-08-15")
            .with("end_date", "2025-08-15")
            .with("created", "2025-08-07")
            .with("createdby", 1)
            .with_extra("lieu", "Salle A")
            .with_extra("programme", "Ordre du jour joint"),
        Record::new()
            .with("org_communication_id", 104)
            .with("org_id", "ORG-001")
            .with("communication_type_id", 4)
            .with("communication_status_id", 3)
            .with("title", "Événement: Forum économique")
            .with("message", "Forum annuel des investisseurs")
            .with("start_date", "2025-10-05")
            .with("end_date", "2025-10-05")
            .with("created", "2025-08-06")
            .with("createdby", 3)
            .with_extra("lieu", "Centre des Congrès")
            .with_extra("programme", "Panels & ateliers")
            .with_extra("livestream", true),
    ]
}

pub(super) fn config() -> ModuleConfig {
    let types = communication_types();
    let statuses = communication_statuses();
    ModuleConfig {
        key: "communications",
        group: "Communication",
        title: "Les communications",
        description: "Messages, annonces et événements",
        schema: ModuleSchema {
            id_field: "org_communication_id",
            discriminator: Some("communication_type_id"),
            fields: vec![
                FieldSchema::text("org_id", "Organisation").default_value("ORG-001"),
                FieldSchema::select("communication_type_id", "Type", types.clone()),
                FieldSchema::select("communication_status_id", "Statut", statuses.clone())
                    .default_value(1),
                FieldSchema::text("title", "Titre").required(),
                FieldSchema::textarea("message", "Message"),
                FieldSchema::date("start_date", "Date début").required(),
                FieldSchema::date("end_date", "Date fin"),
            ],
            dynamic: dynamic_fields(),
            rules: vec![
                Rule::Required {
                    field: "communication_type_id",
                    message: "Type requis",
                },
                Rule::Required {
                    field: "title",
                    message: "Titre requis",
                },
                Rule::Required {
                    field: "start_date",
                    message: "Date début requise",
                },
                Rule::DateOrder {
                    start: "start_date",
                    end: "end_date",
                    message: "La date de fin doit être postérieure ou égale à la date de début",
                },
            ],
        },
        filters: vec![
            FilterSpec::text("title", "Titre"),
            FilterSpec::reference("communication_type_id", "Type", types),
            FilterSpec::reference("communication_status_id", "Statut", statuses),
            FilterSpec::date_range("start_date", "Période"),
        ],
        columns: vec![
            "title",
            "communication_type_id",
            "start_date",
            "communication_status_id",
        ],
        default_sort: ("start_date", SortDirection::Descending),
        seeds: seeds(),
    }
}
