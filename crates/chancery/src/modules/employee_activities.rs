//! Employee operations (congés, missions, promotions, ...).
//!
//! The operation type selects the dynamic sub-fields: a leave carries its
//! replacement and medical certificate, a mission its location and daily
//! allowance.

use super::{FilterSpec, ModuleConfig};
use chancery_schema::{
    DynamicField, DynamicFieldSchema, FieldKind, FieldSchema, ModuleSchema, Record, ReferenceList,
    Rule, SortDirection, Value,
};
use std::sync::Arc;

fn activity_types() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::with_codes(
        "activity_types",
        &[
            (1, "CONGE", "Congé"),
            (2, "MISSION", "Mission"),
            (3, "DEMISSION", "Démission"),
            (4, "EVALUATION", "Évaluation"),
            (5, "PROMOTION", "Promotion"),
            (6, "ABSENCE", "Absence"),
            (7, "AFFECTATION", "Affectation"),
        ],
    ))
}

fn activity_statuses() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::with_codes(
        "activity_statuses",
        &[
            (1, "PENDING", "En attente"),
            (2, "APPROVED", "Approuvé"),
            (3, "REJECTED", "Rejeté"),
            (4, "IN_PROGRESS", "En cours"),
            (5, "COMPLETED", "Terminé"),
        ],
    ))
}

fn dynamic_fields() -> DynamicFieldSchema {
    use FieldKind::{Boolean, Date, Number, Text};
    DynamicFieldSchema::new(vec![
        (
            1, // CONGE
            vec![
                DynamicField::new("conge_type", "Type de Congé", Text),
                DynamicField::new("replacement_employee", "Remplaçant", Text),
                DynamicField::new("medical_certificate", "Certificat Médical", Boolean),
            ],
        ),
        (
            2, // MISSION
            vec![
                DynamicField::new("mission_location", "Lieu de Mission", Text),
                DynamicField::new("transport_type", "Transport", Text),
                DynamicField::new("accommodation", "Hébergement", Text),
                DynamicField::new("daily_allowance", "Indemnité Journalière", Number),
            ],
        ),
        (
            3, // DEMISSION
            vec![
                DynamicField::new("resignation_reason", "Motif de Démission", Text),
                DynamicField::new("notice_period", "Préavis (jours)", Number),
                DynamicField::new("final_work_date", "Dernier Jour de Travail", Date),
            ],
        ),
        (
            4, // EVALUATION
            vec![
                DynamicField::new("evaluation_period", "Période d'Évaluation", Text),
                DynamicField::new("overall_score", "Note Globale", Number),
                DynamicField::new("evaluator_name", "Évaluateur", Text),
                DynamicField::new("next_evaluation_date", "Prochaine Évaluation", Date),
            ],
        ),
        (
            5, // PROMOTION
            vec![
                DynamicField::new("previous_position", "Ancien Poste", Text),
                DynamicField::new("new_position", "Nouveau Poste", Text),
                DynamicField::new("salary_increase", "Augmentation Salaire", Number),
                DynamicField::new("effective_date", "Date d'Effet", Date),
            ],
        ),
        (
            6, // ABSENCE
            vec![
                DynamicField::new("absence_type", "Type d'Absence", Text),
                DynamicField::new("is_justified", "Justifiée", Boolean),
                DynamicField::new("justification_document", "Document Justificatif", Text),
            ],
        ),
        (
            7, // AFFECTATION
            vec![
                DynamicField::new("previous_department", "Ancien Service", Text),
                DynamicField::new("new_department", "Nouveau Service", Text),
                DynamicField::new("effective_date", "Date d'Effet", Date),
            ],
        ),
    ])
}

fn seeds() -> Vec<Record> {
    vec![
        Record::new()
            .with("activity_id", 1)
            .with("gov_employe_id", 1)
            .with("activity_type_id", 1)
            .with("org_id", "ORG001")
            .with("activity_title", "Congé Annuel - Été 2024")
            .with("activity_description", "Congé annuel pour les vacances d'été")
            .with("start_date", "2024-07-15")
            .with("end_date", "2024-07-30")
            .with("amount", Value::Null)
            .with("activity_status_id", 2)
            .with("created", "2024-06-15T10:00:00")
            .with("createdby", 1)
            .with_extra("conge_type", "Congé payé")
            .with_extra("replacement_employee", "Marie Dubois")
            .with_extra("medical_certificate", false),
        Record::new()
            .with("activity_id", 2)
            .with("gov_employe_id", 2)
            .with("activity_type_id", 2)
            .with("org_id", "ORG001")
            .with("activity_title", "Mission Diplomatique - Dakar")
            .with("activity_description", "Mission officielle au consulat de Dakar")
            .with("start_date", "2024-08-10")
            .with("end_date", "2024-08-20")
            .with("amount", 2500.0)
            .with("activity_status_id", 4)
            .with("created", "2024-07-01T09:15:00")
            .with("createdby", 2)
            .with_extra("mission_location", "Dakar, Sénégal")
            .with_extra("transport_type", "Avion")
            .with_extra("accommodation", "Hôtel Teranga")
            .with_extra("daily_allowance", 125.0),
        Record::new()
            .with("activity_id", 3)
            .with("gov_employe_id", 3)
            .with("activity_type_id", 5)
            .with("org_id", "ORG001")
            .with("activity_title", "Promotion - Chef de Service")
            .with(
                "activity_description",
                "Promotion au poste de Chef de Service Consulaire",
            )
            .with("start_date", "2024-09-01")
            .with("end_date", Value::Null)
            .with("amount", 500.0)
            .with("activity_status_id", 2)
            .with("created", "2024-08-01T09:00:00")
            .with("createdby", 1)
            .with_extra("previous_position", "Agent Consulaire")
            .with_extra("new_position", "Chef de Service Consulaire")
            .with_extra("salary_increase", 500.0)
            .with_extra("effective_date", "2024-09-01"),
    ]
}

pub(super) fn config() -> ModuleConfig {
    let types = activity_types();
    let statuses = activity_statuses();
    ModuleConfig {
        key: "employee_activities",
        group: "Employés",
        title: "Opérations employés",
        description: "Congés, missions et mouvements du personnel",
        schema: ModuleSchema {
            id_field: "activity_id",
            discriminator: Some("activity_type_id"),
            fields: vec![
                FieldSchema::text("org_id", "Organisation").default_value("ORG001"),
                FieldSchema::number("gov_employe_id", "Employé").required(),
                FieldSchema::select("activity_type_id", "Type d'opération", types.clone()),
                FieldSchema::text("activity_title", "Titre").required(),
                FieldSchema::textarea("activity_description", "Description"),
                FieldSchema::date("start_date", "Date de début"),
                FieldSchema::date("end_date", "Date de fin"),
                FieldSchema::number("amount", "Montant"),
                FieldSchema::select("activity_status_id", "Statut", statuses.clone()),
            ],
            dynamic: dynamic_fields(),
            rules: vec![
                Rule::Required {
                    field: "gov_employe_id",
                    message: "Employé requis",
                },
                Rule::Required {
                    field: "activity_type_id",
                    message: "Type d'opération requis",
                },
                Rule::Required {
                    field: "activity_title",
                    message: "Titre requis",
                },
                Rule::Required {
                    field: "start_date",
                    message: "Date de début requise",
                },
                Rule::DateOrder {
                    start: "start_date",
                    end: "end_date",
                    message: "La date de fin doit être postérieure ou égale à la date de début",
                },
            ],
        },
        filters: vec![
            FilterSpec::text("activity_title", "Titre"),
            FilterSpec::reference("activity_type_id", "Type", types),
            FilterSpec::reference("activity_status_id", "Statut", statuses),
            FilterSpec::date_range("start_date", "Période"),
        ],
        columns: vec![
            "activity_title",
            "activity_type_id",
            "start_date",
            "end_date",
            "activity_status_id",
        ],
        default_sort: ("start_date", SortDirection::Descending),
        seeds: seeds(),
    }
}
