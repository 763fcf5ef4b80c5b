//! Financial transactions: invoices, payments, budget and scholarship
//! transfers. A transaction must carry a debit or a credit.

use super::{FilterSpec, ModuleConfig};
use chancery_schema::{
    DynamicFieldSchema, FieldSchema, ModuleSchema, Record, ReferenceList, Rule, SortDirection,
};
use std::sync::Arc;

fn transaction_types() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "transaction_types",
        &[
            (1, "Facture"),
            (2, "Paiement"),
            (3, "Versement budgétaire"),
            (4, "Versement bourse"),
        ],
    ))
}

fn payment_modes() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "payment_modes",
        &[(21, "Cash"), (22, "Virement"), (23, "Carte bancaire")],
    ))
}

fn statuses() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "transaction_statuses",
        &[(31, "Brouillon"), (32, "Validé"), (33, "Annulé")],
    ))
}

#[allow(clippy::too_many_arguments)]
fn transaction(
    id: i64,
    code: &str,
    date: &str,
    account_id: i64,
    type_id: i64,
    mode_id: i64,
    debit: f64,
    credit: f64,
    reference: &str,
    description: &str,
    created: &str,
) -> Record {
    Record::new()
        .with("transaction_id", id)
        .with("org_id", "AMB_NI_FR")
        .with("transaction_code", code)
        .with("transaction_date", date)
        .with("account_id", account_id)
        .with("transaction_type_id", type_id)
        .with("payment_mode_id", mode_id)
        .with("debit", debit)
        .with("credit", credit)
        .with("reference_number", reference)
        .with("description", description)
        .with("status_id", 32)
        .with("created", created)
        .with("createdby", 1)
}

fn seeds() -> Vec<Record> {
    vec![
        transaction(
            5001,
            "TRX-2025-00001",
            "2025-08-01",
            9001,
            2,
            21,
            0.0,
            250.0,
            "RC-001",
            "Paiement frais carte consulaire",
            "2025-08-01T10:00:00Z",
        ),
        transaction(
            5002,
            "TRX-2025-00002",
            "2025-08-02",
            9002,
            3,
            22,
            10000.0,
            0.0,
            "VB-2025-08",
            "Versement budgétaire Août",
            "2025-08-02T09:30:00Z",
        ),
        transaction(
            5003,
            "TRX-2025-00003",
            "2025-08-05",
            9003,
            4,
            22,
            0.0,
            1500.0,
            "VBRS-0003",
            "Versement bourse étudiants",
            "2025-08-10T11:15:00Z",
        ),
    ]
}

pub(super) fn config() -> ModuleConfig {
    let types = transaction_types();
    let modes = payment_modes();
    let status_list = statuses();
    ModuleConfig {
        key: "transactions",
        group: "Finance",
        title: "Transactions",
        description: "Écritures financières",
        schema: ModuleSchema {
            id_field: "transaction_id",
            discriminator: None,
            fields: vec![
                FieldSchema::text("org_id", "Organisation").default_value("AMB_NI_FR"),
                FieldSchema::text("transaction_code", "Code").required(),
                FieldSchema::date("transaction_date", "Date").required(),
                FieldSchema::number("account_id", "Compte").required(),
                FieldSchema::select("transaction_type_id", "Type", types.clone()),
                FieldSchema::select("payment_mode_id", "Mode de paiement", modes),
                FieldSchema::number("debit", "Débit"),
                FieldSchema::number("credit", "Crédit"),
                FieldSchema::text("reference_number", "Référence"),
                FieldSchema::textarea("description", "Description"),
                FieldSchema::select("status_id", "Statut", status_list.clone()).default_value(31),
            ],
            dynamic: DynamicFieldSchema::empty(),
            rules: vec![
                Rule::Required {
                    field: "transaction_code",
                    message: "Code requis",
                },
                Rule::Required {
                    field: "transaction_date",
                    message: "Date requise",
                },
                Rule::Required {
                    field: "account_id",
                    message: "Compte requis",
                },
                Rule::Required {
                    field: "transaction_type_id",
                    message: "Type requis",
                },
                Rule::AnyNonZero {
                    fields: &["debit", "credit"],
                    attach: "amount",
                    message: "Débit ou Crédit obligatoire",
                },
            ],
        },
        filters: vec![
            FilterSpec::text("transaction_code", "Code"),
            FilterSpec::text("description", "Description"),
            FilterSpec::reference("transaction_type_id", "Type", types),
            FilterSpec::reference("status_id", "Statut", status_list),
            FilterSpec::date_range("transaction_date", "Période"),
        ],
        columns: vec![
            "transaction_code",
            "transaction_date",
            "transaction_type_id",
            "debit",
            "credit",
            "status_id",
        ],
        default_sort: ("transaction_date", SortDirection::Descending),
        seeds: seeds(),
    }
}
