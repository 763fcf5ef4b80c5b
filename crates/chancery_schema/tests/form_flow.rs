//! Form lifecycle against a realistic module schema, including attachments.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chancery_ids::IdAllocator;
use chancery_schema::{
    BlobRef, BlobStore, DynamicField, DynamicFieldSchema, FieldKind, FieldSchema, FormState,
    MemoryBlobStore, ModuleSchema, Rule, Value,
};

fn applications_schema() -> ModuleSchema {
    ModuleSchema {
        id_field: "application_id",
        discriminator: None,
        fields: vec![
            FieldSchema::number("job_offer_id", "Offre d'emploi").required(),
            FieldSchema::text("full_name", "Nom complet").required(),
            FieldSchema::text("email", "Email").required(),
            FieldSchema::file("cv_document", "CV"),
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
        ],
    }
}

#[test]
fn attachment_lands_in_blob_store_not_in_record() {
    let schema = applications_schema();
    let mut alloc = IdAllocator::new();
    let mut blobs = MemoryBlobStore::new();

    let payload = format!("data:application/pdf;base64,{}", STANDARD.encode(b"mon cv"));
    let reference = blobs.store("cv.pdf", &payload).unwrap();

    let mut form = FormState::new(&schema, None);
    form.set_value("job_offer_id", "1");
    form.set_value("full_name", "Aisha Mahamane");
    form.set_value("email", "aisha@example.com");
    form.set_value("cv_document", reference.as_str());

    let record = form.submit(&schema, &mut alloc, 4).unwrap();
    let stored = record.render("cv_document");
    let parsed = BlobRef::parse(&stored).expect("record holds a blob reference");
    assert_eq!(blobs.retrieve(&parsed).unwrap(), b"mon cv");
}

#[test]
fn each_required_violation_attaches_exactly_one_error() {
    let schema = applications_schema();
    let mut form = FormState::new(&schema, None);
    assert!(!form.validate(&schema));
    assert_eq!(form.error("full_name"), Some("Nom complet requis"));
    assert_eq!(form.error("email"), Some("Email requis"));

    // Two passes do not stack messages.
    assert!(!form.validate(&schema));
    assert_eq!(form.error("full_name"), Some("Nom complet requis"));
}

#[test]
fn created_records_get_sequential_identities() {
    let schema = applications_schema();
    let mut alloc = IdAllocator::seeded([3.into()]);

    let mut ids = Vec::new();
    for name in ["A", "B"] {
        let mut form = FormState::new(&schema, None);
        form.set_value("job_offer_id", "1");
        form.set_value("full_name", name);
        form.set_value("email", "x@example.com");
        let record = form.submit(&schema, &mut alloc, 1).unwrap();
        ids.push(record.id("application_id").unwrap().value());
    }
    assert_eq!(ids, vec![4, 5]);
}

#[test]
fn transaction_style_any_non_zero_rule() {
    let schema = ModuleSchema {
        id_field: "transaction_id",
        discriminator: None,
        fields: vec![
            FieldSchema::text("transaction_code", "Code").required(),
            FieldSchema::number("debit", "Débit"),
            FieldSchema::number("credit", "Crédit"),
        ],
        dynamic: DynamicFieldSchema::empty(),
        rules: vec![
            Rule::Required {
                field: "transaction_code",
                message: "Code requis",
            },
            Rule::AnyNonZero {
                fields: &["debit", "credit"],
                attach: "amount",
                message: "Débit ou Crédit obligatoire",
            },
        ],
    };
    let mut alloc = IdAllocator::new();
    let mut form = FormState::new(&schema, None);
    form.set_value("transaction_code", "TX-001");
    form.set_value("debit", "0");
    assert!(form.submit(&schema, &mut alloc, 1).is_none());
    assert_eq!(form.error("amount"), Some("Débit ou Crédit obligatoire"));

    form.set_value("credit", "1500.50");
    let record = form.submit(&schema, &mut alloc, 1).unwrap();
    assert_eq!(record.get("credit"), Some(&Value::Float(1500.5)));
}

#[test]
fn dynamic_booleans_and_numbers_coerce_on_submit() {
    let schema = ModuleSchema {
        id_field: "activity_id",
        discriminator: Some("activity_type_id"),
        fields: vec![
            FieldSchema::text("activity_title", "Titre").required(),
            FieldSchema::number("activity_type_id", "Type"),
        ],
        dynamic: DynamicFieldSchema::new(vec![(
            1,
            vec![
                DynamicField::new("medical_certificate", "Certificat Médical", FieldKind::Boolean),
                DynamicField::new("notice_period", "Préavis (jours)", FieldKind::Number),
            ],
        )]),
        rules: vec![Rule::Required {
            field: "activity_title",
            message: "Titre requis",
        }],
    };
    let mut alloc = IdAllocator::new();
    let mut form = FormState::new(&schema, None);
    form.set_value("activity_title", "Congé annuel");
    form.set_value("activity_type_id", "1");
    form.set_extra("medical_certificate", "true");
    form.set_extra("notice_period", "30");

    let record = form.submit(&schema, &mut alloc, 1).unwrap();
    assert_eq!(
        record.get_extra("medical_certificate"),
        Some(&Value::Bool(true))
    );
    assert_eq!(record.get_extra("notice_period"), Some(&Value::Int(30)));
}
