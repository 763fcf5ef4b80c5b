//! End-to-end table view behaviour over realistic module data.

use chancery_schema::{
    dynamic_columns, DynamicField, DynamicFieldSchema, FieldKind, FieldSchema, Filter,
    ModuleSchema, Record, SortDirection, TableQuery,
};

fn citizens_schema() -> ModuleSchema {
    ModuleSchema {
        id_field: "citizen_id",
        discriminator: Some("citizen_type_id"),
        fields: vec![
            FieldSchema::text("citizen_last_name", "Nom"),
            FieldSchema::text("citizen_first_name", "Prénom"),
            FieldSchema::text("passport_number", "Passeport"),
            FieldSchema::date("attached_date", "Attachement"),
        ],
        dynamic: DynamicFieldSchema::empty(),
        rules: vec![],
    }
}

fn citizens() -> Vec<Record> {
    vec![
        Record::new()
            .with("citizen_id", 1)
            .with("citizen_last_name", "ADAMOU")
            .with("citizen_first_name", "Yahouza")
            .with("passport_number", "NIG123456")
            .with("citizen_type_id", 1)
            .with("attached_date", "2023-01-02"),
        Record::new()
            .with("citizen_id", 2)
            .with("citizen_last_name", "MAHAMANE")
            .with("citizen_first_name", "Aisha")
            .with("passport_number", "NIG654321")
            .with("citizen_type_id", 2)
            .with("attached_date", "2022-09-15"),
        Record::new()
            .with("citizen_id", 3)
            .with("citizen_last_name", "ISSOUFOU")
            .with("citizen_first_name", "Salif")
            .with("passport_number", "NIG777888")
            .with("citizen_type_id", 3)
            .with("attached_date", "2021-05-20"),
    ]
}

#[test]
fn last_name_filter_ma_matches_only_mahamane() {
    let records = citizens();
    let mut query = TableQuery::new("created", SortDirection::Descending);
    query.set_filter(Filter::Text {
        field: "citizen_last_name".into(),
        query: "ma".into(),
    });
    let rows = query.apply(&records, &citizens_schema());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].render("citizen_last_name"), "MAHAMANE");
}

#[test]
fn filtering_is_a_subset_and_idempotent() {
    let records = citizens();
    let schema = citizens_schema();
    let mut query = TableQuery::new("citizen_id", SortDirection::Ascending);
    query.set_filter(Filter::Text {
        field: "citizen_first_name".into(),
        query: "a".into(),
    });

    let once: Vec<Record> = query
        .apply(&records, &schema)
        .into_iter()
        .cloned()
        .collect();
    assert!(once.iter().all(|row| records.contains(row)));

    let twice = query.apply(&once, &schema);
    assert_eq!(twice.len(), once.len());
}

#[test]
fn salary_sort_orders_offers_and_reverses() {
    let schema = ModuleSchema {
        id_field: "job_offer_id",
        discriminator: None,
        fields: vec![
            FieldSchema::text("job_title", "Intitulé"),
            FieldSchema::number("salary_min", "Salaire min"),
            FieldSchema::number("salary_max", "Salaire max"),
        ],
        dynamic: DynamicFieldSchema::empty(),
        rules: vec![],
    };
    let offers = vec![
        Record::new()
            .with("job_offer_id", 1)
            .with("job_title", "Chargé de Communication")
            .with("salary_min", 2800)
            .with("salary_max", 3500),
        Record::new()
            .with("job_offer_id", 2)
            .with("job_title", "Développeur Full-Stack")
            .with("salary_min", 3200)
            .with("salary_max", 4200),
    ];

    let mut query = TableQuery::new("salary_min", SortDirection::Ascending);
    let ids: Vec<String> = query
        .apply(&offers, &schema)
        .iter()
        .map(|row| row.render("job_offer_id"))
        .collect();
    assert_eq!(ids, vec!["1", "2"]);

    query.toggle_sort("salary_min");
    let reversed: Vec<String> = query
        .apply(&offers, &schema)
        .iter()
        .map(|row| row.render("job_offer_id"))
        .collect();
    assert_eq!(reversed, vec!["2", "1"]);
}

#[test]
fn reversing_direction_reverses_untied_entries() {
    let records = citizens();
    let schema = citizens_schema();
    let mut query = TableQuery::new("citizen_last_name", SortDirection::Ascending);

    let forward: Vec<String> = query
        .apply(&records, &schema)
        .iter()
        .map(|row| row.render("citizen_id"))
        .collect();
    query.toggle_sort("citizen_last_name");
    let mut backward: Vec<String> = query
        .apply(&records, &schema)
        .iter()
        .map(|row| row.render("citizen_id"))
        .collect();
    backward.reverse();
    assert_eq!(forward, backward);
}

fn asset_dynamic_schema() -> DynamicFieldSchema {
    DynamicFieldSchema::new(vec![(
        1,
        vec![
            DynamicField::new("brand", "Marque", FieldKind::Text),
            DynamicField::new("model", "Modèle", FieldKind::Text),
            DynamicField::new("year", "Année", FieldKind::Number),
            DynamicField::new("license_plate", "Plaque d'Immatriculation", FieldKind::Text),
            DynamicField::new("fuel_type", "Type de Carburant", FieldKind::Text),
            DynamicField::new("mileage", "Kilométrage", FieldKind::Number),
        ],
    )])
}

#[test]
fn vehicle_filter_exposes_license_plate_column() {
    let schema = ModuleSchema {
        id_field: "asset_id",
        discriminator: Some("asset_type_id"),
        fields: vec![
            FieldSchema::text("asset_name", "Nom"),
            FieldSchema::number("asset_type_id", "Type"),
        ],
        dynamic: asset_dynamic_schema(),
        rules: vec![],
    };
    let assets = vec![
        Record::new()
            .with("asset_id", 10)
            .with("asset_type_id", 1)
            .with("asset_name", "Berline de service")
            .with_extra("license_plate", "AB-123-CD")
            .with_extra("brand", "Toyota"),
        Record::new()
            .with("asset_id", 11)
            .with("asset_type_id", 2)
            .with("asset_name", "Bureau Exécutif")
            .with_extra("material", "Chêne massif"),
    ];

    let mut query = TableQuery::new("asset_id", SortDirection::Ascending);
    query.set_filter(Filter::Exact {
        field: "asset_type_id".into(),
        value: 1,
    });

    let rows = query.apply(&assets, &schema);
    assert_eq!(rows.len(), 1);

    let discriminator = query.discriminator_value(&schema).expect("type filter set");
    let columns = dynamic_columns(&schema.dynamic, discriminator, &rows);
    let plate = columns
        .iter()
        .find(|column| column.key == "license_plate")
        .expect("license plate column");
    assert_eq!(plate.label, "Plaque d'Immatriculation");
    assert_eq!(rows[0].render("asset_name"), "Berline de service");
    assert_eq!(
        rows[0].get_extra("license_plate").unwrap().render(),
        "AB-123-CD"
    );
}

#[test]
fn dynamic_columns_are_declared_intersect_present() {
    let dynamic = asset_dynamic_schema();
    let rows = vec![
        Record::new()
            .with("asset_id", 1)
            .with_extra("brand", "Toyota")
            .with_extra("mileage", 15420),
        Record::new()
            .with("asset_id", 2)
            .with_extra("license_plate", "ZZ-999-ZZ"),
    ];
    let borrowed: Vec<&Record> = rows.iter().collect();
    let columns = dynamic_columns(&dynamic, 1, &borrowed);
    let keys: Vec<&str> = columns.iter().map(|column| column.key.as_str()).collect();
    // Declared order, limited to keys present in the filtered rows.
    assert_eq!(keys, vec!["brand", "license_plate", "mileage"]);
}

#[test]
fn no_discriminator_filter_means_no_dynamic_columns() {
    let schema = ModuleSchema {
        id_field: "asset_id",
        discriminator: Some("asset_type_id"),
        fields: vec![FieldSchema::text("asset_name", "Nom")],
        dynamic: asset_dynamic_schema(),
        rules: vec![],
    };
    let query = TableQuery::new("asset_id", SortDirection::Ascending);
    assert_eq!(query.discriminator_value(&schema), None);
}
