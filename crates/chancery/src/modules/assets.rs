//! Logistics procurement: the asset register (`org_asset`).
//!
//! The asset type drives the dynamic columns — a vehicle has a license
//! plate and mileage, a drug a batch number and expiry date.

use super::{FilterSpec, ModuleConfig};
use chancery_schema::{
    DynamicField, DynamicFieldSchema, FieldKind, FieldSchema, ModuleSchema, Record, ReferenceList,
    Rule, SortDirection, Value,
};
use std::sync::Arc;

fn asset_types() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::with_codes(
        "asset_types",
        &[
            (1, "VEHICULE", "Véhicule"),
            (2, "MOBILIER", "Mobilier"),
            (3, "ELECTRONIQUE", "Électronique"),
            (4, "MEDICAMENT", "Médicament"),
            (5, "FOURNITURE", "Fourniture"),
            (6, "EQUIPEMENT", "Équipement"),
            (7, "IMMOBILIER", "Immobilier"),
        ],
    ))
}

fn asset_statuses() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::with_codes(
        "asset_statuses",
        &[
            (1, "AVAILABLE", "Disponible"),
            (2, "IN_USE", "En utilisation"),
            (3, "MAINTENANCE", "En maintenance"),
            (4, "RETIRED", "Retiré"),
            (5, "DAMAGED", "Endommagé"),
            (6, "PENDING", "En attente"),
        ],
    ))
}

fn dynamic_fields() -> DynamicFieldSchema {
    use FieldKind::{Date, Number, Text};
    DynamicFieldSchema::new(vec![
        (
            1, // VEHICULE
            vec![
                DynamicField::new("brand", "Marque", Text),
                DynamicField::new("model", "Modèle", Text),
                DynamicField::new("year", "Année", Number),
                DynamicField::new("license_plate", "Plaque d'Immatriculation", Text),
                DynamicField::new("fuel_type", "Type de Carburant", Text),
                DynamicField::new("mileage", "Kilométrage", Number),
            ],
        ),
        (
            2, // MOBILIER
            vec![
                DynamicField::new("material", "Matériau", Text),
                DynamicField::new("color", "Couleur", Text),
                DynamicField::new("dimensions", "Dimensions", Text),
                DynamicField::new("weight", "Poids (kg)", Number),
                DynamicField::new("manufacturer", "Fabricant", Text),
            ],
        ),
        (
            3, // ELECTRONIQUE
            vec![
                DynamicField::new("brand", "Marque", Text),
                DynamicField::new("model", "Modèle", Text),
                DynamicField::new("serial_number", "Numéro de Série", Text),
                DynamicField::new("warranty_expiry", "Fin de Garantie", Date),
                DynamicField::new("specifications", "Spécifications", Text),
            ],
        ),
        (
            4, // MEDICAMENT
            vec![
                DynamicField::new("dosage", "Dosage", Text),
                DynamicField::new("expiry_date", "Date d'Expiration", Date),
                DynamicField::new("batch_number", "Numéro de Lot", Text),
                DynamicField::new("manufacturer", "Laboratoire", Text),
                DynamicField::new("storage_temperature", "Température de Stockage", Text),
                DynamicField::new("quantity_in_stock", "Quantité en Stock", Number),
            ],
        ),
        (
            5, // FOURNITURE
            vec![
                DynamicField::new("category", "Catégorie", Text),
                DynamicField::new("unit_of_measure", "Unité de Mesure", Text),
                DynamicField::new("quantity_in_stock", "Quantité en Stock", Number),
                DynamicField::new("minimum_stock", "Stock Minimum", Number),
                DynamicField::new("supplier", "Fournisseur", Text),
            ],
        ),
        (
            6, // EQUIPEMENT
            vec![
                DynamicField::new("brand", "Marque", Text),
                DynamicField::new("model", "Modèle", Text),
                DynamicField::new("serial_number", "Numéro de Série", Text),
                DynamicField::new("maintenance_schedule", "Calendrier de Maintenance", Text),
                DynamicField::new("last_maintenance", "Dernière Maintenance", Date),
                DynamicField::new("next_maintenance", "Prochaine Maintenance", Date),
            ],
        ),
        (
            7, // IMMOBILIER
            vec![
                DynamicField::new("property_type", "Type de Propriété", Text),
                DynamicField::new("surface_area", "Surface (m²)", Number),
                DynamicField::new("address", "Adresse", Text),
                DynamicField::new("rental_income", "Revenu Locatif", Number),
                DynamicField::new("property_tax", "Taxe Foncière", Number),
            ],
        ),
    ])
}

fn asset(
    id: i64,
    type_id: i64,
    status_id: i64,
    name: &str,
    code: &str,
    acquisition: (&str, f64),
    quantity: i64,
    location: &str,
    created: &str,
) -> Record {
    Record::new()
        .with("asset_id", id)
        .with("org_id", "ORG001")
        .with("asset_type_id", type_id)
        .with("asset_status_id", status_id)
        .with("asset_name", name)
        .with("asset_code", code)
        .with("acquisition_date", acquisition.0)
        .with("acquisition_cost", acquisition.1)
        .with("quantity", quantity)
        .with("location", location)
        .with("asset_image_url", Value::Null)
        .with("created", created)
        .with("createdby", 1)
}

fn seeds() -> Vec<Record> {
    vec![
        asset(
            1,
            1,
            2,
            "Toyota Camry 2022",
            "VEH001",
            ("2022-03-15", 28500.0),
            1,
            "Parking Principal",
            "2022-03-15T10:00:00",
        )
        .with_extra("brand", "Toyota")
        .with_extra("model", "Camry")
        .with_extra("year", 2022)
        .with_extra("license_plate", "ABC-123-DE")
        .with_extra("fuel_type", "Essence")
        .with_extra("mileage", 15420),
        asset(
            2,
            2,
            1,
            "Bureau Exécutif en Chêne",
            "MOB001",
            ("2023-01-20", 1200.0),
            1,
            "Entrepôt - Étage 2",
            "2023-01-20T09:15:00",
        )
        .with_extra("material", "Chêne massif")
        .with_extra("color", "Brun foncé")
        .with_extra("dimensions", "180x90x75 cm")
        .with_extra("weight", 85)
        .with_extra("manufacturer", "Mobilier Professionnel SA"),
        asset(
            3,
            3,
            2,
            "Ordinateur Portable Dell Latitude",
            "ELEC001",
            ("2023-09-10", 1850.0),
            2,
            "Bureau 205",
            "2023-09-10T16:45:00",
        )
        .with_extra("brand", "Dell")
        .with_extra("model", "Latitude 5520")
        .with_extra("serial_number", "DL2023091001")
        .with_extra("warranty_expiry", "2026-09-10")
        .with_extra("specifications", "Intel i7, 16GB RAM, 512GB SSD"),
        asset(
            4,
            4,
            1,
            "Paracétamol 500mg",
            "MED001",
            ("2024-06-01", 45.8),
            200,
            "Pharmacie - Armoire A",
            "2024-06-01T08:30:00",
        )
        .with_extra("dosage", "500mg")
        .with_extra("expiry_date", "2026-05-30")
        .with_extra("batch_number", "PAR240601")
        .with_extra("manufacturer", "Laboratoire Pharmaceutique")
        .with_extra("storage_temperature", "15-25°C")
        .with_extra("quantity_in_stock", 500),
        asset(
            5,
            5,
            1,
            "Papier A4 - Ramettes",
            "FOUR001",
            ("2024-07-20", 125.0),
            50,
            "Entrepôt - Section Fournitures",
            "2024-07-20T14:20:00",
        )
        .with_extra("category", "Papeterie")
        .with_extra("unit_of_measure", "Ramette")
        .with_extra("quantity_in_stock", 50)
        .with_extra("minimum_stock", 10)
        .with_extra("supplier", "Fournitures Bureau Plus"),
        asset(
            6,
            6,
            3,
            "Imprimante Laser HP LaserJet",
            "EQUIP001",
            ("2022-11-15", 650.0),
            1,
            "Bureau Principal",
            "2022-11-15T11:00:00",
        )
        .with_extra("brand", "HP")
        .with_extra("model", "LaserJet Pro 400")
        .with_extra("serial_number", "HP2022111501")
        .with_extra("maintenance_schedule", "Trimestrielle")
        .with_extra("last_maintenance", "2024-05-15")
        .with_extra("next_maintenance", "2024-08-15"),
    ]
}

pub(super) fn config() -> ModuleConfig {
    let types = asset_types();
    let statuses = asset_statuses();
    ModuleConfig {
        key: "assets",
        group: "Logistique",
        title: "Approvisionnement",
        description: "Registre des biens de l'organisation",
        schema: ModuleSchema {
            id_field: "asset_id",
            discriminator: Some("asset_type_id"),
            fields: vec![
                FieldSchema::text("org_id", "Organisation").default_value("ORG001"),
                FieldSchema::select("asset_type_id", "Type", types.clone()),
                FieldSchema::select("asset_status_id", "Statut", statuses.clone())
                    .default_value(1),
                FieldSchema::text("asset_name", "Nom").required(),
                FieldSchema::text("asset_code", "Code").required(),
                FieldSchema::date("acquisition_date", "Date d'acquisition"),
                FieldSchema::number("acquisition_cost", "Coût d'acquisition"),
                FieldSchema::number("quantity", "Quantité"),
                FieldSchema::text("location", "Emplacement"),
                FieldSchema::file("asset_image_url", "Image"),
            ],
            dynamic: dynamic_fields(),
            rules: vec![
                Rule::Required {
                    field: "asset_name",
                    message: "Nom requis",
                },
                Rule::Required {
                    field: "asset_code",
                    message: "Code requis",
                },
                Rule::Required {
                    field: "asset_type_id",
                    message: "Type requis",
                },
            ],
        },
        filters: vec![
            FilterSpec::text("asset_name", "Nom"),
            FilterSpec::text("asset_code", "Code"),
            FilterSpec::reference("asset_type_id", "Type", types),
            FilterSpec::reference("asset_status_id", "Statut", statuses),
            FilterSpec::number_range("acquisition_cost", "Coût"),
        ],
        columns: vec![
            "asset_code",
            "asset_name",
            "asset_type_id",
            "asset_status_id",
            "acquisition_date",
            "acquisition_cost",
            "location",
        ],
        default_sort: ("acquisition_date", SortDirection::Descending),
        seeds: seeds(),
    }
}
