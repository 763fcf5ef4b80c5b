//! Inventory summary: a read-only aggregation over the asset register,
//! grouped by (type, name). Quantities and costs roll up from the
//! procurement records; nothing here owns data of its own.

use chancery_schema::{Record, ReferenceList, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryLine {
    pub asset_type_id: i64,
    pub asset_type_name: String,
    pub asset_name: String,
    pub asset_code: String,
    pub quantity: i64,
    pub total_cost: f64,
    pub average_unit_cost: f64,
}

/// Roll the asset collection up into one line per (type, name).
pub fn summarize(assets: &[Record], asset_types: &ReferenceList) -> Vec<InventoryLine> {
    struct Bucket {
        asset_type_id: i64,
        asset_name: String,
        asset_code: String,
        quantity: i64,
        total_cost: f64,
        unit_costs: Vec<f64>,
    }

    let mut buckets: BTreeMap<(i64, String), Bucket> = BTreeMap::new();
    for asset in assets {
        let type_id = asset
            .get("asset_type_id")
            .and_then(Value::as_i64)
            .unwrap_or(0);
        let name = asset.render("asset_name");
        // Missing quantities count as one unit, like the source register.
        let quantity = asset
            .get("quantity")
            .and_then(Value::as_i64)
            .filter(|quantity| *quantity > 0)
            .unwrap_or(1);
        let cost = asset
            .get("acquisition_cost")
            .and_then(Value::as_f64)
            .unwrap_or(0.0);

        let bucket = buckets
            .entry((type_id, name.clone()))
            .or_insert_with(|| Bucket {
                asset_type_id: type_id,
                asset_name: name,
                asset_code: {
                    let code = asset.render("asset_code");
                    if code.is_empty() {
                        "-".to_string()
                    } else {
                        code
                    }
                },
                quantity: 0,
                total_cost: 0.0,
                unit_costs: Vec::new(),
            });
        bucket.quantity += quantity;
        bucket.total_cost += cost * quantity as f64;
        bucket
            .unit_costs
            .extend(std::iter::repeat(cost).take(quantity as usize));
    }

    buckets
        .into_values()
        .map(|bucket| {
            let average = if bucket.unit_costs.is_empty() {
                0.0
            } else {
                bucket.unit_costs.iter().sum::<f64>() / bucket.unit_costs.len() as f64
            };
            InventoryLine {
                asset_type_id: bucket.asset_type_id,
                asset_type_name: asset_types
                    .label(bucket.asset_type_id)
                    .unwrap_or("Type Inconnu")
                    .to_string(),
                asset_name: bucket.asset_name,
                asset_code: bucket.asset_code,
                quantity: bucket.quantity,
                total_cost: bucket.total_cost,
                average_unit_cost: average,
            }
        })
        .collect()
}
