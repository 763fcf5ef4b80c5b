//! Output formatting for the headless commands: record tables with resolved
//! reference labels, money, and cell placeholders.

use crate::modules::ModuleConfig;
use chancery_schema::{dynamic_columns, Record, TableQuery, Value};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

/// Placeholder for empty/null cells.
const EMPTY_CELL: &str = "-";

/// Render a field through its schema: reference ids become labels, nulls
/// become the placeholder.
pub fn cell_text(config: &ModuleConfig, record: &Record, key: &str) -> String {
    let raw = record.get(key);
    if let Some(field) = config.schema.field(key) {
        if let Some(list) = &field.reference {
            return raw
                .and_then(Value::as_i64)
                .map(|id| list.label_or_dash(id).to_string())
                .unwrap_or_else(|| EMPTY_CELL.to_string());
        }
    }
    let rendered = raw.map(Value::render).unwrap_or_default();
    if rendered.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        rendered
    }
}

pub fn extra_cell_text(record: &Record, key: &str) -> String {
    let rendered = record.get_extra(key).map(Value::render).unwrap_or_default();
    if rendered.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        rendered
    }
}

/// Build the comfy-table for a filtered module view: configured columns
/// plus the dynamic columns of the active discriminator value, when any.
pub fn record_table(config: &ModuleConfig, query: &TableQuery, rows: &[&Record]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let extra = match query.discriminator_value(&config.schema) {
        Some(value) => dynamic_columns(&config.schema.dynamic, value, rows),
        None => Vec::new(),
    };

    let mut header: Vec<Cell> = config
        .columns
        .iter()
        .map(|key| Cell::new(config.column_label(key)))
        .collect();
    header.extend(extra.iter().map(|column| Cell::new(&column.label)));
    table.set_header(header);

    for record in rows {
        let mut cells: Vec<Cell> = config
            .columns
            .iter()
            .map(|key| Cell::new(cell_text(config, record, key)))
            .collect();
        cells.extend(
            extra
                .iter()
                .map(|column| Cell::new(extra_cell_text(record, &column.key))),
        );
        table.add_row(cells);
    }
    table
}

/// Thousands-separated money rendering for the inventory summary.
pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as i64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    format!(
        "{}{}.{:02}",
        if negative { "-" } else { "" },
        grouped,
        fraction
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules;
    use chancery_schema::{Filter, SortDirection};

    #[test]
    fn reference_cells_resolve_to_labels() {
        let registry = modules::registry();
        let config = modules::find(&registry, "citizens").unwrap();
        let record = &config.seeds[0];
        assert_eq!(cell_text(&config, record, "citizen_type_id"), "Étudiant");
        assert_eq!(cell_text(&config, record, "detached_date"), "-");
        assert_eq!(cell_text(&config, record, "citizen_last_name"), "ADAMOU");
    }

    #[test]
    fn table_gains_dynamic_columns_under_a_type_filter() {
        let registry = modules::registry();
        let config = modules::find(&registry, "assets").unwrap();
        let mut query = TableQuery::new("asset_id", SortDirection::Ascending);
        query.set_filter(Filter::Exact {
            field: "asset_type_id".into(),
            value: 1,
        });
        let rows = query.apply(&config.seeds, &config.schema);
        let table = record_table(&config, &query, &rows);
        let rendered = table.to_string();
        assert!(rendered.contains("Plaque d'Immatriculation"));
        assert!(rendered.contains("ABC-123-DE"));
    }

    #[test]
    fn money_groups_thousands() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(1234.5), "1 234.50");
        assert_eq!(format_money(-28500.0), "-28 500.00");
    }
}
