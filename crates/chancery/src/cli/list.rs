//! `chancery list` — the table engine without the TUI.

use crate::cli::output;
use crate::modules::{self, ModuleConfig};
use anyhow::{bail, Context, Result};
use chancery_schema::{Filter, SortDirection, TableQuery};
use clap::Args;

/// Arguments for the `list` command.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Module key (see `chancery modules`)
    pub module: String,

    /// Substring filter, `field=text` (repeatable)
    #[arg(long = "filter", value_name = "FIELD=TEXT")]
    pub filters: Vec<String>,

    /// Discriminator/reference filter, `field=id` (repeatable)
    #[arg(long = "id", value_name = "FIELD=ID")]
    pub ids: Vec<String>,

    /// Sort specification, `field` or `field:desc`
    #[arg(long)]
    pub sort: Option<String>,

    /// Print records as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ListArgs) -> Result<()> {
    let registry = modules::registry();
    let Some(config) = modules::find(&registry, &args.module) else {
        let known: Vec<&str> = registry.iter().map(|config| config.key).collect();
        bail!(
            "Unknown module '{}'. Known modules: {}",
            args.module,
            known.join(", ")
        );
    };

    let mut query = build_query(&config, &args)?;
    for spec in &args.filters {
        let (field, text) = split_pair(spec)?;
        query.set_filter(Filter::Text {
            field: field.to_string(),
            query: text.to_string(),
        });
    }
    for spec in &args.ids {
        let (field, id) = split_pair(spec)?;
        let value: i64 = id
            .trim()
            .parse()
            .with_context(|| format!("Invalid id in --id {spec}"))?;
        query.set_filter(Filter::Exact {
            field: field.to_string(),
            value,
        });
    }

    let rows = query.apply(&config.seeds, &config.schema);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("Aucun enregistrement trouvé");
        return Ok(());
    }
    println!("{}", output::record_table(&config, &query, &rows));
    println!("{} enregistrement(s)", rows.len());
    Ok(())
}

fn build_query(config: &ModuleConfig, args: &ListArgs) -> Result<TableQuery> {
    let (default_field, default_direction) = config.default_sort;
    let mut query = TableQuery::new(default_field, default_direction);
    if let Some(spec) = &args.sort {
        let (field, direction) = match spec.split_once(':') {
            Some((field, "desc")) => (field, SortDirection::Descending),
            Some((field, "asc")) => (field, SortDirection::Ascending),
            Some((_, other)) => bail!("Unknown sort direction '{other}' (use asc or desc)"),
            None => (spec.as_str(), SortDirection::Ascending),
        };
        query.sort_field = field.to_string();
        query.direction = direction;
    }
    Ok(query)
}

fn split_pair(spec: &str) -> Result<(&str, &str)> {
    spec.split_once('=')
        .map(|(field, value)| (field.trim(), value.trim()))
        .with_context(|| format!("Expected FIELD=VALUE, got '{spec}'"))
}

/// `chancery modules` — list the registered modules.
pub fn run_modules() -> Result<()> {
    let registry = modules::registry();
    let mut table = comfy_table::Table::new();
    table
        .load_preset(comfy_table::presets::UTF8_FULL_CONDENSED)
        .set_header(vec!["Module", "Groupe", "Titre", "Enregistrements"]);
    for config in &registry {
        table.add_row(vec![
            config.key.to_string(),
            config.group.to_string(),
            config.title.to_string(),
            config.seeds.len().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// `chancery inventory` — the aggregated logistics summary.
pub fn run_inventory() -> Result<()> {
    let registry = modules::registry();
    let assets = modules::find(&registry, "assets").context("assets module missing")?;
    let types = assets
        .schema
        .field("asset_type_id")
        .and_then(|field| field.reference.clone())
        .context("asset type list missing")?;

    let lines = modules::inventory::summarize(&assets.seeds, &types);
    let mut table = comfy_table::Table::new();
    table
        .load_preset(comfy_table::presets::UTF8_FULL_CONDENSED)
        .set_header(vec![
            "Type",
            "Article",
            "Code",
            "Quantité",
            "Coût total",
            "Coût unitaire moyen",
        ]);
    for line in &lines {
        table.add_row(vec![
            line.asset_type_name.clone(),
            line.asset_name.clone(),
            line.asset_code.clone(),
            line.quantity.to_string(),
            output::format_money(line.total_cost),
            output::format_money(line.average_unit_cost),
        ]);
    }
    println!("{table}");
    Ok(())
}
