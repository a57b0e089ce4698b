use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::SizeCatalog;
use crate::cli::{load_catalog, OutputFormat};
use crate::core::table::SizeTable;
use crate::core::types::Gender;

#[derive(Args)]
pub struct TablesArgs {
    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Only list tables for this gender
    #[arg(short, long, value_enum)]
    pub gender: Option<Gender>,

    /// Write the catalog as JSON to this file instead of listing it
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Execute the tables command
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or exported.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: TablesArgs, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;

    if let Some(path) = &args.export {
        std::fs::write(path, catalog.to_json()?)?;
        eprintln!("Exported {} tables to {}", catalog.len(), path.display());
        return Ok(());
    }

    let tables: Vec<&SizeTable> = catalog
        .tables
        .iter()
        .filter(|t| args.gender.map_or(true, |g| t.gender == g))
        .collect();

    match format {
        OutputFormat::Text => print_text_tables(&catalog, &tables),
        OutputFormat::Json => print_json_tables(&catalog, &tables)?,
        OutputFormat::Tsv => print_tsv_tables(&catalog, &tables),
    }

    Ok(())
}

fn rule_names(table: &SizeTable) -> Vec<&'static str> {
    table.required_measurements().map(|m| m.as_str()).collect()
}

fn tolerance_label(catalog: &SizeCatalog, table: &SizeTable) -> String {
    catalog.tolerances.get(&table.name).map_or_else(
        || "none".to_string(),
        |t| format!("-{:.0}% / +{:.0}%", t.down() * 100.0, t.up() * 100.0),
    )
}

fn print_text_tables(catalog: &SizeCatalog, tables: &[&SizeTable]) {
    println!("Size tables ({} total)", tables.len());
    println!("{}", "=".repeat(60));

    for table in tables {
        println!("\n{} ({})", table.name, table.gender);
        println!("   Sizes: {}", table.sizes.iter().map(|s| s.id.as_str()).collect::<Vec<_>>().join(", "));
        println!("   Measurements: {}", rule_names(table).join(", "));
        println!("   Tolerance: {}", tolerance_label(catalog, table));
    }
}

fn print_json_tables(catalog: &SizeCatalog, tables: &[&SizeTable]) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = tables
        .iter()
        .map(|t| {
            serde_json::json!({
                "name": t.name,
                "gender": t.gender,
                "sizes": t.sizes.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
                "measurements": rule_names(t),
                "tolerance": catalog.tolerances.get(&t.name),
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_tables(catalog: &SizeCatalog, tables: &[&SizeTable]) {
    println!("name\tgender\tsizes\tmeasurements\ttolerance_down\ttolerance_up");
    for table in tables {
        let tolerance = catalog.tolerances.get(&table.name);
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            table.name,
            table.gender,
            table.sizes.len(),
            rule_names(table).join(","),
            tolerance.map_or(0.0, |t| t.down()),
            tolerance.map_or(0.0, |t| t.up()),
        );
    }
}
