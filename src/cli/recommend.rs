//! Recommend command - rank the sizes of every table for one person.

use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_catalog, OutputFormat};
use crate::core::measurement::Measurements;
use crate::core::types::{Gender, RuleOutcome};
use crate::link::build_table_link;
use crate::matching::engine::{MatchingConfig, MatchingEngine, Recommendation, TableMatch};
use crate::matching::scoring::SizeMatch;
use crate::parsing::input::{ClothingInput, RawValue};

/// Arguments for the recommend command
#[derive(Args)]
pub struct RecommendArgs {
    /// JSON file with the measurements and gender, as submitted by the size form
    #[arg(short, long, conflicts_with_all = ["gender", "height", "chest", "waist", "hip", "inside_leg"])]
    pub input: Option<PathBuf>,

    /// Gender to pick size tables for
    #[arg(short, long, value_enum, required_unless_present = "input")]
    pub gender: Option<Gender>,

    /// Body height in cm
    #[arg(long)]
    pub height: Option<String>,

    /// Chest circumference in cm
    #[arg(long)]
    pub chest: Option<String>,

    /// Waist circumference in cm
    #[arg(long)]
    pub waist: Option<String>,

    /// Hip circumference in cm
    #[arg(long)]
    pub hip: Option<String>,

    /// Inside leg length in cm
    #[arg(long)]
    pub inside_leg: Option<String>,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Number of sizes to show per table
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Only show sizes with an acceptable deviation
    #[arg(long)]
    pub acceptable_only: bool,

    /// Show how each measurement contributed to the deviation
    #[arg(long)]
    pub details: bool,
}

impl RecommendArgs {
    fn clothing_input(&self) -> anyhow::Result<ClothingInput> {
        if let Some(path) = &self.input {
            return ClothingInput::load_from_file(path);
        }

        let gender = self
            .gender
            .ok_or_else(|| anyhow::anyhow!("--gender is required without --input"))?;
        let raw = |value: &Option<String>| value.as_deref().map_or(RawValue::Absent, RawValue::from);

        Ok(ClothingInput::new(gender)
            .with_height(raw(&self.height))
            .with_chest(raw(&self.chest))
            .with_waist(raw(&self.waist))
            .with_hip(raw(&self.hip))
            .with_inside_leg_length(raw(&self.inside_leg)))
    }

    fn config(&self) -> MatchingConfig {
        MatchingConfig {
            limit: self.limit,
            acceptable_only: self.acceptable_only,
        }
    }
}

/// Execute the recommend command
///
/// # Errors
///
/// Returns an error if the input or catalog cannot be loaded.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: RecommendArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let input = args.clothing_input()?;
    let catalog = load_catalog(args.catalog.as_deref())?;
    let measurements = input.measurements();

    if verbose {
        eprintln!(
            "Measurements: {} of 5 usable, {} tables for {}",
            measurements.usable_count(),
            catalog.tables_for(input.gender).count(),
            input.gender,
        );
    }

    let engine = MatchingEngine::new(&catalog);
    let recommendation = engine.recommend_measurements(input.gender, &measurements);
    let config = args.config();

    match format {
        OutputFormat::Text => print_text_results(&recommendation, &config, args.details),
        OutputFormat::Json => {
            print_json_results(&recommendation, &measurements, input.gender, &config, args.details)?;
        }
        OutputFormat::Tsv => print_tsv_results(&recommendation, &config),
    }

    Ok(())
}

fn print_text_results(recommendation: &Recommendation, config: &MatchingConfig, details: bool) {
    if recommendation.sizes.is_empty() {
        println!("No size tables for this gender.");
    }

    for (i, table) in recommendation.sizes.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(60));
        }

        println!(
            "\n{} ({})  {}",
            table.name,
            table.gender,
            build_table_link(&table.name, table.gender, details)
        );

        let mut shown = 0;
        for (rank, size_match) in config.visible(table).enumerate() {
            print_size_line(rank + 1, size_match);
            if details {
                print_breakdown(size_match);
            }
            shown += 1;
        }

        if shown == 0 {
            println!("   No acceptable size.");
        }
    }

    if !recommendation.missing_measurements.is_empty() {
        println!("\nMissing measurements:");
        for (name, missing) in recommendation.missing_measurements.iter() {
            let missing: Vec<_> = missing.iter().map(ToString::to_string).collect();
            println!("   {name}: {}", missing.join(", "));
        }
    }
}

fn print_size_line(rank: usize, size_match: &SizeMatch) {
    let verdict = if size_match.is_perfect() {
        "fits"
    } else if size_match.is_acceptable() {
        "acceptable"
    } else {
        "poor fit"
    };

    println!(
        "   #{rank} {:<8} deviation {:>8.1}  {verdict}",
        size_match.size.id, size_match.deviation
    );
}

fn print_breakdown(size_match: &SizeMatch) {
    for rule in &size_match.breakdown {
        match rule.outcome {
            RuleOutcome::Fit | RuleOutcome::NotApplicable => {
                println!("        {:<20} {}", rule.measurement.as_str(), rule.outcome);
            }
            _ => println!(
                "        {:<20} {} (+{:.1})",
                rule.measurement.as_str(),
                rule.outcome,
                rule.contribution
            ),
        }
    }
}

fn table_json(table: &TableMatch, config: &MatchingConfig, details: bool) -> serde_json::Value {
    let sizes: Vec<serde_json::Value> = config
        .visible(table)
        .map(|m| {
            let mut value = serde_json::json!({
                "id": m.size.id,
                "deviation": m.deviation,
                "acceptable": m.is_acceptable(),
            });
            if details {
                value["breakdown"] = serde_json::json!(m.breakdown);
            }
            value
        })
        .collect();

    serde_json::json!({
        "name": table.name,
        "gender": table.gender,
        "link": build_table_link(&table.name, table.gender, details),
        "sizes": sizes,
    })
}

fn print_json_results(
    recommendation: &Recommendation,
    measurements: &Measurements,
    gender: Gender,
    config: &MatchingConfig,
    details: bool,
) -> anyhow::Result<()> {
    let tables: Vec<serde_json::Value> = recommendation
        .sizes
        .iter()
        .map(|t| table_json(t, config, details))
        .collect();

    let output = serde_json::json!({
        "gender": gender,
        "measurements": measurements,
        "sizes": tables,
        "missingMeasurements": recommendation.missing_measurements,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(recommendation: &Recommendation, config: &MatchingConfig) {
    println!("table\tgender\trank\tsize\tdeviation\tacceptable");
    for table in &recommendation.sizes {
        for (rank, m) in config.visible(table).enumerate() {
            println!(
                "{}\t{}\t{}\t{}\t{:.4}\t{}",
                table.name,
                table.gender,
                rank + 1,
                m.size.id,
                m.deviation,
                m.is_acceptable()
            );
        }
    }
}
