//! Command-line interface for size-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **recommend**: Rank the sizes of every table for a set of measurements
//! - **tables**: List or export the size tables of the catalog
//! - **link**: Print the detail page path of a size table
//!
//! ## Usage
//!
//! ```text
//! # Recommend sizes from measurements in centimetres
//! size-solver recommend --gender male --height 180 --chest 100 --waist 88
//!
//! # Read the measurements from a JSON form dump
//! size-solver recommend --input measurements.json --format json
//!
//! # Only the best acceptable size per table
//! size-solver recommend --gender female --hip 98 --acceptable-only -n 1
//!
//! # List the tables of a custom catalog
//! size-solver tables --catalog my_sizes.json
//! ```

use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::catalog::store::SizeCatalog;

pub mod link;
pub mod recommend;
pub mod tables;

#[derive(Parser)]
#[command(name = "size-solver")]
#[command(version)]
#[command(about = "Recommend clothing sizes from body measurements")]
#[command(
    long_about = "size-solver scores body measurements against clothing size tables.\n\nFor every table of the selected gender it ranks all sizes by deviation:\n- 0 means the measurements fit the size's ranges\n- measurements outside a range add their distance, weighted per table\n- each measurement a table needs but you did not give adds 1000"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend sizes for a set of measurements
    Recommend(recommend::RecommendArgs),

    /// List or export the size tables of the catalog
    Tables(tables::TablesArgs),

    /// Print the link to a size table's detail page
    Link(link::LinkArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load a custom catalog if a path is given, otherwise the embedded one
///
/// # Errors
///
/// Returns an error if the catalog cannot be read or is invalid.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<SizeCatalog> {
    let catalog = if let Some(path) = path {
        SizeCatalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?
    } else {
        SizeCatalog::load_embedded()?
    };

    tracing::info!(tables = catalog.len(), "Using size catalog");
    Ok(catalog)
}
