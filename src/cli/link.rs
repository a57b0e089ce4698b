use clap::Args;

use crate::cli::OutputFormat;
use crate::core::types::Gender;
use crate::link::build_table_link;

#[derive(Args)]
pub struct LinkArgs {
    /// Size table name (e.g., "pants")
    #[arg(required = true)]
    pub name: String,

    /// Gender the table is cut for
    #[arg(required = true, value_enum)]
    pub gender: Gender,

    /// Link to the page with deviation results shown
    #[arg(long)]
    pub details: bool,
}

/// Execute the link command
///
/// # Errors
///
/// Returns an error if JSON output cannot be serialized.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: LinkArgs, format: OutputFormat) -> anyhow::Result<()> {
    let link = build_table_link(&args.name, args.gender, args.details);

    match format {
        OutputFormat::Text | OutputFormat::Tsv => println!("{link}"),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "name": args.name,
                "gender": args.gender,
                "link": link,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
