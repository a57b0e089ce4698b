use clap::Parser;
use tracing_subscriber::EnvFilter;

use size_solver::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("size_solver=debug,info")
    } else {
        EnvFilter::new("size_solver=warn")
    };

    // Logs go to stderr so JSON and TSV output stay machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Recommend(args) => {
            cli::recommend::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Tables(args) => {
            cli::tables::run(args, cli.format)?;
        }
        cli::Commands::Link(args) => {
            cli::link::run(args, cli.format)?;
        }
    }

    Ok(())
}
