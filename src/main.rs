use clap::Parser;
use miette::Result;
use swatch::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Colors(args) => swatch::cli::colors::run(args)?,
        Commands::Images(args) => swatch::cli::images::run(args)?,
        Commands::Variables(args) => swatch::cli::variables::run(args)?,
        Commands::Dimensions(args) => swatch::cli::dimensions::run(args)?,
        Commands::Completions(args) => swatch::cli::completions::run(args)?,
    }

    Ok(())
}
