#![deny(missing_docs)]

//! # NDC OAS CLI
//!
//! Command Line Interface for the OpenAPI to TypeScript functions generator.
//!
//! Supported Commands:
//! - `generate`: Parsed document -> classified routes + import list.
//! - `components`: Parsed document -> relaxed-type classification of schemas.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::CliResult;

mod components;
mod document;
mod error;
mod generate;

const DEFAULT_FILTER: &str = "ndc_oas=info,ndc_oas_core=info";
const VERBOSE_FILTER: &str = "ndc_oas=debug,ndc_oas_core=debug";

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI to TypeScript functions generator")]
struct Cli {
    /// Enable debug diagnostics (overridden by RUST_LOG).
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify routes and emit the functions render model.
    Generate(generate::GenerateArgs),
    /// List schema components with their relaxed-type classification.
    Components(components::ComponentsArgs),
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    if tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Generate(args) => generate::execute(args)?,
        Commands::Components(args) => components::execute(args)?,
    }

    Ok(())
}
