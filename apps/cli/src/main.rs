//! vsgen - CodeSystem / flat code list to ValueSet converter
//!
//! Reads one input file, converts it, and prints the ValueSet to stdout or
//! writes it to `--output`. Nothing is written when conversion fails.

mod cli;
mod logging;
mod output;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use vsgen_convert::convert_file;

fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init_logging(&cli.log_level, cli.log_json).context("Failed to initialize logging")?;

    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let input = cli.input();
    let options = cli.convert_options();

    let value_set = convert_file(input, &options)
        .with_context(|| format!("Failed to convert {}", input.display()))?;
    let document = value_set
        .to_pretty_json()
        .context("Failed to serialize ValueSet")?;

    let target = cli.output_target();
    output::write_document(&target, &document)?;

    tracing::info!(
        input = %input.display(),
        output = %target,
        groups = value_set.includes().len(),
        concepts = value_set.concept_count(),
        "ValueSet written"
    );
    Ok(())
}
