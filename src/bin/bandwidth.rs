use anyhow::{Context, Result};
use bandwidth_analyzer::calculator::{CalculationInput, CalculationReport};
use bandwidth_analyzer::cli::{Config, Reporter};
use bandwidth_analyzer::logging::init_logging_with_config;
use clap::Parser;
use colored::*;
use tracing::{debug, error};

fn main() {
    let config = Config::parse();

    init_logging_with_config(&config.log_level, config.is_json_logging());

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    if let Err(e) = run(&config) {
        error!(error = %e, "Calculation failed");
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let request = config.request();
    debug!(?request, "Scenario parsed from command line");

    let input = CalculationInput::try_from(request).context("invalid scenario")?;
    let report = CalculationReport::new(input);

    Reporter
        .print_results(&report, config.is_json_output())
        .context("failed to render results")?;
    Ok(())
}
