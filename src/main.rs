//! tv-placeholder - generates the TV placeholder image.

mod adapters;
mod cli;
mod config;
mod error;
mod font;
mod generator;
mod output;
mod ports;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::Level;

use crate::cli::Cli;
use crate::config::{process_env, Config};
use crate::error::PlaceholderError;
use crate::generator::{GenerationReport, PlaceholderGenerator};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();

    match run(&cli) {
        Ok(report) => {
            println!("Placeholder image created: {} ({})", report.path.display(), report.font);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<GenerationReport, PlaceholderError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref(), process_env);
    let config = Config::load(&config_path).map_err(PlaceholderError::Config)?;
    tracing::debug!(config = %config_path.display(), "loaded configuration");

    // CLI flags win over environment and config file
    let output =
        cli.output.as_ref().map_or_else(|| config.output_path(process_env), PathBuf::from);
    let font_name = cli.font.clone().unwrap_or_else(|| config.font_name(process_env));

    PlaceholderGenerator::new(font_name, output).generate()
}
