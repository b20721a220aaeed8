//! CLI argument parsing with clap.

use clap::Parser;

/// Generate the TV placeholder image: a gray square with a centered label.
#[derive(Parser, Debug)]
#[command(name = "tv-placeholder", version, about)]
pub struct Cli {
    /// Output PNG path (overrides config and `TV_PLACEHOLDER_OUTPUT`).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Font file name or path to try before the built-in font.
    #[arg(short, long)]
    pub font: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}
