//! `expand-image` — expand an image to a target aspect ratio by padding
//! the sides with a solid color.
//!
//! Thin wrapper around the `expand-engine` crate: argument parsing, the
//! input-existence check, logging setup, and exit codes live here.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use expand_engine::{DEFAULT_SOURCE_RATIO, DEFAULT_TARGET_RATIO, ExpandOptions, PaddingColor};

/// Expand an image to a target aspect ratio with solid-color side padding
#[derive(Parser)]
#[command(name = "expand-image")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input image path
    input: PathBuf,

    /// Output image path (default: adds '_expanded' suffix to the input filename)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Padding color
    #[arg(short, long, default_value = "black", value_parser = ["black", "white"])]
    color: String,

    /// Target aspect ratio width:height
    #[arg(short, long, default_value_t = DEFAULT_TARGET_RATIO)]
    target_ratio: f64,

    /// Source aspect ratio width:height (recorded, not used by the computation)
    #[arg(short, long, default_value_t = DEFAULT_SOURCE_RATIO)]
    source_ratio: f64,
}

fn run(cli: &Cli) -> anyhow::Result<PathBuf> {
    let options = ExpandOptions::new()
        .with_target_ratio(cli.target_ratio)
        .with_padding_color(PaddingColor::parse(&cli.color))
        .with_source_ratio(cli.source_ratio);

    let path = expand_engine::expand_file(&cli.input, cli.output.as_deref(), &options)?;
    Ok(path)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if !cli.input.exists() {
        println!("Error: input file '{}' does not exist", cli.input.display());
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(path) => {
            println!("Saved expanded image to: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
