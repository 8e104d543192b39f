/*
This code is part of the region_merge geospatial utility.
Created: 23/08/2026
License: MIT
*/
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Merges the Israel and Palestine features of a GeoJSON FeatureCollection
/// into a single Palestine feature, writing the result to a new file.
#[derive(Parser)]
#[command(name = "region_merge", version)]
struct Args {
    /// Input GeoJSON FeatureCollection
    input: PathBuf,

    /// Destination path for the merged collection
    output: PathBuf,

    /// Print stage-by-stage progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match region_merge::run(&args.input, &args.output) {
        Ok(()) => {
            println!(
                "Successfully merged regions. Output saved to {}",
                args.output.display()
            );
        }
        Err(e) => {
            eprintln!("Error processing GeoJSON file: {e}");
            process::exit(1);
        }
    }
}
