//! gazetteer-cli — Command-line interface for gazetteer-core
//!
//! This binary runs the offline gazetteer build (two CSV sources in, one
//! sorted binary artifact out) and offers small inspection commands for
//! the produced artifact.
//!
//! Usage examples
//! --------------
//!
//! - Build the artifact from the two sources
//!   $ gazetteer build worldcities.csv uszips.csv -o data/worldcities.bin
//!
//! - Summarize an artifact
//!   $ gazetteer stats -i data/worldcities.bin
//!
//! - Peek at the first records as JSON lines
//!   $ gazetteer dump -i data/worldcities.bin -n 25
//!
//! Progress and validation errors are reported through `tracing`; set
//! RUST_LOG to change verbosity.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use gazetteer_core::{ingest, Gazetteer};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .try_init();

    let args = CliArgs::parse();

    match args.command {
        Commands::Build {
            world_cities,
            us_zips,
            output,
        } => {
            let output = output.unwrap_or_else(Gazetteer::default_artifact_path);

            let mut gazetteer = ingest::build_from_paths(&world_cities, &us_zips)?;
            gazetteer.sort();
            gazetteer.write_to_path(&output)?;

            println!("Wrote {} records to {}", gazetteer.len(), output.display());
        }

        Commands::Stats { input } => {
            let input = input.unwrap_or_else(Gazetteer::default_artifact_path);
            let gazetteer = Gazetteer::read_from_path(&input)?;
            let stats = gazetteer.stats();

            println!("Gazetteer statistics:");
            println!("  Records: {}", stats.records);
            println!("  US zip codes: {}", stats.zip_codes);
            println!("  World cities: {}", stats.cities);
            println!("  National capitals: {}", stats.primary_capitals);
            println!("  Admin capitals: {}", stats.admin_capitals);
            println!("  Minor capitals: {}", stats.minor_capitals);
        }

        #[cfg(feature = "json")]
        Commands::Dump { input, limit } => {
            let input = input.unwrap_or_else(Gazetteer::default_artifact_path);
            let gazetteer = Gazetteer::read_from_path(&input)?;

            for line in gazetteer.json_lines(limit)? {
                println!("{line}");
            }
        }
    }

    Ok(())
}
