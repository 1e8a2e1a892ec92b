use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for gazetteer-cli
#[derive(Debug, Parser)]
#[command(
    name = "gazetteer",
    version,
    about = "Builds and inspects the binary gazetteer of world cities and US zip codes"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the full pipeline: validate, merge, sort and encode
    Build {
        /// Path to the world-cities CSV (11 columns, header row)
        world_cities: PathBuf,

        /// Path to the US zip-codes CSV (18 columns, header row)
        us_zips: PathBuf,

        /// Where to write the artifact (default: data/worldcities.bin)
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },

    /// Show a summary of an encoded artifact
    Stats {
        /// Path to the artifact (default: data/worldcities.bin)
        #[arg(short = 'i', long = "input")]
        input: Option<PathBuf>,
    },

    /// Print the first records of an artifact as JSON lines
    #[cfg(feature = "json")]
    Dump {
        /// Path to the artifact (default: data/worldcities.bin)
        #[arg(short = 'i', long = "input")]
        input: Option<PathBuf>,

        /// How many records to print
        #[arg(short = 'n', long = "limit", default_value_t = 10)]
        limit: usize,
    },
}
