// crates/gazetteer-core/src/ingest/mod.rs

//! # Ingestion
//!
//! Drives the two row validators over their CSV sources, in source order,
//! and merges the emitted records into one [`Gazetteer`].
//!
//! Error policy: validation failures are collected per source and never
//! abort mid-source. Once a source is exhausted, every collected error is
//! logged and the run fails with the first one. A source 1 failure means
//! source 2 is never started.

use crate::error::{GazetteerError, Result, ValidationError};
use crate::model::Gazetteer;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{error, info};

mod us_zips;
mod world_cities;

const PROGRESS_INTERVAL: usize = 10_000;

/// Validates one data row, appending records on success or errors on
/// failure. `line` is the 1-based data-row number (header excluded).
type RowValidator = fn(&[String], usize, &mut Gazetteer, &mut Vec<ValidationError>);

/// Builds the merged gazetteer from the two CSV source files.
///
/// Source 1 is the world-cities table (11 columns), source 2 the US
/// zip-codes table (18 columns). The returned gazetteer is in emission
/// order; callers run [`Gazetteer::sort`] before encoding.
pub fn build_from_paths(world_cities: &Path, us_zips: &Path) -> Result<Gazetteer> {
    let world = open_source(world_cities)?;
    let zips = open_source(us_zips)?;
    build_from_readers(world, zips)
}

/// Same as [`build_from_paths`] but over arbitrary readers.
pub fn build_from_readers<W: Read, Z: Read>(world_cities: W, us_zips: Z) -> Result<Gazetteer> {
    let mut gazetteer = Gazetteer::new();
    run_source(
        world_cities,
        "world cities",
        world_cities::validate_row,
        &mut gazetteer,
    )?;
    run_source(us_zips, "US zip codes", us_zips::validate_row, &mut gazetteer)?;
    Ok(gazetteer)
}

fn open_source(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        GazetteerError::NotFound(format!("Source not found at {}: {}", path.display(), e))
    })?;
    Ok(BufReader::new(file))
}

fn run_source<R: Read>(
    source: R,
    label: &str,
    validate: RowValidator,
    gazetteer: &mut Gazetteer,
) -> Result<()> {
    info!("Reading {label}...");

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let mut errors: Vec<ValidationError> = Vec::new();
    let mut line = 0usize;
    for record in reader.records() {
        let record = record?;
        line += 1;
        let row: Vec<String> = record.iter().map(str::to_string).collect();
        validate(&row, line, gazetteer, &mut errors);

        if line % PROGRESS_INTERVAL == 0 {
            info!("{} {label} rows", with_commas(line));
        }
    }

    if !errors.is_empty() {
        error!("{label} parse error(s):");
        for e in &errors {
            error!("{e}");
        }
        return Err(errors.swap_remove(0).into());
    }

    info!("DONE Reading {} {label} rows", with_commas(line));
    Ok(())
}

/// Positional column access. Short rows read as empty fields; the
/// population column is exempt from this and checked for presence by the
/// validators, since an absent population is a hard error.
fn field(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// Shared population rule: only the integer part before the first `.`
/// counts. An empty integer part is the tolerated `-1` sentinel; a
/// non-empty, non-integer part is a validation failure (`None`).
/// Callers look the column up with `get`, so a row without the column
/// fails the same way.
fn parse_population(raw: &str) -> Option<i64> {
    let integral = raw.split('.').next().unwrap_or("");
    if integral.is_empty() {
        Some(-1)
    } else {
        integral.parse().ok()
    }
}

/// Thousands-grouped row counts for progress messages.
fn with_commas(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
