// crates/gazetteer-core/src/lib.rs

//! # gazetteer-core
//!
//! Builds a canonical, sorted gazetteer of world cities and United States
//! postal codes from two CSV sources and serializes it into a compact
//! binary artifact.
//!
//! The pipeline is a one-shot batch job with three stages, each owning the
//! collection exclusively before handing it on:
//!
//! 1. [`ingest::build_from_paths`] validates both sources row by row and
//!    merges the surviving records into one [`Gazetteer`].
//! 2. [`Gazetteer::sort`] imposes the final total order.
//! 3. [`Gazetteer::write_to_path`] encodes the ordered records to disk.
//!
//! Validation failures are collected exhaustively per source and reported
//! before the run aborts; a run that fails never writes an artifact.

pub mod codec;
pub mod error;
pub mod ingest;
pub mod model;
pub mod states;

// Re-exports
pub use crate::error::{DecodeError, GazetteerError, Result, ValidationError};
pub use crate::model::{CapitalStatus, CityRecord, Gazetteer, GazetteerStats};
