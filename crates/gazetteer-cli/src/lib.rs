//! gazetteer-cli
//! =============
//!
//! Command-line interface for the `gazetteer-core` build pipeline.
//!
//! This crate primarily provides a binary (`gazetteer-cli`). We include a
//! small library target so that docs.rs renders a documentation page and
//! shows this overview.
//!
//! Basic usage:
//!
//! ```text
//! gazetteer-cli --help
//! gazetteer-cli build worldcities.csv uszips.csv
//! gazetteer-cli stats
//! ```
//!
//! For programmatic access to the pipeline, use the `gazetteer-core`
//! crate directly.

// This library target intentionally exposes no API; the binary is the
// primary deliverable.
