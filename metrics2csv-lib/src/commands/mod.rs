//! Command-line interface and orchestration for metrics2csv
//!
//! This module implements the CLI and drives the conversion from Metrics3 XML
//! reports to a single CSV file. It handles argument parsing, logging setup, and
//! the end-to-end workflow.
//!
//! # Execution Flow
//!
//! The `run` function parses command-line arguments using clap and hands them to
//! `convert`, which:
//!
//! 1. Reads, sanitizes, and parses every input file, in the order given
//! 2. Renders the collected records into one CSV buffer
//! 3. Writes the buffer to the output path in a single write
//!
//! Any failure aborts the whole run before the output file is touched.

mod convert;
mod host;
mod run;

pub use convert::{ConvertArgs, convert};
pub use host::Host;
pub use run::run;
