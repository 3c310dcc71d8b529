//! Report generation for flattened metric records
//!
//! One report format is provided: a semicolon-delimited CSV table with a fixed
//! header, produced by [`generate_csv`]. The generator operates on a slice of
//! [`MetricRecord`](crate::metrics3::MetricRecord) and writes to any
//! [`std::io::Write`] sink, so callers can buffer the whole report and write it
//! out in one go.

mod csv;

pub use csv::{COLUMNS, generate as generate_csv};
