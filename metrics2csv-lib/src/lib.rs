#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for metrics2csv
//!
//! This library holds all functionality for the metrics2csv tool, which flattens
//! Metrics3 XML reports into a semicolon-delimited CSV table.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`metrics3`]: Sanitizing, parsing, and flattening Metrics3 XML documents
//! - [`reports`]: CSV rendering of flattened metric records

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod metrics3;
#[cfg(not(any(debug_assertions, test)))]
mod metrics3;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

pub use crate::commands::{Host, run};
