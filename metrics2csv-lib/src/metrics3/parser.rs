use super::record::MetricRecord;
use super::sanitize::sanitize;
use super::walker::flatten;
use crate::Result;
use camino::Utf8Path;
use ohno::IntoAppError;
use roxmltree::{Document, ParsingOptions};
use std::fs;

/// Sanitizes and parses the text of one report, returning its flattened records.
fn parse_str(raw: &str) -> core::result::Result<Vec<MetricRecord>, roxmltree::Error> {
    let text = sanitize(raw);
    log::debug!("Sanitized report text from {} to {} bytes", raw.len(), text.len());

    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(&text, options)?;
    Ok(flatten(&doc))
}

/// Reads, sanitizes, and parses one report file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold well-formed XML after sanitizing
pub fn parse_file(path: &Utf8Path) -> Result<Vec<MetricRecord>> {
    let raw = fs::read_to_string(path).into_app_err_with(|| format!("reading metrics file '{path}'"))?;
    let records = parse_str(&raw).into_app_err_with(|| format!("parsing metrics file '{path}'"))?;

    log::info!("Parsed {} metric record(s) from '{path}'", records.len());
    Ok(records)
}
