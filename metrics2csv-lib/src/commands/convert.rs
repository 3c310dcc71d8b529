use super::Host;
use crate::Result;
use crate::metrics3::{MetricRecord, parse_file};
use crate::reports::generate_csv;
use camino::Utf8PathBuf;
use clap::Args;
use ohno::IntoAppError;
use std::fs;
use std::io::Write;

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Path for the CSV output (overwritten if it exists)
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Utf8PathBuf,

    /// Metrics3 XML files to convert, in the order their rows should appear
    #[arg(long, short = 'f', value_name = "PATH", num_args = 1.., required = true)]
    pub files: Vec<Utf8PathBuf>,
}

/// Initialize logging, honoring `RUST_LOG` and falling back to warnings only
fn init_logging() {
    let env = env_logger::Env::default().filter_or("RUST_LOG", "warn");

    // A logger may already be installed when converting more than once in the same process
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();
}

/// Parses every input file, then renders and writes the CSV in one go.
///
/// Nothing is written unless every input parses, so a failure never leaves a partial report behind.
fn convert_inner(args: &ConvertArgs) -> Result<usize> {
    let mut records = Vec::new();
    for path in &args.files {
        records.extend(parse_file(path)?);
    }

    let row_count: usize = records.iter().map(MetricRecord::row_count).sum();

    let mut csv_output = Vec::new();
    generate_csv(&records, &mut csv_output)?;
    fs::write(&args.output, csv_output).into_app_err_with(|| format!("writing CSV output to '{}'", args.output))?;

    log::info!("Wrote {row_count} row(s) from {} metric record(s) to '{}'", records.len(), args.output);
    Ok(row_count)
}

pub fn convert<H: Host>(host: &mut H, args: &ConvertArgs) -> Result<()> {
    init_logging();

    match convert_inner(args) {
        Ok(row_count) => {
            let _ = writeln!(
                host.output(),
                "Wrote {row_count} rows from {} file(s) to {}",
                args.files.len(),
                args.output
            );
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Conversion failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}
