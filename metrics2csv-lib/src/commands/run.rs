//! Command dispatch logic for metrics2csv

use super::{ConvertArgs, convert};
use crate::{Host, Result};
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "metrics2csv", author, version, long_about = None)]
#[command(about = "Convert Metrics3 XML reports into semicolon-delimited CSV")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    convert: ConvertArgs,
}

/// Parse command-line arguments and run the conversion
///
/// This function is designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if any input file cannot be read or parsed, or if the output cannot be written
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);
    convert(host, &cli.convert)
}
