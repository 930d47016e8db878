use std::fmt::{Display, Formatter, Result as FmtResult};
use std::process;
use std::str::FromStr;

use crate::output::{self, Listing, OutputError, Record};

/// Output format for `list` and `show` results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// A boxed ASCII table.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
    /// Bare cell values.
    Value,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "value" => Ok(OutputFormat::Value),
            _ => Err(format!(
                "Unknown output format '{}': expected table, json, yaml or value",
                s
            )),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Value => write!(f, "value"),
        }
    }
}

/// Exits the program with an error message and usage information
pub fn exit_with_usage_error(message: &str, usage: &str) -> ! {
    eprintln!("Error: {}", message);
    eprintln!("{}", usage);
    process::exit(1);
}

/// Prints a formatted success message
pub fn print_success(message: &str) {
    println!("{}", message);
}

/// Prints a listing in the requested format.  Nothing is printed for an empty rendering.
pub fn print_listing(listing: &Listing, format: OutputFormat) -> Result<(), OutputError> {
    let text = output::render_listing(listing, format)?;
    if !text.is_empty() {
        println!("{}", text);
    }
    Ok(())
}

/// Prints a record in the requested format.
pub fn print_record(record: &Record, format: OutputFormat) -> Result<(), OutputError> {
    println!("{}", output::render_record(record, format)?);
    Ok(())
}
