//! # Tabular Output
//!
//! Commands hand back display shapes rather than printing: a [`Listing`] (many rows under one
//! header) or a [`Record`] (one object, field by field).  The renderers here turn either shape
//! into text for the selected [`OutputFormat`].

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value;

use crate::cli_utils::OutputFormat;
use crate::{Contract, ContractField};

/// Many rows under one header, as produced by `contract list`.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    /// Column headings, in display order.
    pub columns: Vec<&'static str>,
    /// One entry per row; each has exactly `columns.len()` values.
    pub rows: Vec<Vec<Value>>,
}

/// A single object, as produced by `contract show`.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Field names, in display order.
    pub columns: Vec<&'static str>,
    /// One value per field.
    pub values: Vec<Value>,
}

impl Listing {
    /// Projects `contracts` onto `fields`, headed by the fields' labels.
    pub fn from_contracts(contracts: &[Contract], fields: &[ContractField]) -> Self {
        Self {
            columns: fields.iter().map(|f| f.label()).collect(),
            rows: contracts.iter().map(|c| c.project(fields)).collect(),
        }
    }
}

impl Record {
    /// Projects `contract` onto `fields`, keyed by the fields' names.
    pub fn from_contract(contract: &Contract, fields: &[ContractField]) -> Self {
        Self {
            columns: fields.iter().map(|f| f.name()).collect(),
            values: contract.project(fields),
        }
    }
}

/////////////////////////////////////////// Serialization //////////////////////////////////////////////

// serde_json::Map sorts its keys; these impls keep the column order instead.

struct Row<'a> {
    columns: &'a [&'static str],
    values: &'a [Value],
}

impl Serialize for Row<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, value) in self.columns.iter().zip(self.values) {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

impl Serialize for Listing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for values in &self.rows {
            seq.serialize_element(&Row {
                columns: &self.columns,
                values,
            })?;
        }
        seq.end()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Row {
            columns: &self.columns,
            values: &self.values,
        }
        .serialize(serializer)
    }
}

////////////////////////////////////////////// Rendering ///////////////////////////////////////////////

/// A structured format failed to serialize.
#[derive(Debug)]
pub enum OutputError {
    /// JSON serialization failed.
    Json(serde_json::Error),
    /// YAML serialization failed.
    Yaml(serde_yml::Error),
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(e) => write!(f, "Failed to format JSON: {}", e),
            Self::Yaml(e) => write!(f, "Failed to format YAML: {}", e),
        }
    }
}

impl std::error::Error for OutputError {}

fn render_structured<T>(value: &T, format: OutputFormat) -> Result<String, OutputError>
where
    T: Serialize,
{
    match format {
        OutputFormat::Yaml => serde_yml::to_string(value)
            .map(|s| s.trim_end().to_string())
            .map_err(OutputError::Yaml),
        _ => serde_json::to_string_pretty(value).map_err(OutputError::Json),
    }
}

/// Renders a listing in `format`.  The value format puts one row per line, cells separated
/// by tabs.
pub fn render_listing(listing: &Listing, format: OutputFormat) -> Result<String, OutputError> {
    match format {
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = listing
                .rows
                .iter()
                .map(|row| row.iter().map(cell_text).collect())
                .collect();
            Ok(render_table(&listing.columns, &rows))
        }
        OutputFormat::Value => Ok(listing
            .rows
            .iter()
            .map(|row| row.iter().map(cell_text).collect::<Vec<_>>().join("\t"))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json | OutputFormat::Yaml => render_structured(listing, format),
    }
}

/// Renders a record in `format`.  Tables show one "Field | Value" line per field.
pub fn render_record(record: &Record, format: OutputFormat) -> Result<String, OutputError> {
    match format {
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = record
                .columns
                .iter()
                .zip(&record.values)
                .map(|(column, value)| vec![column.to_string(), cell_text(value)])
                .collect();
            Ok(render_table(&["Field", "Value"], &rows))
        }
        OutputFormat::Value => Ok(record
            .values
            .iter()
            .map(cell_text)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json | OutputFormat::Yaml => render_structured(record, format),
    }
}

/// Strings print verbatim, null prints empty, anything else prints as compact JSON.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn render_table(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");
    let border = format!("+{}+", border);

    let mut lines = vec![border.clone()];
    lines.push(table_line(header.iter().copied(), &widths));
    lines.push(border.clone());
    if !rows.is_empty() {
        for row in rows {
            lines.push(table_line(row.iter().map(String::as_str), &widths));
        }
        lines.push(border);
    }
    lines.join("\n")
}

fn table_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width - cell.chars().count();
            format!(" {}{} ", cell, " ".repeat(pad))
        })
        .collect();
    format!("|{}|", padded.join("|"))
}
