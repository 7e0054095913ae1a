use std::io::Write;

use anyhow::Result;
use lobbyview_api::types::{field, ResourceKind, Row};
use tabled::builder::Builder;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Table,
    Csv,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            "table" => OutputFormat::Table,
            "csv" => OutputFormat::Csv,
            _ => OutputFormat::Text,
        }
    }
}

pub fn print_rows(kind: ResourceKind, rows: &[Row], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", kind.render(rows)),
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Table => println!("{}", build_table(kind, rows)),
        OutputFormat::Csv => {
            let stdout = std::io::stdout();
            write_csv(stdout.lock(), rows)?;
        }
    }
    Ok(())
}

// -- Table output --

/// Tabulates the columns the text rendering shows for `kind`.
fn build_table(kind: ResourceKind, rows: &[Row]) -> String {
    let columns = kind.spec().columns;
    let mut builder = Builder::default();
    builder.push_record(columns.iter().map(|c| c.to_string()));
    for row in rows {
        builder.push_record(columns.iter().map(|c| field(row, c).into_owned()));
    }
    builder.build().to_string()
}

// -- CSV output --

/// Every key seen across `rows`, in first-seen order.
fn csv_columns(rows: &[Row]) -> Vec<&str> {
    let mut columns: Vec<&str> = Vec::new();
    for key in rows.iter().flat_map(|row| row.keys()) {
        if !columns.contains(&key.as_str()) {
            columns.push(key.as_str());
        }
    }
    columns
}

fn write_csv<W: Write>(writer: W, rows: &[Row]) -> Result<()> {
    let columns = csv_columns(rows);
    let mut wtr = csv::Writer::from_writer(writer);
    if !columns.is_empty() {
        wtr.write_record(&columns)?;
    }
    for row in rows {
        wtr.write_record(columns.iter().map(|c| field(row, c).into_owned()))?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
