//! CSV and JSON export of close-approach records.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{NeoError, Result};
use crate::model::ApproachRecord;

/// Column order of the CSV export.
pub const CSV_HEADER: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

/// Export format, chosen from the output file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    /// Format for a path, by extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(OutputFormat::Csv),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Write records to `path`, picking the format from its extension.
pub fn write_records(records: &[ApproachRecord], path: impl AsRef<Path>) -> Result<OutputFormat> {
    let path = path.as_ref();
    let format = OutputFormat::from_path(path).ok_or_else(|| {
        NeoError::Output(format!(
            "cannot infer output format from '{}' (use .csv or .json)",
            path.display()
        ))
    })?;

    let writer = create(path)?;
    match format {
        OutputFormat::Csv => write_csv(writer, records)?,
        OutputFormat::Json => write_json(writer, records)?,
    }
    Ok(format)
}

/// Write records as CSV with [`CSV_HEADER`].
///
/// Missing names are written as empty strings and unknown diameters as `nan`.
pub fn write_csv<W: Write>(writer: W, records: &[ApproachRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(CSV_HEADER)?;

    for record in records {
        writer.write_record([
            record.datetime_utc.clone(),
            float_cell(record.distance_au),
            float_cell(record.velocity_km_s),
            record.neo.designation.clone(),
            record.neo.name.clone().unwrap_or_default(),
            float_cell(record.neo.diameter_km),
            bool_cell(record.neo.potentially_hazardous).to_string(),
        ])?;
    }

    writer
        .flush()
        .map_err(|e| NeoError::Output(format!("Failed to flush CSV output: {}", e)))
}

/// Write records as a pretty-printed JSON array.
pub fn write_json<W: Write>(mut writer: W, records: &[ApproachRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| NeoError::Output(format!("Failed to write JSON output: {}", e)))
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                NeoError::Output(format!(
                    "Failed to create directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(path).map_err(|e| {
        NeoError::Output(format!("Failed to create file '{}': {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

fn float_cell(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{:?}", value)
    }
}

fn bool_cell(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}
