//! Near-Earth-object catalog loader.
//!
//! The catalog is delimited text with a header row. Only four columns are
//! consulted; their names must match exactly.

use std::io::Read;

use csv::StringRecord;
use tracing::debug;

use super::loader::LoaderConfig;
use crate::error::{NeoError, Result};
use crate::model::{normalize_name, parse_diameter, parse_hazard, CelestialObject};

/// Primary designation column.
pub const DESIGNATION_COLUMN: &str = "pdes";
/// IAU name column.
pub const NAME_COLUMN: &str = "name";
/// Potentially-hazardous flag column.
pub const HAZARD_COLUMN: &str = "pha";
/// Diameter column, in kilometers.
pub const DIAMETER_COLUMN: &str = "diameter";

/// Columns consulted by the loader, in the order they are resolved.
pub const CATALOG_COLUMNS: [&str; 4] =
    [DESIGNATION_COLUMN, NAME_COLUMN, HAZARD_COLUMN, DIAMETER_COLUMN];

/// Header positions of the consulted columns.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    designation: usize,
    name: usize,
    hazard: usize,
    diameter: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let find = |column: &str| {
            headers.iter().position(|h| h == column).ok_or_else(|| {
                NeoError::source_format(format!("catalog is missing required column '{}'", column))
            })
        };

        Ok(Self {
            designation: find(DESIGNATION_COLUMN)?,
            name: find(NAME_COLUMN)?,
            hazard: find(HAZARD_COLUMN)?,
            diameter: find(DIAMETER_COLUMN)?,
        })
    }

    /// Build one object from a record. Cells past the end of a short record
    /// are treated as empty.
    fn build(&self, record: &StringRecord, row: usize) -> Result<CelestialObject> {
        let cell = |index: usize| record.get(index).unwrap_or("");

        let designation = cell(self.designation);
        if designation.is_empty() {
            return Err(NeoError::Value {
                row,
                field: DESIGNATION_COLUMN.to_string(),
                value: String::new(),
                message: "designation is required".to_string(),
            });
        }

        let raw_diameter = cell(self.diameter);
        let diameter = parse_diameter(raw_diameter).map_err(|e| NeoError::Value {
            row,
            field: DIAMETER_COLUMN.to_string(),
            value: raw_diameter.to_string(),
            message: e.to_string(),
        })?;

        Ok(CelestialObject::new(
            designation,
            normalize_name(cell(self.name)),
            diameter,
            parse_hazard(cell(self.hazard)),
        ))
    }
}

/// Read catalog records from any reader.
///
/// Rows are numbered from 1, not counting the header. Either every row is
/// converted or an error is returned.
pub fn read_catalog<R: Read>(reader: R, config: &LoaderConfig) -> Result<Vec<CelestialObject>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .quote(config.quote)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = ColumnIndex::resolve(reader.headers()?)?;
    debug!(?columns, "Resolved catalog columns");

    let mut neos = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        neos.push(columns.build(&record, idx + 1)?);
    }

    Ok(neos)
}
