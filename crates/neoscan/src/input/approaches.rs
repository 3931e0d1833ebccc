//! Close-approach loader.
//!
//! The source is a JSON document with a `fields` array naming the columns and a
//! `data` array of fixed-width rows. Only four columns are read, by fixed
//! position in the upstream close-approach schema:
//!
//! | position | field   | meaning                        |
//! |----------|---------|--------------------------------|
//! | 0        | `des`   | primary designation            |
//! | 3        | `cd`    | approach time, `YYYY-Mon-DD HH:MM` |
//! | 4        | `dist`  | nominal distance, au           |
//! | 7        | `v_rel` | relative velocity, km/s        |
//!
//! The declared field list is only checked against these names; it is never
//! used to look positions up.

use std::borrow::Cow;
use std::io::Read;

use serde::Deserialize;
use serde_json::Value;

use super::loader::LoaderConfig;
use crate::error::{NeoError, Result};
use crate::model::ApproachEvent;
use crate::time;

/// Position of the designation column.
pub const DESIGNATION_POS: usize = 0;
/// Position of the approach time column.
pub const TIME_POS: usize = 3;
/// Position of the distance column.
pub const DISTANCE_POS: usize = 4;
/// Position of the relative velocity column.
pub const VELOCITY_POS: usize = 7;

/// Names of the projected columns, in projection order.
pub const PROJECTED_FIELDS: [&str; 4] = ["des", "cd", "dist", "v_rel"];

const PROJECTED_POSITIONS: [usize; 4] = [DESIGNATION_POS, TIME_POS, DISTANCE_POS, VELOCITY_POS];

/// Minimum number of cells a row must have.
pub const MIN_ROW_WIDTH: usize = VELOCITY_POS + 1;

#[derive(Debug, Deserialize)]
struct ApproachDocument {
    #[serde(default)]
    fields: Option<Vec<String>>,
    #[serde(default)]
    data: Option<Vec<Value>>,
}

/// Read close approaches from any reader.
///
/// Rows are numbered from 1. Either every row is converted or an error is
/// returned.
pub fn read_approaches<R: Read>(reader: R, config: &LoaderConfig) -> Result<Vec<ApproachEvent>> {
    let document: ApproachDocument = serde_json::from_reader(reader)?;

    if config.verify_fields {
        let fields = document
            .fields
            .as_deref()
            .ok_or_else(|| NeoError::source_format("approach source has no 'fields' array"))?;
        verify_fields(fields)?;
    }

    let rows = document
        .data
        .ok_or_else(|| NeoError::source_format("approach source has no 'data' array"))?;

    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            let row_number = idx + 1;
            match row {
                Value::Array(cells) => build_event(cells, row_number),
                other => Err(NeoError::source_format(format!(
                    "row {} is not an array: {}",
                    row_number, other
                ))),
            }
        })
        .collect()
}

/// Check that the declared field list names the projected columns at their
/// fixed positions.
pub fn verify_fields(fields: &[String]) -> Result<()> {
    for (pos, expected) in PROJECTED_POSITIONS.iter().zip(PROJECTED_FIELDS) {
        match fields.get(*pos) {
            Some(actual) if actual == expected => {}
            Some(actual) => {
                return Err(NeoError::source_format(format!(
                    "expected field '{}' at position {}, found '{}'",
                    expected, pos, actual
                )));
            }
            None => {
                return Err(NeoError::source_format(format!(
                    "field list has {} entries, expected '{}' at position {}",
                    fields.len(),
                    expected,
                    pos
                )));
            }
        }
    }
    Ok(())
}

fn build_event(row: &[Value], row_number: usize) -> Result<ApproachEvent> {
    if row.len() < MIN_ROW_WIDTH {
        return Err(NeoError::source_format(format!(
            "row {} has {} values, expected at least {}",
            row_number,
            row.len(),
            MIN_ROW_WIDTH
        )));
    }

    let designation = cell(row, DESIGNATION_POS, row_number)?;
    if designation.is_empty() {
        return Err(NeoError::Value {
            row: row_number,
            field: field_name(DESIGNATION_POS).to_string(),
            value: String::new(),
            message: "designation is required".to_string(),
        });
    }
    let time = time::parse(&cell(row, TIME_POS, row_number)?)?;
    let distance = number(row, DISTANCE_POS, row_number)?;
    let velocity = number(row, VELOCITY_POS, row_number)?;

    Ok(ApproachEvent::new(designation, time, distance, velocity))
}

/// Text of a scalar cell. Strings and numbers are accepted; `null` is absent.
fn cell(row: &[Value], pos: usize, row_number: usize) -> Result<Cow<'_, str>> {
    match &row[pos] {
        Value::String(s) => Ok(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Ok(Cow::Owned(n.to_string())),
        Value::Null => Err(NeoError::source_format(format!(
            "row {} is missing '{}' at position {}",
            row_number,
            field_name(pos),
            pos
        ))),
        other => Err(NeoError::source_format(format!(
            "row {} has non-scalar '{}' at position {}: {}",
            row_number,
            field_name(pos),
            pos,
            other
        ))),
    }
}

fn number(row: &[Value], pos: usize, row_number: usize) -> Result<f64> {
    let raw = cell(row, pos, row_number)?;
    raw.trim().parse::<f64>().map_err(|e| NeoError::Value {
        row: row_number,
        field: field_name(pos).to_string(),
        value: raw.to_string(),
        message: e.to_string(),
    })
}

fn field_name(pos: usize) -> &'static str {
    PROJECTED_POSITIONS
        .iter()
        .position(|p| *p == pos)
        .map(|i| PROJECTED_FIELDS[i])
        .unwrap_or("?")
}
