//! Export records for close approaches.
//!
//! These structs are the boundary consumed by the CSV and JSON writers. Key
//! names and nesting are fixed.

use serde::Serialize;

/// A close approach together with the object that made it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApproachRecord {
    /// Approach time as `YYYY-MM-DD HH:MM`.
    pub datetime_utc: String,
    /// Nominal approach distance in astronomical units.
    pub distance_au: f64,
    /// Relative approach velocity in km/s.
    pub velocity_km_s: f64,
    /// The approaching object.
    pub neo: NeoRecord,
}

/// The object half of an [`ApproachRecord`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeoRecord {
    pub designation: String,
    pub name: Option<String>,
    /// NaN when unknown; serializes to JSON `null`.
    pub diameter_km: f64,
    pub potentially_hazardous: bool,
}
