//! Catalog entries for near-Earth objects.

use std::fmt;
use std::num::ParseFloatError;

use super::ApproachId;

/// A near-Earth object from the catalog.
///
/// The designation is the only required field. Names and diameters are missing
/// for most of the catalog, and the hazard flag collapses "no" and "unknown"
/// into `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialObject {
    designation: String,
    name: Option<String>,
    diameter: Option<f64>,
    hazardous: bool,
    approaches: Vec<ApproachId>,
}

impl CelestialObject {
    /// Create an object with no linked approaches.
    pub fn new(
        designation: impl Into<String>,
        name: Option<String>,
        diameter: Option<f64>,
        hazardous: bool,
    ) -> Self {
        Self {
            designation: designation.into(),
            name: name.filter(|n| !n.is_empty()),
            diameter,
            hazardous,
            approaches: Vec::new(),
        }
    }

    /// Primary designation.
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// IAU name, if the object has one. Never empty.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Diameter in kilometers, if measured.
    pub fn diameter(&self) -> Option<f64> {
        self.diameter
    }

    /// Whether the catalog marks the object as potentially hazardous.
    pub fn hazardous(&self) -> bool {
        self.hazardous
    }

    /// `"{designation} ({name})"`, or the bare designation when unnamed.
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }

    /// Diameter in kilometers, NaN when unknown.
    pub fn diameter_km(&self) -> f64 {
        self.diameter.unwrap_or(f64::NAN)
    }

    /// Handles of linked close approaches, in source order.
    pub fn approaches(&self) -> &[ApproachId] {
        &self.approaches
    }

    pub(crate) fn push_approach(&mut self, id: ApproachId) {
        self.approaches.push(id);
    }
}

impl fmt::Display for CelestialObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hazard = if self.hazardous { "is" } else { "is not" };
        match self.diameter {
            Some(d) => write!(
                f,
                "NEO {} has a diameter of {:.3} km and {} potentially hazardous.",
                self.fullname(),
                d,
                hazard
            ),
            None => write!(
                f,
                "NEO {} has an unknown diameter and {} potentially hazardous.",
                self.fullname(),
                hazard
            ),
        }
    }
}

/// Empty source names mean the object is unnamed.
pub fn normalize_name(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Only the exact literal `"Y"` marks an object as hazardous.
pub fn parse_hazard(raw: &str) -> bool {
    raw == "Y"
}

/// Empty or whitespace-only diameters are unknown.
pub fn parse_diameter(raw: &str) -> Result<Option<f64>, ParseFloatError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<f64>().map(Some)
}
