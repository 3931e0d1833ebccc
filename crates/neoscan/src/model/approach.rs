//! Close approaches of near-Earth objects to Earth.

use std::fmt;

use chrono::NaiveDateTime;

use super::record::{ApproachRecord, NeoRecord};
use super::{CelestialObject, NeoId};
use crate::time;

/// A single close approach to Earth.
///
/// Events are built unlinked. The designation is kept after linking so the
/// event can still describe itself without its object.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproachEvent {
    designation: String,
    time: NaiveDateTime,
    distance: f64,
    velocity: f64,
    neo: Option<NeoId>,
}

impl ApproachEvent {
    /// Create an unlinked approach.
    pub fn new(
        designation: impl Into<String>,
        time: NaiveDateTime,
        distance: f64,
        velocity: f64,
    ) -> Self {
        Self {
            designation: designation.into(),
            time,
            distance,
            velocity,
            neo: None,
        }
    }

    /// Designation of the approaching object.
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// Time of closest approach, UTC, minute precision.
    pub fn time(&self) -> NaiveDateTime {
        self.time
    }

    /// Nominal approach distance in astronomical units.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Relative approach velocity in km/s.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Handle of the linked object, `None` until linking.
    pub fn neo(&self) -> Option<NeoId> {
        self.neo
    }

    /// Approach time as `YYYY-MM-DD HH:MM`.
    pub fn time_str(&self) -> String {
        time::format(&self.time)
    }

    /// Build the export record for this approach and `neo`.
    ///
    /// The object is taken as given; callers pass the object this approach
    /// is linked to. [`crate::NeoDatabase::serialize_approach`] resolves it.
    pub fn serialize(&self, neo: &CelestialObject) -> ApproachRecord {
        ApproachRecord {
            datetime_utc: self.time_str(),
            distance_au: self.distance,
            velocity_km_s: self.velocity,
            neo: NeoRecord {
                designation: neo.designation().to_string(),
                name: neo.name().map(str::to_string),
                diameter_km: neo.diameter_km(),
                potentially_hazardous: neo.hazardous(),
            },
        }
    }

    /// Human-readable sentence naming the object by `label`.
    pub fn describe_as(&self, label: &str) -> String {
        format!(
            "At {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.time_str(),
            label,
            self.distance,
            self.velocity
        )
    }

    pub(crate) fn set_neo(&mut self, id: NeoId) {
        self.neo = Some(id);
    }
}

impl fmt::Display for ApproachEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe_as(&self.designation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ApproachEvent {
        ApproachEvent::new("433", time::parse("2020-Jan-01 05:30").unwrap(), 0.0712, 5.54)
    }

    #[test]
    fn test_time_str() {
        assert_eq!(sample().time_str(), "2020-01-01 05:30");
    }

    #[test]
    fn test_accessors() {
        let event = sample();
        assert_eq!(event.time(), time::parse("2020-Jan-01 05:30").unwrap());
        assert_eq!(event.distance(), 0.0712);
        assert_eq!(event.velocity(), 5.54);
    }

    #[test]
    fn test_serialize_uses_given_object() {
        let other = CelestialObject::new("99942", Some("Apophis".to_string()), None, true);
        let record = sample().serialize(&other);

        assert_eq!(record.neo.designation, "99942");
        assert_eq!(record.datetime_utc, "2020-01-01 05:30");
    }

    #[test]
    fn test_new_is_unlinked() {
        assert_eq!(sample().neo(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            sample().to_string(),
            "At 2020-01-01 05:30, '433' approaches Earth at a distance of 0.07 au and a velocity of 5.54 km/s."
        );
    }

    #[test]
    fn test_serialize() {
        let neo = CelestialObject::new("433", Some("Eros".to_string()), Some(16.84), false);
        let record = sample().serialize(&neo);

        assert_eq!(record.datetime_utc, "2020-01-01 05:30");
        assert_eq!(record.distance_au, 0.0712);
        assert_eq!(record.velocity_km_s, 5.54);
        assert_eq!(record.neo.designation, "433");
        assert_eq!(record.neo.name.as_deref(), Some("Eros"));
        assert_eq!(record.neo.diameter_km, 16.84);
        assert!(!record.neo.potentially_hazardous);
    }

    #[test]
    fn test_serialize_unknown_diameter() {
        let neo = CelestialObject::new("433", None, None, true);
        let record = sample().serialize(&neo);

        assert!(record.neo.diameter_km.is_nan());
        assert_eq!(record.neo.name, None);
        assert!(record.neo.potentially_hazardous);
    }
}
