//! Linked collection of near-Earth objects and their close approaches.
//!
//! [`NeoDatabase::new`] takes ownership of the two flat collections produced
//! by the loaders and links them in two passes: first a designation index over
//! the objects, then one lookup per approach. Objects and approaches refer to
//! each other through [`NeoId`] and [`ApproachId`] handles into the database's
//! own vectors.

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::{debug, warn};

use crate::filters::ApproachFilter;
use crate::model::{ApproachEvent, ApproachId, ApproachRecord, CelestialObject, NeoId};

/// Objects and approaches, linked by designation.
#[derive(Debug, Clone)]
pub struct NeoDatabase {
    neos: Vec<CelestialObject>,
    approaches: Vec<ApproachEvent>,
    by_designation: IndexMap<String, NeoId>,
    by_name: IndexMap<String, NeoId>,
}

impl NeoDatabase {
    /// Index `neos` and link every approach to its object.
    ///
    /// When designations repeat, the first object wins. Approaches whose
    /// designation is not in the catalog stay unlinked.
    pub fn new(mut neos: Vec<CelestialObject>, mut approaches: Vec<ApproachEvent>) -> Self {
        let mut by_designation = IndexMap::with_capacity(neos.len());
        let mut by_name = IndexMap::new();

        for (index, neo) in neos.iter().enumerate() {
            let id = NeoId::new(index);
            match by_designation.entry(neo.designation().to_string()) {
                Entry::Vacant(slot) => {
                    slot.insert(id);
                }
                Entry::Occupied(_) => {
                    warn!(designation = neo.designation(), "Duplicate designation ignored");
                    continue;
                }
            }
            if let Some(name) = neo.name() {
                by_name.entry(name.to_string()).or_insert(id);
            }
        }

        let mut unlinked = 0usize;
        for (index, approach) in approaches.iter_mut().enumerate() {
            match by_designation.get(approach.designation()) {
                Some(&neo_id) => {
                    approach.set_neo(neo_id);
                    neos[neo_id.index()].push_approach(ApproachId::new(index));
                }
                None => unlinked += 1,
            }
        }

        if unlinked > 0 {
            warn!(unlinked, "Close approaches without a matching object");
        }
        debug!(
            neos = neos.len(),
            approaches = approaches.len(),
            "Linked close approaches"
        );

        Self {
            neos,
            approaches,
            by_designation,
            by_name,
        }
    }

    /// All objects, in load order.
    pub fn neos(&self) -> &[CelestialObject] {
        &self.neos
    }

    /// All approaches, in load order.
    pub fn approaches(&self) -> &[ApproachEvent] {
        &self.approaches
    }

    /// Object behind a handle.
    pub fn neo(&self, id: NeoId) -> Option<&CelestialObject> {
        self.neos.get(id.index())
    }

    /// Approach behind a handle.
    pub fn approach(&self, id: ApproachId) -> Option<&ApproachEvent> {
        self.approaches.get(id.index())
    }

    /// Find an object by primary designation.
    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&CelestialObject> {
        self.by_designation
            .get(designation)
            .and_then(|id| self.neo(*id))
    }

    /// Find an object by IAU name. Empty names never match.
    pub fn get_neo_by_name(&self, name: &str) -> Option<&CelestialObject> {
        if name.is_empty() {
            return None;
        }
        self.by_name.get(name).and_then(|id| self.neo(*id))
    }

    /// The object an approach is linked to.
    pub fn neo_of(&self, approach: &ApproachEvent) -> Option<&CelestialObject> {
        approach.neo().and_then(|id| self.neo(id))
    }

    /// Approaches linked to `neo`, in load order.
    pub fn approaches_of<'a>(
        &'a self,
        neo: &'a CelestialObject,
    ) -> impl Iterator<Item = &'a ApproachEvent> + 'a {
        neo.approaches().iter().filter_map(|id| self.approach(*id))
    }

    /// Export record for a linked approach; `None` if unlinked.
    pub fn record(&self, approach: &ApproachEvent) -> Option<ApproachRecord> {
        self.neo_of(approach).map(|neo| approach.serialize(neo))
    }

    /// Export record for the approach behind `id`.
    pub fn serialize_approach(&self, id: ApproachId) -> Option<ApproachRecord> {
        self.approach(id).and_then(|approach| self.record(approach))
    }

    /// Describe an approach, naming the object by its full name when linked.
    pub fn describe_approach(&self, approach: &ApproachEvent) -> String {
        match self.neo_of(approach) {
            Some(neo) => approach.describe_as(&neo.fullname()),
            None => approach.to_string(),
        }
    }

    /// Approaches matching every filter, in load order.
    pub fn query<'a>(
        &'a self,
        filters: &'a [ApproachFilter],
    ) -> impl Iterator<Item = &'a ApproachEvent> + 'a {
        self.approaches.iter().filter(move |approach| {
            let neo = self.neo_of(approach);
            filters.iter().all(|f| f.matches(approach, neo))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time;

    fn neo(designation: &str, name: Option<&str>) -> CelestialObject {
        CelestialObject::new(designation, name.map(str::to_string), None, false)
    }

    fn approach(designation: &str, cd: &str) -> ApproachEvent {
        ApproachEvent::new(designation, time::parse(cd).unwrap(), 0.1, 10.0)
    }

    #[test]
    fn test_links_both_directions() {
        let db = NeoDatabase::new(
            vec![neo("433", Some("Eros")), neo("99942", Some("Apophis"))],
            vec![
                approach("99942", "2029-Apr-13 21:46"),
                approach("433", "1900-Dec-27 01:30"),
                approach("99942", "2036-Mar-27 08:00"),
            ],
        );

        let apophis = db.get_neo_by_designation("99942").unwrap();
        let ids: Vec<usize> = apophis.approaches().iter().map(|id| id.index()).collect();
        assert_eq!(ids, vec![0, 2]);

        for approach in db.approaches() {
            let linked = db.neo_of(approach).unwrap();
            assert_eq!(linked.designation(), approach.designation());
        }
    }

    #[test]
    fn test_unknown_designation_stays_unlinked() {
        let db = NeoDatabase::new(
            vec![neo("433", None)],
            vec![approach("1036", "2020-Jan-01 05:30")],
        );
        assert_eq!(db.approaches()[0].neo(), None);
        assert!(db.serialize_approach(ApproachId::new(0)).is_none());
        assert!(db.neos()[0].approaches().is_empty());
    }

    #[test]
    fn test_duplicate_designation_first_wins() {
        let db = NeoDatabase::new(
            vec![neo("433", Some("First")), neo("433", Some("Second"))],
            vec![approach("433", "2020-Jan-01 05:30")],
        );

        let found = db.get_neo_by_designation("433").unwrap();
        assert_eq!(found.name(), Some("First"));
        assert_eq!(found.approaches().len(), 1);
        assert!(db.neos()[1].approaches().is_empty());
    }

    #[test]
    fn test_lookup_by_name() {
        let db = NeoDatabase::new(vec![neo("433", Some("Eros")), neo("1036", None)], vec![]);

        assert_eq!(db.get_neo_by_name("Eros").unwrap().designation(), "433");
        assert!(db.get_neo_by_name("eros").is_none());
        assert!(db.get_neo_by_name("").is_none());
        assert!(db.get_neo_by_designation("2000").is_none());
    }

    #[test]
    fn test_serialize_linked() {
        let db = NeoDatabase::new(
            vec![neo("433", Some("Eros"))],
            vec![approach("433", "2020-Jan-01 05:30")],
        );
        let record = db.serialize_approach(ApproachId::new(0)).unwrap();

        assert_eq!(record.neo.designation, "433");
        assert_eq!(record.datetime_utc, db.approaches()[0].time_str());
    }

    #[test]
    fn test_describe_uses_fullname() {
        let db = NeoDatabase::new(
            vec![neo("433", Some("Eros"))],
            vec![approach("433", "2020-Jan-01 05:30"), approach("7", "2020-Jan-01 05:30")],
        );
        assert!(db.describe_approach(&db.approaches()[0]).contains("'433 (Eros)'"));
        assert!(db.describe_approach(&db.approaches()[1]).contains("'7'"));
    }

    #[test]
    fn test_query() {
        let db = NeoDatabase::new(
            vec![
                CelestialObject::new("433", None, Some(16.84), true),
                CelestialObject::new("1036", None, None, false),
            ],
            vec![
                approach("433", "2020-Jan-01 05:30"),
                approach("1036", "2020-Jan-02 05:30"),
                approach("433", "2020-Jan-03 05:30"),
            ],
        );

        let hazardous = [ApproachFilter::Hazardous(true)];
        assert_eq!(db.query(&hazardous).count(), 2);
        assert_eq!(db.query(&[]).count(), 3);
    }
}
