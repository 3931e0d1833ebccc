//! Domain model: catalog objects, close approaches, and their export records.

mod approach;
mod neo;
mod record;

pub use approach::ApproachEvent;
pub use neo::{normalize_name, parse_diameter, parse_hazard, CelestialObject};
pub use record::{ApproachRecord, NeoRecord};

/// Handle of a [`CelestialObject`] inside a [`crate::NeoDatabase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeoId(usize);

/// Handle of an [`ApproachEvent`] inside a [`crate::NeoDatabase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApproachId(usize);

impl NeoId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the object in load order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl ApproachId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the approach in load order.
    pub fn index(self) -> usize {
        self.0
    }
}
