//! neoscan: ingestion and linking of near-Earth-object survey data.
//!
//! Two sources feed the library: a delimited catalog of near-Earth objects and
//! a JSON document of close approaches to Earth. Each loader normalizes raw
//! string fields into typed records; [`NeoDatabase`] then links every approach
//! to its object by designation.
//!
//! # Normalization
//!
//! - **Names**: empty means unnamed (`None`)
//! - **Diameters**: empty means unknown (`None`, NaN at the export boundary)
//! - **Hazard flag**: only the literal `"Y"` is hazardous
//! - **Approach times**: `YYYY-Mon-DD HH:MM` in UTC, displayed as `YYYY-MM-DD HH:MM`
//!
//! # Example
//!
//! ```no_run
//! use neoscan::{load_approaches, load_catalog, FilterCriteria, NeoDatabase};
//!
//! let neos = load_catalog("data/neos.csv")?;
//! let approaches = load_approaches("data/cad.json")?;
//! let db = NeoDatabase::new(neos, approaches);
//!
//! let filters = FilterCriteria::new().distance(None, Some(0.05)).into_filters();
//! for approach in neoscan::filters::limit(db.query(&filters), Some(10)) {
//!     println!("{}", db.describe_approach(approach));
//! }
//! # Ok::<(), neoscan::NeoError>(())
//! ```

pub mod database;
pub mod error;
pub mod filters;
pub mod input;
pub mod model;
pub mod output;
pub mod time;

pub use database::NeoDatabase;
pub use error::{NeoError, Result};
pub use filters::{ApproachFilter, Comparison, FilterCriteria};
pub use input::{load_approaches, load_catalog, Loader, LoaderConfig, SourceMetadata};
pub use model::{ApproachEvent, ApproachId, ApproachRecord, CelestialObject, NeoId, NeoRecord};
pub use output::{write_records, OutputFormat};
