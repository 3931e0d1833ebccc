//! Source loading for catalogs and close approaches.

pub mod approaches;
pub mod catalog;
mod loader;
mod source;

pub use approaches::read_approaches;
pub use catalog::read_catalog;
pub use loader::{load_approaches, load_catalog, Loader, LoaderConfig};
pub use source::SourceMetadata;
