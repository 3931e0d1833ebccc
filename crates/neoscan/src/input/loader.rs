//! File-level entry points for the catalog and approach loaders.

use std::path::Path;

use tracing::{debug, info};

use super::approaches::read_approaches;
use super::catalog::read_catalog;
use super::source::{SourceBytes, SourceMetadata};
use crate::error::Result;
use crate::model::{ApproachEvent, CelestialObject};

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Catalog delimiter.
    pub delimiter: u8,
    /// Catalog quote character.
    pub quote: u8,
    /// Check the approach source's declared field names against the fixed
    /// column positions before reading rows.
    pub verify_fields: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            verify_fields: true,
        }
    }
}

impl LoaderConfig {
    /// Set the catalog delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the catalog quote character.
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Enable or disable field-name verification for approach sources.
    pub fn with_verify_fields(mut self, verify: bool) -> Self {
        self.verify_fields = verify;
        self
    }
}

/// Loads catalog and approach files.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    /// Create a loader with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load a catalog file and describe the source.
    pub fn load_catalog(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<(Vec<CelestialObject>, SourceMetadata)> {
        let source = SourceBytes::read(path.as_ref())?;
        debug!(path = %source.path.display(), hash = %source.hash, "Reading catalog");

        let neos = read_catalog(source.contents.as_slice(), &self.config)?;
        let metadata = source.metadata("csv", neos.len());

        info!(file = %metadata.file, count = neos.len(), "Loaded near-Earth objects");
        Ok((neos, metadata))
    }

    /// Load a close-approach file and describe the source.
    pub fn load_approaches(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<(Vec<ApproachEvent>, SourceMetadata)> {
        let source = SourceBytes::read(path.as_ref())?;
        debug!(path = %source.path.display(), hash = %source.hash, "Reading close approaches");

        let approaches = read_approaches(source.contents.as_slice(), &self.config)?;
        let metadata = source.metadata("json", approaches.len());

        info!(file = %metadata.file, count = approaches.len(), "Loaded close approaches");
        Ok((approaches, metadata))
    }
}

/// Load a catalog file with the default configuration.
///
/// ```no_run
/// let neos = neoscan::load_catalog("data/neos.csv")?;
/// println!("{} objects", neos.len());
/// # Ok::<(), neoscan::NeoError>(())
/// ```
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<CelestialObject>> {
    Loader::new().load_catalog(path).map(|(neos, _)| neos)
}

/// Load a close-approach file with the default configuration.
pub fn load_approaches(path: impl AsRef<Path>) -> Result<Vec<ApproachEvent>> {
    Loader::new().load_approaches(path).map(|(approaches, _)| approaches)
}
