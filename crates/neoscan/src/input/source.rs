//! Source file access and metadata.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{NeoError, Result};

/// Metadata about a loaded source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Source format (csv, json).
    pub format: String,
    /// Number of records produced.
    pub row_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been loaded.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: impl Into<String>,
        row_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format: format.into(),
            row_count,
            loaded_at: Utc::now(),
        }
    }
}

/// Raw bytes of a source file plus their digest.
///
/// The file handle is closed before this is returned.
pub(crate) struct SourceBytes {
    pub path: PathBuf,
    pub contents: Vec<u8>,
    pub hash: String,
}

impl SourceBytes {
    pub fn read(path: &Path) -> Result<Self> {
        let io_err = |source| NeoError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(io_err)?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(io_err)?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        Ok(Self {
            path: path.to_path_buf(),
            contents,
            hash,
        })
    }

    pub fn metadata(&self, format: &str, row_count: usize) -> SourceMetadata {
        SourceMetadata::new(
            self.path.clone(),
            self.hash.clone(),
            self.contents.len() as u64,
            format,
            row_count,
        )
    }
}
