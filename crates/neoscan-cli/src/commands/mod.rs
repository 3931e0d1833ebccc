//! CLI command implementations.

pub mod inspect;
pub mod query;

use std::path::Path;

use colored::Colorize;
use neoscan::{Loader, NeoDatabase};

/// Load both sources and link them.
pub fn load_database(
    neofile: &Path,
    cad: &Path,
    verbose: bool,
) -> Result<NeoDatabase, Box<dyn std::error::Error>> {
    if !neofile.exists() {
        return Err(format!("File not found: {}", neofile.display()).into());
    }
    if !cad.exists() {
        return Err(format!("File not found: {}", cad.display()).into());
    }

    let loader = Loader::new();
    let (neos, neo_source) = loader.load_catalog(neofile)?;
    let (approaches, cad_source) = loader.load_approaches(cad)?;

    if verbose {
        println!(
            "{} {} objects from {}",
            "Loaded".cyan().bold(),
            neo_source.row_count.to_string().white().bold(),
            neo_source.file
        );
        println!(
            "{} {} close approaches from {}",
            "Loaded".cyan().bold(),
            cad_source.row_count.to_string().white().bold(),
            cad_source.file
        );
    }

    Ok(NeoDatabase::new(neos, approaches))
}
