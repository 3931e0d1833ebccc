//! CLI argument definitions using clap.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// neoscan: explore near-Earth objects and their close approaches
#[derive(Parser)]
#[command(name = "neoscan")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the near-Earth-object catalog (CSV)
    #[arg(long, global = true, env = "NEOSCAN_NEOFILE", default_value = "data/neos.csv")]
    pub neofile: PathBuf,

    /// Path to the close-approach data (JSON)
    #[arg(long, global = true, env = "NEOSCAN_CAD", default_value = "data/cad.json")]
    pub cad: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show one near-Earth object, found by designation or name
    Inspect {
        /// Primary designation (e.g. "433")
        #[arg(short, long, conflicts_with = "name", required_unless_present = "name")]
        pdes: Option<String>,

        /// IAU name (e.g. "Eros")
        #[arg(short, long)]
        name: Option<String>,

        /// Also list the object's close approaches
        #[arg(short, long)]
        approaches: bool,
    },

    /// Select close approaches and print or export them
    Query {
        /// Only approaches on this date (YYYY-MM-DD)
        #[arg(short, long, value_parser = parse_date, conflicts_with_all = ["start_date", "end_date"])]
        date: Option<NaiveDate>,

        /// Only approaches on or after this date (YYYY-MM-DD)
        #[arg(short, long, value_parser = parse_date)]
        start_date: Option<NaiveDate>,

        /// Only approaches on or before this date (YYYY-MM-DD)
        #[arg(short, long, value_parser = parse_date)]
        end_date: Option<NaiveDate>,

        /// Minimum approach distance (au)
        #[arg(long)]
        min_distance: Option<f64>,

        /// Maximum approach distance (au)
        #[arg(long)]
        max_distance: Option<f64>,

        /// Minimum relative velocity (km/s)
        #[arg(long)]
        min_velocity: Option<f64>,

        /// Maximum relative velocity (km/s)
        #[arg(long)]
        max_velocity: Option<f64>,

        /// Minimum object diameter (km)
        #[arg(long)]
        min_diameter: Option<f64>,

        /// Maximum object diameter (km)
        #[arg(long)]
        max_diameter: Option<f64>,

        /// Only potentially hazardous objects
        #[arg(long, conflicts_with = "not_hazardous")]
        hazardous: bool,

        /// Only objects not marked potentially hazardous
        #[arg(long)]
        not_hazardous: bool,

        /// Maximum number of results (0 = unlimited; printing defaults to 10)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Write results to a .csv or .json file instead of printing
        #[arg(short, long)]
        outfile: Option<PathBuf>,
    },
}

/// Parse a `YYYY-MM-DD` date argument.
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    neoscan::time::parse_date(s).map_err(|e| e.to_string())
}
