//! Query command - filter close approaches and print or export them.

use std::path::PathBuf;

use colored::Colorize;
use neoscan::filters::limit;
use neoscan::{write_records, ApproachFilter, ApproachRecord, FilterCriteria, NeoDatabase};
use tracing::{debug, warn};

/// Results printed when no limit is given.
const DEFAULT_PRINT_LIMIT: usize = 10;

pub fn run(
    db: &NeoDatabase,
    criteria: FilterCriteria,
    max_results: Option<usize>,
    outfile: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filters = criteria.into_filters();
    for filter in &filters {
        debug!(filter = %filter.describe(), "Applying filter");
    }

    if verbose && !filters.is_empty() {
        let described: Vec<String> = filters.iter().map(|f| f.describe()).collect();
        println!("{} {}", "Filters:".yellow().bold(), described.join(", "));
    }

    match outfile {
        Some(path) => {
            let records = export_records(db, &filters, max_results);
            let format = write_records(&records, &path)?;

            println!(
                "{} {} close approaches to {} ({:?})",
                "Saved".green().bold(),
                records.len().to_string().white().bold(),
                path.display().to_string().white(),
                format
            );
        }
        None => {
            let lines = printable(db, &filters, max_results);
            for line in &lines {
                println!("{}", line);
            }

            if lines.is_empty() {
                println!("{}", "No matching close approaches.".yellow());
            }
        }
    }

    Ok(())
}

/// Export records for linked matches. Unlinked matches have no object to
/// export and do not count toward the limit.
fn export_records(
    db: &NeoDatabase,
    filters: &[ApproachFilter],
    max_results: Option<usize>,
) -> Vec<ApproachRecord> {
    let mut unlinked = 0usize;
    let linked = db.query(filters).filter_map(|approach| {
        let record = db.record(approach);
        if record.is_none() {
            unlinked += 1;
        }
        record
    });
    let records: Vec<_> = limit(linked, max_results).collect();

    if unlinked > 0 {
        warn!(unlinked, "Skipped matching close approaches with no catalog entry");
    }
    records
}

fn printable(db: &NeoDatabase, filters: &[ApproachFilter], max_results: Option<usize>) -> Vec<String> {
    let n = max_results.or(Some(DEFAULT_PRINT_LIMIT));
    limit(db.query(filters), n)
        .map(|approach| db.describe_approach(approach))
        .collect()
}
