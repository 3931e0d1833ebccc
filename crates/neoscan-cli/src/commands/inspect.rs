//! Inspect command - show one object and, optionally, its close approaches.

use colored::Colorize;
use neoscan::{CelestialObject, NeoDatabase};

pub fn run(
    db: &NeoDatabase,
    pdes: Option<String>,
    name: Option<String>,
    approaches: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(neo) = find_neo(db, pdes.as_deref(), name.as_deref())? else {
        let target = pdes.or(name).unwrap_or_default();
        println!("{} {}", "No matching NEO:".yellow().bold(), target);
        return Ok(());
    };

    println!("{}", neo);

    if verbose {
        println!(
            "  {} {}",
            "Close approaches:".dimmed(),
            neo.approaches().len()
        );
    }

    if approaches {
        for approach in db.approaches_of(neo) {
            println!("- {}", db.describe_approach(approach));
        }
    }

    Ok(())
}

/// Look an object up by designation, falling back to name.
fn find_neo<'a>(
    db: &'a NeoDatabase,
    pdes: Option<&str>,
    name: Option<&str>,
) -> Result<Option<&'a CelestialObject>, Box<dyn std::error::Error>> {
    match (pdes, name) {
        (Some(pdes), _) => Ok(db.get_neo_by_designation(pdes)),
        (None, Some(name)) => Ok(db.get_neo_by_name(name)),
        (None, None) => Err("Specify --pdes or --name".into()),
    }
}
