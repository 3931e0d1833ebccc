//! neoscan CLI - explore near-Earth objects and their close approaches.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};
use neoscan::FilterCriteria;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = commands::load_database(&cli.neofile, &cli.cad, cli.verbose).and_then(|db| {
        match cli.command {
            Commands::Inspect {
                pdes,
                name,
                approaches,
            } => commands::inspect::run(&db, pdes, name, approaches, cli.verbose),

            Commands::Query {
                date,
                start_date,
                end_date,
                min_distance,
                max_distance,
                min_velocity,
                max_velocity,
                min_diameter,
                max_diameter,
                hazardous,
                not_hazardous,
                limit,
                outfile,
            } => {
                let mut criteria = FilterCriteria::new()
                    .between(start_date, end_date)
                    .distance(min_distance, max_distance)
                    .velocity(min_velocity, max_velocity)
                    .diameter(min_diameter, max_diameter);
                if let Some(date) = date {
                    criteria = criteria.on(date);
                }
                if hazardous || not_hazardous {
                    criteria = criteria.hazardous(hazardous);
                }
                commands::query::run(&db, criteria, limit, outfile, cli.verbose)
            }
        }
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
