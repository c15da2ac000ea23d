//! tripstore CLI
//!
//! Reports on and exports the sample Paris/Rome trip.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};
use tripstore::{sample, Config, TripPlanner};

/// tripstore
#[derive(Parser, Debug)]
#[command(name = "tripstore")]
#[command(about = "Ordered trip store: destinations, activities and sites")]
#[command(version)]
struct Args {
    /// Currency symbol for budgets
    #[arg(long, default_value = "€")]
    currency: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the report for one destination
    Report {
        /// Country of the destination
        #[arg(long)]
        country: String,

        /// City of the destination
        #[arg(long)]
        city: String,
    },

    /// Export every destination as delimited text
    Export {
        /// Output file
        #[arg(short, long, default_value = "data.csv")]
        output: PathBuf,
    },

    /// List every site, destination by destination
    Sites,
}

fn main() {
    let args = Args::parse();

    let config = match &args.command {
        Commands::Export { output } => Config::builder().export_path(output),
        _ => Config::builder(),
    }
    .currency_symbol(&args.currency)
    .build();

    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("tripstore v{}", tripstore::VERSION);

    let planner = match sample::demo_planner(config) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("Failed to build planner: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&planner, args.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(planner: &TripPlanner, command: Commands) -> tripstore::Result<()> {
    match command {
        Commands::Report { country, city } => {
            let destination = planner.find(&country, &city)?;
            print!("{}", planner.report(destination));
        }
        Commands::Export { .. } => {
            let rows = planner.export()?;
            println!(
                "Wrote {} rows to {}",
                rows,
                planner.config().export_path.display()
            );
        }
        Commands::Sites => {
            for site in planner.tour().cursor() {
                println!("{}", site?);
            }
        }
    }
    Ok(())
}
