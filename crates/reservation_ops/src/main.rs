//! Restaurant Reservation Ops
//!
//! Maintenance and model-training utilities for the restaurant
//! reservation system: Airtable hygiene checks and cleanups, plus the
//! offline no-show-risk training pipelines.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

/// Restaurant reservation maintenance and model training
#[derive(Parser)]
#[command(name = "resops")]
#[command(about = "Maintenance and no-show model training for the reservation system")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a reservation and its ML prediction fields
    CheckReservation {
        /// Customer name to search for
        #[arg(short, long, default_value = "Test Family Chen")]
        name: String,
    },

    /// List all service records with ages and cleanup verdicts
    CheckService,

    /// Find service records older than 12 hours
    FindOldService,

    /// Find waitlist entries older than 24 hours
    FindOldWaitlist,

    /// Clear a stale service reference from a restaurant table
    CleanupTable {
        /// Table number to clean
        #[arg(short, long, default_value = "7")]
        table_number: String,
    },

    /// Delete old or test records among active service records
    DeleteOldActive,

    /// Train the no-show model on the hotel booking dataset
    Train {
        /// Path to the hotel bookings CSV
        #[arg(short, long, default_value = "hotel_bookings.csv")]
        input: PathBuf,

        /// Directory to write the model artifacts into
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Retrain a custom model on logged restaurant outcomes
    Retrain {
        /// Path to the restaurant training data CSV
        #[arg(short, long, default_value = "restaurant_training_data.csv")]
        input: PathBuf,

        /// Path of the JavaScript model module to write
        #[arg(short, long, default_value = "api/ml/model-data.js")]
        output: PathBuf,

        /// Skip the small-sample confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::CheckReservation { name } => commands::check_reservation::run(&name)?,
        Commands::CheckService => commands::check_service::run()?,
        Commands::FindOldService => commands::find_old_service::run()?,
        Commands::FindOldWaitlist => commands::find_old_waitlist::run()?,
        Commands::CleanupTable { table_number } => commands::cleanup_table::run(&table_number)?,
        Commands::DeleteOldActive => commands::delete_old_active::run()?,
        Commands::Train { input, output_dir } => commands::train::run(&input, &output_dir)?,
        Commands::Retrain { input, output, yes } => commands::retrain::run(&input, &output, yes)?,
    }

    Ok(())
}
