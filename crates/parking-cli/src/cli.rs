//! CLI definition using clap

use clap::{Parser, Subcommand};
use parking_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "parking-fee")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Parking fee calculator with tiered hourly rates and a daily maximum")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Quote the fee for a single stay
    Quote {
        /// Hours parked (fractional hours are rounded up)
        #[arg(long, short = 'H', allow_hyphen_values = true)]
        hours: String,

        /// Vehicle category (car, motorcycle, bus)
        #[arg(long, short = 'c')]
        vehicle: String,
    },

    /// Show the rate table
    Rates,

    /// Price every session in a CSV file (ticket,hours,vehicle)
    Batch {
        /// Path to CSV file
        #[arg(long)]
        csv: PathBuf,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Print -1 for rejected quotes instead of an error
        #[arg(long)]
        set_sentinel: Option<bool>,

        /// Reset to defaults
        #[arg(long, conflicts_with_all = ["set_output", "set_sentinel"])]
        reset: bool,
    },
}
