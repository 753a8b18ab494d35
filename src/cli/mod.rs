//! Command line interface.

pub mod command;

use std::time::Duration;

use chrono::NaiveDate;
use clap::{command, Parser, Subcommand};
use indicatif::ProgressBar;

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Contains the commands
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch, clean and save the three combined datasets
    Fetch {
        /// Window start date (YYYY-MM-DD), defaults to the registry window
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Window end date (YYYY-MM-DD), defaults to the registry window
        #[arg(long)]
        end: Option<NaiveDate>,
    },
    /// Fetch, clean, merge and save the long-form dataset
    Merged {
        /// Window start date (YYYY-MM-DD), defaults to the registry window
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Window end date (YYYY-MM-DD), defaults to the registry window
        #[arg(long)]
        end: Option<NaiveDate>,
    },
    /// Print the configured mooring registry
    Stations {},
}

/// Creates a spinner.
pub fn create_spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));

    bar
}
