mod clean;
mod cli;
mod erddap;
mod frame;
mod merge;
mod parquet;
mod pipeline;
mod stations;

use anyhow::{Error, Result};
use clap::Parser;
use cli::{command, Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Fetch { start, end } => match command::fetch(*start, *end).await {
            Ok(filenames) => {
                for filename in filenames {
                    println!("File saved to `{}`", filename);
                }
            }
            Err(e) => eprintln!("Error: {}", e),
        },
        Commands::Merged { start, end } => match command::merged(*start, *end).await {
            Ok(filename) => println!("File saved to `{}`", filename),
            Err(e) => eprintln!("Error: {}", e),
        },
        Commands::Stations {} => {
            if let Err(e) = command::stations() {
                eprintln!("Error: {}", e);
            }
        }
    }

    Ok(())
}
