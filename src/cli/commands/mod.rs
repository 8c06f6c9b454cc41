//! Command implementations for the grid historian CLI
//!
//! This module contains the main command execution logic and error
//! handling for the CLI interface. Each command is implemented in its own
//! module for better organization and maintainability.

pub mod generate;
pub mod query;
pub mod shared;
pub mod stations;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the grid historian
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `query`: seed the in-memory store and run an analytical query
/// - `stations`: report on the built-in station catalog
/// - `generate`: synthesize a one-off series without the store
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Query(query_args)) => query::run_query(query_args),
        Some(Commands::Stations(stations_args)) => stations::run_stations(stations_args),
        Some(Commands::Generate(generate_args)) => generate::run_generate(generate_args),
        None => {
            // main() prints help before dispatching when no command given
            Ok(())
        }
    }
}
