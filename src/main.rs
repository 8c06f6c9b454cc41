use clap::Parser;
use grid_historian::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {error:#}");
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Grid Historian - Energy Asset Time-Series Engine");
    println!("================================================");
    println!();
    println!("Synthesize plausible historical observations for wind, solar, storage");
    println!("and charging stations, and answer analytical queries over them.");
    println!();
    println!("USAGE:");
    println!("    grid-historian <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    query       Seed the in-memory store and run an analytical query");
    println!("    stations    Report on the built-in station catalog");
    println!("    generate    Generate a one-off sample series");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # January wind generation for one station, filtered");
    println!("    grid-historian query -s 2024-01-01 -e 2024-01-31 --station wind1 \\");
    println!("        --filter-field 发电量 --filter-operator '>' --filter-value 2500");
    println!();
    println!("    # Export a month of solar prices as CSV");
    println!("    grid-historian query -D solar -t price -s 2024-03-01 -e 2024-03-31 \\");
    println!("        -o prices.csv");
    println!();
    println!("    # One-off series to stdout");
    println!("    grid-historian generate -s 2024-01-01 -e 2024-01-07 --anomaly-rate 0");
    println!();
    println!("For detailed help on any command:");
    println!("    grid-historian <COMMAND> --help");
}
