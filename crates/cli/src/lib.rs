pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "gavel",
    about = "Gavel auction fee CLI",
    long_about = "Calculate auction bid totals and inspect gavel runtime configuration and readiness.",
    after_help = "Examples:\n  gavel calc --price 398.00 --vehicle-type common\n  gavel vehicle-types\n  gavel doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Compute the fee breakdown and total cost for one bid")]
    Calc {
        #[arg(long, help = "Vehicle price, a decimal amount such as 398.00")]
        price: String,
        #[arg(long = "vehicle-type", help = "Vehicle type: Common or Luxury (case-insensitive)")]
        vehicle_type: String,
        #[arg(long, help = "Emit the raw calculation payload as JSON")]
        json: bool,
    },
    #[command(about = "List selectable vehicle types as JSON")]
    VehicleTypes,
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate config, fee registry, and listen address readiness checks")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Calc { price, vehicle_type, json } => commands::calc::run(&price, &vehicle_type, json),
        Command::VehicleTypes => commands::vehicle_types::run(),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Doctor { json } => {
            commands::CommandResult { exit_code: 0, output: commands::doctor::run(json) }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
