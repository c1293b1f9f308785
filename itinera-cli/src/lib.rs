//! Command-line interface for planning itineraries offline.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod attractions;
mod error;
mod plan;
mod seed;

use attractions::AttractionsArgs;
pub use error::CliError;
use plan::PlanArgs;
use seed::SeedArgs;

pub(crate) const ARG_PLAN_REQUEST: &str = "request";
pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_STRATEGY: &str = "strategy";
pub(crate) const ARG_ATTRACTION_ID: &str = "id";
pub(crate) const ENV_PLAN_REQUEST: &str = "ITINERA_CMDS_PLAN_REQUEST_PATH";

/// Catalog path used when neither a flag nor configuration names one.
pub const DEFAULT_CATALOG: &str = "catalog.json";

/// Run the Itinera CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Plan(args) => plan::run_plan(args, &mut stdout),
        Command::Attractions(args) => attractions::run_attractions(args, &mut stdout),
        Command::Seed(args) => seed::run_seed(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "itinera",
    about = "Plan day-by-day travel itineraries from an attraction catalog",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan an itinerary for a JSON request.
    Plan(PlanArgs),
    /// Show the attractions in the catalog.
    Attractions(AttractionsArgs),
    /// Write the default attractions to a new catalog.
    Seed(SeedArgs),
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
