//! Command-line interface for recommending a driver's next stop.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod recommend;
mod request;

pub use error::CliError;
pub use request::RequestError;

use recommend::{RecommendArgs, run_recommend};

const ARG_REQUEST: &str = "request";
const ARG_CATALOG: &str = "catalog";
const ARG_TIMEZONE: &str = "timezone";
const ARG_MORNING_PEAK: &str = "morning-peak";
const ARG_EVENING_PEAK: &str = "evening-peak";
const ENV_REQUEST: &str = "NEXTSTOP_CMDS_RECOMMEND_REQUEST_PATH";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] describing the first failure; see
/// [`CliError::exit_code`] for how each failure maps to a process status.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "nextstop",
    about = "Recommend the next pickup stop for a ride-hailing driver",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score every stop for a driver request and print the best one.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
