//! Recommend command implementation for the nextstop CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use chrono_tz::Tz;
use clap::Parser;
use log::info;
use nextstop_core::{StopCatalog, StopSelector};
use nextstop_scorer::{DemandEstimator, DemandSupplyScorer, HourWindow, PeakHours};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::open_utf8_file;
use crate::request::{ErrorPayload, NextStopRequest, NextStopResponse};
use crate::{
    ARG_CATALOG, ARG_EVENING_PEAK, ARG_MORNING_PEAK, ARG_REQUEST, ARG_TIMEZONE, CliError,
    ENV_REQUEST,
};

/// Sample Bengaluru catalog used when no `--catalog` is configured.
const BUILTIN_CATALOG: &str = include_str!("../data/stops.json");

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Recommend the next pickup stop for a driver. The request is \
                 a JSON file holding currentLocation and currentTime; stops \
                 are scored by time-adjusted demand over supply and distance. \
                 Options can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Recommend the best next stop for a driver"
)]
#[ortho_config(prefix = "NEXTSTOP")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing the driver request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to a JSON stop catalog; defaults to the built-in sample stops.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// IANA time zone used to read request timestamps (default `UTC`).
    #[arg(long = ARG_TIMEZONE, value_name = "tz")]
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    /// Morning peak hours, inclusive (default `8-10`).
    #[arg(long = ARG_MORNING_PEAK, value_name = "start-end")]
    #[serde(default)]
    pub(crate) morning_peak: Option<String>,
    /// Evening peak hours, inclusive (default `17-20`).
    #[arg(long = ARG_EVENING_PEAK, value_name = "start-end")]
    #[serde(default)]
    pub(crate) evening_peak: Option<String>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Catalog file, or `None` for the built-in catalog.
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Deployment time zone.
    pub(crate) timezone: Tz,
    /// Rush-hour windows.
    pub(crate) peaks: PeakHours,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_REQUEST,
        })?;

        let timezone = match args.timezone {
            Some(name) => name
                .trim()
                .parse::<Tz>()
                .map_err(|_| CliError::InvalidTimezone { name })?,
            None => Tz::UTC,
        };

        let morning = parse_window(
            args.morning_peak.as_deref(),
            ARG_MORNING_PEAK,
            PeakHours::DEFAULT_MORNING,
        )?;
        let evening = parse_window(
            args.evening_peak.as_deref(),
            ARG_EVENING_PEAK,
            PeakHours::DEFAULT_EVENING,
        )?;

        Ok(Self {
            request_path,
            catalog: args.catalog,
            timezone,
            peaks: PeakHours::new(morning, evening),
        })
    }
}

fn parse_window(
    value: Option<&str>,
    field: &'static str,
    default: HourWindow,
) -> Result<HourWindow, CliError> {
    value.map_or(Ok(default), |text| {
        text.parse()
            .map_err(|source| CliError::InvalidPeakWindow { field, source })
    })
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

/// Run the command, writing either the recommendation or an error payload.
///
/// Request validation failures and an empty recommendation still write a
/// JSON `error` body before returning the matching [`CliError`].
pub(super) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    match execute_recommend(&config) {
        Ok(response) => write_json(writer, &response),
        Err(err) => {
            if let Some(message) = client_message(&err) {
                write_json(writer, &ErrorPayload::new(message))?;
            }
            Err(err)
        }
    }
}

fn execute_recommend(config: &RecommendConfig) -> Result<NextStopResponse, CliError> {
    let request = load_request(&config.request_path)?;
    let context =
        request
            .to_context(config.timezone)
            .map_err(|source| CliError::InvalidRequest {
                path: config.request_path.clone(),
                source,
            })?;
    let catalog = load_catalog(config.catalog.as_deref())?;

    let selector = StopSelector::new(DemandSupplyScorer::new(DemandEstimator::new(config.peaks)));
    let best = selector
        .select_best(&catalog, &context)
        .ok_or(CliError::NoStopsAvailable)?;
    info!(
        "recommending stop {} ({}) for driver at {}",
        best.id(),
        best.name(),
        context.driver_location()
    );
    Ok(NextStopResponse::from(best))
}

fn client_message(err: &CliError) -> Option<String> {
    match err {
        CliError::InvalidRequest { source, .. } => Some(source.to_string()),
        CliError::NoStopsAvailable => Some(err.to_string()),
        _ => None,
    }
}

/// Loads a [`NextStopRequest`] from a JSON document on disk.
///
/// Only malformed JSON fails here; a document of the wrong shape is
/// rejected later with a client error.
pub(super) fn load_request(path: &Utf8Path) -> Result<NextStopRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let body: serde_json::Value =
        serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(NextStopRequest::from_value(body))
}

/// Loads the stop catalog from `path`, or the built-in catalog when absent.
pub(super) fn load_catalog(path: Option<&Utf8Path>) -> Result<StopCatalog, CliError> {
    let Some(path) = path else {
        return StopCatalog::from_json_str(BUILTIN_CATALOG).map_err(|source| {
            CliError::InvalidCatalog {
                origin: "built-in".to_owned(),
                source,
            }
        });
    };
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    StopCatalog::from_json_reader(BufReader::new(file)).map_err(|source| {
        CliError::InvalidCatalog {
            origin: path.to_string(),
            source,
        }
    })
}

fn write_json<T: Serialize>(writer: &mut dyn Write, payload: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(payload).map_err(CliError::SerialiseResponse)?;
    writer
        .write_all(rendered.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
