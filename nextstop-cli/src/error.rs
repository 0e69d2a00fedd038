//! Error types emitted by the nextstop CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use nextstop_core::CatalogError;
use nextstop_scorer::PeakHoursError;
use thiserror::Error;

use crate::RequestError;

/// Exit status for requests the driver app must correct.
const EXIT_INVALID_REQUEST: i32 = 2;
/// Exit status when the catalog offers nothing to recommend.
const EXIT_NO_STOPS: i32 = 3;
/// Exit status for every other failure.
const EXIT_FAILURE: i32 = 1;

/// Errors emitted by the nextstop CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The configured time zone is not a known IANA name.
    #[error("unknown time zone {name:?}; expected an IANA name such as Asia/Kolkata")]
    InvalidTimezone {
        /// The rejected name.
        name: String,
    },
    /// A configured peak window could not be parsed or validated.
    #[error("invalid --{field} value: {source}")]
    InvalidPeakWindow {
        /// Option carrying the window.
        field: &'static str,
        /// Validation failure.
        #[source]
        source: PeakHoursError,
    },
    /// Opening the stop catalog file failed.
    #[error("failed to open stop catalog at {path:?}: {source}")]
    OpenCatalog {
        /// Catalog path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The stop catalog could not be decoded or failed validation.
    #[error("stop catalog from {origin} is invalid: {source}")]
    InvalidCatalog {
        /// Catalog path, or `built-in` for the bundled catalog.
        origin: String,
        /// Decode or validation failure.
        #[source]
        source: CatalogError,
    },
    /// Opening the request file failed.
    #[error("failed to open request at {path:?}: {source}")]
    OpenRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Request JSON could not be decoded.
    #[error("failed to parse request JSON at {path:?}: {source}")]
    ParseRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// The request payload failed validation.
    #[error("request in {path:?} is invalid: {source}")]
    InvalidRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: RequestError,
    },
    /// The catalog produced no recommendation.
    #[error("No stops available.")]
    NoStopsAvailable,
    /// Serialising the response failed.
    #[error("failed to serialise response: {0}")]
    SerialiseResponse(#[source] serde_json::Error),
    /// Writing the response failed.
    #[error("failed to write response: {0}")]
    WriteOutput(#[source] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    ///
    /// Malformed or invalid requests exit with `2`, an empty recommendation
    /// with `3`, and anything else with `1`.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ParseRequest { .. } | Self::InvalidRequest { .. } => EXIT_INVALID_REQUEST,
            Self::NoStopsAvailable => EXIT_NO_STOPS,
            _ => EXIT_FAILURE,
        }
    }
}
