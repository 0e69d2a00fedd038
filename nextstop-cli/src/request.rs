//! JSON wire format for recommendation requests and responses.
//!
//! Request fields are decoded loosely and validated afterwards, so a missing
//! or mistyped coordinate yields the documented client error instead of a
//! decoder message.

use chrono::{DateTime, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use log::debug;
use nextstop_core::{GeoPoint, ScoringContext, Stop, StopId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Wall-clock layouts accepted when a timestamp carries no offset.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Offset layouts without a seconds field, which RFC 3339 requires. A
/// trailing `Z` is rewritten to `+0000` before these are tried.
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%z",
    "%Y-%m-%d %H:%M%:z",
];

/// Client errors for a malformed recommendation request.
///
/// The messages are part of the response contract and are rendered verbatim
/// in the `error` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RequestError {
    /// `currentLocation` is missing, incomplete or out of range.
    #[error("Invalid location. Provide latitude and longitude.")]
    InvalidLocation,
    /// `currentTime` is missing or not a recognisable timestamp.
    #[error("Invalid time. Provide a valid timestamp.")]
    InvalidTime,
}

/// A driver's request for a recommendation.
///
/// Both fields are kept as raw JSON until [`NextStopRequest::to_context`]
/// validates them.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct NextStopRequest {
    pub(crate) current_location: Option<Value>,
    pub(crate) current_time: Option<Value>,
}

impl NextStopRequest {
    /// Read a request from any JSON document.
    ///
    /// A body that is not a JSON object carries neither field and is left
    /// for [`NextStopRequest::to_context`] to reject.
    pub(crate) fn from_value(body: Value) -> Self {
        match body {
            Value::Object(mut fields) => Self {
                current_location: fields.remove("currentLocation"),
                current_time: fields.remove("currentTime"),
            },
            other => {
                debug!("request body is not an object: {other}");
                Self::default()
            }
        }
    }

    /// Validate the request and resolve it against the deployment time zone.
    pub(crate) fn to_context(&self, zone: Tz) -> Result<ScoringContext, RequestError> {
        let location = self.driver_location()?;
        let local_time = self
            .current_time
            .as_ref()
            .and_then(Value::as_str)
            .ok_or(RequestError::InvalidTime)
            .and_then(|raw| parse_local_time(raw, zone))?;
        Ok(ScoringContext::new(location, local_time))
    }

    fn driver_location(&self) -> Result<GeoPoint, RequestError> {
        let payload = self
            .current_location
            .as_ref()
            .and_then(Value::as_object)
            .ok_or(RequestError::InvalidLocation)?;
        let coordinate = |field: &str| {
            payload
                .get(field)
                .and_then(Value::as_f64)
                .ok_or(RequestError::InvalidLocation)
        };
        let latitude = coordinate("latitude")?;
        let longitude = coordinate("longitude")?;
        GeoPoint::new(latitude, longitude).map_err(|err| {
            debug!("rejecting driver location: {err}");
            RequestError::InvalidLocation
        })
    }
}

/// Resolve `raw` to wall-clock time in `zone`.
///
/// Timestamps with an offset (RFC 3339, RFC 2822, or ISO 8601 without
/// seconds) are converted into `zone`. Timestamps without one are taken as
/// `zone` wall-clock time; a time skipped by a DST jump is rejected and a
/// repeated one resolves to its earlier instant.
pub(crate) fn parse_local_time(raw: &str, zone: Tz) -> Result<NaiveDateTime, RequestError> {
    let text = raw.trim();
    if let Some(instant) = parse_instant(text) {
        return Ok(instant.with_timezone(&zone).naive_local());
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| {
            debug!("unrecognised timestamp {text:?}");
            RequestError::InvalidTime
        })?;

    match zone.from_local_datetime(&naive) {
        LocalResult::Single(instant) | LocalResult::Ambiguous(instant, _) => {
            Ok(instant.naive_local())
        }
        LocalResult::None => {
            debug!("timestamp {text:?} does not exist in {zone}");
            Err(RequestError::InvalidTime)
        }
    }
}

fn parse_instant(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant);
    }
    if let Ok(instant) = DateTime::parse_from_rfc2822(text) {
        return Some(instant);
    }
    let offset_text = match text.strip_suffix(['Z', 'z']) {
        Some(stem) => format!("{stem}+0000"),
        None => text.to_owned(),
    };
    OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(&offset_text, format).ok())
}

/// Successful recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NextStopResponse {
    pub(crate) next_stop: StopPayload,
}

/// The recommended stop as rendered to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct StopPayload {
    pub(crate) id: StopId,
    pub(crate) name: String,
    pub(crate) location: GeoPoint,
}

impl From<&Stop> for NextStopResponse {
    fn from(stop: &Stop) -> Self {
        Self {
            next_stop: StopPayload {
                id: stop.id(),
                name: stop.name().to_owned(),
                location: stop.location(),
            },
        }
    }
}

/// Error body written in place of a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ErrorPayload {
    pub(crate) error: String,
}

impl ErrorPayload {
    pub(crate) fn new(message: impl ToString) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}
