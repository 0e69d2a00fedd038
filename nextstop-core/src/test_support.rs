//! Test-only builders and scorers shared by unit and behaviour tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::{BaseDemand, GeoPoint, Scorer, ScoringContext, Stop, StopCatalog};

/// Build a stop, panicking on invalid input.
///
/// # Panics
/// Panics when the coordinates or demand figures are invalid.
#[expect(clippy::panic, reason = "test helpers fail fast on bad fixtures")]
#[must_use]
pub fn stop(id: u64, latitude: f64, longitude: f64, demand: (f64, f64), supply: u32) -> Stop {
    let location = point(latitude, longitude);
    let (weekday, weekend) = demand;
    Stop::new(
        id,
        format!("Stop {id}"),
        location,
        BaseDemand { weekday, weekend },
        supply,
    )
    .unwrap_or_else(|err| panic!("invalid stop fixture {id}: {err}"))
}

/// Build a point, panicking on invalid coordinates.
///
/// # Panics
/// Panics when the coordinates are out of range.
#[expect(clippy::panic, reason = "test helpers fail fast on bad fixtures")]
#[must_use]
pub fn point(latitude: f64, longitude: f64) -> GeoPoint {
    GeoPoint::new(latitude, longitude)
        .unwrap_or_else(|err| panic!("invalid point fixture ({latitude}, {longitude}): {err}"))
}

/// Build a catalog, panicking on duplicate ids.
///
/// # Panics
/// Panics when two stops share an id.
#[expect(clippy::panic, reason = "test helpers fail fast on bad fixtures")]
#[must_use]
pub fn catalog(stops: Vec<Stop>) -> StopCatalog {
    StopCatalog::new(stops).unwrap_or_else(|err| panic!("invalid catalog fixture: {err}"))
}

/// Wall-clock time on the given calendar day.
///
/// # Panics
/// Panics when the date or time does not exist.
#[expect(clippy::panic, reason = "test helpers fail fast on bad fixtures")]
#[must_use]
pub fn local_time(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .unwrap_or_else(|| panic!("invalid time fixture {year}-{month}-{day} {hour}:00"))
}

/// Driver at `(latitude, longitude)` on Wednesday 3 January 2024 at `hour`.
#[must_use]
pub fn wednesday_context(latitude: f64, longitude: f64, hour: u32) -> ScoringContext {
    ScoringContext::new(point(latitude, longitude), local_time(2024, 1, 3, hour))
}

/// Driver at `(latitude, longitude)` on Saturday 6 January 2024 at `hour`.
#[must_use]
pub fn saturday_context(latitude: f64, longitude: f64, hour: u32) -> ScoringContext {
    ScoringContext::new(point(latitude, longitude), local_time(2024, 1, 6, hour))
}

/// Scores every stop with the same constant.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConstantScorer(pub f64);

impl Scorer for ConstantScorer {
    fn score(&self, _stop: &Stop, _context: &ScoringContext) -> f64 {
        self.0
    }
}
