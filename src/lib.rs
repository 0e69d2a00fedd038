//! Facade crate for the nextstop recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the demand/supply
//! scorer behind the `scorer` feature.
//!
//! ```
//! # #[cfg(feature = "scorer")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use chrono::NaiveDate;
//! use nextstop::{BaseDemand, DemandSupplyScorer, GeoPoint, ScoringContext, Stop, StopCatalog, StopSelector};
//!
//! let demand = BaseDemand { weekday: 75.0, weekend: 120.0 };
//! let catalog = StopCatalog::new(vec![Stop::new(8, "Stop H", GeoPoint::new(12.9279, 77.6271)?, demand, 2)?])?;
//! let time = NaiveDate::from_ymd_opt(2024, 1, 3).and_then(|d| d.and_hms_opt(9, 0, 0)).ok_or("date")?;
//! let context = ScoringContext::new(GeoPoint::new(12.93, 77.63)?, time);
//! let best = StopSelector::new(DemandSupplyScorer::default()).select_best(&catalog, &context);
//! assert_eq!(best.map(Stop::name), Some("Stop H"));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "scorer"))]
//! # fn main() {}
//! ```

#![forbid(unsafe_code)]

pub use nextstop_core::{
    BaseDemand, CatalogError, DayType, EARTH_RADIUS_METRES, GeoPoint, GeoPointError, Scorer,
    ScoringContext, Stop, StopCatalog, StopError, StopId, StopSelector, haversine_distance,
};

#[cfg(feature = "scorer")]
pub use nextstop_scorer::{
    DemandEstimator, DemandSupplyScorer, HourWindow, PEAK_MULTIPLIER, PeakHours, PeakHoursError,
};
