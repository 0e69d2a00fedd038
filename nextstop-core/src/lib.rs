//! Core domain types for the nextstop recommendation engine.
//!
//! A driver asks where to go next; the answer is the stop in a
//! [`StopCatalog`] with the highest score for the driver's position and the
//! time of the request. This crate holds the validated value types, the
//! great-circle distance, the [`Scorer`] seam and the [`StopSelector`] that
//! picks the winner. Constructors return `Result` so invalid coordinates or
//! demand figures are rejected before any scoring happens.
//!
//! Everything here is pure and synchronous: no I/O, no shared mutable state.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod context;
pub mod point;
pub mod scorer;
pub mod selector;
mod stop;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use catalog::{CatalogError, StopCatalog};
pub use context::{DayType, ScoringContext};
pub use point::{EARTH_RADIUS_METRES, GeoPoint, GeoPointError, haversine_distance};
pub use scorer::Scorer;
pub use selector::StopSelector;
pub use stop::{BaseDemand, Stop, StopError, StopId};
