//! Scoring for nextstop recommendations.
//!
//! [`DemandSupplyScorer`] implements the [`Scorer`](nextstop_core::Scorer)
//! trait by combining three signals:
//! - **Demand** from [`DemandEstimator`]: the stop's weekday or weekend base
//!   demand, raised by [`PEAK_MULTIPLIER`] inside the configured
//!   [`PeakHours`].
//! - **Supply**: vehicles already bound for the stop, which divide demand.
//! - **Distance**: great-circle metres from the driver, which divide again.
//!
//! # Examples
//!
//! ```
//! use nextstop_core::StopSelector;
//! use nextstop_core::test_support::{catalog, stop, wednesday_context};
//! use nextstop_scorer::DemandSupplyScorer;
//!
//! let stops = catalog(vec![
//!     stop(1, 12.9716, 77.5946, (50.0, 80.0), 5),
//!     stop(2, 12.9352, 77.6245, (70.0, 100.0), 2),
//! ]);
//! let selector = StopSelector::new(DemandSupplyScorer::default());
//! let best = selector.select_best(&stops, &wednesday_context(12.9279, 77.6271, 9));
//! assert_eq!(best.map(|s| s.id().get()), Some(2));
//! ```

#![forbid(unsafe_code)]

mod demand;
mod error;
mod peak;
mod score;

pub use demand::DemandEstimator;
pub use error::PeakHoursError;
pub use peak::{HourWindow, PEAK_MULTIPLIER, PeakHours};
pub use score::DemandSupplyScorer;
