//! Score candidate stops for a driver.
//!
//! The `Scorer` trait assigns a comparable value to a [`Stop`](crate::Stop)
//! given a [`ScoringContext`](crate::ScoringContext). Higher is better.

use crate::{ScoringContext, Stop};

/// Calculate a ranking score for a stop.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one scorer can
/// serve concurrent requests, and must be pure: the same stop and context
/// always produce the same score.
///
/// Implementations must:
/// - Produce finite (`f64::is_finite`) scores.
/// - Return non-negative values.
///
/// Scores are only compared with each other; they carry no absolute meaning.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDateTime;
/// use nextstop_core::{BaseDemand, GeoPoint, Scorer, ScoringContext, Stop};
///
/// struct SupplyScorer;
///
/// impl Scorer for SupplyScorer {
///     fn score(&self, stop: &Stop, _context: &ScoringContext) -> f64 {
///         f64::from(stop.supply())
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let here = GeoPoint::new(0.0, 0.0)?;
/// let demand = BaseDemand { weekday: 1.0, weekend: 1.0 };
/// let stop = Stop::new(1, "Depot", here, demand, 3)?;
/// let context = ScoringContext::new(here, NaiveDateTime::default());
/// assert_eq!(SupplyScorer.score(&stop, &context), 3.0);
/// # Ok(())
/// # }
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `stop` as seen from `context`.
    fn score(&self, stop: &Stop, context: &ScoringContext) -> f64;
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn score(&self, stop: &Stop, context: &ScoringContext) -> f64 {
        (**self).score(stop, context)
    }
}

impl<S: Scorer + ?Sized> Scorer for Box<S> {
    fn score(&self, stop: &Stop, context: &ScoringContext) -> f64 {
        (**self).score(stop, context)
    }
}
