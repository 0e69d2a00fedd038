//! Time-aware demand estimation.
#![forbid(unsafe_code)]

use nextstop_core::{ScoringContext, Stop};

use crate::PeakHours;

/// Estimates how many riders a stop can expect at the request time.
///
/// Weekend requests use the stop's weekend base demand and every other day
/// the weekday figure. Hours inside a [`PeakHours`] window scale the base by
/// [`PEAK_MULTIPLIER`](crate::PEAK_MULTIPLIER).
///
/// # Examples
///
/// ```
/// use nextstop_core::test_support::{stop, wednesday_context};
/// use nextstop_scorer::DemandEstimator;
///
/// let estimator = DemandEstimator::default();
/// let stop_b = stop(2, 12.9352, 77.6245, (70.0, 100.0), 2);
///
/// assert_eq!(estimator.estimate(&stop_b, &wednesday_context(12.93, 77.63, 9)), 105.0);
/// assert_eq!(estimator.estimate(&stop_b, &wednesday_context(12.93, 77.63, 14)), 70.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemandEstimator {
    peaks: PeakHours,
}

impl DemandEstimator {
    /// Create an estimator using the given peak windows.
    #[must_use]
    pub const fn new(peaks: PeakHours) -> Self {
        Self { peaks }
    }

    /// The configured peak windows.
    #[must_use]
    pub const fn peaks(&self) -> PeakHours {
        self.peaks
    }

    /// Expected demand at `stop` for the time in `context`.
    ///
    /// Never negative, since stop base demand is validated non-negative.
    #[expect(
        clippy::float_arithmetic,
        reason = "demand is the base figure scaled by the peak multiplier"
    )]
    #[must_use]
    pub fn estimate(&self, stop: &Stop, context: &ScoringContext) -> f64 {
        let base = stop.base_demand().for_day(context.day_type());
        base * self.peaks.multiplier(context.hour())
    }
}
