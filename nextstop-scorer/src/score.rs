//! Demand, supply and distance combined into one ranking score.
#![forbid(unsafe_code)]

use nextstop_core::{Scorer, ScoringContext, Stop};

use crate::DemandEstimator;

/// Scores a stop as `demand / (supply + 1) / (distance_m + 1)`.
///
/// Both offsets keep the denominators at one or more, so a stop with no
/// supply, or a driver standing on the stop, still yields a finite score.
/// The score rises with demand and falls with supply and distance.
///
/// # Examples
///
/// ```
/// use nextstop_core::Scorer;
/// use nextstop_core::test_support::{stop, wednesday_context};
/// use nextstop_scorer::DemandSupplyScorer;
///
/// let scorer = DemandSupplyScorer::default();
/// let here = stop(1, 12.9279, 77.6271, (75.0, 120.0), 2);
/// // Driver on the stop at 14:00: 75 / (2 + 1) / (0 + 1).
/// assert_eq!(scorer.score(&here, &wednesday_context(12.9279, 77.6271, 14)), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemandSupplyScorer {
    demand: DemandEstimator,
}

impl DemandSupplyScorer {
    /// Create a scorer around a demand estimator.
    #[must_use]
    pub const fn new(demand: DemandEstimator) -> Self {
        Self { demand }
    }

    /// The demand estimator feeding this scorer.
    #[must_use]
    pub const fn demand(&self) -> &DemandEstimator {
        &self.demand
    }
}

impl Scorer for DemandSupplyScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "the score is a ratio of demand to supply and distance"
    )]
    fn score(&self, stop: &Stop, context: &ScoringContext) -> f64 {
        let demand = self.demand.estimate(stop, context);
        let distance = context.driver_location().distance_to(stop.location());
        let score = demand / (f64::from(stop.supply()) + 1.0) / (distance + 1.0);
        log::trace!(
            "stop {}: demand {demand}, supply {}, distance {distance:.1} m, score {score}",
            stop.id(),
            stop.supply()
        );
        score
    }
}
