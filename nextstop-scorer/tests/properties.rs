//! Property-based tests for demand estimation and scoring.
//!
//! # Invariants tested
//!
//! - **Peak ratio:** peak demand is exactly 1.5 times off-peak demand.
//! - **Score range:** scores are finite and never negative.
//! - **Distance:** with demand held fixed, a farther stop scores strictly lower.
//! - **Supply:** with demand held fixed, more supply never scores higher.

use chrono::{NaiveDate, NaiveDateTime};
use nextstop_core::{BaseDemand, GeoPoint, Scorer, ScoringContext, Stop};
use nextstop_scorer::{DemandEstimator, DemandSupplyScorer, PEAK_MULTIPLIER};
use proptest::prelude::*;

fn wednesday_at(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 3)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .unwrap_or_else(|| panic!("valid wall-clock time for hour {hour}"))
}

fn point(latitude: f64, longitude: f64) -> GeoPoint {
    GeoPoint::new(latitude, longitude).unwrap_or_else(|err| panic!("strategy point: {err}"))
}

fn stop_at(location: GeoPoint, demand: f64, supply: u32) -> Stop {
    let base = BaseDemand {
        weekday: demand,
        weekend: demand,
    };
    Stop::new(1, "Stop", location, base, supply).unwrap_or_else(|err| panic!("stop: {err}"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    #[expect(clippy::float_arithmetic, reason = "compares demand ratios")]
    fn peak_demand_is_scaled(demand in 0.0_f64..10_000.0) {
        let estimator = DemandEstimator::default();
        let candidate = stop_at(point(0.0, 0.0), demand, 1);
        let driver = point(0.0, 0.0);
        let peak = estimator.estimate(&candidate, &ScoringContext::new(driver, wednesday_at(9)));
        let off_peak = estimator.estimate(&candidate, &ScoringContext::new(driver, wednesday_at(14)));
        prop_assert!((peak - off_peak * PEAK_MULTIPLIER).abs() <= 1e-9 * demand.max(1.0));
    }

    #[test]
    fn scores_are_finite_and_non_negative(
        latitude in -90.0_f64..=90.0,
        longitude in -180.0_f64..=180.0,
        demand in 0.0_f64..10_000.0,
        supply in any::<u32>(),
        hour in 0_u32..24,
    ) {
        let candidate = stop_at(point(latitude, longitude), demand, supply);
        let context = ScoringContext::new(point(0.0, 0.0), wednesday_at(hour));
        let score = DemandSupplyScorer::default().score(&candidate, &context);
        prop_assert!(score.is_finite());
        prop_assert!(score >= 0.0);
    }

    #[test]
    #[expect(clippy::float_arithmetic, reason = "places the far stop beyond the near one")]
    fn farther_stops_score_lower(
        near in 0.0_f64..10.0,
        gap in 1e-3_f64..10.0,
        demand in 1.0_f64..1_000.0,
        supply in 0_u32..50,
    ) {
        let scorer = DemandSupplyScorer::default();
        let context = ScoringContext::new(point(0.0, 0.0), wednesday_at(14));
        let close = scorer.score(&stop_at(point(near, 0.0), demand, supply), &context);
        let far = scorer.score(&stop_at(point(near + gap, 0.0), demand, supply), &context);
        prop_assert!(far < close, "far {far} should score below close {close}");
    }

    #[test]
    fn more_supply_never_scores_higher(
        demand in 0.0_f64..1_000.0,
        supply in 0_u32..1_000,
        extra in 1_u32..1_000,
    ) {
        let scorer = DemandSupplyScorer::default();
        let location = point(12.93, 77.62);
        let context = ScoringContext::new(point(12.92, 77.61), wednesday_at(18));
        let quiet = scorer.score(&stop_at(location, demand, supply), &context);
        let busy = scorer.score(&stop_at(location, demand, supply + extra), &context);
        prop_assert!(busy <= quiet);
    }
}
