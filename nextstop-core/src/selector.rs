//! Pick the highest-scoring stop from a catalog.

use log::{debug, warn};

use crate::{Scorer, ScoringContext, Stop, StopCatalog};

/// A stop paired with its score during one selection pass.
#[derive(Debug, Clone, Copy)]
struct ScoredStop<'a> {
    stop: &'a Stop,
    score: f64,
}

/// Recommends the best stop for a driver using a [`Scorer`].
///
/// Selection is a single linear pass that tracks the running maximum. When
/// several stops share the maximum score the one that appears first in the
/// catalog wins. Every call keeps its own running state, so one selector can
/// be shared across threads.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDateTime;
/// use nextstop_core::{GeoPoint, Scorer, ScoringContext, Stop, StopCatalog, StopSelector};
///
/// struct Flat;
///
/// impl Scorer for Flat {
///     fn score(&self, _stop: &Stop, _context: &ScoringContext) -> f64 {
///         1.0
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let context = ScoringContext::new(GeoPoint::new(0.0, 0.0)?, NaiveDateTime::default());
/// let selector = StopSelector::new(Flat);
/// assert!(selector.select_best(&StopCatalog::empty(), &context).is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct StopSelector<S> {
    scorer: S,
}

impl<S: Scorer> StopSelector<S> {
    /// Create a selector ranking stops with `scorer`.
    pub const fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// The scorer used to rank stops.
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Return the stop with the highest score, or `None` for an empty catalog.
    ///
    /// Scores that are not finite never win; they are skipped and logged.
    #[must_use]
    pub fn select_best<'c>(
        &self,
        catalog: &'c StopCatalog,
        context: &ScoringContext,
    ) -> Option<&'c Stop> {
        let mut best: Option<ScoredStop<'c>> = None;
        for stop in catalog {
            let score = self.scorer.score(stop, context);
            if !score.is_finite() {
                warn!("skipping stop {} with non-finite score {score}", stop.id());
                continue;
            }
            match best {
                Some(current) if score <= current.score => {}
                _ => best = Some(ScoredStop { stop, score }),
            }
        }

        match best {
            Some(winner) => debug!(
                "selected stop {} ({}) with score {} from {} candidates",
                winner.stop.id(),
                winner.stop.name(),
                winner.score,
                catalog.len()
            ),
            None => debug!("no stop selected from {} candidates", catalog.len()),
        }
        best.map(|winner| winner.stop)
    }
}
