//! Behavioural coverage for selecting the best stop from a catalog.

use std::cell::RefCell;

use chrono::NaiveDateTime;
use nextstop_core::{
    BaseDemand, GeoPoint, Scorer, ScoringContext, Stop, StopCatalog, StopSelector,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Ranks stops by weekday demand per unit of supply.
struct DemandPerSupply;

impl Scorer for DemandPerSupply {
    #[expect(clippy::float_arithmetic, reason = "test scorer divides demand by supply")]
    fn score(&self, stop: &Stop, _context: &ScoringContext) -> f64 {
        stop.base_demand().weekday / (f64::from(stop.supply()) + 1.0)
    }
}

fn stop(id: u64, supply: u32) -> Stop {
    let location = GeoPoint::new(12.9, 77.6).unwrap_or_else(|err| panic!("location: {err}"));
    let demand = BaseDemand {
        weekday: 60.0,
        weekend: 90.0,
    };
    Stop::new(id, format!("Stop {id}"), location, demand, supply)
        .unwrap_or_else(|err| panic!("stop {id}: {err}"))
}

fn catalog_of(stops: Vec<Stop>) -> StopCatalog {
    StopCatalog::new(stops).unwrap_or_else(|err| panic!("catalog: {err}"))
}

/// Catalog under test.
#[fixture]
fn catalog() -> RefCell<StopCatalog> {
    RefCell::new(StopCatalog::empty())
}

/// Identifier of the recommended stop, once selection has run.
#[fixture]
fn selected() -> RefCell<Option<Option<u64>>> {
    RefCell::new(None)
}

#[given("an empty stop catalog")]
fn given_empty(#[from(catalog)] catalog: &RefCell<StopCatalog>) {
    *catalog.borrow_mut() = StopCatalog::empty();
}

#[given("two stops with identical demand and supply listed as 7 then 3")]
fn given_tied(#[from(catalog)] catalog: &RefCell<StopCatalog>) {
    *catalog.borrow_mut() = catalog_of(vec![stop(7, 2), stop(3, 2)]);
}

#[given("three stops where stop 2 has the least supply")]
fn given_ranked(#[from(catalog)] catalog: &RefCell<StopCatalog>) {
    *catalog.borrow_mut() = catalog_of(vec![stop(1, 4), stop(2, 1), stop(3, 3)]);
}

#[when("I select the best stop")]
fn when_select(
    #[from(catalog)] catalog: &RefCell<StopCatalog>,
    #[from(selected)] selected: &RefCell<Option<Option<u64>>>,
) {
    let location = GeoPoint::new(12.9, 77.6).unwrap_or_else(|err| panic!("location: {err}"));
    let context = ScoringContext::new(location, NaiveDateTime::default());
    let selector = StopSelector::new(DemandPerSupply);
    let catalog = catalog.borrow();
    let best = selector
        .select_best(&catalog, &context)
        .map(|stop| stop.id().get());
    *selected.borrow_mut() = Some(best);
}

#[then("no stop is recommended")]
fn then_none(#[from(selected)] selected: &RefCell<Option<Option<u64>>>) {
    let outcome = selected
        .borrow()
        .unwrap_or_else(|| panic!("selection must run first"));
    assert_eq!(outcome, None);
}

#[then("stop {id} is recommended")]
fn then_recommended(id: u64, #[from(selected)] selected: &RefCell<Option<Option<u64>>>) {
    let outcome = selected
        .borrow()
        .unwrap_or_else(|| panic!("selection must run first"));
    assert_eq!(outcome, Some(id));
}

#[scenario(path = "tests/features/selection.feature", index = 0)]
fn empty_catalog(catalog: RefCell<StopCatalog>, selected: RefCell<Option<Option<u64>>>) {
    let _ = (catalog, selected);
}

#[scenario(path = "tests/features/selection.feature", index = 1)]
fn tie_keeps_first(catalog: RefCell<StopCatalog>, selected: RefCell<Option<Option<u64>>>) {
    let _ = (catalog, selected);
}

#[scenario(path = "tests/features/selection.feature", index = 2)]
fn highest_score_wins(catalog: RefCell<StopCatalog>, selected: RefCell<Option<Option<u64>>>) {
    let _ = (catalog, selected);
}
