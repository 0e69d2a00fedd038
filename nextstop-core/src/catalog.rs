//! The fixed set of stops a driver can be routed to.
//!
//! A [`StopCatalog`] is built once at start-up and then only read. Iteration
//! order is the order stops were supplied in, which is also the tie-break
//! order used by [`StopSelector`](crate::StopSelector).

use std::collections::HashSet;

use thiserror::Error;

use crate::{Stop, StopId};

/// Immutable, ordered collection of stops with unique identifiers.
///
/// # Examples
///
/// ```
/// use nextstop_core::StopCatalog;
///
/// let catalog = StopCatalog::empty();
/// assert!(catalog.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopCatalog {
    stops: Vec<Stop>,
}

/// Errors raised while building a [`StopCatalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two stops share an identifier.
    #[error("stop id {id} appears more than once in the catalog")]
    DuplicateId {
        /// The repeated identifier.
        id: StopId,
    },
    /// The catalog JSON could not be decoded or failed validation.
    #[cfg(feature = "serde")]
    #[error("failed to decode stop catalog: {0}")]
    Decode(#[source] serde_json::Error),
}

impl StopCatalog {
    /// Validate and construct a catalog.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateId`] when two stops share an id.
    pub fn new(stops: Vec<Stop>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(stops.len());
        for stop in &stops {
            if !seen.insert(stop.id()) {
                return Err(CatalogError::DuplicateId { id: stop.id() });
            }
        }
        Ok(Self { stops })
    }

    /// A catalog without stops.
    #[must_use]
    pub const fn empty() -> Self {
        Self { stops: Vec::new() }
    }

    /// Decode a JSON array of stops.
    ///
    /// Each stop is validated while decoding; see [`Stop::new`].
    ///
    /// # Errors
    /// Returns [`CatalogError::Decode`] for malformed JSON or invalid stops
    /// and [`CatalogError::DuplicateId`] for repeated identifiers.
    #[cfg(feature = "serde")]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, CatalogError> {
        let stops: Vec<Stop> = serde_json::from_reader(reader).map_err(CatalogError::Decode)?;
        let catalog = Self::new(stops)?;
        log::debug!("loaded stop catalog with {} stops", catalog.len());
        Ok(catalog)
    }

    /// Decode a JSON array of stops from a string.
    ///
    /// # Errors
    /// As for [`StopCatalog::from_json_reader`].
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Self::from_json_reader(json.as_bytes())
    }

    /// Look up a stop by identifier.
    #[must_use]
    pub fn get(&self, id: StopId) -> Option<&Stop> {
        self.stops.iter().find(|stop| stop.id() == id)
    }

    /// Iterate stops in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Stop> {
        self.stops.iter()
    }

    /// Number of stops.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.stops.len()
    }

    /// Report whether the catalog has no stops.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

impl<'a> IntoIterator for &'a StopCatalog {
    type Item = &'a Stop;
    type IntoIter = std::slice::Iter<'a, Stop>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BaseDemand, GeoPoint};
    use rstest::rstest;

    fn stop(id: u64) -> Stop {
        let location = GeoPoint::new(0.0, 0.0).expect("valid coordinates");
        let demand = BaseDemand {
            weekday: 1.0,
            weekend: 1.0,
        };
        Stop::new(id, format!("Stop {id}"), location, demand, 0).expect("valid stop")
    }

    #[rstest]
    fn preserves_insertion_order() {
        let catalog = StopCatalog::new(vec![stop(3), stop(1), stop(2)]).expect("valid catalog");
        let ids: Vec<u64> = catalog.iter().map(|s| s.id().get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[rstest]
    fn rejects_duplicate_ids() {
        let err = StopCatalog::new(vec![stop(1), stop(2), stop(1)]).expect_err("duplicate id");
        assert!(
            matches!(err, CatalogError::DuplicateId { id } if id.get() == 1),
            "unexpected error {err:?}"
        );
    }

    #[rstest]
    fn looks_up_by_id() {
        let catalog = StopCatalog::new(vec![stop(4), stop(9)]).expect("valid catalog");
        let id = StopId::new(9).expect("positive id");
        assert_eq!(catalog.get(id).map(Stop::name), Some("Stop 9"));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn decodes_json_array() {
        let json = r#"[
            { "id": 1, "name": "Stop A", "location": { "lat": 12.9716, "lon": 77.5946 },
              "demand": { "weekday": 50, "weekend": 80 }, "supply": 5 },
            { "id": 2, "name": "Stop B", "location": { "lat": 12.9352, "lon": 77.6245 },
              "demand": { "weekday": 70, "weekend": 100 }, "supply": 2 }
        ]"#;
        let catalog = StopCatalog::from_json_str(json).expect("decode catalog");
        assert_eq!(catalog.len(), 2);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case::not_an_array(r#"{ "id": 1 }"#)]
    #[case::negative_supply(
        r#"[{ "id": 1, "name": "A", "location": { "lat": 0, "lon": 0 },
              "demand": { "weekday": 1, "weekend": 1 }, "supply": -1 }]"#
    )]
    #[case::bad_latitude(
        r#"[{ "id": 1, "name": "A", "location": { "lat": 95, "lon": 0 },
              "demand": { "weekday": 1, "weekend": 1 }, "supply": 0 }]"#
    )]
    fn rejects_malformed_json(#[case] json: &str) {
        let err = StopCatalog::from_json_str(json).expect_err("invalid catalog");
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn decoding_rejects_duplicate_ids() {
        let json = r#"[
            { "id": 7, "name": "A", "location": { "lat": 0, "lon": 0 },
              "demand": { "weekday": 1, "weekend": 1 }, "supply": 0 },
            { "id": 7, "name": "B", "location": { "lat": 1, "lon": 1 },
              "demand": { "weekday": 1, "weekend": 1 }, "supply": 0 }
        ]"#;
        let err = StopCatalog::from_json_str(json).expect_err("duplicate ids");
        assert!(matches!(err, CatalogError::DuplicateId { .. }));
    }
}
