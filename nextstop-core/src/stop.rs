use std::num::NonZeroU64;

use thiserror::Error;

use crate::{DayType, GeoPoint};

/// Positive, catalog-unique stop identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StopId(NonZeroU64);

impl StopId {
    /// Wrap a raw identifier, rejecting zero.
    ///
    /// # Errors
    /// Returns [`StopError::ZeroId`] when `raw` is zero.
    pub const fn new(raw: u64) -> Result<Self, StopError> {
        match NonZeroU64::new(raw) {
            Some(id) => Ok(Self(id)),
            None => Err(StopError::ZeroId),
        }
    }

    /// The raw numeric identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl std::fmt::Display for StopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Expected rider demand at a stop, split by day type.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseDemand {
    /// Demand on Monday to Friday.
    pub weekday: f64,
    /// Demand on Saturday and Sunday.
    pub weekend: f64,
}

impl BaseDemand {
    /// Demand for the given day type.
    #[must_use]
    pub const fn for_day(self, day: DayType) -> f64 {
        match day {
            DayType::Weekday => self.weekday,
            DayType::Weekend => self.weekend,
        }
    }

    fn validate(self) -> Result<Self, StopError> {
        let valid = |value: f64| value.is_finite() && value >= 0.0;
        if valid(self.weekday) && valid(self.weekend) {
            Ok(self)
        } else {
            Err(StopError::InvalidDemand {
                weekday: self.weekday,
                weekend: self.weekend,
            })
        }
    }
}

/// A physical pick-up location drivers can be sent to.
///
/// Stops are immutable once built; the catalog owns them for the lifetime of
/// the process.
///
/// # Examples
///
/// ```
/// use nextstop_core::{BaseDemand, GeoPoint, Stop};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let stop = Stop::new(
///     1,
///     "Stop A",
///     GeoPoint::new(12.9716, 77.5946)?,
///     BaseDemand { weekday: 50.0, weekend: 80.0 },
///     5,
/// )?;
/// assert_eq!(stop.id().get(), 1);
/// assert_eq!(stop.supply(), 5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "StopRecord", rename_all = "camelCase"))]
pub struct Stop {
    id: StopId,
    name: String,
    location: GeoPoint,
    base_demand: BaseDemand,
    supply: u32,
}

/// Errors returned when constructing a [`Stop`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StopError {
    /// Stop identifiers start at one.
    #[error("stop id must be a positive integer")]
    ZeroId,
    /// A base demand value was negative or not finite.
    #[error("base demand must be finite and non-negative (weekday {weekday}, weekend {weekend})")]
    InvalidDemand {
        /// Supplied weekday demand.
        weekday: f64,
        /// Supplied weekend demand.
        weekend: f64,
    },
}

impl Stop {
    /// Validates and constructs a [`Stop`].
    ///
    /// # Errors
    /// Returns [`StopError`] when `id` is zero or either base demand is
    /// negative or not finite.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        location: GeoPoint,
        base_demand: BaseDemand,
        supply: u32,
    ) -> Result<Self, StopError> {
        Ok(Self {
            id: StopId::new(id)?,
            name: name.into(),
            location,
            base_demand: base_demand.validate()?,
            supply,
        })
    }

    /// Catalog-unique identifier.
    #[must_use]
    pub const fn id(&self) -> StopId {
        self.id
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the stop is.
    #[must_use]
    pub const fn location(&self) -> GeoPoint {
        self.location
    }

    /// Demand before any time-of-day adjustment.
    #[must_use]
    pub const fn base_demand(&self) -> BaseDemand {
        self.base_demand
    }

    /// Vehicles already heading to this stop.
    #[must_use]
    pub const fn supply(&self) -> u32 {
        self.supply
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct StopRecord {
    id: u64,
    name: String,
    location: GeoPoint,
    #[serde(alias = "demand")]
    base_demand: BaseDemand,
    supply: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<StopRecord> for Stop {
    type Error = StopError;

    fn try_from(record: StopRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.id,
            record.name,
            record.location,
            record.base_demand,
            record.supply,
        )
    }
}
