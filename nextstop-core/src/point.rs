//! Geographic positions and great-circle distance.
//!
//! [`GeoPoint`] stores WGS84 latitude and longitude in degrees. Distances use
//! the haversine formula on a sphere of radius [`EARTH_RADIUS_METRES`], which
//! is accurate enough to rank nearby stops without a road network.

use geo::{Coord, Point};
use thiserror::Error;

/// Radius of the spherical Earth model, in metres.
pub const EARTH_RADIUS_METRES: f64 = 6_371_000.0;

/// A validated latitude/longitude pair.
///
/// Construction through [`GeoPoint::new`] rejects non-finite values and
/// coordinates outside `[-90, 90]` latitude or `[-180, 180]` longitude, so
/// every `GeoPoint` in circulation yields a finite distance.
///
/// # Examples
///
/// ```
/// use nextstop_core::GeoPoint;
///
/// # fn main() -> Result<(), nextstop_core::GeoPointError> {
/// let here = GeoPoint::new(12.9716, 77.5946)?;
/// assert_eq!(here.distance_to(here), 0.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGeoPoint"))]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

/// Errors returned by [`GeoPoint::new`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeoPointError {
    /// A coordinate was NaN or infinite.
    #[error("coordinates must be finite numbers")]
    NonFinite,
    /// Latitude fell outside `[-90, 90]`.
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    /// Longitude fell outside `[-180, 180]`.
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

impl GeoPoint {
    /// Validates and constructs a [`GeoPoint`] from degrees.
    ///
    /// # Errors
    /// Returns [`GeoPointError`] when either coordinate is not finite or lies
    /// outside its valid range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoPointError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(GeoPointError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoPointError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoPointError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to `other`, in metres.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        haversine_distance(self, other)
    }
}

/// Great-circle distance between two points, in metres.
///
/// Symmetric in its arguments, zero for identical points and always finite
/// and non-negative for validated [`GeoPoint`]s.
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
#[must_use]
pub fn haversine_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `h` a hair past 1.0 for antipodal points.
    let h = h.clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_METRES * h.sqrt().atan2((1.0 - h).sqrt())
}

impl From<GeoPoint> for Coord<f64> {
    fn from(point: GeoPoint) -> Self {
        Self {
            x: point.longitude,
            y: point.latitude,
        }
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(point: GeoPoint) -> Self {
        Self::from(Coord::from(point))
    }
}

impl TryFrom<Coord<f64>> for GeoPoint {
    type Error = GeoPointError;

    /// Interprets `x` as longitude and `y` as latitude.
    fn try_from(coord: Coord<f64>) -> Result<Self, Self::Error> {
        Self::new(coord.y, coord.x)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// Unvalidated wire form of a [`GeoPoint`].
///
/// Accepts both `latitude`/`longitude` and the short `lat`/`lon` keys.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGeoPoint {
    #[serde(alias = "lat")]
    latitude: f64,
    #[serde(alias = "lon")]
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = GeoPointError;

    fn try_from(raw: RawGeoPoint) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}
