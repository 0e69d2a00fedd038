//! Per-request scoring inputs.

use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Timelike, Weekday};

use crate::GeoPoint;

/// Whether a calendar day uses weekday or weekend demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayType {
    /// Monday to Friday.
    Weekday,
    /// Saturday and Sunday.
    Weekend,
}

impl From<Weekday> for DayType {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Sat | Weekday::Sun => Self::Weekend,
            Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu | Weekday::Fri => {
                Self::Weekday
            }
        }
    }
}

/// Driver position and the wall-clock time of the request.
///
/// `local_time` is expressed in the deployment's time zone; day-of-week and
/// hour-of-day are read from it directly. Build one per request and drop it
/// afterwards.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use nextstop_core::{DayType, GeoPoint, ScoringContext};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let saturday_noon = NaiveDate::from_ymd_opt(2024, 1, 6)
///     .and_then(|date| date.and_hms_opt(12, 0, 0))
///     .ok_or("invalid date")?;
/// let context = ScoringContext::new(GeoPoint::new(12.9, 77.6)?, saturday_noon);
/// assert_eq!(context.weekday(), Weekday::Sat);
/// assert_eq!(context.day_type(), DayType::Weekend);
/// assert_eq!(context.hour(), 12);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringContext {
    driver_location: GeoPoint,
    local_time: NaiveDateTime,
}

impl ScoringContext {
    /// Build a context from a wall-clock time already in the deployment zone.
    #[must_use]
    pub const fn new(driver_location: GeoPoint, local_time: NaiveDateTime) -> Self {
        Self {
            driver_location,
            local_time,
        }
    }

    /// Build a context from a zoned instant.
    ///
    /// The calendar fields are taken in the instant's own zone, so convert
    /// with [`DateTime::with_timezone`] first when the deployment zone
    /// differs from the caller's.
    #[must_use]
    pub fn at_instant<Tz: TimeZone>(driver_location: GeoPoint, instant: &DateTime<Tz>) -> Self {
        Self::new(driver_location, instant.naive_local())
    }

    /// Where the driver currently is.
    #[must_use]
    pub const fn driver_location(&self) -> GeoPoint {
        self.driver_location
    }

    /// Wall-clock time of the request in the deployment zone.
    #[must_use]
    pub const fn local_time(&self) -> NaiveDateTime {
        self.local_time
    }

    /// Day of the week of the request.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.local_time.weekday()
    }

    /// Hour of the day of the request, `0..=23`.
    #[must_use]
    pub fn hour(&self) -> u32 {
        self.local_time.hour()
    }

    /// Weekday or weekend.
    #[must_use]
    pub fn day_type(&self) -> DayType {
        DayType::from(self.weekday())
    }
}
