//! Hour-of-day windows with elevated demand.
#![forbid(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PeakHoursError;

/// Demand multiplier applied inside a peak window.
pub const PEAK_MULTIPLIER: f64 = 1.5;

/// Last valid hour of the day.
const LAST_HOUR: u32 = 23;

/// An inclusive range of hours, `start..=end`, within a single day.
///
/// # Examples
///
/// ```
/// use nextstop_scorer::HourWindow;
///
/// # fn main() -> Result<(), nextstop_scorer::PeakHoursError> {
/// let evening: HourWindow = "17-20".parse()?;
/// assert!(evening.contains(17));
/// assert!(evening.contains(20));
/// assert!(!evening.contains(21));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHourWindow")]
pub struct HourWindow {
    start: u32,
    end: u32,
}

impl HourWindow {
    /// Validates and constructs a window.
    ///
    /// # Errors
    /// Returns [`PeakHoursError::HourOutOfRange`] when either bound exceeds
    /// 23 and [`PeakHoursError::Inverted`] when `end < start`.
    pub const fn new(start: u32, end: u32) -> Result<Self, PeakHoursError> {
        if start > LAST_HOUR {
            return Err(PeakHoursError::HourOutOfRange { hour: start });
        }
        if end > LAST_HOUR {
            return Err(PeakHoursError::HourOutOfRange { hour: end });
        }
        if end < start {
            return Err(PeakHoursError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// First hour inside the window.
    #[must_use]
    pub const fn start(self) -> u32 {
        self.start
    }

    /// Last hour inside the window.
    #[must_use]
    pub const fn end(self) -> u32 {
        self.end
    }

    /// Report whether `hour` falls inside the window, bounds included.
    #[must_use]
    pub const fn contains(self, hour: u32) -> bool {
        self.start <= hour && hour <= self.end
    }
}

impl fmt::Display for HourWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for HourWindow {
    type Err = PeakHoursError;

    /// Parses `start-end`, or a single hour as a one-hour window.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = || PeakHoursError::Malformed {
            input: input.to_owned(),
        };
        let parse_hour = |text: &str| text.trim().parse::<u32>().map_err(|_| malformed());
        match input.split_once('-') {
            Some((start, end)) => Self::new(parse_hour(start)?, parse_hour(end)?),
            None => {
                let hour = parse_hour(input)?;
                Self::new(hour, hour)
            }
        }
    }
}

#[derive(Deserialize)]
struct RawHourWindow {
    start: u32,
    end: u32,
}

impl TryFrom<RawHourWindow> for HourWindow {
    type Error = PeakHoursError;

    fn try_from(raw: RawHourWindow) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

/// Morning and evening rush-hour windows.
///
/// Defaults to 08–10 in the morning and 17–20 in the evening, both
/// inclusive. Deployments that want a shorter evening peak override
/// [`PeakHours::evening`]; the multiplier stays [`PEAK_MULTIPLIER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakHours {
    /// Morning rush.
    pub morning: HourWindow,
    /// Evening rush.
    pub evening: HourWindow,
}

impl PeakHours {
    /// Default morning peak, 08:00 through 10:59.
    pub const DEFAULT_MORNING: HourWindow = HourWindow { start: 8, end: 10 };
    /// Default evening peak, 17:00 through 20:59.
    pub const DEFAULT_EVENING: HourWindow = HourWindow { start: 17, end: 20 };

    /// Build from explicit windows.
    #[must_use]
    pub const fn new(morning: HourWindow, evening: HourWindow) -> Self {
        Self { morning, evening }
    }

    /// Report whether `hour` is in either window.
    #[must_use]
    pub const fn is_peak(self, hour: u32) -> bool {
        self.morning.contains(hour) || self.evening.contains(hour)
    }

    /// Demand multiplier for `hour`: [`PEAK_MULTIPLIER`] at peak, else `1.0`.
    #[must_use]
    pub const fn multiplier(self, hour: u32) -> f64 {
        if self.is_peak(hour) { PEAK_MULTIPLIER } else { 1.0 }
    }
}

impl Default for PeakHours {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MORNING, Self::DEFAULT_EVENING)
    }
}
