//! Error types raised while configuring peak hours.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised while building or parsing peak-hour windows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PeakHoursError {
    /// An hour lay outside `0..=23`.
    #[error("hour {hour} is outside 0..=23")]
    HourOutOfRange {
        /// The offending hour.
        hour: u32,
    },
    /// A window ended before it started.
    #[error("peak window {start}-{end} ends before it starts")]
    Inverted {
        /// First hour of the window.
        start: u32,
        /// Last hour of the window.
        end: u32,
    },
    /// A window string was not of the form `start-end`.
    #[error("peak window {input:?} must look like `start-end`, e.g. `17-20`")]
    Malformed {
        /// The text that failed to parse.
        input: String,
    },
}
