use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

/// Rejected input at the boundary of the engine. Values are never clamped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("invalid latitude: {0}, must be between -90 and 90")]
    InvalidLatitude(f64),
    #[error("invalid longitude: {0}, must be between -180 and 180")]
    InvalidLongitude(f64),
    #[error("invalid window, start {start} must be before end {end}")]
    InvalidWindow { start: DateTime<Utc>, end: DateTime<Utc> },
    #[error("invalid span, start {start} must be before end {end}")]
    InvalidSpan { start: DateTime<Utc>, end: DateTime<Utc> },
    #[error("invalid number of hours: {0}, must be at least 1 and end within the supported range")]
    InvalidHours(u32),
    #[error("invalid date range, {from} is after {to}")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },
    #[error("date {0} is outside the supported range")]
    DateOutOfRange(NaiveDate),
}
