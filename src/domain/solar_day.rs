use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Sunrise, sunset and the following sunrise for a date. Always `sunrise < sunset < next_sunrise`.
///
/// Days built by `SolarCalculator` carry the civil date of the sunrise in the location's zone.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct SolarDay {
    date: NaiveDate,
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
    next_sunrise: DateTime<Utc>,
}

impl SolarDay {
    /// Returns `None` unless the three instants are strictly ordered.
    pub fn new(date: NaiveDate, sunrise: DateTime<Utc>, sunset: DateTime<Utc>, next_sunrise: DateTime<Utc>) -> Option<Self> {
        if sunrise < sunset && sunset < next_sunrise {
            Some(SolarDay {
                date,
                sunrise,
                sunset,
                next_sunrise,
            })
        } else {
            None
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn sunrise(&self) -> DateTime<Utc> {
        self.sunrise
    }

    pub fn sunset(&self) -> DateTime<Utc> {
        self.sunset
    }

    pub fn next_sunrise(&self) -> DateTime<Utc> {
        self.next_sunrise
    }

    pub fn day_length(&self) -> Duration {
        self.sunset - self.sunrise
    }

    pub fn night_length(&self) -> Duration {
        self.next_sunrise - self.sunset
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum UnavailableReason {
    /// The sun stays below the horizon all day.
    PolarNight,
    /// The sun stays above the horizon all day.
    MidnightSun,
    /// Crossings exist but are not strictly ordered, close to the polar circles.
    Irregular,
}

impl Display for UnavailableReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            UnavailableReason::PolarNight => write!(f, "the sun does not rise"),
            UnavailableReason::MidnightSun => write!(f, "the sun does not set"),
            UnavailableReason::Irregular => write!(f, "sunrise and sunset are irregular"),
        }
    }
}

/// The outcome of a solar computation. `Unavailable` is a valid answer, not an error.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum SolarOutcome {
    Available(SolarDay),
    Unavailable(UnavailableReason),
}

impl SolarOutcome {
    pub fn solar_day(&self) -> Option<&SolarDay> {
        match self {
            SolarOutcome::Available(solar_day) => Some(solar_day),
            SolarOutcome::Unavailable(_) => None,
        }
    }
}
