use crate::domain::{InputError, SolarDay, SolarOutcome, UnavailableReason, validate_coordinates};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use tracing::{instrument, trace};

/// Zenith of the sun's centre at rise and set, including refraction and the solar disk radius.
const ZENITH_DEG: f64 = 90.833;

#[derive(Debug, Clone, Copy, PartialEq)]
enum SolarEvent {
    Sunrise,
    Sunset,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum EventTime {
    At(DateTime<Utc>),
    NeverRises,
    NeverSets,
}

/// Computes sunrise, sunset and the following sunrise for a civil `date` at the given coordinate.
///
/// Uses the NOAA/Schlyter almanac method, accurate to a minute or two for latitudes within ±60°.
/// A location without sunrise or sunset on `date` (or the day after) yields
/// [`SolarOutcome::Unavailable`], never an error.
///
/// `date` is read as the mean solar date at `longitude`. Use [`crate::solar::SolarCalculator::solar_day`]
/// for the sunrise on a civil date in a time zone.
#[instrument(level = "trace")]
pub fn compute_solar_day(date: NaiveDate, latitude: f64, longitude: f64) -> Result<SolarOutcome, InputError> {
    validate_coordinates(latitude, longitude)?;
    let next_date = date.succ_opt().ok_or(InputError::DateOutOfRange(date))?;

    let sunrise = event_time(date, latitude, longitude, SolarEvent::Sunrise)?;
    let sunset = event_time(date, latitude, longitude, SolarEvent::Sunset)?;
    let next_sunrise = event_time(next_date, latitude, longitude, SolarEvent::Sunrise)?;

    let outcome = match (sunrise, sunset, next_sunrise) {
        (EventTime::At(sunrise), EventTime::At(sunset), EventTime::At(next_sunrise)) => SolarDay::new(date, sunrise, sunset, next_sunrise)
            .map(SolarOutcome::Available)
            .unwrap_or(SolarOutcome::Unavailable(UnavailableReason::Irregular)),
        (EventTime::NeverRises, _, _) | (_, EventTime::NeverRises, _) | (_, _, EventTime::NeverRises) => {
            SolarOutcome::Unavailable(UnavailableReason::PolarNight)
        }
        _ => SolarOutcome::Unavailable(UnavailableReason::MidnightSun),
    };

    trace!(outcome = ?outcome, "☀️ Computed solar day {}", date);
    Ok(outcome)
}

fn event_time(date: NaiveDate, latitude: f64, longitude: f64, event: SolarEvent) -> Result<EventTime, InputError> {
    let day_of_year = date.ordinal() as f64;
    let longitude_hour = longitude / 15.0;

    // Approximate time of the event, in days
    let approximate_hour = match event {
        SolarEvent::Sunrise => 6.0,
        SolarEvent::Sunset => 18.0,
    };
    let t = day_of_year + (approximate_hour - longitude_hour) / 24.0;

    let mean_anomaly = 0.9856 * t - 3.289;
    let true_longitude = normalize(
        mean_anomaly + 1.916 * sin_deg(mean_anomaly) + 0.020 * sin_deg(2.0 * mean_anomaly) + 282.634,
        360.0,
    );

    // Right ascension must sit in the same quadrant as the true longitude
    let mut right_ascension = normalize(atan_deg(0.91764 * tan_deg(true_longitude)), 360.0);
    let longitude_quadrant = (true_longitude / 90.0).floor() * 90.0;
    let ascension_quadrant = (right_ascension / 90.0).floor() * 90.0;
    right_ascension = (right_ascension + longitude_quadrant - ascension_quadrant) / 15.0;

    let sin_declination = 0.39782 * sin_deg(true_longitude);
    let cos_declination = sin_declination.asin().cos();

    let cos_hour_angle = (cos_deg(ZENITH_DEG) - sin_declination * sin_deg(latitude)) / (cos_declination * cos_deg(latitude));
    if !cos_hour_angle.is_finite() {
        // Only reachable at the poles themselves, where cos(latitude) is zero
        return Ok(if sin_declination * latitude.signum() > 0.0 { EventTime::NeverSets } else { EventTime::NeverRises });
    }
    if cos_hour_angle > 1.0 {
        return Ok(EventTime::NeverRises);
    }
    if cos_hour_angle < -1.0 {
        return Ok(EventTime::NeverSets);
    }

    let hour_angle = match event {
        SolarEvent::Sunrise => 360.0 - acos_deg(cos_hour_angle),
        SolarEvent::Sunset => acos_deg(cos_hour_angle),
    } / 15.0;

    let local_mean_time = normalize(hour_angle + right_ascension - 0.06571 * t - 6.622, 24.0);

    // Not wrapped into [0, 24) so the event stays on the local civil day east and west of Greenwich
    let universal_time = local_mean_time - longitude_hour;
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    midnight
        .checked_add_signed(Duration::milliseconds((universal_time * 3_600_000.0).round() as i64))
        .map(EventTime::At)
        .ok_or(InputError::DateOutOfRange(date))
}

fn normalize(value: f64, modulus: f64) -> f64 {
    value.rem_euclid(modulus)
}

fn sin_deg(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

fn cos_deg(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

fn tan_deg(degrees: f64) -> f64 {
    degrees.to_radians().tan()
}

fn atan_deg(value: f64) -> f64 {
    value.atan().to_degrees()
}

fn acos_deg(value: f64) -> f64 {
    value.acos().to_degrees()
}
