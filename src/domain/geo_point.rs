use crate::domain::InputError;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// A resolved location. Civil dates, weekdays and "today" are always evaluated in `time_zone`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
    time_zone: Tz,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64, time_zone: Tz) -> Result<Self, InputError> {
        validate_coordinates(latitude, longitude)?;
        Ok(GeoPoint {
            latitude,
            longitude,
            time_zone,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    pub fn local(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.time_zone)
    }

    pub fn civil_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        self.local(instant).date_naive()
    }
}

pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), InputError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(InputError::InvalidLatitude(latitude));
    }

    if !(-180.0..=180.0).contains(&longitude) {
        return Err(InputError::InvalidLongitude(longitude));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Asia::Kolkata;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::north_pole(90.0, 0.0)]
    #[case::south_pole(-90.0, 0.0)]
    #[case::date_line_east(0.0, 180.0)]
    #[case::date_line_west(0.0, -180.0)]
    #[case::ahmedabad(23.0225, 72.5714)]
    fn accepts_coordinates_in_range(#[case] latitude: f64, #[case] longitude: f64) {
        assert!(GeoPoint::new(latitude, longitude, Kolkata).is_ok());
    }

    #[rstest]
    #[case::latitude_too_large(90.5, 0.0, InputError::InvalidLatitude(90.5))]
    #[case::latitude_too_small(-91.0, 0.0, InputError::InvalidLatitude(-91.0))]
    #[case::longitude_too_large(0.0, 180.1, InputError::InvalidLongitude(180.1))]
    #[case::longitude_too_small(0.0, -200.0, InputError::InvalidLongitude(-200.0))]
    fn rejects_coordinates_out_of_range(#[case] latitude: f64, #[case] longitude: f64, #[case] expected: InputError) {
        assert_eq!(GeoPoint::new(latitude, longitude, Kolkata), Err(expected));
    }

    #[test]
    fn rejects_nan_coordinates() {
        assert!(matches!(GeoPoint::new(f64::NAN, 0.0, Kolkata), Err(InputError::InvalidLatitude(_))));
        assert!(matches!(GeoPoint::new(0.0, f64::NAN, Kolkata), Err(InputError::InvalidLongitude(_))));
    }

    #[test]
    fn civil_date_uses_the_location_time_zone() {
        let point = GeoPoint::new(23.0225, 72.5714, Kolkata).unwrap();
        // 20:00 UTC is already 01:30 the next day in India
        let instant = Utc.with_ymd_and_hms(2026, 2, 5, 20, 0, 0).unwrap();

        assert_eq!(point.civil_date(instant), NaiveDate::from_ymd_opt(2026, 2, 6).unwrap());
    }
}
