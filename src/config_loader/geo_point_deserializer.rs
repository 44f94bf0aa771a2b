use crate::domain::GeoPoint;
use chrono_tz::Tz;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
            time_zone: String,
        }

        let inner = Inner::deserialize(deserializer)?;
        let time_zone = inner
            .time_zone
            .parse::<Tz>()
            .map_err(|_| Error::custom(format!("invalid location time zone: '{}', must be an IANA zone name", inner.time_zone)))?;

        GeoPoint::new(inner.latitude, inner.longitude, time_zone).map_err(|e| Error::custom(format!("invalid location: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Asia::Kolkata;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn deserializes_a_valid_location() {
        let point = serde_json::from_value::<GeoPoint>(json!({ "latitude": 23.0225, "longitude": 72.5714, "time_zone": "Asia/Kolkata" })).unwrap();

        assert_eq!(point, GeoPoint::new(23.0225, 72.5714, Kolkata).unwrap());
    }

    #[rstest]
    #[case::latitude_too_large(json!({ "latitude": 95.0, "longitude": 72.5714, "time_zone": "Asia/Kolkata" }), "invalid location: invalid latitude: 95")]
    #[case::longitude_too_small(json!({ "latitude": 23.0, "longitude": -190.0, "time_zone": "Asia/Kolkata" }), "invalid location: invalid longitude: -190")]
    #[case::unknown_time_zone(json!({ "latitude": 23.0, "longitude": 72.0, "time_zone": "India/Ahmedabad" }), "invalid location time zone: 'India/Ahmedabad'")]
    #[case::missing_time_zone(json!({ "latitude": 23.0, "longitude": 72.0 }), "missing field `time_zone`")]
    fn fails_for_an_invalid_location(#[case] value: serde_json::Value, #[case] expected_message: &str) {
        let error = serde_json::from_value::<GeoPoint>(value).unwrap_err();

        assert!(
            error.to_string().starts_with(expected_message),
            "expected '{}' to start with '{}'",
            error,
            expected_message
        );
    }
}
