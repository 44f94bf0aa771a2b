use crate::domain::Weekday;
use crate::domain::Weekday::{Friday, Monday, Saturday, Sunday, Thursday, Tuesday, Wednesday};
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc};

pub trait ToWeekday {
    fn to_weekday(&self) -> Weekday;
}

impl<T: Datelike> ToWeekday for T {
    fn to_weekday(&self) -> Weekday {
        match self.weekday() {
            chrono::Weekday::Mon => Monday,
            chrono::Weekday::Tue => Tuesday,
            chrono::Weekday::Wed => Wednesday,
            chrono::Weekday::Thu => Thursday,
            chrono::Weekday::Fri => Friday,
            chrono::Weekday::Sat => Saturday,
            chrono::Weekday::Sun => Sunday,
        }
    }
}

pub trait StartOfDay {
    /// Returns the first instant of this civil date in `time_zone`.
    ///
    /// When midnight falls in a DST gap the first valid hour is used instead, and for an ambiguous
    /// midnight the earliest instant wins.
    fn start_of_day_in<Tz: TimeZone>(&self, time_zone: &Tz) -> Option<DateTime<Utc>>;
}

impl StartOfDay for NaiveDate {
    fn start_of_day_in<Tz: TimeZone>(&self, time_zone: &Tz) -> Option<DateTime<Utc>> {
        (0..=3)
            .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
            .find_map(|time| time_zone.from_local_datetime(&self.and_time(time)).earliest())
            .map(|local| local.with_timezone(&Utc))
    }
}
