use crate::domain::{GeoPoint, InputError, Segment, SolarDay, SolarOutcome, Tier, UnavailableReason};
use crate::segments::{SEGMENTS_PER_HALF, partition_day, resolve_current, resolve_next};
use crate::solar::SolarCalculator;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::{debug, instrument, warn};

const SEGMENTS_PER_DAY: usize = 2 * SEGMENTS_PER_HALF;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct UnavailableDay {
    pub date: NaiveDate,
    pub reason: UnavailableReason,
}

/// Ordered segments for a range of civil dates at one location.
#[derive(Clone, Debug)]
pub struct Timetable {
    time_zone: Tz,
    days: Vec<SolarDay>,
    unavailable: Vec<UnavailableDay>,
    segments: Vec<Segment>,
}

impl Timetable {
    /// Partitions every civil date in `[from, to]`. Dates without sunrise or sunset are recorded, not fatal.
    #[instrument(skip_all, fields(from = %from, to = %to))]
    pub fn build(location: &GeoPoint, from: NaiveDate, to: NaiveDate, calculator: &SolarCalculator) -> Result<Self, InputError> {
        if from > to {
            return Err(InputError::InvalidDateRange { from, to });
        }

        debug!("🗓️ Building timetable...");
        let mut days = Vec::new();
        let mut unavailable = Vec::new();
        let mut segments = Vec::new();

        for date in from.iter_days().take_while(|date| *date <= to) {
            match calculator.solar_day(date, location)? {
                SolarOutcome::Available(solar_day) => {
                    segments.extend(partition_day(&solar_day));
                    days.push(solar_day);
                }
                SolarOutcome::Unavailable(reason) => {
                    warn!("🗓️ No sunrise/sunset data for {}: {}", date, reason);
                    unavailable.push(UnavailableDay { date, reason });
                }
            }
        }

        debug!("🗓️ Building timetable... OK, {} days, {} unavailable", days.len(), unavailable.len());
        Ok(Timetable {
            time_zone: location.time_zone(),
            days,
            unavailable,
            segments,
        })
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    pub fn days(&self) -> &[SolarDay] {
        &self.days
    }

    pub fn unavailable(&self) -> &[UnavailableDay] {
        &self.unavailable
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Day and night segments of the Vedic day that starts at the sunrise of `date`.
    pub fn day_and_night(&self, date: NaiveDate) -> Option<(&[Segment], &[Segment])> {
        let index = self.days.iter().position(|day| day.date() == date)?;
        let day_start = index * SEGMENTS_PER_DAY;
        let night_start = day_start + SEGMENTS_PER_HALF;
        Some((
            &self.segments[day_start..night_start],
            &self.segments[night_start..night_start + SEGMENTS_PER_HALF],
        ))
    }

    pub fn covers(&self, now: DateTime<Utc>) -> bool {
        self.current(now).is_some()
    }

    pub fn current(&self, now: DateTime<Utc>) -> Option<&Segment> {
        // A day is skipped when unavailable, so search each loaded day rather than assume contiguity
        self.days
            .iter()
            .filter(|day| day.sunrise() <= now && now < day.next_sunrise())
            .find_map(|day| self.day_and_night(day.date()).and_then(|(day, night)| resolve_current(now, day, night)))
    }

    pub fn next(&self, now: DateTime<Utc>, desired: &[Tier]) -> Option<&Segment> {
        resolve_next(now, &self.segments, desired)
    }
}
