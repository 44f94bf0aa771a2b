use crate::domain::SegmentName::{Amrit, Char, Kaal, Labh, Rog, Shubh, Udveg};
use crate::domain::{InputError, Segment, SegmentName, SolarDay, Weekday};
use crate::extensions::date_time_ext::ToWeekday;
use chrono::{DateTime, Duration, Utc};

pub const SEGMENTS_PER_HALF: usize = 8;

/// Order in which names follow each other between sunrise and sunset.
const DAY_CYCLE: [SegmentName; 7] = [Udveg, Char, Labh, Amrit, Kaal, Shubh, Rog];

/// Order in which names follow each other between sunset and the next sunrise.
const NIGHT_CYCLE: [SegmentName; 7] = [Shubh, Amrit, Char, Rog, Kaal, Labh, Udveg];

/// First name of the day and of the night, indexed by `Weekday::as_index`.
const START_NAMES: [(SegmentName, SegmentName); 7] = [
    (Amrit, Char),   // Monday
    (Rog, Kaal),     // Tuesday
    (Labh, Udveg),   // Wednesday
    (Shubh, Amrit),  // Thursday
    (Char, Rog),     // Friday
    (Kaal, Labh),    // Saturday
    (Udveg, Shubh),  // Sunday
];

pub fn resolve_start_name(weekday: Weekday, is_daytime: bool) -> SegmentName {
    let (day, night) = START_NAMES[weekday.as_index()];
    if is_daytime { day } else { night }
}

/// Splits `[start, end)` into eight equal segments named by walking the day or night cycle from `start_name`.
///
/// Seven names cover eight slots, so `start_name` comes back as the eighth segment. Boundaries are
/// computed in whole milliseconds from `start` and the last segment ends exactly at `end`, which
/// keeps consecutive segments gapless.
pub fn partition(start: DateTime<Utc>, end: DateTime<Utc>, start_name: SegmentName, is_daytime: bool) -> Result<[Segment; SEGMENTS_PER_HALF], InputError> {
    if start >= end {
        return Err(InputError::InvalidSpan { start, end });
    }

    let cycle = if is_daytime { &DAY_CYCLE } else { &NIGHT_CYCLE };
    // Each cycle holds all seven names
    let offset = cycle.iter().position(|name| *name == start_name).unwrap_or(0);

    let span_ms = (end - start).num_milliseconds();
    let boundary = |index: usize| {
        if index == SEGMENTS_PER_HALF {
            end
        } else {
            start + Duration::milliseconds(span_ms * index as i64 / SEGMENTS_PER_HALF as i64)
        }
    };

    Ok(std::array::from_fn(|index| {
        let name = cycle[(offset + index) % cycle.len()];
        Segment::new(name, boundary(index), boundary(index + 1), is_daytime)
    }))
}

/// All sixteen segments of a Vedic day: eight from sunrise to sunset, then eight until the next sunrise.
pub fn partition_day(solar_day: &SolarDay) -> Vec<Segment> {
    let weekday = solar_day.date().to_weekday();

    // A SolarDay is strictly ordered, so neither half can be empty
    let day = partition(solar_day.sunrise(), solar_day.sunset(), resolve_start_name(weekday, true), true);
    let night = partition(solar_day.sunset(), solar_day.next_sunrise(), resolve_start_name(weekday, false), false);

    day.into_iter().chain(night).flatten().collect()
}
