use crate::domain::{SegmentName, Tier};
use crate::segments::classify;
use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use serde::Serialize;

/// One Choghadiya: a named eighth of a daytime or nighttime span, `[start, end)`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Segment {
    name: SegmentName,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    is_daytime: bool,
}

impl Segment {
    pub fn new(name: SegmentName, start: DateTime<Utc>, end: DateTime<Utc>, is_daytime: bool) -> Self {
        Segment {
            name,
            start,
            end,
            is_daytime,
        }
    }

    pub fn name(&self) -> SegmentName {
        self.name
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn is_daytime(&self) -> bool {
        self.is_daytime
    }

    pub fn tier(&self) -> Tier {
        classify(self.name).tier
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start < end && self.end > start
    }

    pub fn local_start(&self, time_zone: &Tz) -> DateTime<Tz> {
        self.start.with_timezone(time_zone)
    }

    pub fn local_end(&self, time_zone: &Tz) -> DateTime<Tz> {
        self.end.with_timezone(time_zone)
    }
}
