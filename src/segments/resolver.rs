use crate::domain::{Segment, Tier};
use chrono::{DateTime, Utc};

/// Returns the segment with `start <= now < end`, or `None` when `now` lies outside the loaded range.
pub fn resolve_current<'a>(now: DateTime<Utc>, day_segments: &'a [Segment], night_segments: &'a [Segment]) -> Option<&'a Segment> {
    day_segments.iter().chain(night_segments).find(|segment| segment.contains(now))
}

/// Returns the first segment starting after `now` whose tier is one of `desired`.
///
/// The segment containing `now` is not "next" even if its tier matches.
pub fn resolve_next<'a>(now: DateTime<Utc>, segments: &'a [Segment], desired: &[Tier]) -> Option<&'a Segment> {
    segments
        .iter()
        .skip_while(|segment| segment.start() <= now)
        .find(|segment| desired.contains(&segment.tier()))
}
