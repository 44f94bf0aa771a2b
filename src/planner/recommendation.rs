use crate::domain::{Goal, Segment, SegmentName, Tier};
use crate::segments::classify;
use chrono::DateTime;
use chrono_tz::Tz;
use std::fmt::{Display, Formatter};

/// The facts behind a recommendation, renderable as a single sentence.
#[derive(Clone, PartialEq, Debug)]
pub struct Justification {
    pub goal: Goal,
    pub name: SegmentName,
    pub tier: Tier,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub hint: Option<&'static str>,
}

impl Justification {
    pub fn new(goal: Goal, segment: &Segment, time_zone: &Tz) -> Self {
        let classification = classify(segment.name());
        let hint = match classification.tier {
            Tier::Avoid => classification.avoid_for,
            _ => classification.good_for,
        };

        Justification {
            goal,
            name: segment.name(),
            tier: classification.tier,
            start: segment.local_start(time_zone),
            end: segment.local_end(time_zone),
            hint,
        }
    }
}

impl Display for Justification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let verdict = match self.tier {
            Tier::Best => "is the most auspicious slot for",
            Tier::Good => "is auspicious for",
            Tier::Gain => "is favourable for",
            Tier::Neutral => "is acceptable for",
            Tier::Avoid => "is the least unfavourable slot for",
        };

        write!(
            f,
            "{} Choghadiya from {} to {} on {} {} {}",
            self.name,
            self.start.format("%H:%M"),
            self.end.format("%H:%M"),
            self.start.format("%a %-d %b"),
            verdict,
            self.goal
        )?;

        match (self.tier, self.hint) {
            (Tier::Avoid, Some(hint)) => write!(f, ", though it is best to avoid {}.", hint),
            (_, Some(hint)) => write!(f, ", good for {}.", hint),
            (_, None) => write!(f, "."),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct GoalRecommendation {
    pub segment: Segment,
    /// 1-based position in the ranking.
    pub rank: usize,
    pub tier: Tier,
    pub justification: Justification,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use chrono_tz::Asia::Kolkata;
    use pretty_assertions::assert_eq;

    fn segment(name: SegmentName) -> Segment {
        Segment::new(
            name,
            Utc.with_ymd_and_hms(2026, 2, 5, 4, 30, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 2, 5, 6, 0, 0).unwrap(),
            true,
        )
    }

    #[test]
    fn renders_a_favourable_slot_in_local_time() {
        let justification = Justification::new(Goal::Puja, &segment(SegmentName::Amrit), &Kolkata);

        assert_eq!(
            justification.to_string(),
            "Amrit Choghadiya from 10:00 to 11:30 on Thu 5 Feb is the most auspicious slot for puja, good for all auspicious work, puja and new beginnings."
        );
    }

    #[test]
    fn renders_an_avoid_slot_with_its_warning() {
        let justification = Justification::new(Goal::Travel, &segment(SegmentName::Rog), &Kolkata);

        assert_eq!(justification.tier, Tier::Avoid);
        assert_eq!(
            justification.to_string(),
            "Rog Choghadiya from 10:00 to 11:30 on Thu 5 Feb is the least unfavourable slot for travel, though it is best to avoid travel, medical procedures and new ventures."
        );
    }
}
