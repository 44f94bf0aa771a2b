use crate::domain::{SegmentName, Tier};
use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Classification {
    pub tier: Tier,
    pub good_for: Option<&'static str>,
    pub avoid_for: Option<&'static str>,
}

/// Indexed by `SegmentName::as_index`.
const CLASSIFICATIONS: [Classification; 7] = [
    // Amrit
    Classification {
        tier: Tier::Best,
        good_for: Some("all auspicious work, puja and new beginnings"),
        avoid_for: None,
    },
    // Shubh
    Classification {
        tier: Tier::Good,
        good_for: Some("marriage, ceremonies, worship and education"),
        avoid_for: None,
    },
    // Labh
    Classification {
        tier: Tier::Gain,
        good_for: Some("business, trade, purchases and study"),
        avoid_for: None,
    },
    // Char
    Classification {
        tier: Tier::Neutral,
        good_for: Some("travel, vehicles and work that involves movement"),
        avoid_for: None,
    },
    // Rog
    Classification {
        tier: Tier::Avoid,
        good_for: None,
        avoid_for: Some("travel, medical procedures and new ventures"),
    },
    // Kaal
    Classification {
        tier: Tier::Avoid,
        good_for: None,
        avoid_for: Some("new beginnings and auspicious ceremonies"),
    },
    // Udveg
    Classification {
        tier: Tier::Avoid,
        good_for: Some("government related work"),
        avoid_for: Some("new ventures and auspicious ceremonies"),
    },
];

pub fn classify(name: SegmentName) -> Classification {
    CLASSIFICATIONS[name.as_index()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SegmentName::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Amrit, Tier::Best)]
    #[case(Shubh, Tier::Good)]
    #[case(Labh, Tier::Gain)]
    #[case(Char, Tier::Neutral)]
    #[case(Rog, Tier::Avoid)]
    #[case(Kaal, Tier::Avoid)]
    #[case(Udveg, Tier::Avoid)]
    fn classifies_each_name(#[case] name: SegmentName, #[case] expected: Tier) {
        assert_eq!(classify(name).tier, expected);
    }

    #[test]
    fn every_avoid_segment_says_what_to_avoid() {
        for name in SegmentName::all() {
            let classification = classify(name);
            if classification.tier == Tier::Avoid {
                assert!(classification.avoid_for.is_some(), "{} has no avoid hint", name);
            } else {
                assert!(classification.good_for.is_some(), "{} has no good hint", name);
            }
        }
    }
}
