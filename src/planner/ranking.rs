use crate::domain::{GeoPoint, GoalRequest, InputError, Segment, Tier};
use crate::planner::{GoalRecommendation, Justification};
use crate::segments::Timetable;
use crate::solar::SolarCalculator;
use chrono_tz::Tz;
use std::cmp::Reverse;
use tracing::{debug, instrument};

/// Ranks the segments overlapping the request window: higher tiers first, earlier starts first within a tier.
///
/// Avoid segments only appear when the window holds nothing better. An empty result means no
/// recommendation is available, for example when the whole window lies in polar night.
#[instrument(skip_all, fields(goal = %request.goal, window = %request.window))]
pub fn plan_goal(request: &GoalRequest, time_zone: Tz, timetable: &[Segment]) -> Result<Vec<GoalRecommendation>, InputError> {
    let bound = request.window.resolve(request.reference_now, time_zone)?;

    let mut candidates = timetable
        .iter()
        .filter(|segment| segment.overlaps(bound.start, bound.end))
        .collect::<Vec<_>>();

    if candidates.iter().any(|segment| segment.tier() != Tier::Avoid) {
        candidates.retain(|segment| segment.tier() != Tier::Avoid);
    }

    candidates.sort_by_key(|segment| (Reverse(segment.tier().priority()), segment.start()));

    let recommendations = candidates
        .into_iter()
        .enumerate()
        .map(|(index, segment)| GoalRecommendation {
            segment: *segment,
            rank: index + 1,
            tier: segment.tier(),
            justification: Justification::new(request.goal, segment, &time_zone),
        })
        .collect::<Vec<_>>();

    debug!("🎯 Ranked {} candidate segments", recommendations.len());
    Ok(recommendations)
}

/// Builds the timetable the request window needs and ranks it.
///
/// Loading starts a civil day before the window so the night that began the previous evening is included.
#[instrument(skip_all, fields(goal = %request.goal, window = %request.window))]
pub fn plan_for(request: &GoalRequest, location: &GeoPoint, calculator: &SolarCalculator) -> Result<Vec<GoalRecommendation>, InputError> {
    let bound = request.window.resolve(request.reference_now, location.time_zone())?;
    let first_date = location.civil_date(bound.start);
    let from = first_date.pred_opt().ok_or(InputError::DateOutOfRange(first_date))?;
    let to = location.civil_date(bound.end);

    let timetable = Timetable::build(location, from, to, calculator)?;
    plan_goal(request, location.time_zone(), timetable.segments())
}
