use crate::domain::GoalRequest;
use crate::planner::GoalRecommendation;
use chrono::NaiveDate;
use serde::Serialize;

/// Facts handed to a narrative rewriter. The rewriter may rephrase them but never change them.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct NarrativeRequest {
    pub city: String,
    pub date: NaiveDate,
    pub goal: String,
    pub window: String,
    pub slot: String,
    pub start: String,
    pub label: String,
}

impl NarrativeRequest {
    pub fn from_recommendation(city: &str, request: &GoalRequest, recommendation: &GoalRecommendation) -> Self {
        let justification = &recommendation.justification;
        NarrativeRequest {
            city: city.to_string(),
            date: justification.start.date_naive(),
            goal: request.goal.label().to_string(),
            window: request.window.to_string(),
            slot: justification.name.to_string(),
            start: justification.start.format("%H:%M").to_string(),
            label: justification.tier.to_string(),
        }
    }

    /// A plain sentence built only from the request fields.
    pub fn fallback_sentence(&self) -> String {
        format!(
            "In {}, {} Choghadiya at {} on {} is rated {} for {} ({}).",
            self.city, self.slot, self.start, self.date, self.label, self.goal, self.window
        )
    }
}
