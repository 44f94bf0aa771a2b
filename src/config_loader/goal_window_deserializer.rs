use crate::domain::GoalWindow;
use chrono::{DateTime, Utc};
use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};

const EXPECTED: &str = "'today', 'this_week', 'this_month', 'next_<n>_hours' or a table with start and end";

impl<'de> Deserialize<'de> for GoalWindow {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        #[serde(untagged)]
        enum Inner {
            Named(String),
            Custom { start: DateTime<Utc>, end: DateTime<Utc> },
        }

        match Inner::deserialize(deserializer)? {
            Inner::Named(value) => parse_named(&value).ok_or_else(|| Error::invalid_value(Unexpected::Str(&value), &EXPECTED)),
            Inner::Custom { start, end } if start < end => Ok(GoalWindow::Custom { start, end }),
            Inner::Custom { start, end } => Err(Error::custom(format!("invalid window, start {} must be before end {}", start, end))),
        }
    }
}

fn parse_named(value: &str) -> Option<GoalWindow> {
    match value.to_lowercase().as_str() {
        "today" => Some(GoalWindow::Today),
        "this_week" | "week" => Some(GoalWindow::ThisWeek),
        "this_month" | "month" => Some(GoalWindow::ThisMonth),
        other => other
            .strip_prefix("next_")
            .and_then(|rest| rest.strip_suffix("_hours").or_else(|| rest.strip_suffix("_hour")))
            .and_then(|hours| hours.parse::<u32>().ok())
            .filter(|hours| *hours > 0)
            .map(GoalWindow::NextHours),
    }
}
