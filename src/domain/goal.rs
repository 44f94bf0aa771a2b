use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The kind of activity a slot is being planned for.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Puja,
    Travel,
    Business,
    Purchase,
    Education,
    Marriage,
    Health,
    General,
}

impl Goal {
    pub fn label(&self) -> &'static str {
        match self {
            Goal::Puja => "puja",
            Goal::Travel => "travel",
            Goal::Business => "business",
            Goal::Purchase => "a purchase",
            Goal::Education => "study",
            Goal::Marriage => "a marriage or ceremony",
            Goal::Health => "health matters",
            Goal::General => "general work",
        }
    }
}

impl Display for Goal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum GoalWindow {
    /// From now until the next local midnight.
    Today,
    NextHours(u32),
    ThisWeek,
    ThisMonth,
    Custom { start: DateTime<Utc>, end: DateTime<Utc> },
}

impl Display for GoalWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GoalWindow::Today => write!(f, "today"),
            GoalWindow::NextHours(1) => write!(f, "next hour"),
            GoalWindow::NextHours(hours) => write!(f, "next {} hours", hours),
            GoalWindow::ThisWeek => write!(f, "this week"),
            GoalWindow::ThisMonth => write!(f, "this month"),
            GoalWindow::Custom { start, end } => write!(f, "{} to {}", start.format("%Y-%m-%d %H:%M UTC"), end.format("%Y-%m-%d %H:%M UTC")),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct GoalRequest {
    pub goal: Goal,
    pub window: GoalWindow,
    pub reference_now: DateTime<Utc>,
}

impl GoalRequest {
    pub fn new(goal: Goal, window: GoalWindow, reference_now: DateTime<Utc>) -> Self {
        GoalRequest { goal, window, reference_now }
    }
}
