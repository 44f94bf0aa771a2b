mod ranking;
mod recommendation;
mod window;

pub use ranking::{plan_for, plan_goal};
pub use recommendation::{GoalRecommendation, Justification};
pub use window::TimeBound;
