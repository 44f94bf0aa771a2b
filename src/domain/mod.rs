mod geo_point;
mod goal;
mod input_error;
mod segment;
mod segment_name;
mod solar_day;
mod tier;
mod weekday;

pub use geo_point::{GeoPoint, validate_coordinates};
pub use goal::{Goal, GoalRequest, GoalWindow};
pub use input_error::InputError;
pub use segment::Segment;
pub use segment_name::SegmentName;
pub use solar_day::{SolarDay, SolarOutcome, UnavailableReason};
pub use tier::Tier;
pub use weekday::Weekday;
