mod classifier;
mod partitioner;
mod resolver;
mod timetable;

pub use classifier::{Classification, classify};
pub use partitioner::{SEGMENTS_PER_HALF, partition, partition_day, resolve_start_name};
pub use resolver::{resolve_current, resolve_next};
pub use timetable::{Timetable, UnavailableDay};
