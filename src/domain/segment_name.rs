use crate::domain::SegmentName::*;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// The seven traditional Choghadiya names.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize)]
pub enum SegmentName {
    Amrit,
    Shubh,
    Labh,
    Char,
    Rog,
    Kaal,
    Udveg,
}

impl SegmentName {
    pub fn as_index(&self) -> usize {
        match self {
            Amrit => 0,
            Shubh => 1,
            Labh => 2,
            Char => 3,
            Rog => 4,
            Kaal => 5,
            Udveg => 6,
        }
    }

    pub fn all() -> [SegmentName; 7] {
        [Amrit, Shubh, Labh, Char, Rog, Kaal, Udveg]
    }
}

impl Display for SegmentName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
