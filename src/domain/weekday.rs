use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Civil weekday of a sunrise, which names the Vedic day (vaar) that follows it.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Position in a Monday-first week.
    pub fn as_index(&self) -> usize {
        *self as usize
    }

    pub fn vaar(&self) -> &'static str {
        match self {
            Weekday::Monday => "Somvar",
            Weekday::Tuesday => "Mangalvar",
            Weekday::Wednesday => "Budhvar",
            Weekday::Thursday => "Guruvar",
            Weekday::Friday => "Shukravar",
            Weekday::Saturday => "Shanivar",
            Weekday::Sunday => "Ravivar",
        }
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
