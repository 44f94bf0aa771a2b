use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Auspiciousness of a segment, from most to least favourable.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize)]
pub enum Tier {
    Best,
    Good,
    Gain,
    Neutral,
    Avoid,
}

impl Tier {
    /// Higher is better: `Best` is 4, `Avoid` is 0.
    pub fn priority(&self) -> u8 {
        match self {
            Tier::Best => 4,
            Tier::Good => 3,
            Tier::Gain => 2,
            Tier::Neutral => 1,
            Tier::Avoid => 0,
        }
    }

    pub fn favourable() -> [Tier; 3] {
        [Tier::Best, Tier::Good, Tier::Gain]
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
