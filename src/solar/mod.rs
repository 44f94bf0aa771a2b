mod cache;
mod calculator;

pub use cache::{DEFAULT_TTL, MemorySolarCache, SolarCache, SolarCacheKey, SolarCalculator};
pub use calculator::compute_solar_day;
