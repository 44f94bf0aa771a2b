use crate::domain::{GeoPoint, InputError, SolarDay, SolarOutcome, UnavailableReason};
use crate::solar::compute_solar_day;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};
use tracing::trace;

pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub struct SolarCacheKey {
    latitude_bits: u64,
    longitude_bits: u64,
    date: NaiveDate,
}

impl SolarCacheKey {
    pub fn new(latitude: f64, longitude: f64, date: NaiveDate) -> Self {
        SolarCacheKey {
            latitude_bits: latitude.to_bits(),
            longitude_bits: longitude.to_bits(),
            date,
        }
    }
}

/// Storage for computed solar days. Implementations must return exactly what was stored.
pub trait SolarCache: Debug + Send + Sync {
    fn get(&self, key: &SolarCacheKey) -> Option<SolarOutcome>;

    fn set(&self, key: SolarCacheKey, outcome: SolarOutcome);
}

#[derive(Debug)]
pub struct MemorySolarCache {
    ttl: Duration,
    entries: RwLock<HashMap<SolarCacheKey, (Instant, SolarOutcome)>>,
}

impl MemorySolarCache {
    pub fn new(ttl: Duration) -> Self {
        MemorySolarCache {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemorySolarCache {
    fn default() -> Self {
        MemorySolarCache::new(DEFAULT_TTL)
    }
}

impl SolarCache for MemorySolarCache {
    fn get(&self, key: &SolarCacheKey) -> Option<SolarOutcome> {
        let stored_at = {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            match entries.get(key) {
                Some((stored_at, outcome)) if stored_at.elapsed() < self.ttl => return Some(*outcome),
                Some((stored_at, _)) => *stored_at,
                None => return None,
            }
        };

        // Expired, evict unless another writer refreshed it meanwhile
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.get(key).is_some_and(|(at, _)| *at == stored_at) {
            entries.remove(key);
        }
        None
    }

    fn set(&self, key: SolarCacheKey, outcome: SolarOutcome) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, (Instant::now(), outcome));
    }
}

/// Computes solar days, consulting an optional cache first.
#[derive(Debug, Clone, Default)]
pub struct SolarCalculator {
    cache: Option<Arc<dyn SolarCache>>,
}

impl SolarCalculator {
    pub fn new() -> Self {
        SolarCalculator { cache: None }
    }

    pub fn with_cache(cache: Arc<dyn SolarCache>) -> Self {
        SolarCalculator { cache: Some(cache) }
    }

    /// Solar day of the Vedic day whose sunrise falls on the civil `date` in the location's zone.
    ///
    /// Zones about a day away from mean solar time, such as Pacific/Tongatapu, see the sunrise
    /// of the neighbouring mean solar date, so the computation shifts by a day there.
    pub fn solar_day(&self, date: NaiveDate, location: &GeoPoint) -> Result<SolarOutcome, InputError> {
        let outcome = self.mean_solar_day(date, location)?;
        let SolarOutcome::Available(solar_day) = outcome else {
            return Ok(outcome);
        };

        let sunrise_date = location.civil_date(solar_day.sunrise());
        if sunrise_date == date {
            return Ok(outcome);
        }

        let shifted = if sunrise_date > date { date.pred_opt() } else { date.succ_opt() };
        let shifted = shifted.ok_or(InputError::DateOutOfRange(date))?;
        trace!("☀️ Sunrise of {} falls on {} locally, using {}", date, sunrise_date, shifted);

        Ok(match self.mean_solar_day(shifted, location)? {
            SolarOutcome::Available(solar_day) => SolarDay::new(date, solar_day.sunrise(), solar_day.sunset(), solar_day.next_sunrise())
                .map(SolarOutcome::Available)
                .unwrap_or(SolarOutcome::Unavailable(UnavailableReason::Irregular)),
            unavailable => unavailable,
        })
    }

    fn mean_solar_day(&self, date: NaiveDate, location: &GeoPoint) -> Result<SolarOutcome, InputError> {
        let Some(cache) = &self.cache else {
            return compute_solar_day(date, location.latitude(), location.longitude());
        };

        let key = SolarCacheKey::new(location.latitude(), location.longitude(), date);
        if let Some(outcome) = cache.get(&key) {
            trace!("🗃️ Solar day cache hit for {}", date);
            return Ok(outcome);
        }

        trace!("🗃️ Solar day cache miss for {}", date);
        let outcome = compute_solar_day(date, location.latitude(), location.longitude())?;
        cache.set(key, outcome);
        Ok(outcome)
    }
}
