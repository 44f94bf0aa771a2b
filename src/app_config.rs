use crate::domain::{GeoPoint, Goal, GoalWindow};
use crate::narrative::RewriterConfig;
use crate::solar::DEFAULT_TTL;
use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    location: Location,
    #[serde(default)]
    cache: Cache,
    planner: Planner,
    narrative: Option<Narrative>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    pub fn planner(&self) -> &Planner {
        &self.planner
    }

    pub fn narrative(&self) -> Option<&Narrative> {
        self.narrative.as_ref()
    }
}

#[derive(Debug, Deserialize)]
pub struct Location {
    city: String,
    #[serde(flatten)]
    point: GeoPoint,
}

impl Location {
    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn point(&self) -> &GeoPoint {
        &self.point
    }
}

#[derive(Debug, Deserialize)]
pub struct Cache {
    #[serde(with = "humantime_serde")]
    ttl: Duration,
}

impl Default for Cache {
    fn default() -> Self {
        Cache { ttl: DEFAULT_TTL }
    }
}

impl Cache {
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[derive(Debug, Deserialize)]
pub struct Planner {
    goal: Goal,
    window: GoalWindow,
}

impl Planner {
    pub fn goal(&self) -> Goal {
        self.goal
    }

    pub fn window(&self) -> &GoalWindow {
        &self.window
    }
}

#[derive(Debug, Deserialize)]
pub struct Narrative {
    url: String,
    api_key: String,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
    retry_ms: u64,
    retry_max_delay_ms: u64,
    max_retries: usize,
}

impl Narrative {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn rewriter_config(&self) -> RewriterConfig {
        RewriterConfig {
            url: self.url.clone(),
            api_key: self.api_key.clone(),
            timeout: self.timeout,
            retry_ms: self.retry_ms,
            retry_max_delay: Duration::from_millis(self.retry_max_delay_ms),
            max_retries: self.max_retries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Asia::Kolkata;
    use config::FileFormat;
    use pretty_assertions::assert_eq;

    fn from_toml(content: &str) -> Result<AppConfig, ConfigError> {
        Config::builder()
            .add_source(config::File::from_str(content, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    const MINIMAL: &str = r#"
        [location]
        city = "Ahmedabad"
        latitude = 23.0225
        longitude = 72.5714
        time_zone = "Asia/Kolkata"

        [planner]
        goal = "puja"
        window = "next_12_hours"
    "#;

    #[test]
    fn loads_a_minimal_configuration() {
        let config = from_toml(MINIMAL).unwrap();

        assert_eq!(config.location().city(), "Ahmedabad");
        assert_eq!(config.location().point(), &GeoPoint::new(23.0225, 72.5714, Kolkata).unwrap());
        assert_eq!(config.planner().goal(), Goal::Puja);
        assert_eq!(config.planner().window(), &GoalWindow::NextHours(12));
        assert_eq!(config.cache().ttl(), DEFAULT_TTL);
        assert!(config.narrative().is_none());
    }

    #[test]
    fn loads_the_cache_and_narrative_sections() {
        let content = format!(
            r#"{}
            [cache]
            ttl = "2days"

            [narrative]
            url = "https://rewrite.example"
            api_key = "secret"
            timeout = "10s"
            retry_ms = 100
            retry_max_delay_ms = 2000
            max_retries = 3
            "#,
            MINIMAL
        );

        let config = from_toml(&content).unwrap();

        assert_eq!(config.cache().ttl(), Duration::from_secs(2 * 24 * 60 * 60));
        let narrative = config.narrative().unwrap();
        assert_eq!(narrative.url(), "https://rewrite.example");
        let rewriter_config = narrative.rewriter_config();
        assert_eq!(rewriter_config.timeout, Duration::from_secs(10));
        assert_eq!(rewriter_config.retry_max_delay, Duration::from_millis(2000));
        assert_eq!(rewriter_config.max_retries, 3);
    }

    #[test]
    fn fails_for_an_out_of_range_location() {
        let content = MINIMAL.replace("latitude = 23.0225", "latitude = 123.0");

        assert!(from_toml(&content).is_err());
    }
}
