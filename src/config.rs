//! Site configuration. Every field has a default; a page may override any
//! subset with a JSON block:
//!
//! ```html
//! <script id="site-config" type="application/json">
//!   { "log_level": "debug", "smooth": { "duration_secs": 0.9 } }
//! </script>
//! ```

use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::motion::smooth::SmoothOptions;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

const ROUTE_PROGRESS_MS_BOUNDS: (u32, u32) = (50, 5_000);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub log_level: String,
    pub route_progress_ms: u32,
    pub cursor: CursorConfig,
    pub smooth: SmoothOptions,
    pub parallax: ParallaxConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            route_progress_ms: 300,
            cursor: CursorConfig::default(),
            smooth: SmoothOptions::default(),
            parallax: ParallaxConfig::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    pub trail: f64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self { trail: 0.15 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub slow: f64,
    pub medium: f64,
    pub fast: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            slow: 12.0,
            medium: 24.0,
            fast: 48.0,
        }
    }
}

impl SiteConfig {
    /// Parses an override block. Out-of-range values are replaced by their
    /// defaults rather than rejected.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.level_filter()?;

        let defaults = Self::default();
        let (min, max) = ROUTE_PROGRESS_MS_BOUNDS;
        if !(min..=max).contains(&config.route_progress_ms) {
            config.route_progress_ms = defaults.route_progress_ms;
        }
        if !(0.0..=1.0).contains(&config.cursor.trail) {
            config.cursor.trail = defaults.cursor.trail;
        }
        if !(config.smooth.duration_secs.is_finite() && config.smooth.duration_secs > 0.0) {
            config.smooth.duration_secs = defaults.smooth.duration_secs;
        }
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .trim()
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = SiteConfig::from_json("{}").expect("valid config");
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.level_filter().expect("level"), LevelFilter::INFO);
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config = SiteConfig::from_json(
            r#"{ "log_level": "debug", "smooth": { "duration_secs": 0.9 }, "parallax": { "fast": 64 } }"#,
        )
        .expect("valid config");

        assert_eq!(config.level_filter().expect("level"), LevelFilter::DEBUG);
        assert_eq!(config.smooth.duration_secs, 0.9);
        assert!(config.smooth.enabled);
        assert_eq!(config.parallax.fast, 64.0);
        assert_eq!(config.parallax.slow, 12.0);
    }

    #[test]
    fn out_of_range_values_fall_back() {
        let config = SiteConfig::from_json(
            r#"{ "route_progress_ms": 10, "cursor": { "trail": 4.0 }, "smooth": { "duration_secs": -1 } }"#,
        )
        .expect("valid config");

        assert_eq!(config.route_progress_ms, 300);
        assert_eq!(config.cursor.trail, 0.15);
        assert_eq!(config.smooth.duration_secs, 1.2);
    }

    #[test]
    fn rejects_bad_json_and_levels() {
        assert!(matches!(SiteConfig::from_json("{"), Err(ConfigError::Json(_))));
        assert!(matches!(
            SiteConfig::from_json(r#"{ "log_level": "loud" }"#),
            Err(ConfigError::LogLevel(_))
        ));
    }
}
