use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::core::feed::{Recommender, DEFAULT_FEED_LIMIT, MAX_FEED_LIMIT};
use crate::core::scoring::DEFAULT_SALARY_THRESHOLD;

/// Errors raised by settings validation
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("salary threshold must be a finite, non-negative number (got {0})")]
    InvalidSalaryThreshold(f64),

    #[error("feed limits must satisfy 1 <= default_limit <= max_limit (got {default}/{max})")]
    InvalidFeedLimits { default: usize, max: usize },
}

/// Engine configuration
///
/// Only what the scoring contract allows to vary is configurable: the salary
/// threshold and the feed limits. The formula weights are fixed constants.
/// The engine itself never reads settings ambiently; callers resolve a
/// `Recommender` and explicit parameters from this struct.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub feed: FeedSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default = "default_salary_threshold")]
    pub salary_threshold: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            salary_threshold: default_salary_threshold(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedSettings {
    #[serde(default = "default_feed_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            default_limit: default_feed_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_salary_threshold() -> f64 {
    DEFAULT_SALARY_THRESHOLD
}

fn default_feed_limit() -> usize {
    DEFAULT_FEED_LIMIT
}

fn default_max_limit() -> usize {
    MAX_FEED_LIMIT
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with SKILLSYNC_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with SKILLSYNC_)
            // e.g., SKILLSYNC_FEED__DEFAULT_LIMIT -> feed.default_limit
            .add_source(
                Environment::with_prefix("SKILLSYNC")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SKILLSYNC")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Reject settings the scoring contract cannot honor
    pub fn validate(&self) -> Result<(), SettingsError> {
        let threshold = self.scoring.salary_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(SettingsError::InvalidSalaryThreshold(threshold));
        }

        if self.feed.default_limit == 0 || self.feed.default_limit > self.feed.max_limit {
            return Err(SettingsError::InvalidFeedLimits {
                default: self.feed.default_limit,
                max: self.feed.max_limit,
            });
        }

        Ok(())
    }

    /// Build a recommender configured with these settings
    pub fn recommender(&self) -> Recommender {
        Recommender::new(self.scoring.salary_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_contract() {
        let settings = Settings::default();

        assert_eq!(settings.scoring.salary_threshold, 30_000.0);
        assert_eq!(settings.feed.default_limit, 5);
        assert_eq!(settings.feed.max_limit, 50);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let mut settings = Settings::default();
        settings.scoring.salary_threshold = -1.0;

        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidSalaryThreshold(_))
        ));
    }

    #[test]
    fn test_inverted_limits_rejected() {
        let mut settings = Settings::default();
        settings.feed.default_limit = 80;

        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidFeedLimits { default: 80, max: 50 })
        ));
    }

    #[test]
    fn test_zero_default_limit_rejected() {
        let mut settings = Settings::default();
        settings.feed.default_limit = 0;

        assert!(settings.validate().is_err());
    }
}
