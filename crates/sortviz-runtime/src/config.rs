#![forbid(unsafe_code)]

//! Playback configuration.
//!
//! [`PlaybackConfig`] gathers the controller's tunables. With the
//! `config-file` feature it can be loaded from TOML or JSON; missing keys
//! fall back to the defaults.
//!
//! # Loading
//!
//! ```toml
//! # sortviz.toml
//! default_size = 10
//! random_min = 1
//! random_max = 50
//! initial_speed = 7
//! descending = true
//! seed = 42
//! ```
//!
//! ```rust,ignore
//! let config = PlaybackConfig::from_toml_file("sortviz.toml")?;
//! ```

#[cfg(feature = "config-file")]
use std::path::Path;

#[cfg(feature = "config-file")]
use serde::{Deserialize, Serialize};

use sortviz_core::{MAX_CUSTOM_VALUES, SortOrder, ValueRange};
use thiserror::Error;

use crate::speed::Speed;

/// Tunables for a [`PlaybackController`](crate::PlaybackController).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config-file", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config-file", serde(default, deny_unknown_fields))]
pub struct PlaybackConfig {
    /// Size of randomly generated arrays.
    pub default_size: usize,
    /// Smallest random value.
    pub random_min: i32,
    /// Largest random value.
    pub random_max: i32,
    /// Speed at construction, 1 to 10.
    pub initial_speed: u8,
    /// Sort descending instead of ascending.
    pub descending: bool,
    /// Seed for the random source; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            default_size: 8,
            random_min: 10,
            random_max: 99,
            initial_speed: Speed::DEFAULT.get(),
            descending: false,
            seed: None,
        }
    }
}

impl PlaybackConfig {
    /// Deterministic configuration for tests and reproducible traces.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.default_size = size;
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.descending = order.is_descending();
        self
    }

    #[must_use]
    pub fn with_speed(mut self, speed: u8) -> Self {
        self.initial_speed = speed;
        self
    }

    #[must_use]
    pub fn order(&self) -> SortOrder {
        SortOrder::from_descending(self.descending)
    }

    #[must_use]
    pub fn value_range(&self) -> ValueRange {
        ValueRange::new(self.random_min, self.random_max)
    }

    #[must_use]
    pub fn speed(&self) -> Speed {
        Speed::new(self.initial_speed)
    }

    /// Parse from a TOML string.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config-file")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Read)?;
        Self::from_toml_str(&content)
    }

    /// Parse from a JSON string.
    #[cfg(feature = "config-file")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config-file")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Read)?;
        Self::from_json_str(&content)
    }

    /// Load from a file, choosing the format by extension (`.json` or TOML).
    #[cfg(feature = "config-file")]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_file(path)?,
            _ => Self::from_toml_file(path)?,
        };
        config.validated()
    }

    /// Every setting that is out of range, in field order. Empty when the
    /// config is usable.
    #[must_use]
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.default_size > MAX_CUSTOM_VALUES {
            issues.push(ConfigIssue::new(
                "default_size",
                format!(
                    "must be at most {MAX_CUSTOM_VALUES} (got {})",
                    self.default_size
                ),
            ));
        }

        if self.random_min > self.random_max {
            issues.push(ConfigIssue::new(
                "random_min",
                format!(
                    "must not exceed random_max {} (got {})",
                    self.random_max, self.random_min
                ),
            ));
        }

        if !(Speed::MIN.get()..=Speed::MAX.get()).contains(&self.initial_speed) {
            issues.push(ConfigIssue::new(
                "initial_speed",
                format!(
                    "must be between {} and {} (got {})",
                    Speed::MIN.get(),
                    Speed::MAX.get(),
                    self.initial_speed
                ),
            ));
        }

        issues
    }

    /// `self` if valid, otherwise [`ConfigError::Invalid`].
    pub fn validated(self) -> Result<Self, ConfigError> {
        let issues = self.validate();
        if issues.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Invalid(issues))
        }
    }
}

/// One rejected setting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{key}` {problem}")]
pub struct ConfigIssue {
    /// Config key as written in the file.
    pub key: &'static str,
    pub problem: String,
}

impl ConfigIssue {
    fn new(key: &'static str, problem: String) -> Self {
        Self { key, problem }
    }
}

/// Why a playback config could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Read(#[source] std::io::Error),

    /// Malformed TOML or an unknown key.
    #[cfg(feature = "config-file")]
    #[error("not a sortviz TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[cfg(feature = "config-file")]
    #[error("not a sortviz JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{}", list_issues(.0))]
    Invalid(Vec<ConfigIssue>),
}

fn list_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
