//! Process-wide tunables for the miners listings.

use std::fmt;
use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Auto-mine rates at or below this are accumulator noise, not mining.
pub const AUTOMINE_THRESHOLD: f32 = 0.0001;

/// Label width on the context-menu (catalog) surface.
pub const CATALOG_LABEL_WIDTH: usize = 25;

/// Label width on the compact in-sector surface.
pub const COMPACT_LABEL_WIDTH: usize = 12;

/// Pad width for deposits that are not being mined.
pub const UNMINED_LABEL_WIDTH: usize = 10;

/// Research that unlocks automated mining, and with it the compact listing.
pub const MINING_AUTOMATION_CAPABILITY: &str = "research.space_travel_mining_automation";

/// Narrowest label that still leaves room for a name next to the rate suffix.
const MIN_LABEL_WIDTH: usize = 4;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinersConfig {
    pub automine_threshold: f32,
    pub catalog_label_width: usize,
    pub compact_label_width: usize,
    pub unmined_label_width: usize,
    /// Capability that must be unlocked before the compact listing shows.
    pub gate_capability: String,
    /// Seconds between automatic refreshes. Zero or less disables them.
    pub refresh_interval_secs: f32,
}

impl Default for MinersConfig {
    fn default() -> Self {
        Self {
            automine_threshold: AUTOMINE_THRESHOLD,
            catalog_label_width: CATALOG_LABEL_WIDTH,
            compact_label_width: COMPACT_LABEL_WIDTH,
            unmined_label_width: UNMINED_LABEL_WIDTH,
            gate_capability: MINING_AUTOMATION_CAPABILITY.to_string(),
            refresh_interval_secs: 1.0,
        }
    }
}

impl MinersConfig {
    /// Parse and validate a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`MinersConfig::from_json`], but logs and falls back to defaults.
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                warn!("MinersConfig: {}, falling back to defaults", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.automine_threshold.is_finite() || self.automine_threshold < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "automine_threshold",
                reason: format!("must be finite and >= 0, got {}", self.automine_threshold),
            });
        }
        for (field, width) in [
            ("catalog_label_width", self.catalog_label_width),
            ("compact_label_width", self.compact_label_width),
            ("unmined_label_width", self.unmined_label_width),
        ] {
            if width < MIN_LABEL_WIDTH {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must be at least {MIN_LABEL_WIDTH}, got {width}"),
                });
            }
        }
        let secs = self.refresh_interval_secs;
        if !secs.is_finite() || (secs > 0.0 && Duration::try_from_secs_f32(secs).is_err()) {
            return Err(ConfigError::InvalidValue {
                field: "refresh_interval_secs",
                reason: format!("{secs} seconds is not a valid interval"),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The JSON could not be parsed into a config.
    Parse(String),
    /// A field parsed but holds an unusable value.
    InvalidValue { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Config parse error: {msg}"),
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid config value for {field}: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MinersConfig::default();
        assert_eq!(config.automine_threshold, 0.0001);
        assert_eq!(config.catalog_label_width, 25);
        assert_eq!(config.compact_label_width, 12);
        assert_eq!(config.unmined_label_width, 10);
        assert_eq!(config.gate_capability, MINING_AUTOMATION_CAPABILITY);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = MinersConfig::from_json(r#"{ "compact_label_width": 16 }"#).unwrap();
        assert_eq!(config.compact_label_width, 16);
        assert_eq!(config.catalog_label_width, CATALOG_LABEL_WIDTH);
        assert_eq!(config.automine_threshold, AUTOMINE_THRESHOLD);
    }

    #[test]
    fn test_parse_error() {
        let err = MinersConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Config parse error"));
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let err = MinersConfig::from_json(r#"{ "automine_threshold": -1.0 }"#).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                field: "automine_threshold",
                reason: "must be finite and >= 0, got -1".to_string(),
            }
        );
    }

    #[test]
    fn test_narrow_width_rejected() {
        let err = MinersConfig::from_json(r#"{ "compact_label_width": 2 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "compact_label_width",
                ..
            }
        ));
    }

    #[test]
    fn test_oversized_refresh_interval_rejected() {
        let err = MinersConfig::from_json(r#"{ "refresh_interval_secs": 1e20 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "refresh_interval_secs",
                ..
            }
        ));
    }

    #[test]
    fn test_nan_refresh_interval_rejected() {
        let config = MinersConfig {
            refresh_interval_secs: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_positive_refresh_interval_allowed() {
        for secs in [0.0, -5.0] {
            let config = MinersConfig {
                refresh_interval_secs: secs,
                ..Default::default()
            };
            assert_eq!(config.validate(), Ok(()));
        }
    }

    #[test]
    fn test_from_json_or_default_falls_back() {
        let config = MinersConfig::from_json_or_default(r#"{ "unmined_label_width": 0 }"#);
        assert_eq!(config, MinersConfig::default());
    }
}
