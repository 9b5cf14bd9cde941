//! Game settings
//!
//! Loaded from an optional JSON file given on the command line. Every field has a
//! default, so a file only needs the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// Failure to produce usable settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Simulation ticks per second (one render per tick)
    pub tick_rate: u32,
    /// Playable area in pixels; also the window's logical size
    pub world_width: f32,
    pub world_height: f32,
    /// Log every game event at info level
    pub log_events: bool,
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Brick Hop".to_string(),
            tick_rate: TICK_RATE,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            log_events: true,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file and validate them
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Pretty JSON, suitable as a starting point for a settings file
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.tick_rate == 0 {
            return Err(SettingsError::Invalid {
                field: "tick_rate",
                reason: "must be at least 1",
            });
        }
        if !(self.world_width > 0.0) {
            return Err(SettingsError::Invalid {
                field: "world_width",
                reason: "must be positive",
            });
        }
        if !(self.world_height > 0.0) {
            return Err(SettingsError::Invalid {
                field: "world_height",
                reason: "must be positive",
            });
        }
        let tuning = &self.tuning;
        if !(tuning.gravity > 0.0) {
            return Err(SettingsError::Invalid {
                field: "tuning.gravity",
                reason: "must be positive",
            });
        }
        if !(tuning.actor_width > 0.0 && tuning.actor_width <= self.world_width) {
            return Err(SettingsError::Invalid {
                field: "tuning.actor_width",
                reason: "must be positive and fit the world",
            });
        }
        if !(tuning.actor_height > 0.0 && tuning.actor_height <= self.world_height) {
            return Err(SettingsError::Invalid {
                field: "tuning.actor_height",
                reason: "must be positive and fit the world",
            });
        }
        if tuning.walk_step < 0.0 || tuning.agent_speed < 0.0 || tuning.jump_speed < 0.0 {
            return Err(SettingsError::Invalid {
                field: "tuning",
                reason: "speeds must not be negative",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.tick_rate = 30;
        settings.tuning.gravity = 0.5;
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_partial_file() {
        let settings = Settings::from_json(r#"{ "world_width": 1024 }"#).unwrap();
        assert_eq!(settings.world_width, 1024.0);
        assert_eq!(settings.world_height, WORLD_HEIGHT);
        assert_eq!(settings.tuning, Tuning::default());
    }

    #[test]
    fn test_rejects_zero_tick_rate() {
        let err = Settings::from_json(r#"{ "tick_rate": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "tick_rate", .. }));
    }

    #[test]
    fn test_rejects_negative_gravity() {
        let err = Settings::from_json(r#"{ "tuning": { "gravity": -1.0 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "tuning.gravity", .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ tick_rate: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load("/nonexistent/brick-hop.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
