//! Game settings
//!
//! Loaded from an optional JSON file; any field left out keeps its default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("could not read settings file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Map ===
    /// Fewest caverns a generated map may have
    pub min_caverns: usize,
    /// Most caverns a generated map may have
    pub max_caverns: usize,
    /// Chance that each cavern side gets a passage (0.0 - 1.0)
    pub connection_chance: f64,
    pub bat_caverns: usize,
    pub pit_caverns: usize,

    // === Player ===
    pub starting_quiver: u32,
    pub hit_points: i32,
    pub pit_damage: i32,
    pub self_shot_damage: i32,

    // === Arrows ===
    /// Caverns an arrow may enter before it drops
    pub arrow_step_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_caverns: MIN_CAVERNS,
            max_caverns: MAX_CAVERNS,
            connection_chance: CONNECTION_CHANCE,
            bat_caverns: BAT_CAVERNS,
            pit_caverns: PIT_CAVERNS,

            starting_quiver: STARTING_QUIVER,
            hit_points: HIT_POINTS,
            pit_damage: PIT_DAMAGE,
            self_shot_damage: SELF_SHOT_DAMAGE,

            arrow_step_limit: ARROW_STEP_LIMIT,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        // Placement needs somewhere other than the player's cavern
        if self.min_caverns < 2 {
            return Err(SettingsError::Invalid(format!(
                "min_caverns must be at least 2, got {}",
                self.min_caverns
            )));
        }
        if self.min_caverns > self.max_caverns {
            return Err(SettingsError::Invalid(format!(
                "min_caverns ({}) exceeds max_caverns ({})",
                self.min_caverns, self.max_caverns
            )));
        }
        if !(0.0..=1.0).contains(&self.connection_chance) {
            return Err(SettingsError::Invalid(format!(
                "connection_chance must be within 0..=1, got {}",
                self.connection_chance
            )));
        }
        if self.arrow_step_limit == 0 {
            return Err(SettingsError::Invalid("arrow_step_limit must be positive".into()));
        }
        if self.hit_points <= 0 {
            return Err(SettingsError::Invalid("hit_points must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.starting_quiver, 5);
        assert_eq!(settings.arrow_step_limit, 100);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "starting_quiver": 9, "bat_caverns": 0 }"#).unwrap();
        assert_eq!(settings.starting_quiver, 9);
        assert_eq!(settings.bat_caverns, 0);
        assert_eq!(settings.pit_caverns, PIT_CAVERNS);
        assert_eq!(settings.max_caverns, MAX_CAVERNS);
    }

    #[test]
    fn test_rejects_bad_values() {
        for json in [
            r#"{ "min_caverns": 1 }"#,
            r#"{ "min_caverns": 20, "max_caverns": 10 }"#,
            r#"{ "connection_chance": 1.5 }"#,
            r#"{ "arrow_step_limit": 0 }"#,
            r#"{ "hit_points": 0 }"#,
        ] {
            assert!(
                matches!(Settings::from_json(json), Err(SettingsError::Invalid(_))),
                "accepted {json}"
            );
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Settings::from_json("{ nope"), Err(SettingsError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}
