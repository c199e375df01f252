//! Game tuning values
//!
//! Persisted in LocalStorage on web; read from a JSON file on native.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or validating a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },

    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-tick physics and pacing values for a session
///
/// Speeds and accelerations are expressed per simulation tick (see [`crate::consts::SIM_DT`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Added to craft velocity every tick (negative pulls down)
    pub gravity: f32,
    /// Velocity the craft is set to on jump
    pub jump_force: f32,
    /// Distance obstacles move left per tick
    pub obstacle_speed: f32,
    /// Height of the passable gap
    pub obstacle_gap: f32,
    /// Wall-clock time between spawns
    pub spawn_interval_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: -0.008,
            jump_force: 0.15,
            obstacle_speed: 0.05,
            obstacle_gap: 2.0,
            spawn_interval_ms: 2000,
        }
    }
}

impl GameConfig {
    /// Half of the gap height; craft farther than this from a gap center collides
    pub fn half_gap(&self) -> f32 {
        self.obstacle_gap / 2.0
    }

    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("gravity", self.gravity),
            ("jump_force", self.jump_force),
            ("obstacle_speed", self.obstacle_speed),
            ("obstacle_gap", self.obstacle_gap),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be finite",
                });
            }
        }

        if self.gravity >= 0.0 {
            return Err(ConfigError::Invalid {
                field: "gravity",
                reason: "must be negative",
            });
        }
        if self.jump_force <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "jump_force",
                reason: "must be positive",
            });
        }
        if self.obstacle_speed <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "obstacle_speed",
                reason: "must be positive",
            });
        }
        if self.obstacle_gap <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "obstacle_gap",
                reason: "must be positive",
            });
        }
        if self.spawn_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "spawn_interval_ms",
                reason: "must be non-zero",
            });
        }
        Ok(())
    }

    /// Tuning overrides set in the browser console, e.g.
    /// `localStorage.astro_hop_config = '{"obstacle_gap": 2.5}'`
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        const STORAGE_KEY: &str = "astro_hop_config";

        match crate::storage::read(STORAGE_KEY).map(|json| Self::from_json(&json)) {
            Some(Ok(config)) => {
                log::info!("Loaded config from LocalStorage");
                config
            }
            Some(Err(e)) => {
                log::warn!("Ignoring stored config: {}", e);
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// Load config from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.half_gap(), 1.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{ "obstacle_gap": 3.0 }"#).unwrap();
        assert_eq!(config.obstacle_gap, 3.0);
        assert_eq!(config.gravity, GameConfig::default().gravity);
        assert_eq!(config.spawn_interval_ms, 2000);
    }

    #[test]
    fn test_rejects_upward_gravity() {
        let err = GameConfig::from_json(r#"{ "gravity": 0.01 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "gravity",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_zero_interval() {
        let config = GameConfig {
            spawn_interval_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        let config = GameConfig {
            obstacle_speed: f32::NAN,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid `obstacle_speed`: must be finite");
    }

    #[test]
    fn test_malformed_json() {
        let err = GameConfig::from_json("{ gravity: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_json_roundtrip_preserves_values() {
        let config = GameConfig {
            jump_force: 0.2,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }
}
