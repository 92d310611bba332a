//! Player configuration persistence.
//!
//! Stores playback preferences as JSON at
//! `~/.local/share/dialogue-sim/config.json`. Loaded once on startup;
//! command-line flags override individual values.

use crate::dialogue::text_speed_duration;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Seconds per revealed character when nothing else is configured.
pub const DEFAULT_TEXT_SPEED: f64 = 0.025;

/// Default config file path.
fn default_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dialogue-sim")
        .join("config.json")
}

/// Persisted playback settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueConfig {
    /// Seconds per revealed character.
    #[serde(default = "default_text_speed")]
    pub text_speed: f64,
    /// Seconds `play --auto` waits on a fully revealed message.
    #[serde(default = "default_auto_advance_delay")]
    pub auto_advance_delay: f64,
    /// Simulated frame length for `play --auto`, in seconds.
    #[serde(default = "default_frame_step")]
    pub frame_step: f64,
    /// Path the config was loaded from (not serialized).
    #[serde(skip)]
    path: PathBuf,
}

fn default_text_speed() -> f64 { DEFAULT_TEXT_SPEED }
fn default_auto_advance_delay() -> f64 { 1.0 }
fn default_frame_step() -> f64 { 1.0 / 60.0 }

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            text_speed: default_text_speed(),
            auto_advance_delay: default_auto_advance_delay(),
            frame_step: default_frame_step(),
            path: default_path(),
        }
    }
}

impl DialogueConfig {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = default_path();
        let mut config = match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                if path.exists() {
                    tracing::warn!("Ignoring config {}: {}", path.display(), e);
                }
                Self::default()
            }
        };
        config.path = path;
        config
    }

    /// Load and validate a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        config.path = path.to_path_buf();
        Ok(config)
    }

    /// Reject settings the player can't run with.
    pub fn validate(&self) -> Result<()> {
        text_speed_duration(self.text_speed)?;
        text_speed_duration(self.frame_step)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist current config to disk.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Point this config at a different file for the next save.
    pub fn set_path(&mut self, path: PathBuf) {
        self.path = path;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("dialogue-sim-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: DialogueConfig = serde_json::from_str(r#"{"text_speed": 0.05}"#).unwrap();
        assert_eq!(config.text_speed, 0.05);
        assert_eq!(config.auto_advance_delay, 1.0);
        assert_eq!(config.frame_step, 1.0 / 60.0);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("roundtrip.json");
        let mut config = DialogueConfig::default();
        config.text_speed = 0.1;
        config.set_path(path.clone());
        config.save().unwrap();

        let loaded = DialogueConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_invalid_text_speed_is_rejected() {
        let path = temp_path("bad_speed.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"text_speed": 0}"#).unwrap();

        let result = DialogueConfig::load_from(&path);
        assert!(matches!(result, Err(Error::InvalidTextSpeed(_))));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let path = temp_path("malformed.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(DialogueConfig::load_from(&path), Err(Error::Json(_))));
        std::fs::remove_file(&path).ok();
    }
}
