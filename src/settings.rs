//! Game settings and preferences
//!
//! Persisted as JSON next to the score file; any load failure falls back to
//! defaults so a corrupt settings file can never block a round.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Show the tick-rate counter in the HUD
    pub show_fps: bool,
    /// Name recorded on the high score table
    pub player_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            show_fps: false,
            player_name: "Player".to_string(),
        }
    }
}

impl Settings {
    /// Effective sound-effect gain
    pub fn effective_sfx(&self) -> f32 {
        (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("invalid settings file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default settings");
                Self::default()
            }
        }
    }

    /// Save settings, best-effort
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("failed to save settings to {}: {err}", path.display());
                }
            }
            Err(err) => log::warn!("failed to serialize settings: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.player_name, "Player");
        assert!(settings.effective_sfx() > 0.0);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = Settings::load(Path::new("/nonexistent/chainshot_settings.json"));
        assert_eq!(settings.player_name, Settings::default().player_name);
    }

    #[test]
    fn test_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "chainshot_settings_{}.json",
            std::process::id()
        ));
        let mut settings = Settings::default();
        settings.player_name = "ada".to_string();
        settings.sfx_volume = 0.25;
        settings.save(&path);

        let loaded = Settings::load(&path);
        assert_eq!(loaded.player_name, "ada");
        assert_eq!(loaded.sfx_volume, 0.25);
        let _ = std::fs::remove_file(&path);
    }
}
