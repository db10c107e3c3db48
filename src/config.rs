//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/freewrite/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{FontChoice, DEFAULT_FONT_SIZE};
use crate::search::WrapPolicy;

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Selected font family
    #[serde(default)]
    pub font: FontChoice,

    /// Font size in points
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// How find-next / find-previous wrap around the buffer
    #[serde(default)]
    pub wrap_policy: WrapPolicy,
}

fn default_font_size() -> u32 {
    DEFAULT_FONT_SIZE
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            font: FontChoice::default(),
            font_size: default_font_size(),
            wrap_policy: WrapPolicy::default(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
