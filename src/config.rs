use std::path::Path;

use crate::error::ConfigError;
use crate::game::GameConfig;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            game: GameConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    ///
    /// Dimensions smaller than 4 are accepted: such boards are playable, a
    /// win just never fits. Only zero dimensions are rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.height == 0 {
            return Err(ConfigError::Validation("game.height must be > 0".into()));
        }
        if self.game.width == 0 {
            return Err(ConfigError::Validation("game.width must be > 0".into()));
        }
        if self
            .game
            .player1_color
            .parse::<ratatui::style::Color>()
            .is_err()
        {
            return Err(ConfigError::Validation(format!(
                "game.player1_color '{}' is not a recognized color",
                self.game.player1_color
            )));
        }
        if self
            .game
            .player2_color
            .parse::<ratatui::style::Color>()
            .is_err()
        {
            return Err(ConfigError::Validation(format!(
                "game.player2_color '{}' is not a recognized color",
                self.game.player2_color
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
