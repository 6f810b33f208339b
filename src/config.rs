use std::path::Path;

use crate::error::ConfigError;

/// Largest board the engine will allocate.
pub const MAX_CELLS: usize = 4096;

/// Board geometry and win rule, loadable from TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Run length that wins the game.
    pub win_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 7,
            height: 6,
            win_length: 4,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::Validation("width must be >= 1".into()));
        }
        if self.height == 0 {
            return Err(ConfigError::Validation("height must be >= 1".into()));
        }
        if self.cells() > MAX_CELLS {
            return Err(ConfigError::Validation(format!(
                "width * height must be <= {MAX_CELLS}"
            )));
        }
        if self.win_length < 2 {
            return Err(ConfigError::Validation("win_length must be >= 2".into()));
        }
        if self.win_length > self.width.max(self.height) {
            return Err(ConfigError::Validation(
                "win_length must fit on the board".into(),
            ));
        }
        Ok(())
    }

    /// Total number of cells on the board, saturating on overflow.
    pub fn cells(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).unwrap_or_default()
    }
}
