//! Configuration file loading for matrain.
//!
//! The config lives in `config.toml` under the platform config directory
//! (e.g. `~/.config/matrain/config.toml` on Linux). The `MATRAIN_CONFIG`
//! environment variable points at a different file instead.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use matrain_core::{EngineConfig, RainError};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "MATRAIN_CONFIG";

/// Largest terminal cell dimension, in pixels.
pub const MAX_CELL_SIZE: u32 = 4096;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors raised while loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("terminal cell size must be between 1 and 4096 pixels per side, got {width}x{height}")]
    InvalidCellSize { width: u32, height: u32 },

    #[error(transparent)]
    Invalid(#[from] RainError),
}

/// How many surface pixels one terminal cell stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub cell_width: u32,
    pub cell_height: u32,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        // Terminal cells are roughly twice as tall as they are wide.
        Self {
            cell_width: 10,
            cell_height: 20,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Options passed straight to the rain engine.
    #[serde(flatten)]
    pub engine: EngineConfig,
    /// Terminal host settings.
    pub terminal: TerminalConfig,
}

impl Config {
    /// Load the config from [`CONFIG_ENV_VAR`] or the default location.
    ///
    /// A missing file at the default location yields the defaults. A file
    /// named through the environment variable must exist.
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::load_from(Path::new(&path));
        }
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                log::debug!("no config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => {
                log::warn!("could not determine config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate the config stored at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the engine or terminal host cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let TerminalConfig {
            cell_width,
            cell_height,
        } = self.terminal;
        let in_range = |v: u32| (1..=MAX_CELL_SIZE).contains(&v);
        if !in_range(cell_width) || !in_range(cell_height) {
            return Err(ConfigError::InvalidCellSize {
                width: cell_width,
                height: cell_height,
            });
        }
        self.engine.validate()?;
        Ok(())
    }
}

/// Default location of the config file, if the platform has a config directory.
pub fn config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Platform directories for matrain.
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "matrain")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let file = write_config("");
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.engine.tile_size, 20);
        assert_eq!(config.engine.fade_factor, 0.05);
        assert_eq!(config.engine.background_color, "#030303");
        assert_eq!(config.engine.font_color, "#008529");
    }

    #[test]
    fn test_partial_file_overrides_given_keys() {
        let file = write_config(
            r##"
tile_size = 16
font_color = "#00ff41"

[terminal]
cell_width = 8
"##,
        );
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.engine.tile_size, 16);
        assert_eq!(config.engine.font_color, "#00ff41");
        assert_eq!(config.engine.fade_factor, 0.05);
        assert_eq!(config.engine.background_color, "#030303");
        assert_eq!(config.terminal.cell_width, 8);
        assert_eq!(config.terminal.cell_height, 20);
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let file = write_config(r#"background_color = "red""#);
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(RainError::InvalidColorFormat { .. })
        ));
    }

    #[test]
    fn test_zero_cell_size_is_rejected() {
        let file = write_config("[terminal]\ncell_height = 0\n");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidCellSize {
                width: 10,
                height: 0
            }
        ));
    }

    #[test]
    fn test_oversized_cell_size_is_rejected() {
        let file = write_config("[terminal]\ncell_width = 100000000\n");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidCellSize {
                width: 100_000_000,
                height: 20
            }
        ));
    }

    #[test]
    fn test_oversized_tile_size_is_rejected() {
        let file = write_config("tile_size = 5000\n");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(RainError::InvalidTileSize(5000))
        ));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let file = write_config("tile_size = \"big\"");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
