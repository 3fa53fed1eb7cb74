//! Cutting parameters and the Engraver configuration file.
//!
//! The configuration is stored as JSON or TOML, chosen by file extension. The
//! default location is `<platform config dir>/engraver/config.toml`.

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Numeric policy applied to every generated toolpath.
///
/// Heights are absolute Z positions in mm, feeds are in mm/min.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CutSettings {
    /// Z height of every cutting move.
    pub cut_depth: f64,
    /// Z height for non-cutting travel.
    pub safe_height: f64,
    /// Feed rate for the vertical plunge.
    pub plunge_feed: f64,
    /// Feed rate for cutting moves.
    pub cut_feed: f64,
}

impl Default for CutSettings {
    fn default() -> Self {
        Self {
            cut_depth: 0.0,
            safe_height: 5.0,
            plunge_feed: 300.0,
            cut_feed: 600.0,
        }
    }
}

impl CutSettings {
    /// Validate cutting parameters
    pub fn validate(&self) -> SettingsResult<()> {
        let values = [
            ("cut_depth", self.cut_depth),
            ("safe_height", self.safe_height),
            ("plunge_feed", self.plunge_feed),
            ("cut_feed", self.cut_feed),
        ];
        for (key, value) in values {
            if !value.is_finite() {
                return Err(SettingsError::InvalidSetting {
                    key,
                    reason: format!("{} is not a finite number", value),
                });
            }
        }

        if self.plunge_feed <= 0.0 {
            return Err(SettingsError::InvalidSetting {
                key: "plunge_feed",
                reason: "must be > 0".to_string(),
            });
        }

        if self.cut_feed <= 0.0 {
            return Err(SettingsError::InvalidSetting {
                key: "cut_feed",
                reason: "must be > 0".to_string(),
            });
        }

        if self.safe_height <= self.cut_depth {
            return Err(SettingsError::InvalidSetting {
                key: "safe_height",
                reason: format!(
                    "{:.3} must be above cut_depth {:.3}",
                    self.safe_height, self.cut_depth
                ),
            });
        }

        Ok(())
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngraverConfig {
    /// Toolpath cutting parameters
    pub cut: CutSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(SettingsError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl EngraverConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location for the current platform.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("engraver").join("config.toml"))
            .ok_or(SettingsError::ConfigDirectory)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: EngraverConfig = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load config from `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        debug!(path = %path.display(), "saved configuration");

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.cut.validate()
    }
}
