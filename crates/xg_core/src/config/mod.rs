//! # Configuration
//!
//! Every tunable constant of the shot model lives here.
//!
//! ```rust
//! use xg_core::config::XgConfig;
//!
//! let config = XgConfig::default();
//! let metrica = XgConfig::metrica();
//! assert!(config.validate().is_ok());
//! assert!(metrica.validate().is_ok());
//! ```

mod extraction_config;
mod geometry_config;
mod pitch_config;

pub use extraction_config::{ExtractionConfig, SubtypeMatching};
pub use geometry_config::GeometryConfig;
pub use pitch_config::{PitchConfig, PitchView};

use crate::error::{Result, XgError};
use crate::geometry::CoordinateConvention;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct XgConfig {
    #[serde(default)]
    pub geometry: GeometryConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub pitch: PitchConfig,
}

impl XgConfig {
    /// Shots measured from the halfway line, as in Metrica event exports.
    pub fn metrica() -> Self {
        let mut cfg = Self::default();
        cfg.geometry.convention = CoordinateConvention::MidfieldCentered;
        cfg
    }

    /// Load a config file. `.yaml` / `.yml` are parsed as YAML, anything else as JSON.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| XgError::Config(format!("{}: {}", path.display(), e)))?;
        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );
        let config = if is_yaml { Self::from_yaml(&content)? } else { Self::from_json(&content)? };
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: XgConfig =
            serde_json::from_str(json).map_err(|e| XgError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: XgConfig =
            serde_yaml::from_str(yaml).map_err(|e| XgError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.geometry.validate()?;
        self.pitch.validate()?;
        Ok(())
    }
}

// ========== Tests ==========
