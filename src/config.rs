// src/config.rs

//! Defines the configuration structures for `hdpi-coords`.
//!
//! The structs deserialize from a JSON file. Every section carries
//! `#[serde(default)]`, so a partial file (or no file at all) yields usable
//! settings.

use anyhow::{Context, Result};
use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::hdpi::HdpiMode;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "HDPI_COORDS_CONFIG";

/// Process-wide configuration, loaded on first access and never modified.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::load_or_default);

// --- Top-Level Configuration Structure ---

/// Root of the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Coordinate conversion settings.
    pub hdpi: HdpiConfig,
}

// --- HDPI Configuration ---

/// Settings for viewport/scissor coordinate conversion.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct HdpiConfig {
    /// Mode a new `HdpiConverter::from_config` starts in.
    /// `"logical"` (default) or `"pixels"`.
    pub mode: HdpiMode,
}

impl Config {
    /// Reads and parses a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Loads the file named by `HDPI_COORDS_CONFIG`, falling back to defaults
    /// when the variable is unset or the file is unusable.
    pub fn load_or_default() -> Self {
        let Some(path) = std::env::var_os(CONFIG_PATH_ENV) else {
            info!("{} not set, using default configuration.", CONFIG_PATH_ENV);
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                info!("Configuration loaded from {:?}.", path);
                config
            }
            Err(e) => {
                warn!("{:#}. Using default configuration.", e);
                Self::default()
            }
        }
    }
}
