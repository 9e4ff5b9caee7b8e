//! Registry configuration file support.
//!
//! This module provides utilities for reading extra named units from TOML configuration files
//! and turning them into a [`UnitRegistry`](crate::UnitRegistry).
//!
//! ```toml
//! include_standard_units = true
//!
//! [[unit]]
//! name = "newton second"
//! abbreviation = "N.s"
//! family = "Momentum"
//! dimensions = "kg.m/s"
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Registry configuration from file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default = "default_include_standard_units")]
    pub include_standard_units: bool,
    #[serde(default, rename = "unit")]
    pub units: Vec<ConfiguredUnit>,
}

/// One `[[unit]]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfiguredUnit {
    pub name: String,
    pub abbreviation: String,
    #[serde(default = "default_family")]
    pub family: String,
    /// SI dimension string such as `kg.m/s2`.
    pub dimensions: String,
}

fn default_include_standard_units() -> bool {
    true
}

fn default_family() -> String {
    "SI".to_string()
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            include_standard_units: default_include_standard_units(),
            units: Vec::new(),
        }
    }
}

impl RegistryConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Configuration(format!("Failed to parse config: {}", e)))
    }

    /// Load registry configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(RegistryConfig)` if successful
    /// * `Err(Error::Configuration)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Load registry configuration from the default location.
    ///
    /// Searches for `dimval.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    pub fn from_default_location() -> Result<Self> {
        Self::from_search_paths(&[
            PathBuf::from("dimval.toml"),
            PathBuf::from("config/dimval.toml"),
        ])
    }

    fn from_search_paths(search_paths: &[PathBuf]) -> Result<Self> {
        for path in search_paths {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        Err(Error::Configuration(
            "No dimval.toml found in standard locations".to_string(),
        ))
    }

    /// Serialize back to TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self)
            .map_err(|e| Error::Configuration(format!("Failed to serialize config: {}", e)))
    }
}
