//! Lookup tool configuration file support.
//!
//! This module provides utilities for reading the lookup tool's settings
//! from TOML configuration files. Every field has a default, so a missing
//! file or an empty table is a valid configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Lookup configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub parsing: ParsingSettings,
}

/// Catalog source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Catalog file used when no path is given on the command line.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

/// Parse failure handling settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsingSettings {
    #[serde(default)]
    pub on_error: FailurePolicy,
}

/// What to do with a catalog record whose hours notation fails to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Log the record's error and keep going without it.
    #[default]
    Skip,
    /// Fail the whole catalog on the first bad record.
    Abort,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> String {
    "data/restaurants.csv".to_string()
}

impl LookupConfig {
    /// Reads a configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&contents).context("Failed to parse config TOML")
    }
}
