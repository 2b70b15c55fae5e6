use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::core::domain::CatalogRecord;

/// Raw JSON structure for one catalog entry.
#[derive(Debug, Deserialize)]
struct RawCatalogEntry {
    name: String,
    hours: String,
}

/// Parse a venue catalog JSON file: an array of `{"name", "hours"}` objects.
pub fn parse_catalog_json(json_path: &Path) -> Result<Vec<CatalogRecord>> {
    let contents = fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read {}", json_path.display()))?;
    parse_catalog_json_str(&contents)
}

/// Parse a venue catalog from an in-memory JSON string.
pub fn parse_catalog_json_str(json_str: &str) -> Result<Vec<CatalogRecord>> {
    let entries: Vec<RawCatalogEntry> =
        serde_json::from_str(json_str).context("Failed to parse catalog JSON")?;

    Ok(entries
        .into_iter()
        .map(|entry| CatalogRecord {
            name: entry.name,
            raw_hours: entry.hours,
        })
        .collect())
}
