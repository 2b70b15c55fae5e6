use anyhow::{Context, Result};
use std::path::Path;

use crate::core::domain::CatalogRecord;
use crate::parsing::csv_parser;
use crate::parsing::json_parser;

/// Represents the source format of catalog data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSourceType {
    Csv,
    Json,
}

/// Result of loading a venue catalog
#[derive(Debug)]
pub struct CatalogLoadResult {
    pub records: Vec<CatalogRecord>,
    pub source_type: CatalogSourceType,
    pub num_records: usize,
}

impl CatalogLoadResult {
    pub fn new(records: Vec<CatalogRecord>, source_type: CatalogSourceType) -> Self {
        let num_records = records.len();
        Self {
            records,
            source_type,
            num_records,
        }
    }
}

/// Unified interface for loading venue catalogs from CSV or JSON
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a file (auto-detects CSV or JSON by extension)
    pub fn load_from_file(path: &Path) -> Result<CatalogLoadResult> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .context("Catalog file has no extension")?;

        match extension.to_lowercase().as_str() {
            "csv" => Self::load_from_csv(path),
            "json" => Self::load_from_json(path),
            _ => anyhow::bail!("Unsupported catalog format: {}", extension),
        }
    }

    /// Load a catalog from a CSV file
    pub fn load_from_csv(csv_path: &Path) -> Result<CatalogLoadResult> {
        let records =
            csv_parser::parse_catalog_csv(csv_path).context("Failed to load CSV catalog")?;

        Ok(CatalogLoadResult::new(records, CatalogSourceType::Csv))
    }

    /// Load a catalog from a JSON file
    pub fn load_from_json(json_path: &Path) -> Result<CatalogLoadResult> {
        let records =
            json_parser::parse_catalog_json(json_path).context("Failed to load JSON catalog")?;

        Ok(CatalogLoadResult::new(records, CatalogSourceType::Json))
    }

    /// Load a catalog from an in-memory JSON string
    pub fn load_from_json_str(json_str: &str) -> Result<CatalogLoadResult> {
        let records = json_parser::parse_catalog_json_str(json_str)
            .context("Failed to load JSON catalog string")?;

        Ok(CatalogLoadResult::new(records, CatalogSourceType::Json))
    }
}
