use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use crate::core::domain::CatalogRecord;

/// Parse a venue catalog CSV into raw records.
///
/// The file has two positional columns (venue name, weekly-hours notation)
/// and no header row.
pub fn parse_catalog_csv(csv_path: &Path) -> Result<Vec<CatalogRecord>> {
    let df = CsvReadOptions::default()
        .with_has_header(false)
        .try_into_reader_with_file_path(Some(csv_path.into()))?
        .finish()
        .context("Failed to parse catalog CSV")?;

    dataframe_to_records(&df)
}

/// Convert a catalog DataFrame to raw records, column 0 = name, column 1 =
/// hours notation.
pub fn dataframe_to_records(df: &DataFrame) -> Result<Vec<CatalogRecord>> {
    let columns = df.get_columns();
    if columns.len() < 2 {
        anyhow::bail!(
            "catalog needs a name and an hours column, found {} column(s)",
            columns.len()
        );
    }

    let names = columns[0]
        .str()
        .context("venue name column is not a string column")?;
    let hours = columns[1]
        .str()
        .context("hours notation column is not a string column")?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let name = names
            .get(i)
            .with_context(|| format!("Missing venue name at row {}", i))?;
        let raw_hours = hours
            .get(i)
            .with_context(|| format!("Missing hours notation at row {}", i))?;

        records.push(CatalogRecord {
            name: name.to_string(),
            raw_hours: raw_hours.to_string(),
        });
    }

    Ok(records)
}
