use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};

use open_hours::config::LookupConfig;
use open_hours::io::loaders::CatalogLoader;
use open_hours::services::{catalog, lookup};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    // Config file path from environment, everything else from args.
    let config = match std::env::var("OPEN_HOURS_CONFIG") {
        Ok(path) => LookupConfig::from_file(Path::new(&path))?,
        Err(_) => LookupConfig::default(),
    };

    let catalog_path = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&config.catalog.path));

    let search_datetime = match args.get(2) {
        Some(raw) => NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT)
            .with_context(|| format!("expected a '{}' timestamp, got {:?}", DATETIME_FORMAT, raw))?,
        None => Local::now().naive_local(),
    };

    println!("=== Open Venue Lookup ===");
    println!("Catalog: {}", catalog_path.display());
    println!("Search time: {}", search_datetime.format(DATETIME_FORMAT));
    println!();

    let loaded = CatalogLoader::load_from_file(&catalog_path)
        .with_context(|| format!("could not load catalog {}", catalog_path.display()))?;
    log::info!(
        "loaded {} catalog records from {}",
        loaded.num_records,
        catalog_path.display()
    );

    let venues = catalog::assemble_catalog(loaded.records, config.parsing.on_error).await?;
    let open = lookup::find_open(&venues, search_datetime);

    println!(
        "found {} venues open at {}:",
        open.len(),
        search_datetime.format(DATETIME_FORMAT)
    );
    for (i, venue) in open.iter().enumerate() {
        println!("{:3} | {}", i + 1, venue.name);
    }

    Ok(())
}
