//! End-to-end tests: catalog file -> concurrent assembly -> lookup.

use std::io::Write;

use chrono::NaiveDateTime;
use tempfile::{Builder, NamedTempFile};

use open_hours::config::FailurePolicy;
use open_hours::io::loaders::{CatalogLoader, CatalogSourceType};
use open_hours::services::{catalog, lookup};

fn create_catalog_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut temp_file = Builder::new().suffix(suffix).tempfile().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}

fn timestamp(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").unwrap()
}

#[tokio::test]
async fn csv_catalog_end_to_end() {
    let csv_content = "\
\"Daytime Deli\",\"Mon-Sat 11 am - 11 pm / Sun 11 am - 10 pm\"
\"Split Week Kitchen\",\"Mon-Thu, Sun 11:30 am - 10 pm / Sat 5:30 pm - 10 pm\"
\"Night Owl Diner\",\"Fri-Sat 7 pm - 2 am\"
";
    let temp_file = create_catalog_file(".csv", csv_content);

    let loaded = CatalogLoader::load_from_file(temp_file.path()).unwrap();
    assert_eq!(loaded.source_type, CatalogSourceType::Csv);

    let venues = catalog::assemble_catalog(loaded.records, FailurePolicy::Abort)
        .await
        .unwrap();
    assert_eq!(venues.len(), 3);

    // Monday noon: the two daytime venues are open, the night spot is not.
    let open = lookup::find_open(&venues, timestamp("2018-05-21 12:00:00"));
    let names: Vec<&str> = open.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Daytime Deli", "Split Week Kitchen"]);

    // Friday noon: Split Week Kitchen is closed all day on Fridays.
    let open = lookup::find_open(&venues, timestamp("2018-05-25 12:00:00"));
    let names: Vec<&str> = open.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Daytime Deli"]);

    // Saturday 00:30: the daytime ranges do not wrap, so only the Night Owl
    // (Saturday 7 pm - 2 am, via the Fri-Sat day range) is still open.
    let open = lookup::find_open(&venues, timestamp("2018-05-26 00:30:00"));
    let names: Vec<&str> = open.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Night Owl Diner"]);

    // Saturday 23:30: past the deli's 11 pm close, inside the Night Owl's
    // evening side.
    let open = lookup::find_open(&venues, timestamp("2018-05-26 23:30:00"));
    let names: Vec<&str> = open.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Night Owl Diner"]);
}

#[tokio::test]
async fn wraparound_range_is_open_before_its_close_time() {
    let loaded = CatalogLoader::load_from_json_str(
        r#"[{"name": "Night Owl Diner", "hours": "Sat 7 pm - 2 am"}]"#,
    )
    .unwrap();

    let venues = catalog::assemble_catalog(loaded.records, FailurePolicy::Abort)
        .await
        .unwrap();

    // Saturday 01:00 is inside Saturday's 7 pm - 2 am interval.
    let open = lookup::find_open(&venues, timestamp("2018-05-26 01:00:00"));
    assert_eq!(open.len(), 1);

    // Sunday 01:00 is not: the schedule has no Sunday entry.
    let open = lookup::find_open(&venues, timestamp("2018-05-27 01:00:00"));
    assert!(open.is_empty());
}

#[tokio::test]
async fn bad_rows_are_skipped_under_the_default_policy() {
    let csv_content = "\
\"Good Cafe\",\"Mon-Fri 9 am - 5 pm\"
\"Typo Tavern\",\"Mon-Wed\"
\"Other Cafe\",\"Mon-Fri 8 am - 4 pm\"
";
    let temp_file = create_catalog_file(".csv", csv_content);

    let loaded = CatalogLoader::load_from_file(temp_file.path()).unwrap();
    let venues = catalog::assemble_catalog(loaded.records, FailurePolicy::Skip)
        .await
        .unwrap();

    let names: Vec<&str> = venues.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Good Cafe", "Other Cafe"]);
}

#[tokio::test]
async fn bad_rows_abort_under_the_strict_policy() {
    let loaded = CatalogLoader::load_from_json_str(
        r#"[
            {"name": "Good Cafe", "hours": "Mon-Fri 9 am - 5 pm"},
            {"name": "Typo Tavern", "hours": "Mon-Wed"}
        ]"#,
    )
    .unwrap();

    let result = catalog::assemble_catalog(loaded.records, FailurePolicy::Abort).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn bundled_sample_catalog_loads_cleanly() {
    let loaded = CatalogLoader::load_from_file(std::path::Path::new("data/restaurants.csv"))
        .unwrap();
    assert!(loaded.num_records > 0);

    let venues = catalog::assemble_catalog(loaded.records, FailurePolicy::Abort)
        .await
        .unwrap();

    // Sunday early morning only the late-night venues should remain open.
    let open = lookup::find_open(&venues, timestamp("2018-05-27 00:30:00"));
    let names: Vec<&str> = open.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Kat's Late Night"]);
}
