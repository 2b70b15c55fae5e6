//! Concurrent catalog assembly.
//!
//! Parsing one record is pure and independent of every other record, so the
//! whole catalog fans out as one task per record. Each task owns the result
//! slot reserved by its input row: slots are addressed only by the index the
//! task carries, never shared, so completion order does not matter and the
//! output always lines up with the input.

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::config::FailurePolicy;
use crate::core::domain::{CatalogRecord, Venue};
use crate::parsing::error::HoursParseError;
use crate::parsing::hours::HoursParser;

/// A catalog record whose hours notation failed to parse, tagged with the
/// record's input position and name.
#[derive(Debug, thiserror::Error)]
#[error("catalog row {row} ({name:?}): {source}")]
pub struct CatalogError {
    pub row: usize,
    pub name: String,
    #[source]
    pub source: HoursParseError,
}

/// Parses every record into its venue, one task per record.
///
/// Slot `i` of the returned vector always holds the outcome for input row
/// `i`, whatever order the tasks finished in.
pub async fn parse_records(records: Vec<CatalogRecord>) -> Result<Vec<Result<Venue, CatalogError>>> {
    let mut handles = Vec::with_capacity(records.len());
    for (row, record) in records.into_iter().enumerate() {
        handles.push(tokio::spawn(async move { (row, parse_record(row, record)) }));
    }

    let mut slots: Vec<Option<Result<Venue, CatalogError>>> =
        (0..handles.len()).map(|_| None).collect();
    for handle in handles {
        let (row, outcome) = handle.await.context("catalog parse task panicked")?;
        slots[row] = Some(outcome);
    }

    Ok(slots
        .into_iter()
        .map(|slot| slot.expect("every row writes exactly one slot"))
        .collect())
}

fn parse_record(row: usize, record: CatalogRecord) -> Result<Venue, CatalogError> {
    debug!("row {:2} | {}", row, record.name);
    match HoursParser::parse(&record.raw_hours) {
        Ok(schedule) => Ok(Venue {
            name: record.name,
            schedule,
        }),
        Err(source) => Err(CatalogError {
            row,
            name: record.name,
            source,
        }),
    }
}

/// Folds per-record outcomes into a venue list according to the failure
/// policy: `Skip` logs each bad record and drops it, `Abort` fails the whole
/// catalog on the first one. Surviving venues keep their catalog order.
pub fn apply_failure_policy(
    outcomes: Vec<Result<Venue, CatalogError>>,
    policy: FailurePolicy,
) -> Result<Vec<Venue>> {
    let mut venues = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match outcome {
            Ok(venue) => venues.push(venue),
            Err(err) => match policy {
                FailurePolicy::Skip => warn!("skipping venue: {}", err),
                FailurePolicy::Abort => {
                    return Err(err).context("catalog assembly aborted");
                }
            },
        }
    }
    Ok(venues)
}

/// Parses a whole catalog and applies the failure policy in one call.
pub async fn assemble_catalog(
    records: Vec<CatalogRecord>,
    policy: FailurePolicy,
) -> Result<Vec<Venue>> {
    let outcomes = parse_records(records).await?;
    apply_failure_policy(outcomes, policy)
}
