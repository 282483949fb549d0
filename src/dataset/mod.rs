//! Line-oriented train/test dataset streams.
//!
//! A stream carries two sections. A line that is exactly `train dataset`
//! switches to training mode and `test dataset` to query mode; the stream
//! starts in training mode, so tuples before any marker count as training
//! data. Training lines hold `user item rating`, query lines `user item`,
//! whitespace-separated. Extra trailing tokens are ignored; lines that do
//! not parse are skipped without error.

use crate::error::Result;
use crate::ratings::RatingStore;
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// Marker line opening (or re-opening) the training section.
pub const TRAIN_MARKER: &str = "train dataset";

/// Marker line opening the test section.
pub const TEST_MARKER: &str = "test dataset";

/// One prediction query: which rating would `user` give `item`?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Querying user id.
    pub user: i64,
    /// Target item id.
    pub item: i64,
}

/// A fully parsed stream: training observations plus queries in input
/// order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainTestData {
    /// Training observations.
    pub store: RatingStore,
    /// Test queries, in input order.
    pub queries: Vec<Query>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Train,
    Test,
}

fn parse_training(line: &str) -> Option<(i64, i64, f64)> {
    let mut tokens = line.split_whitespace();
    let user = tokens.next()?.parse().ok()?;
    let item = tokens.next()?.parse().ok()?;
    let value = tokens.next()?.parse().ok()?;
    Some((user, item, value))
}

fn parse_query(line: &str) -> Option<Query> {
    let mut tokens = line.split_whitespace();
    let user = tokens.next()?.parse().ok()?;
    let item = tokens.next()?.parse().ok()?;
    Some(Query { user, item })
}

/// Reads a train/test stream to the end.
///
/// The only error is a failing read on the underlying source; malformed
/// data lines are silently skipped.
///
/// # Examples
///
/// ```
/// use recomendar::dataset::read_stream;
///
/// let input = "\
/// train dataset
/// 1 10 5.0
/// 2 10 1.0
/// test dataset
/// 1 10
/// ";
/// let data = read_stream(input.as_bytes()).unwrap();
/// assert_eq!(data.store.n_ratings(), 2);
/// assert_eq!(data.queries.len(), 1);
/// ```
///
/// # Errors
///
/// Returns [`crate::RecomendarError::Io`] when the reader fails.
pub fn read_stream<R: BufRead>(reader: R) -> Result<TrainTestData> {
    let mut data = TrainTestData::default();
    let mut section = Section::Train;

    for line in reader.lines() {
        let line = line?;
        if line == TRAIN_MARKER {
            section = Section::Train;
            continue;
        }
        if line == TEST_MARKER {
            section = Section::Test;
            continue;
        }
        match section {
            Section::Train => {
                if let Some((user, item, value)) = parse_training(&line) {
                    data.store.record(user, item, value);
                }
            }
            Section::Test => {
                if let Some(query) = parse_query(&line) {
                    data.queries.push(query);
                }
            }
        }
    }

    Ok(data)
}
