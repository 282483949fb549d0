//! Predict command implementation
//!
//! # Usage
//!
//! ```bash
//! rec predict ratings.txt              # One prediction per query line
//! rec predict -k 10 < ratings.txt      # Cap the neighborhood at 10
//! rec predict --recompute-known        # Never short-circuit known ratings
//! rec predict --json ratings.txt      # JSON records instead of plain lines
//! ```

use crate::commands::read_input;
use crate::error::Result;
use colored::Colorize;
use recomendar::recommend::UserBasedRecommender;
use serde::Serialize;
use std::path::Path;

/// One prediction in `--json` output.
#[derive(Debug, Serialize)]
struct PredictionRecord {
    user: i64,
    item: i64,
    predicted: f64,
}

pub(crate) fn run(
    file: Option<&Path>,
    neighbors: usize,
    recompute_known: bool,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let data = read_input(file)?;

    if verbose {
        eprintln!(
            "{} {} users, {} ratings, {} queries",
            "corpus:".dimmed(),
            data.store.n_users(),
            data.store.n_ratings(),
            data.queries.len()
        );
    }

    let mut model = UserBasedRecommender::new()
        .with_k(neighbors)
        .with_return_known_rating(!recompute_known);
    model.fit(data.store);

    let queries: Vec<(i64, i64)> = data.queries.iter().map(|q| (q.user, q.item)).collect();
    let predictions = model.predict_batch(&queries);

    if json {
        let records: Vec<PredictionRecord> = data
            .queries
            .iter()
            .zip(&predictions)
            .map(|(q, &predicted)| PredictionRecord {
                user: q.user,
                item: q.item,
                predicted,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for predicted in &predictions {
            println!("{predicted:.1}");
        }
    }

    Ok(())
}
