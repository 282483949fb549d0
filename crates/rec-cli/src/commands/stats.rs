//! Stats command implementation
//!
//! Summarizes the training section of a stream: user, item, and rating
//! counts, the global mean, and the spread of per-user history sizes.

use crate::commands::read_input;
use crate::error::Result;
use crate::output;
use recomendar::ratings::RatingStore;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct StatsReport {
    users: usize,
    items: usize,
    ratings: usize,
    queries: usize,
    global_mean: f64,
    min_ratings_per_user: usize,
    max_ratings_per_user: usize,
}

fn build_report(store: &RatingStore, queries: usize) -> StatsReport {
    let history_sizes: Vec<usize> = store.users().map(|(_, r)| r.len()).collect();
    StatsReport {
        users: store.n_users(),
        items: store.n_items(),
        ratings: store.n_ratings(),
        queries,
        global_mean: store.global_mean(),
        min_ratings_per_user: history_sizes.iter().copied().min().unwrap_or(0),
        max_ratings_per_user: history_sizes.iter().copied().max().unwrap_or(0),
    }
}

pub(crate) fn run(file: Option<&Path>, json: bool) -> Result<()> {
    let data = read_input(file)?;
    let report = build_report(&data.store, data.queries.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::section("Corpus");
    output::kv("users", report.users);
    output::kv("items", report.items);
    output::kv("ratings", report.ratings);
    output::kv("queries", report.queries);
    output::kv("global mean", format!("{:.4}", report.global_mean));
    output::kv("min ratings/user", report.min_ratings_per_user);
    output::kv("max ratings/user", report.max_ratings_per_user);

    Ok(())
}
