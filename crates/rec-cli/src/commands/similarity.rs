//! Similarity command implementation
//!
//! Diagnostic surface for the similarity engine: computes the
//! mean-centered cosine between two users of the training corpus.

use crate::commands::read_input;
use crate::error::{CliError, Result};
use crate::output;
use recomendar::similarity::mean_centered_cosine;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct SimilarityReport {
    user_a: i64,
    user_b: i64,
    similarity: f64,
}

pub(crate) fn run(user_a: i64, user_b: i64, file: Option<&Path>, json: bool) -> Result<()> {
    let data = read_input(file)?;
    let store = data.store;

    let ratings_a = store
        .ratings_for(user_a)
        .ok_or(CliError::UnknownUser(user_a))?;
    let ratings_b = store
        .ratings_for(user_b)
        .ok_or(CliError::UnknownUser(user_b))?;

    let averages = store.user_averages();
    let similarity = mean_centered_cosine(
        ratings_a,
        ratings_b,
        averages[&user_a],
        averages[&user_b],
    );

    if json {
        let report = SimilarityReport {
            user_a,
            user_b,
            similarity,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::section("Similarity");
    output::kv("user a", user_a);
    output::kv("user b", user_b);
    output::kv("mean-centered cosine", format!("{similarity:.6}"));

    Ok(())
}
