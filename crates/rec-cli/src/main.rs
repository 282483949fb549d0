//! rec - Rating prediction CLI
//!
//! Usage:
//!   rec predict ratings.txt            # Predict every test query
//!   rec predict -k 10 < ratings.txt    # Cap the neighborhood at 10
//!   rec predict --recompute-known      # Never short-circuit known ratings
//!   rec stats ratings.txt              # Corpus summary
//!   rec similarity 1 2 ratings.txt     # Similarity between two users

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod error;
mod output;

use commands::{predict, similarity, stats};

/// rec - User-based collaborative filtering over train/test streams.
///
/// Reads a line-oriented stream: ratings after a "train dataset" marker,
/// queries after a "test dataset" marker.
#[derive(Parser)]
#[command(name = "rec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict a rating for every test query in the stream
    Predict {
        /// Input stream (defaults to stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Neighborhood size cap per query
        #[arg(short = 'k', long = "neighbors", default_value = "100")]
        neighbors: usize,

        /// Run the neighborhood model even for already-rated items
        #[arg(long)]
        recompute_known: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize the training corpus
    Stats {
        /// Input stream (defaults to stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mean-centered cosine similarity between two users
    Similarity {
        /// First user id
        #[arg(value_name = "USER_A")]
        user_a: i64,

        /// Second user id
        #[arg(value_name = "USER_B")]
        user_b: i64,

        /// Input stream (defaults to stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Predict {
            file,
            neighbors,
            recompute_known,
            json,
        } => predict::run(
            file.as_deref(),
            neighbors,
            recompute_known,
            json || cli.json,
            cli.verbose,
        ),

        Commands::Stats { file, json } => stats::run(file.as_deref(), json || cli.json),

        Commands::Similarity {
            user_a,
            user_b,
            file,
            json,
        } => similarity::run(user_a, user_b, file.as_deref(), json || cli.json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
