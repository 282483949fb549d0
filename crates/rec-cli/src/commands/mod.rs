//! Command implementations

pub(crate) mod predict;
pub(crate) mod similarity;
pub(crate) mod stats;

use crate::error::{CliError, Result};
use recomendar::dataset::{read_stream, TrainTestData};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Read a train/test stream from a file, or from stdin when no file is
/// given.
pub(crate) fn read_input(file: Option<&Path>) -> Result<TrainTestData> {
    match file {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.to_path_buf()));
            }
            let reader = BufReader::new(File::open(path)?);
            Ok(read_stream(reader)?)
        }
        None => Ok(read_stream(io::stdin().lock())?),
    }
}
