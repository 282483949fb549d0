//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use recomendar::prelude::*;
//! ```

pub use crate::dataset::{Query, TrainTestData};
pub use crate::neighbors::{top_k, Neighbor};
pub use crate::ratings::RatingStore;
pub use crate::recommend::UserBasedRecommender;
pub use crate::similarity::mean_centered_cosine;
