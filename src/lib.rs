//! Recomendar: user-based collaborative filtering in pure Rust.
//!
//! Recomendar predicts a user's rating for an item from the ratings of
//! similar users. Similarity between users is the mean-centered cosine of
//! their rating vectors, the most similar raters of the target item form a
//! neighborhood, and the prediction is the target user's average plus a
//! similarity-weighted blend of the neighbors' deviations from their own
//! averages.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::prelude::*;
//!
//! // (user, item, rating)
//! let store: RatingStore = [
//!     (1, 10, 5.0),
//!     (1, 20, 3.0),
//!     (2, 10, 1.0),
//!     (2, 20, 3.0),
//!     (3, 10, 4.5),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut model = UserBasedRecommender::new().with_k(100);
//! model.fit(store);
//!
//! let predicted = model.predict(3, 20);
//! assert!(predicted.is_finite());
//! ```
//!
//! # Modules
//!
//! - [`ratings`]: Sparse rating storage and per-user averages
//! - [`similarity`]: Mean-centered cosine similarity
//! - [`neighbors`]: Top-k neighbor selection
//! - [`recommend`]: Rating prediction (fit/predict surface)
//! - [`dataset`]: Line-oriented train/test stream parsing
//! - [`error`]: Error types

pub mod dataset;
pub mod error;
pub mod neighbors;
pub mod prelude;
pub mod ratings;
pub mod recommend;
pub mod similarity;

pub use error::{RecomendarError, Result};
