//! Recommendation via user-based collaborative filtering.
//!
//! This module provides the fit/predict surface over the rating store,
//! similarity engine, and neighbor selection.
//!
//! # Algorithm
//!
//! - **User-Based CF**: mean-centered cosine similarity between users,
//!   exponential similarity decay, neighborhood-weighted prediction with
//!   tiered fallbacks
//!
//! # Quick Start
//!
//! ```
//! use recomendar::ratings::RatingStore;
//! use recomendar::recommend::UserBasedRecommender;
//!
//! let store: RatingStore = [
//!     (1, 10, 5.0),
//!     (1, 20, 3.0),
//!     (2, 10, 1.0),
//!     (2, 20, 3.0),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut model = UserBasedRecommender::new();
//! model.fit(store);
//!
//! // User 1 already rated item 10; the stored value comes straight back.
//! assert_eq!(model.predict(1, 10), 5.0);
//! ```

pub mod user_based;

pub use user_based::UserBasedRecommender;
