//! User-based collaborative filtering predictor.

use crate::neighbors::top_k;
use crate::ratings::RatingStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default neighbor budget. Large enough to act as "all qualifying
/// neighbors" on small datasets.
pub const DEFAULT_K: usize = 100;

/// Neutral fallback when a user is unknown but the corpus is not empty;
/// the midpoint of the conventional 1-5 rating scale.
const NEUTRAL_RATING: f64 = 3.0;

const CLAMP_FLOOR: f64 = 1.0;
const CLAMP_CEILING: f64 = 3.0;

/// User-based collaborative filtering recommender.
///
/// Predicts a user's rating for an item as the user's own average plus a
/// weighted blend of how the most similar raters of that item deviated
/// from their averages. Neighbor weights are `exp(similarity)`, which
/// amplifies strong similarities more than linear weighting and keeps a
/// small positive weight even for negatively correlated neighbors.
///
/// # Algorithm
///
/// 1. Select up to `k` most similar users who rated the item
/// 2. Weight each neighbor's mean-centered rating by `exp(similarity)`
/// 3. Add the normalized blend to the target user's average
/// 4. Clamp low predictions (see [`predict`](Self::predict))
///
/// # Examples
///
/// ```
/// use recomendar::ratings::RatingStore;
/// use recomendar::recommend::UserBasedRecommender;
///
/// let store: RatingStore = [
///     (1, 10, 5.0),
///     (1, 20, 3.0),
///     (2, 10, 1.0),
///     (2, 20, 3.0),
/// ]
/// .into_iter()
/// .collect();
///
/// let mut model = UserBasedRecommender::new().with_return_known_rating(false);
/// model.fit(store);
///
/// let predicted = model.predict(1, 10);
/// assert!((predicted - 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserBasedRecommender {
    /// Neighbor budget per query.
    k: usize,
    /// Return a stored rating directly instead of predicting over it.
    return_known_rating: bool,
    /// Training observations.
    store: RatingStore,
    /// Per-user mean ratings, derived at fit time.
    averages: BTreeMap<i64, f64>,
}

impl Default for UserBasedRecommender {
    fn default() -> Self {
        Self::new()
    }
}

impl UserBasedRecommender {
    /// Creates an unfitted recommender with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            k: DEFAULT_K,
            return_known_rating: true,
            store: RatingStore::new(),
            averages: BTreeMap::new(),
        }
    }

    /// Sets the neighbor budget per query.
    #[must_use]
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Controls the known-rating short-circuit.
    ///
    /// When `true` (the default), [`predict`](Self::predict) returns a
    /// rating the user already gave the item verbatim. When `false`, the
    /// neighborhood model runs even for items in the user's own history,
    /// which is what held-out evaluation wants.
    #[must_use]
    pub fn with_return_known_rating(mut self, yes: bool) -> Self {
        self.return_known_rating = yes;
        self
    }

    /// Fits the recommender: takes ownership of the training observations
    /// and derives per-user averages.
    pub fn fit(&mut self, store: RatingStore) {
        self.averages = store.user_averages();
        self.store = store;
    }

    /// Neighbor budget per query.
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Whether the known-rating short-circuit is active.
    #[must_use]
    pub fn return_known_rating(&self) -> bool {
        self.return_known_rating
    }

    /// The fitted training observations.
    #[must_use]
    pub fn store(&self) -> &RatingStore {
        &self.store
    }

    /// The fitted average rating of one user, if the user is known.
    #[must_use]
    pub fn user_average(&self, user: i64) -> Option<f64> {
        self.averages.get(&user).copied()
    }

    /// Predicts the rating `user` would give `item`.
    ///
    /// Always returns a number, never an error, via a tiered policy:
    ///
    /// 1. A user with no history gets 0.0 on an empty corpus, 3.0
    ///    otherwise.
    /// 2. With the short-circuit active, a rating the user already gave
    ///    the item is returned verbatim.
    /// 3. Otherwise the neighborhood blend runs. When no neighbor carries
    ///    any weight, the user's own average stands in (0.0 / 3.0 as in
    ///    step 1 if even that is missing).
    /// 4. A blended prediction at or below 3.0 is clamped into
    ///    `[1.0, 3.0]`; predictions above 3.0 pass through unclamped.
    ///    Fallback values from steps 1-3 are never clamped.
    #[must_use]
    pub fn predict(&self, user: i64, item: i64) -> f64 {
        if !self.store.contains_user(user) {
            return if self.averages.is_empty() {
                0.0
            } else {
                NEUTRAL_RATING
            };
        }

        if self.return_known_rating {
            if let Some(value) = self.store.rating(user, item) {
                return value;
            }
        }

        let neighbors = top_k(&self.store, &self.averages, user, item, self.k);

        let mut weighted_sum = 0.0;
        let mut similarity_sum = 0.0;
        for neighbor in &neighbors {
            let decayed = neighbor.similarity.exp();
            // Selection guarantees every neighbor rated the item.
            let rating = self.store.rating(neighbor.user, item).unwrap_or(0.0);
            let average = self.averages.get(&neighbor.user).copied().unwrap_or(0.0);
            weighted_sum += decayed * (rating - average);
            similarity_sum += decayed.abs();
        }

        if similarity_sum == 0.0 {
            return match self.averages.get(&user) {
                Some(&average) => average,
                None if self.averages.is_empty() => 0.0,
                None => NEUTRAL_RATING,
            };
        }

        let user_average = self.averages.get(&user).copied().unwrap_or(0.0);
        let predicted = user_average + weighted_sum / similarity_sum;

        if predicted <= CLAMP_CEILING {
            predicted.clamp(CLAMP_FLOOR, CLAMP_CEILING)
        } else {
            predicted
        }
    }

    /// Predicts a batch of independent `(user, item)` queries.
    ///
    /// The fitted state is read-only, so queries run in parallel; the
    /// output order matches the query order.
    #[must_use]
    pub fn predict_batch(&self, queries: &[(i64, i64)]) -> Vec<f64> {
        use rayon::prelude::*;
        queries
            .par_iter()
            .map(|&(user, item)| self.predict(user, item))
            .collect()
    }

    /// Root-mean-square error against held-out `(user, item, rating)`
    /// observations. Returns 0.0 for an empty slice.
    #[must_use]
    pub fn score(&self, heldout: &[(i64, i64, f64)]) -> f64 {
        if heldout.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = heldout
            .iter()
            .map(|&(user, item, actual)| {
                let predicted = self.predict(user, item);
                (predicted - actual).powi(2)
            })
            .sum();
        (sum_sq / heldout.len() as f64).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_user_store() -> RatingStore {
        [(1, 10, 5.0), (2, 10, 1.0), (1, 20, 3.0), (2, 20, 3.0)]
            .into_iter()
            .collect()
    }

    fn fitted(store: RatingStore) -> UserBasedRecommender {
        let mut model = UserBasedRecommender::new();
        model.fit(store);
        model
    }

    #[test]
    fn test_empty_corpus_predicts_zero() {
        let model = fitted(RatingStore::new());
        assert_eq!(model.predict(1, 10), 0.0);
        assert_eq!(model.predict(42, 7), 0.0);
    }

    #[test]
    fn test_unknown_user_predicts_neutral() {
        let model = fitted(two_user_store());
        assert_eq!(model.predict(99, 10), 3.0);
        assert_eq!(model.predict(99, 999), 3.0);
    }

    #[test]
    fn test_known_rating_returned_verbatim() {
        let mut store = two_user_store();
        store.record(1, 30, 0.2);
        let model = fitted(store);
        assert_eq!(model.predict(1, 10), 5.0);
        // Even outside the clamp region: the stored value is not touched.
        assert_eq!(model.predict(1, 30), 0.2);
    }

    #[test]
    fn test_golden_two_user_prediction() {
        // avg(1) = 4.0, avg(2) = 2.0, sim(1,2) = -1 exactly, and the
        // blend lands on 4.0 + (1.0 - 2.0) = 3.0, inside the clamp band.
        let model = fitted(two_user_store()).with_return_known_rating(false);
        let predicted = model.predict(1, 10);
        assert!((predicted - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_neighbor_blend_above_ceiling_unclamped() {
        // One neighbor: the decay weight cancels, so the prediction is
        // exactly user_avg + (neighbor_rating - neighbor_avg).
        let store: RatingStore = [
            (1, 20, 4.0),
            (1, 30, 5.0),
            (2, 10, 5.0),
            (2, 20, 5.0),
            (2, 30, 4.0),
        ]
        .into_iter()
        .collect();
        let model = fitted(store);
        let predicted = model.predict(1, 10);
        let expected = 4.5 + (5.0 - 14.0 / 3.0);
        assert!(predicted > 3.0);
        assert!((predicted - expected).abs() < 1e-12);
    }

    #[test]
    fn test_low_blend_clamps_to_floor() {
        let store: RatingStore = [
            (1, 20, 1.0),
            (1, 30, 2.0),
            (2, 10, 1.0),
            (2, 20, 5.0),
            (2, 30, 5.0),
        ]
        .into_iter()
        .collect();
        let model = fitted(store);
        // Blend: 1.5 + (1.0 - 11/3) = -1.1667, clamped up to the floor.
        assert_eq!(model.predict(1, 10), 1.0);
    }

    #[test]
    fn test_no_neighbors_falls_back_to_own_average_unclamped() {
        // Nobody rated item 99; user 1's own average (4.0) stands in,
        // and fallbacks skip the clamp even below the floor.
        let model = fitted(two_user_store()).with_return_known_rating(false);
        assert_eq!(model.predict(1, 99), 4.0);

        let low: RatingStore = [(1, 10, 0.4), (1, 20, 0.6)].into_iter().collect();
        let model = fitted(low);
        assert!((model.predict(1, 99) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_k_zero_always_falls_back() {
        let model = fitted(two_user_store())
            .with_k(0)
            .with_return_known_rating(false);
        assert_eq!(model.predict(1, 10), 4.0);
    }

    #[test]
    fn test_k_caps_neighborhood() {
        // Three raters of item 10 with distinct similarity to user 1.
        let store: RatingStore = [
            (1, 20, 5.0),
            (1, 30, 1.0),
            (2, 10, 4.0),
            (2, 20, 5.0),
            (2, 30, 1.0),
            (3, 10, 2.0),
            (3, 20, 1.0),
            (3, 30, 5.0),
            (4, 10, 3.0),
            (4, 20, 4.0),
            (4, 30, 2.0),
        ]
        .into_iter()
        .collect();
        let all = fitted(store).with_return_known_rating(false);
        let capped = all.clone().with_k(1);
        // k = 1 keeps only user 4 (identical mean-centered direction,
        // similarity 1.0), whose deviation from their own average is zero,
        // so the blend stays at user 1's average.
        assert_eq!(capped.predict(1, 10), 3.0);
        assert!(capped.predict(1, 10) != all.predict(1, 10));
    }

    #[test]
    fn test_predict_is_deterministic() {
        let model = fitted(two_user_store()).with_return_known_rating(false);
        let first = model.predict(1, 10);
        for _ in 0..10 {
            assert_eq!(model.predict(1, 10), first);
        }
    }

    #[test]
    fn test_predict_batch_matches_predict_in_order() {
        let model = fitted(two_user_store());
        let queries = [(1, 10), (2, 10), (99, 10), (1, 20)];
        let batch = model.predict_batch(&queries);
        let sequential: Vec<f64> = queries.iter().map(|&(u, i)| model.predict(u, i)).collect();
        assert_eq!(batch, sequential);
    }

    #[test]
    fn test_score_rmse() {
        let model = fitted(two_user_store());
        // Short-circuit active: both predictions are exact.
        assert_eq!(model.score(&[(1, 10, 5.0), (2, 10, 1.0)]), 0.0);
        // Constant offset of 1.0 -> RMSE 1.0.
        assert!((model.score(&[(1, 10, 4.0), (2, 10, 0.0)]) - 1.0).abs() < 1e-12);
        assert_eq!(model.score(&[]), 0.0);
    }

    #[test]
    fn test_accessors() {
        let model = UserBasedRecommender::new()
            .with_k(7)
            .with_return_known_rating(false);
        assert_eq!(model.k(), 7);
        assert!(!model.return_known_rating());
        assert!(model.store().is_empty());
        assert_eq!(model.user_average(1), None);
    }
}
