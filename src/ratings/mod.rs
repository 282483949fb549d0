//! Sparse rating storage and per-user averages.
//!
//! [`RatingStore`] holds per-user, per-item rating observations and derives
//! the per-user mean ratings that the similarity and prediction stages
//! center against. The store is populated once from training data and then
//! read-only for the prediction phase.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sparse user-item rating observations.
///
/// Maps user id -> item id -> rating value. A (user, item) pair holds at
/// most one value; recording the same pair again overwrites (last write
/// wins). Ordered maps keep iteration, and therefore floating-point
/// accumulation, deterministic across runs.
///
/// # Examples
///
/// ```
/// use recomendar::ratings::RatingStore;
///
/// let mut store = RatingStore::new();
/// store.record(1, 10, 5.0);
/// store.record(1, 20, 3.0);
/// store.record(2, 10, 1.0);
///
/// assert_eq!(store.n_users(), 2);
/// assert_eq!(store.rating(1, 10), Some(5.0));
///
/// let averages = store.user_averages();
/// assert_eq!(averages[&1], 4.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingStore {
    ratings: BTreeMap<i64, BTreeMap<i64, f64>>,
}

impl RatingStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a rating observation.
    ///
    /// Values are not validated against any range; the store accepts
    /// whatever the caller parsed.
    pub fn record(&mut self, user: i64, item: i64, value: f64) {
        self.ratings.entry(user).or_default().insert(item, value);
    }

    /// Returns the full rating map of one user, if the user is known.
    #[must_use]
    pub fn ratings_for(&self, user: i64) -> Option<&BTreeMap<i64, f64>> {
        self.ratings.get(&user)
    }

    /// Returns a single stored rating, if present.
    #[must_use]
    pub fn rating(&self, user: i64, item: i64) -> Option<f64> {
        self.ratings.get(&user).and_then(|r| r.get(&item)).copied()
    }

    /// Whether the user has any rating history.
    #[must_use]
    pub fn contains_user(&self, user: i64) -> bool {
        self.ratings.contains_key(&user)
    }

    /// Iterates users and their rating maps in ascending user order.
    pub fn users(&self) -> impl Iterator<Item = (i64, &BTreeMap<i64, f64>)> {
        self.ratings.iter().map(|(&u, r)| (u, r))
    }

    /// Number of users with at least one recorded entry.
    #[must_use]
    pub fn n_users(&self) -> usize {
        self.ratings.len()
    }

    /// Number of distinct items across all users.
    #[must_use]
    pub fn n_items(&self) -> usize {
        let mut items: std::collections::BTreeSet<&i64> = std::collections::BTreeSet::new();
        for user_ratings in self.ratings.values() {
            items.extend(user_ratings.keys());
        }
        items.len()
    }

    /// Total number of stored ratings.
    #[must_use]
    pub fn n_ratings(&self) -> usize {
        self.ratings.values().map(BTreeMap::len).sum()
    }

    /// Whether the store holds no observations at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Mean of every stored rating value, 0.0 for an empty store.
    #[must_use]
    pub fn global_mean(&self) -> f64 {
        let count = self.n_ratings();
        if count == 0 {
            return 0.0;
        }
        let sum: f64 = self.ratings.values().flat_map(|r| r.values()).sum();
        sum / count as f64
    }

    /// Computes the arithmetic mean rating of every user in the store.
    ///
    /// A user with zero ratings gets an average of 0.0 rather than a
    /// division by zero. Pure function of the current store content;
    /// callers must re-derive after mutating the store.
    ///
    /// # Examples
    ///
    /// ```
    /// use recomendar::ratings::RatingStore;
    ///
    /// let store: RatingStore = [(1, 10, 2.0), (1, 20, 4.0)].into_iter().collect();
    /// assert_eq!(store.user_averages()[&1], 3.0);
    /// ```
    #[must_use]
    pub fn user_averages(&self) -> BTreeMap<i64, f64> {
        self.ratings
            .iter()
            .map(|(&user, user_ratings)| {
                let average = if user_ratings.is_empty() {
                    0.0
                } else {
                    user_ratings.values().sum::<f64>() / user_ratings.len() as f64
                };
                (user, average)
            })
            .collect()
    }
}

impl FromIterator<(i64, i64, f64)> for RatingStore {
    fn from_iter<I: IntoIterator<Item = (i64, i64, f64)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (user, item, value) in iter {
            store.record(user, item, value);
        }
        store
    }
}
