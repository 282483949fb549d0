//! Top-k neighbor selection.
//!
//! Given a target user and item, ranks every other user who rated the item
//! by mean-centered cosine similarity to the target and keeps the `k` best.
//! Selection runs through a size-bounded heap, so a query does O(U) similarity
//! evaluations but only O(U log k) ordering work instead of the O(U log U)
//! of a full sort when `k` is much smaller than the user count.

use crate::ratings::RatingStore;
use crate::similarity::mean_centered_cosine;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

/// One selected neighbor: a user and their similarity to the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Neighbor user id.
    pub user: i64,
    /// Mean-centered cosine similarity to the target user.
    pub similarity: f64,
}

impl Neighbor {
    /// Ranking order: higher similarity first, ties by ascending user id.
    ///
    /// The user-id tie-break keeps the selected set and its order
    /// deterministic for a fixed input.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .similarity
            .total_cmp(&self.similarity)
            .then_with(|| self.user.cmp(&other.user))
    }
}

/// Heap entry ordered so the worst-ranked neighbor is the maximum, which
/// lets `BinaryHeap::pop` evict it once the heap exceeds `k`.
#[derive(Debug, PartialEq)]
struct HeapEntry(Neighbor);

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.rank_cmp(&other.0)
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Selects up to `k` users most similar to `user` among those who rated
/// `item`.
///
/// The target user is never a candidate. Users without a rating for `item`
/// are skipped. The result is sorted by descending similarity with ties
/// broken by ascending user id; it holds fewer than `k` entries when fewer
/// users qualify, and is empty when none do (or when `k` is 0).
///
/// # Examples
///
/// ```
/// use recomendar::neighbors::top_k;
/// use recomendar::ratings::RatingStore;
///
/// let store: RatingStore = [
///     (1, 10, 5.0),
///     (1, 20, 3.0),
///     (2, 10, 1.0),
///     (2, 20, 3.0),
///     (3, 20, 4.0),
/// ]
/// .into_iter()
/// .collect();
/// let averages = store.user_averages();
///
/// let neighbors = top_k(&store, &averages, 1, 20, 10);
/// assert_eq!(neighbors.len(), 2);
/// assert!(neighbors.iter().all(|n| n.user != 1));
/// ```
#[must_use]
pub fn top_k(
    store: &RatingStore,
    averages: &BTreeMap<i64, f64>,
    user: i64,
    item: i64,
    k: usize,
) -> Vec<Neighbor> {
    if k == 0 {
        return Vec::new();
    }

    let empty = BTreeMap::new();
    let target_ratings = store.ratings_for(user).unwrap_or(&empty);
    let target_average = averages.get(&user).copied().unwrap_or(0.0);

    let mut heap: BinaryHeap<HeapEntry> = BinaryHeap::new();
    for (other, other_ratings) in store.users() {
        if other == user || !other_ratings.contains_key(&item) {
            continue;
        }
        let other_average = averages.get(&other).copied().unwrap_or(0.0);
        let similarity =
            mean_centered_cosine(target_ratings, other_ratings, target_average, other_average);
        heap.push(HeapEntry(Neighbor {
            user: other,
            similarity,
        }));
        if heap.len() > k {
            heap.pop();
        }
    }

    let mut neighbors: Vec<Neighbor> = heap.into_iter().map(|entry| entry.0).collect();
    neighbors.sort_by(Neighbor::rank_cmp);
    neighbors
}
