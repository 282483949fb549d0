//! Mean-centered cosine similarity between users.
//!
//! Centering each user's ratings on their own mean removes the bias of
//! users who rate systematically high or low before the cosine is taken,
//! so two users who rank items the same way score as similar even when
//! their absolute scales differ.

use std::collections::BTreeMap;

/// Computes the mean-centered cosine similarity between two users.
///
/// The dot product runs over the items both users rated; each norm runs
/// over **all** of that user's rated items, centered on that user's own
/// average. A zero norm on either side (a user whose ratings never deviate
/// from their mean, or who rated nothing) yields 0.0: the cosine direction
/// is undefined, which counts as no similarity rather than an error.
/// Disjoint rating sets simply contribute a zero dot product.
///
/// The result lies in `[-1, 1]` up to floating round-off; no clamping is
/// applied, so values a few ulps outside that range are possible and
/// callers should tolerate them.
///
/// # Examples
///
/// ```
/// use recomendar::similarity::mean_centered_cosine;
/// use std::collections::BTreeMap;
///
/// let a: BTreeMap<i64, f64> = [(10, 5.0), (20, 3.0)].into_iter().collect();
/// let b: BTreeMap<i64, f64> = [(10, 1.0), (20, 3.0)].into_iter().collect();
///
/// // a and b deviate from their means in opposite directions on both items.
/// let sim = mean_centered_cosine(&a, &b, 4.0, 2.0);
/// assert!((sim - -1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn mean_centered_cosine(
    ratings_a: &BTreeMap<i64, f64>,
    ratings_b: &BTreeMap<i64, f64>,
    avg_a: f64,
    avg_b: f64,
) -> f64 {
    let mut dot_product = 0.0;
    for (item, &value_a) in ratings_a {
        if let Some(&value_b) = ratings_b.get(item) {
            dot_product += (value_a - avg_a) * (value_b - avg_b);
        }
    }

    let norm_a: f64 = ratings_a.values().map(|v| (v - avg_a).powi(2)).sum();
    let norm_b: f64 = ratings_b.values().map(|v| (v - avg_b).powi(2)).sum();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a.sqrt() * norm_b.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(i64, f64)]) -> BTreeMap<i64, f64> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_opposite_raters_score_minus_one() {
        let a = map(&[(10, 5.0), (20, 3.0)]);
        let b = map(&[(10, 1.0), (20, 3.0)]);
        let sim = mean_centered_cosine(&a, &b, 4.0, 2.0);
        assert!((sim - -1.0).abs() < 1e-12);
    }

    #[test]
    fn test_identical_vectors_score_one() {
        let a = map(&[(1, 1.0), (2, 5.0), (3, 3.0)]);
        let sim = mean_centered_cosine(&a, &a, 3.0, 3.0);
        assert!((sim - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let a = map(&[(1, 5.0), (2, 1.0)]);
        let b = map(&[(3, 4.0), (4, 2.0)]);
        let sim = mean_centered_cosine(&a, &b, 3.0, 3.0);
        assert_eq!(sim, 0.0);
    }

    #[test]
    fn test_zero_norm_scores_zero() {
        // b never deviates from its mean, so its direction is undefined.
        let a = map(&[(1, 5.0), (2, 1.0)]);
        let b = map(&[(1, 3.0), (2, 3.0)]);
        assert_eq!(mean_centered_cosine(&a, &b, 3.0, 3.0), 0.0);
        assert_eq!(mean_centered_cosine(&b, &a, 3.0, 3.0), 0.0);
    }

    #[test]
    fn test_empty_vector_scores_zero() {
        let a = map(&[]);
        let b = map(&[(1, 4.0), (2, 2.0)]);
        assert_eq!(mean_centered_cosine(&a, &b, 0.0, 3.0), 0.0);
    }

    #[test]
    fn test_norms_use_full_vectors_not_just_overlap() {
        // a rates an extra item the overlap never sees. Restricting the
        // norm to common items would give |sim| = 1; the full-vector norm
        // dilutes it.
        let a = map(&[(1, 5.0), (2, 1.0), (3, 4.0)]);
        let b = map(&[(1, 4.0), (2, 2.0)]);
        let avg_a = 10.0 / 3.0;
        let avg_b = 3.0;

        let dot = (5.0 - avg_a) * (4.0 - avg_b) + (1.0 - avg_a) * (2.0 - avg_b);
        let norm_a = (5.0f64 - avg_a).powi(2) + (1.0 - avg_a).powi(2) + (4.0 - avg_a).powi(2);
        let norm_b = (4.0f64 - 3.0).powi(2) + (2.0f64 - 3.0).powi(2);
        let expected = dot / (norm_a.sqrt() * norm_b.sqrt());

        let sim = mean_centered_cosine(&a, &b, avg_a, avg_b);
        assert!((sim - expected).abs() < 1e-12);
        assert!(sim.abs() < 1.0);
    }

    #[test]
    fn test_result_within_unit_range() {
        let a = map(&[(1, 4.5), (2, 2.0), (3, 3.5), (4, 1.0)]);
        let b = map(&[(2, 5.0), (3, 1.5), (4, 4.0), (5, 2.5)]);
        let avg_a = 11.0 / 4.0;
        let avg_b = 13.0 / 4.0;
        let sim = mean_centered_cosine(&a, &b, avg_a, avg_b);
        assert!(sim >= -1.0 - 1e-9 && sim <= 1.0 + 1e-9);
    }
}
