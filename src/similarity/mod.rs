//! Similarity metrics over numeric vectors and label sets.
//!
//! Every metric returns a bounded similarity in `[0, 1]`; higher means more
//! similar. A score of 0 doubles as the "undefined comparison" value: zero
//! vectors under cosine, zero-variance input under Pearson, and so on are
//! common, valid outcomes — not errors.
//!
//! Two of the formulas are deliberately unusual and are kept exactly as the
//! system has always computed them:
//!
//! - [`pearson_similarity`] is `1 - |r|`, so strong correlation of *either*
//!   sign maps toward low similarity.
//! - [`jaccard_similarity`] is the asymmetric `|A − B| / |A ∪ B|`, not the
//!   textbook intersection-over-union.
//!
//! # Quick Start
//!
//! ```
//! use sugerir::similarity::{Metric, euclidean_similarity};
//!
//! let a = [1.0, 0.0, 1.0];
//! let b = [1.0, 1.0, 0.0];
//!
//! let sim = euclidean_similarity(&a, &b);
//! assert!(sim > 0.0 && sim < 1.0);
//! assert_eq!(Metric::Euclidean.score(&a, &a), 1.0);
//! ```

pub mod compare;

pub use compare::{compare_movies_by_genre, compare_movies_by_viewers, compare_users};

use serde::{Deserialize, Serialize};

/// The available similarity metrics.
///
/// A closed enum dispatched by exhaustive `match`, so a new metric cannot be
/// added without the compiler pointing at every dispatch site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// `1 / (1 + euclidean distance)`
    Euclidean,
    /// `dot / (‖a‖·‖b‖)`; 0 for zero vectors
    Cosine,
    /// `1 - |pearson r|`; 0 for zero-variance input
    Pearson,
    /// Asymmetric set overlap `|A − B| / |A ∪ B|`
    Jaccard,
    /// `1 / (1 + cityblock distance)`
    Manhattan,
}

impl Metric {
    /// Apply this metric to two aligned numeric vectors.
    ///
    /// For [`Metric::Jaccard`] the values themselves are treated as labels
    /// and fed through the set formula; that is how user rating vectors have
    /// always been compared under Jaccard.
    ///
    /// # Panics
    ///
    /// Panics if the slices differ in length or are empty; callers are
    /// expected to have handled the no-overlap case already.
    #[must_use]
    pub fn score(self, a: &[f32], b: &[f32]) -> f32 {
        match self {
            Metric::Euclidean => euclidean_similarity(a, b),
            Metric::Cosine => cosine_similarity(a, b),
            Metric::Pearson => pearson_similarity(a, b),
            Metric::Jaccard => jaccard_similarity(a, b),
            Metric::Manhattan => manhattan_similarity(a, b),
        }
    }
}

fn assert_aligned(a: &[f32], b: &[f32]) {
    assert_eq!(a.len(), b.len(), "Vectors must have same length");
    assert!(!a.is_empty(), "Vectors cannot be empty");
}

/// Euclidean similarity: `1 / (1 + euclidean_distance(a, b))`.
///
/// Identical vectors have distance 0 and similarity 1; similarity falls off
/// toward 0 as the vectors move apart. Never undefined.
///
/// # Examples
///
/// ```
/// use sugerir::similarity::euclidean_similarity;
///
/// assert_eq!(euclidean_similarity(&[1.0, 2.0], &[1.0, 2.0]), 1.0);
/// assert_eq!(euclidean_similarity(&[0.0, 0.0], &[3.0, 4.0]), 1.0 / 6.0);
/// ```
///
/// # Panics
///
/// Panics if the slices differ in length or are empty.
#[must_use]
pub fn euclidean_similarity(a: &[f32], b: &[f32]) -> f32 {
    assert_aligned(a, b);
    let dist: f32 = a
        .iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f32>()
        .sqrt();
    1.0 / (1.0 + dist)
}

/// Cosine similarity: `dot(a, b) / (‖a‖ · ‖b‖)`.
///
/// Equivalent to `1 - cosine_distance`. If either vector is all-zero the
/// cosine is undefined and the result is defined as 0.
///
/// # Examples
///
/// ```
/// use sugerir::similarity::cosine_similarity;
///
/// let sim = cosine_similarity(&[1.0, 1.0], &[2.0, 2.0]);
/// assert!((sim - 1.0).abs() < 1e-6);
///
/// assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
/// ```
///
/// # Panics
///
/// Panics if the slices differ in length or are empty.
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    assert_aligned(a, b);

    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    // Rounding can push the ratio a hair past 1.0; keep the score bounded.
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Pearson similarity: `1 - |pearson_correlation(a, b)|`.
///
/// Note the inversion: perfectly correlated input — positive *or* negative —
/// scores 0, while uncorrelated input scores 1. This is a long-standing
/// intentional choice of the scoring scheme, not a bug; keep it. Undefined
/// correlation (zero-variance input) scores 0.
///
/// # Examples
///
/// ```
/// use sugerir::similarity::pearson_similarity;
///
/// // Perfect positive correlation → similarity 0.
/// let sim = pearson_similarity(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);
/// assert!(sim.abs() < 1e-6);
///
/// // Zero variance → undefined correlation → 0.
/// assert_eq!(pearson_similarity(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]), 0.0);
/// ```
///
/// # Panics
///
/// Panics if the slices differ in length or are empty.
#[must_use]
pub fn pearson_similarity(a: &[f32], b: &[f32]) -> f32 {
    assert_aligned(a, b);

    let n = a.len() as f32;
    let mean_a: f32 = a.iter().sum::<f32>() / n;
    let mean_b: f32 = b.iter().sum::<f32>() / n;

    let cov: f32 = a
        .iter()
        .zip(b)
        .map(|(x, y)| (x - mean_a) * (y - mean_b))
        .sum();
    let var_a: f32 = a.iter().map(|x| (x - mean_a).powi(2)).sum();
    let var_b: f32 = b.iter().map(|y| (y - mean_b).powi(2)).sum();

    let denom = (var_a * var_b).sqrt();
    if denom == 0.0 {
        return 0.0;
    }

    let r = cov / denom;
    (1.0 - r.abs()).max(0.0)
}

/// Asymmetric Jaccard similarity: `|A − B| / |A ∪ B|`.
///
/// `A − B` keeps the distinct values of `a` that never appear in `b`; the
/// union is deduplicated. Unlike the textbook intersection-over-union this
/// is *not* symmetric — swapping the arguments generally changes the result
/// — and identical sets score 0, not 1. The scheme has always used this
/// variant; reproduce, don't correct.
///
/// # Examples
///
/// ```
/// use sugerir::similarity::jaccard_similarity;
///
/// // |{1}| / |{1,2,3,4}| = 0.25
/// let sim = jaccard_similarity(&[1, 2, 3], &[2, 3, 4]);
/// assert!((sim - 0.25).abs() < 1e-6);
///
/// // Asymmetric: the unique side changes with the argument order.
/// assert!((jaccard_similarity(&[1, 2, 3, 5], &[2, 3, 4]) - 0.4).abs() < 1e-6);
/// assert!((jaccard_similarity(&[2, 3, 4], &[1, 2, 3, 5]) - 0.2).abs() < 1e-6);
/// ```
///
/// # Panics
///
/// Panics if both inputs are empty (the union would be empty).
#[must_use]
pub fn jaccard_similarity<T: PartialEq>(a: &[T], b: &[T]) -> f32 {
    assert!(
        !(a.is_empty() && b.is_empty()),
        "Jaccard union cannot be empty"
    );

    // Label lists here are small (genres, ratings, viewer ids), so linear
    // dedup beats hashing and keeps T at PartialEq.
    let mut union: Vec<&T> = Vec::new();
    for value in a.iter().chain(b) {
        if !union.contains(&value) {
            union.push(value);
        }
    }

    let mut unique_to_a = 0usize;
    for &value in &union {
        if a.contains(value) && !b.contains(value) {
            unique_to_a += 1;
        }
    }

    unique_to_a as f32 / union.len() as f32
}

/// Manhattan similarity: `1 / (1 + cityblock_distance(a, b))`.
///
/// # Examples
///
/// ```
/// use sugerir::similarity::manhattan_similarity;
///
/// assert_eq!(manhattan_similarity(&[1.0, 2.0], &[1.0, 2.0]), 1.0);
/// assert_eq!(manhattan_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.25);
/// ```
///
/// # Panics
///
/// Panics if the slices differ in length or are empty.
#[must_use]
pub fn manhattan_similarity(a: &[f32], b: &[f32]) -> f32 {
    assert_aligned(a, b);
    let dist: f32 = a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum();
    1.0 / (1.0 + dist)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_METRICS: [Metric; 5] = [
        Metric::Euclidean,
        Metric::Cosine,
        Metric::Pearson,
        Metric::Jaccard,
        Metric::Manhattan,
    ];

    #[test]
    fn test_identical_vectors_per_metric() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(Metric::Euclidean.score(&v, &v), 1.0);
        assert_eq!(Metric::Manhattan.score(&v, &v), 1.0);
        assert!((Metric::Cosine.score(&v, &v) - 1.0).abs() < 1e-6);
        // The Pearson inversion: |r| = 1 → similarity 0.
        assert!(Metric::Pearson.score(&v, &v).abs() < 1e-6);
        // Asymmetric Jaccard: identical sets share everything, nothing is
        // unique to the first operand.
        assert_eq!(Metric::Jaccard.score(&v, &v), 0.0);
    }

    #[test]
    fn test_all_metrics_bounded() {
        let a = [1.0, 0.0, 3.0, 2.0];
        let b = [4.0, 1.0, 0.0, 2.0];
        for metric in ALL_METRICS {
            let sim = metric.score(&a, &b);
            assert!((0.0..=1.0).contains(&sim), "{metric:?} gave {sim}");
        }
    }

    #[test]
    fn test_euclidean_known_value() {
        // Distance 5 → 1/6.
        let sim = euclidean_similarity(&[0.0, 0.0], &[3.0, 4.0]);
        assert!((sim - 1.0 / 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_zero_vector_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0, 0.0], &[1.0, 2.0, 3.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_cosine_orthogonal_is_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn test_pearson_negative_correlation_also_low() {
        // Perfect negative correlation: |r| = 1 → similarity 0.
        let sim = pearson_similarity(&[1.0, 2.0, 3.0], &[6.0, 4.0, 2.0]);
        assert!(sim.abs() < 1e-6);
    }

    #[test]
    fn test_pearson_zero_variance_is_zero() {
        assert_eq!(pearson_similarity(&[2.0, 2.0, 2.0], &[1.0, 5.0, 3.0]), 0.0);
        assert_eq!(pearson_similarity(&[1.0, 5.0, 3.0], &[2.0, 2.0, 2.0]), 0.0);
    }

    #[test]
    fn test_jaccard_reference_value() {
        let sim = jaccard_similarity(&[1, 2, 3], &[2, 3, 4]);
        assert!((sim - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_jaccard_is_asymmetric() {
        let a = [1, 2, 3, 5];
        let b = [2, 3, 4];
        // unique-to-a = {1, 5}, union = {1,2,3,5,4} → 0.4
        assert!((jaccard_similarity(&a, &b) - 0.4).abs() < 1e-6);
        // unique-to-b = {4}, same union → 0.2
        assert!((jaccard_similarity(&b, &a) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_jaccard_deduplicates_multisets() {
        // Duplicates collapse: {1,1,2} vs {2} → unique {1} / union {1,2}.
        let sim = jaccard_similarity(&[1, 1, 2], &[2]);
        assert!((sim - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_jaccard_one_empty_side() {
        assert_eq!(jaccard_similarity::<i32>(&[], &[1, 2]), 0.0);
        assert_eq!(jaccard_similarity(&[1, 2], &[]), 1.0);
    }

    #[test]
    fn test_manhattan_known_value() {
        let sim = manhattan_similarity(&[1.0, 1.0], &[2.0, 3.0]);
        assert!((sim - 0.25).abs() < 1e-6);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_mismatched_lengths_panic() {
        euclidean_similarity(&[1.0], &[1.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "empty")]
    fn test_empty_input_panics() {
        cosine_similarity(&[], &[]);
    }

    #[test]
    #[should_panic(expected = "union cannot be empty")]
    fn test_jaccard_both_empty_panics() {
        jaccard_similarity::<i32>(&[], &[]);
    }
}
