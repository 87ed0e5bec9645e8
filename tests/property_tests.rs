//! Property-based tests using proptest.
//!
//! These verify the bounds and degenerate-input behavior of the similarity
//! metrics and comparators over generated input.

use proptest::prelude::*;
use sugerir::dataset::{User, WatchedMovie};
use sugerir::similarity::{
    compare_users, euclidean_similarity, jaccard_similarity, manhattan_similarity, Metric,
};

const ALL_METRICS: [Metric; 5] = [
    Metric::Euclidean,
    Metric::Cosine,
    Metric::Pearson,
    Metric::Jaccard,
    Metric::Manhattan,
];

// Rating-like vectors: non-negative, bounded, never empty.
fn rating_vector(len: usize) -> impl Strategy<Value = Vec<f32>> {
    proptest::collection::vec(0.0f32..=5.0, len)
}

// A watch history over a small id space, so overlaps actually happen.
fn watch_history() -> impl Strategy<Value = Vec<WatchedMovie>> {
    proptest::collection::btree_map(0u32..20, 1.0f32..=5.0, 1..10).prop_map(|map| {
        map.into_iter()
            .map(|(movie, rating)| WatchedMovie::new(movie, rating))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn every_metric_is_bounded(a in rating_vector(8), b in rating_vector(8)) {
        for metric in ALL_METRICS {
            let sim = metric.score(&a, &b);
            prop_assert!((0.0..=1.0).contains(&sim), "{:?} gave {}", metric, sim);
            prop_assert!(!sim.is_nan());
        }
    }

    #[test]
    fn euclidean_and_manhattan_self_similarity_is_one(v in rating_vector(6)) {
        prop_assert_eq!(euclidean_similarity(&v, &v), 1.0);
        prop_assert_eq!(manhattan_similarity(&v, &v), 1.0);
    }

    #[test]
    fn pearson_self_similarity_is_zero(v in rating_vector(6)) {
        // |r| = 1 for varying input, undefined (→ 0) for constant input;
        // either way the inverted similarity is 0.
        let sim = Metric::Pearson.score(&v, &v);
        prop_assert!(sim.abs() < 1e-4, "got {}", sim);
    }

    #[test]
    fn jaccard_self_similarity_is_zero(v in proptest::collection::vec(0u32..10, 1..8)) {
        // Nothing is unique to A when A == B.
        prop_assert_eq!(jaccard_similarity(&v, &v), 0.0);
    }

    #[test]
    fn jaccard_is_bounded(
        a in proptest::collection::vec(0u32..10, 1..8),
        b in proptest::collection::vec(0u32..10, 0..8),
    ) {
        let sim = jaccard_similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&sim));
    }

    #[test]
    fn compare_users_is_bounded_for_every_metric(
        a in watch_history(),
        b in watch_history(),
    ) {
        let user_a = User::with_watched(1, a);
        let user_b = User::with_watched(2, b);
        for metric in ALL_METRICS {
            let sim = compare_users(&user_a, &user_b, metric);
            prop_assert!((0.0..=1.0).contains(&sim), "{:?} gave {}", metric, sim);
        }
    }

    #[test]
    fn identical_users_score_one_under_distance_metrics(history in watch_history()) {
        let a = User::with_watched(1, history.clone());
        let b = User::with_watched(2, history);
        prop_assert_eq!(compare_users(&a, &b, Metric::Euclidean), 1.0);
        prop_assert_eq!(compare_users(&a, &b, Metric::Manhattan), 1.0);
    }
}
