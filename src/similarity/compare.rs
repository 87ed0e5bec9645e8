//! Pairwise comparators: reduce two entities to aligned vectors or label
//! sets and delegate to a [`Metric`](crate::similarity::Metric).
//!
//! Each comparator owns the "what do we actually compare" decision:
//!
//! - two users → their ratings over the commonly watched movies,
//! - two movies → their genre vectors (or genre-name sets under Jaccard),
//! - two movies → binary watched/not-watched vectors over the union of
//!   their viewers (or the raw viewer-id sets under Jaccard).
//!
//! "No overlap at all" is decided *here*, before any metric runs, and always
//! scores 0.

use std::collections::{HashMap, HashSet};

use crate::dataset::{CatalogMovie, MovieId, User, UserId};
use crate::similarity::{jaccard_similarity, Metric};

/// Compare two users by the ratings they gave the movies both have watched.
///
/// Builds two aligned rating vectors over exactly the intersection of the
/// watch histories (ordered by `a`'s history) and delegates to `metric`.
/// Users with no commonly watched movie score 0 without invoking the metric.
///
/// # Examples
///
/// ```
/// use sugerir::dataset::{User, WatchedMovie};
/// use sugerir::similarity::{compare_users, Metric};
///
/// let a = User::with_watched(1, vec![WatchedMovie::new(1, 5.0), WatchedMovie::new(2, 3.0)]);
/// let b = User::with_watched(2, vec![WatchedMovie::new(2, 3.0), WatchedMovie::new(9, 1.0)]);
///
/// // One co-rated movie with identical ratings.
/// assert_eq!(compare_users(&a, &b, Metric::Euclidean), 1.0);
/// ```
#[must_use]
pub fn compare_users(a: &User, b: &User, metric: Metric) -> f32 {
    let ratings_b: HashMap<MovieId, f32> = b
        .watched()
        .iter()
        .map(|w| (w.movie, w.rating))
        .collect();

    let mut common_a = Vec::new();
    let mut common_b = Vec::new();
    for entry in a.watched() {
        if let Some(&rating_b) = ratings_b.get(&entry.movie) {
            common_a.push(entry.rating);
            common_b.push(rating_b);
        }
    }

    if common_a.is_empty() {
        return 0.0;
    }
    metric.score(&common_a, &common_b)
}

/// Compare two movies by their genre tags.
///
/// The numeric metrics run on the dense 0/1 genre vectors; Jaccard runs on
/// the derived genre-*name* sets instead. Two movies with no genre tags at
/// all score 0 under Jaccard (empty union).
#[must_use]
pub fn compare_movies_by_genre(a: &CatalogMovie, b: &CatalogMovie, metric: Metric) -> f32 {
    if metric == Metric::Jaccard {
        let names_a = a.genres().names();
        let names_b = b.genres().names();
        if names_a.is_empty() && names_b.is_empty() {
            return 0.0;
        }
        return jaccard_similarity(&names_a, &names_b);
    }

    metric.score(&a.genres().to_dense(), &b.genres().to_dense())
}

/// Compare two movies by who watched them (co-viewership).
///
/// For the numeric metrics this builds the *minimal* aligned vectors: one
/// position per distinct viewer of either movie — not one per user in the
/// dataset — flagged 1/0 per movie. Jaccard skips vector construction and
/// runs on the raw viewer-id sets. Two movies nobody watched score 0.
#[must_use]
pub fn compare_movies_by_viewers(a: &CatalogMovie, b: &CatalogMovie, metric: Metric) -> f32 {
    let viewers_a: Vec<UserId> = a.viewers().iter().map(|&(user, _)| user).collect();
    let viewers_b: Vec<UserId> = b.viewers().iter().map(|&(user, _)| user).collect();

    if viewers_a.is_empty() && viewers_b.is_empty() {
        return 0.0;
    }

    if metric == Metric::Jaccard {
        return jaccard_similarity(&viewers_a, &viewers_b);
    }

    let (flags_a, flags_b) = aligned_viewer_vectors(&viewers_a, &viewers_b);
    metric.score(&flags_a, &flags_b)
}

/// Binary watched/not-watched vectors over the union of two viewer lists.
///
/// Both vectors have length |viewers(a) ∪ viewers(b)|: first every viewer of
/// the first movie, then the viewers only the second movie has.
fn aligned_viewer_vectors(viewers_a: &[UserId], viewers_b: &[UserId]) -> (Vec<f32>, Vec<f32>) {
    let set_a: HashSet<UserId> = viewers_a.iter().copied().collect();
    let set_b: HashSet<UserId> = viewers_b.iter().copied().collect();

    let mut flags_a = Vec::new();
    let mut flags_b = Vec::new();

    for user in viewers_a {
        flags_a.push(1.0);
        flags_b.push(if set_b.contains(user) { 1.0 } else { 0.0 });
    }
    for user in viewers_b {
        if !set_a.contains(user) {
            flags_a.push(0.0);
            flags_b.push(1.0);
        }
    }

    (flags_a, flags_b)
}
