//! Ranking engine: candidate generation and bounded top-N selection.
//!
//! Three query families over the loaded collections:
//!
//! - [`similar_movies`] — rank the catalog against one target movie.
//! - [`similar_users`] — rank all users against one target user.
//! - [`recommend_movies`] — walk the target's nearest neighbours, harvest
//!   the well-rated movies the target has not seen, and rank them by mean
//!   similarity to the target's own history.
//!
//! [`custom_similar_users`] and [`custom_recommend_movies`] are a variant of
//! the last two with a fixed, non-pluggable rating-difference similarity.
//!
//! All functions are pure reads over `&[CatalogMovie]` / `&[User]`; results
//! are sorted by (score, rating) descending and truncated to the requested
//! length. Fewer candidates than requested is a normal outcome, not an
//! error.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::dataset::{CatalogMovie, MovieId, User, UserId};
use crate::similarity::{
    compare_movies_by_genre, compare_movies_by_viewers, compare_users, Metric,
};

/// Neighbour ratings below this never produce a recommendation, however
/// similar the neighbour is.
const RELEVANCE_FLOOR: f32 = 4.0;

/// Rating span of the 1–5 scale, the divisor of the custom formula.
const MAX_RATING_DIFF: f32 = 4.0;

/// How two movies are compared when scoring candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovieComparison {
    /// By genre tags (content-based).
    Genre,
    /// By co-viewership (who watched them).
    Viewers,
}

impl MovieComparison {
    fn compare(self, a: &CatalogMovie, b: &CatalogMovie, metric: Metric) -> f32 {
        match self {
            MovieComparison::Genre => compare_movies_by_genre(a, b, metric),
            MovieComparison::Viewers => compare_movies_by_viewers(a, b, metric),
        }
    }
}

/// One ranked movie recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Display title of the recommended movie.
    pub title: String,
    /// Similarity score in `[0, 1]`.
    pub score: f32,
    /// Catalog average rating, the tie-break key.
    pub rating: f32,
}

/// One ranked similar user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserMatch {
    /// The similar user.
    pub user: UserId,
    /// Similarity score in `[0, 1]`.
    pub score: f32,
}

/// The `n` catalog movies most similar to `target`.
///
/// Every catalog movie except the target is scored with the genre or
/// co-viewership comparator; the result is sorted by (score, rating)
/// descending, rating breaking score ties, and truncated to `n`.
///
/// Per-candidate scoring is read-only and runs in parallel; the collected
/// order matches catalog order, so the final stable sort is deterministic.
///
/// # Examples
///
/// ```
/// use sugerir::dataset::{CatalogMovie, Genre, GenreSet};
/// use sugerir::recommend::{similar_movies, MovieComparison};
/// use sugerir::similarity::Metric;
///
/// let catalog = vec![
///     CatalogMovie::new(1, "Heat", 1995, [Genre::Action].into_iter().collect::<GenreSet>()),
///     CatalogMovie::new(2, "Rush Hour", 1998,
///         [Genre::Action, Genre::Comedy].into_iter().collect::<GenreSet>()),
///     CatalogMovie::new(3, "Clerks", 1994, [Genre::Comedy].into_iter().collect::<GenreSet>()),
/// ];
///
/// let similar = similar_movies(&catalog[0], &catalog, 2, Metric::Euclidean, MovieComparison::Genre);
/// assert_eq!(similar.len(), 2);
/// assert_eq!(similar[0].title, "Rush Hour");
/// ```
#[must_use]
pub fn similar_movies(
    target: &CatalogMovie,
    catalog: &[CatalogMovie],
    n: usize,
    metric: Metric,
    comparison: MovieComparison,
) -> Vec<Recommendation> {
    let mut results: Vec<Recommendation> = catalog
        .par_iter()
        .filter(|movie| movie.id() != target.id())
        .map(|movie| Recommendation {
            title: movie.title().to_string(),
            score: comparison.compare(target, movie, metric),
            rating: movie.average_rating(),
        })
        .collect();

    sort_by_score_then_rating(&mut results);
    results.truncate(n);
    results
}

/// The `n` users most similar to `target`, by descending score.
///
/// Consults only watch histories, never the movie catalog.
#[must_use]
pub fn similar_users(target: &User, users: &[User], n: usize, metric: Metric) -> Vec<UserMatch> {
    let mut ranked = rank_users(target, users, |other| {
        compare_users(target, other, metric)
    });
    ranked.truncate(n);
    ranked
}

/// Recommend up to `n` unseen movies for `target`.
///
/// Neighbours are walked from most to least similar (by `metric` over
/// co-rated movies). Each neighbour contributes the movies the target has
/// not watched and the neighbour rated at least 4; each new candidate is
/// scored as the mean of its similarity against every movie in the target's
/// history. The neighbour walk stops once the pool reaches `n` candidates or
/// covers the whole catalog; the pool is then sorted by (score, rating)
/// descending and truncated.
///
/// A target with an empty watch history gets an empty list: there is nothing
/// to average against.
#[must_use]
pub fn recommend_movies(
    target: &User,
    users: &[User],
    catalog: &[CatalogMovie],
    n: usize,
    metric: Metric,
    comparison: MovieComparison,
) -> Vec<Recommendation> {
    let ranked = rank_users(target, users, |other| {
        compare_users(target, other, metric)
    });
    collect_recommendations(target, &ranked, users, catalog, n, |seen, candidate| {
        comparison.compare(seen, candidate, metric)
    })
}

/// The `n` users most similar to `target` under the fixed rating-difference
/// formula.
///
/// For each co-watched movie the contribution is
/// `1 - |r_target - r_neighbour| / 4`; the sum is divided by the length of
/// the target's *full* history, so movies the neighbour never watched dilute
/// the score. An empty target history scores everyone 0 and returns empty.
#[must_use]
pub fn custom_similar_users(target: &User, users: &[User], n: usize) -> Vec<UserMatch> {
    if target.watched().is_empty() {
        return Vec::new();
    }
    let mut ranked = rank_users(target, users, |other| rating_diff_similarity(target, other));
    ranked.truncate(n);
    ranked
}

/// Recommend up to `n` unseen movies for `target` using the fixed
/// rating-difference user similarity.
///
/// Candidate generation and ranking mirror [`recommend_movies`], with the
/// movie comparator fixed to co-viewership under the Pearson metric.
#[must_use]
pub fn custom_recommend_movies(
    target: &User,
    users: &[User],
    catalog: &[CatalogMovie],
    n: usize,
) -> Vec<Recommendation> {
    if target.watched().is_empty() {
        return Vec::new();
    }
    let ranked = rank_users(target, users, |other| rating_diff_similarity(target, other));
    collect_recommendations(target, &ranked, users, catalog, n, |seen, candidate| {
        compare_movies_by_viewers(seen, candidate, Metric::Pearson)
    })
}

/// Rating-difference similarity, averaged over the target's full history.
fn rating_diff_similarity(target: &User, other: &User) -> f32 {
    if target.watched().is_empty() {
        return 0.0;
    }

    let target_ratings: HashMap<MovieId, f32> = target
        .watched()
        .iter()
        .map(|w| (w.movie, w.rating))
        .collect();

    let mut score = 0.0;
    for entry in other.watched() {
        if let Some(&target_rating) = target_ratings.get(&entry.movie) {
            score += 1.0 - (target_rating - entry.rating).abs() / MAX_RATING_DIFF;
        }
    }
    score / target.watched().len() as f32
}

/// Score every user except the target and sort descending.
fn rank_users<F>(target: &User, users: &[User], score: F) -> Vec<UserMatch>
where
    F: Fn(&User) -> f32,
{
    let mut ranked: Vec<UserMatch> = users
        .iter()
        .filter(|user| user.id() != target.id())
        .map(|user| UserMatch {
            user: user.id(),
            score: score(user),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

/// Shared candidate walk of the two recommenders.
///
/// `score_pair(seen, candidate)` compares one movie of the target's history
/// against a candidate; the candidate's final score is the mean over the
/// whole history.
fn collect_recommendations<F>(
    target: &User,
    ranked_users: &[UserMatch],
    users: &[User],
    catalog: &[CatalogMovie],
    n: usize,
    score_pair: F,
) -> Vec<Recommendation>
where
    F: Fn(&CatalogMovie, &CatalogMovie) -> f32,
{
    if target.watched().is_empty() {
        return Vec::new();
    }

    let movie_index: HashMap<MovieId, &CatalogMovie> =
        catalog.iter().map(|movie| (movie.id(), movie)).collect();
    let user_index: HashMap<UserId, &User> =
        users.iter().map(|user| (user.id(), user)).collect();
    let seen: HashSet<MovieId> = target.watched().iter().map(|w| w.movie).collect();

    // History entries resolved to catalog records once, up front.
    let history: Vec<&CatalogMovie> = target
        .watched()
        .iter()
        .filter_map(|w| movie_index.get(&w.movie).copied())
        .collect();

    let mut picked_titles: HashSet<String> = HashSet::new();
    let mut pool: Vec<Recommendation> = Vec::new();

    for neighbour in ranked_users {
        let Some(user) = user_index.get(&neighbour.user) else {
            continue;
        };

        for entry in user.watched() {
            if seen.contains(&entry.movie) || entry.rating < RELEVANCE_FLOOR {
                continue;
            }
            let Some(candidate) = movie_index.get(&entry.movie).copied() else {
                continue;
            };
            if picked_titles.contains(candidate.title()) {
                continue;
            }

            let total: f32 = history
                .iter()
                .copied()
                .map(|seen_movie| score_pair(seen_movie, candidate))
                .sum();
            let score = total / target.watched().len() as f32;

            picked_titles.insert(candidate.title().to_string());
            pool.push(Recommendation {
                title: candidate.title().to_string(),
                score,
                rating: candidate.average_rating(),
            });
        }

        if pool.len() >= n || pool.len() == catalog.len() {
            break;
        }
    }

    sort_by_score_then_rating(&mut pool);
    pool.truncate(n);
    pool
}

fn sort_by_score_then_rating(results: &mut [Recommendation]) {
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(
                b.rating
                    .partial_cmp(&a.rating)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
    });
}
