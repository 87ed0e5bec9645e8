//! Entity types and load-phase bulk operations.
//!
//! A ratings dataset is two collections: a catalog of [`CatalogMovie`]
//! records and a set of [`User`] records carrying ordered watch histories.
//! The original file format overloaded a single movie type (and a single
//! rating field) for both roles; here the roles are split. A catalog record
//! carries the community average rating, a [`WatchedMovie`] entry carries one
//! user's own rating and refers to the catalog by id, so mutating one can
//! never alias the other.
//!
//! The ranking engine treats both collections as immutable. The only
//! mutation happens once, during the load phase: [`attach_viewers`]
//! populates every catalog movie's viewer list from the users' histories and
//! recomputes the average ratings.

mod genres;
pub mod movielens;

pub use genres::{Genre, GenreSet, GENRE_COUNT};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Movie identifier, unique and stable within a dataset.
pub type MovieId = u32;

/// User identifier, unique within a dataset.
pub type UserId = u32;

/// A movie as it appears in the catalog.
///
/// # Examples
///
/// ```
/// use sugerir::dataset::{CatalogMovie, Genre, GenreSet};
///
/// let movie = CatalogMovie::new(
///     1,
///     "The Shawshank Redemption",
///     1994,
///     [Genre::Drama].into_iter().collect::<GenreSet>(),
/// );
/// assert_eq!(movie.title(), "The Shawshank Redemption");
/// assert_eq!(movie.average_rating(), 0.0); // no viewers yet
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMovie {
    id: MovieId,
    title: String,
    year: u16,
    genres: GenreSet,
    /// Mean of all viewer ratings; 0.0 while the viewer list is empty.
    average_rating: f32,
    /// Who watched this movie, with the rating each viewer gave it.
    viewers: Vec<(UserId, f32)>,
}

impl CatalogMovie {
    /// Create a catalog record with no viewers yet.
    pub fn new(id: MovieId, title: impl Into<String>, year: u16, genres: GenreSet) -> Self {
        Self {
            id,
            title: title.into(),
            year,
            genres,
            average_rating: 0.0,
            viewers: Vec::new(),
        }
    }

    /// Movie identifier.
    #[must_use]
    pub fn id(&self) -> MovieId {
        self.id
    }

    /// Display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Release year.
    #[must_use]
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Genre tags.
    #[must_use]
    pub fn genres(&self) -> GenreSet {
        self.genres
    }

    /// Community average rating; 0.0 when nobody has rated the movie.
    #[must_use]
    pub fn average_rating(&self) -> f32 {
        self.average_rating
    }

    /// `(user, rating)` pairs for everyone who watched this movie.
    #[must_use]
    pub fn viewers(&self) -> &[(UserId, f32)] {
        &self.viewers
    }

    /// Record that `user` watched this movie and gave it `rating`.
    pub fn add_viewer(&mut self, user: UserId, rating: f32) {
        self.viewers.push((user, rating));
    }

    /// Recompute the average rating from the viewer list (0.0 if empty).
    pub fn recompute_average_rating(&mut self) {
        if self.viewers.is_empty() {
            self.average_rating = 0.0;
        } else {
            let sum: f32 = self.viewers.iter().map(|&(_, r)| r).sum();
            self.average_rating = sum / self.viewers.len() as f32;
        }
    }
}

/// One entry of a user's watch history: a catalog reference plus the rating
/// this user gave the movie (not the catalog average).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WatchedMovie {
    /// Id of the catalog movie this entry refers to.
    pub movie: MovieId,
    /// This user's own rating, on the dataset's 1–5 scale.
    pub rating: f32,
}

impl WatchedMovie {
    /// Create a watch-history entry.
    #[must_use]
    pub fn new(movie: MovieId, rating: f32) -> Self {
        Self { movie, rating }
    }
}

/// A user and their ordered watch history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    watched: Vec<WatchedMovie>,
}

impl User {
    /// Create a user with an empty watch history.
    #[must_use]
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            watched: Vec::new(),
        }
    }

    /// Create a user with a ready-made watch history.
    #[must_use]
    pub fn with_watched(id: UserId, watched: Vec<WatchedMovie>) -> Self {
        Self { id, watched }
    }

    /// User identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// The watch history, in viewing order.
    #[must_use]
    pub fn watched(&self) -> &[WatchedMovie] {
        &self.watched
    }

    /// Append a movie to the watch history.
    pub fn add_watched(&mut self, movie: MovieId, rating: f32) {
        self.watched.push(WatchedMovie::new(movie, rating));
    }

    /// Keep only the history entries satisfying the predicate, preserving
    /// viewing order.
    pub fn retain_watched<F>(&mut self, f: F)
    where
        F: FnMut(&WatchedMovie) -> bool,
    {
        self.watched.retain(f);
    }

    /// This user's rating for `movie`, if they watched it.
    #[must_use]
    pub fn rating_for(&self, movie: MovieId) -> Option<f32> {
        self.watched
            .iter()
            .find(|w| w.movie == movie)
            .map(|w| w.rating)
    }

    /// Whether `movie` is in the watch history.
    #[must_use]
    pub fn has_watched(&self, movie: MovieId) -> bool {
        self.watched.iter().any(|w| w.movie == movie)
    }
}

/// Populate every catalog movie's viewer list from the users' watch
/// histories, then recompute the average ratings.
///
/// This is the inverse-index build of the load phase. Watch-history entries
/// referring to movies absent from the catalog are ignored.
///
/// # Examples
///
/// ```
/// use sugerir::dataset::{attach_viewers, CatalogMovie, GenreSet, User, WatchedMovie};
///
/// let mut catalog = vec![CatalogMovie::new(1, "Heat", 1995, GenreSet::new())];
/// let users = vec![
///     User::with_watched(10, vec![WatchedMovie::new(1, 5.0)]),
///     User::with_watched(11, vec![WatchedMovie::new(1, 3.0)]),
/// ];
///
/// attach_viewers(&mut catalog, &users);
/// assert_eq!(catalog[0].viewers().len(), 2);
/// assert_eq!(catalog[0].average_rating(), 4.0);
/// ```
pub fn attach_viewers(catalog: &mut [CatalogMovie], users: &[User]) {
    let index: HashMap<MovieId, usize> = catalog
        .iter()
        .enumerate()
        .map(|(pos, movie)| (movie.id(), pos))
        .collect();

    for user in users {
        for entry in user.watched() {
            if let Some(&pos) = index.get(&entry.movie) {
                catalog[pos].add_viewer(user.id(), entry.rating);
            }
        }
    }

    for movie in catalog.iter_mut() {
        movie.recompute_average_rating();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: MovieId) -> CatalogMovie {
        CatalogMovie::new(id, format!("Movie {id}"), 1995, GenreSet::new())
    }

    #[test]
    fn test_attach_viewers_builds_inverse_index() {
        let mut catalog = vec![movie(1), movie(2)];
        let users = vec![
            User::with_watched(
                10,
                vec![WatchedMovie::new(1, 4.0), WatchedMovie::new(2, 2.0)],
            ),
            User::with_watched(11, vec![WatchedMovie::new(1, 5.0)]),
        ];

        attach_viewers(&mut catalog, &users);

        assert_eq!(catalog[0].viewers(), &[(10, 4.0), (11, 5.0)]);
        assert_eq!(catalog[1].viewers(), &[(10, 2.0)]);
    }

    #[test]
    fn test_attach_viewers_computes_averages() {
        let mut catalog = vec![movie(1), movie(2)];
        let users = vec![
            User::with_watched(10, vec![WatchedMovie::new(1, 4.0)]),
            User::with_watched(11, vec![WatchedMovie::new(1, 5.0)]),
        ];

        attach_viewers(&mut catalog, &users);

        assert_eq!(catalog[0].average_rating(), 4.5);
        // Nobody watched movie 2.
        assert_eq!(catalog[1].average_rating(), 0.0);
    }

    #[test]
    fn test_attach_viewers_ignores_unknown_movies() {
        let mut catalog = vec![movie(1)];
        let users = vec![User::with_watched(10, vec![WatchedMovie::new(99, 4.0)])];

        attach_viewers(&mut catalog, &users);
        assert!(catalog[0].viewers().is_empty());
    }

    #[test]
    fn test_history_and_catalog_are_distinct_values() {
        let mut catalog = vec![movie(1)];
        let users = vec![User::with_watched(10, vec![WatchedMovie::new(1, 5.0)])];
        attach_viewers(&mut catalog, &users);

        // The catalog average and the user's own rating live in different
        // fields on different types.
        assert_eq!(catalog[0].average_rating(), 5.0);
        assert_eq!(users[0].rating_for(1), Some(5.0));
        assert_eq!(users[0].watched()[0].rating, 5.0);
    }

    #[test]
    fn test_user_lookup_helpers() {
        let user = User::with_watched(
            7,
            vec![WatchedMovie::new(3, 2.0), WatchedMovie::new(8, 4.0)],
        );
        assert!(user.has_watched(3));
        assert!(!user.has_watched(4));
        assert_eq!(user.rating_for(8), Some(4.0));
        assert_eq!(user.rating_for(4), None);
    }
}
