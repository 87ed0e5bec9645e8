//! Sugerir: memory-based movie recommendations in pure Rust.
//!
//! Sugerir computes item-to-item and user-to-user similarity over a ratings
//! dataset and turns per-user watch histories into bounded top-N
//! recommendation lists. Everything is computed directly from vectors and
//! sets at query time; there is no model to train and no state to persist.
//!
//! # Quick Start
//!
//! ```
//! use sugerir::prelude::*;
//!
//! // A tiny catalog and two users.
//! let mut catalog = vec![
//!     CatalogMovie::new(1, "Heat", 1995,
//!         [Genre::Action].into_iter().collect::<GenreSet>()),
//!     CatalogMovie::new(2, "Rush Hour", 1998,
//!         [Genre::Action, Genre::Comedy].into_iter().collect::<GenreSet>()),
//!     CatalogMovie::new(3, "Clerks", 1994,
//!         [Genre::Comedy].into_iter().collect::<GenreSet>()),
//! ];
//! let users = vec![
//!     User::with_watched(1, vec![WatchedMovie::new(1, 5.0)]),
//!     User::with_watched(2, vec![
//!         WatchedMovie::new(1, 5.0),
//!         WatchedMovie::new(2, 5.0),
//!     ]),
//! ];
//! attach_viewers(&mut catalog, &users);
//!
//! // Movies most like Heat, by genre.
//! let similar = similar_movies(&catalog[0], &catalog, 2,
//!     Metric::Euclidean, MovieComparison::Genre);
//! assert_eq!(similar[0].title, "Rush Hour");
//!
//! // Movies for user 1, harvested from similar users' histories.
//! let recs = recommend_movies(&users[0], &users, &catalog, 2,
//!     Metric::Euclidean, MovieComparison::Genre);
//! assert_eq!(recs[0].title, "Rush Hour");
//! ```
//!
//! # Modules
//!
//! - [`dataset`]: entity types, the genre schema, and the MovieLens loader
//! - [`similarity`]: the five metrics and the three pairwise comparators
//! - [`recommend`]: candidate generation and top-N ranking
//! - [`error`]: error type and `Result` alias

pub mod dataset;
pub mod error;
pub mod prelude;
pub mod recommend;
pub mod similarity;

pub use error::{Result, SugerirError};
