//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use sugerir::prelude::*;
//! ```

pub use crate::dataset::{
    attach_viewers, CatalogMovie, Genre, GenreSet, MovieId, User, UserId, WatchedMovie,
};
pub use crate::error::{Result, SugerirError};
pub use crate::recommend::{
    custom_recommend_movies, custom_similar_users, recommend_movies, similar_movies,
    similar_users, MovieComparison, Recommendation, UserMatch,
};
pub use crate::similarity::{
    compare_movies_by_genre, compare_movies_by_viewers, compare_users, Metric,
};
