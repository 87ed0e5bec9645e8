//! MovieLens-100k flat-file loader.
//!
//! The external data-access collaborator for the ranking core. Two files:
//!
//! - `u.item` — pipe-separated movie records. Field 0 is the id, field 1 is
//!   `"Title (YYYY)"`, and the last 18 fields are the 0/1 genre flag block
//!   in schema order.
//! - `u.data` — tab-separated `user  movie  rating  timestamp` lines, one
//!   observed rating each.
//!
//! Individually malformed lines are skipped rather than failing the whole
//! load; a missing or unreadable file is an error.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::dataset::{attach_viewers, CatalogMovie, GenreSet, MovieId, User, UserId, GENRE_COUNT};
use crate::error::Result;

/// A fully loaded ratings dataset: catalog with viewer lists and average
/// ratings attached, plus all users with their watch histories.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// The movie catalog.
    pub movies: Vec<CatalogMovie>,
    /// All users, sorted by id.
    pub users: Vec<User>,
}

/// Load a complete dataset from a MovieLens-100k directory containing
/// `u.item` and `u.data`.
///
/// Runs the full load phase: parse both files, drop ratings that reference
/// no catalog movie, attach viewer lists to the catalog, and compute
/// average ratings. After this the collections are ready for the ranking
/// engine and need no further mutation.
///
/// # Errors
///
/// Returns an error if either file cannot be opened or read.
pub fn load_dataset(dir: impl AsRef<Path>) -> Result<Dataset> {
    let dir = dir.as_ref();
    let mut movies = load_movies(dir.join("u.item"))?;
    let mut users = load_ratings(dir.join("u.data"))?;
    retain_known_movies(&mut users, &movies);
    attach_viewers(&mut movies, &users);
    Ok(Dataset { movies, users })
}

/// Drop watch-history entries whose movie is absent from the catalog.
///
/// A skipped `u.item` line would otherwise leave phantom ids in the
/// histories, where they count as co-rated movies and dilute the
/// recommenders' history means.
fn retain_known_movies(users: &mut [User], catalog: &[CatalogMovie]) {
    let known: HashSet<MovieId> = catalog.iter().map(CatalogMovie::id).collect();
    for user in users.iter_mut() {
        user.retain_watched(|entry| known.contains(&entry.movie));
    }
}

/// Parse `u.item` into catalog records (no viewers attached yet).
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read. Lines that do not
/// parse as a movie record are skipped.
pub fn load_movies(path: impl AsRef<Path>) -> Result<Vec<CatalogMovie>> {
    let reader = BufReader::new(File::open(path)?);
    let mut movies = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if let Some(movie) = parse_movie_line(&line) {
            movies.push(movie);
        }
    }

    Ok(movies)
}

/// Parse `u.data` into users with watch histories, sorted by user id.
///
/// Ratings for one user keep the file order, so a history reflects the
/// order the ratings were observed in. Malformed lines are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn load_ratings(path: impl AsRef<Path>) -> Result<Vec<User>> {
    let reader = BufReader::new(File::open(path)?);
    let mut histories: HashMap<UserId, User> = HashMap::new();

    for line in reader.lines() {
        let line = line?;
        let Some((user, movie, rating)) = parse_rating_line(&line) else {
            continue;
        };
        histories
            .entry(user)
            .or_insert_with(|| User::new(user))
            .add_watched(movie, rating);
    }

    let mut users: Vec<User> = histories.into_values().collect();
    users.sort_by_key(User::id);
    Ok(users)
}

fn parse_movie_line(line: &str) -> Option<CatalogMovie> {
    let fields: Vec<&str> = line.split('|').collect();
    // id, title, and the trailing genre block at minimum.
    if fields.len() < 2 + GENRE_COUNT {
        return None;
    }

    let id: MovieId = fields[0].trim().parse().ok()?;
    let (title, year) = split_title_year(fields[1])?;

    let flags: Vec<u8> = fields[fields.len() - GENRE_COUNT..]
        .iter()
        .map(|f| f.trim().parse::<u8>())
        .collect::<std::result::Result<_, _>>()
        .ok()?;
    let genres = GenreSet::from_flags(&flags).ok()?;

    Some(CatalogMovie::new(id, normalize_title(&title), year, genres))
}

fn parse_rating_line(line: &str) -> Option<(UserId, MovieId, f32)> {
    let mut fields = line.split('\t');
    let user: UserId = fields.next()?.trim().parse().ok()?;
    let movie: MovieId = fields.next()?.trim().parse().ok()?;
    let rating: f32 = fields.next()?.trim().parse().ok()?;
    Some((user, movie, rating))
}

/// Split `"Title (YYYY)"` into the bare title and the year.
fn split_title_year(raw: &str) -> Option<(String, u16)> {
    let raw = raw.trim();
    let open = raw.rfind('(')?;
    let year: u16 = raw[open + 1..].trim_end_matches(')').parse().ok()?;
    Some((raw[..open].trim_end().to_string(), year))
}

/// Move a trailing `", The"` article to the front: `"Net, The"` → `"The Net"`.
fn normalize_title(title: &str) -> String {
    match title.strip_suffix(", The") {
        Some(rest) => format!("The {rest}"),
        None => title.to_string(),
    }
}
