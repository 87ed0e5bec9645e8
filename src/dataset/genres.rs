//! The fixed 18-category genre schema.
//!
//! MovieLens-style datasets tag every movie with a fixed-length 0/1 vector
//! over 18 genres. The index-to-name mapping is static; [`GenreSet`] stores
//! the flags compactly and can produce either the dense vector the numeric
//! metrics consume or the name list the Jaccard comparator consumes.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SugerirError};

/// Number of genre categories in the schema.
pub const GENRE_COUNT: usize = 18;

/// A movie genre category.
///
/// The discriminants match the column order of the genre flag block in the
/// dataset, so `Genre::ALL[i]` names flag position `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Childrens,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Fantasy,
    FilmNoir,
    Horror,
    Musical,
    Mystery,
    Romance,
    SciFi,
    Thriller,
    War,
    Western,
}

impl Genre {
    /// All genres in schema (column) order.
    pub const ALL: [Genre; GENRE_COUNT] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Animation,
        Genre::Childrens,
        Genre::Comedy,
        Genre::Crime,
        Genre::Documentary,
        Genre::Drama,
        Genre::Fantasy,
        Genre::FilmNoir,
        Genre::Horror,
        Genre::Musical,
        Genre::Mystery,
        Genre::Romance,
        Genre::SciFi,
        Genre::Thriller,
        Genre::War,
        Genre::Western,
    ];

    /// Position of this genre in the flag vector.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Genre at flag position `index`, or `None` past the schema.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Genre> {
        Self::ALL.get(index).copied()
    }

    /// Display name, as it appears in the dataset documentation.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Animation => "Animation",
            Genre::Childrens => "Children's",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Documentary => "Documentary",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::FilmNoir => "Film-Noir",
            Genre::Horror => "Horror",
            Genre::Musical => "Musical",
            Genre::Mystery => "Mystery",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
            Genre::Thriller => "Thriller",
            Genre::War => "War",
            Genre::Western => "Western",
        }
    }
}

/// Set of genres attached to one movie, stored as a bitset over the schema.
///
/// # Examples
///
/// ```
/// use sugerir::dataset::{Genre, GenreSet};
///
/// let mut genres = GenreSet::new();
/// genres.insert(Genre::Action);
/// genres.insert(Genre::Comedy);
///
/// assert!(genres.contains(Genre::Action));
/// assert_eq!(genres.len(), 2);
/// assert_eq!(genres.names(), vec!["Action", "Comedy"]);
///
/// let dense = genres.to_dense();
/// assert_eq!(dense[Genre::Action.index()], 1.0);
/// assert_eq!(dense[Genre::Drama.index()], 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenreSet {
    bits: u32,
}

impl GenreSet {
    /// Empty genre set.
    #[must_use]
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    /// Build a set from a 0/1 flag slice in schema order.
    ///
    /// Any non-zero flag counts as set, matching the dataset convention.
    ///
    /// # Errors
    ///
    /// Returns [`SugerirError::InvalidGenreVector`] if the slice is not
    /// exactly [`GENRE_COUNT`] long.
    pub fn from_flags(flags: &[u8]) -> Result<Self> {
        if flags.len() != GENRE_COUNT {
            return Err(SugerirError::InvalidGenreVector {
                expected: GENRE_COUNT,
                actual: flags.len(),
            });
        }
        let mut set = Self::new();
        for (i, &flag) in flags.iter().enumerate() {
            if flag != 0 {
                set.bits |= 1 << i;
            }
        }
        Ok(set)
    }

    /// Add a genre to the set.
    pub fn insert(&mut self, genre: Genre) {
        self.bits |= 1 << genre.index();
    }

    /// Whether the set contains `genre`.
    #[must_use]
    pub fn contains(self, genre: Genre) -> bool {
        self.bits & (1 << genre.index()) != 0
    }

    /// Number of genres in the set.
    #[must_use]
    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Iterate over the genres in schema order.
    pub fn iter(self) -> impl Iterator<Item = Genre> {
        Genre::ALL.into_iter().filter(move |g| self.contains(*g))
    }

    /// The dense 0/1 vector over the full schema, for the numeric metrics.
    #[must_use]
    pub fn to_dense(self) -> [f32; GENRE_COUNT] {
        let mut dense = [0.0; GENRE_COUNT];
        for genre in self.iter() {
            dense[genre.index()] = 1.0;
        }
        dense
    }

    /// Display names of the genres in the set, for the Jaccard comparator.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        self.iter().map(Genre::name).collect()
    }
}

impl FromIterator<Genre> for GenreSet {
    fn from_iter<I: IntoIterator<Item = Genre>>(iter: I) -> Self {
        let mut set = Self::new();
        for genre in iter {
            set.insert(genre);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_has_18_entries() {
        assert_eq!(Genre::ALL.len(), GENRE_COUNT);
        assert_eq!(GENRE_COUNT, 18);
    }

    #[test]
    fn test_index_name_round_trip() {
        for (i, genre) in Genre::ALL.iter().enumerate() {
            assert_eq!(genre.index(), i);
            assert_eq!(Genre::from_index(i), Some(*genre));
        }
        assert_eq!(Genre::from_index(18), None);
    }

    #[test]
    fn test_from_flags() {
        let mut flags = [0u8; GENRE_COUNT];
        flags[0] = 1; // Action
        flags[4] = 1; // Comedy
        let set = GenreSet::from_flags(&flags).unwrap();
        assert!(set.contains(Genre::Action));
        assert!(set.contains(Genre::Comedy));
        assert!(!set.contains(Genre::Drama));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_from_flags_wrong_length() {
        let err = GenreSet::from_flags(&[1, 0, 1]).unwrap_err();
        assert!(matches!(
            err,
            SugerirError::InvalidGenreVector {
                expected: 18,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_to_dense_matches_flags() {
        let mut flags = [0u8; GENRE_COUNT];
        flags[9] = 1; // Film-Noir
        flags[17] = 1; // Western
        let set = GenreSet::from_flags(&flags).unwrap();
        let dense = set.to_dense();
        for (i, &flag) in flags.iter().enumerate() {
            assert_eq!(dense[i], f32::from(flag));
        }
    }

    #[test]
    fn test_names_in_schema_order() {
        let set: GenreSet = [Genre::Western, Genre::Action, Genre::SciFi]
            .into_iter()
            .collect();
        assert_eq!(set.names(), vec!["Action", "Sci-Fi", "Western"]);
    }

    #[test]
    fn test_empty_set() {
        let set = GenreSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.names().is_empty());
        assert_eq!(set.to_dense(), [0.0; GENRE_COUNT]);
    }
}
