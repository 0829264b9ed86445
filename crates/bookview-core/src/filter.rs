//! Filter engine: title substring, author equality and genre membership.

use crate::book::{AuthorId, Book, GenreId};

/// Selector value used by the search form's author and genre fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<T> {
    /// Matches every book
    Any,
    /// Matches books carrying exactly this identifier
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::Any
    }
}

impl<T: for<'a> From<&'a str>> Selector<T> {
    /// Parse a form value. `"any"` (any case) and blank values mean [`Selector::Any`].
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("any") {
            Selector::Any
        } else {
            Selector::Only(T::from(value))
        }
    }
}

impl<T> Selector<T> {
    pub fn is_any(&self) -> bool {
        matches!(self, Selector::Any)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Selector::Any => None,
            Selector::Only(value) => Some(value),
        }
    }
}

/// Search criteria, built fresh from the form on every submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub title: String,
    pub author: Selector<AuthorId>,
    pub genre: Selector<GenreId>,
}

impl FilterCriteria {
    pub fn new(
        title: impl Into<String>,
        author: Selector<AuthorId>,
        genre: Selector<GenreId>,
    ) -> Self {
        Self {
            title: title.into(),
            author,
            genre,
        }
    }

    /// True when the criteria match every book
    pub fn is_default(&self) -> bool {
        self.title.trim().is_empty() && self.author.is_any() && self.genre.is_any()
    }

    /// Whether a single book satisfies all three predicates
    pub fn matches(&self, book: &Book) -> bool {
        TitleMatcher::new(&self.title).matches(&book.title) && self.matches_selectors(book)
    }

    /// Ordered subsequence of `books` matching the criteria
    pub fn apply(&self, books: &[Book]) -> ResultSet {
        let title = TitleMatcher::new(&self.title);
        let indices = books
            .iter()
            .enumerate()
            .filter(|(_, book)| title.matches(&book.title) && self.matches_selectors(book))
            .map(|(i, _)| i)
            .collect();
        ResultSet { indices }
    }

    fn matches_selectors(&self, book: &Book) -> bool {
        let author_ok = match &self.author {
            Selector::Any => true,
            Selector::Only(id) => &book.author == id,
        };
        let genre_ok = match &self.genre {
            Selector::Any => true,
            Selector::Only(id) => book.has_genre(id),
        };
        author_ok && genre_ok
    }
}

/// Case-insensitive substring matcher with the needle lowered once.
///
/// A whitespace-only title matches everything; any other title is matched
/// as typed, surrounding spaces included.
struct TitleMatcher {
    needle: Option<String>,
}

impl TitleMatcher {
    fn new(title: &str) -> Self {
        Self {
            needle: (!title.trim().is_empty()).then(|| title.to_lowercase()),
        }
    }

    fn matches(&self, haystack: &str) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => haystack.to_lowercase().contains(needle.as_str()),
        }
    }
}

/// Positions into the catalog's book list, in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    indices: Vec<usize>,
}

impl ResultSet {
    /// A result set containing every one of `len` books
    pub fn all(len: usize) -> Self {
        Self {
            indices: (0..len).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Catalog positions in `[start, end)`, clamped to the set
    pub fn slice(&self, start: usize, end: usize) -> &[usize] {
        let end = end.min(self.indices.len());
        let start = start.min(end);
        &self.indices[start..end]
    }
}
