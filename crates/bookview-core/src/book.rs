//! Book records and their identifier types

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

string_id!(
    /// Unique identifier of a book record
    BookId
);
string_id!(
    /// Key into the author table
    AuthorId
);
string_id!(
    /// Key into the genre table
    GenreId
);

/// A single catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    /// Cover image reference (URL or path)
    #[serde(default)]
    pub image: String,
    pub author: AuthorId,
    #[serde(default)]
    pub genres: Vec<GenreId>,
    pub published: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

impl Book {
    pub fn publication_year(&self) -> i32 {
        self.published.year()
    }

    pub fn has_genre(&self, genre: &GenreId) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_deserializes_from_catalog_json() {
        let json = r#"{
            "id": "b1",
            "title": "The Hobbit",
            "image": "covers/b1.jpg",
            "author": "a1",
            "genres": ["fantasy", "fiction"],
            "published": "1937-09-21T00:00:00.000Z",
            "description": "There and back again."
        }"#;

        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.id, BookId::new("b1"));
        assert_eq!(book.author.as_str(), "a1");
        assert_eq!(book.publication_year(), 1937);
        assert!(book.has_genre(&GenreId::new("fiction")));
        assert!(!book.has_genre(&GenreId::new("horror")));
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{"id":"b2","title":"Untitled","author":"a1","published":"2001-01-01T00:00:00Z"}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert!(book.genres.is_empty());
        assert!(book.image.is_empty());
        assert!(book.description.is_empty());
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let json = r#"{"id":"b3","title":"X","author":"a1","published":"yesterday"}"#;
        assert!(serde_json::from_str::<Book>(json).is_err());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(GenreId::from("fiction").to_string(), "fiction");
    }
}
