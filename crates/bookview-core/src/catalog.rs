//! The book store: an immutable, validated set of book records plus the
//! author and genre lookup tables.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::book::{AuthorId, Book, BookId, GenreId};
use crate::prelude::*;

/// On-disk catalog layout
#[derive(Debug, Deserialize)]
struct CatalogFile {
    books: Vec<Book>,
    authors: BTreeMap<AuthorId, String>,
    #[serde(default)]
    genres: BTreeMap<GenreId, String>,
}

/// Immutable book store, owned for the lifetime of the process
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    authors: BTreeMap<AuthorId, String>,
    genres: BTreeMap<GenreId, String>,
    index: HashMap<BookId, usize>,
}

impl Catalog {
    /// Build a catalog, validating ids and author references.
    ///
    /// When `genres` is empty the genre table is derived from the genre ids
    /// present on the books, using the id as display name.
    pub fn new(
        books: Vec<Book>,
        authors: BTreeMap<AuthorId, String>,
        mut genres: BTreeMap<GenreId, String>,
    ) -> Result<Self> {
        if books.is_empty() {
            return Err(Error::catalog_invalid("catalog contains no books"));
        }

        let mut index = HashMap::with_capacity(books.len());
        for (i, book) in books.iter().enumerate() {
            if !authors.contains_key(&book.author) {
                return Err(Error::unknown_author(book.id.as_str(), book.author.as_str()));
            }
            if index.insert(book.id.clone(), i).is_some() {
                return Err(Error::duplicate_book(book.id.as_str()));
            }
        }

        if genres.is_empty() {
            for genre in books.iter().flat_map(|b| b.genres.iter()) {
                genres
                    .entry(genre.clone())
                    .or_insert_with(|| genre.to_string());
            }
        }

        Ok(Self {
            books,
            authors,
            genres,
            index,
        })
    }

    /// Parse a catalog from its JSON representation
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.books, file.authors, file.genres)
    }

    /// Load a catalog file from disk
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::catalog_not_found(path));
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let catalog = Self::from_json_str(&content)?;

        info!(
            "Loaded catalog from {}: {} books, {} authors, {} genres",
            path.display(),
            catalog.len(),
            catalog.authors.len(),
            catalog.genres.len()
        );
        Ok(catalog)
    }

    /// All books, in catalog order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Look up a book by id
    pub fn get(&self, id: &BookId) -> Option<&Book> {
        self.index.get(id).map(|&i| &self.books[i])
    }

    /// Book at a catalog position (as stored in a result set)
    pub fn book_at(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    pub fn author_name(&self, id: &AuthorId) -> Option<&str> {
        self.authors.get(id).map(String::as_str)
    }

    pub fn genre_name(&self, id: &GenreId) -> Option<&str> {
        self.genres.get(id).map(String::as_str)
    }

    pub fn authors(&self) -> &BTreeMap<AuthorId, String> {
        &self.authors
    }

    pub fn genres(&self) -> &BTreeMap<GenreId, String> {
        &self.genres
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_get_by_id() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get(&BookId::new("b2")).unwrap().title, "Mort");
        assert!(catalog.get(&BookId::new("missing")).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = Catalog::new(
            vec![book("b1", "One", "a1", &[]), book("b1", "Two", "a2", &[])],
            authors(),
            BTreeMap::new(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateBook { ref id } if id == "b1"));
    }

    #[test]
    fn test_unknown_author_rejected() {
        let err = Catalog::new(
            vec![book("b1", "One", "nobody", &[])],
            authors(),
            BTreeMap::new(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnknownAuthor { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = Catalog::new(Vec::new(), authors(), BTreeMap::new()).unwrap_err();
        assert!(matches!(err, Error::CatalogInvalid { .. }));
    }

    #[test]
    fn test_genres_derived_when_table_missing() {
        let catalog = sample_catalog();
        let ids: Vec<&str> = catalog.genres().keys().map(GenreId::as_str).collect();
        assert_eq!(ids, vec!["fantasy", "fiction", "scifi"]);
        assert_eq!(catalog.genre_name(&GenreId::new("scifi")), Some("scifi"));
    }

    #[test]
    fn test_from_json_str_with_genre_table() {
        let json = r#"{
            "books": [{"id":"b1","title":"Mort","author":"a2","genres":["fantasy"],"published":"1987-11-12T00:00:00Z"}],
            "authors": {"a2": "Terry Pratchett"},
            "genres": {"fantasy": "Fantasy"}
        }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.genre_name(&GenreId::new("fantasy")), Some("Fantasy"));
        assert_eq!(catalog.author_name(&AuthorId::new("a2")), Some("Terry Pratchett"));
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = Catalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("absent.json");
        let err = Catalog::load(&path).unwrap_err();
        assert!(matches!(err, Error::CatalogNotFound { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{"books":[{"id":"b1","title":"Mort","author":"a1","published":"1987-11-12T00:00:00Z"}],"authors":{"a1":"Terry Pratchett"}}"#,
        )
        .unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.book_at(0).unwrap().title, "Mort");
    }
}
